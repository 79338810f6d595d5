//! Simple continued fraction expansion of floating point numbers and
//! the convergents derived from it.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>

mod block;
mod simple;

pub use simple::*;
