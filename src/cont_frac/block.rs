use num_traits::{CheckedAdd, CheckedMul, One, Zero};
use std::mem::swap;

/// The state of the convergent recurrence: the two latest convergents
/// `p_(k-1)/q_(k-1)` and `p_(k-2)/q_(k-2)`.
/// REF: <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone, Copy)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T> Block<T> {
    /// push the latest convergent to the block
    pub fn update(&mut self, p: T, q: T) {
        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p;
        self.qm1 = q;
    }
}

impl<T: Zero + One> Block<T> {
    /// create the seed block, `p_(-1)/q_(-1) = 1/0` and `p_(-2)/q_(-2) = 0/1`
    pub fn identity() -> Self {
        Block {
            pm1: T::one(),
            pm2: T::zero(),
            qm1: T::zero(),
            qm2: T::one(),
        }
    }
}

impl<T: CheckedAdd + CheckedMul> Block<T> {
    /// move with an coefficient from regular continued fraction,
    /// returns None on overflow
    pub fn checked_rmove(&self, a: &T) -> Option<(T, T)> {
        // p_k = a_k * p_(k-1) + p_(k-2)
        let p = a.checked_mul(&self.pm1)?.checked_add(&self.pm2)?;
        // q_k = a_k * q_(k-1) + q_(k-2)
        let q = a.checked_mul(&self.qm1)?.checked_add(&self.qm2)?;
        Some((p, q))
    }
}
