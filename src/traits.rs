use num_rational::Ratio;

/// A rational value tagged with whether it is exact or only an approximation
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the inner value regardless of exactness
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

pub trait RationalApproximation<T> {
    /// Return the best rational representation of the number whose
    /// denominator does not exceed `limit`
    fn approx_rational(&self, limit: &T) -> Approximation<Ratio<T>>;
}
