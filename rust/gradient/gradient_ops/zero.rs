use crate::gradient::sparse::SparseGradient;
use num_traits::{One, Zero};

impl Zero for SparseGradient {
    fn zero() -> SparseGradient {
        SparseGradient::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        *self == 0.0_f64
    }
}

impl One for SparseGradient {
    fn one() -> SparseGradient {
        SparseGradient::constant(1.0)
    }
}
