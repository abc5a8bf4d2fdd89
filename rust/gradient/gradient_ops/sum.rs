use crate::gradient::sparse::SparseGradient;
use std::iter::{Product, Sum};

impl Sum for SparseGradient {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = SparseGradient>,
    {
        iter.fold(SparseGradient::constant(0.0), |acc, x| acc + x)
    }
}

impl Product for SparseGradient {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = SparseGradient>,
    {
        iter.fold(SparseGradient::constant(1.0), |acc, x| acc * x)
    }
}
