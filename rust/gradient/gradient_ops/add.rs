use crate::gradient::gradient_ops::zip::{zip_apply, zip_apply_scalar_rhs, AddRule};
use crate::gradient::sparse::SparseGradient;
use auto_ops::{impl_op_ex, impl_op_ex_commutative};

// Add
impl_op_ex_commutative!(+|a: &SparseGradient, b: &f64| -> SparseGradient {
    zip_apply_scalar_rhs(&AddRule, a, *b)
});

// impl Add for SparseGradient
impl_op_ex!(+|a: &SparseGradient, b: &SparseGradient| -> SparseGradient {
    zip_apply(&AddRule, a, b)
});
