use crate::gradient::gradient_ops::zip::{
    zip_apply, zip_apply_scalar_lhs, zip_apply_scalar_rhs, DivRule,
};
use crate::gradient::sparse::SparseGradient;
use auto_ops::impl_op_ex;

impl_op_ex!(/ |a: &SparseGradient, b: &f64| -> SparseGradient { zip_apply_scalar_rhs(&DivRule, a, *b) });
impl_op_ex!(/ |a: &f64, b: &SparseGradient| -> SparseGradient { zip_apply_scalar_lhs(&DivRule, *a, b) });

// impl Div for SparseGradient
impl_op_ex!(/ |a: &SparseGradient, b: &SparseGradient| -> SparseGradient { zip_apply(&DivRule, a, b) });
