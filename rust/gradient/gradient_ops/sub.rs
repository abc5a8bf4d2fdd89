use crate::gradient::gradient_ops::zip::{
    zip_apply, zip_apply_scalar_lhs, zip_apply_scalar_rhs, SubRule,
};
use crate::gradient::sparse::SparseGradient;
use auto_ops::impl_op_ex;

// Sub
impl_op_ex!(-|a: &SparseGradient, b: &f64| -> SparseGradient {
    zip_apply_scalar_rhs(&SubRule, a, *b)
});
impl_op_ex!(-|a: &f64, b: &SparseGradient| -> SparseGradient {
    zip_apply_scalar_lhs(&SubRule, *a, b)
});

// impl Sub for SparseGradient
impl_op_ex!(-|a: &SparseGradient, b: &SparseGradient| -> SparseGradient {
    zip_apply(&SubRule, a, b)
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::VariableId;
    use ndarray::Array1;

    #[test]
    fn sub_f64() {
        let d1 = SparseGradient::try_new(1.0, vec![VariableId(0), VariableId(1)], vec![1.0, 2.0])
            .unwrap();
        let result = (10.0 - d1) - 15.0;
        assert_eq!(result.value(), -6.0);
        assert_eq!(result.derivatives(), &Array1::from_vec(vec![-1.0, -2.0]));
    }

    #[test]
    fn sub() {
        let d1 = SparseGradient::try_new(1.0, vec![VariableId(0), VariableId(1)], vec![1.0, 2.0])
            .unwrap();
        let d2 = SparseGradient::try_new(2.0, vec![VariableId(0), VariableId(2)], vec![0.0, 3.0])
            .unwrap();
        let expected = SparseGradient::try_new(
            -1.0,
            vec![VariableId(0), VariableId(1), VariableId(2)],
            vec![1.0, 2.0, -3.0],
        )
        .unwrap();
        let result = d1 - d2;
        assert_eq!(result, expected)
    }
}
