use crate::gradient::gradient_ops::zip::{zip_apply, zip_apply_scalar_rhs, MulRule};
use crate::gradient::sparse::SparseGradient;
use auto_ops::{impl_op_ex, impl_op_ex_commutative};

// Mul
impl_op_ex_commutative!(*|a: &SparseGradient, b: &f64| -> SparseGradient {
    zip_apply_scalar_rhs(&MulRule, a, *b)
});

// impl Mul for SparseGradient
impl_op_ex!(*|a: &SparseGradient, b: &SparseGradient| -> SparseGradient {
    zip_apply(&MulRule, a, b)
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::VariableId;

    #[test]
    fn mul_f64() {
        let d1 = SparseGradient::try_new(1.0, vec![VariableId(0), VariableId(1)], vec![1.0, 2.0])
            .unwrap();
        let result = 10.0 * d1 * 2.0;
        let expected =
            SparseGradient::try_new(20.0, vec![VariableId(0), VariableId(1)], vec![20.0, 40.0])
                .unwrap();
        assert_eq!(result, expected)
    }

    #[test]
    fn mul() {
        let d1 = SparseGradient::try_new(1.0, vec![VariableId(0), VariableId(1)], vec![1.0, 2.0])
            .unwrap();
        let d2 = SparseGradient::try_new(2.0, vec![VariableId(0), VariableId(2)], vec![0.0, 3.0])
            .unwrap();
        let expected = SparseGradient::try_new(
            2.0,
            vec![VariableId(0), VariableId(1), VariableId(2)],
            vec![2.0, 4.0, 3.0],
        )
        .unwrap();
        let result = d1 * d2;
        assert_eq!(result, expected)
    }

    #[test]
    fn square() {
        let x = SparseGradient::leaf(VariableId(1), 3.0);
        let result = &x * &x;
        assert_eq!(result.value(), 9.0);
        assert_eq!(result.get(VariableId(1)).unwrap(), 6.0);
    }
}
