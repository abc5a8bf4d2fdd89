//! Toolset for forward mode automatic differentiation (AD) over sparse variable sets.
//!
//! # AD Architecture
//!
//! A [SparseGradient] carries a real value and the partial derivatives of that value with
//! respect to only those variables it depends upon. Its *shape* is an [IndexSet]: a
//! strictly increasing sequence of [VariableId], shared by `Arc` between gradients that
//! have the same shape.
//!
//! Combining two gradients walks their shapes in lockstep (see [zip_apply]). The result
//! tracks the union of both shapes in ascending order, and a variable missing from one
//! operand contributes an implicit zero derivative on that side. The same walk applies
//! any [BinaryOperator]; the four arithmetic rules are provided and back the `+ - * /`
//! operators.
//!
//! ```rust
//! # use sparsegrad::gradient::{SparseGradient, VariableId};
//! let x = SparseGradient::seeded_leaf(VariableId(1), 7.0, 2.0);
//! let f = SparseGradient::try_new(1.0, vec![VariableId(2), VariableId(3)], vec![6.0, 7.0]).unwrap();
//! let g = &x * &f;
//! assert_eq!(g.value(), 7.0);
//! assert_eq!(g.get(VariableId(2)).unwrap(), 42.0);
//! ```

mod gradient_ops;
mod index_set;
mod sparse;

pub use crate::gradient::gradient_ops::math_funcs::{
    CosRule, ExpRule, LogRule, MathFuncs, PowfRule, SinRule, SqrtRule,
};
pub use crate::gradient::gradient_ops::zip::{
    map_apply, zip_apply, AddRule, BinaryOperator, DivRule, MulRule, SubRule, UnaryOperator,
};
pub use crate::gradient::index_set::{IndexSet, VariableId};
pub use crate::gradient::sparse::SparseGradient;

/// Utility for creating a run of consecutive variable ids starting at `first`.
pub fn variable_range(first: i64, count: usize) -> Vec<VariableId> {
    (0..count as i64).map(|i| VariableId(first + i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_range() {
        let result = variable_range(3, 3);
        assert_eq!(result, vec![VariableId(3), VariableId(4), VariableId(5)]);
    }
}
