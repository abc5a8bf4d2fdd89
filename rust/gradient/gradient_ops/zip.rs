//! The zip-apply engine and the differentiation rules it is parameterised by.

use crate::gradient::index_set::VariableId;
use crate::gradient::sparse::SparseGradient;
use itertools::{EitherOrBoth, Itertools};
use ndarray::{Array1, Zip};

/// A differentiation rule for a function of two operands.
///
/// `value` combines the two real components; `derivative` combines a `(value, derivative)`
/// pair from each side into the partial derivative of the result for one variable.
pub trait BinaryOperator {
    /// Short label used in diagnostics.
    fn name(&self) -> &'static str;
    fn value(&self, u: f64, v: f64) -> f64;
    fn derivative(&self, u: f64, du: f64, v: f64, dv: f64) -> f64;
}

/// A differentiation rule for a function of one operand.
///
/// `derivative` receives the operand's value and one of its partial derivatives and
/// returns the chained partial derivative of the result.
pub trait UnaryOperator {
    fn name(&self) -> &'static str;
    fn value(&self, u: f64) -> f64;
    fn derivative(&self, u: f64, du: f64) -> f64;
}

/// Sum rule.
#[derive(Copy, Clone, Debug, Default)]
pub struct AddRule;

/// Difference rule.
#[derive(Copy, Clone, Debug, Default)]
pub struct SubRule;

/// Product rule.
#[derive(Copy, Clone, Debug, Default)]
pub struct MulRule;

/// Quotient rule.
#[derive(Copy, Clone, Debug, Default)]
pub struct DivRule;

impl BinaryOperator for AddRule {
    fn name(&self) -> &'static str {
        "add"
    }
    fn value(&self, u: f64, v: f64) -> f64 {
        u + v
    }
    fn derivative(&self, _u: f64, du: f64, _v: f64, dv: f64) -> f64 {
        du + dv
    }
}

impl BinaryOperator for SubRule {
    fn name(&self) -> &'static str {
        "sub"
    }
    fn value(&self, u: f64, v: f64) -> f64 {
        u - v
    }
    fn derivative(&self, _u: f64, du: f64, _v: f64, dv: f64) -> f64 {
        du - dv
    }
}

impl BinaryOperator for MulRule {
    fn name(&self) -> &'static str {
        "mul"
    }
    fn value(&self, u: f64, v: f64) -> f64 {
        u * v
    }
    fn derivative(&self, u: f64, du: f64, v: f64, dv: f64) -> f64 {
        u * dv + v * du
    }
}

impl BinaryOperator for DivRule {
    fn name(&self) -> &'static str {
        "div"
    }
    fn value(&self, u: f64, v: f64) -> f64 {
        u / v
    }
    fn derivative(&self, u: f64, du: f64, v: f64, dv: f64) -> f64 {
        (v * du - u * dv) / (v * v)
    }
}

/// Apply a binary rule to two gradients, producing a gradient over the union of their
/// variables.
///
/// The value rule is evaluated once. The two shapes are walked in lockstep and the
/// derivative rule is evaluated for every variable present on either side, with zero
/// standing in for the side that does not track it. The output shape is ascending.
///
/// # Examples
///
/// ```rust
/// # use sparsegrad::gradient::{zip_apply, MulRule, SparseGradient, VariableId};
/// let x = SparseGradient::leaf(VariableId(1), 3.0);
/// let y = SparseGradient::leaf(VariableId(2), 4.0);
/// let z = zip_apply(&MulRule, &x, &y);
/// assert_eq!(z.value(), 12.0);
/// assert_eq!(z.get(VariableId(1)).unwrap(), 4.0);
/// assert_eq!(z.get(VariableId(2)).unwrap(), 3.0);
/// ```
pub fn zip_apply<O: BinaryOperator + ?Sized>(
    op: &O,
    a: &SparseGradient,
    b: &SparseGradient,
) -> SparseGradient {
    let (u, v) = (a.real, b.real);
    let real = op.value(u, v);

    if a.vars == b.vars {
        let dual = Zip::from(&a.dual)
            .and(&b.dual)
            .map_collect(|&du, &dv| op.derivative(u, du, v, dv));
        tracing::trace!(op = op.name(), vars = a.vars.len(), "zip-apply on aligned shapes");
        return SparseGradient::from_parts(real, a.vars.clone(), dual);
    }

    let capacity = a.vars.len() + b.vars.len();
    let mut ids: Vec<VariableId> = Vec::with_capacity(capacity);
    let mut dual: Vec<f64> = Vec::with_capacity(capacity);
    for pair in a.iter().merge_join_by(b.iter(), |(x, _), (y, _)| x.cmp(y)) {
        let (id, d) = match pair {
            EitherOrBoth::Left((id, du)) => (id, op.derivative(u, du, v, 0.0)),
            EitherOrBoth::Both((id, du), (_, dv)) => (id, op.derivative(u, du, v, dv)),
            EitherOrBoth::Right((id, dv)) => (id, op.derivative(u, 0.0, v, dv)),
        };
        ids.push(id);
        dual.push(d);
    }
    tracing::trace!(
        op = op.name(),
        lhs = a.vars.len(),
        rhs = b.vars.len(),
        out = ids.len(),
        "zip-apply on merged shapes"
    );
    let vars = a.vars.reuse_or_build(&b.vars, ids);
    SparseGradient::from_parts(real, vars, Array1::from_vec(dual))
}

/// Apply a binary rule with a plain scalar as the right operand.
///
/// Equivalent to [zip_apply] against a value-only gradient; the shape of `a` is kept.
pub(crate) fn zip_apply_scalar_rhs<O: BinaryOperator + ?Sized>(
    op: &O,
    a: &SparseGradient,
    v: f64,
) -> SparseGradient {
    let u = a.real;
    SparseGradient::from_parts(
        op.value(u, v),
        a.vars.clone(),
        a.dual.mapv(|du| op.derivative(u, du, v, 0.0)),
    )
}

/// Apply a binary rule with a plain scalar as the left operand.
pub(crate) fn zip_apply_scalar_lhs<O: BinaryOperator + ?Sized>(
    op: &O,
    u: f64,
    b: &SparseGradient,
) -> SparseGradient {
    let v = b.real;
    SparseGradient::from_parts(
        op.value(u, v),
        b.vars.clone(),
        b.dual.mapv(|dv| op.derivative(u, 0.0, v, dv)),
    )
}

/// Apply a unary rule to every tracked derivative, keeping the shape.
pub fn map_apply<O: UnaryOperator + ?Sized>(op: &O, a: &SparseGradient) -> SparseGradient {
    let u = a.real;
    SparseGradient::from_parts(
        op.value(u),
        a.vars.clone(),
        a.dual.mapv(|du| op.derivative(u, du)),
    )
}
