use crate::gradient::gradient_ops::zip::{map_apply, UnaryOperator};
use crate::gradient::sparse::SparseGradient;

/// Functions for common mathematical operations.
pub trait MathFuncs {
    /// Return the exponential of a value.
    fn exp(&self) -> Self;
    /// Return the natural logarithm of a value.
    fn log(&self) -> Self;
    fn sin(&self) -> Self;
    fn cos(&self) -> Self;
    fn sqrt(&self) -> Self;
    /// Raise a value to a constant power.
    fn powf(&self, power: f64) -> Self;
}

#[derive(Copy, Clone, Debug)]
pub struct ExpRule;

#[derive(Copy, Clone, Debug)]
pub struct LogRule;

#[derive(Copy, Clone, Debug)]
pub struct SinRule;

#[derive(Copy, Clone, Debug)]
pub struct CosRule;

#[derive(Copy, Clone, Debug)]
pub struct SqrtRule;

/// `u^c` for a constant exponent `c`.
#[derive(Copy, Clone, Debug)]
pub struct PowfRule(pub f64);

impl UnaryOperator for ExpRule {
    fn name(&self) -> &'static str {
        "exp"
    }
    fn value(&self, u: f64) -> f64 {
        u.exp()
    }
    fn derivative(&self, u: f64, du: f64) -> f64 {
        u.exp() * du
    }
}

impl UnaryOperator for LogRule {
    fn name(&self) -> &'static str {
        "log"
    }
    fn value(&self, u: f64) -> f64 {
        u.ln()
    }
    fn derivative(&self, u: f64, du: f64) -> f64 {
        du / u
    }
}

impl UnaryOperator for SinRule {
    fn name(&self) -> &'static str {
        "sin"
    }
    fn value(&self, u: f64) -> f64 {
        u.sin()
    }
    fn derivative(&self, u: f64, du: f64) -> f64 {
        u.cos() * du
    }
}

impl UnaryOperator for CosRule {
    fn name(&self) -> &'static str {
        "cos"
    }
    fn value(&self, u: f64) -> f64 {
        u.cos()
    }
    fn derivative(&self, u: f64, du: f64) -> f64 {
        -u.sin() * du
    }
}

impl UnaryOperator for SqrtRule {
    fn name(&self) -> &'static str {
        "sqrt"
    }
    fn value(&self, u: f64) -> f64 {
        u.sqrt()
    }
    fn derivative(&self, u: f64, du: f64) -> f64 {
        du / (2.0 * u.sqrt())
    }
}

impl UnaryOperator for PowfRule {
    fn name(&self) -> &'static str {
        "powf"
    }
    fn value(&self, u: f64) -> f64 {
        u.powf(self.0)
    }
    fn derivative(&self, u: f64, du: f64) -> f64 {
        self.0 * u.powf(self.0 - 1.0) * du
    }
}

impl MathFuncs for SparseGradient {
    fn exp(&self) -> Self {
        map_apply(&ExpRule, self)
    }
    fn log(&self) -> Self {
        map_apply(&LogRule, self)
    }
    fn sin(&self) -> Self {
        map_apply(&SinRule, self)
    }
    fn cos(&self) -> Self {
        map_apply(&CosRule, self)
    }
    fn sqrt(&self) -> Self {
        map_apply(&SqrtRule, self)
    }
    fn powf(&self, power: f64) -> Self {
        map_apply(&PowfRule(power), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::VariableId;
    use approx::assert_relative_eq;

    fn x(value: f64) -> SparseGradient {
        SparseGradient::seeded_leaf(VariableId(1), value, 2.0)
    }

    #[test]
    fn exp() {
        let r = x(1.5).exp();
        assert_relative_eq!(r.value(), 1.5_f64.exp());
        assert_relative_eq!(r.get(VariableId(1)).unwrap(), 2.0 * 1.5_f64.exp());
    }

    #[test]
    fn log() {
        let r = x(4.0).log();
        assert_relative_eq!(r.value(), 4.0_f64.ln());
        assert_relative_eq!(r.get(VariableId(1)).unwrap(), 0.5);
    }

    #[test]
    fn sin_cos() {
        let s = x(0.3).sin();
        let c = x(0.3).cos();
        assert_relative_eq!(s.get(VariableId(1)).unwrap(), 2.0 * 0.3_f64.cos());
        assert_relative_eq!(c.get(VariableId(1)).unwrap(), -2.0 * 0.3_f64.sin());
    }

    #[test]
    fn sqrt() {
        let r = x(9.0).sqrt();
        assert_relative_eq!(r.value(), 3.0);
        assert_relative_eq!(r.get(VariableId(1)).unwrap(), 2.0 / 6.0);
    }

    #[test]
    fn powf_matches_mul() {
        let a = x(3.0);
        let r = a.powf(2.0);
        let m = &a * &a;
        assert_relative_eq!(r.value(), m.value());
        assert_relative_eq!(
            r.get(VariableId(1)).unwrap(),
            m.get(VariableId(1)).unwrap()
        );
    }

    #[test]
    fn keeps_shape() {
        let g = SparseGradient::try_new(2.0, vec![VariableId(1), VariableId(5)], vec![1.0, 0.0])
            .unwrap();
        let r = g.exp();
        assert!(r.variables().ptr_eq(g.variables()));
        assert_eq!(r.get(VariableId(5)).unwrap(), 0.0);
    }
}
