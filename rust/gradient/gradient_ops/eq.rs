use crate::gradient::sparse::SparseGradient;
use itertools::{EitherOrBoth, Itertools};

/// Measures value equivalence of `SparseGradient`.
///
/// Returns `true` if:
///
/// - `real` components are equal: `lhs.real == rhs.real`.
/// - derivatives are equal after aligning `vars`, an untracked variable counting as zero.
impl PartialEq<SparseGradient> for SparseGradient {
    fn eq(&self, other: &SparseGradient) -> bool {
        if self.real != other.real {
            false
        } else if self.vars == other.vars {
            self.dual.iter().eq(other.dual.iter())
        } else {
            self.iter()
                .merge_join_by(other.iter(), |(x, _), (y, _)| x.cmp(y))
                .all(|pair| match pair {
                    EitherOrBoth::Left((_, d)) | EitherOrBoth::Right((_, d)) => d == 0.0,
                    EitherOrBoth::Both((_, du), (_, dv)) => du == dv,
                })
        }
    }
}

impl PartialEq<f64> for SparseGradient {
    fn eq(&self, other: &f64) -> bool {
        SparseGradient::constant(*other) == *self
    }
}

impl PartialEq<SparseGradient> for f64 {
    fn eq(&self, other: &SparseGradient) -> bool {
        SparseGradient::constant(*self) == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::VariableId;

    #[test]
    fn eq_ne() {
        let d0 = SparseGradient::try_new(0., vec![VariableId(0)], vec![1.]).unwrap();
        let d1 = SparseGradient::try_new(0., vec![VariableId(0), VariableId(1)], vec![1., 0.])
            .unwrap();
        assert_eq!(d0, d1);
        let d2 = SparseGradient::try_new(0., vec![VariableId(1)], vec![1.]).unwrap();
        assert_ne!(d0, d2);
        let d3 = SparseGradient::try_new(1., vec![VariableId(0)], vec![1.]).unwrap();
        assert_ne!(d0, d3);
    }

    #[test]
    fn eq_f64() {
        let d = SparseGradient::try_new(3.0, vec![VariableId(1)], vec![0.0]).unwrap();
        assert!(d == 3.0_f64);
        assert!(3.0_f64 == d);
        assert!(SparseGradient::leaf(VariableId(1), 3.0) != 3.0_f64);
    }
}
