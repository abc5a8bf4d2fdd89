use crate::gradient::sparse::SparseGradient;

impl From<SparseGradient> for f64 {
    fn from(value: SparseGradient) -> Self {
        value.real
    }
}

impl From<&SparseGradient> for f64 {
    fn from(value: &SparseGradient) -> Self {
        value.real
    }
}

impl From<f64> for SparseGradient {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::VariableId;

    #[test]
    fn from_f64() {
        let g = SparseGradient::from(2.5);
        assert_eq!(g.value(), 2.5);
        assert!(g.variables().is_empty());
    }

    #[test]
    fn into_f64() {
        let g = SparseGradient::leaf(VariableId(2), 4.5);
        let f: f64 = (&g).into();
        assert_eq!(f, 4.5);
        assert_eq!(f64::from(g), 4.5);
    }
}
