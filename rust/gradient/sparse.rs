use crate::error::{GradientError, Result};
use crate::gradient::index_set::{IndexSet, VariableId};
use itertools::Itertools;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A value paired with its partial derivatives to a sparse set of variables.
///
/// `dual[k]` is the partial derivative with respect to the `k`-th id of `vars`. A variable
/// absent from `vars` has an implicit derivative of zero.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
#[serde(try_from = "GradientRepr")]
pub struct SparseGradient {
    pub(crate) real: f64,
    pub(crate) vars: IndexSet,
    pub(crate) dual: Array1<f64>,
}

/// Unvalidated wire form of a [SparseGradient].
#[derive(Deserialize)]
struct GradientRepr {
    real: f64,
    vars: IndexSet,
    dual: Array1<f64>,
}

impl TryFrom<GradientRepr> for SparseGradient {
    type Error = GradientError;

    fn try_from(value: GradientRepr) -> Result<Self> {
        if value.vars.len() != value.dual.len() {
            return Err(GradientError::LengthMismatch {
                vars: value.vars.len(),
                dual: value.dual.len(),
            });
        }
        Ok(Self::from_parts(value.real, value.vars, value.dual))
    }
}

impl SparseGradient {
    /// Constructs a leaf gradient for the variable `id` with a seed derivative of 1.0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sparsegrad::gradient::{SparseGradient, VariableId};
    /// let x = SparseGradient::leaf(VariableId(1), 7.0);
    /// assert_eq!(x.get(VariableId(1)).unwrap(), 1.0);
    /// ```
    pub fn leaf(id: VariableId, value: f64) -> Self {
        Self::seeded_leaf(id, value, 1.0)
    }

    /// Constructs a leaf gradient for the variable `id` with the given seed derivative.
    pub fn seeded_leaf(id: VariableId, value: f64, seed: f64) -> Self {
        Self {
            real: value,
            vars: IndexSet::singleton(id),
            dual: Array1::from_vec(vec![seed]),
        }
    }

    /// Constructs a value-only gradient, tracking no variables.
    pub fn constant(value: f64) -> Self {
        Self {
            real: value,
            vars: IndexSet::empty(),
            dual: Array1::zeros(0),
        }
    }

    /// Constructs a gradient from explicit derivatives.
    ///
    /// `vars` may be given in any order; entries are sorted by id together with their
    /// derivatives.
    ///
    /// # Errors
    ///
    /// If the length of `dual` and of `vars` are not the same, or if `vars` contains an
    /// id more than once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sparsegrad::gradient::{SparseGradient, VariableId};
    /// let e = SparseGradient::try_new(8.0, vec![VariableId(3), VariableId(1)], vec![5.0, 3.0]).unwrap();
    /// assert_eq!(e.derivatives().to_vec(), vec![3.0, 5.0]);
    /// ```
    pub fn try_new(real: f64, vars: Vec<VariableId>, dual: Vec<f64>) -> Result<Self> {
        if vars.len() != dual.len() {
            tracing::debug!(vars = vars.len(), dual = dual.len(), "rejected gradient");
            return Err(GradientError::LengthMismatch {
                vars: vars.len(),
                dual: dual.len(),
            });
        }
        let pairs: Vec<(VariableId, f64)> = vars
            .into_iter()
            .zip(dual)
            .sorted_by_key(|(id, _)| *id)
            .collect();
        if let Some((a, _)) = pairs.iter().tuple_windows().find(|(a, b)| a.0 == b.0) {
            tracing::debug!(id = %a.0, "rejected gradient with repeated variable");
            return Err(GradientError::DuplicateVariable(a.0));
        }
        let (ids, derivs): (Vec<VariableId>, Vec<f64>) = pairs.into_iter().unzip();
        Ok(Self::from_parts(
            real,
            IndexSet::from_sorted_unchecked(ids),
            Array1::from_vec(derivs),
        ))
    }

    /// Assemble a gradient from parts that are already aligned. Engine use only.
    pub(crate) fn from_parts(real: f64, vars: IndexSet, dual: Array1<f64>) -> Self {
        debug_assert_eq!(vars.len(), dual.len());
        Self { real, vars, dual }
    }

    /// Get the real component value of the struct.
    pub fn value(&self) -> f64 {
        self.real
    }

    /// The partial derivative with respect to `id`.
    ///
    /// # Errors
    ///
    /// [GradientError::UnknownVariable] if `id` is not tracked. Untracked variables are
    /// never reported as zero here.
    pub fn get(&self, id: VariableId) -> Result<f64> {
        Ok(self.dual[self.vars.index_of(id)?])
    }

    /// The tracked variables, in ascending order.
    pub fn variables(&self) -> &IndexSet {
        &self.vars
    }

    /// The derivatives, positionally aligned with [SparseGradient::variables].
    pub fn derivatives(&self) -> &Array1<f64> {
        &self.dual
    }

    /// Iterate `(id, derivative)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, f64)> + '_ {
        self.vars.iter().zip(self.dual.iter().copied())
    }

    /// Return a set of first order gradients ordered by the given ids.
    ///
    /// Unlike [SparseGradient::get] this fills untracked variables with zero.
    pub fn gradient(&self, vars: &[VariableId]) -> Array1<f64> {
        Array1::from_iter(vars.iter().map(|id| match self.vars.index_of(*id) {
            Ok(idx) => self.dual[idx],
            Err(_) => 0.0_f64,
        }))
    }
}
