use crate::error::{GradientError, Result};
use indexmap::set::IndexSet as IdSet;
use itertools::{EitherOrBoth, Itertools};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An opaque, totally ordered identifier for a differentiation variable.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VariableId(pub i64);

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VariableId {
    fn from(value: i64) -> Self {
        VariableId(value)
    }
}

/// The shape of a gradient: a strictly increasing sequence of [VariableId].
///
/// The ids are held behind an `Arc` so that gradients derived from one another can share
/// their shape without copying. An `IndexSet` is never mutated after construction.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<VariableId>", into = "Vec<VariableId>")]
pub struct IndexSet {
    ids: Arc<IdSet<VariableId>>,
}

impl IndexSet {
    /// The shape of a value-only gradient.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A shape tracking exactly one variable.
    pub fn singleton(id: VariableId) -> Self {
        Self {
            ids: Arc::new(IdSet::from_iter([id])),
        }
    }

    /// Construct from a sequence that must already be strictly increasing.
    ///
    /// # Errors
    ///
    /// [GradientError::InvariantViolation] if any element is not greater than its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sparsegrad::gradient::{IndexSet, VariableId};
    /// assert!(IndexSet::try_from_sorted(vec![VariableId(1), VariableId(3)]).is_ok());
    /// assert!(IndexSet::try_from_sorted(vec![VariableId(3), VariableId(1)]).is_err());
    /// ```
    pub fn try_from_sorted(ids: Vec<VariableId>) -> Result<Self> {
        if let Some((a, b)) = ids.iter().tuple_windows().find(|(a, b)| a >= b) {
            tracing::debug!(prev = %a, next = %b, "rejected unsorted variable sequence");
            return Err(GradientError::InvariantViolation(format!(
                "variable {} does not precede {}",
                a, b
            )));
        }
        Ok(Self::from_sorted_unchecked(ids))
    }

    /// Construct from ids the caller guarantees to be strictly increasing.
    pub(crate) fn from_sorted_unchecked<I: IntoIterator<Item = VariableId>>(ids: I) -> Self {
        let ids: IdSet<VariableId> = ids.into_iter().collect();
        debug_assert!(
            ids.iter().tuple_windows().all(|(a, b)| a < b),
            "variable ids must be strictly increasing"
        );
        Self { ids: Arc::new(ids) }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: VariableId) -> bool {
        self.ids.contains(&id)
    }

    /// Position of `id` within the shape.
    ///
    /// # Errors
    ///
    /// [GradientError::UnknownVariable] if `id` is not tracked.
    pub fn index_of(&self, id: VariableId) -> Result<usize> {
        self.ids
            .get_index_of(&id)
            .ok_or(GradientError::UnknownVariable(id))
    }

    /// Iterate the ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.ids.iter().copied()
    }

    /// Compare if two shapes share the same Arc pointer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ids, &other.ids)
    }

    /// The sorted union of two shapes.
    ///
    /// A shared id yields exactly one output entry. When one shape already contains the
    /// other, the containing shape's Arc pointer is reused.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sparsegrad::gradient::{IndexSet, VariableId};
    /// let a = IndexSet::try_from_sorted(vec![VariableId(1), VariableId(4)]).unwrap();
    /// let b = IndexSet::try_from_sorted(vec![VariableId(2), VariableId(4)]).unwrap();
    /// let c: Vec<i64> = a.union(&b).iter().map(|id| id.0).collect();
    /// assert_eq!(c, vec![1, 2, 4]);
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        if self.ptr_eq(other) {
            return self.clone();
        }
        let merged: Vec<VariableId> = self
            .iter()
            .merge_join_by(other.iter(), |a, b| a.cmp(b))
            .map(|pair| match pair {
                EitherOrBoth::Left(a) | EitherOrBoth::Both(a, _) => a,
                EitherOrBoth::Right(b) => b,
            })
            .collect();
        self.reuse_or_build(other, merged)
    }

    /// Wrap the result of a merge of `self` and `other`, sharing an operand's pointer when
    /// the merge added nothing to it.
    pub(crate) fn reuse_or_build(&self, other: &Self, merged: Vec<VariableId>) -> Self {
        if merged.len() == self.len() {
            self.clone()
        } else if merged.len() == other.len() {
            other.clone()
        } else {
            Self::from_sorted_unchecked(merged)
        }
    }
}

impl PartialEq for IndexSet {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl Eq for IndexSet {}

impl From<VariableId> for IndexSet {
    fn from(value: VariableId) -> Self {
        Self::singleton(value)
    }
}

impl TryFrom<Vec<VariableId>> for IndexSet {
    type Error = GradientError;

    fn try_from(value: Vec<VariableId>) -> Result<Self> {
        Self::try_from_sorted(value)
    }
}

impl From<IndexSet> for Vec<VariableId> {
    fn from(value: IndexSet) -> Self {
        value.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[i64]) -> IndexSet {
        IndexSet::try_from_sorted(ids.iter().map(|i| VariableId(*i)).collect()).unwrap()
    }

    fn raw(s: &IndexSet) -> Vec<i64> {
        s.iter().map(|id| id.0).collect()
    }

    #[test]
    fn empty_and_singleton() {
        assert!(IndexSet::empty().is_empty());
        let s = IndexSet::singleton(VariableId(3));
        assert_eq!(raw(&s), vec![3]);
        assert_eq!(s.index_of(VariableId(3)).unwrap(), 0);
    }

    #[test]
    fn rejects_unsorted_and_duplicates() {
        assert!(matches!(
            IndexSet::try_from_sorted(vec![VariableId(2), VariableId(1)]),
            Err(GradientError::InvariantViolation(_))
        ));
        assert!(matches!(
            IndexSet::try_from_sorted(vec![VariableId(2), VariableId(2)]),
            Err(GradientError::InvariantViolation(_))
        ));
    }

    #[test]
    fn index_of_unknown() {
        let s = set(&[1, 5, 9]);
        assert_eq!(s.index_of(VariableId(9)).unwrap(), 2);
        assert!(matches!(
            s.index_of(VariableId(4)),
            Err(GradientError::UnknownVariable(VariableId(4)))
        ));
    }

    #[test]
    fn union_interleaved() {
        let a = set(&[1, 3, 5, 7]);
        let b = set(&[2, 3, 6, 7, 8]);
        assert_eq!(raw(&a.union(&b)), vec![1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_disjoint_length() {
        let a = set(&[1, 2]);
        let b = set(&[10, 11, 12]);
        assert_eq!(a.union(&b).len(), a.len() + b.len());
    }

    #[test]
    fn union_with_empty() {
        let a = set(&[4, 8]);
        let e = IndexSet::empty();
        assert!(a.union(&e).ptr_eq(&a));
        assert!(e.union(&a).ptr_eq(&a));
        assert!(e.union(&IndexSet::empty()).is_empty());
    }

    #[test]
    fn union_reuses_superset_pointer() {
        let a = set(&[1, 2, 3]);
        let b = set(&[2]);
        assert!(a.union(&b).ptr_eq(&a));
        assert!(b.union(&a).ptr_eq(&a));
    }

    #[test]
    fn equality_is_sequence_identity() {
        assert_eq!(set(&[1, 2]), set(&[1, 2]));
        assert_ne!(set(&[1, 2]), set(&[1, 3]));
        assert_ne!(set(&[1]), set(&[1, 2]));
    }
}
