//! Allows serialization and deserialization to JSON, with the ``serde`` crate.

use crate::error::Result;
use crate::gradient::{IndexSet, SparseGradient};
use crate::render::VariableNames;
use serde::{Deserialize, Serialize};

/// Handles the `to` and `from` JSON conversion.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Create an object from a JSON string representation.
    ///
    /// Shapes are validated on the way in; an unsorted variable sequence or a length
    /// mismatch is rejected.
    fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl JSON for IndexSet {}
impl JSON for SparseGradient {}
impl JSON for VariableNames {}
