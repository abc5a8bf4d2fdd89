//! Text rendering of gradients, with an optional naming table for variables.

use crate::gradient::{SparseGradient, VariableId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Maps [VariableId] to human readable names.
///
/// Ids without an entry are named by their decimal form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableNames {
    names: IndexMap<VariableId, String>,
}

impl VariableNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style [VariableNames::insert].
    pub fn with(mut self, id: VariableId, name: &str) -> Self {
        self.insert(id, name);
        self
    }

    /// Set the name of `id`, returning any previous name.
    pub fn insert(&mut self, id: VariableId, name: &str) -> Option<String> {
        self.names.insert(id, name.to_string())
    }

    pub fn name(&self, id: VariableId) -> Cow<'_, str> {
        match self.names.get(&id) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(id.to_string()),
        }
    }

    /// Render `gradient` using these names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sparsegrad::gradient::{SparseGradient, VariableId};
    /// # use sparsegrad::render::VariableNames;
    /// let names = VariableNames::new().with(VariableId(1), "x");
    /// let d = SparseGradient::seeded_leaf(VariableId(1), 7.0, 2.0);
    /// assert_eq!(names.render(&d), "Value = 7\n  d/dx = 2\n");
    /// ```
    pub fn render(&self, gradient: &SparseGradient) -> String {
        Rendered {
            gradient,
            names: self,
        }
        .to_string()
    }
}

impl<'a> FromIterator<(VariableId, &'a str)> for VariableNames {
    fn from_iter<T: IntoIterator<Item = (VariableId, &'a str)>>(iter: T) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(id, name)| (id, name.to_string()))
                .collect(),
        }
    }
}

struct Rendered<'a> {
    gradient: &'a SparseGradient,
    names: &'a VariableNames,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Value = {}", self.gradient.value())?;
        for (id, d) in self.gradient.iter() {
            writeln!(f, "  d/d{} = {}", self.names.name(id), d)?;
        }
        Ok(())
    }
}

impl fmt::Display for SparseGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered {
            gradient: self,
            names: &VariableNames::default(),
        }
        .fmt(f)
    }
}
