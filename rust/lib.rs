//! This is the documentation for sparsegrad
//!
//! Forward mode automatic differentiation where every value tracks only the variables it
//! actually depends upon. See [gradient] for the architecture.


pub mod error;
pub use error::{GradientError, Result};

pub mod gradient;
pub use gradient::{IndexSet, MathFuncs, SparseGradient, VariableId};

pub mod json;
pub use json::JSON;

pub mod render;
pub use render::VariableNames;
