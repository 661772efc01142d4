//! Geometry error types

use std::fmt;

/// Error type for geometry construction
///
/// The transformation operations are total; only construction parameters
/// (edge length, copy count) can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A caller-supplied parameter is outside its valid domain
    InvalidParameter(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {}
