//! Native path primitive.

use kurbo::BezPath;
use serde::{Deserialize, Serialize};

/// A primitive that already carries its path representation.
///
/// Normalization passes the descriptor through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    /// The path commands.
    pub data: BezPath,
}

impl Path {
    /// Create a path primitive.
    pub fn new(data: BezPath) -> Self {
        Self { data }
    }

    /// Normalize into a path descriptor (identity).
    pub fn to_path(&self) -> BezPath {
        self.data.clone()
    }
}
