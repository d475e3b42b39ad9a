//! Polygon and polyline primitives.

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// A point sequence joined by straight segments.
///
/// Closed sequences are polygons; open ones are polylines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    /// Vertices in order.
    pub points: Vec<Point>,
    /// Whether the path closes back to the first vertex.
    pub closed: bool,
}

impl Polygon {
    /// Create a closed polygon.
    pub fn polygon(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Create an open polyline.
    pub fn polyline(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Normalize into a path descriptor.
    ///
    /// Fewer than two vertices cannot form a segment and yield an empty
    /// path, which excludes the primitive from the canvas.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if self.points.len() < 2 {
            return path;
        }
        path.move_to(self.points[0]);
        for &point in &self.points[1..] {
            path.line_to(point);
        }
        if self.closed {
            path.close_path();
        }
        path
    }
}
