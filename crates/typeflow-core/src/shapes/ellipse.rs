//! Ellipse primitive.

use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An ellipse, also covering circles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    /// Center point.
    pub center: Point,
    /// Horizontal radius.
    pub radius_x: f64,
    /// Vertical radius.
    pub radius_y: f64,
}

impl Ellipse {
    /// Create a new ellipse.
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    /// Create a circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::new(self.center, (self.radius_x, self.radius_y), 0.0)
    }

    /// Normalize into a path descriptor (arc decomposition).
    pub fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_is_symmetric() {
        let circle = Ellipse::circle(Point::new(0.0, 0.0), 10.0);
        assert!((circle.radius_x - circle.radius_y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_path_bounds() {
        let ellipse = Ellipse::new(Point::new(50.0, 50.0), 30.0, 20.0);
        let bounds = ellipse.to_path().bounding_box();
        assert!((bounds.x0 - 20.0).abs() < 0.5);
        assert!((bounds.y0 - 30.0).abs() < 0.5);
        assert!((bounds.x1 - 80.0).abs() < 0.5);
        assert!((bounds.y1 - 70.0).abs() < 0.5);
    }
}
