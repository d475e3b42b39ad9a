//! Rectangle primitive.

use kurbo::{BezPath, Point, Rect, RoundedRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A rectangle with optional rounded corners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Corner radius (0 = sharp corners).
    pub corner_radius: f64,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
            corner_radius: 0.0,
        }
    }

    /// Create a rectangle with rounded corners.
    pub fn rounded(position: Point, width: f64, height: f64, corner_radius: f64) -> Self {
        Self {
            position,
            width,
            height,
            corner_radius,
        }
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Normalize into a path descriptor.
    ///
    /// Rounded rectangles use the arc-per-corner decomposition.
    pub fn to_path(&self) -> BezPath {
        if self.corner_radius > 0.0 {
            let rounded = RoundedRect::from_rect(self.as_rect(), self.corner_radius);
            rounded.to_path(0.1)
        } else {
            self.as_rect().to_path(0.1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        assert!((rect.position.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 20.0).abs() < f64::EPSILON);
        assert!((rect.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_as_rect() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        let r = rect.as_rect();
        assert!((r.x1 - 110.0).abs() < f64::EPSILON);
        assert!((r.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sharp_and_rounded_paths() {
        let sharp = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0);
        assert!(!sharp.to_path().elements().is_empty());

        let rounded = Rectangle::rounded(Point::new(0.0, 0.0), 100.0, 100.0, 16.0);
        let path = rounded.to_path();
        assert!(!path.elements().is_empty());
        // The rounded decomposition carries more segments than the plain one.
        assert!(path.elements().len() > sharp.to_path().elements().len());
    }
}
