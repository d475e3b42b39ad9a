//! Point-in-region test.
//!
//! The only primitive geometric operation the layout engine depends on:
//! given a path descriptor and a point, is the point inside the region?

use kurbo::{BezPath, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Fill rule for deciding region interiors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    /// Non-zero winding number (default).
    #[default]
    NonZero,
    /// Odd winding number.
    EvenOdd,
}

/// Test whether a point lies inside the region described by `path`.
///
/// Pure function of its inputs; degenerate input (empty path, non-finite
/// point) answers `false` rather than failing.
pub fn contains(path: &BezPath, point: Point, fill_rule: FillRule) -> bool {
    if path.elements().is_empty() || !point.x.is_finite() || !point.y.is_finite() {
        return false;
    }
    let winding = path.winding(point);
    match fill_rule {
        FillRule::NonZero => winding != 0,
        FillRule::EvenOdd => winding % 2 != 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    fn rect_path(rect: Rect) -> BezPath {
        rect.to_path(0.1)
    }

    #[test]
    fn test_inside_and_outside() {
        let path = rect_path(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(contains(&path, Point::new(50.0, 50.0), FillRule::NonZero));
        assert!(!contains(&path, Point::new(150.0, 50.0), FillRule::NonZero));
        assert!(!contains(&path, Point::new(50.0, -1.0), FillRule::NonZero));
    }

    #[test]
    fn test_fill_rules_differ_on_nested_regions() {
        // Two same-direction nested rectangles: winding 2 in the inner one.
        let mut path = rect_path(Rect::new(0.0, 0.0, 100.0, 100.0));
        for el in rect_path(Rect::new(25.0, 25.0, 75.0, 75.0)).elements() {
            path.push(*el);
        }
        let inner = Point::new(50.0, 50.0);
        assert!(contains(&path, inner, FillRule::NonZero));
        assert!(!contains(&path, inner, FillRule::EvenOdd));
    }

    #[test]
    fn test_degenerate_input_is_false() {
        let empty = BezPath::new();
        assert!(!contains(&empty, Point::new(0.0, 0.0), FillRule::NonZero));

        let path = rect_path(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!contains(&path, Point::new(f64::NAN, 5.0), FillRule::NonZero));
    }
}
