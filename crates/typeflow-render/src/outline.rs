//! Outline-text layout.
//!
//! Sizes a repeated copy of the text to cover a shape's perimeter, for
//! text-on-a-path rendering.

use crate::metrics::GlyphMetrics;
use kurbo::{BezPath, Shape as KurboShape};
use typeflow_core::Shape;

/// Accuracy for the perimeter estimate.
const PERIMETER_ACCURACY: f64 = 0.1;

/// Extra repetitions past the estimate, guaranteeing coverage even with
/// estimation error.
const REPEAT_MARGIN: usize = 2;

/// An outline layout: the tiled text plus the path it flows along.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineLayout {
    /// The text, repeated enough times to cover the perimeter.
    pub repeated: String,
    /// The path the text flows along.
    pub path: BezPath,
}

/// Lay out a shape's text along its outline.
///
/// Returns `None` for empty text. When the perimeter or the base text
/// width cannot be determined, falls back to a single untiled repetition.
pub fn layout_outline_text(shape: &Shape, metrics: &mut GlyphMetrics) -> Option<OutlineLayout> {
    let config = &shape.text;
    if config.content.is_empty() {
        return None;
    }

    let perimeter = shape.path().perimeter(PERIMETER_ACCURACY);

    // One repetition's width: advances plus full tracking units per glyph.
    let mut one_rep_width = 0.0;
    for ch in config.content.chars() {
        one_rep_width += metrics.advance_width(
            ch,
            &config.font_family,
            config.font_size,
            config.font_weight,
        ) + config.tracking;
    }

    let repeats = if perimeter.is_finite() && perimeter > 0.0 && one_rep_width > 0.0 {
        ((perimeter / one_rep_width).ceil() as usize + REPEAT_MARGIN).max(1)
    } else {
        log::warn!(
            "perimeter estimate unavailable for shape {}, using a single repetition",
            shape.id()
        );
        1
    };

    Some(OutlineLayout {
        repeated: config.content.repeat(repeats),
        path: shape.path().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FontStore;
    use kurbo::Point;
    use typeflow_core::shapes::{Path, Primitive, Rectangle, Shape};

    fn test_metrics() -> GlyphMetrics {
        GlyphMetrics::with_store(FontStore::empty())
    }

    fn square_shape(side: f64) -> Shape {
        let rect = Rectangle::new(Point::new(0.0, 0.0), side, side);
        Shape::from_primitive(0, Primitive::Rectangle(rect)).unwrap()
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let shape = square_shape(10.0);
        assert!(layout_outline_text(&shape, &mut test_metrics()).is_none());
    }

    #[test]
    fn test_repetition_covers_perimeter() {
        // Perimeter 40, one glyph advance 6 (fallback for size 12):
        // ceil(40 / 6) + 2 = 9 repetitions.
        let mut shape = square_shape(10.0);
        shape.text.content = "A".to_string();
        let layout = layout_outline_text(&shape, &mut test_metrics()).unwrap();
        assert_eq!(layout.repeated, "A".repeat(9));
        assert_eq!(layout.path, shape.path().clone());
    }

    #[test]
    fn test_tracking_counts_in_full_units() {
        // Base width 6 + 2 = 8: ceil(40 / 8) + 2 = 7 repetitions.
        let mut shape = square_shape(10.0);
        shape.text.content = "A".to_string();
        shape.text.tracking = 2.0;
        let layout = layout_outline_text(&shape, &mut test_metrics()).unwrap();
        assert_eq!(layout.repeated.len(), 7);
    }

    #[test]
    fn test_zero_perimeter_falls_back_to_single_repetition() {
        let mut data = BezPath::new();
        data.move_to(Point::new(5.0, 5.0));
        let mut shape = Shape::from_primitive(0, Primitive::Path(Path::new(data))).unwrap();
        shape.text.content = "hello".to_string();
        let layout = layout_outline_text(&shape, &mut test_metrics()).unwrap();
        assert_eq!(layout.repeated, "hello");
    }
}
