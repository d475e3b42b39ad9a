//! Area-text layout.
//!
//! Packs a glyph stream into the inside intervals of a shape, scanline by
//! scanline. The text content is walked cyclically with a single running
//! index, so short strings repeat until the region is full.

use crate::artifact::{Glyph, Line};
use crate::metrics::GlyphMetrics;
use typeflow_core::Shape;
use typeflow_core::scanline::{ScanlineCache, path_key};

/// Hard cap on glyphs per interval, guarding the zero-advance degenerate
/// case.
const MAX_GLYPHS_PER_INTERVAL: usize = 10_000;

/// Extra scanline iterations allowed past the expected count.
const ITERATION_MARGIN: usize = 50;

/// Intervals narrower than this multiple of font size hold no glyph
/// meaningfully and are skipped.
const MIN_INTERVAL_FACTOR: f64 = 0.3;

/// Baseline offset from the band top, approximating cap height.
const BASELINE_FACTOR: f64 = 0.75;

/// Lay out a shape's text into its interior.
///
/// Returns the ordered lines; one scanline can yield several (one per
/// interval). Empty text yields an empty result. Cap exhaustion returns
/// whatever was produced so far.
pub fn layout_area_text(
    shape: &Shape,
    metrics: &mut GlyphMetrics,
    scanlines: &mut ScanlineCache,
) -> Vec<Line> {
    let config = &shape.text;
    let chars: Vec<char> = config.content.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let bounds = shape.bounds();
    let line_height_px = (config.font_size * config.line_height).max(1.0);
    let y_step = line_height_px * config.packing.max(1.0) / 100.0;
    let tracking_px = config.tracking / 100.0;
    let min_interval = config.font_size * MIN_INTERVAL_FACTOR;
    let key = path_key(shape.path());

    let mut lines = Vec::new();
    let mut current_y = (bounds.y0 + config.font_size * BASELINE_FACTOR).ceil();
    let mut text_index: usize = 0;
    let max_iterations = (bounds.height() / y_step).ceil() as usize + ITERATION_MARGIN;
    let mut iterations = 0;

    while current_y < bounds.y1 && iterations < max_iterations {
        iterations += 1;

        let intervals = scanlines.intervals_at(key, shape.path(), current_y, &bounds);
        for [x_min, x_max] in intervals {
            let available = (x_max - x_min).max(0.0);
            if available < min_interval {
                continue;
            }

            let mut glyphs: Vec<Glyph> = Vec::new();
            let mut line_width = 0.0;
            while glyphs.len() < MAX_GLYPHS_PER_INTERVAL && line_width < available {
                let ch = chars[text_index % chars.len()];
                let width = metrics.advance_width(
                    ch,
                    &config.font_family,
                    config.font_size,
                    config.font_weight,
                );
                let advance = width + tracking_px;
                // A glyph is placed only when it fits in full.
                if line_width + advance <= available {
                    glyphs.push(Glyph {
                        ch,
                        x: x_min + line_width,
                        width,
                    });
                    line_width += advance;
                    text_index += 1;
                } else {
                    break;
                }
            }

            if !glyphs.is_empty() {
                lines.push(Line {
                    y: current_y,
                    glyphs,
                });
            }
        }

        current_y += y_step;
    }

    log::debug!(
        "area layout: {} lines, {} glyphs (shape {})",
        lines.len(),
        lines.iter().map(|l| l.glyphs.len()).sum::<usize>(),
        shape.id()
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FontStore;
    use kurbo::Point;
    use typeflow_core::shapes::{Primitive, Rectangle, Shape};

    // With no fonts available every advance is the fallback font_size * 0.5,
    // which makes layout geometry exact: font size 12 -> 6 units per glyph.

    fn test_metrics() -> GlyphMetrics {
        GlyphMetrics::with_store(FontStore::empty())
    }

    fn rect_shape(width: f64, height: f64) -> Shape {
        let rect = Rectangle::new(Point::new(0.0, 0.0), width, height);
        Shape::from_primitive(0, Primitive::Rectangle(rect)).unwrap()
    }

    #[test]
    fn test_empty_text_yields_no_lines() {
        let shape = rect_shape(200.0, 200.0);
        let lines = layout_area_text(&shape, &mut test_metrics(), &mut ScanlineCache::new());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_cyclic_fill_wraps_content() {
        let mut shape = rect_shape(200.0, 12.0);
        shape.text.content = "AB".to_string();
        let lines = layout_area_text(&shape, &mut test_metrics(), &mut ScanlineCache::new());
        assert_eq!(lines.len(), 1);
        let pattern: Vec<char> = lines[0].glyphs.iter().take(5).map(|g| g.ch).collect();
        assert_eq!(pattern, vec!['A', 'B', 'A', 'B', 'A']);
    }

    #[test]
    fn test_text_index_runs_across_lines() {
        // Tall enough for two lines; 33 glyphs fit per 200-wide line, so the
        // second line picks up at index 33 ('B').
        let mut shape = rect_shape(200.0, 35.0);
        shape.text.content = "AB".to_string();
        shape.text.packing = 100.0;
        let lines = layout_area_text(&shape, &mut test_metrics(), &mut ScanlineCache::new());
        assert!(lines.len() >= 2);
        assert_eq!(lines[0].glyphs.len(), 33);
        assert_eq!(lines[1].glyphs[0].ch, 'B');
    }

    #[test]
    fn test_glyph_never_overflows_interval() {
        // Interval of width 20.5 fits exactly three 6-unit glyphs: a fourth
        // would land at 24 > 20.5 and must be excluded, not truncated.
        let mut shape = rect_shape(20.5, 12.0);
        shape.text.content = "AAAA".to_string();
        let lines = layout_area_text(&shape, &mut test_metrics(), &mut ScanlineCache::new());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].glyphs.len(), 3);
        let xs: Vec<f64> = lines[0].glyphs.iter().map(|g| g.x).collect();
        assert!((xs[0] - 0.0).abs() < 1e-6);
        assert!((xs[1] - 6.0).abs() < 1e-6);
        assert!((xs[2] - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_thin_interval_is_skipped() {
        // 3 < 12 * 0.3, too thin to hold a glyph meaningfully.
        let mut shape = rect_shape(3.0, 12.0);
        shape.text.content = "A".to_string();
        let lines = layout_area_text(&shape, &mut test_metrics(), &mut ScanlineCache::new());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_tracking_spreads_glyphs() {
        let mut shape = rect_shape(200.0, 12.0);
        shape.text.content = "AA".to_string();
        shape.text.tracking = 100.0; // one extra unit per glyph
        let lines = layout_area_text(&shape, &mut test_metrics(), &mut ScanlineCache::new());
        let glyphs = &lines[0].glyphs;
        assert!((glyphs[1].x - glyphs[0].x - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_scanline_pitch_scenario() {
        // 200x200 box, size 12, line height 1.75, packing 100:
        // pitch 21, baselines at 9, 30, 51, ... 198.
        let mut shape = rect_shape(200.0, 200.0);
        shape.text.content = "The quick brown fox ".to_string();
        shape.text.packing = 100.0;
        let lines = layout_area_text(&shape, &mut test_metrics(), &mut ScanlineCache::new());
        assert_eq!(lines.len(), 10);
        assert!((lines[0].y - 9.0).abs() < 1e-9);
        assert!((lines[1].y - 30.0).abs() < 1e-9);
        assert!((lines[2].y - 51.0).abs() < 1e-9);
        assert!((lines[9].y - 198.0).abs() < 1e-9);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let mut shape = rect_shape(120.0, 60.0);
        shape.text.content = "repeatable".to_string();
        let mut metrics = test_metrics();
        let mut scanlines = ScanlineCache::new();
        let first = layout_area_text(&shape, &mut metrics, &mut scanlines);
        let second = layout_area_text(&shape, &mut metrics, &mut scanlines);
        assert_eq!(first, second);
    }
}
