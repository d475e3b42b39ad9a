//! Materialized text output for one shape.

use kurbo::BezPath;
use typeflow_core::RenderMode;

/// One positioned glyph within a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// The character.
    pub ch: char,
    /// Left edge of the glyph, in untransformed shape coordinates.
    pub x: f64,
    /// Advance width of the glyph (excluding tracking).
    pub width: f64,
}

/// One laid-out text line: a baseline height plus its glyphs in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Baseline y coordinate.
    pub y: f64,
    /// Positioned glyphs, left to right.
    pub glyphs: Vec<Glyph>,
}

/// The live rendered artifact for one shape.
///
/// A tagged union rather than two nullable slots: at most one artifact
/// kind exists at a time, and it matches the shape's render mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TextArtifact {
    /// Nothing materialized (no text, or layout produced nothing usable).
    #[default]
    None,
    /// Area text: positioned glyph lines filling the region.
    Fill(Vec<Line>),
    /// Outline text: a repeated string to flow along the given path.
    Outline {
        repeated: String,
        path: BezPath,
    },
}

impl TextArtifact {
    /// Whether nothing is materialized.
    pub fn is_none(&self) -> bool {
        matches!(self, TextArtifact::None)
    }

    /// Whether the artifact kind matches a render mode.
    pub fn matches_mode(&self, mode: RenderMode) -> bool {
        matches!(
            (self, mode),
            (TextArtifact::Fill(_), RenderMode::Fill)
                | (TextArtifact::Outline { .. }, RenderMode::Outline)
        )
    }

    /// The fill-mode lines, if this is a fill artifact.
    pub fn fill_lines(&self) -> Option<&[Line]> {
        match self {
            TextArtifact::Fill(lines) => Some(lines),
            _ => None,
        }
    }

    /// Total number of glyphs materialized.
    pub fn glyph_count(&self) -> usize {
        match self {
            TextArtifact::None => 0,
            TextArtifact::Fill(lines) => lines.iter().map(|l| l.glyphs.len()).sum(),
            TextArtifact::Outline { repeated, .. } => repeated.chars().count(),
        }
    }
}
