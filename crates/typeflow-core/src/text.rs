//! Per-shape text configuration.

use serde::{Deserialize, Serialize};

/// Smallest accepted font size.
pub const MIN_FONT_SIZE: f64 = 8.0;
/// Largest accepted font size.
pub const MAX_FONT_SIZE: f64 = 72.0;
/// Rotation bounds in degrees.
pub const MAX_ROTATION_DEGREES: f64 = 180.0;

/// How a shape's text output is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Text packed into the shape interior (area text).
    #[default]
    Fill,
    /// Text flowed along the shape perimeter.
    Outline,
}

/// Typographic parameters for one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    /// The text content. Empty content renders nothing.
    pub content: String,
    /// Font family name.
    pub font_family: String,
    /// Font size in drawing units.
    pub font_size: f64,
    /// Font weight (CSS-style, 100..=900).
    pub font_weight: u16,
    /// Line height as a multiple of font size.
    pub line_height: f64,
    /// Vertical line-pitch scale, percent of natural line height.
    pub packing: f64,
    /// Extra advance between glyphs, in device units.
    pub tracking: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            content: String::new(),
            font_family: "Inter".to_string(),
            font_size: 12.0,
            font_weight: 400,
            line_height: 1.75,
            packing: 50.0,
            tracking: 0.0,
        }
    }
}

/// A single typography field update, as delivered by a control surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypographyParam {
    FontFamily(String),
    FontSize(f64),
    FontWeight(u16),
    LineHeight(f64),
    Packing(f64),
    Tracking(f64),
}

impl TextConfig {
    /// Apply one field update, clamping where the field has bounds.
    pub fn apply(&mut self, param: TypographyParam) {
        match param {
            TypographyParam::FontFamily(family) => self.font_family = family,
            TypographyParam::FontSize(size) => {
                self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
            }
            TypographyParam::FontWeight(weight) => self.font_weight = weight,
            TypographyParam::LineHeight(height) => self.line_height = height,
            TypographyParam::Packing(packing) => self.packing = packing,
            TypographyParam::Tracking(tracking) => self.tracking = tracking,
        }
    }
}

/// Clamp a rotation to the accepted degree range.
pub fn clamp_rotation(degrees: f64) -> f64 {
    if degrees.is_nan() {
        return 0.0;
    }
    degrees.clamp(-MAX_ROTATION_DEGREES, MAX_ROTATION_DEGREES)
}
