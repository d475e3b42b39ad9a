//! TypeFlow Render Library
//!
//! Layout and materialization for the TypeFlow area-text engine: glyph
//! advance metrics, the area-text and outline-text layout algorithms, and
//! the render-mode controller that owns per-shape text artifacts.

pub mod area;
pub mod artifact;
pub mod metrics;
pub mod outline;
pub mod renderer;

pub use area::layout_area_text;
pub use artifact::{Glyph, Line, TextArtifact};
pub use metrics::{FontError, FontStore, GlyphMetrics, fallback_width};
pub use outline::{OutlineLayout, layout_outline_text};
pub use renderer::TextRenderer;
