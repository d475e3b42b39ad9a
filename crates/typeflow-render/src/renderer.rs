//! Render-mode controller.
//!
//! Decides, per shape, whether to materialize area-text or outline-text
//! output, tears down the other artifact on mode switches, and handles
//! style capture/restore around text overrides. Also carries the setter
//! surface exposed to typography and placement controls: every setter is
//! fire-and-forget and re-renders synchronously, degrading rather than
//! failing.

use crate::area::layout_area_text;
use crate::artifact::TextArtifact;
use crate::metrics::GlyphMetrics;
use crate::outline::layout_outline_text;
use std::collections::HashMap;
use typeflow_core::scanline::ScanlineCache;
use typeflow_core::{
    Canvas, RenderMode, SerializableColor, ShapeId, TypographyParam, clamp_rotation,
};

static EMPTY_ARTIFACT: TextArtifact = TextArtifact::None;

/// Materializes and owns per-shape text artifacts.
///
/// The glyph-metrics and scanline caches are owned here explicitly (not
/// ambient globals), so separate renderers are fully isolated and tests
/// stay deterministic.
pub struct TextRenderer {
    metrics: GlyphMetrics,
    scanlines: ScanlineCache,
    artifacts: HashMap<ShapeId, TextArtifact>,
}

impl TextRenderer {
    /// Create a renderer backed by the system fonts.
    pub fn new() -> Self {
        Self::with_metrics(GlyphMetrics::new())
    }

    /// Create a renderer over injected metrics.
    pub fn with_metrics(metrics: GlyphMetrics) -> Self {
        Self {
            metrics,
            scanlines: ScanlineCache::new(),
            artifacts: HashMap::new(),
        }
    }

    /// The current artifact for a shape.
    pub fn artifact(&self, id: ShapeId) -> &TextArtifact {
        self.artifacts.get(&id).unwrap_or(&EMPTY_ARTIFACT)
    }

    /// Set a shape's text content and re-render it.
    pub fn set_text(&mut self, canvas: &mut Canvas, id: ShapeId, content: impl Into<String>) {
        match canvas.shape_mut(id) {
            Some(shape) => shape.text.content = content.into(),
            None => return,
        }
        self.render_shape(canvas, id);
    }

    /// Apply a typography field update and re-render.
    pub fn set_typography(&mut self, canvas: &mut Canvas, id: ShapeId, param: TypographyParam) {
        match canvas.shape_mut(id) {
            Some(shape) => shape.text.apply(param),
            None => return,
        }
        self.render_shape(canvas, id);
    }

    /// Set a shape's scale.
    ///
    /// Placement only alters the composite transform read by the painter;
    /// layout runs in untransformed coordinates, so the artifact stands.
    pub fn set_scale(&mut self, canvas: &mut Canvas, id: ShapeId, scale: f64) {
        if let Some(shape) = canvas.shape_mut(id) {
            shape.placement.scale = scale;
        }
    }

    /// Set a shape's rotation, clamped to [-180, 180] degrees.
    pub fn set_rotation(&mut self, canvas: &mut Canvas, id: ShapeId, degrees: f64) {
        if let Some(shape) = canvas.shape_mut(id) {
            shape.placement.rotation_degrees = clamp_rotation(degrees);
        }
    }

    /// Switch a shape's render mode and materialize the matching artifact.
    pub fn set_render_mode(&mut self, canvas: &mut Canvas, id: ShapeId, mode: RenderMode) {
        match canvas.shape_mut(id) {
            Some(shape) => shape.render_mode = mode,
            None => return,
        }
        self.render_shape(canvas, id);
    }

    /// Re-render a shape in its current mode.
    ///
    /// Replacing the stored artifact is the teardown: the previous one is
    /// dropped wholesale, never partially visible.
    pub fn render_shape(&mut self, canvas: &mut Canvas, id: ShapeId) {
        let Some(shape) = canvas.shape_mut(id) else {
            self.artifacts.remove(&id);
            return;
        };

        if !shape.has_text() {
            // Text cleared: drop the artifact and put the original
            // styling back in full.
            self.artifacts.insert(id, TextArtifact::None);
            shape.restore_saved_style();
            return;
        }

        // Capture must precede any override.
        shape.capture_saved_style();
        // Only the laid-out glyphs should be visible through the region;
        // in outline mode the stroke stays as it is.
        shape.style.fill_color = Some(SerializableColor::transparent());

        let artifact = match shape.render_mode {
            RenderMode::Fill => {
                let lines = layout_area_text(shape, &mut self.metrics, &mut self.scanlines);
                if lines.is_empty() {
                    log::warn!("no text lines generated for shape {id}");
                }
                TextArtifact::Fill(lines)
            }
            RenderMode::Outline => match layout_outline_text(shape, &mut self.metrics) {
                Some(layout) => TextArtifact::Outline {
                    repeated: layout.repeated,
                    path: layout.path,
                },
                None => TextArtifact::None,
            },
        };
        self.artifacts.insert(id, artifact);
    }

    /// Re-render every shape and drop artifacts of shapes that no longer
    /// exist (after a reload or re-initialization).
    pub fn render_all(&mut self, canvas: &mut Canvas) {
        let ids = canvas.shape_ids().to_vec();
        self.artifacts.retain(|id, _| ids.contains(id));
        for id in ids {
            self.render_shape(canvas, id);
        }
    }

    /// Drop all cached glyph widths and scanline results.
    ///
    /// Not part of normal operation; cache entries are pure in their keys.
    pub fn clear_caches(&mut self) {
        self.metrics.clear();
        self.scanlines.clear();
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
