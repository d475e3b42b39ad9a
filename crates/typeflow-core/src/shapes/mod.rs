//! Shape definitions for the typesetting canvas.

mod ellipse;
mod line;
mod path;
mod polygon;
mod rectangle;

pub use ellipse::Ellipse;
pub use line::Line;
pub use path::Path;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

use crate::motion::MotionState;
use crate::placement::Placement;
use crate::text::{RenderMode, TextConfig};
use kurbo::{Affine, BezPath, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
}

impl ShapeStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            fill_color: None,
        }
    }
}

/// A shape's original styling, captured before text rendering overrides it.
///
/// Captured lazily the first time a text render touches the style, restored
/// in full (fill, stroke, stroke width) when the text is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedStyle {
    pub fill_color: Option<SerializableColor>,
    pub stroke_color: SerializableColor,
    pub stroke_width: f64,
}

impl From<&ShapeStyle> for SavedStyle {
    fn from(style: &ShapeStyle) -> Self {
        Self {
            fill_color: style.fill_color,
            stroke_color: style.stroke_color,
            stroke_width: style.stroke_width,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// A source 2D primitive, as delivered by an import collaborator.
///
/// Every variant normalizes to a `BezPath` via [`Primitive::to_path`]; a
/// primitive whose normalized path comes out empty is unusable and is
/// excluded from the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Primitive {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Line(Line),
    Path(Path),
}

impl Primitive {
    /// Normalize this primitive into a path descriptor.
    pub fn to_path(&self) -> BezPath {
        match self {
            Primitive::Rectangle(p) => p.to_path(),
            Primitive::Ellipse(p) => p.to_path(),
            Primitive::Polygon(p) => p.to_path(),
            Primitive::Line(p) => p.to_path(),
            Primitive::Path(p) => p.to_path(),
        }
    }
}

/// Fallback bounding box for degenerate geometry.
fn fallback_bounds() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

/// Axis-aligned bounding box of a path, tolerating degenerate input.
fn path_bounds(path: &BezPath) -> Rect {
    use kurbo::Shape as _;
    let bounds = path.bounding_box();
    let finite = bounds.x0.is_finite()
        && bounds.y0.is_finite()
        && bounds.x1.is_finite()
        && bounds.y1.is_finite();
    if finite { bounds } else { fallback_bounds() }
}

/// One region a user can type into.
///
/// Owns the normalized geometry (immutable unless the source primitive is
/// replaced), the user-adjustable placement, and the per-shape text and
/// motion configuration. The bounding box is cached and recomputed only
/// when the primitive changes; placement never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    /// Stable identity of the source primitive (e.g. import index), used to
    /// match shapes across re-initialization.
    source_key: u64,
    primitive: Primitive,
    path: BezPath,
    bounds: Rect,
    /// User-adjustable pose, applied as a transform.
    pub placement: Placement,
    /// Whether text fills the region or flows along its outline.
    pub render_mode: RenderMode,
    /// Typographic parameters.
    pub text: TextConfig,
    /// Inert motion state (tracked and persisted, never animated).
    pub motion: MotionState,
    /// Current style properties.
    pub style: ShapeStyle,
    saved_style: Option<SavedStyle>,
}

impl Shape {
    /// Create a shape from a source primitive.
    ///
    /// Returns `None` when the primitive normalizes to an empty path; such
    /// primitives must not enter the canvas.
    pub fn from_primitive(source_key: u64, primitive: Primitive) -> Option<Self> {
        let path = primitive.to_path();
        if path.elements().is_empty() {
            return None;
        }
        let bounds = path_bounds(&path);
        Some(Self {
            id: Uuid::new_v4(),
            source_key,
            primitive,
            path,
            bounds,
            placement: Placement::default(),
            render_mode: RenderMode::default(),
            text: TextConfig::default(),
            motion: MotionState::default(),
            style: ShapeStyle::default(),
            saved_style: None,
        })
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Get the stable source identity.
    pub fn source_key(&self) -> u64 {
        self.source_key
    }

    /// Get the source primitive.
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// Get the normalized path descriptor.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Get the bounding box of the untransformed geometry.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replace the source primitive, re-deriving path and bounds.
    ///
    /// Returns `false` (leaving the shape untouched) when the replacement
    /// normalizes to an empty path.
    pub fn replace_primitive(&mut self, primitive: Primitive) -> bool {
        let path = primitive.to_path();
        if path.elements().is_empty() {
            return false;
        }
        self.bounds = path_bounds(&path);
        self.path = path;
        self.primitive = primitive;
        true
    }

    /// The composite placement transform for this shape.
    pub fn placement_transform(&self) -> Affine {
        self.placement.compose(self.bounds)
    }

    /// Whether the shape has any text content.
    pub fn has_text(&self) -> bool {
        !self.text.content.is_empty()
    }

    /// Capture the current style, unless a capture is already held.
    ///
    /// Must run strictly before any text render overrides the style.
    pub fn capture_saved_style(&mut self) {
        if self.saved_style.is_none() {
            self.saved_style = Some(SavedStyle::from(&self.style));
        }
    }

    /// Restore the captured style in full and release the capture.
    pub fn restore_saved_style(&mut self) {
        if let Some(saved) = self.saved_style.take() {
            self.style.fill_color = saved.fill_color;
            self.style.stroke_color = saved.stroke_color;
            self.style.stroke_width = saved.stroke_width;
        }
    }

    /// The currently captured style, if any.
    pub fn saved_style(&self) -> Option<&SavedStyle> {
        self.saved_style.as_ref()
    }
}
