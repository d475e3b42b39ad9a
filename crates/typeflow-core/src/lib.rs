//! TypeFlow Core Library
//!
//! Data model and geometry for the TypeFlow area-text engine: shape
//! primitives and their normalized path descriptors, the point-in-region
//! predicate, the sampling scanline engine, placement transforms, and the
//! canvas registry.

pub mod canvas;
pub mod motion;
pub mod placement;
pub mod region;
pub mod scanline;
pub mod shapes;
pub mod text;

pub use canvas::{Canvas, SourcePrimitive};
pub use motion::{MotionMode, MotionState};
pub use placement::Placement;
pub use region::{FillRule, contains};
pub use scanline::{Interval, ScanlineCache, intervals_at, path_key};
pub use shapes::{Primitive, SavedStyle, SerializableColor, Shape, ShapeId, ShapeStyle};
pub use text::{RenderMode, TextConfig, TypographyParam, clamp_rotation};
