//! Shape placement and the composite transform.

use kurbo::{Affine, Rect};
use serde::{Deserialize, Serialize};

/// User-adjustable pose for a shape.
///
/// Applied as a transform over the untransformed geometry; never baked into
/// the path or the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Horizontal translation.
    pub translate_x: f64,
    /// Vertical translation.
    pub translate_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees, clamped to [-180, 180] at the setter surface.
    pub rotation_degrees: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotation_degrees: 0.0,
        }
    }
}

impl Placement {
    /// Compose the placement transform for a shape with the given bounds.
    ///
    /// Equivalent to: translate, then rotate and scale about the bounding
    /// box center. The pivot is always the center, so rotation and scale
    /// never depend on the translation and vice versa.
    pub fn compose(&self, bounds: Rect) -> Affine {
        let center = bounds.center().to_vec2();
        Affine::translate((self.translate_x, self.translate_y))
            * Affine::translate(center)
            * Affine::rotate(self.rotation_degrees.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}
