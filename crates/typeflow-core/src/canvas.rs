//! Canvas document and shape registry.

use crate::shapes::{Primitive, Shape, ShapeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A source primitive paired with a stable identity token.
///
/// The key comes from the import collaborator (typically the element index
/// in the source drawing) and is what lets re-initialization match a
/// primitive back to its prior shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePrimitive {
    pub key: u64,
    pub primitive: Primitive,
}

impl SourcePrimitive {
    pub fn new(key: u64, primitive: Primitive) -> Self {
        Self { key, primitive }
    }
}

/// The set of all shapes for the current document, plus selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Canvas {
    /// All shapes, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Shape order (import order, back to front).
    order: Vec<ShapeId>,
    /// The selected shape, if any. At most one.
    selected_shape_id: Option<ShapeId>,
}

impl Canvas {
    /// Create a new empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a fresh drawing, destroying all existing shapes.
    ///
    /// Every usable primitive becomes a new shape with default placement
    /// and text configuration; primitives that normalize to an empty path
    /// are excluded.
    pub fn load(&mut self, sources: Vec<SourcePrimitive>) {
        self.shapes.clear();
        self.order.clear();
        self.selected_shape_id = None;

        for source in sources {
            match Shape::from_primitive(source.key, source.primitive) {
                Some(shape) => {
                    self.order.push(shape.id());
                    self.shapes.insert(shape.id(), shape);
                }
                None => {
                    log::warn!("skipping unusable primitive (key {})", source.key);
                }
            }
        }
        log::debug!("canvas loaded with {} shapes", self.order.len());
    }

    /// Re-initialize against a (possibly re-scanned) set of primitives.
    ///
    /// A source whose key matches an existing shape keeps that shape's
    /// identity and state (placement, render mode, text, motion, captured
    /// style); its geometry is re-derived from the incoming primitive.
    /// Unmatched sources create fresh shapes with defaults; shapes whose
    /// key no longer appears are destroyed. Selection survives only if the
    /// selected shape does.
    pub fn reinitialize(&mut self, sources: Vec<SourcePrimitive>) {
        let mut existing: HashMap<u64, Shape> = self
            .shapes
            .drain()
            .map(|(_, shape)| (shape.source_key(), shape))
            .collect();
        self.order.clear();

        for source in sources {
            let shape = match existing.remove(&source.key) {
                Some(mut shape) => {
                    if shape.replace_primitive(source.primitive) {
                        Some(shape)
                    } else {
                        log::warn!("shape (key {}) became unusable, dropping", source.key);
                        None
                    }
                }
                None => Shape::from_primitive(source.key, source.primitive),
            };
            if let Some(shape) = shape {
                self.order.push(shape.id());
                self.shapes.insert(shape.id(), shape);
            }
        }

        if let Some(selected) = self.selected_shape_id {
            if !self.shapes.contains_key(&selected) {
                self.selected_shape_id = None;
            }
        }
    }

    /// Clear all shapes and the selection.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
        self.selected_shape_id = None;
    }

    /// Get a shape by ID.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Get a shape by its source key.
    pub fn shape_by_source_key(&self, key: u64) -> Option<&Shape> {
        self.shapes.values().find(|s| s.source_key() == key)
    }

    /// Shapes in order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Shape IDs in order.
    pub fn shape_ids(&self) -> &[ShapeId] {
        &self.order
    }

    /// Select a shape, or pass `None` to deselect.
    ///
    /// Selecting an unknown ID is a no-op; returns whether the selection
    /// changed.
    pub fn select_shape(&mut self, id: Option<ShapeId>) -> bool {
        if let Some(id) = id {
            if !self.shapes.contains_key(&id) {
                return false;
            }
        }
        let changed = self.selected_shape_id != id;
        self.selected_shape_id = id;
        changed
    }

    /// The currently selected shape ID, if any.
    pub fn selected_shape_id(&self) -> Option<ShapeId> {
        self.selected_shape_id
    }

    /// The currently selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_shape_id.and_then(|id| self.shapes.get(&id))
    }

    /// Check if the canvas is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
