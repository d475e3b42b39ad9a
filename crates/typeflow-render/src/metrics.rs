//! Glyph advance-width measurement and caching.
//!
//! Widths are measured from system fonts resolved through fontdb. Both the
//! resolved fonts and the per-glyph widths are cached without bound for the
//! process lifetime: entries are pure functions of their key, so nothing
//! ever invalidates them short of an explicit clear.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{Font, Scale};
use std::collections::HashMap;
use std::fs;
use thiserror::Error;

/// Fixed-width heuristic used when measurement is unavailable.
pub fn fallback_width(font_size: f64) -> f64 {
    font_size * 0.5
}

/// Errors raised while resolving a font face.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("no face matches family '{0}'")]
    NoMatch(String),
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
    #[error("font data is not parseable")]
    InvalidData,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FontKey {
    family: String,
    weight: u16,
}

/// Resolves fonts from a fontdb database, caching by (family, weight).
///
/// Failed resolutions are cached too, so a missing family costs one lookup
/// rather than one per glyph.
pub struct FontStore {
    db: Database,
    fonts: HashMap<FontKey, Option<Font<'static>>>,
}

impl FontStore {
    /// Create a store backed by the system font database.
    pub fn new() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        Self {
            db,
            fonts: HashMap::new(),
        }
    }

    /// Create a store with no fonts at all.
    ///
    /// Every lookup fails, so every measurement takes the fallback path;
    /// useful for deterministic tests.
    pub fn empty() -> Self {
        Self {
            db: Database::new(),
            fonts: HashMap::new(),
        }
    }

    /// Resolve a font for a family and weight, if one is available.
    pub fn font_for(&mut self, family: &str, weight: u16) -> Option<&Font<'static>> {
        let key = FontKey {
            family: family.to_string(),
            weight,
        };
        let db = &self.db;
        self.fonts
            .entry(key)
            .or_insert_with(|| match load_font(db, family, weight) {
                Ok(font) => Some(font),
                Err(err) => {
                    log::warn!("font resolution failed for '{family}' ({weight}): {err}");
                    None
                }
            })
            .as_ref()
    }
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}

fn load_font(db: &Database, family: &str, weight: u16) -> Result<Font<'static>, FontError> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" => vec![Family::SansSerif],
        "Serif" => vec![Family::Serif],
        "Monospace" => vec![Family::Monospace],
        other => vec![Family::Name(other)],
    };

    let query = Query {
        families: &families,
        weight: Weight(weight),
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db
        .query(&query)
        .ok_or_else(|| FontError::NoMatch(family.to_string()))?;
    let face = db
        .face(id)
        .ok_or_else(|| FontError::NoMatch(family.to_string()))?;

    let bytes = match &face.source {
        fontdb::Source::File(path) => fs::read(path)?,
        fontdb::Source::SharedFile(path, _) => fs::read(path)?,
        fontdb::Source::Binary(bytes) => bytes.as_ref().as_ref().to_vec(),
    };
    Font::try_from_vec(bytes).ok_or(FontError::InvalidData)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GlyphKey {
    ch: char,
    family: String,
    size_bits: u64,
    weight: u16,
}

/// Memoized per-glyph advance widths.
///
/// Keyed by the exact (char, family, size, weight) tuple. Unbounded: the
/// key space in practice is loaded fonts × sizes actually used × characters
/// actually typed.
pub struct GlyphMetrics {
    store: FontStore,
    widths: HashMap<GlyphKey, f64>,
}

impl GlyphMetrics {
    /// Create a cache backed by the system fonts.
    pub fn new() -> Self {
        Self::with_store(FontStore::new())
    }

    /// Create a cache over a specific font store.
    pub fn with_store(store: FontStore) -> Self {
        Self {
            store,
            widths: HashMap::new(),
        }
    }

    /// The advance width of one glyph.
    ///
    /// Measures on first request; falls back to `font_size * 0.5` when no
    /// usable font or measurement is available.
    pub fn advance_width(&mut self, ch: char, family: &str, font_size: f64, weight: u16) -> f64 {
        let key = GlyphKey {
            ch,
            family: family.to_string(),
            size_bits: font_size.to_bits(),
            weight,
        };
        if let Some(width) = self.widths.get(&key) {
            return *width;
        }
        let width = measure(&mut self.store, ch, family, font_size, weight)
            .unwrap_or_else(|| fallback_width(font_size));
        self.widths.insert(key, width);
        width
    }

    /// Number of memoized glyph widths.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Whether the cache holds no widths.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Drop all memoized widths.
    pub fn clear(&mut self) {
        self.widths.clear();
    }
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn measure(store: &mut FontStore, ch: char, family: &str, font_size: f64, weight: u16) -> Option<f64> {
    let font = store.font_for(family, weight)?;
    let scaled = font.glyph(ch).scaled(Scale::uniform(font_size as f32));
    let advance = scaled.h_metrics().advance_width as f64;
    if advance.is_finite() && advance > 0.0 {
        Some(advance)
    } else {
        None
    }
}
