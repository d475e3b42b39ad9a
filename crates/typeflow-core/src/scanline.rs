//! Scanline intersection by sampling.
//!
//! Produces the sorted, merged x-intervals inside a region at a given
//! height. Built on point sampling of the region predicate rather than
//! exact edge intersection: robust against arbitrary path complexity
//! (curves, self-intersections) at the cost of precision.

use crate::region::{self, FillRule};
use kurbo::{BezPath, Point, Rect};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Sampling resolution along x, in drawing units.
const X_STEP: f64 = 0.1;

/// Maximum gap between raw intervals that still merges them. Absorbs
/// sampling jitter at region boundaries.
const MERGE_GAP: f64 = 1.0;

/// An inclusive horizontal span `[x_min, x_max]`.
pub type Interval = [f64; 2];

/// Compute the inside intervals of `path` at height `y`, restricted to the
/// horizontal extent of `search`.
///
/// Degenerate input (non-finite `y`, empty search box) yields an empty
/// list; callers skip the scanline rather than fail.
pub fn intervals_at(path: &BezPath, y: f64, search: &Rect) -> Vec<Interval> {
    if !y.is_finite() || !search.x0.is_finite() || !search.x1.is_finite() {
        return Vec::new();
    }
    let x_max = search.x1;
    if x_max <= search.x0 {
        return Vec::new();
    }

    let mut raw: Vec<Interval> = Vec::new();
    let mut inside = false;
    let mut start_x = search.x0;

    let mut x = search.x0;
    while x <= x_max {
        let hit = region::contains(path, Point::new(x, y), FillRule::NonZero);
        if hit && !inside {
            start_x = x;
            inside = true;
        } else if !hit && inside {
            raw.push([start_x, x]);
            inside = false;
        }
        x += X_STEP;
    }
    // Region extends past the search box: close at its right edge.
    if inside {
        raw.push([start_x, x_max]);
    }

    merge_intervals(raw)
}

/// Merge sorted raw intervals whose gap is at most [`MERGE_GAP`].
fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.len() < 2 {
        return intervals;
    }
    intervals.sort_by(|a, b| a[0].total_cmp(&b[0]));
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval[0] <= last[1] + MERGE_GAP => {
                last[1] = last[1].max(interval[1]);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Content hash of a path descriptor, for scanline memoization.
///
/// Two shapes with identical geometry share cache entries; the key never
/// involves shape identity.
pub fn path_key(path: &BezPath) -> u64 {
    use kurbo::PathEl;

    fn hash_point(point: &Point, hasher: &mut impl Hasher) {
        point.x.to_bits().hash(hasher);
        point.y.to_bits().hash(hasher);
    }

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => {
                0u8.hash(&mut hasher);
                hash_point(p, &mut hasher);
            }
            PathEl::LineTo(p) => {
                1u8.hash(&mut hasher);
                hash_point(p, &mut hasher);
            }
            PathEl::QuadTo(p1, p2) => {
                2u8.hash(&mut hasher);
                hash_point(p1, &mut hasher);
                hash_point(p2, &mut hasher);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                3u8.hash(&mut hasher);
                hash_point(p1, &mut hasher);
                hash_point(p2, &mut hasher);
                hash_point(p3, &mut hasher);
            }
            PathEl::ClosePath => 4u8.hash(&mut hasher),
        }
    }
    hasher.finish()
}

/// Memo for scanline results, keyed by path content and height.
///
/// Unbounded and process-lifetime; entries are pure functions of their key
/// and are only dropped by an explicit [`ScanlineCache::clear`].
#[derive(Debug, Default)]
pub struct ScanlineCache {
    entries: HashMap<(u64, u64), Vec<Interval>>,
}

impl ScanlineCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached variant of [`intervals_at`].
    pub fn intervals_at(
        &mut self,
        key: u64,
        path: &BezPath,
        y: f64,
        search: &Rect,
    ) -> Vec<Interval> {
        if !y.is_finite() {
            return Vec::new();
        }
        self.entries
            .entry((key, y.to_bits()))
            .or_insert_with(|| intervals_at(path, y, search))
            .clone()
    }

    /// Number of memoized scanlines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Shape as KurboShape;

    #[test]
    fn test_full_rect_is_one_interval() {
        let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
        let path = rect.to_path(0.1);
        let intervals = intervals_at(&path, 100.0, &rect);
        assert_eq!(intervals.len(), 1);
        assert!(intervals[0][0] <= 0.2);
        // Still inside at the last sample: closed at the search box edge.
        assert!((intervals[0][1] - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_outside_rect_is_empty() {
        let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
        let path = rect.to_path(0.1);
        assert!(intervals_at(&path, 300.0, &rect).is_empty());
    }

    #[test]
    fn test_merge_rule_small_gap() {
        let merged = merge_intervals(vec![[0.0, 10.0], [10.5, 20.0]]);
        assert_eq!(merged, vec![[0.0, 20.0]]);
    }

    #[test]
    fn test_merge_rule_large_gap() {
        let merged = merge_intervals(vec![[0.0, 10.0], [12.0, 20.0]]);
        assert_eq!(merged, vec![[0.0, 10.0], [12.0, 20.0]]);
    }

    #[test]
    fn test_merge_keeps_widest_end() {
        let merged = merge_intervals(vec![[0.0, 30.0], [5.0, 10.0]]);
        assert_eq!(merged, vec![[0.0, 30.0]]);
    }

    #[test]
    fn test_degenerate_scanline_is_empty() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let path = rect.to_path(0.1);
        assert!(intervals_at(&path, f64::NAN, &rect).is_empty());
        assert!(intervals_at(&path, 5.0, &Rect::new(10.0, 0.0, 0.0, 10.0)).is_empty());
    }

    #[test]
    fn test_two_disjoint_regions() {
        // Two rects 20 units apart on the same scanline.
        let mut path = Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1);
        for el in Rect::new(30.0, 0.0, 40.0, 10.0).to_path(0.1).elements() {
            path.push(*el);
        }
        let search = Rect::new(0.0, 0.0, 40.0, 10.0);
        let intervals = intervals_at(&path, 5.0, &search);
        assert_eq!(intervals.len(), 2);
    }

    #[test]
    fn test_cache_memoizes_and_clears() {
        let rect = Rect::new(0.0, 0.0, 50.0, 50.0);
        let path = rect.to_path(0.1);
        let key = path_key(&path);
        let mut cache = ScanlineCache::new();
        let first = cache.intervals_at(key, &path, 25.0, &rect);
        let second = cache.intervals_at(key, &path, 25.0, &rect);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_path_key_tracks_content() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0).to_path(0.1);
        let b = Rect::new(0.0, 0.0, 50.0, 50.0).to_path(0.1);
        let c = Rect::new(0.0, 0.0, 60.0, 50.0).to_path(0.1);
        assert_eq!(path_key(&a), path_key(&b));
        assert_ne!(path_key(&a), path_key(&c));
    }
}
