//! Geometry primitives for the visualization engine
//!
//! World coordinates are machine-space millimeters with the origin at the
//! workpiece corner and Y increasing upward. Screen coordinates are device
//! pixels with the origin at the canvas top-left and Y increasing downward.

use serde::{Deserialize, Serialize};

/// Quantize a millimeter value to one decimal place (0.1mm resolution).
pub fn quantize_mm(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A captured tool position in machine coordinates (millimeters).
///
/// `z` is carried for display only; the 2D renderer does not use it
/// geometrically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the point with x and y quantized to 0.1mm.
    pub fn quantized(&self) -> Self {
        Self {
            x: quantize_mm(self.x),
            y: quantize_mm(self.y),
            z: self.z,
        }
    }

    /// Returns true if all coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A position on the pixel surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The workpiece rectangle, anchored at the world origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkpieceBounds {
    /// Width in millimeters (world X extent).
    pub width: f64,
    /// Height in millimeters (world Y extent).
    pub height: f64,
}

impl Default for WorkpieceBounds {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 200.0,
        }
    }
}

impl WorkpieceBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if the world coordinate lies on or inside the workpiece.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

/// An ordered sequence of captured tool positions.
///
/// Index order defines path-traversal order. The engine only ever appends;
/// deletion and clearing are host-driven.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSequence {
    points: Vec<WorldPoint>,
}

impl PointSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, quantizing x and y to capture resolution.
    pub fn push(&mut self, point: WorldPoint) {
        self.points.push(point.quantized());
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WorldPoint> {
        self.points.get(index)
    }

    /// The underlying slice, in traversal order.
    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldPoint> {
        self.points.iter()
    }

    /// Iterate consecutive point pairs as `(segment_index, from, to)`.
    pub fn segments(&self) -> impl Iterator<Item = (usize, WorldPoint, WorldPoint)> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .map(|(i, pair)| (i, pair[0], pair[1]))
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl From<Vec<WorldPoint>> for PointSequence {
    fn from(points: Vec<WorldPoint>) -> Self {
        Self { points }
    }
}

impl FromIterator<WorldPoint> for PointSequence {
    fn from_iter<T: IntoIterator<Item = WorldPoint>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_rounds_to_tenths() {
        assert_eq!(quantize_mm(12.34567), 12.3);
        assert_eq!(quantize_mm(8.91), 8.9);
        assert_eq!(quantize_mm(0.05), 0.1);
        assert_eq!(quantize_mm(0.0), 0.0);
    }

    #[test]
    fn test_push_quantizes() {
        let mut seq = PointSequence::new();
        seq.push(WorldPoint::new(12.34567, 8.91, 0.0));
        assert_eq!(seq.get(0), Some(&WorldPoint::new(12.3, 8.9, 0.0)));
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = WorkpieceBounds::default();
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(300.0, 200.0));
        assert!(!bounds.contains(-1.0, 5.0));
        assert!(!bounds.contains(301.0, 5.0));
        assert!(!bounds.contains(5.0, 200.1));
    }

    #[test]
    fn test_segments_pairs_consecutive_points() {
        let seq: PointSequence = vec![
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(10.0, 0.0, 0.0),
            WorldPoint::new(10.0, 10.0, 0.0),
        ]
        .into();

        let segments: Vec<_> = seq.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].0, 0);
        assert_eq!(segments[0].2, WorldPoint::new(10.0, 0.0, 0.0));
        assert_eq!(segments[1].0, 1);
    }

    #[test]
    fn test_segments_empty_and_single() {
        let empty = PointSequence::new();
        assert_eq!(empty.segments().count(), 0);

        let single: PointSequence = vec![WorldPoint::new(1.0, 1.0, 0.0)].into();
        assert_eq!(single.segments().count(), 0);
    }

    #[test]
    fn test_non_finite_detection() {
        assert!(!WorldPoint::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!WorldPoint::new(0.0, f64::INFINITY, 0.0).is_finite());
        assert!(WorldPoint::new(1.0, 2.0, 3.0).is_finite());
    }
}
