//! Point geometry for routes being drawn.
//!
//! Coordinates are opaque (latitude, longitude) pairs. No projection or
//! rounding happens here; whatever the map surface reports is stored as is.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A (latitude, longitude) coordinate pair.
///
/// Two points are equal only when both coordinates have the same bit
/// pattern. There is no tolerance: `0.0` and `-0.0` are different points and
/// a NaN coordinate is equal to itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn bits(&self) -> (u64, u64) {
        (self.lat.to_bits(), self.lng.to_bits())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.lat, point.lng)
    }
}

/// Ordered, de-duplicated points of the route currently being drawn.
///
/// Deserialization goes through [`PointBuffer::push`], so repeated points in
/// the input are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct PointBuffer {
    points: Vec<Point>,
}

impl PointBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffer with `candidate` appended, unless an equal point
    /// is already present, in which case the buffer comes back unchanged.
    pub fn add_point(mut self, candidate: Point) -> Self {
        self.push(candidate);
        self
    }

    /// In-place variant of [`PointBuffer::add_point`].
    ///
    /// Returns `false` when `candidate` was a duplicate and nothing changed.
    pub fn push(&mut self, candidate: Point) -> bool {
        if self.contains(&candidate) {
            tracing::debug!(
                lat = candidate.lat,
                lng = candidate.lng,
                "point already exists"
            );
            return false;
        }
        self.points.push(candidate);
        true
    }

    /// Whether an equal point is already buffered.
    pub fn contains(&self, point: &Point) -> bool {
        self.points.iter().any(|existing| existing == point)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of buffered points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drops every buffered point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Empties the buffer, handing back the points it held.
    pub fn take(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.points)
    }
}

impl From<Vec<Point>> for PointBuffer {
    fn from(points: Vec<Point>) -> Self {
        points.into_iter().fold(Self::new(), PointBuffer::add_point)
    }
}

impl From<PointBuffer> for Vec<Point> {
    fn from(buffer: PointBuffer) -> Self {
        buffer.points
    }
}
