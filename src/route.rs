//! Finalized routes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::polyline::Point;

/// Minimum number of points a committed route must have.
pub const MIN_LINE_POINTS: usize = 2;

/// Geometry discriminator for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    LineString,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::LineString => "LineString",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    TooFewPoints { got: usize },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::TooFewPoints { got } => write!(
                f,
                "a line needs at least {} points, got {}",
                MIN_LINE_POINTS, got
            ),
        }
    }
}

impl std::error::Error for LineError {}

/// A committed route. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineRecord")]
pub struct Line {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: GeometryKind,
    points: Vec<Point>,
}

impl Line {
    /// Builds a line-string route. Fails if fewer than two points are given.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        points: Vec<Point>,
    ) -> Result<Self, LineError> {
        if points.len() < MIN_LINE_POINTS {
            return Err(LineError::TooFewPoints { got: points.len() });
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            kind: GeometryKind::LineString,
            points,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[derive(Deserialize)]
struct LineRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: GeometryKind,
    points: Vec<Point>,
}

impl TryFrom<LineRecord> for Line {
    type Error = LineError;

    fn try_from(record: LineRecord) -> Result<Self, Self::Error> {
        let line = Line::new(record.id, record.name, record.points)?;
        Ok(Self {
            kind: record.kind,
            ..line
        })
    }
}
