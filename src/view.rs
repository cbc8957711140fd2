//! Read-only projections of a session for the side list and the map.
//!
//! These carry roles and flags only. How a selected route or the draw button
//! actually looks is up to the host.

use serde::Serialize;

use crate::polyline::Point;
use crate::route::GeometryKind;
use crate::session::SessionSnapshot;

/// What the draw button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawButton {
    AddDrawing,
    CancelDrawing,
}

impl DrawButton {
    pub fn label(&self) -> &'static str {
        match self {
            DrawButton::AddDrawing => "Add Drawing",
            DrawButton::CancelDrawing => "Cancel Drawing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteListItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    pub selected: bool,
    /// Deleting is offered only outside drawing mode.
    pub deletable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteListView {
    pub items: Vec<RouteListItem>,
    pub draw_button: DrawButton,
}

impl RouteListView {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        let drawing = snapshot.is_drawing();
        let selected = snapshot.selected_line_id();

        let items = snapshot
            .lines()
            .iter()
            .map(|line| RouteListItem {
                id: line.id().to_string(),
                name: line.name().to_string(),
                kind: line.kind(),
                selected: selected == Some(line.id()),
                deletable: !drawing,
            })
            .collect();

        Self {
            items,
            draw_button: if drawing {
                DrawButton::CancelDrawing
            } else {
                DrawButton::AddDrawing
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineRole {
    Selected,
    Unselected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLine {
    pub id: String,
    pub points: Vec<Point>,
    pub role: LineRole,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOverlayView {
    pub lines: Vec<MapLine>,
    /// The route being drawn, once it has enough points to show a segment.
    pub in_progress: Option<Vec<Point>>,
    /// Route clicks select only when this is set.
    pub lines_clickable: bool,
}

impl MapOverlayView {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        let selected = snapshot.selected_line_id();
        let lines = snapshot
            .lines()
            .iter()
            .map(|line| MapLine {
                id: line.id().to_string(),
                points: line.points().to_vec(),
                role: if selected == Some(line.id()) {
                    LineRole::Selected
                } else {
                    LineRole::Unselected
                },
            })
            .collect();

        let pending = snapshot.pending_points();
        let in_progress = (pending.len() > 1).then(|| pending.to_vec());

        Self {
            lines,
            in_progress,
            lines_clickable: !snapshot.is_drawing(),
        }
    }
}
