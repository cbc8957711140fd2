//! Map-surface pointer events to session actions.

use serde::{Deserialize, Serialize};

use crate::polyline::Point;
use crate::session::{Action, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Single click.
    Primary,
    /// Double click.
    Secondary,
}

/// A pointer event on the map, reduced to what the session needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapEvent {
    pub kind: PointerKind,
    pub coordinate: Point,
}

impl MapEvent {
    pub fn primary(coordinate: impl Into<Point>) -> Self {
        Self {
            kind: PointerKind::Primary,
            coordinate: coordinate.into(),
        }
    }

    pub fn secondary(coordinate: impl Into<Point>) -> Self {
        Self {
            kind: PointerKind::Secondary,
            coordinate: coordinate.into(),
        }
    }
}

/// Returns the action `event` stands for in `state`, if any.
///
/// Outside drawing mode map clicks mean nothing. A double click only commits
/// once there is enough to commit. The coordinate is passed on verbatim.
pub fn action_for(state: &SessionState, event: &MapEvent) -> Option<Action> {
    if !state.is_drawing() {
        return None;
    }

    match event.kind {
        PointerKind::Primary => Some(Action::AddPoint(event.coordinate)),
        PointerKind::Secondary if state.can_commit() => Some(Action::CommitLine),
        PointerKind::Secondary => None,
    }
}
