//! Drawing session state and its transition function.
//!
//! All state changes go through [`transition`]. A transition whose
//! precondition fails hands the state back untouched and reports why in
//! [`Outcome::Rejected`]; nothing is ever surfaced as an error.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ids::RandomLineIds;
use crate::polyline::{Point, PointBuffer};
use crate::route::{Line, MIN_LINE_POINTS};
use crate::traits::{LineIdSource, RejectReason};

/// How many ids to request from a [`LineIdSource`] before giving up on it.
const MAX_ID_ATTEMPTS: usize = 16;

/// Host-tunable settings for a drawing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Prefix of default route names ("Route 1", "Route 2", ...).
    pub name_prefix: String,
    /// Where the host map should open.
    pub initial_center: Point,
    pub initial_zoom: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name_prefix: "Route".to_string(),
            initial_center: Point::new(51.505, -0.09),
            initial_zoom: 13,
        }
    }
}

impl SessionConfig {
    fn route_name(&self, ordinal: usize) -> String {
        format!("{} {}", self.name_prefix, ordinal)
    }
}

/// The single aggregate behind one map view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    lines: Vec<Line>,
    selected_line_id: Option<String>,
    pending_points: PointBuffer,
    is_drawing: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed routes in display order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn selected_line_id(&self) -> Option<&str> {
        self.selected_line_id.as_deref()
    }

    pub fn selected_line(&self) -> Option<&Line> {
        self.selected_line_id().and_then(|id| self.line(id))
    }

    /// Points of the route being drawn.
    pub fn pending_points(&self) -> &[Point] {
        self.pending_points.points()
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Whether a commit would currently succeed.
    pub fn can_commit(&self) -> bool {
        self.pending_points.len() >= MIN_LINE_POINTS
    }

    /// Checks the session invariants.
    pub fn is_consistent(&self) -> bool {
        if self.is_drawing && self.selected_line_id.is_some() {
            return false;
        }
        if !self.is_drawing && !self.pending_points.is_empty() {
            return false;
        }
        if let Some(id) = &self.selected_line_id {
            if self.lines.iter().filter(|line| line.id() == id).count() != 1 {
                return false;
            }
        }

        let mut ids = HashSet::new();
        self.lines
            .iter()
            .all(|line| line.points().len() >= MIN_LINE_POINTS && ids.insert(line.id()))
    }
}

/// What the state is now; returned after every transition and handed to
/// observers.
pub type SessionSnapshot = SessionState;

/// A user intent, applied by [`transition`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleDrawMode,
    AddPoint(Point),
    CommitLine,
    SelectLine(String),
    DeleteLine(String),
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::ToggleDrawMode => "toggle_draw_mode",
            Action::AddPoint(_) => "add_point",
            Action::CommitLine => "commit_line",
            Action::SelectLine(_) => "select_line",
            Action::DeleteLine(_) => "delete_line",
        }
    }
}

/// Whether a transition changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(RejectReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// The state after a transition, with what happened to the action.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: SessionState,
    pub outcome: Outcome,
}

/// Applies `action` to `state`.
///
/// Rejected actions return `state` exactly as it was passed in.
pub fn transition<I>(
    mut state: SessionState,
    action: Action,
    config: &SessionConfig,
    ids: &mut I,
) -> Transition
where
    I: LineIdSource + ?Sized,
{
    let action_name = action.name();
    let result = match action {
        Action::ToggleDrawMode => {
            toggle_draw_mode(&mut state);
            Ok(())
        }
        Action::AddPoint(point) => add_point(&mut state, point),
        Action::CommitLine => commit_line(&mut state, config, ids),
        Action::SelectLine(id) => select_line(&mut state, id),
        Action::DeleteLine(id) => delete_line(&mut state, &id),
    };

    let outcome = match result {
        Ok(()) => {
            tracing::trace!(
                action = action_name,
                drawing = state.is_drawing,
                pending = state.pending_points.len(),
                lines = state.lines.len(),
                "transition applied"
            );
            Outcome::Applied
        }
        Err(reason) => {
            tracing::debug!(action = action_name, ?reason, "transition ignored");
            Outcome::Rejected(reason)
        }
    };

    debug_assert!(state.is_consistent(), "inconsistent session: {:?}", state);
    Transition { state, outcome }
}

fn toggle_draw_mode(state: &mut SessionState) {
    state.is_drawing = !state.is_drawing;
    state.pending_points.clear();
    if state.is_drawing {
        state.selected_line_id = None;
    }
}

fn add_point(state: &mut SessionState, point: Point) -> Result<(), RejectReason> {
    if !state.is_drawing {
        return Err(RejectReason::NotDrawing);
    }
    if !state.pending_points.push(point) {
        return Err(RejectReason::DuplicatePoint);
    }
    Ok(())
}

fn commit_line<I>(
    state: &mut SessionState,
    config: &SessionConfig,
    ids: &mut I,
) -> Result<(), RejectReason>
where
    I: LineIdSource + ?Sized,
{
    if !state.can_commit() {
        return Err(RejectReason::TooFewPoints);
    }

    let id = fresh_id(state, ids);
    let name = config.route_name(state.lines.len() + 1);
    let points = state.pending_points.points().to_vec();
    let line = Line::new(id, name, points).map_err(|_| RejectReason::TooFewPoints)?;

    tracing::info!(
        id = line.id(),
        name = line.name(),
        points = line.points().len(),
        "route committed"
    );

    state.pending_points.clear();
    state.lines.push(line);
    state.is_drawing = false;
    state.selected_line_id = None;
    Ok(())
}

/// Draws ids until one is not already in use. After
/// [`MAX_ID_ATTEMPTS`] clashes the id comes from [`RandomLineIds`] instead.
fn fresh_id<I>(state: &SessionState, ids: &mut I) -> String
where
    I: LineIdSource + ?Sized,
{
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ids.next_id();
        if state.line(&id).is_none() {
            return id;
        }
        tracing::debug!(%id, "id source produced an id already in use");
    }

    tracing::warn!(
        attempts = MAX_ID_ATTEMPTS,
        "id source keeps producing ids in use, falling back to random ids"
    );
    RandomLineIds.next_id()
}

fn select_line(state: &mut SessionState, id: String) -> Result<(), RejectReason> {
    if state.is_drawing {
        return Err(RejectReason::SelectWhileDrawing);
    }
    if state.line(&id).is_none() {
        return Err(RejectReason::UnknownLine);
    }
    state.selected_line_id = Some(id);
    Ok(())
}

fn delete_line(state: &mut SessionState, id: &str) -> Result<(), RejectReason> {
    let Some(index) = state.lines.iter().position(|line| line.id() == id) else {
        return Err(RejectReason::UnknownLine);
    };

    let removed = state.lines.remove(index);
    tracing::info!(id = removed.id(), name = removed.name(), "route deleted");

    if state.selected_line_id.as_deref() == Some(id) {
        state.selected_line_id = None;
    }
    state.pending_points.clear();
    Ok(())
}
