//! Seams between the drawing session and its host.
//!
//! Kept minimal. Hosts implement them to plug in id generation and to
//! receive state after each change.

use crate::session::SessionSnapshot;

/// Produces ids for newly committed routes.
///
/// Ids must not repeat within a session, including ids of routes that have
/// since been deleted.
pub trait LineIdSource {
    fn next_id(&mut self) -> String;
}

/// Receives the full session state after every applied transition.
pub trait SessionObserver {
    fn on_snapshot(&mut self, snapshot: &SessionSnapshot);
}

impl<F> SessionObserver for F
where
    F: FnMut(&SessionSnapshot),
{
    fn on_snapshot(&mut self, snapshot: &SessionSnapshot) {
        self(snapshot)
    }
}

/// Why a transition left the state untouched.
///
/// These are expected interaction noise (extra clicks, stale UI), not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The point is already in the buffer.
    DuplicatePoint,
    /// A point was offered while not in drawing mode.
    NotDrawing,
    /// Commit requested with fewer than two pending points.
    TooFewPoints,
    /// Selection requested while drawing.
    SelectWhileDrawing,
    /// No route with the given id.
    UnknownLine,
}
