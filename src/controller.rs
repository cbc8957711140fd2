//! The session controller: owns one session's state, accepts user intents
//! and pushes snapshots to observers.

use crate::ids::RandomLineIds;
use crate::interaction::{MapEvent, action_for};
use crate::polyline::Point;
use crate::session::{Action, Outcome, SessionConfig, SessionSnapshot, SessionState, transition};
use crate::traits::{LineIdSource, SessionObserver};

/// Owns the state of one map view for as long as the view is mounted.
///
/// Every change goes through [`SessionController::dispatch`]; the intent
/// methods are shorthands for it.
pub struct SessionController<I = RandomLineIds> {
    state: SessionState,
    config: SessionConfig,
    ids: I,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl SessionController<RandomLineIds> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_ids(config, RandomLineIds)
    }
}

impl Default for SessionController<RandomLineIds> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<I: LineIdSource> SessionController<I> {
    pub fn with_ids(config: SessionConfig, ids: I) -> Self {
        Self {
            state: SessionState::new(),
            config,
            ids,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionSnapshot {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Registers an observer. It immediately receives the current state.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        let mut observer: Box<dyn SessionObserver> = Box::new(observer);
        observer.on_snapshot(&self.state);
        self.observers.push(observer);
    }

    /// Applies one action. Observers hear about it only if the state changed.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let state = std::mem::take(&mut self.state);
        let result = transition(state, action, &self.config, &mut self.ids);
        self.state = result.state;

        if result.outcome.is_applied() {
            for observer in &mut self.observers {
                observer.on_snapshot(&self.state);
            }
        }

        result.outcome
    }

    pub fn toggle_draw_mode(&mut self) -> Outcome {
        self.dispatch(Action::ToggleDrawMode)
    }

    pub fn add_point(&mut self, coordinate: impl Into<Point>) -> Outcome {
        self.dispatch(Action::AddPoint(coordinate.into()))
    }

    pub fn commit_line(&mut self) -> Outcome {
        self.dispatch(Action::CommitLine)
    }

    pub fn select_line(&mut self, id: impl Into<String>) -> Outcome {
        self.dispatch(Action::SelectLine(id.into()))
    }

    pub fn delete_line(&mut self, id: impl Into<String>) -> Outcome {
        self.dispatch(Action::DeleteLine(id.into()))
    }

    /// A click on a drawn route on the map. Same as picking it from the list;
    /// ignored while drawing.
    pub fn click_line(&mut self, id: impl Into<String>) -> Outcome {
        self.select_line(id)
    }

    /// Feeds a raw map event through the interaction mapping.
    ///
    /// Returns `None` when the event means nothing in the current mode.
    pub fn handle_map_event(&mut self, event: MapEvent) -> Option<Outcome> {
        let action = action_for(&self.state, &event)?;
        Some(self.dispatch(action))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::traits::RejectReason;

    fn controller() -> SessionController {
        SessionController::new(SessionConfig::default())
    }

    #[test]
    fn test_observers_receive_current_state_on_subscribe() {
        let mut controller = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.subscribe(move |s: &SessionSnapshot| sink.borrow_mut().push(s.clone()));

        assert_eq!(seen.borrow().len(), 1);
        assert!(!seen.borrow()[0].is_drawing());
    }

    #[test]
    fn test_rejected_actions_do_not_notify() {
        let mut controller = controller();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        controller.subscribe(move |_: &SessionSnapshot| *sink.borrow_mut() += 1);

        assert_eq!(
            controller.commit_line(),
            Outcome::Rejected(RejectReason::TooFewPoints)
        );
        assert_eq!(*count.borrow(), 1);

        controller.toggle_draw_mode();
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_map_events_drive_drawing() {
        let mut controller = controller();
        assert_eq!(controller.handle_map_event(MapEvent::primary((0.0, 0.0))), None);

        controller.toggle_draw_mode();
        assert_eq!(
            controller.handle_map_event(MapEvent::primary((0.0, 0.0))),
            Some(Outcome::Applied)
        );
        assert_eq!(controller.handle_map_event(MapEvent::secondary((0.0, 0.0))), None);
        controller.handle_map_event(MapEvent::primary((1.0, 1.0)));
        assert_eq!(
            controller.handle_map_event(MapEvent::secondary((1.0, 1.0))),
            Some(Outcome::Applied)
        );

        assert_eq!(controller.state().lines().len(), 1);
        assert!(!controller.state().is_drawing());
    }

    #[test]
    fn test_click_line_is_suppressed_while_drawing() {
        let mut controller = controller();
        controller.toggle_draw_mode();
        controller.add_point((0.0, 0.0));
        controller.add_point((1.0, 0.0));
        controller.commit_line();
        let id = controller.state().lines()[0].id().to_string();

        controller.toggle_draw_mode();
        assert_eq!(
            controller.click_line(id.clone()),
            Outcome::Rejected(RejectReason::SelectWhileDrawing)
        );

        controller.toggle_draw_mode();
        assert_eq!(controller.click_line(id.clone()), Outcome::Applied);
        assert_eq!(controller.state().selected_line_id(), Some(id.as_str()));
    }
}
