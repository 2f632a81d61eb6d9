//! Interaction state and callback types
//!
//! The controller is the only writer of [`InteractionState`]; renderers get a
//! shared reference or a copied snapshot.

use serde::{Deserialize, Serialize};

/// Current phase of the interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KnobPhase {
    /// No drag in progress; discrete steps are accepted
    #[default]
    Idle,
    /// Between a start and the matching end/cancel
    Active,
}

/// Mutable per-widget state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    /// Current value, derived from `percentage`
    pub value: Option<f64>,
    /// Fractional position; only leaves [0, 1] in multi-rotation mode
    pub percentage: Option<f64>,
    /// Last accepted pointer angle (degrees)
    pub mouse_angle: Option<f64>,
    pub phase: KnobPhase,
    /// Snapshot taken at start, used by cancel
    pub start_value: Option<f64>,
    pub start_percentage: Option<f64>,
}

impl InteractionState {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == KnobPhase::Active
    }

    /// Drop the start snapshot and return to idle
    pub(crate) fn finish(&mut self) {
        self.start_value = None;
        self.start_percentage = None;
        self.phase = KnobPhase::Idle;
    }
}

/// A callback invocation, in the order the controller fired it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KnobEvent {
    Start,
    InteractiveChange(f64),
    Change(f64),
    End,
}

/// Receiver for controller callbacks
///
/// All methods default to no-ops. Calls are synchronous and must not block.
pub trait KnobListener {
    fn on_start(&mut self) {}
    fn on_interactive_change(&mut self, _value: f64) {}
    fn on_change(&mut self, _value: f64) {}
    fn on_end(&mut self) {}
}

/// Ignores every callback
impl KnobListener for () {}

/// Records callbacks as events
impl KnobListener for Vec<KnobEvent> {
    fn on_start(&mut self) {
        self.push(KnobEvent::Start);
    }

    fn on_interactive_change(&mut self, value: f64) {
        self.push(KnobEvent::InteractiveChange(value));
    }

    fn on_change(&mut self, value: f64) {
        self.push(KnobEvent::Change(value));
    }

    fn on_end(&mut self) {
        self.push(KnobEvent::End);
    }
}

type ValueCallback = Box<dyn FnMut(f64)>;
type Notify = Box<dyn FnMut()>;

/// Listener built from optional closures
#[derive(Default)]
pub struct Callbacks {
    on_start: Option<Notify>,
    on_interactive_change: Option<ValueCallback>,
    on_change: Option<ValueCallback>,
    on_end: Option<Notify>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn with_interactive_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_interactive_change = Some(Box::new(f));
        self
    }

    pub fn with_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn with_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_start", &self.on_start.is_some())
            .field("on_interactive_change", &self.on_interactive_change.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

impl KnobListener for Callbacks {
    fn on_start(&mut self) {
        if let Some(f) = self.on_start.as_mut() {
            f();
        }
    }

    fn on_interactive_change(&mut self, value: f64) {
        if let Some(f) = self.on_interactive_change.as_mut() {
            f(value);
        }
    }

    fn on_change(&mut self, value: f64) {
        if let Some(f) = self.on_change.as_mut() {
            f(value);
        }
    }

    fn on_end(&mut self) {
        if let Some(f) = self.on_end.as_mut() {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_finish_clears_snapshot() {
        let mut state = InteractionState {
            value: Some(3.0),
            percentage: Some(0.3),
            mouse_angle: Some(12.0),
            phase: KnobPhase::Active,
            start_value: Some(1.0),
            start_percentage: Some(0.1),
        };
        state.finish();
        assert!(!state.is_active());
        assert_eq!(state.start_value, None);
        assert_eq!(state.start_percentage, None);
        assert_eq!(state.value, Some(3.0));
    }

    #[test]
    fn test_event_recorder() {
        let mut events: Vec<KnobEvent> = Vec::new();
        events.on_start();
        events.on_change(4.0);
        events.on_end();
        assert_eq!(
            events,
            vec![KnobEvent::Start, KnobEvent::Change(4.0), KnobEvent::End]
        );
    }

    #[test]
    fn test_callbacks_dispatch() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut callbacks = Callbacks::new().with_change(move |v| sink.borrow_mut().push(v));

        callbacks.on_change(7.5);
        // Unset callbacks are ignored
        callbacks.on_start();
        callbacks.on_interactive_change(1.0);

        assert_eq!(*seen.borrow(), vec![7.5]);
    }
}
