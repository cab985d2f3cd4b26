//! The pointer-input capability the host implements.
//!
//! The host registers/unregisters real listeners (mouse, touch, whatever the
//! platform has) when asked and feeds normalized [`PointerEvent`]s to
//! [`ColorPicker::handle_pointer`](crate::ColorPicker::handle_pointer).

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Where a subscription is attached. `Widget` sees only events on the
/// widget's own surface; `Document` sees page-global events, used to keep a
/// drag alive when the pointer leaves the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputTarget {
    Widget,
    Document,
}

/// Host-provided event plumbing. Each picker instance drives its own
/// subscription lifetime, so multiple pickers on one page do not interfere.
pub trait InputSource {
    fn subscribe(&mut self, target: InputTarget, phases: &[PointerPhase]);

    fn unsubscribe(&mut self, target: InputTarget, phases: &[PointerPhase]);

    /// Current position of the widget's top-left corner in the same
    /// coordinate space as [`PointerEvent`] client coordinates.
    fn origin(&self) -> (f32, f32);
}

/// A normalized pointer event. For touch input the host passes the first
/// touch point's coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub client_x: f32,
    pub client_y: f32,
    /// Set by the picker while a drag is active; the host should then
    /// suppress the platform's default action (text selection, panning).
    pub default_prevented: bool,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, client_x: f32, client_y: f32) -> Self {
        Self {
            phase,
            client_x,
            client_y,
            default_prevented: false,
        }
    }
}

#[cfg(test)]
pub(crate) mod recording {
    //! An input source that records subscription churn.

    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum InputOp {
        Subscribe(InputTarget, Vec<PointerPhase>),
        Unsubscribe(InputTarget, Vec<PointerPhase>),
    }

    pub(crate) type InputLog = Rc<RefCell<Vec<InputOp>>>;

    pub(crate) struct RecordingInput {
        origin: (f32, f32),
        log: InputLog,
    }

    impl RecordingInput {
        pub(crate) fn new(origin: (f32, f32)) -> Self {
            Self {
                origin,
                log: Rc::default(),
            }
        }

        pub(crate) fn log(&self) -> InputLog {
            self.log.clone()
        }
    }

    impl InputSource for RecordingInput {
        fn subscribe(&mut self, target: InputTarget, phases: &[PointerPhase]) {
            self.log
                .borrow_mut()
                .push(InputOp::Subscribe(target, phases.to_vec()));
        }

        fn unsubscribe(&mut self, target: InputTarget, phases: &[PointerPhase]) {
            self.log
                .borrow_mut()
                .push(InputOp::Unsubscribe(target, phases.to_vec()));
        }

        fn origin(&self) -> (f32, f32) {
            self.origin
        }
    }
}
