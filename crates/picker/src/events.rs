//! The picker's event bus: typed events, wildcard listeners, identity removal.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::color::{ChangeSet, Hsv};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickerEvent {
    /// A drag began on one of the shapes.
    InputStart,
    /// The active drag ended.
    InputEnd,
    /// The color changed, by drag or by a programmatic `set`.
    ColorChange { color: Hsv, changes: ChangeSet },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    InputStart,
    InputEnd,
    ColorChange,
    /// Matches every event, after the kind-specific listeners.
    Any,
}

impl PickerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PickerEvent::InputStart => EventKind::InputStart,
            PickerEvent::InputEnd => EventKind::InputEnd,
            PickerEvent::ColorChange { .. } => EventKind::ColorChange,
        }
    }
}

/// Token identifying one registration; removal matches the first listener
/// with the same kind and id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

pub(crate) type Callback = Rc<RefCell<dyn FnMut(&PickerEvent)>>;

struct Listener {
    kind: EventKind,
    id: ListenerId,
    callback: Callback,
}

/// Subscribe/emit with a wildcard kind. Emission is synchronous and in
/// registration order: kind listeners first, then wildcard listeners. A
/// panicking callback is not caught here; it unwinds to the caller.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl EventBus {
    pub fn on(&mut self, kind: EventKind, callback: impl FnMut(&PickerEvent) + 'static) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(Listener {
            kind,
            id,
            callback: Rc::new(RefCell::new(callback)),
        });
        id
    }

    /// Remove the first registration matching `(kind, id)`; unknown pairs are
    /// ignored.
    pub fn off(&mut self, kind: EventKind, id: ListenerId) {
        if let Some(ix) = self
            .listeners
            .iter()
            .position(|listener| listener.kind == kind && listener.id == id)
        {
            self.listeners.remove(ix);
        }
    }

    pub fn emit(&self, event: &PickerEvent) {
        for callback in self.snapshot(event.kind()) {
            (callback.borrow_mut())(event);
        }
    }

    /// The callbacks `emit` would run, cloned out so the bus (and whatever
    /// owns it) need not stay borrowed while they execute.
    pub(crate) fn snapshot(&self, kind: EventKind) -> SmallVec<[Callback; 4]> {
        let mut callbacks = SmallVec::new();
        callbacks.extend(
            self.listeners
                .iter()
                .filter(|listener| listener.kind == kind)
                .map(|listener| listener.callback.clone()),
        );
        if kind != EventKind::Any {
            callbacks.extend(
                self.listeners
                    .iter()
                    .filter(|listener| listener.kind == EventKind::Any)
                    .map(|listener| listener.callback.clone()),
            );
        }
        callbacks
    }
}
