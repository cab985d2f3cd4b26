//! The interaction controller: owns the color state, the shapes, the event
//! bus and the pointer state machine.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::canvas::Canvas;
use crate::color::{ChangeSet, Hsv};
use crate::errors::PickerError;
use crate::events::{EventBus, EventKind, ListenerId, PickerEvent};
use crate::input::{InputSource, InputTarget, PointerEvent, PointerPhase};
use crate::layout::{Layout, PickerOptions};
use crate::shape::Shape;
use crate::slider::Slider;
use crate::state::Color;
use crate::wheel::Wheel;

const DRAG_PHASES: [PointerPhase; 2] = [PointerPhase::Move, PointerPhase::Up];

struct PickerCore {
    canvas: Box<dyn Canvas>,
    input: Box<dyn InputSource>,
    /// Hit-tested in order; the slider is registered before the wheel.
    shapes: Vec<Box<dyn Shape>>,
    events: EventBus,
    /// Index of the shape owning the active drag, if any.
    drag_target: Option<usize>,
}

impl PickerCore {
    fn apply_change(&mut self, hsv: Hsv, changes: ChangeSet) {
        let Self { canvas, shapes, .. } = self;
        for shape in shapes.iter_mut() {
            shape.update(canvas.as_mut(), hsv, changes);
        }
    }
}

/// The color picker core.
///
/// Hosts hand it a [`Canvas`] and an [`InputSource`] at construction and then
/// feed it normalized pointer events. Everything runs synchronously on the
/// caller's thread: hit-test, color mutation, shape updates and event
/// emission complete before [`handle_pointer`](Self::handle_pointer) returns.
pub struct ColorPicker {
    color: Color,
    layout: Layout,
    core: Rc<RefCell<PickerCore>>,
    released: bool,
}

impl ColorPicker {
    pub fn new(
        mut canvas: Box<dyn Canvas>,
        mut input: Box<dyn InputSource>,
        options: &PickerOptions,
    ) -> Result<Self, PickerError> {
        let layout = Layout::resolve(options)?;

        let slider = Slider::new(canvas.as_mut(), &layout);
        let wheel = Wheel::new(canvas.as_mut(), &layout);

        input.subscribe(InputTarget::Widget, &[PointerPhase::Down]);

        let core = Rc::new(RefCell::new(PickerCore {
            canvas,
            input,
            shapes: vec![Box::new(slider), Box::new(wheel)],
            events: EventBus::default(),
            drag_target: None,
        }));

        let color = Color::new(layout.initial_color);
        let weak = Rc::downgrade(&core);
        color.set_on_change(move |hsv, changes| notify(&weak, hsv, changes));

        // One full pass so markers and gradients reflect the initial color.
        core.borrow_mut().apply_change(color.hsv(), ChangeSet::all());

        Ok(Self {
            color,
            layout,
            core,
            released: false,
        })
    }

    /// Cloneable handle to the picker's color; `set` on it flows through the
    /// same update/notify path as drag input.
    pub fn color(&self) -> Color {
        self.color.clone()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_dragging(&self) -> bool {
        self.core.borrow().drag_target.is_some()
    }

    pub fn on(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&PickerEvent) + 'static,
    ) -> ListenerId {
        self.core.borrow_mut().events.on(kind, callback)
    }

    pub fn off(&mut self, kind: EventKind, id: ListenerId) {
        self.core.borrow_mut().events.off(kind, id);
    }

    /// Drive the pointer state machine with a normalized event. Marks the
    /// event default-prevented only while a drag is active, so presses that
    /// hit nothing leave scrolling and selection alone.
    pub fn handle_pointer(&mut self, event: &mut PointerEvent) {
        let (origin_x, origin_y) = self.core.borrow().input.origin();
        let x = event.client_x - origin_x;
        let y = event.client_y - origin_y;

        match event.phase {
            PointerPhase::Down => self.pointer_down(x, y),
            PointerPhase::Move => self.pointer_move(x, y),
            PointerPhase::Up => self.pointer_up(),
        }

        if self.core.borrow().drag_target.is_some() {
            event.default_prevented = true;
        }
    }

    /// Tear down all input subscriptions. Called on drop; safe to call early.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let mut core = self.core.borrow_mut();
        if core.drag_target.take().is_some() {
            core.input.unsubscribe(InputTarget::Document, &DRAG_PHASES);
        }
        core.input.unsubscribe(InputTarget::Widget, &[PointerPhase::Down]);
        log::debug!("picker released");
    }

    fn pointer_down(&mut self, x: f32, y: f32) {
        let hit = {
            let core = self.core.borrow();
            if core.drag_target.is_some() {
                return;
            }
            core.shapes.iter().position(|shape| shape.check_hit(x, y))
        };
        let Some(ix) = hit else {
            return;
        };

        {
            let mut core = self.core.borrow_mut();
            core.drag_target = Some(ix);
            core.input.subscribe(InputTarget::Document, &DRAG_PHASES);
        }
        log::debug!("drag started on shape {ix}");
        dispatch(&self.core, &PickerEvent::InputStart);

        let update = self.core.borrow().shapes[ix].input(x, y);
        self.color.set(update);
    }

    fn pointer_move(&mut self, x: f32, y: f32) {
        // No re-hit-testing: the drag target keeps receiving input even when
        // the pointer leaves its bounds.
        let update = {
            let core = self.core.borrow();
            let Some(ix) = core.drag_target else {
                return;
            };
            core.shapes[ix].input(x, y)
        };
        self.color.set(update);
    }

    fn pointer_up(&mut self) {
        let ended = {
            let mut core = self.core.borrow_mut();
            if core.drag_target.take().is_some() {
                core.input.unsubscribe(InputTarget::Document, &DRAG_PHASES);
                true
            } else {
                false
            }
        };
        if ended {
            log::debug!("drag ended");
            dispatch(&self.core, &PickerEvent::InputEnd);
        }
    }
}

impl Drop for ColorPicker {
    fn drop(&mut self) {
        self.release();
    }
}

/// The color state's change callback: fan the new color out to every shape,
/// then tell the outside world. Runs for drags and programmatic sets alike.
fn notify(core: &Weak<RefCell<PickerCore>>, hsv: Hsv, changes: ChangeSet) {
    let Some(core) = core.upgrade() else {
        return;
    };
    core.borrow_mut().apply_change(hsv, changes);
    dispatch(
        &core,
        &PickerEvent::ColorChange {
            color: hsv,
            changes,
        },
    );
}

/// Emit with the core unborrowed, so listeners can reach back into the
/// picker's color without tripping over a live borrow.
fn dispatch(core: &Rc<RefCell<PickerCore>>, event: &PickerEvent) {
    let callbacks = core.borrow().events.snapshot(event.kind());
    for callback in callbacks {
        (callback.borrow_mut())(event);
    }
}
