//! The shared color state: merge, normalize, diff, notify.

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::{ChangeSet, Hsl, Hsv, HsvUpdate, Rgb};

type ChangeCallback = Box<dyn FnMut(Hsv, ChangeSet)>;

struct ColorInner {
    hsv: Hsv,
    notifying: bool,
    on_change: Option<ChangeCallback>,
}

/// Cloneable handle to the picker's single source-of-truth color.
///
/// All clones share the same state; [`Color::set`] is the only mutation path.
/// The picker registers the single change callback at construction, so
/// programmatic `set` calls from the host flow through the same notification
/// as drag input.
#[derive(Clone)]
pub struct Color {
    inner: Rc<RefCell<ColorInner>>,
}

impl Color {
    pub fn new(hsv: Hsv) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ColorInner {
                hsv: Hsv::new(hsv.h, hsv.s, hsv.v),
                notifying: false,
                on_change: None,
            })),
        }
    }

    /// Merge the update onto the current color, normalize, and synchronously
    /// notify the registered callback with the new color and a per-channel
    /// diff against the pre-mutation value.
    ///
    /// Re-entrancy guard: a `set` issued from inside the change callback
    /// updates state but does not re-enter the callback, so notification
    /// depth is bounded to 1 no matter what listeners do.
    pub fn set(&self, update: impl Into<HsvUpdate>) {
        let update = update.into();
        let (hsv, changes, callback) = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.hsv;
            inner.hsv = before.merged(update);
            let changes = ChangeSet::between(before, inner.hsv);
            log::trace!(
                "color set to {:?} (h:{} s:{} v:{})",
                inner.hsv,
                changes.h,
                changes.s,
                changes.v
            );
            if inner.notifying {
                return;
            }
            let Some(callback) = inner.on_change.take() else {
                return;
            };
            inner.notifying = true;
            (inner.hsv, changes, callback)
        };

        // The callback runs without the state borrowed so a nested `set`
        // hits the guard above instead of a borrow conflict.
        let mut callback = callback;
        callback(hsv, changes);

        let mut inner = self.inner.borrow_mut();
        inner.notifying = false;
        if inner.on_change.is_none() {
            inner.on_change = Some(callback);
        }
    }

    pub fn hsv(&self) -> Hsv {
        self.inner.borrow().hsv
    }

    pub fn rgb(&self) -> Rgb {
        self.hsv().to_rgb()
    }

    pub fn hsl(&self) -> Hsl {
        self.hsv().to_hsl()
    }

    pub fn rgb_string(&self) -> String {
        self.rgb().css_string()
    }

    pub fn hex_string(&self) -> String {
        self.rgb().hex_string()
    }

    /// Install the single change callback. Last registration wins.
    pub(crate) fn set_on_change(&self, callback: impl FnMut(Hsv, ChangeSet) + 'static) {
        self.inner.borrow_mut().on_change = Some(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn approx_eq(a: f32, b: f32) {
        assert!(
            (a - b).abs() < 1e-4,
            "expected {a} ~= {b}, delta={}",
            (a - b).abs()
        );
    }

    #[test]
    fn set_then_read_round_trips_after_normalization() {
        let color = Color::new(Hsv::default());
        color.set(Hsv::new(370.0, 150.0, 50.0));
        let hsv = color.hsv();
        approx_eq(hsv.h, 10.0);
        approx_eq(hsv.s, 100.0);
        approx_eq(hsv.v, 50.0);
    }

    #[test]
    fn partial_update_leaves_other_channels_untouched() {
        let color = Color::new(Hsv::new(120.0, 40.0, 60.0));
        let seen = Rc::new(Cell::new(ChangeSet::default()));
        let sink = seen.clone();
        color.set_on_change(move |_, changes| sink.set(changes));

        color.set(HsvUpdate::value(90.0));

        let hsv = color.hsv();
        approx_eq(hsv.h, 120.0);
        approx_eq(hsv.s, 40.0);
        approx_eq(hsv.v, 90.0);
        assert_eq!(
            seen.get(),
            ChangeSet {
                h: false,
                s: false,
                v: true
            }
        );
    }

    #[test]
    fn idempotent_set_still_notifies_with_all_false_changes() {
        let color = Color::new(Hsv::new(120.0, 40.0, 60.0));
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::new(Cell::new(ChangeSet::all()));
        let (calls_sink, seen_sink) = (calls.clone(), seen.clone());
        color.set_on_change(move |_, changes| {
            calls_sink.set(calls_sink.get() + 1);
            seen_sink.set(changes);
        });

        color.set(Hsv::new(120.0, 40.0, 60.0));

        assert_eq!(calls.get(), 1);
        assert!(!seen.get().any());
    }

    #[test]
    fn nested_set_updates_state_without_re_entering_the_callback() {
        let color = Color::new(Hsv::default());
        let depth = Rc::new(Cell::new(0u32));
        let calls = Rc::new(Cell::new(0u32));
        let (depth_sink, calls_sink, nested) = (depth.clone(), calls.clone(), color.clone());
        color.set_on_change(move |hsv, _| {
            calls_sink.set(calls_sink.get() + 1);
            depth_sink.set(depth_sink.get() + 1);
            assert_eq!(depth_sink.get(), 1, "callback re-entered");
            if hsv.v > 10.0 {
                // Would recurse forever without the guard.
                nested.set(HsvUpdate::value(hsv.v - 20.0));
            }
            depth_sink.set(depth_sink.get() - 1);
        });

        color.set(HsvUpdate::value(80.0));

        assert_eq!(calls.get(), 1);
        // The nested mutation was applied even though it did not notify.
        approx_eq(color.hsv().v, 60.0);
    }

    #[test]
    fn callback_survives_nested_set_for_later_notifications() {
        let color = Color::new(Hsv::default());
        let calls = Rc::new(Cell::new(0u32));
        let (calls_sink, nested) = (calls.clone(), color.clone());
        color.set_on_change(move |_, changes| {
            calls_sink.set(calls_sink.get() + 1);
            if changes.v {
                nested.set(HsvUpdate::hue_saturation(10.0, 10.0));
            }
        });

        color.set(HsvUpdate::value(50.0));
        color.set(HsvUpdate::value(25.0));

        assert_eq!(calls.get(), 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn stored_color_is_always_normalized(
                h in -720.0f32..720.0,
                s in -100.0f32..300.0,
                v in -100.0f32..300.0,
            ) {
                let color = Color::new(Hsv::default());
                color.set(Hsv::new(h, s, v));
                let hsv = color.hsv();
                prop_assert!((0.0..360.0).contains(&hsv.h));
                prop_assert!((0.0..=100.0).contains(&hsv.s));
                prop_assert!((0.0..=100.0).contains(&hsv.v));
            }
        }
    }
}
