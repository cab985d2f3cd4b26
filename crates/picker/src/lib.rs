//! Host-agnostic core of an HSV color picker widget: a hue/saturation wheel
//! with a value slider underneath.
//!
//! The crate owns the color model, the widget geometry, the pointer-drag
//! state machine and the change-event plumbing. It draws through the
//! [`Canvas`] trait and receives pointer input through the [`InputSource`]
//! trait, so any host that can implement those two capabilities (an SVG DOM,
//! a GPU scene graph, a test recorder) gets the full widget behavior.
//!
//! ```no_run
//! # use colorwheel::{ColorPicker, PickerOptions, EventKind, PickerEvent};
//! # fn host_canvas() -> Box<dyn colorwheel::Canvas> { unimplemented!() }
//! # fn host_input() -> Box<dyn colorwheel::InputSource> { unimplemented!() }
//! let mut picker = ColorPicker::new(
//!     host_canvas(),
//!     host_input(),
//!     &PickerOptions {
//!         color: "#ff8800".to_string(),
//!         ..Default::default()
//!     },
//! )?;
//! picker.on(EventKind::ColorChange, |event| {
//!     if let PickerEvent::ColorChange { color, .. } = event {
//!         println!("now {}", color.to_rgb().hex_string());
//!     }
//! });
//! # Ok::<(), colorwheel::PickerError>(())
//! ```

mod canvas;
mod color;
mod errors;
mod events;
mod input;
mod layout;
mod marker;
mod picker;
mod shape;
mod slider;
mod state;
mod wheel;

pub use canvas::{
    Attrs, Canvas, GradientId, GradientKind, GradientStop, NodeId, Paint, Transform,
};
pub use color::{ChangeSet, Hsl, Hsv, HsvUpdate, Rgb};
pub use errors::PickerError;
pub use events::{EventKind, ListenerId, PickerEvent};
pub use input::{InputSource, InputTarget, PointerEvent, PointerPhase};
pub use layout::{Layout, PickerOptions};
pub use picker::ColorPicker;
pub use shape::Shape;
pub use state::Color;
