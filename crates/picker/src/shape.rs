use crate::canvas::Canvas;
use crate::color::{ChangeSet, Hsv, HsvUpdate};

/// One interactive region of the picker. The controller hit-tests shapes in
/// registration order (first match wins), feeds drag coordinates to `input`,
/// and fans color changes back out through `update`.
pub trait Shape {
    /// Is the local-space point inside this shape's interactive region?
    fn check_hit(&self, x: f32, y: f32) -> bool;

    /// Map a local-space point to the channels this shape controls. Channels
    /// the shape does not own are left unset.
    fn input(&self, x: f32, y: f32) -> HsvUpdate;

    /// React to a color change: reposition the marker and restyle whatever
    /// rendering depends on the changed channels.
    fn update(&mut self, canvas: &mut dyn Canvas, hsv: Hsv, changes: ChangeSet);
}
