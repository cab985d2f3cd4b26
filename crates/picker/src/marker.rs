use crate::canvas::{Attrs, Canvas, NodeId, Paint, Transform};
use crate::color::Rgb;

/// The draggable handle on a shape: two concentric ring strokes in a group
/// that gets translated around. Remembers nothing but its last position.
pub struct Marker {
    group: NodeId,
    position: (f32, f32),
}

impl Marker {
    pub fn new(canvas: &mut dyn Canvas, parent: NodeId, radius: f32) -> Self {
        let group = canvas.group(Some(parent), Attrs::default());
        canvas.circle(
            group,
            0.0,
            0.0,
            radius,
            Attrs::default()
                .fill(Paint::None)
                .stroke(Paint::Solid(Rgb::BLACK))
                .stroke_width(5.0),
        );
        canvas.circle(
            group,
            0.0,
            0.0,
            radius,
            Attrs::default()
                .fill(Paint::None)
                .stroke(Paint::Solid(Rgb::WHITE))
                .stroke_width(2.0),
        );
        Self {
            group,
            position: (0.0, 0.0),
        }
    }

    pub fn move_to(&mut self, canvas: &mut dyn Canvas, x: f32, y: f32) {
        self.position = (x, y);
        canvas.set_transform(self.group, Transform::Translate { x, y });
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }
}
