//! The value slider: a horizontal rounded-cap track below the wheel.

use crate::canvas::{Attrs, Canvas, GradientId, GradientKind, GradientStop, Paint, Transform};
use crate::color::{ChangeSet, Hsv, HsvUpdate, Rgb};
use crate::layout::Layout;
use crate::marker::Marker;
use crate::shape::Shape;

pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    /// Radius of the rounded track ends; the marker stays off them.
    cap: f32,
    track_range: f32,
    gradient: GradientId,
    marker: Marker,
}

impl Slider {
    pub fn new(canvas: &mut dyn Canvas, layout: &Layout) -> Self {
        let width = layout.content_width;
        let height = layout.slider_height;
        let border_width = layout.border_width;
        let corner_radius = height / 2.0 - border_width / 2.0;
        let cap = height / 2.0;

        let base = canvas.group(None, Attrs::default());
        canvas.set_transform(
            base,
            Transform::Translate {
                x: layout.slider_x,
                y: layout.slider_y,
            },
        );

        let gradient = canvas.gradient(
            GradientKind::Linear,
            &[
                GradientStop {
                    offset: 0.0,
                    color: Rgb::BLACK,
                    opacity: 1.0,
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgb::WHITE,
                    opacity: 1.0,
                },
            ],
        );

        canvas.rect(
            base,
            border_width / 2.0,
            border_width / 2.0,
            width - border_width,
            height - border_width,
            Attrs::default()
                .fill(Paint::Gradient(gradient))
                .stroke(Paint::Solid(layout.border_color))
                .stroke_width(border_width)
                .corner_radius(corner_radius),
        );

        let marker = Marker::new(canvas, base, layout.marker_radius);

        Self {
            x: layout.slider_x,
            y: layout.slider_y,
            width,
            height,
            cap,
            track_range: width - cap * 2.0,
            gradient,
            marker,
        }
    }

    #[cfg(test)]
    pub(crate) fn marker_position(&self) -> (f32, f32) {
        self.marker.position()
    }
}

impl Shape for Slider {
    fn check_hit(&self, x: f32, y: f32) -> bool {
        x > self.x && x < self.x + self.width && y > self.y && y < self.y + self.height
    }

    fn input(&self, x: f32, _y: f32) -> HsvUpdate {
        let track_start = self.x + self.cap;
        let track_end = self.x + self.width - self.cap;
        let dist = x.clamp(track_start, track_end) - track_start;
        HsvUpdate::value((100.0 * dist / self.track_range).round())
    }

    fn update(&mut self, canvas: &mut dyn Canvas, hsv: Hsv, changes: ChangeSet) {
        if changes.h || changes.s {
            // Keep the bright end of the track showing the current
            // hue/saturation at full value, through the shared conversion.
            canvas.set_gradient_stop(
                self.gradient,
                1,
                GradientStop {
                    offset: 1.0,
                    color: Hsv::new(hsv.h, hsv.s, 100.0).to_rgb(),
                    opacity: 1.0,
                },
            );
        }
        if changes.v {
            // Marker coordinates are local to the translated track group.
            self.marker.move_to(
                canvas,
                self.cap + hsv.v / 100.0 * self.track_range,
                self.height / 2.0,
            );
        }
    }
}
