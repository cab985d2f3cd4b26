//! The hue/saturation wheel: hue is the angle, saturation the distance from
//! the center.

use crate::canvas::{Attrs, Canvas, GradientKind, GradientStop, NodeId, Paint};
use crate::color::{ChangeSet, Hsv, HsvUpdate, Rgb};
use crate::layout::Layout;
use crate::marker::Marker;
use crate::shape::Shape;

pub struct Wheel {
    cx: f32,
    cy: f32,
    radius: f32,
    marker_limit: f32,
    anticlockwise: bool,
    lightness: bool,
    overlay: NodeId,
    marker: Marker,
}

impl Wheel {
    /// Builds the static wheel scene: border, the 360-segment hue ring, the
    /// white saturation falloff, the lightness overlay and the marker. The
    /// ring is never redrawn after this.
    pub fn new(canvas: &mut dyn Canvas, layout: &Layout) -> Self {
        let cx = layout.wheel_cx;
        let cy = layout.wheel_cy;
        let radius = layout.wheel_radius;

        let base = canvas.group(None, Attrs::default());

        canvas.circle(
            base,
            cx,
            cy,
            radius + layout.border_width / 2.0,
            Attrs::default()
                .fill(Paint::Solid(Rgb::WHITE))
                .stroke(Paint::Solid(layout.border_color))
                .stroke_width(layout.border_width),
        );

        let ring = canvas.group(
            Some(base),
            Attrs::default().fill(Paint::None).stroke_width(radius),
        );
        for hue in 0..360 {
            let stroke_hue = if layout.anticlockwise { 360 - hue } else { hue };
            // 1.5 degree sweep per one-degree segment; the overlap hides seams.
            canvas.arc(
                ring,
                cx,
                cy,
                radius / 2.0,
                hue as f32,
                hue as f32 + 1.5,
                Attrs::default().stroke(Paint::Solid(
                    Hsv::new(stroke_hue as f32, 100.0, 100.0).to_rgb(),
                )),
            );
        }

        let falloff = canvas.gradient(
            GradientKind::Radial,
            &[
                GradientStop {
                    offset: 0.0,
                    color: Rgb::WHITE,
                    opacity: 1.0,
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgb::WHITE,
                    opacity: 0.0,
                },
            ],
        );
        canvas.circle(
            base,
            cx,
            cy,
            radius,
            Attrs::default().fill(Paint::Gradient(falloff)),
        );

        let overlay = canvas.circle(
            base,
            cx,
            cy,
            radius,
            Attrs::default()
                .fill(Paint::Solid(Rgb::BLACK))
                .opacity(0.0),
        );

        let marker = Marker::new(canvas, base, layout.marker_radius);

        Self {
            cx,
            cy,
            radius,
            marker_limit: layout.marker_limit,
            anticlockwise: layout.anticlockwise,
            lightness: layout.wheel_lightness,
            overlay,
            marker,
        }
    }

    #[cfg(test)]
    pub(crate) fn marker_position(&self) -> (f32, f32) {
        self.marker.position()
    }
}

impl Shape for Wheel {
    fn check_hit(&self, x: f32, y: f32) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        (dx * dx + dy * dy).sqrt() < self.radius
    }

    fn input(&self, x: f32, y: f32) -> HsvUpdate {
        let dx = self.cx - x;
        let dy = self.cy - y;

        // atan2 lands in (-180, 180]; the +180 shift puts 0 degrees at the
        // positive x axis of the marker-placement formula below.
        let angle = dy.atan2(dx).to_degrees() + 180.0;
        let hue = if self.anticlockwise {
            360.0 - angle
        } else {
            angle
        };
        let dist = (dx * dx + dy * dy).sqrt().min(self.marker_limit);

        HsvUpdate::hue_saturation(hue, 100.0 * dist / self.marker_limit)
    }

    fn update(&mut self, canvas: &mut dyn Canvas, hsv: Hsv, changes: ChangeSet) {
        if changes.v && self.lightness {
            let opacity = ((1.0 - hsv.v / 100.0) * 100.0).round() / 100.0;
            canvas.set_attrs(self.overlay, Attrs::default().opacity(opacity));
        }
        if changes.h || changes.s {
            let hue = if self.anticlockwise {
                360.0 - hsv.h
            } else {
                hsv.h
            };
            let angle = hue.to_radians();
            let dist = hsv.s / 100.0 * self.marker_limit;
            self.marker.move_to(
                canvas,
                self.cx + dist * angle.cos(),
                self.cy + dist * angle.sin(),
            );
        }
    }
}
