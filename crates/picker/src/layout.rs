//! Construction options and the immutable layout derived from them.

use serde::{Deserialize, Serialize};

use crate::color::{Hsv, Rgb};
use crate::errors::PickerError;

/// Picker configuration. Every field only shapes the layout and the shape
/// geometry; none of them affect control flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    pub width: f32,
    pub height: f32,
    /// Initial color as a `#rgb` / `#rrggbb` hex literal.
    pub color: String,
    pub padding: f32,
    pub border_width: f32,
    pub border_color: String,
    pub marker_radius: f32,
    pub slider_margin: f32,
    /// Defaults to `marker_radius * 2 + padding * 2 + border_width * 2`.
    pub slider_height: Option<f32>,
    /// Darken the wheel as the value channel decreases.
    pub wheel_lightness: bool,
    /// Mirror the hue direction around the wheel.
    pub anticlockwise: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 320.0,
            color: "#fff".to_string(),
            padding: 6.0,
            border_width: 0.0,
            border_color: "#fff".to_string(),
            marker_radius: 8.0,
            slider_margin: 24.0,
            slider_height: None,
            wheel_lightness: true,
            anticlockwise: false,
        }
    }
}

/// Geometry resolved once at construction and shared by reference with every
/// shape. Never mutated afterwards; there is no runtime resize.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub border_width: f32,
    pub border_color: Rgb,
    pub marker_radius: f32,
    pub slider_margin: f32,
    pub slider_height: f32,
    /// Width of the wheel disc and the slider track; the wheel is square so
    /// this is also the wheel's height.
    pub content_width: f32,
    pub wheel_radius: f32,
    pub wheel_cx: f32,
    pub wheel_cy: f32,
    /// How far a wheel marker may travel from the center, accounting for the
    /// marker size and padding.
    pub marker_limit: f32,
    /// Top-left corner of the slider track group.
    pub slider_x: f32,
    pub slider_y: f32,
    pub wheel_lightness: bool,
    pub anticlockwise: bool,
    pub initial_color: Hsv,
}

impl Layout {
    pub fn resolve(options: &PickerOptions) -> Result<Self, PickerError> {
        let slider_height = options.slider_height.unwrap_or(
            options.marker_radius * 2.0 + options.padding * 2.0 + options.border_width * 2.0,
        );
        let content_width =
            (options.height - slider_height - options.slider_margin).min(options.width);

        let wheel_radius = content_width / 2.0 - options.border_width;
        let marker_limit = wheel_radius - (options.marker_radius + options.padding);
        // The slider track loses a cap (height / 2) at each end, so a track
        // at least as tall as it is wide has no usable range.
        if options.width <= 0.0
            || options.height <= 0.0
            || marker_limit <= 0.0
            || content_width <= slider_height
        {
            return Err(PickerError::DegenerateLayout {
                width: options.width,
                height: options.height,
                slider_height,
            });
        }

        let border_color = Rgb::parse_hex(&options.border_color)?;
        let initial_color = Rgb::parse_hex(&options.color)?.to_hsv();

        Ok(Self {
            width: options.width,
            height: options.height,
            padding: options.padding,
            border_width: options.border_width,
            border_color,
            marker_radius: options.marker_radius,
            slider_margin: options.slider_margin,
            slider_height,
            content_width,
            wheel_radius,
            wheel_cx: (options.width - content_width) / 2.0 + wheel_radius + options.border_width,
            wheel_cy: wheel_radius + options.border_width,
            marker_limit,
            slider_x: (options.width - content_width) / 2.0,
            slider_y: content_width + options.slider_margin,
            wheel_lightness: options.wheel_lightness,
            anticlockwise: options.anticlockwise,
            initial_color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) {
        assert!(
            (a - b).abs() < 1e-4,
            "expected {a} ~= {b}, delta={}",
            (a - b).abs()
        );
    }

    #[test]
    fn default_options_resolve_to_the_reference_geometry() {
        let layout = Layout::resolve(&PickerOptions::default()).unwrap();

        approx_eq(layout.slider_height, 28.0);
        approx_eq(layout.content_width, 268.0);
        approx_eq(layout.wheel_radius, 134.0);
        approx_eq(layout.wheel_cx, 160.0);
        approx_eq(layout.wheel_cy, 134.0);
        approx_eq(layout.marker_limit, 120.0);
        approx_eq(layout.slider_x, 26.0);
        approx_eq(layout.slider_y, 292.0);
        assert_eq!(layout.initial_color, Hsv::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn explicit_slider_height_wins_over_the_derived_one() {
        let options = PickerOptions {
            slider_height: Some(40.0),
            ..Default::default()
        };
        let layout = Layout::resolve(&options).unwrap();
        approx_eq(layout.slider_height, 40.0);
        approx_eq(layout.content_width, 256.0);
    }

    #[test]
    fn border_width_shrinks_the_wheel_and_offsets_the_center() {
        let options = PickerOptions {
            border_width: 4.0,
            ..Default::default()
        };
        let layout = Layout::resolve(&options).unwrap();
        // slider height grows by 2 * border, content shrinks to match
        approx_eq(layout.slider_height, 36.0);
        approx_eq(layout.content_width, 260.0);
        approx_eq(layout.wheel_radius, 126.0);
        approx_eq(layout.wheel_cy, 130.0);
    }

    #[test]
    fn too_small_a_widget_is_a_construction_error() {
        let options = PickerOptions {
            width: 60.0,
            height: 60.0,
            ..Default::default()
        };
        assert!(matches!(
            Layout::resolve(&options),
            Err(PickerError::DegenerateLayout { .. })
        ));
    }

    #[test]
    fn a_slider_taller_than_its_track_is_a_construction_error() {
        // Tall enough for the wheel, but the rounded caps swallow the whole
        // track; the first press would otherwise clamp to an inverted range.
        let options = PickerOptions {
            width: 320.0,
            height: 600.0,
            slider_height: Some(300.0),
            ..Default::default()
        };
        assert!(matches!(
            Layout::resolve(&options),
            Err(PickerError::DegenerateLayout { .. })
        ));
    }

    #[test]
    fn bad_initial_color_is_a_construction_error() {
        let options = PickerOptions {
            color: "teal".to_string(),
            ..Default::default()
        };
        assert_eq!(
            Layout::resolve(&options),
            Err(PickerError::InvalidColor("teal".to_string()))
        );
    }

    #[test]
    fn options_round_trip_through_serde() {
        let options = PickerOptions {
            width: 200.0,
            anticlockwise: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(serde_json::from_str::<PickerOptions>(&json).unwrap(), options);

        // omitted fields fall back to defaults
        let sparse: PickerOptions = serde_json::from_str(r#"{"width": 100.0}"#).unwrap();
        approx_eq(sparse.width, 100.0);
        approx_eq(sparse.height, 320.0);
    }
}
