use thiserror::Error;

/// Construction-time failures. Runtime input paths never error; out-of-range
/// values are normalized and misses are ignored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    /// The configured color is not a valid `#rgb` / `#rrggbb` literal.
    #[error("invalid hex color literal {0:?}")]
    InvalidColor(String),

    /// The configured dimensions leave no room for the wheel once the slider
    /// and its margin are carved out.
    #[error("{width}x{height} leaves no room for the wheel (slider height {slider_height})")]
    DegenerateLayout {
        width: f32,
        height: f32,
        slider_height: f32,
    },
}
