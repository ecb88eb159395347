//! Colors - Text Field Theme Colors

use gpui::{rgb, Rgba};

/// Text field color palette - All colors are accessed via associated functions
pub struct TfColors;

impl TfColors {
    // Accent
    /// Accent - Blue 700, used for the focus ring
    pub fn accent() -> Rgba { rgb(0x1976d2) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }

    // Border colors
    /// Focused border
    pub fn border_focus() -> Rgba { Self::accent() }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Disabled input background
    pub fn input_bg_disabled() -> Rgba { rgb(0xf3f4f6) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xc4c4c4) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}

/// Format a color the way a browser reports a computed style, e.g. `rgb(25, 118, 210)`.
///
/// Alpha is ignored.
pub fn css_rgb(color: Rgba) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgb({}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}
