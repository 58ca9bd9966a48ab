//! Theme configuration for Mozzi Wavetable Uploader.
//!
//! This module provides custom colors and sizes used by the views.

use iced::Color;

/// Application colors.
pub mod colors {
    use super::Color;

    /// Drop zone background
    pub const DROP_ZONE: Color = Color::from_rgb(0.97, 0.97, 0.97);

    /// Drop zone background while files hover over the window
    pub const DROP_ZONE_ACTIVE: Color = Color::from_rgb(0.88, 0.93, 1.0);

    /// Drop zone border
    pub const DROP_BORDER: Color = Color::from_rgb(0.80, 0.80, 0.80);

    /// Drop zone border while highlighted
    pub const DROP_BORDER_ACTIVE: Color = Color::from_rgb(0.0, 0.48, 1.0);

    /// Generated result background
    pub const SUCCESS_BG: Color = Color::from_rgb(0.83, 0.93, 0.85);

    /// Generated result border
    pub const SUCCESS_BORDER: Color = Color::from_rgb(0.76, 0.90, 0.80);

    /// Error block background
    pub const ERROR_BG: Color = Color::from_rgb(0.97, 0.84, 0.85);

    /// Error block border
    pub const ERROR_BORDER: Color = Color::from_rgb(0.96, 0.78, 0.80);

    /// Error text
    pub const ERROR_TEXT: Color = Color::from_rgb(0.45, 0.11, 0.14);

    /// Inline error next to inputs and failed upload lines
    pub const ERROR_INLINE: Color = Color::from_rgb(0.86, 0.08, 0.24);

    /// Preformatted log background
    pub const LOG_BG: Color = Color::from_rgb(0.93, 0.93, 0.93);

    /// Header content background
    pub const CODE_BG: Color = Color::WHITE;

    /// Border color
    pub const BORDER: Color = Color::from_rgb(0.87, 0.87, 0.87);

    /// Download button
    pub const DOWNLOAD: Color = Color::from_rgb(0.0, 0.48, 1.0);

    /// Copy button
    pub const COPY: Color = Color::from_rgb(0.16, 0.65, 0.27);

    /// Copy button while acknowledging
    pub const COPIED: Color = Color::from_rgb(0.10, 0.53, 0.33);

    /// Text primary
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.20, 0.20, 0.20);

    /// Text secondary
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.45, 0.45, 0.45);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 12.0;
    /// Normal font size
    pub const NORMAL: f32 = 14.0;
    /// Large font size
    pub const LG: f32 = 16.0;
    /// Header font size
    pub const HEADER: f32 = 20.0;
}
