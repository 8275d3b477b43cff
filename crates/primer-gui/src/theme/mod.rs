//! Theme module for State Primer.
//!
//! Provides light/dark palettes integrated with Iced's theme system,
//! spacing constants, and custom widget style functions.

pub mod palette;
pub mod spacing;
pub mod style;

use iced::Theme;

pub use palette::{ThemeMode, primer_palette};

// Re-export spacing constants (only those currently used)
pub use spacing::{
    BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, CONTENT_MAX_WIDTH, MENU_WIDTH,
    MENU_WIDTH_COLLAPSED, PROGRESS_BAR_HEIGHT, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL,
    SPACING_XS,
};

// Re-export widget style functions
pub use style::{
    button_ghost, button_primary, button_secondary, card_container, code_container, menu_container,
    progress_fill, progress_track,
};

/// Creates the application theme for the given mode.
///
/// `system_is_dark` feeds the `System` mode, which follows the operating
/// system preference reported by Iced at runtime.
pub fn primer_theme(theme_mode: ThemeMode, system_is_dark: bool) -> Theme {
    let palette = primer_palette(theme_mode, system_is_dark);
    let name = if theme_mode.is_dark(system_is_dark) {
        "Primer Dark"
    } else {
        "Primer Light"
    };

    Theme::custom(name.to_string(), palette)
}
