//! Color palettes for State Primer.
//!
//! Provides light and dark palettes that integrate with Iced's theme system
//! via the `Palette` type.

use iced::Color;
use iced::theme::Palette;

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Stable identifier used when persisting the choice.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a persisted slug. Unknown values yield `None` so a stale or
    /// garbled store entry falls back to the default.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// All available modes for the theme menu.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Check if this is a dark mode (or resolves to dark).
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Create the Iced Palette for the given theme configuration.
///
/// This returns a `Palette` that Iced uses to generate its `ExtendedPalette`
/// which provides all the color variations for widgets.
pub fn primer_palette(theme_mode: ThemeMode, system_is_dark: bool) -> Palette {
    if theme_mode.is_dark(system_is_dark) {
        dark_palette()
    } else {
        light_palette()
    }
}

/// Light palette - default for the reading-heavy lesson layout.
fn light_palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.98, 0.99),
        text: Color::from_rgb(0.12, 0.13, 0.16),
        primary: Color::from_rgb(0.35, 0.30, 0.75), // Indigo
        success: Color::from_rgb(0.13, 0.62, 0.40), // Green
        warning: Color::from_rgb(0.93, 0.64, 0.09), // Amber
        danger: Color::from_rgb(0.82, 0.23, 0.27),  // Red
    }
}

/// Dark palette - brighter accents for contrast on near-black.
fn dark_palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.09, 0.09, 0.12),
        text: Color::from_rgb(0.93, 0.93, 0.96),
        primary: Color::from_rgb(0.55, 0.52, 0.95),
        success: Color::from_rgb(0.30, 0.78, 0.52),
        warning: Color::from_rgb(0.98, 0.75, 0.25),
        danger: Color::from_rgb(0.94, 0.42, 0.44),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trips_for_every_mode() {
        for mode in ThemeMode::ALL {
            assert_eq!(ThemeMode::from_slug(mode.slug()), Some(mode));
        }
        assert_eq!(ThemeMode::from_slug("sepia"), None);
    }

    #[test]
    fn system_mode_follows_the_reported_preference() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(!ThemeMode::Light.is_dark(true));
    }
}
