//! Widget style functions for State Primer.
//!
//! Style functions receive `&Theme` and derive colors from its extended
//! palette, so every style follows the active light/dark palette without
//! extra plumbing.
//!
//! ```rust,ignore
//! use crate::theme::{button_primary, card_container};
//!
//! button(text("Run")).style(button_primary)
//! container(content).style(card_container)
//! ```

use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::spacing;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions such as running a snippet.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Active => palette.primary.base.color,
        button::Status::Hovered => palette.primary.strong.color,
        button::Status::Pressed => palette.primary.strong.color,
        button::Status::Disabled => palette.background.weak.color,
    };
    let text_color = match status {
        button::Status::Disabled => palette.background.strong.color,
        _ => palette.primary.base.text,
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - alternative actions such as copying a snippet.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.weak.color,
        _ => palette.background.base.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Ghost button style - borderless, used for menu entries and breadcrumbs.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(palette.background.weak.color),
        _ => None,
    };

    button::Style {
        background: background.map(Into::into),
        text_color: palette.background.base.text,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container - topic cards, quiz cards, disclosure panels.
pub fn card_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Code sample container - slightly sunken monospace region.
pub fn code_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Section menu container on lesson pages.
pub fn menu_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Filled portion of the reading progress bar.
pub fn progress_fill(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.primary.base.color.into()),
        ..Default::default()
    }
}

/// Track portion of the reading progress bar.
pub fn progress_track(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..Default::default()
    }
}
