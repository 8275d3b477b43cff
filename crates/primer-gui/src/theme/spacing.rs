//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - code blocks, toast
pub const BORDER_RADIUS_LG: f32 = 8.0;

// =============================================================================
// LAYOUT WIDTHS
// =============================================================================

/// Section menu width on lesson pages
pub const MENU_WIDTH: f32 = 240.0;

/// Section menu width when collapsed to a rail
pub const MENU_WIDTH_COLLAPSED: f32 = 48.0;

/// Maximum lesson content width for comfortable reading
pub const CONTENT_MAX_WIDTH: f32 = 760.0;

/// Reading progress bar height at the top of lesson pages
pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;
