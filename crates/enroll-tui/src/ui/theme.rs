// Centralized theme system for consistent UI styling
// All colors and styles are defined here - edit this file to change the look

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Card background - very subtle lift from black
pub const BG_CARD: Color = Color::Rgb(18, 18, 18);

/// Selected card background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Status bar background
pub const BG_STATUSBAR: Color = Color::Rgb(12, 12, 12);

/// Inline error banner background
pub const BG_ERROR: Color = Color::Rgb(48, 20, 20);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Primary accent - muted blue (interactive elements, focus, course codes)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success/positive - muted green (fees, open seats)
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning - muted amber/orange (form actions)
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Special - muted purple
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

// -----------------------------------------------------------------------------
// Enrollment bar colors
// -----------------------------------------------------------------------------

pub const ENROLLMENT_OK: Color = Color::Rgb(106, 153, 85);
pub const ENROLLMENT_WARNING: Color = Color::Rgb(214, 190, 90);
pub const ENROLLMENT_DANGER: Color = Color::Rgb(220, 90, 90);

// -----------------------------------------------------------------------------
// Border/Indicator Colors
// -----------------------------------------------------------------------------

/// Inactive border
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

/// Progress bar empty
pub const PROGRESS_EMPTY: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// STYLE FUNCTIONS
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn label_focused() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn status_error() -> Style {
    Style::default().fg(ACCENT_ERROR)
}

pub fn card_bg() -> Style {
    Style::default().bg(BG_CARD)
}

pub fn card_bg_selected() -> Style {
    Style::default().bg(BG_SELECTED)
}

/// Enabled primary action button
pub fn button_primary() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .bg(Color::Rgb(37, 99, 235))
        .add_modifier(Modifier::BOLD)
}

/// Destructive action button (unregister)
pub fn button_danger() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .bg(Color::Rgb(185, 28, 28))
        .add_modifier(Modifier::BOLD)
}

/// Form submit button
pub fn button_submit() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .bg(Color::Rgb(234, 88, 12))
        .add_modifier(Modifier::BOLD)
}

/// Disabled button (course full, submit in flight)
pub fn button_disabled() -> Style {
    Style::default().fg(TEXT_MUTED).bg(Color::Rgb(55, 55, 55))
}
