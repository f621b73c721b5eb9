//! Color theme constants for the Pokédex UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused panel
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Accent color for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::LightRed;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Favorite marker and favorite rows
pub const COLOR_FAVORITE: Color = Color::Rgb(255, 203, 5); // pokeball yellow

/// Selected row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 40, 55);

/// Hovered element background
pub const COLOR_HOVER_BG: Color = Color::Rgb(30, 30, 40);

/// Enabled button text
pub const COLOR_BUTTON: Color = Color::LightCyan;

/// Alert dialog border and title
pub const COLOR_ALERT: Color = Color::Red;

/// Loading spinner
pub const COLOR_LOADING: Color = Color::LightGreen;
