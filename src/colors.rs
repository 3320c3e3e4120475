use crate::entry::MediaType;
use ratatui::style::Color;

// Color Theme Constants
pub const COLOR_HEADER_BG: Color = Color::Rgb(222, 222, 222);     // Light gray background
pub const COLOR_HEADER_FG: Color = Color::Rgb(0, 0, 0);           // Dark text
pub const COLOR_SCOPE_TITLE: Color = Color::Rgb(0, 255, 255);     // Bright cyan
pub const COLOR_BADGE: Color = Color::Rgb(160, 160, 160);         // Muted gray badges
pub const COLOR_SIZE: Color = Color::Rgb(78, 154, 6);             // Green for sizes
pub const COLOR_MODIFIED: Color = Color::Rgb(150, 150, 150);      // Gray timestamps
pub const COLOR_FOLDER: Color = Color::Rgb(0, 220, 255);          // Bright cyan for folders
pub const COLOR_STAR: Color = Color::Rgb(255, 220, 0);            // Yellow star marker
pub const COLOR_SEARCH: Color = Color::Rgb(255, 220, 0);          // Active search text
pub const COLOR_SIDEBAR_ACTIVE_BG: Color = Color::Rgb(60, 60, 60);
pub const COLOR_SIDEBAR_ACTIVE_FG: Color = Color::Rgb(0, 255, 255);
pub const COLOR_HELP_TITLE: Color = Color::Rgb(0, 255, 255);      // Bright cyan
pub const COLOR_HELP_HEADER: Color = Color::Rgb(255, 220, 0);     // Vibrant yellow
pub const COLOR_HELP_HINT: Color = Color::Rgb(128, 128, 128);     // Gray
pub const COLOR_HIGHLIGHT_BG: Color = Color::Rgb(255, 255, 255);  // White background when selected
pub const COLOR_HIGHLIGHT_FG: Color = Color::Rgb(40, 40, 40);     // Dark gray text when selected
pub const COLOR_ERROR: Color = Color::Rgb(255, 90, 90);           // Failed commands

/// Exhaustive media color map: a new variant will not compile until it
/// gets a color.
pub fn media_color(media: MediaType) -> Color {
    match media {
        MediaType::Pdf => Color::Rgb(239, 68, 68),           // Red
        MediaType::Image => Color::Rgb(34, 197, 94),         // Green
        MediaType::Video => Color::Rgb(168, 85, 247),        // Purple
        MediaType::Audio => Color::Rgb(249, 115, 22),        // Orange
        MediaType::Archive => Color::Rgb(234, 179, 8),       // Yellow
        MediaType::Document => Color::Rgb(96, 165, 250),     // Blue
        MediaType::Spreadsheet => Color::Rgb(22, 163, 74),   // Dark green
        MediaType::Presentation => Color::Rgb(251, 146, 60), // Amber
        MediaType::Other => Color::Rgb(180, 180, 180),       // Muted
    }
}
