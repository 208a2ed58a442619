// Centralized theme for the marketplace UI. All colors live here.

use ratatui::style::Color;

// =============================================================================
// Backgrounds
// =============================================================================

/// App background.
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Card background, a subtle lift from black.
pub const BG_CARD: Color = Color::Rgb(18, 18, 18);

/// Selected row/card highlight.
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Sidebar background.
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

// =============================================================================
// Text
// =============================================================================

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// =============================================================================
// Accents - the marketplace mint/lime palette
// =============================================================================

/// Primary accent, the brand mint (#63f2d2). Interactive elements, focus.
pub const ACCENT_MINT: Color = Color::Rgb(99, 242, 210);

/// Active filter highlight, the brand lime (#BEF264).
pub const ACCENT_LIME: Color = Color::Rgb(190, 242, 100);

/// Online/positive green.
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 200, 120);

/// Trending orange.
pub const ACCENT_TRENDING: Color = Color::Rgb(249, 140, 60);

/// Ratings and warnings.
pub const ACCENT_WARNING: Color = Color::Rgb(230, 190, 80);

/// Errors.
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

// =============================================================================
// Borders
// =============================================================================

pub const BORDER_ACTIVE: Color = Color::Rgb(100, 100, 100);
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

/// Icon artwork becomes a glyph lookup by category at the render boundary.
pub fn category_glyph(category: &str) -> &'static str {
    match category {
        "Data" => "◇",
        "Trading" => "⇄",
        "Content" => "✎",
        "Development" => "⚙",
        "Analytics" => "∿",
        "Specialized" => "◎",
        _ => "•",
    }
}
