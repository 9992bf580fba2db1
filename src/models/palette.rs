//! Fixed color palette for domain columns and poster chrome.
//!
//! Each domain column is assigned one base color from a seven-entry palette,
//! cycled by domain index. The cycle is intentional: an eighth domain reuses
//! the first color rather than failing.

use super::RgbColor;

/// Header and legend background.
pub const HEADER_BLUE: RgbColor = RgbColor::new(0, 91, 172);

/// Poster title text.
pub const TITLE_YELLOW: RgbColor = RgbColor::new(255, 199, 44);

/// Canvas background.
pub const CANVAS_WHITE: RgbColor = RgbColor::WHITE;

/// Base colors assigned to domain columns, in assignment order.
pub const DOMAIN_PALETTE: [RgbColor; 7] = [
    RgbColor::new(0x36, 0xa9, 0xe1),
    RgbColor::new(0x76, 0xb8, 0x2a),
    RgbColor::new(0xf9, 0xb2, 0x33),
    RgbColor::new(0xe6, 0x00, 0x7e),
    RgbColor::new(0x82, 0x35, 0x8c),
    RgbColor::new(0xc8, 0xd3, 0x00),
    RgbColor::new(0xe6, 0x33, 0x2a),
];

/// Returns the base color for the domain at `index`, cycling the palette.
#[must_use]
pub fn domain_base_color(index: usize) -> RgbColor {
    DOMAIN_PALETTE[index % DOMAIN_PALETTE.len()]
}
