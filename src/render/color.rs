//! Cell fill policy: density-scaled darkening with a two-tier visual
//! language.
//!
//! Cells with content darken their domain's base color proportionally to
//! item count; empty cells instead get the base color at a fixed low
//! opacity, so presence and density read as different signals.

use image::Rgba;

use crate::models::RgbColor;

/// Alpha applied to the base color of an empty cell.
pub const EMPTY_CELL_ALPHA: u8 = 25;

/// Lower bound of the darkening intensity for non-empty cells.
pub const MIN_INTENSITY: f32 = 0.4;

/// Darkening intensity for a cell with `count` items out of a matrix-wide
/// maximum of `max_count`.
///
/// Non-increasing in `count`, always within `[MIN_INTENSITY, 1.0]`.
#[must_use]
pub fn intensity(count: usize, max_count: usize) -> f32 {
    let max_count = max_count.max(1);
    (1.0 - 0.4 * (count as f32 / max_count as f32)).max(MIN_INTENSITY)
}

/// Fill color for a cell.
///
/// `count == 0` yields the base color at [`EMPTY_CELL_ALPHA`] (blended over
/// the canvas at draw time); any other count yields an opaque
/// intensity-darkened color.
#[must_use]
pub fn cell_fill(base: RgbColor, count: usize, max_count: usize) -> Rgba<u8> {
    if count == 0 {
        Rgba([base.r, base.g, base.b, EMPTY_CELL_ALPHA])
    } else {
        let darkened = base.darken(intensity(count, max_count));
        Rgba([darkened.r, darkened.g, darkened.b, 255])
    }
}

/// Legible text color against the given fill, chosen by luminance
/// threshold on the RGB channels (alpha ignored).
#[must_use]
pub fn text_color_for(fill: Rgba<u8>) -> RgbColor {
    RgbColor::new(fill[0], fill[1], fill[2]).contrast_color()
}
