//! Font resolution and sized text drawing.
//!
//! A `FontProvider` is resolved once at startup with one slot per font
//! role; the rendering core never branches on platform. When no system
//! font can be loaded, every role falls back to the built-in bitmap font
//! so a render never fails for lack of a font.

use std::path::Path;
use std::sync::Arc;

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use log::{debug, warn};

use super::builtin_font;
use crate::models::RgbColor;

/// Poster title size in pixels.
pub const TITLE_FONT_SIZE: f32 = 24.0;
/// Domain header label size in pixels.
pub const DOMAIN_FONT_SIZE: f32 = 18.0;
/// Legend layer label size in pixels.
pub const LAYER_FONT_SIZE: f32 = 14.0;
/// Cell bullet content size in pixels.
pub const CONTENT_FONT_SIZE: f32 = 12.0;

#[cfg(target_os = "macos")]
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/HelveticaNeue.ttc",
    "/System/Library/Fonts/Helvetica.ttc",
];

#[cfg(target_os = "windows")]
const FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
];

/// The font face backing a [`SizedFont`].
#[derive(Clone)]
enum FontFace {
    /// A parsed system font, shared between roles.
    Vector(Arc<FontVec>),
    /// The built-in 5x7 bitmap font.
    Builtin,
}

/// One font face fixed at one pixel size.
///
/// Width measurement and drawing go through the same backend, so layout
/// decisions always agree with what ends up on the canvas.
#[derive(Clone)]
pub struct SizedFont {
    face: FontFace,
    size: f32,
}

impl SizedFont {
    const fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }

    /// Nominal pixel size of this font.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Vertical advance for stacked lines of this font.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.size + 2.0
    }

    /// Measured pixel width of `text` as a single line.
    #[must_use]
    pub fn line_width(&self, text: &str) -> f32 {
        match &self.face {
            FontFace::Vector(font) => {
                let (width, _) = text_size(PxScale::from(self.size), &**font, text);
                width as f32
            }
            FontFace::Builtin => {
                let glyphs = text.chars().count() as u32;
                (glyphs * builtin_font::GLYPH_ADVANCE * self.builtin_scale()) as f32
            }
        }
    }

    /// Draws `text` with its top-left corner at (`x`, `y`).
    pub fn draw(&self, canvas: &mut RgbaImage, x: f32, y: f32, color: RgbColor, text: &str) {
        match &self.face {
            FontFace::Vector(font) => {
                draw_text_mut(
                    canvas,
                    Rgba([color.r, color.g, color.b, 255]),
                    x.round() as i32,
                    y.round() as i32,
                    PxScale::from(self.size),
                    &**font,
                    text,
                );
            }
            FontFace::Builtin => self.draw_builtin(canvas, x, y, color, text),
        }
    }

    /// Integer upscale factor for the 5x7 bitmap glyphs at this size.
    fn builtin_scale(&self) -> u32 {
        (self.size / 8.0).round().max(1.0) as u32
    }

    fn draw_builtin(&self, canvas: &mut RgbaImage, x: f32, y: f32, color: RgbColor, text: &str) {
        let scale = self.builtin_scale();
        let pixel = Rgba([color.r, color.g, color.b, 255]);
        let origin_x = x.round() as i64;
        let origin_y = y.round() as i64;

        for (index, c) in text.chars().enumerate() {
            let bitmap = builtin_font::glyph(c);
            let glyph_x = origin_x + (index as u32 * builtin_font::GLYPH_ADVANCE * scale) as i64;
            for (col, &column_bits) in bitmap.iter().enumerate() {
                for row in 0..builtin_font::GLYPH_HEIGHT {
                    if column_bits & (1 << row) == 0 {
                        continue;
                    }
                    let block_x = glyph_x + (col as u32 * scale) as i64;
                    let block_y = origin_y + (row * scale) as i64;
                    fill_block(canvas, block_x, block_y, scale, pixel);
                }
            }
        }
    }
}

/// Fills a scale-by-scale pixel block, clipped to the canvas.
fn fill_block(canvas: &mut RgbaImage, x: i64, y: i64, scale: u32, pixel: Rgba<u8>) {
    for dy in 0..i64::from(scale) {
        for dx in 0..i64::from(scale) {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && py >= 0 && px < i64::from(canvas.width()) && py < i64::from(canvas.height())
            {
                canvas.put_pixel(px as u32, py as u32, pixel);
            }
        }
    }
}

/// The four font roles used by the renderer, resolved once at startup.
#[derive(Clone)]
pub struct FontProvider {
    /// Poster title font.
    pub title: SizedFont,
    /// Domain header label font.
    pub domain: SizedFont,
    /// Legend layer label font.
    pub layer: SizedFont,
    /// Cell bullet content font.
    pub content: SizedFont,
}

impl FontProvider {
    /// Resolves the provider from the platform's font candidates, falling
    /// back to the built-in bitmap font when none can be loaded.
    #[must_use]
    pub fn load() -> Self {
        load_system_font().map_or_else(
            || {
                warn!("No usable system font found; falling back to the built-in bitmap font");
                Self::builtin()
            },
            |font| Self::from_face(FontFace::Vector(font)),
        )
    }

    /// A provider backed entirely by the built-in bitmap font.
    ///
    /// Deterministic and asset-free; used as the fallback and by tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_face(FontFace::Builtin)
    }

    fn from_face(face: FontFace) -> Self {
        Self {
            title: SizedFont::new(face.clone(), TITLE_FONT_SIZE),
            domain: SizedFont::new(face.clone(), DOMAIN_FONT_SIZE),
            layer: SizedFont::new(face.clone(), LAYER_FONT_SIZE),
            content: SizedFont::new(face, CONTENT_FONT_SIZE),
        }
    }
}

fn load_system_font() -> Option<Arc<FontVec>> {
    for candidate in FONT_CANDIDATES {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to read font {candidate}: {e}");
                continue;
            }
        };
        let is_collection = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ttc"));
        let parsed = if is_collection {
            FontVec::try_from_vec_and_index(data, 0)
        } else {
            FontVec::try_from_vec(data)
        };
        match parsed {
            Ok(font) => {
                debug!("Resolved system font: {candidate}");
                return Some(Arc::new(font));
            }
            Err(e) => warn!("Failed to parse font {candidate}: {e}"),
        }
    }
    None
}
