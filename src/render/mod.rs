//! Poster rendering pipeline.
//!
//! A render is one deterministic pass over the landscape: measure the
//! matrix-wide maximum item count, draw the header chrome and the rotated
//! legend labels, then fill and compose every (domain, layer) cell in
//! row-major order. Nothing is drawn before the geometry is validated,
//! and no step backtracks.

pub mod builtin_font;
pub mod cell;
pub mod color;
pub mod fonts;
pub mod geometry;
pub mod legend;
pub mod thumbs;
pub mod wrap;

// Re-export the types callers interact with
pub use cell::{compose_cell, CellCursor};
pub use fonts::FontProvider;
pub use geometry::{GridGeometry, Rect};
pub use wrap::wrap_to_width;

use std::path::PathBuf;

use anyhow::Result;
use image::{Pixel, Rgba, RgbaImage};
use log::debug;

use crate::models::{domain_base_color, palette, Entry, Landscape, RgbColor};

/// Canvas dimensions, chrome metrics, and asset location for one render.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Output image width in pixels.
    pub canvas_width: u32,
    /// Output image height in pixels.
    pub canvas_height: u32,
    /// Outer margin on all four sides.
    pub margin: f32,
    /// Total header height: title band plus domain-label band.
    pub header_height: f32,
    /// Height of the domain-label band within the header.
    pub domain_band_height: f32,
    /// Width of the rotated legend column on the right.
    pub legend_width: f32,
    /// Poster title, centered in the title band.
    pub title: String,
    /// Directory resolved against for `<name>.png` thumbnail assets.
    pub asset_dir: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas_width: 1920,
            canvas_height: 1080,
            margin: 30.0,
            header_height: 100.0,
            domain_band_height: 40.0,
            legend_width: 50.0,
            title: "Capability Landscape".to_string(),
            asset_dir: PathBuf::from("img"),
        }
    }
}

/// Renders the landscape to an RGBA pixel buffer.
///
/// Pure with respect to its inputs: the same landscape, settings, and
/// fonts always produce the same buffer (thumbnail assets aside).
///
/// # Errors
///
/// Fails before any drawing when either category axis is empty.
pub fn render_landscape(
    landscape: &Landscape,
    settings: &RenderSettings,
    fonts: &FontProvider,
) -> Result<RgbaImage> {
    let geometry = GridGeometry::new(settings, landscape.layers.len(), landscape.domains.len())?;
    let max_count = landscape.max_item_count();
    debug!(
        "Rendering {} layer(s) x {} domain(s), max item count {max_count}",
        landscape.layers.len(),
        landscape.domains.len()
    );

    let mut canvas = RgbaImage::from_pixel(
        settings.canvas_width,
        settings.canvas_height,
        opaque(palette::CANVAS_WHITE),
    );

    draw_chrome(&mut canvas, settings, &geometry, fonts);
    legend::draw_legend_labels(&mut canvas, fonts, &geometry, &landscape.layers);

    for (domain_idx, domain) in landscape.domains.iter().enumerate() {
        let base = domain_base_color(domain_idx);
        draw_domain_label(&mut canvas, fonts, &geometry, domain_idx, &domain.name);

        for (layer_idx, layer) in landscape.layers.iter().enumerate() {
            let rect = geometry.cell_rect(domain_idx, layer_idx);
            let count = domain.cell_item_count(&layer.id);
            let fill = color::cell_fill(base, count, max_count);
            fill_rect(&mut canvas, &rect, fill);

            let entries: Vec<&Entry> = domain.entries_for(&layer.id).collect();
            if !entries.is_empty() {
                let text_color = color::text_color_for(fill);
                cell::compose_cell(
                    &mut canvas,
                    fonts,
                    &rect,
                    &entries,
                    text_color,
                    &settings.asset_dir,
                );
            }
        }
    }

    Ok(canvas)
}

/// Header bands, legend column background, and the centered title.
fn draw_chrome(
    canvas: &mut RgbaImage,
    settings: &RenderSettings,
    geometry: &GridGeometry,
    fonts: &FontProvider,
) {
    let blue = opaque(palette::HEADER_BLUE);
    fill_rect(canvas, &geometry.title_band(), blue);
    fill_rect(canvas, &geometry.domain_band(), blue);
    fill_rect(canvas, &geometry.legend_column(), blue);

    let band = geometry.title_band();
    let title_width = fonts.title.line_width(&settings.title);
    let x = band.x1 + (band.width() - title_width) / 2.0;
    let y = band.y1 + (band.height() - fonts.title.size()) / 2.0;
    fonts
        .title
        .draw(canvas, x, y, palette::TITLE_YELLOW, &settings.title);
}

/// Wrapped, centered domain name in the domain-label band.
fn draw_domain_label(
    canvas: &mut RgbaImage,
    fonts: &FontProvider,
    geometry: &GridGeometry,
    domain_idx: usize,
    name: &str,
) {
    let band = geometry.domain_band();
    let column = geometry.cell_rect(domain_idx, 0);
    let center_x = column.x1 + geometry.cell_width() / 2.0;
    let center_y = band.y1 + band.height() / 2.0;

    let budget = geometry.cell_width() - 20.0;
    let lines = wrap_to_width(name, budget, |s| fonts.domain.line_width(s));

    let line_height = fonts.domain.size();
    let mut y = center_y - line_height * lines.len() as f32 / 2.0;
    for line in &lines {
        let width = fonts.domain.line_width(line);
        fonts
            .domain
            .draw(canvas, center_x - width / 2.0, y, RgbColor::WHITE, line);
        y += line_height;
    }
}

/// Fills a rectangle, alpha-blending translucent colors over the canvas.
fn fill_rect(canvas: &mut RgbaImage, rect: &Rect, fill: Rgba<u8>) {
    let x1 = rect.x1.round().max(0.0) as u32;
    let y1 = rect.y1.round().max(0.0) as u32;
    let x2 = (rect.x2.round().max(0.0) as u32).min(canvas.width());
    let y2 = (rect.y2.round().max(0.0) as u32).min(canvas.height());

    for y in y1..y2 {
        for x in x1..x2 {
            if fill[3] == 255 {
                canvas.put_pixel(x, y, fill);
            } else {
                canvas.get_pixel_mut(x, y).blend(&fill);
            }
        }
    }
}

const fn opaque(color: RgbColor) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DOMAIN_PALETTE;
    use crate::parser::parse_landscape_str;

    fn scenario_landscape() -> Landscape {
        parse_landscape_str(
            r#"
layers:
  - id: L1
    name: First Stage
  - id: L2
    name: Second Stage
domains:
  - name: Operations
    entries:
      - layer: L1
        tools: ["A"]
      - layer: L2
        controls: ["B", "C"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_fails_fast_on_empty_axes() {
        let fonts = FontProvider::builtin();
        let settings = RenderSettings::default();

        let no_domains = parse_landscape_str("layers:\n  - id: a\n    name: A\ndomains: []\n").unwrap();
        assert!(render_landscape(&no_domains, &settings, &fonts).is_err());

        let no_layers = parse_landscape_str("layers: []\ndomains:\n  - name: D\n").unwrap();
        assert!(render_landscape(&no_layers, &settings, &fonts).is_err());
    }

    #[test]
    fn test_render_produces_canvas_sized_buffer() {
        let fonts = FontProvider::builtin();
        let settings = RenderSettings::default();
        let image = render_landscape(&scenario_landscape(), &settings, &fonts).unwrap();
        assert_eq!(image.width(), settings.canvas_width);
        assert_eq!(image.height(), settings.canvas_height);
    }

    #[test]
    fn test_denser_cell_is_darker() {
        // Two layers, one domain: cell(L1) holds one item, cell(L2) two.
        // With max count 2, intensities are 0.8 and 0.6.
        let fonts = FontProvider::builtin();
        let settings = RenderSettings::default();
        let landscape = scenario_landscape();
        let image = render_landscape(&landscape, &settings, &fonts).unwrap();

        let geometry = GridGeometry::new(&settings, 2, 1).unwrap();
        let base = DOMAIN_PALETTE[0];

        let sparse_rect = geometry.cell_rect(0, 0);
        let dense_rect = geometry.cell_rect(0, 1);
        let sparse = image.get_pixel(sparse_rect.x1 as u32 + 2, sparse_rect.y1 as u32 + 2);
        let dense = image.get_pixel(dense_rect.x1 as u32 + 2, dense_rect.y1 as u32 + 2);

        assert_eq!(sparse, &opaque(base.darken(0.8)));
        assert_eq!(dense, &opaque(base.darken(0.6)));
    }

    #[test]
    fn test_empty_cell_gets_translucent_tint() {
        let fonts = FontProvider::builtin();
        let settings = RenderSettings::default();
        let landscape = parse_landscape_str(
            "layers:\n  - id: a\n    name: A\ndomains:\n  - name: D\n    entries: []\n",
        )
        .unwrap();
        let image = render_landscape(&landscape, &settings, &fonts).unwrap();

        let geometry = GridGeometry::new(&settings, 1, 1).unwrap();
        let rect = geometry.cell_rect(0, 0);
        let pixel = image.get_pixel(rect.x1 as u32 + 2, rect.y1 as u32 + 2);

        let base = opaque(DOMAIN_PALETTE[0]);
        let white = Rgba([255, 255, 255, 255]);
        // The tint blends over white: neither the raw base color nor the
        // untouched canvas.
        assert_ne!(pixel, &base);
        assert_ne!(pixel, &white);
        // Mostly white, shaded toward the base hue.
        assert!(pixel[0] > 200 && pixel[1] > 200 && pixel[2] > 200);
    }

    #[test]
    fn test_header_and_legend_chrome_painted() {
        let fonts = FontProvider::builtin();
        let settings = RenderSettings::default();
        let image = render_landscape(&scenario_landscape(), &settings, &fonts).unwrap();

        let geometry = GridGeometry::new(&settings, 2, 1).unwrap();
        let blue = opaque(palette::HEADER_BLUE);

        let title = geometry.title_band();
        assert_eq!(
            image.get_pixel(title.x1 as u32 + 1, title.y1 as u32 + 1),
            &blue
        );
        let legend = geometry.legend_column();
        assert_eq!(
            image.get_pixel(legend.x1 as u32 + 1, legend.y1 as u32 + 1),
            &blue
        );
    }

    #[test]
    fn test_cell_text_is_drawn_in_contrast_color() {
        let fonts = FontProvider::builtin();
        let settings = RenderSettings::default();
        let landscape = scenario_landscape();
        let image = render_landscape(&landscape, &settings, &fonts).unwrap();

        let geometry = GridGeometry::new(&settings, 2, 1).unwrap();
        let rect = geometry.cell_rect(0, 0);
        let fill = color::cell_fill(DOMAIN_PALETTE[0], 1, 2);
        let expected = color::text_color_for(fill);

        // Scan the first content line for a pixel of the contrast color.
        let y0 = rect.y1 as u32 + 10;
        let found = (y0..y0 + 16).any(|y| {
            (rect.x1 as u32 + 10..rect.x1 as u32 + 120)
                .any(|x| image.get_pixel(x, y).0 == [expected.r, expected.g, expected.b, 255])
        });
        assert!(found, "bullet text should be drawn in {expected}");
    }
}
