//! Rotated legend labels for layer rows.
//!
//! Each layer name is wrapped against the row height (the pre-rotation
//! width becomes the post-rotation height), drawn onto a transparent
//! scratch surface, rotated 90 degrees counter-clockwise, and composited
//! into the legend column.

use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

use super::fonts::{FontProvider, SizedFont};
use super::geometry::GridGeometry;
use super::wrap::wrap_to_width;
use crate::models::{Layer, RgbColor};

/// Inset of the label from the legend column edge and the row top; also
/// the padding subtracted from the row height for the wrap budget.
const LEGEND_PADDING: f32 = 10.0;

/// Draws all layer labels into the legend column, with a separator line
/// between consecutive rows (none after the last).
pub fn draw_legend_labels(
    canvas: &mut RgbaImage,
    fonts: &FontProvider,
    geometry: &GridGeometry,
    layers: &[Layer],
) {
    let legend = geometry.legend_column();
    let budget = geometry.cell_height() - 2.0 * LEGEND_PADDING;

    for (index, layer) in layers.iter().enumerate() {
        let row = geometry.cell_rect(0, index);
        let lines = wrap_to_width(&layer.name, budget, |s| fonts.layer.line_width(s));

        if let Some(label) = rotated_label(&lines, &fonts.layer, RgbColor::WHITE) {
            imageops::overlay(
                canvas,
                &label,
                (legend.x1 + LEGEND_PADDING) as i64,
                (row.y1 + LEGEND_PADDING) as i64,
            );
        }

        if index + 1 < layers.len() {
            draw_line_segment_mut(
                canvas,
                (legend.x1, row.y2),
                (legend.x2, row.y2),
                Rgba([255, 255, 255, 255]),
            );
        }
    }
}

/// Renders wrapped lines onto a scratch surface sized to their natural
/// bounding box, then rotates the surface 90 degrees counter-clockwise.
///
/// Returns `None` for empty input or degenerate text dimensions.
fn rotated_label(lines: &[String], font: &SizedFont, color: RgbColor) -> Option<RgbaImage> {
    if lines.is_empty() {
        return None;
    }

    let text_width = lines
        .iter()
        .map(|line| font.line_width(line))
        .fold(0.0, f32::max);
    let line_height = font.line_height();
    let text_height = lines.len() as f32 * line_height;

    let width = text_width.ceil() as u32;
    let height = text_height.ceil() as u32;
    if width == 0 || height == 0 {
        return None;
    }

    let mut scratch = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for (i, line) in lines.iter().enumerate() {
        font.draw(&mut scratch, 0.0, i as f32 * line_height, color, line);
    }

    Some(imageops::rotate270(&scratch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderSettings;

    #[test]
    fn test_rotated_label_swaps_dimensions() {
        let fonts = FontProvider::builtin();
        let lines = vec!["Detect".to_string()];
        let label = rotated_label(&lines, &fonts.layer, RgbColor::WHITE).unwrap();

        let expected_width = fonts.layer.line_width("Detect").ceil() as u32;
        let expected_height = fonts.layer.line_height().ceil() as u32;
        // After a 90 degree rotation the text width becomes the height.
        assert_eq!(label.height(), expected_width);
        assert_eq!(label.width(), expected_height);
    }

    #[test]
    fn test_rotated_label_multi_line() {
        let fonts = FontProvider::builtin();
        let lines = vec!["Access".to_string(), "Control".to_string()];
        let label = rotated_label(&lines, &fonts.layer, RgbColor::WHITE).unwrap();
        let expected_width = (2.0 * fonts.layer.line_height()).ceil() as u32;
        assert_eq!(label.width(), expected_width);
    }

    #[test]
    fn test_rotated_label_empty_lines() {
        let fonts = FontProvider::builtin();
        assert!(rotated_label(&[], &fonts.layer, RgbColor::WHITE).is_none());
    }

    #[test]
    fn test_separators_between_rows_only() {
        let fonts = FontProvider::builtin();
        let settings = RenderSettings::default();
        let geometry = GridGeometry::new(&settings, 3, 2).unwrap();
        let mut canvas = RgbaImage::from_pixel(
            settings.canvas_width,
            settings.canvas_height,
            Rgba([0, 0, 0, 255]),
        );

        let layers: Vec<Layer> = (0..3)
            .map(|i| Layer {
                id: format!("l{i}"),
                name: String::new(),
            })
            .collect();
        draw_legend_labels(&mut canvas, &fonts, &geometry, &layers);

        let legend = geometry.legend_column();
        let x = (legend.x1 + 5.0) as u32;

        // Separators after rows 0 and 1, none after the final row. The
        // draw coordinate is rounded, so check both candidate scanlines.
        let white = Rgba([255, 255, 255, 255]);
        for index in 0..2 {
            let y = geometry.cell_rect(0, index).y2 as u32;
            assert!(
                canvas.get_pixel(x, y) == &white || canvas.get_pixel(x, y + 1) == &white,
                "missing separator after row {index}"
            );
        }
        let last_y = geometry.cell_rect(0, 2).y2 as u32;
        for y in [last_y, last_y + 1] {
            let y = y.min(settings.canvas_height - 1);
            assert_eq!(canvas.get_pixel(x, y), &Rgba([0, 0, 0, 255]));
        }
    }
}
