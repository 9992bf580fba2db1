//! Per-cell content composition.
//!
//! For one cell, entries are processed in config order: tools as bulleted
//! wrapped lines, then controls, then thumbnails. The write cursor is an
//! explicit value threaded through each step and never reset within a
//! cell, so content from successive entries stacks continuously.

use std::path::Path;

use image::RgbaImage;

use super::fonts::{FontProvider, SizedFont};
use super::geometry::Rect;
use super::thumbs;
use super::wrap::wrap_to_width;
use crate::models::{Entry, RgbColor};

/// Horizontal inset of cell text from the cell edges.
pub const CELL_TEXT_MARGIN: f32 = 10.0;

/// Vertical advance per emitted content line.
pub const CONTENT_LINE_ADVANCE: f32 = 20.0;

/// Inset from the cell top where content starts.
pub const CELL_TOP_INSET: f32 = 10.0;

/// Write position inside a cell, in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCursor {
    /// Horizontal position; meaningful for the thumbnail flow.
    pub x: f32,
    /// Vertical position of the next line or thumbnail row.
    pub y: f32,
}

impl CellCursor {
    /// Cursor at the content origin of `cell`.
    #[must_use]
    pub fn at_cell_top(cell: &Rect) -> Self {
        Self {
            x: cell.x1 + CELL_TEXT_MARGIN,
            y: cell.y1 + CELL_TOP_INSET,
        }
    }
}

/// Composes the content of one cell and returns the final cursor.
///
/// Bullet lines are not guarded against the cell bottom; only the
/// thumbnail flow stops at the boundary. Text that exceeds the cell
/// overflows visually.
pub fn compose_cell(
    canvas: &mut RgbaImage,
    fonts: &FontProvider,
    cell: &Rect,
    entries: &[&Entry],
    text_color: RgbColor,
    asset_dir: &Path,
) -> CellCursor {
    let mut cursor = CellCursor::at_cell_top(cell);
    for entry in entries {
        cursor = emit_bullets(canvas, &fonts.content, cell, &entry.tools, text_color, cursor);
        cursor = emit_bullets(canvas, &fonts.content, cell, &entry.controls, text_color, cursor);
        if !entry.images.is_empty() {
            cursor = thumbs::place_thumbnails(canvas, &entry.images, asset_dir, cell, cursor);
        }
    }
    cursor
}

/// Emits each item as a bulleted, wrapped text block, advancing the
/// cursor one line height per emitted line.
fn emit_bullets(
    canvas: &mut RgbaImage,
    font: &SizedFont,
    cell: &Rect,
    items: &[String],
    color: RgbColor,
    mut cursor: CellCursor,
) -> CellCursor {
    let available = cell.width() - 2.0 * CELL_TEXT_MARGIN;
    for item in items {
        let bullet = format!("\u{2022} {item}");
        for line in wrap_to_width(&bullet, available, |s| font.line_width(s)) {
            font.draw(canvas, cell.x1 + CELL_TEXT_MARGIN, cursor.y, color, &line);
            cursor.y += CONTENT_LINE_ADVANCE;
        }
    }
    cursor
}
