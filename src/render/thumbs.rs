//! Thumbnail embedding: asset resolution, transparent-margin trim,
//! aspect-preserving fit, and left-to-right flow inside a cell.
//!
//! Asset failures are isolated per image: a missing or undecodable file is
//! logged and skipped, never fatal to the render.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::warn;

use super::cell::CellCursor;
use super::geometry::Rect;

/// Maximum thumbnail width inside a cell.
pub const MAX_THUMB_WIDTH: u32 = 60;

/// Maximum thumbnail height inside a cell.
pub const MAX_THUMB_HEIGHT: u32 = 40;

/// Horizontal and vertical spacing between placed thumbnails, and the
/// inset from the cell edges.
pub const THUMB_SPACING: f32 = 10.0;

/// Resolves an asset name to `<asset_dir>/<name>.png`.
#[must_use]
pub fn asset_path(asset_dir: &Path, name: &str) -> PathBuf {
    asset_dir.join(format!("{}.png", name.trim()))
}

/// Scales (`width`, `height`) to fit within the given box, preserving the
/// aspect ratio.
///
/// Wider-than-tall images are width-constrained first and height-corrected
/// if still over; the symmetric order applies otherwise. Images already
/// inside the box are not enlarged.
#[must_use]
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let aspect = width as f32 / height as f32;
    let mut new_width;
    let mut new_height;
    if aspect > 1.0 {
        new_width = width.min(max_width) as f32;
        new_height = new_width / aspect;
        if new_height > max_height as f32 {
            new_height = max_height as f32;
            new_width = new_height * aspect;
        }
    } else {
        new_height = height.min(max_height) as f32;
        new_width = new_height * aspect;
        if new_width > max_width as f32 {
            new_width = max_width as f32;
            new_height = new_width / aspect;
        }
    }
    ((new_width as u32).max(1), (new_height as u32).max(1))
}

/// Crops to the bounding box of pixels with nonzero alpha.
///
/// Fully transparent images are returned unchanged; there is no box to
/// crop to.
#[must_use]
pub fn trim_transparent(image: &RgbaImage) -> RgbaImage {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut any = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] > 0 {
            any = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !any {
        return image.clone();
    }

    imageops::crop_imm(image, min_x, min_y, max_x - min_x + 1, max_y - min_y + 1).to_image()
}

/// Loads a thumbnail: decode, trim transparent margins, aspect-fit into
/// the given box, resample with Lanczos3.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded.
pub fn load_thumbnail(path: &Path, max_width: u32, max_height: u32) -> Result<RgbaImage> {
    let decoded = image::open(path)
        .context(format!("Failed to decode image: {}", path.display()))?
        .to_rgba8();
    let trimmed = trim_transparent(&decoded);
    let (width, height) = fit_within(trimmed.width(), trimmed.height(), max_width, max_height);
    Ok(imageops::resize(&trimmed, width, height, FilterType::Lanczos3))
}

/// Places the named thumbnails into `cell`, flowing left-to-right from the
/// cell text margin at the cursor's row.
///
/// When the next image would cross the cell's right edge the flow wraps to
/// a new row; when it would cross the bottom edge the remaining images are
/// silently dropped. Missing or unreadable assets are logged and skipped.
pub fn place_thumbnails(
    canvas: &mut RgbaImage,
    names: &[String],
    asset_dir: &Path,
    cell: &Rect,
    cursor: CellCursor,
) -> CellCursor {
    let mut x = cell.x1 + THUMB_SPACING;
    let mut y = cursor.y;

    for name in names {
        let path = asset_path(asset_dir, name);
        if !path.exists() {
            warn!("Thumbnail not found: {}", path.display());
            continue;
        }
        let thumb = match load_thumbnail(&path, MAX_THUMB_WIDTH, MAX_THUMB_HEIGHT) {
            Ok(thumb) => thumb,
            Err(e) => {
                warn!("Skipping thumbnail {}: {e:#}", path.display());
                continue;
            }
        };

        let width = thumb.width() as f32;
        let height = thumb.height() as f32;

        if x + width > cell.x2 - THUMB_SPACING {
            x = cell.x1 + THUMB_SPACING;
            y += MAX_THUMB_HEIGHT as f32 + THUMB_SPACING;
        }
        if y + height > cell.y2 - THUMB_SPACING {
            break;
        }

        imageops::overlay(canvas, &thumb, x as i64, y as i64);
        x += width + THUMB_SPACING;
    }

    CellCursor { x, y }
}
