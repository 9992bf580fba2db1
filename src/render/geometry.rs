//! Pixel geometry for the poster's structural regions.
//!
//! All coordinates are real-valued pixels; rounding happens only at draw
//! time. Cell edges are computed from index multiples of the cell size so
//! adjacent rectangles share their boundary exactly.

use anyhow::{bail, Result};

use super::RenderSettings;

/// An axis-aligned rectangle in pixel space.
///
/// Computed per rendering pass, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x1: f32,
    /// Top edge.
    pub y1: f32,
    /// Right edge.
    pub x2: f32,
    /// Bottom edge.
    pub y2: f32,
}

impl Rect {
    /// Creates a rectangle from its corner coordinates.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

/// Computes the pixel rectangle of every structural region of the poster:
/// title band, domain-label band, legend column, and each grid cell.
#[derive(Debug, Clone)]
pub struct GridGeometry {
    canvas_width: f32,
    canvas_height: f32,
    margin: f32,
    header_height: f32,
    domain_band_height: f32,
    legend_width: f32,
    rows: usize,
    cols: usize,
    cell_width: f32,
    cell_height: f32,
}

impl GridGeometry {
    /// Builds the grid geometry for `rows` layers and `cols` domains.
    ///
    /// # Errors
    ///
    /// Fails fast when either axis is empty; the geometry would be
    /// undefined.
    pub fn new(settings: &RenderSettings, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            bail!("Cannot lay out a grid with {rows} layer(s) and {cols} domain(s)");
        }

        let canvas_width = settings.canvas_width as f32;
        let canvas_height = settings.canvas_height as f32;
        let main_width = canvas_width - 2.0 * settings.margin - settings.legend_width;
        let main_height = canvas_height - 2.0 * settings.margin - settings.header_height;

        Ok(Self {
            canvas_width,
            canvas_height,
            margin: settings.margin,
            header_height: settings.header_height,
            domain_band_height: settings.domain_band_height,
            legend_width: settings.legend_width,
            rows,
            cols,
            cell_width: main_width / cols as f32,
            cell_height: main_height / rows as f32,
        })
    }

    /// Width of one grid cell.
    #[must_use]
    pub const fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Height of one grid cell.
    #[must_use]
    pub const fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Number of layer rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of domain columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Rectangle of the cell at the given domain column and layer row.
    ///
    /// Both edges are computed from index multiples so the rectangles tile
    /// the main area with no gaps or overlaps.
    #[must_use]
    pub fn cell_rect(&self, domain_idx: usize, layer_idx: usize) -> Rect {
        let x1 = self.margin + domain_idx as f32 * self.cell_width;
        let x2 = self.margin + (domain_idx + 1) as f32 * self.cell_width;
        let y1 = self.margin + self.header_height + layer_idx as f32 * self.cell_height;
        let y2 = self.margin + self.header_height + (layer_idx + 1) as f32 * self.cell_height;
        Rect::new(x1, y1, x2, y2)
    }

    /// Band holding the poster title, above the domain labels.
    #[must_use]
    pub fn title_band(&self) -> Rect {
        Rect::new(
            self.margin,
            self.margin,
            self.canvas_width - self.margin - self.legend_width,
            self.margin + self.header_height - self.domain_band_height,
        )
    }

    /// Band holding the domain column labels, below the title band.
    #[must_use]
    pub fn domain_band(&self) -> Rect {
        Rect::new(
            self.margin,
            self.margin + self.header_height - self.domain_band_height,
            self.canvas_width - self.margin - self.legend_width,
            self.margin + self.header_height,
        )
    }

    /// Full-height legend column on the right-hand side.
    #[must_use]
    pub fn legend_column(&self) -> Rect {
        Rect::new(
            self.canvas_width - self.margin - self.legend_width,
            self.margin,
            self.canvas_width - self.margin,
            self.canvas_height - self.margin,
        )
    }
}
