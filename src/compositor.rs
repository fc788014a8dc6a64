//! Grid compositor.
//!
//! Tiles one motif drawing `rows × cols` times inside a square area and puts
//! a caption band underneath. The grid is sized by its larger dimension and
//! centred, so every emblem has the same outer proportions whatever its
//! shape.

use crate::config::CanvasConfig;
use crate::drawing::{Drawing, CANVAS_SIZE, CENTER};
use crate::layout::GridShape;
use serde::Serialize;
use std::fmt::Write as _;

/// Outer geometry of the emblem, in output pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositorSettings {
    /// Side of the square grid area.
    pub size: f64,
    /// Space between neighbouring cells.
    pub gap: f64,
    /// Height of the caption band below the grid.
    pub caption_height: f64,
}

impl CompositorSettings {
    /// Build settings, lifting negative or zero values to something drawable.
    pub fn new(size: f64, gap: f64, caption_height: f64) -> Self {
        Self {
            size: size.max(1.0),
            gap: gap.max(0.0),
            caption_height: caption_height.max(0.0),
        }
    }
}

impl Default for CompositorSettings {
    fn default() -> Self {
        Self::from(&CanvasConfig::default())
    }
}

impl From<&CanvasConfig> for CompositorSettings {
    fn from(canvas: &CanvasConfig) -> Self {
        Self::new(canvas.size, canvas.gap, canvas.caption_height)
    }
}

/// Rotation and scale applied to the motif inside every cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellTransform {
    /// Clockwise rotation about the cell centre, in degrees.
    pub rotation: f64,
    /// Motif size relative to the cell, `0 < scale <= 1`.
    pub scale: f64,
}

impl CellTransform {
    pub const IDENTITY: CellTransform = CellTransform {
        rotation: 0.0,
        scale: 1.0,
    };

    pub fn new(rotation: u16, scale_percent: u8) -> Self {
        Self {
            rotation: f64::from(rotation % 360),
            scale: (f64::from(scale_percent) / 100.0).clamp(0.01, 1.0),
        }
    }
}

impl Default for CellTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Position of one tile in output pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Cell {
    fn svg_transform(&self, t: CellTransform) -> String {
        let k = self.size / CANVAS_SIZE;
        format!(
            "translate({:.2} {:.2}) scale({:.4}) rotate({:.2} {c} {c}) translate({c} {c}) scale({:.4}) translate(-{c} -{c})",
            self.x,
            self.y,
            k,
            t.rotation,
            t.scale,
            c = CENTER
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    pub text: String,
    pub color: String,
}

impl Caption {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

/// A composed emblem, ready to serialise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emblem {
    pub width: f64,
    pub height: f64,
    pub layout: GridShape,
    pub cells: Vec<Cell>,
    pub transform: CellTransform,
    pub motif: Drawing,
    pub caption: Caption,
    caption_height: f64,
}

impl Emblem {
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn background(&self) -> &str {
        &self.motif.background
    }

    /// Serialise to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let fragment = self.motif.to_svg_fragment();
        let mut body = String::new();
        for cell in &self.cells {
            let _ = write!(
                body,
                "\n  <g transform=\"{}\">\n{}\n  </g>",
                cell.svg_transform(self.transform),
                fragment
            );
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w:.0} {h:.0}" width="{w:.0}" height="{h:.0}">
  <rect width="100%" height="100%" fill="{}"/>{}
  {}
</svg>"#,
            self.background(),
            body,
            self.caption_svg(),
            w = self.width,
            h = self.height,
        )
    }

    fn caption_svg(&self) -> String {
        if self.caption.text.is_empty() || self.caption_height <= 0.0 {
            return String::new();
        }
        let band_top = self.height - self.caption_height;
        format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle" font-family="sans-serif" font-size="{:.2}" fill="{}">{}</text>"#,
            self.width / 2.0,
            band_top + self.caption_height / 2.0,
            self.caption_height * 0.4,
            self.caption.color,
            escape_xml(&self.caption.text)
        )
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Lays motifs out on a grid.
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    settings: CompositorSettings,
}

impl Compositor {
    pub fn new(settings: CompositorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CompositorSettings {
        &self.settings
    }

    /// Gap actually used for a grid spanning `n` cells. It is capped so the
    /// gaps never take more than half the grid area.
    fn effective_gap(&self, n: u32) -> f64 {
        self.settings
            .gap
            .min(self.settings.size / (2.0 * f64::from(n)))
    }

    /// Side of one cell for `layout`.
    pub fn cell_size(&self, layout: GridShape) -> f64 {
        let n = layout.span().max(1);
        let gap = self.effective_gap(n);
        (self.settings.size - gap * f64::from(n - 1)) / f64::from(n)
    }

    /// Tile `motif` over `layout`, apply `transform` in every cell and add
    /// the caption band.
    pub fn compose(
        &self,
        layout: GridShape,
        motif: &Drawing,
        transform: CellTransform,
        caption: Caption,
    ) -> Emblem {
        let size = self.settings.size;
        let gap = self.effective_gap(layout.span().max(1));
        let cell = self.cell_size(layout);

        let grid_w = f64::from(layout.cols) * cell + f64::from(layout.cols.saturating_sub(1)) * gap;
        let grid_h = f64::from(layout.rows) * cell + f64::from(layout.rows.saturating_sub(1)) * gap;
        let left = (size - grid_w) / 2.0;
        let top = (size - grid_h) / 2.0;

        let mut cells = Vec::with_capacity(layout.cells());
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                cells.push(Cell {
                    row,
                    col,
                    x: left + f64::from(col) * (cell + gap),
                    y: top + f64::from(row) * (cell + gap),
                    size: cell,
                });
            }
        }

        tracing::debug!(%layout, cell, cells = cells.len(), "composed grid");

        Emblem {
            width: size,
            height: size + self.settings.caption_height,
            layout,
            cells,
            transform,
            motif: motif.clone(),
            caption,
            caption_height: self.settings.caption_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{Paint, Point};

    fn sample_drawing() -> Drawing {
        let mut d = Drawing::new("#f0f5ff");
        d.circle(Point::center(), 40.0, Paint::fill("#1890ff"));
        d
    }

    fn compose(layout: GridShape) -> Emblem {
        Compositor::default().compose(
            layout,
            &sample_drawing(),
            CellTransform::new(90, 80),
            Caption::new("Bionic Metamaterials", "#096dd9"),
        )
    }

    #[test]
    fn renders_exactly_rows_times_cols_cells() {
        for (rows, cols) in [(1, 1), (2, 2), (2, 3), (2, 4), (3, 3), (8, 8)] {
            let emblem = compose(GridShape::new(rows, cols));
            assert_eq!(emblem.cell_count(), (rows * cols) as usize);
            assert_eq!(emblem.to_svg().matches("<circle").count(), (rows * cols) as usize);
        }
    }

    #[test]
    fn composition_is_deterministic() {
        let a = compose(GridShape::new(2, 3));
        let b = compose(GridShape::new(2, 3));
        assert_eq!(a, b);
        assert_eq!(a.to_svg(), b.to_svg());
    }

    #[test]
    fn aspect_ratio_is_independent_of_grid_shape() {
        let compositor = Compositor::default();
        let settings = compositor.settings();
        for layout in [GridShape::SINGLE, GridShape::new(2, 4), GridShape::new(3, 2)] {
            let emblem = compose(layout);
            assert_eq!(emblem.width, settings.size);
            assert_eq!(emblem.height, settings.size + settings.caption_height);
        }
    }

    #[test]
    fn construction_clamps_settings() {
        let compositor = Compositor::new(CompositorSettings::new(-5.0, -1.0, -2.0));
        assert_eq!(
            *compositor.settings(),
            CompositorSettings {
                size: 1.0,
                gap: 0.0,
                caption_height: 0.0,
            }
        );
    }

    #[test]
    fn cells_stay_inside_the_grid_area() {
        let size = CompositorSettings::default().size;
        for layout in [GridShape::new(2, 4), GridShape::new(4, 2), GridShape::new(8, 8)] {
            for cell in compose(layout).cells {
                assert!(cell.x >= -1e-9 && cell.y >= -1e-9, "{cell:?}");
                assert!(cell.x + cell.size <= size + 1e-9, "{cell:?}");
                assert!(cell.y + cell.size <= size + 1e-9, "{cell:?}");
            }
        }
    }

    #[test]
    fn wide_grids_are_centred_vertically() {
        let emblem = compose(GridShape::new(2, 4));
        let first = emblem.cells[0];
        let last = emblem.cells[emblem.cells.len() - 1];
        let top = first.y;
        let bottom = CompositorSettings::default().size - (last.y + last.size);
        assert!((top - bottom).abs() < 1e-9);
        assert!(first.x.abs() < 1e-9);
    }

    #[test]
    fn huge_gap_is_capped() {
        let compositor = Compositor::new(CompositorSettings::new(100.0, 500.0, 0.0));
        assert!(compositor.cell_size(GridShape::new(4, 4)) > 0.0);
    }

    #[test]
    fn caption_is_escaped() {
        let emblem = Compositor::default().compose(
            GridShape::SINGLE,
            &sample_drawing(),
            CellTransform::IDENTITY,
            Caption::new("R&D <lab>", "#000000"),
        );
        let svg = emblem.to_svg();
        assert!(svg.contains("R&amp;D &lt;lab&gt;"));
        assert!(svg.contains(r#"viewBox="0 0 600 648""#));
    }

    #[test]
    fn transform_is_written_per_cell() {
        let svg = compose(GridShape::new(2, 2)).to_svg();
        assert_eq!(svg.matches("rotate(90.00 100 100)").count(), 4);
        assert_eq!(svg.matches("scale(0.8000)").count(), 4);
    }
}
