// THEORY:
// The `GridRaster` is the hand-off point between the geometry and whatever displays
// it. It flattens a `Shape` back into the full grid it lives in: one entry per grid
// square, filled or not, in row-major order. A UI can draw that list directly, or
// ask for pixel rectangles, an ASCII sketch, or a finished RGBA image.
//
// The pixel layout puts a grid line of `line_width` pixels around and between every
// cell, so a `w` x `h` grid with cell size `s` and line width `l` becomes an image of
// `w*s + (w+1)*l` by `h*s + (h+1)*l` pixels.

use crate::core_modules::cell::Cell;
use crate::core_modules::shape::Shape;
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// One grid square and whether the shape covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterCell {
    pub x: u32,
    pub y: u32,
    pub filled: bool,
}

/// A cell's on-screen rectangle, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub filled: bool,
}

/// Colours and sizes for the rendered grid. Colours are RGBA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub cell_size: u32,
    pub line_width: u32,
    pub fill: [u8; 4],
    pub empty: [u8; 4],
    pub line: [u8; 4],
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: 40,
            line_width: 2,
            fill: [76, 175, 80, 255],
            empty: [255, 255, 255, 255],
            line: [189, 189, 189, 255],
        }
    }
}

/// The complete grid a shape was generated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRaster {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<RasterCell>,
}

impl GridRaster {
    pub fn from_shape(shape: &Shape) -> Self {
        let width = shape.grid_width();
        let height = shape.grid_height();
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(RasterCell {
                    x,
                    y,
                    filled: shape.contains(Cell::new(x, y)),
                });
            }
        }
        Self { width, height, cells }
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.filled).count()
    }

    /// One line per row, `#` for filled squares and `.` for empty ones.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| if c.filled { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }

    /// Pixel rectangles for every cell, in the same order as `cells`.
    pub fn pixel_rects(&self, style: &RenderStyle) -> Vec<PixelRect> {
        let pitch = style.cell_size + style.line_width;
        self.cells
            .iter()
            .map(|c| PixelRect {
                x: style.line_width + c.x * pitch,
                y: style.line_width + c.y * pitch,
                width: style.cell_size,
                height: style.cell_size,
                filled: c.filled,
            })
            .collect()
    }

    pub fn image_size(&self, style: &RenderStyle) -> (u32, u32) {
        let span = |n: u32| n * style.cell_size + (n + 1) * style.line_width;
        (span(self.width), span(self.height))
    }

    /// Draws the grid: line colour as background, then every cell in fill or empty colour.
    pub fn render(&self, style: &RenderStyle) -> RgbaImage {
        let (img_w, img_h) = self.image_size(style);
        let mut image = RgbaImage::from_pixel(img_w, img_h, Rgba(style.line));

        for rect in self.pixel_rects(style) {
            let color = Rgba(if rect.filled { style.fill } else { style.empty });
            for py in rect.y..rect.y + rect.height {
                for px in rect.x..rect.x + rect.width {
                    image.put_pixel(px, py, color);
                }
            }
        }

        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::shape_generator::shape_generator::{l_shape_at, rectangle_at};

    #[test]
    fn raster_covers_whole_grid_in_row_major_order() {
        let shape = rectangle_at(4, 3, Cell::new(1, 1), 2, 2).unwrap();
        let raster = GridRaster::from_shape(&shape);
        assert_eq!(raster.cells.len(), 12);
        assert_eq!(raster.filled_count(), 4);
        assert_eq!(raster.cells[0], RasterCell { x: 0, y: 0, filled: false });
        assert_eq!(raster.cells[5], RasterCell { x: 1, y: 1, filled: true });
        assert_eq!(raster.cells[11], RasterCell { x: 3, y: 2, filled: false });
    }

    #[test]
    fn ascii_sketch() {
        let shape = l_shape_at(4, 3, Cell::new(0, 0), 1, 3, 3).unwrap();
        assert_eq!(GridRaster::from_shape(&shape).to_ascii(), "#...\n#...\n###.\n");
    }

    #[test]
    fn rendered_image_colours_filled_cells() {
        let style = RenderStyle {
            cell_size: 5,
            line_width: 1,
            ..RenderStyle::default()
        };
        let shape = rectangle_at(3, 2, Cell::new(0, 0), 1, 1).unwrap();
        let raster = GridRaster::from_shape(&shape);
        let image = raster.render(&style);

        assert_eq!(image.dimensions(), (3 * 5 + 4, 2 * 5 + 3));
        assert_eq!(image.get_pixel(0, 0), &Rgba(style.line));
        assert_eq!(image.get_pixel(1, 1), &Rgba(style.fill));
        assert_eq!(image.get_pixel(5, 5), &Rgba(style.fill));
        assert_eq!(image.get_pixel(6, 1), &Rgba(style.line));
        assert_eq!(image.get_pixel(7, 1), &Rgba(style.empty));
    }

    #[test]
    fn pixel_rects_step_by_cell_plus_line() {
        let shape = rectangle_at(2, 1, Cell::new(0, 0), 2, 1).unwrap();
        let rects = GridRaster::from_shape(&shape).pixel_rects(&RenderStyle::default());
        assert_eq!(rects[0].x, 2);
        assert_eq!(rects[1].x, 2 + 42);
        assert!(rects.iter().all(|r| r.filled && r.width == 40));
    }
}
