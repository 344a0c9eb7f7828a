// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The owned pixel grid
//!
//! A column-major table of pixels: an ordered sequence of columns,
//! each an ordered sequence of pixels.  Width is the number of
//! columns, height the length of a column.  The carver mutates this
//! structure in place, one seam at a time; everything else treats it
//! as read-only.

use crate::pixel::Pixel;
use image::{Pixel as ImagePixel, RgbImage};
use itertools::iproduct;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) columns: Vec<Vec<Pixel>>,
}

impl Grid {
    /// Wrap an already-materialized table of columns.  Every column
    /// must have the same length while the grid is non-empty.
    pub fn new(columns: Vec<Vec<Pixel>>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "ragged columns"
        );
        Grid { columns }
    }

    /// Build a width x height grid by calling `f(x, y)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> Pixel,
    {
        Grid::new(
            (0..width)
                .map(|x| (0..height).map(|y| f(x, y)).collect())
                .collect(),
        )
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// The pixel at column `x`, row `y`.  Panics when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.columns[x][y]
    }

    /// Copy an image-rs RGB buffer into an owned grid.
    pub fn from_image(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Grid::from_fn(width as usize, height as usize, |x, y| {
            let c = image.get_pixel(x as u32, y as u32).channels();
            Pixel::new(c[0], c[1], c[2])
        })
    }

    /// Copy the grid back out into an image-rs RGB buffer.
    pub fn to_image(&self) -> RgbImage {
        let mut out = RgbImage::new(self.width() as u32, self.height() as u32);
        for (y, x) in iproduct!(0..self.height(), 0..self.width()) {
            let p = self.pixel(x, y);
            let channels = [p.red, p.green, p.blue];
            let c = ImagePixel::from_slice(&channels);
            out.put_pixel(x as u32, y as u32, *c);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_reports_zero_both_ways() {
        let grid = Grid::new(Vec::new());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
    }

    #[test]
    fn from_fn_is_column_major() {
        let grid = Grid::from_fn(3, 2, |x, y| Pixel::new(x as u8, y as u8, 0));
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel(2, 1), Pixel::new(2, 1, 0));
    }

    #[test]
    fn image_round_trip_preserves_pixels() {
        let grid = Grid::from_fn(4, 3, |x, y| {
            Pixel::new((x * 50) as u8, (y * 80) as u8, (x + y) as u8)
        });
        let buf = grid.to_image();
        assert_eq!(buf.dimensions(), (4, 3));
        assert_eq!(Grid::from_image(&buf), grid);
    }
}
