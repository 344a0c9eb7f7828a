// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render the energy field for inspection
//!
//! Scales the energy of every pixel against the hottest pixel in the
//! grid and writes the result into a grayscale image buffer, white
//! being the most energetic.  Strictly a debugging and demo aid; the
//! carver never looks at this.

use crate::carver::SeamCarver;
use crate::cq;
use image::{GrayImage, ImageBuffer, Luma, Pixel};
use itertools::iproduct;
use num_traits::clamp;

/// Map the carver's current energy field onto a grayscale image.
pub fn energy_to_image(carver: &SeamCarver) -> GrayImage {
    let (width, height) = (carver.width(), carver.height());
    let mut out: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(width as u32, height as u32);
    if width == 0 {
        return out;
    }

    let energies: Vec<f64> = iproduct!(0..height, 0..width)
        .map(|(y, x)| carver.pixel_energy(x, y))
        .collect();
    let peak = energies.iter().cloned().fold(0.0, f64::max);

    energies.iter().enumerate().for_each(|(i, e)| {
        let (x, y) = ((i % width) as u32, (i / width) as u32);
        let scaled = cq!(peak > 0.0, e * 255.0 / peak, 0.0);
        let cs = [clamp(scaled, 0.0, 255.0) as u8];
        let c = Pixel::from_slice(&cs);
        out.put_pixel(x, y, *c);
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::pixel::Pixel as GridPixel;

    #[test]
    fn empty_grid_renders_an_empty_image() {
        let carver = SeamCarver::new(Grid::new(Vec::new()));
        assert_eq!(energy_to_image(&carver).dimensions(), (0, 0));
    }

    #[test]
    fn uniform_grid_renders_black() {
        let carver = SeamCarver::new(Grid::from_fn(3, 3, |_, _| GridPixel::new(9, 9, 9)));
        let rendered = energy_to_image(&carver);
        assert!(rendered.pixels().all(|p| p.channels() == [0]));
    }

    #[test]
    fn hottest_pixel_renders_white() {
        let shades = [0u8, 10, 255];
        let carver = SeamCarver::new(Grid::from_fn(3, 3, move |x, _| {
            GridPixel::new(shades[x], shades[x], shades[x])
        }));
        let rendered = energy_to_image(&carver);
        assert_eq!(rendered.dimensions(), (3, 3));
        assert!(rendered.pixels().any(|p| p.channels() == [255]));
    }
}
