// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the relative distance
//! between the colors that make them up: the classic
//! d(R²) + d(G²) + d(B²).

/// One three-channel color sample.  Channels are bytes; all arithmetic
/// on them happens in a wider signed type so differences cannot
/// underflow before squaring.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²

/// (Pixel, Pixel) -> Energy
///
/// Given a pair of pixels, calculate the energy between them.
#[inline]
pub fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> f64 {
    p1.channels()
        .iter()
        .zip(p2.channels().iter())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            f64::from(d * d)
        })
        .sum()
}
