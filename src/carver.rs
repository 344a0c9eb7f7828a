// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam carver
//!
//! Owns the grid for the duration of a carving session and provides
//! the three operations of content-aware resizing: the per-pixel
//! energy query, the minimum-cost seam search in either orientation,
//! and in-place seam removal.  One shared dynamic program serves both
//! orientations; only the axis roles change.

use crate::cq;
use crate::grid::Grid;
use crate::pixel::energy_of_pair;
use crate::seamfinder::SeamFinder;
use crate::twodmap::TwoDimensionalMap;
use failure::Fail;
use log::debug;
use std::mem;

/// One inner-axis index per outer-axis step: a row index per column
/// for a horizontal seam, a column index per row for a vertical one.
/// Adjacent entries differ by at most 1.
pub type Seam = Vec<usize>;

/// The one recoverable error in this crate: asking the carving driver
/// to grow an image.  Everything else that can go wrong here is
/// caller misuse (a stale or mismatched seam) and panics instead.
#[derive(Debug, Fail)]
pub enum CarveError {
    #[fail(
        display = "cannot carve {}x{} up to {}x{}: seam carving only shrinks",
        width, height, new_width, new_height
    )]
    Upscale {
        width: usize,
        height: usize,
        new_width: usize,
        new_height: usize,
    },
}

/// A struct for holding the grid to be carved.
pub struct SeamCarver {
    grid: Grid,
}

impl SeamCarver {
    /// Takes ownership of a grid and normalizes any degenerate
    /// columns-with-no-rows state before carving begins.
    pub fn new(grid: Grid) -> Self {
        let mut carver = SeamCarver { grid };
        carver.normalize_empty();
        carver
    }

    /// Read-only view of the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give the grid back once the session is over.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Gradient-magnitude energy of the pixel at (x, y).
    ///
    /// Neighbors are looked up toroidally: the left neighbor of the
    /// first column is the last column, and so on for every edge.  In
    /// a size-1 dimension a pixel therefore neighbors itself and that
    /// axis contributes nothing to the gradient, which is why a 1x1
    /// grid has energy 0.  Panics when the grid is empty or (x, y) is
    /// out of bounds.
    pub fn pixel_energy(&self, x: usize, y: usize) -> f64 {
        let (width, height) = (self.width(), self.height());
        assert!(
            x < width && y < height,
            "energy query at ({}, {}) outside a {}x{} grid",
            x,
            y,
            width,
            height
        );
        let left = self.grid.pixel(cq!(x == 0, width, x) - 1, y);
        let right = self.grid.pixel(cq!(x == width - 1, 0, x + 1), y);
        let above = self.grid.pixel(x, cq!(y == 0, height, y) - 1);
        let below = self.grid.pixel(x, cq!(y == height - 1, 0, y + 1));

        let delta_x = energy_of_pair(&left, &right);
        let delta_y = energy_of_pair(&above, &below);
        (delta_x + delta_y).sqrt()
    }

    /// Returns one row index per column, left to right.  Empty when
    /// the grid is empty.
    pub fn find_horizontal_seam(&self) -> Seam {
        if self.height() == 0 {
            return Seam::new();
        }
        self.find_min_seam(self.width(), self.height(), true)
    }

    /// Returns one column index per row, top to bottom.  Empty when
    /// the grid is empty.
    pub fn find_vertical_seam(&self) -> Seam {
        if self.width() == 0 {
            return Seam::new();
        }
        self.find_min_seam(self.height(), self.width(), false)
    }

    // The shared dynamic program.  "outer" is the traversal axis, one
    // seam entry per step; "inner" is the axis those entries range
    // over.  Only two cost rows are live at any time, but the parent
    // table is retained whole so the cheapest path can be walked back
    // after the sweep.
    fn find_min_seam(&self, outer: usize, inner: usize, horizontal: bool) -> Seam {
        let energy =
            |i: usize, j: usize| cq!(horizontal, self.pixel_energy(i, j), self.pixel_energy(j, i));

        let mut cur: Vec<f64> = (0..inner).map(|j| energy(0, j)).collect();
        let mut next = vec![0.0; inner];
        let mut parents: TwoDimensionalMap<usize> = TwoDimensionalMap::new(outer, inner);

        for i in 1..outer {
            for j in 0..inner {
                // Ties keep the straight-ahead predecessor: a neighbor
                // only wins with a strictly smaller cost, j-1 checked
                // before j+1.  No wraparound on this axis.
                let mut cost = cur[j];
                let mut parent = j;
                if j > 0 && cur[j - 1] < cost {
                    cost = cur[j - 1];
                    parent = j - 1;
                }
                if j + 1 < inner && cur[j + 1] < cost {
                    cost = cur[j + 1];
                    parent = j + 1;
                }
                parents[(i, j)] = parent;
                next[j] = cost + energy(i, j);
            }
            mem::swap(&mut cur, &mut next);
        }

        // Terminal entry: leftmost minimum of the final cost row.
        let mut terminal = 0;
        for (j, &cost) in cur.iter().enumerate() {
            if cost < cur[terminal] {
                terminal = j;
            }
        }

        // Walk the parent table back from the terminal step, then the
        // seam reads forward from step 0.
        let mut seam = vec![0; outer];
        seam[outer - 1] = terminal;
        for i in (1..outer).rev() {
            seam[i - 1] = parents[(i, seam[i])];
        }
        seam
    }

    /// Remove one pixel from every column; height shrinks by one.
    ///
    /// The seam must be exactly as long as the grid is wide and every
    /// entry must be a valid row index.  Anything else means the
    /// caller is holding a seam computed for a different grid state,
    /// and this panics rather than guessing.
    pub fn remove_horizontal_seam(&mut self, seam: &[usize]) {
        let width = self.width();
        assert_eq!(
            seam.len(),
            width,
            "horizontal seam length {} does not match width {}",
            seam.len(),
            width
        );
        for x in 0..width {
            self.grid.columns[x].remove(seam[x]);
        }
        self.normalize_empty();
    }

    /// Remove one pixel from every row; width shrinks by one.
    ///
    /// Within each row the pixels after the seam shift one column
    /// left, front to back so no column is clobbered before it is
    /// read; the emptied last column is then dropped.  Same staleness
    /// contract as [`SeamCarver::remove_horizontal_seam`].
    pub fn remove_vertical_seam(&mut self, seam: &[usize]) {
        let height = self.height();
        assert_eq!(
            seam.len(),
            height,
            "vertical seam length {} does not match height {}",
            seam.len(),
            height
        );
        let width = self.width();
        for y in 0..height {
            assert!(
                seam[y] < width,
                "vertical seam entry {} outside width {}",
                seam[y],
                width
            );
            for x in seam[y]..width - 1 {
                self.grid.columns[x][y] = self.grid.columns[x + 1][y];
            }
        }
        if height != 0 {
            self.grid.columns.pop();
        }
        self.normalize_empty();
    }

    /// Repeatedly find and remove seams until the grid is exactly
    /// `new_width` x `new_height`, alternating directions while both
    /// axes still have pixels to give up.  The full energy map is
    /// recomputed for every seam; a removal invalidates every
    /// previously found seam, so there is nothing to reuse.
    pub fn carve_to(&mut self, new_width: usize, new_height: usize) -> Result<(), CarveError> {
        if self.width() < new_width || self.height() < new_height {
            return Err(CarveError::Upscale {
                width: self.width(),
                height: self.height(),
                new_width,
                new_height,
            });
        }
        while self.width() > new_width && self.height() > new_height {
            let seam = self.find_vertical_seam();
            self.remove_vertical_seam(&seam);
            let seam = self.find_horizontal_seam();
            self.remove_horizontal_seam(&seam);
            debug!("carved both ways to {}x{}", self.width(), self.height());
        }
        while self.width() > new_width {
            let seam = self.find_vertical_seam();
            self.remove_vertical_seam(&seam);
            debug!("carved width to {}x{}", self.width(), self.height());
        }
        while self.height() > new_height {
            let seam = self.find_horizontal_seam();
            self.remove_horizontal_seam(&seam);
            debug!("carved height to {}x{}", self.width(), self.height());
        }
        Ok(())
    }

    // Empty-collapse: a grid whose columns have no rows must also have
    // no columns, so every all-empty grid reports (0, 0) no matter
    // which axis emptied first.  Invoked after every structural
    // mutation rather than ad hoc at each call site.
    fn normalize_empty(&mut self) {
        while self.width() != 0 && self.height() == 0 {
            self.grid.columns.pop();
        }
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Seam {
        SeamCarver::find_horizontal_seam(self)
    }

    fn find_vertical_seam(&self) -> Seam {
        SeamCarver::find_vertical_seam(self)
    }
}
