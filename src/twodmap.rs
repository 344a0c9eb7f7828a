use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field over a flat vector.  The seam
/// search uses it to retain the predecessor table: one parent index
/// per cell, kept for the whole sweep so the cheapest path can be
/// reconstructed after the cost rows have been rolled away.
#[derive(Debug)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: usize,
    pub height: usize,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map.  The content type must implement the Default
    /// trait.
    pub fn new(width: usize, height: usize) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width * height],
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (usize, usize)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_default_and_round_trip() {
        let mut map: TwoDimensionalMap<usize> = TwoDimensionalMap::new(3, 2);
        assert_eq!(map[(2, 1)], 0);
        map[(2, 1)] = 7;
        map[(0, 0)] = 1;
        assert_eq!(map[(2, 1)], 7);
        assert_eq!(map[(0, 0)], 1);
        assert_eq!(map[(1, 1)], 0);
    }
}
