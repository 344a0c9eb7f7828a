// #![deny(missing_docs)]

pub mod ternary;

pub mod pixel;
pub use pixel::{energy_of_pair, Pixel};

pub mod grid;
pub use grid::Grid;

pub mod twodmap;

pub mod seamfinder;
pub use seamfinder::SeamFinder;

pub mod carver;
pub use carver::{CarveError, Seam, SeamCarver};

pub mod dump;
pub use dump::energy_to_image;
