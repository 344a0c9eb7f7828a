// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The carving driver
//!
//! Loads an image, hands it to the carver as an owned grid, shrinks
//! it to the requested dimensions one seam at a time, and writes the
//! result back out.  With `--energy` it writes the rendered energy
//! map instead, which is handy for eyeballing what the carver will
//! protect.

use clap::{App, Arg};
use gridcarve::{energy_to_image, Grid, SeamCarver};
use log::info;

fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let matches = App::new("gridcarve")
        .version("0.1.0")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the grayscale energy map instead of carving"),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();

    let image = image::open(input)?.to_rgb();
    let mut carver = SeamCarver::new(Grid::from_image(&image));
    info!("loaded {} ({}x{})", input, carver.width(), carver.height());

    if matches.is_present("energy") {
        energy_to_image(&carver).save(output)?;
        info!("energy map written to {}", output);
        return Ok(());
    }

    let new_width = match matches.value_of("width") {
        Some(w) => w.parse()?,
        None => carver.width(),
    };
    let new_height = match matches.value_of("height") {
        Some(h) => h.parse()?,
        None => carver.height(),
    };

    carver.carve_to(new_width, new_height)?;
    info!("carved down to {}x{}", carver.width(), carver.height());

    carver.grid().to_image().save(output)?;
    info!("carved image written to {}", output);
    Ok(())
}
