// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end tests of the gridcarve binary.

use assert_cmd::prelude::*;
use image::Pixel;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

// A small diagonal gradient, saved as a PNG for the binary to chew on.
fn write_sample(path: &Path, width: u32, height: u32) {
    let mut buf = image::RgbImage::new(width, height);
    for (x, y, p) in buf.enumerate_pixels_mut() {
        let cs = [(x * 29) as u8, (y * 31) as u8, ((x + y) * 11) as u8];
        *p = *Pixel::from_slice(&cs);
    }
    buf.save(path).unwrap();
}

#[test]
fn carves_a_png_to_the_requested_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_sample(&input, 8, 6);

    Command::cargo_bin("gridcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "5", "--height", "4"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb();
    assert_eq!(carved.dimensions(), (5, 4));
}

#[test]
fn writes_an_energy_map_of_matching_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("energy.png");
    write_sample(&input, 6, 5);

    Command::cargo_bin("gridcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--energy")
        .assert()
        .success();

    let rendered = image::open(&output).unwrap().to_luma();
    assert_eq!(rendered.dimensions(), (6, 5));
}

#[test]
fn refuses_to_upscale() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_sample(&input, 4, 4);

    Command::cargo_bin("gridcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot carve"));
}
