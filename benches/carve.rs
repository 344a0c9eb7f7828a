#[macro_use]
extern crate criterion;

use criterion::Criterion;
use gridcarve::{Grid, Pixel, SeamCarver};

fn noisy_grid(width: usize, height: usize) -> Grid {
    Grid::from_fn(width, height, |x, y| {
        Pixel::new(
            (x * 37 % 251) as u8,
            (y * 41 % 251) as u8,
            ((x + y) * 13 % 251) as u8,
        )
    })
}

fn bench_vertical_seam(c: &mut Criterion) {
    let carver = SeamCarver::new(noisy_grid(64, 64));
    c.bench_function("find_vertical_seam 64x64", move |b| {
        b.iter(|| carver.find_vertical_seam())
    });
}

fn bench_carve_to(c: &mut Criterion) {
    c.bench_function("carve 48x48 down to 40x40", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(noisy_grid(48, 48));
            carver.carve_to(40, 40).unwrap();
            carver.width()
        })
    });
}

criterion_group!(benches, bench_vertical_seam, bench_carve_to);
criterion_main!(benches);
