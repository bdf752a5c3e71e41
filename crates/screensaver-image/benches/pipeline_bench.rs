// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the screensaver pipeline in the screensaver-image
// crate. Uses a synthetic photo-sized gradient so no fixtures are needed.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use screensaver_core::{CropStrategy, TransformParameters};
use screensaver_image::{OutputImage, transform};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// A 1200x900 RGB gradient, roughly a downsized phone photo.
fn synthetic_photo() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(1200, 900, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

/// Full transform to a Paperwhite-sized 4-bit screensaver.
fn bench_transform(c: &mut Criterion) {
    let source = synthetic_photo();
    let params = TransformParameters::new(1072, 1448, 300, 300, 4).expect("valid parameters");

    let mut group = c.benchmark_group("transform (1200x900 -> 1072x1448)");
    for strategy in [CropStrategy::Center, CropStrategy::Saliency] {
        group.bench_function(strategy.to_string(), |b| {
            b.iter(|| {
                let output = transform(black_box(source.clone()), &params, strategy)
                    .expect("transform");
                black_box(output);
            });
        });
    }
    group.finish();
}

/// PNG encoding with the `pHYs` chunk.
fn bench_encode(c: &mut Criterion) {
    let params = TransformParameters::new(1072, 1448, 300, 300, 4).expect("valid parameters");
    let output: OutputImage =
        transform(synthetic_photo(), &params, CropStrategy::Center).expect("transform");

    c.bench_function("png_encode (1072x1448)", |b| {
        b.iter(|| black_box(output.to_png_bytes().expect("encode")));
    });
}

criterion_group!(benches, bench_transform, bench_encode);
criterion_main!(benches);
