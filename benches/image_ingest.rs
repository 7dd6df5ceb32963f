// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_intake::media::ingest::{encode_rgba_png, UploadedImage};
use iced_intake::media::DataUrl;
use std::hint::black_box;

fn image_ingest_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_ingest");

    // Gradient so the PNG does not collapse to a few bytes
    let (width, height) = (256u32, 256u32);
    let rgba: Vec<u8> = (0..width * height)
        .flat_map(|i| {
            let x = (i % width) as u8;
            let y = (i / width) as u8;
            [x, y, x ^ y, 255]
        })
        .collect();
    let png = encode_rgba_png(width, height, rgba).expect("encode sample png");

    group.bench_function("decode_png_256", |b| {
        b.iter(|| {
            let _ = black_box(UploadedImage::from_bytes(png.clone(), None, u64::MAX).unwrap());
        });
    });

    group.bench_function("encode_data_url_256", |b| {
        b.iter(|| black_box(DataUrl::encode("image/png", black_box(&png))));
    });

    let url = DataUrl::encode("image/png", &png);
    group.bench_function("restore_from_data_url_256", |b| {
        b.iter(|| {
            let _ = black_box(UploadedImage::from_data_url(url.as_str()).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, image_ingest_benchmark);
criterion_main!(benches);
