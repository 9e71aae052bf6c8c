/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use yuv_overlay::{
    overlay_yuv420, rgb_to_yuv, rgb_to_yuv_with_workers, RgbImage, RgbPixel, YuvPlanarFrameMut,
};

fn synthetic_image(width: u32, height: u32) -> RgbImage {
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| RgbPixel::new(x as u8, y as u8, (x ^ y) as u8)))
        .collect::<Vec<_>>();
    RgbImage::new(pixels, width, height).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let image = synthetic_image(1280, 720);

    c.bench_function("rgb_to_yuv 1280x720 single band", |b| {
        b.iter(|| rgb_to_yuv_with_workers(black_box(&image), 1).unwrap())
    });

    c.bench_function("rgb_to_yuv 1280x720 all bands", |b| {
        b.iter(|| rgb_to_yuv(black_box(&image)).unwrap())
    });

    let yuv = rgb_to_yuv(&image).unwrap();
    let mut frame = YuvPlanarFrameMut::alloc(1920, 1080).unwrap();

    c.bench_function("overlay_yuv420 1280x720 onto 1920x1080", |b| {
        b.iter(|| overlay_yuv420(&mut frame, black_box(&yuv), 320, 180).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
