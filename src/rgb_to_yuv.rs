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
use crate::images::{RgbImage, YuvImage};
use crate::yuv_support::{RgbPixel, YuvPixel, BT601_FULL_FORWARD};
use crate::YuvError;
use std::ops::Range;

/// Converts a single RGB pixel with BT.601 full range style coefficients
#[inline]
pub fn rgb_pixel_to_yuv(px: RgbPixel) -> YuvPixel {
    BT601_FULL_FORWARD.transform(px)
}

/// Number of row bands used by [rgb_to_yuv]
pub fn default_workers() -> usize {
    let workers;
    #[cfg(feature = "rayon")]
    {
        workers = rayon::current_num_threads();
    }
    #[cfg(not(feature = "rayon"))]
    {
        workers = thread_budget();
    }
    workers.max(1)
}

/// Upper bound of OS threads spawned by one conversion without rayon
#[cfg(not(feature = "rayon"))]
fn thread_budget() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Splits `[0, height)` into contiguous row bands.
///
/// Every band has `height / workers` rows except the last one which also
/// takes the remainder. `workers` is clamped to `[1, height]` so bands are
/// never empty unless `height` is 0.
pub fn row_bands(height: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.clamp(1, height.max(1));
    let part_height = height / workers;
    (0..workers)
        .map(|t| {
            let start = t * part_height;
            let end = if t == workers - 1 {
                height
            } else {
                start + part_height
            };
            start..end
        })
        .collect()
}

#[inline]
fn convert_band(dst: &mut [YuvPixel], src: &[RgbPixel]) {
    for (dst, &src) in dst.iter_mut().zip(src.iter()) {
        *dst = rgb_pixel_to_yuv(src);
    }
}

/// Convert RGB image to packed YUV pixels using [default_workers] row bands.
///
/// # Errors
///
/// Returns [YuvError::ZeroBaseSize] for empty dimensions, [YuvError::PointerOverflow]
/// if `width * height` does not fit `usize` and [YuvError::SourceSizeMismatch] when
/// pixel count differs from `width * height`.
pub fn rgb_to_yuv(image: &RgbImage) -> Result<YuvImage, YuvError> {
    rgb_to_yuv_with_workers(image, default_workers())
}

/// Convert RGB image to packed YUV pixels splitting rows into `workers` bands.
///
/// Each band is converted on its own task and the call returns once all of them
/// finished. Result does not depend on `workers`, 0 is treated as 1. Without the
/// `rayon` feature `workers` is also capped at available parallelism since every
/// band gets its own thread.
pub fn rgb_to_yuv_with_workers(image: &RgbImage, workers: usize) -> Result<YuvImage, YuvError> {
    image.check_constraints()?;

    let width = image.width as usize;
    let mut yuv = vec![YuvPixel::default(); image.pixels.len()];

    #[cfg(not(feature = "rayon"))]
    let workers = workers.min(thread_budget());
    let bands = row_bands(image.height as usize, workers);
    let mut jobs: Vec<(&mut [YuvPixel], &[RgbPixel])> = Vec::with_capacity(bands.len());
    let mut remaining: &mut [YuvPixel] = &mut yuv;
    for band in bands.iter() {
        let (dst, rest) = std::mem::take(&mut remaining).split_at_mut(band.len() * width);
        jobs.push((dst, &image.pixels[band.start * width..band.end * width]));
        remaining = rest;
    }

    if jobs.len() == 1 {
        for (dst, src) in jobs {
            convert_band(dst, src);
        }
    } else {
        #[cfg(feature = "rayon")]
        {
            rayon::scope(|scope| {
                for (dst, src) in jobs {
                    scope.spawn(move |_| convert_band(dst, src));
                }
            });
        }
        #[cfg(not(feature = "rayon"))]
        {
            std::thread::scope(|scope| {
                for (dst, src) in jobs {
                    scope.spawn(move || convert_band(dst, src));
                }
            });
        }
    }

    YuvImage::new(yuv, image.width, image.height)
}
