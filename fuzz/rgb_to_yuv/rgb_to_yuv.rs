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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv_overlay::{
    rgb_pixel_to_yuv, rgb_to_yuv, rgb_to_yuv_with_workers, RgbImage, RgbPixel, YuvError,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8)| {
    fuzz_rgb_to_yuv(data.0, data.1, data.2, data.3, data.4, data.5);
});

fn fuzz_rgb_to_yuv(i_width: u8, i_height: u8, r: u8, g: u8, b: u8, workers: u8) {
    let pixel = RgbPixel::new(r, g, b);
    let pixels = vec![pixel; i_width as usize * i_height as usize];
    let image = RgbImage {
        pixels,
        width: i_width as u32,
        height: i_height as u32,
    };

    if i_width == 0 || i_height == 0 {
        assert_eq!(rgb_to_yuv(&image), Err(YuvError::ZeroBaseSize));
        return;
    }

    let reference = rgb_to_yuv_with_workers(&image, 1).unwrap();
    let converted = rgb_to_yuv_with_workers(&image, workers as usize).unwrap();
    assert_eq!(reference, converted);
    let expected = rgb_pixel_to_yuv(pixel);
    assert!(converted.pixels().iter().all(|&px| px == expected));

    let truncated = RgbImage {
        pixels: image.pixels[1..].to_vec(),
        width: image.width,
        height: image.height,
    };
    assert!(matches!(
        rgb_to_yuv(&truncated),
        Err(YuvError::SourceSizeMismatch(_))
    ));
}
