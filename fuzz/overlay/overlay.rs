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
use yuv_overlay::{overlay_yuv420, YuvError, YuvImage, YuvPixel, YuvPlanarFrameMut};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, u8)| {
    fuzz_overlay(data.0, data.1, data.2, data.3, data.4, data.5, data.6);
});

fn fuzz_overlay(
    frame_width: u8,
    frame_height: u8,
    overlay_width: u8,
    overlay_height: u8,
    pos_x: u8,
    pos_y: u8,
    value: u8,
) {
    if overlay_width == 0 || overlay_height == 0 || frame_width == 0 || frame_height == 0 {
        return;
    }
    let overlay = YuvImage::new(
        vec![YuvPixel::new(value, value, value); overlay_width as usize * overlay_height as usize],
        overlay_width as u32,
        overlay_height as u32,
    )
    .unwrap();
    let mut frame = YuvPlanarFrameMut::alloc(frame_width as u32, frame_height as u32).unwrap();
    let fill = value.wrapping_add(1);
    frame.data.borrow_mut().fill(fill);

    let fits = pos_x as u32 + overlay_width as u32 <= frame_width as u32
        && pos_y as u32 + overlay_height as u32 <= frame_height as u32;

    match overlay_yuv420(&mut frame, &overlay, pos_x as u32, pos_y as u32) {
        Ok(()) => {
            assert!(fits);
            let width = frame_width as usize;
            let y = pos_y as usize;
            let x = pos_x as usize;
            assert_eq!(frame.y_plane()[y * width + x], value);
        }
        Err(YuvError::OutOfBounds(_)) => {
            assert!(!fits);
            assert!(frame.as_bytes().iter().all(|&v| v == fill));
        }
        Err(e) => panic!("Unexpected error {e}"),
    }
}
