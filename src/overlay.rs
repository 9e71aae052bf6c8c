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
use crate::images::{YuvImage, YuvPlanarFrameMut};
use crate::yuv_error::{check_overlay_bounds, OverlayBounds};
use crate::YuvError;

/// Composites packed YUV image onto YUV420 frame at (`pos_x`, `pos_y`).
///
/// Luma is copied 1:1. Chroma is taken from every overlay pixel with even local
/// `x` and `y`, that is top-left sample of each 2x2 block, without averaging.
/// Chroma sample index is `((pos_y + y) / 2) * (width / 2) + (pos_x + x) / 2`,
/// samples that fall outside U or V plane of odd sized frames are not written.
///
/// # Arguments
///
/// * `frame` - Target YUV420 frame, modified in place.
/// * `overlay` - Image produced by [crate::rgb_to_yuv].
/// * `pos_x` - Column of the overlay's left edge in the frame.
/// * `pos_y` - Row of the overlay's top edge in the frame.
///
/// # Errors
///
/// Everything is validated before the first write so on error frame is untouched.
/// [YuvError::FrameSizeMismatch] or [YuvError::ZeroBaseSize] for malformed frame,
/// [YuvError::OutOfBounds] when overlay does not fit the frame.
pub fn overlay_yuv420(
    frame: &mut YuvPlanarFrameMut,
    overlay: &YuvImage,
    pos_x: u32,
    pos_y: u32,
) -> Result<(), YuvError> {
    frame.check_constraints()?;
    check_overlay_bounds(OverlayBounds {
        pos_x,
        pos_y,
        overlay_width: overlay.width(),
        overlay_height: overlay.height(),
        frame_width: frame.width,
        frame_height: frame.height,
    })?;

    let frame_width = frame.width as usize;
    let chroma_stride = frame_width / 2;
    let overlay_width = overlay.width() as usize;
    let pos_x = pos_x as usize;
    let pos_y = pos_y as usize;

    let (y_plane, u_plane, v_plane) = frame.planes_mut();

    for (y, src_row) in overlay.pixels().chunks_exact(overlay_width).enumerate() {
        let dst_y = pos_y + y;
        let luma_start = dst_y * frame_width + pos_x;
        let dst_row = &mut y_plane[luma_start..luma_start + overlay_width];
        for (dst, src) in dst_row.iter_mut().zip(src_row.iter()) {
            *dst = src.y;
        }

        if y & 1 != 0 {
            continue;
        }

        let chroma_row = (dst_y / 2) * chroma_stride;
        for (x, src) in src_row.iter().enumerate().step_by(2) {
            let chroma_index = chroma_row + (pos_x + x) / 2;
            if let (Some(u_dst), Some(v_dst)) =
                (u_plane.get_mut(chroma_index), v_plane.get_mut(chroma_index))
            {
                *u_dst = src.u;
                *v_dst = src.v;
            }
        }
    }

    Ok(())
}
