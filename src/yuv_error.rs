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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Placement of an overlay that does not fit into the target frame
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OverlayBounds {
    pub pos_x: u32,
    pub pos_y: u32,
    pub overlay_width: u32,
    pub overlay_height: u32,
    pub frame_width: u32,
    pub frame_height: u32,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum YuvError {
    PointerOverflow,
    ZeroBaseSize,
    SourceSizeMismatch(MismatchedSize),
    FrameSizeMismatch(MismatchedSize),
    OutOfBounds(OverlayBounds),
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source image have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::FrameSizeMismatch(size) => f.write_fmt(format_args!(
                "YUV420 frame have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::OutOfBounds(bounds) => f.write_fmt(format_args!(
                "Overlay {}x{} at ({}, {}) does not fit into frame {}x{}",
                bounds.overlay_width,
                bounds.overlay_height,
                bounds.pos_x,
                bounds.pos_y,
                bounds.frame_width,
                bounds.frame_height
            )),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_non_zero(width: u32, height: u32) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    Ok(())
}

/// Checks that packed per-pixel storage holds exactly `width * height` elements
#[inline]
pub(crate) fn check_packed_image<V>(data: &[V], width: u32, height: u32) -> Result<(), YuvError> {
    check_non_zero(width, height)?;
    let expected = check_overflow_v2(width as usize, height as usize)?;
    if data.len() != expected {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

/// Size in bytes of a contiguous YUV420 frame, `width * height * 3 / 2`
#[inline]
pub fn yuv420_frame_size(width: u32, height: u32) -> Result<usize, YuvError> {
    let luma = check_overflow_v2(width as usize, height as usize)?;
    let tripled = check_overflow_v2(luma, 3)?;
    Ok(tripled / 2)
}

#[inline]
pub(crate) fn check_yuv420_frame(data: &[u8], width: u32, height: u32) -> Result<(), YuvError> {
    check_non_zero(width, height)?;
    let expected = yuv420_frame_size(width, height)?;
    if data.len() != expected {
        return Err(YuvError::FrameSizeMismatch(MismatchedSize {
            expected,
            received: data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overlay_bounds(bounds: OverlayBounds) -> Result<(), YuvError> {
    let fits_x = bounds
        .pos_x
        .checked_add(bounds.overlay_width)
        .is_some_and(|right| right <= bounds.frame_width);
    let fits_y = bounds
        .pos_y
        .checked_add(bounds.overlay_height)
        .is_some_and(|bottom| bottom <= bounds.frame_height);
    if !fits_x || !fits_y {
        return Err(YuvError::OutOfBounds(bounds));
    }
    Ok(())
}
