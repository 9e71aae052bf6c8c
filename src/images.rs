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
use crate::yuv_error::{
    check_non_zero, check_overflow_v2, check_packed_image, check_yuv420_frame, yuv420_frame_size,
    MismatchedSize,
};
use crate::yuv_support::{RgbPixel, YuvPixel};
use crate::YuvError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Packed RGB image, rows are stored top-down without padding
pub struct RgbImage {
    pub pixels: Vec<RgbPixel>,
    pub width: u32,
    pub height: u32,
}

impl RgbImage {
    /// Creates an image, `pixels` must hold exactly `width * height` elements
    pub fn new(pixels: Vec<RgbPixel>, width: u32, height: u32) -> Result<Self, YuvError> {
        let image = RgbImage {
            pixels,
            width,
            height,
        };
        image.check_constraints()?;
        Ok(image)
    }

    /// Builds an image from interleaved `R, G, B` bytes
    pub fn from_rgb_bytes(rgb: &[u8], width: u32, height: u32) -> Result<Self, YuvError> {
        check_non_zero(width, height)?;
        let expected = check_overflow_v2(width as usize * 3, height as usize)?;
        if rgb.len() != expected {
            return Err(YuvError::SourceSizeMismatch(MismatchedSize {
                expected,
                received: rgb.len(),
            }));
        }
        let pixels = rgb
            .chunks_exact(3)
            .map(|px| RgbPixel::new(px[0], px[1], px[2]))
            .collect::<Vec<_>>();
        Self::new(pixels, width, height)
    }

    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_packed_image(&self.pixels, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Packed YUV 4:4:4 image, one [YuvPixel] per source pixel.
///
/// Immutable once built.
pub struct YuvImage {
    pixels: Vec<YuvPixel>,
    width: u32,
    height: u32,
}

impl YuvImage {
    pub fn new(pixels: Vec<YuvPixel>, width: u32, height: u32) -> Result<Self, YuvError> {
        check_packed_image(&pixels, width, height)?;
        Ok(YuvImage {
            pixels,
            width,
            height,
        })
    }

    pub fn pixels(&self) -> &[YuvPixel] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn into_pixels(self) -> Vec<YuvPixel> {
        self.pixels
    }
}

#[derive(Debug)]
/// Mutable contiguous YUV420 frame: Y plane, then U, then V.
///
/// Stride here always equals width, luma is `width * height` bytes, U is
/// `width * height / 4` bytes and V takes the rest of `width * height * 3 / 2`.
pub struct YuvPlanarFrameMut<'a> {
    pub data: BufferStoreMut<'a, u8>,
    pub width: u32,
    pub height: u32,
}

impl<'a> YuvPlanarFrameMut<'a> {
    /// Allocates zeroed frame
    pub fn alloc(width: u32, height: u32) -> Result<Self, YuvError> {
        let size = yuv420_frame_size(width, height)?;
        Ok(YuvPlanarFrameMut {
            data: BufferStoreMut::Owned(vec![0u8; size]),
            width,
            height,
        })
    }

    /// Wraps an existing buffer without copying, buffer is checked against dimensions
    pub fn from_slice(data: &'a mut [u8], width: u32, height: u32) -> Result<Self, YuvError> {
        let frame = YuvPlanarFrameMut {
            data: BufferStoreMut::Borrowed(data),
            width,
            height,
        };
        frame.check_constraints()?;
        Ok(frame)
    }

    pub fn check_constraints(&self) -> Result<(), YuvError> {
        check_yuv420_frame(self.data.borrow(), self.width, self.height)
    }

    #[inline]
    fn plane_sizes(&self) -> (usize, usize) {
        let luma = self.width as usize * self.height as usize;
        (luma, luma / 4)
    }

    /// # Panics
    ///
    /// Panics if frame does not satisfy [YuvPlanarFrameMut::check_constraints].
    pub fn y_plane(&self) -> &[u8] {
        let (luma, _) = self.plane_sizes();
        &self.data.borrow()[..luma]
    }

    /// # Panics
    ///
    /// Panics if frame does not satisfy [YuvPlanarFrameMut::check_constraints].
    pub fn u_plane(&self) -> &[u8] {
        let (luma, chroma) = self.plane_sizes();
        &self.data.borrow()[luma..luma + chroma]
    }

    /// # Panics
    ///
    /// Panics if frame does not satisfy [YuvPlanarFrameMut::check_constraints].
    pub fn v_plane(&self) -> &[u8] {
        let (luma, chroma) = self.plane_sizes();
        &self.data.borrow()[luma + chroma..]
    }

    /// Splits the frame into disjoint Y, U and V planes.
    ///
    /// # Panics
    ///
    /// Panics if frame does not satisfy [YuvPlanarFrameMut::check_constraints].
    pub fn planes_mut(&mut self) -> (&mut [u8], &mut [u8], &mut [u8]) {
        let (luma, chroma) = self.plane_sizes();
        let (y_plane, chroma_planes) = self.data.borrow_mut().split_at_mut(luma);
        let (u_plane, v_plane) = chroma_planes.split_at_mut(chroma);
        (y_plane, u_plane, v_plane)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_plane_layout() {
        let mut frame = YuvPlanarFrameMut::alloc(4, 4).unwrap();
        assert_eq!(frame.as_bytes().len(), 24);
        {
            let (y, u, v) = frame.planes_mut();
            assert_eq!((y.len(), u.len(), v.len()), (16, 4, 4));
            y.fill(1);
            u.fill(2);
            v.fill(3);
        }
        assert!(frame.y_plane().iter().all(|&x| x == 1));
        assert!(frame.u_plane().iter().all(|&x| x == 2));
        assert!(frame.v_plane().iter().all(|&x| x == 3));
        assert_eq!(&frame.as_bytes()[15..17], &[1, 2]);
        assert_eq!(&frame.as_bytes()[19..21], &[2, 3]);
    }

    #[test]
    fn test_frame_rejects_wrong_size() {
        let mut data = vec![0u8; 23];
        let frame = YuvPlanarFrameMut::from_slice(&mut data, 4, 4);
        assert!(matches!(frame, Err(YuvError::FrameSizeMismatch(_))));
        assert_eq!(
            YuvPlanarFrameMut::alloc(0, 4).and_then(|f| f.check_constraints()),
            Err(YuvError::ZeroBaseSize)
        );
    }

    #[test]
    fn test_rgb_image_from_bytes() {
        let bytes = [255u8, 0, 0, 0, 255, 0];
        let image = RgbImage::from_rgb_bytes(&bytes, 2, 1).unwrap();
        assert_eq!(image.pixels[1], RgbPixel::new(0, 255, 0));
        assert!(RgbImage::from_rgb_bytes(&bytes[..5], 2, 1).is_err());
        assert!(RgbImage::from_rgb_bytes(&bytes, 1, 1).is_err());
    }
}
