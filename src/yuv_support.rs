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
use crate::numerics::qtrunc_u8;
use num_traits::{AsPrimitive, Float};

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct RgbPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbPixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        RgbPixel { r, g, b }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct YuvPixel {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl YuvPixel {
    pub const fn new(y: u8, u: u8, v: u8) -> Self {
        YuvPixel { y, u, v }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct CbCrForwardTransform<T> {
    pub yr: T,
    pub yg: T,
    pub yb: T,
    pub cb_r: T,
    pub cb_g: T,
    pub cb_b: T,
    pub cr_r: T,
    pub cr_g: T,
    pub cr_b: T,
    /// Offset added to both chroma channels
    pub bias_uv: T,
}

/// BT.601 full range style coefficients, rounded to three digits.
///
/// These are not broadcast legal, Y spans whole [0, 255].
pub const BT601_FULL_FORWARD: CbCrForwardTransform<f64> = CbCrForwardTransform {
    yr: 0.299,
    yg: 0.587,
    yb: 0.114,
    cb_r: -0.169,
    cb_g: -0.331,
    cb_b: 0.5,
    cr_r: 0.5,
    cr_g: -0.419,
    cr_b: -0.081,
    bias_uv: 128.,
};

impl<T> CbCrForwardTransform<T>
where
    T: Float + AsPrimitive<u8> + 'static,
    u8: AsPrimitive<T>,
{
    /// Terms are accumulated left to right, channels are truncated toward zero
    /// and saturated into [0, 255].
    #[inline(always)]
    pub fn transform(&self, px: RgbPixel) -> YuvPixel {
        let r: T = px.r.as_();
        let g: T = px.g.as_();
        let b: T = px.b.as_();
        let y = self.yr * r + self.yg * g + self.yb * b;
        let u = self.cb_r * r + self.cb_g * g + self.cb_b * b + self.bias_uv;
        let v = self.cr_r * r + self.cr_g * g + self.cr_b * b + self.bias_uv;
        YuvPixel {
            y: qtrunc_u8(y),
            u: qtrunc_u8(u),
            v: qtrunc_u8(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        let red = BT601_FULL_FORWARD.transform(RgbPixel::new(255, 0, 0));
        assert_eq!(red, YuvPixel::new(76, 84, 255));
        let green = BT601_FULL_FORWARD.transform(RgbPixel::new(0, 255, 0));
        assert_eq!(green, YuvPixel::new(149, 43, 21));
        let blue = BT601_FULL_FORWARD.transform(RgbPixel::new(0, 0, 255));
        assert_eq!(blue, YuvPixel::new(29, 255, 107));
        let black = BT601_FULL_FORWARD.transform(RgbPixel::new(0, 0, 0));
        assert_eq!(black, YuvPixel::new(0, 128, 128));
    }

    #[test]
    fn test_gray_has_neutral_chroma() {
        for value in [16u8, 64, 100, 200] {
            let px = BT601_FULL_FORWARD.transform(RgbPixel::new(value, value, value));
            assert!(px.u.abs_diff(128) <= 1, "gray {value} gave {:?}", px);
            assert!(px.v.abs_diff(128) <= 1, "gray {value} gave {:?}", px);
            assert!(px.y.abs_diff(value) <= 1, "gray {value} gave {:?}", px);
        }
    }

    #[test]
    fn test_f32_transform_agrees_within_one() {
        let transform32 = CbCrForwardTransform::<f32> {
            yr: 0.299,
            yg: 0.587,
            yb: 0.114,
            cb_r: -0.169,
            cb_g: -0.331,
            cb_b: 0.5,
            cr_r: 0.5,
            cr_g: -0.419,
            cr_b: -0.081,
            bias_uv: 128.,
        };
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let px = RgbPixel::new(r, g, b);
                    let a = BT601_FULL_FORWARD.transform(px);
                    let c = transform32.transform(px);
                    assert!(a.y.abs_diff(c.y) <= 1);
                    assert!(a.u.abs_diff(c.u) <= 1);
                    assert!(a.v.abs_diff(c.v) <= 1);
                }
            }
        }
    }
}
