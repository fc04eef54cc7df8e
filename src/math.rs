/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use pxfm::{f_atan2, f_cbrt, f_hypot, f_log10, f_pow, f_sincos};
use std::f64::consts::{PI, TAU};

/// Power function, `NaN` for negative bases with fractional exponents.
#[inline]
pub(crate) fn pow(x: f64, y: f64) -> f64 {
    f_pow(x, y)
}

/// Real cube root, keeps the sign of `x`.
#[inline]
pub(crate) fn cbrt(x: f64) -> f64 {
    f_cbrt(x)
}

#[inline]
pub(crate) fn log10(x: f64) -> f64 {
    f_log10(x)
}

#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    f_atan2(y, x)
}

#[inline]
pub(crate) fn hypot(x: f64, y: f64) -> f64 {
    f_hypot(x, y)
}

#[inline]
pub(crate) fn m_clamp(a: f64, min: f64, max: f64) -> f64 {
    if a > max {
        max
    } else if a >= min {
        a
    } else {
        min
    }
}

/// Wraps an angle in radians into `[0, 2π)`.
#[inline]
pub(crate) fn wrap_radians(h: f64) -> f64 {
    let r = h % TAU;
    if r < 0. {
        let w = r + TAU;
        // -tiny + TAU rounds to TAU
        if w >= TAU { 0. } else { w }
    } else {
        r
    }
}

#[inline]
pub(crate) fn to_degrees(h: f64) -> f64 {
    h * 180. / PI
}

#[inline]
pub(crate) fn to_radians(h: f64) -> f64 {
    h * PI / 180.
}

/// Rectangular `(a, b)` into `(chroma, hue)`, hue in `[0, 2π)`.
#[inline]
pub(crate) fn to_polar(a: f64, b: f64) -> (f64, f64) {
    let chroma = hypot(a, b);
    let hue = wrap_radians(atan2(b, a));
    (chroma, hue)
}

/// `(chroma, hue)` back into rectangular `(a, b)`.
#[inline]
pub(crate) fn from_polar(chroma: f64, hue: f64) -> (f64, f64) {
    let (sin, cos) = f_sincos(hue);
    (chroma * cos, chroma * sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_negative_angles() {
        let h = wrap_radians(-PI / 2.);
        assert!((h - 3. * PI / 2.).abs() < 1e-12);
        assert!(wrap_radians(TAU) < 1e-12);
        assert_eq!(wrap_radians(-1e-300), 0.);
    }

    #[test]
    fn polar_round_trip() {
        let (c, h) = to_polar(-0.3, 0.4);
        assert!((c - 0.5).abs() < 1e-12);
        assert!((0. ..TAU).contains(&h));
        let (a, b) = from_polar(c, h);
        assert!((a + 0.3).abs() < 1e-12);
        assert!((b - 0.4).abs() < 1e-12);
    }

    #[test]
    fn cube_root_keeps_sign() {
        assert!((cbrt(-8.) + 2.).abs() < 1e-12);
        assert!((pow(2., 10.) - 1024.).abs() < 1e-9);
        assert!((log10(1000.) - 3.).abs() < 1e-12);
    }
}
