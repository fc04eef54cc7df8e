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
use crate::math::{cbrt, pow};

pub(crate) const EPSILON: f64 = 216. / 24389.;
pub(crate) const KAPPA: f64 = 24389. / 27.;

/// Transfer function between linear light and stored RGB components.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Companding {
    /// Components are stored linearly
    Linear,
    /// Pure power law with the given exponent
    Gamma(f64),
    /// IEC 61966-2.1
    #[default]
    Srgb,
    /// CIE L* curve
    Luminance,
    /// ICC parametric curve type 3.
    ///
    /// Decoding is `Y = (aX + b)^gamma` for `X >= d` and `Y = cX` below.
    ParametricType3 {
        gamma: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    },
}

impl Companding {
    /// Linear light into stored components.
    #[allow(clippy::many_single_char_names)]
    pub fn compand(&self, linear: f64) -> f64 {
        match *self {
            Companding::Linear => linear,
            Companding::Gamma(gamma) => pow(linear, 1. / gamma),
            Companding::Srgb => {
                if linear <= 0.0031308 {
                    12.92 * linear
                } else {
                    1.055 * pow(linear, 1. / 2.4) - 0.055
                }
            }
            Companding::Luminance => {
                if linear <= EPSILON {
                    linear * KAPPA / 100.
                } else {
                    1.16 * cbrt(linear) - 0.16
                }
            }
            Companding::ParametricType3 { gamma, a, b, c, d } => {
                let limit = pow(a * d + b, gamma);
                if linear >= limit {
                    (pow(linear, 1. / gamma) - b) / a
                } else {
                    linear / c
                }
            }
        }
    }

    /// Stored components into linear light.
    #[allow(clippy::many_single_char_names)]
    pub fn inverse_compand(&self, encoded: f64) -> f64 {
        match *self {
            Companding::Linear => encoded,
            Companding::Gamma(gamma) => pow(encoded, gamma),
            Companding::Srgb => {
                if encoded <= 0.04045 {
                    encoded / 12.92
                } else {
                    pow((encoded + 0.055) / 1.055, 2.4)
                }
            }
            Companding::Luminance => {
                if encoded <= 0.08 {
                    100. * encoded / KAPPA
                } else {
                    let v = (encoded + 0.16) / 1.16;
                    v * v * v
                }
            }
            Companding::ParametricType3 { gamma, a, b, c, d } => {
                if encoded >= d {
                    pow(a * encoded + b, gamma)
                } else {
                    c * encoded
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P3: Companding = Companding::ParametricType3 {
        gamma: 2.4,
        a: 0.948,
        b: 0.052,
        c: 0.077,
        d: 0.04,
    };

    #[test]
    fn curves_round_trip() {
        let curves = [
            Companding::Linear,
            Companding::Gamma(2.2),
            Companding::Srgb,
            Companding::Luminance,
            P3,
        ];
        for curve in curves {
            for i in 0..=100 {
                let x = i as f64 / 100.;
                let encoded = curve.compand(x);
                let decoded = curve.inverse_compand(encoded);
                assert!((decoded - x).abs() < 1e-4, "{curve:?} at {x}: {decoded}");
            }
        }
    }

    #[test]
    fn srgb_known_values() {
        assert!((Companding::Srgb.compand(0.5) - 0.735356983).abs() < 1e-6);
        assert!((Companding::Srgb.inverse_compand(0.5) - 0.214041140).abs() < 1e-6);
        assert_eq!(Companding::Srgb.compand(0.), 0.);
    }

    #[test]
    fn parametric_matches_srgb() {
        let srgb_like = Companding::ParametricType3 {
            gamma: 2.4,
            a: 1. / 1.055,
            b: 0.055 / 1.055,
            c: 1. / 12.92,
            d: 0.04045,
        };
        for i in 0..=20 {
            let x = i as f64 / 20.;
            let a = srgb_like.inverse_compand(x);
            let b = Companding::Srgb.inverse_compand(x);
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn luminance_midpoint() {
        // L* of 18% grey is close to 49.5
        assert!((Companding::Luminance.compand(0.18) - 0.49496).abs() < 1e-4);
    }
}
