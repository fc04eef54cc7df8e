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
use crate::color::Color;
use crate::math::pow;
use crate::matrix::{Matrix3d, Vector3d};
use crate::model::JAB_MODEL;
use crate::profile::reference_space;
use crate::xyz::{Xyz, XyzSpace};

reference_space!(
    /// Jzazbz perceptual space (Safdar et al. 2017)
    JabSpace,
    JAB_MODEL
);

/// Jzazbz color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jab {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
    pub opacity: f64,
    pub space: JabSpace,
}

const B: f64 = 1.15;
const G: f64 = 0.66;
const C1: f64 = 3424. / 4096.;
const C2: f64 = 2413. / 128.;
const C3: f64 = 2392. / 128.;
const N: f64 = 2610. / 16384.;
const P: f64 = 1.7 * 2523. / 32.;
const D: f64 = -0.56;
const D0: f64 = 1.6295499532821566e-11;
/// Peak luminance of the perceptual quantizer
const PEAK: f64 = 10000.;

const TO_LMS: Matrix3d = Matrix3d::new([
    [0.41478972, 0.579999, 0.0146480],
    [-0.2015100, 1.120649, 0.0531008],
    [-0.0166008, 0.264800, 0.6684799],
]);
const FROM_LMS: Matrix3d = TO_LMS.inverse_const();

const TO_IAB: Matrix3d = Matrix3d::new([
    [0.5, 0.5, 0.],
    [3.524000, -4.066708, 0.542708],
    [0.199076, 1.096799, -1.295875],
]);
const FROM_IAB: Matrix3d = TO_IAB.inverse_const();

#[inline]
fn quantize(v: f64) -> f64 {
    let vn = pow(v / PEAK, N);
    pow((C1 + C2 * vn) / (1. + C3 * vn), P)
}

#[inline]
fn dequantize(v: f64) -> f64 {
    let vp = pow(v, 1. / P);
    PEAK * pow((C1 - vp) / (C3 * vp - C2), 1. / N)
}

impl Jab {
    #[inline]
    pub fn new(lightness: f64, a: f64, b: f64) -> Self {
        Self {
            lightness,
            a,
            b,
            opacity: 1.,
            space: JabSpace::default(),
        }
    }
}

impl Color for Jab {
    type Space = JabSpace;

    #[inline]
    fn space(&self) -> &JabSpace {
        &self.space
    }

    #[inline]
    fn opacity(&self) -> f64 {
        self.opacity
    }

    #[inline]
    fn components(&self) -> [f64; 3] {
        [self.lightness, self.a, self.b]
    }

    fn to_xyz(&self) -> Option<Xyz> {
        let jd = self.lightness + D0;
        let i = jd / (1. + D - D * jd);
        let lms = FROM_IAB.mul_vector(Vector3d::new(i, self.a, self.b));
        let primed = FROM_LMS.mul_vector(lms.map(dequantize));
        let [xp, yp, z] = primed.v;
        let x = (xp + (B - 1.) * z) / B;
        let y = (yp + (G - 1.) * x) / G;
        Some(Xyz::from_vector(
            Vector3d::new(x, y, z),
            self.opacity,
            XyzSpace::new(self.space.profile),
        ))
    }

    fn from_adapted_xyz(xyz: Xyz, space: JabSpace) -> Option<Self> {
        let xp = B * xyz.x - (B - 1.) * xyz.z;
        let yp = G * xyz.y - (G - 1.) * xyz.x;
        let lms = TO_LMS.mul_vector(Vector3d::new(xp, yp, xyz.z)).map(quantize);
        let [i, a, b] = TO_IAB.mul_vector(lms).v;
        Some(Jab {
            lightness: ((1. + D) * i) / (1. + D * i) - D0,
            a,
            b,
            opacity: xyz.opacity,
            space,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant::two_degree;

    #[test]
    fn known_value() {
        let xyz = Xyz::new(0.20654008, 0.12197225, 0.05136952);
        let jab = Jab::from_xyz(xyz).unwrap();
        assert!((jab.lightness - 0.00535048).abs() < 1e-7, "{jab:?}");
        assert!((jab.a - 0.00924302).abs() < 1e-7, "{jab:?}");
        assert!((jab.b - 0.00526007).abs() < 1e-7, "{jab:?}");

        let back = jab.to_xyz().unwrap();
        assert!((back.x - xyz.x).abs() < 1e-9);
        assert!((back.y - xyz.y).abs() < 1e-9);
        assert!((back.z - xyz.z).abs() < 1e-9);
    }

    #[test]
    fn adapts_into_space_white() {
        let xyz = Xyz::with_reference_white(0.3, 0.3, 0.2, two_degree::D50);
        let space = JabSpace::default();
        let direct = Jab::from_xyz_in(xyz, space).unwrap();
        let manual = Jab::from_adapted_xyz(xyz.adapt(two_degree::D65), space).unwrap();
        assert_eq!(direct, manual);
        assert_eq!(direct.to_xyz().unwrap().reference_white(), two_degree::D65);
    }

    #[test]
    fn keeps_opacity() {
        let jab = Jab::from_xyz(Xyz::new(0.5, 0.5, 0.5).with_opacity(0.3)).unwrap();
        assert_eq!(jab.opacity, 0.3);
        assert_eq!(jab.to_xyz().unwrap().opacity, 0.3);
    }
}
