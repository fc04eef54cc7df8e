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
use crate::chad::{ChromaticAdaptation, VON_KRIES};
use crate::chromaticity::Chromaticity;
use crate::illuminant::StandardIlluminant;
use crate::math::pow;
use crate::matrix::{Matrix3d, Vector3d};
use crate::xyz::{Xyz, XyzSpace};
use std::f64::consts::PI;

/// Published inverse of the fundamental primary system
const FUNDAMENTAL_TO_XYZ: Matrix3d = Matrix3d::new([
    [1.85995, -1.12939, 0.21990],
    [0.36119, 0.63881, 0.],
    [0., 0., 1.08906],
]);

/// Noise term of the nonlinear cone model
const NOISE: f64 = 1.;

/// CIE 1994 corresponding colours under different illuminants and illuminances.
///
/// The test illuminant is the reference white of the color being adapted.
/// Illuminances are in lux, `y_tristimulus_percentage` is the luminance
/// factor of the adapting background, 1 for the perfect reflecting diffuser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cie1994Adaptation {
    pub test_illuminance: f64,
    pub reference_illuminant: StandardIlluminant,
    pub reference_illuminance: f64,
    pub y_tristimulus_percentage: f64,
}

/// Relative chromaticity (ξ, η, ζ) of an adapting field
#[inline]
fn relative_coordinates(white: Chromaticity) -> Vector3d {
    Vector3d::new(
        (0.48105 * white.x + 0.78841 * white.y - 0.08081) / white.y,
        (-0.27200 * white.x + 1.11962 * white.y + 0.04570) / white.y,
        0.91822 * white.z() / white.y,
    )
}

#[inline]
fn beta_long(r: f64) -> f64 {
    let rp = pow(r, 0.4495);
    (6.469 + 6.362 * rp) / (6.469 + rp)
}

#[inline]
fn beta_short(b: f64) -> f64 {
    let bp = pow(b, 0.5128);
    (8.414 + 8.091 * bp) / (8.414 + bp) * 0.7844
}

/// Adapting state of one field: relative coordinates and channel exponents
struct Field {
    coordinates: Vector3d,
    exponents: Vector3d,
}

impl Field {
    fn new(white: Chromaticity, luminance_factor: f64, illuminance: f64) -> Self {
        let coordinates = relative_coordinates(white);
        let response = coordinates * (luminance_factor * illuminance / PI);
        let exponents = Vector3d::new(
            beta_long(response.v[0]),
            beta_long(response.v[1]),
            beta_short(response.v[2]),
        );
        Self {
            coordinates,
            exponents,
        }
    }
}

impl Cie1994Adaptation {
    #[inline]
    pub const fn new(
        test_illuminance: f64,
        reference_illuminant: StandardIlluminant,
        reference_illuminance: f64,
        y_tristimulus_percentage: f64,
    ) -> Self {
        Self {
            test_illuminance,
            reference_illuminant,
            reference_illuminance,
            y_tristimulus_percentage,
        }
    }
}

impl ChromaticAdaptation for Cie1994Adaptation {
    #[inline]
    fn reference_white(&self) -> StandardIlluminant {
        self.reference_illuminant
    }

    fn adapt(&self, color: &Xyz) -> Xyz {
        let y0 = self.y_tristimulus_percentage;
        let test = Field::new(
            color.reference_white().white_point,
            y0,
            self.test_illuminance,
        );
        let reference = Field::new(
            self.reference_illuminant.white_point,
            y0,
            self.reference_illuminance,
        );
        let fundamental = VON_KRIES.mul_vector(color.to_vector() * 100.);

        let scale = |xi: f64| y0 * 100. * xi + NOISE;
        let k_term = |xi: f64, exponent: f64| pow(scale(xi) / (20. * xi + NOISE), exponent);
        let k1 = k_term(test.coordinates.v[0], (2. / 3.) * test.exponents.v[0]);
        let k2 = k_term(reference.coordinates.v[0], (2. / 3.) * reference.exponents.v[0]);
        let k3 = k_term(test.coordinates.v[1], (1. / 3.) * test.exponents.v[1]);
        let k4 = k_term(reference.coordinates.v[1], (1. / 3.) * reference.exponents.v[1]);
        let k = (k1 / k2) * (k3 / k4);

        let mut corresponding = Vector3d::default();
        for i in 0..3 {
            let (test_xi, test_beta) = (test.coordinates.v[i], test.exponents.v[i]);
            let (ref_xi, ref_beta) = (reference.coordinates.v[i], reference.exponents.v[i]);
            corresponding.v[i] = scale(ref_xi)
                * pow(k, 1. / ref_beta)
                * pow((fundamental.v[i] + NOISE) / scale(test_xi), test_beta / ref_beta)
                - NOISE;
        }

        Xyz::from_vector(
            FUNDAMENTAL_TO_XYZ.mul_vector(corresponding) / 100.,
            color.opacity,
            XyzSpace::with_reference_white(self.reference_illuminant),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant::two_degree;

    #[test]
    fn incandescent_to_daylight() {
        let method = Cie1994Adaptation::new(1000., two_degree::D65, 1000., 0.2);
        let color = Xyz::with_reference_white(0.28, 0.2126, 0.0527, two_degree::A);
        let adapted = method.adapt(&color);
        assert!((adapted.x - 0.240382).abs() < 1e-5, "{adapted:?}");
        assert!((adapted.y - 0.211562).abs() < 1e-5, "{adapted:?}");
        assert!((adapted.z - 0.176438).abs() < 1e-5, "{adapted:?}");
        assert_eq!(adapted.reference_white(), two_degree::D65);
    }

    #[test]
    fn illuminance_change_only() {
        let method = Cie1994Adaptation::new(100., two_degree::D65, 1000., 0.5);
        let color = Xyz::new(0.2177, 0.1918, 0.1673).with_opacity(0.4);
        let adapted = method.adapt(&color);
        assert!((adapted.x - 0.211289).abs() < 1e-5, "{adapted:?}");
        assert!((adapted.y - 0.194298).abs() < 1e-5, "{adapted:?}");
        assert!((adapted.z - 0.194946).abs() < 1e-5, "{adapted:?}");
        assert_eq!(adapted.opacity, 0.4);
    }

    #[test]
    fn same_conditions_are_near_identity() {
        // only the rounding of the published matrices remains
        let method = Cie1994Adaptation::new(1000., two_degree::D65, 1000., 0.2);
        let color = Xyz::new(0.2177, 0.1918, 0.1673);
        let adapted = method.adapt(&color);
        assert!((adapted.x - color.x).abs() < 1e-5);
        assert!((adapted.y - color.y).abs() < 1e-5);
        assert!((adapted.z - color.z).abs() < 1e-5);
    }
}
