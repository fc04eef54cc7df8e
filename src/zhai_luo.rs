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
use crate::chad::{CAT02, CAT16, ChromaticAdaptation};
use crate::illuminant::StandardIlluminant;
use crate::matrix::{Matrix3d, Vector3d};
use crate::xyz::{Xyz, XyzSpace};

const CAT02_INVERSE: Matrix3d = CAT02.inverse_const();
const CAT16_INVERSE: Matrix3d = CAT16.inverse_const();

/// Cone response basis of the Zhai-Luo model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ZhaiLuoTransform {
    Cat02,
    #[default]
    Cat16,
}

impl ZhaiLuoTransform {
    #[inline]
    pub const fn matrix(self) -> Matrix3d {
        match self {
            ZhaiLuoTransform::Cat02 => CAT02,
            ZhaiLuoTransform::Cat16 => CAT16,
        }
    }

    #[inline]
    const fn inverse(self) -> Matrix3d {
        match self {
            ZhaiLuoTransform::Cat02 => CAT02_INVERSE,
            ZhaiLuoTransform::Cat16 => CAT16_INVERSE,
        }
    }
}

/// Two-step adaptation through a baseline illuminant (Zhai & Luo 2018).
///
/// Each side is adapted towards the baseline with its own degree of
/// adaptation, the test side being the reference white of the input color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZhaiLuoAdaptation {
    pub test_degree: f64,
    pub reference_illuminant: StandardIlluminant,
    pub reference_degree: f64,
    pub baseline_illuminant: StandardIlluminant,
    pub transform: ZhaiLuoTransform,
}

impl ZhaiLuoAdaptation {
    #[inline]
    pub const fn new(
        test_degree: f64,
        reference_illuminant: StandardIlluminant,
        reference_degree: f64,
        baseline_illuminant: StandardIlluminant,
        transform: ZhaiLuoTransform,
    ) -> Self {
        Self {
            test_degree,
            reference_illuminant,
            reference_degree,
            baseline_illuminant,
            transform,
        }
    }
}

/// Per channel scaling towards the baseline, `D·(Yw/Ywo)·(Rwo/Rw) + 1 - D`
#[inline]
fn channel_scale(
    degree: f64,
    white: Vector3d,
    baseline: Vector3d,
    rgb_white: Vector3d,
    rgb_baseline: Vector3d,
) -> Vector3d {
    (rgb_baseline / rgb_white) * (degree * white.v[1] / baseline.v[1]) + (1. - degree)
}

impl ChromaticAdaptation for ZhaiLuoAdaptation {
    #[inline]
    fn reference_white(&self) -> StandardIlluminant {
        self.reference_illuminant
    }

    fn adapt(&self, color: &Xyz) -> Xyz {
        let m = self.transform.matrix();
        let test_white = color.reference_white().tristimulus();
        let reference_white = self.reference_illuminant.tristimulus();
        let baseline = self.baseline_illuminant.tristimulus();

        let rgb = m.mul_vector(color.to_vector());
        let rgb_baseline = m.mul_vector(baseline);
        let test = channel_scale(
            self.test_degree,
            test_white,
            baseline,
            m.mul_vector(test_white),
            rgb_baseline,
        );
        let reference = channel_scale(
            self.reference_degree,
            reference_white,
            baseline,
            m.mul_vector(reference_white),
            rgb_baseline,
        );

        Xyz::from_vector(
            self.transform.inverse().mul_vector(rgb * (test / reference)),
            color.opacity,
            XyzSpace::with_reference_white(self.reference_illuminant),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromaticity::Chromaticity;
    use crate::illuminant::two_degree;

    fn illuminant(x: f64, y: f64, z: f64) -> StandardIlluminant {
        StandardIlluminant::custom(Chromaticity::from_tristimulus(x, y, z).unwrap(), 2.)
    }

    fn first(transform: ZhaiLuoTransform) -> Xyz {
        let method = ZhaiLuoAdaptation::new(
            0.9407,
            two_degree::D65,
            0.98,
            illuminant(1., 1., 1.),
            transform,
        );
        let color = Xyz::with_reference_white(0.489, 0.4362, 0.0625, two_degree::A);
        let adapted = method.adapt(&color);
        assert_eq!(adapted.reference_white(), two_degree::D65);
        adapted
    }

    fn second(transform: ZhaiLuoTransform) -> Xyz {
        let reference = illuminant(1.05432, 1., 1.37392);
        let method = ZhaiLuoAdaptation::new(
            0.6709,
            reference,
            0.5331,
            illuminant(0.97079, 1., 1.41798),
            transform,
        );
        let color = Xyz::with_reference_white(
            0.52034,
            0.58824,
            0.23703,
            illuminant(0.92288, 1., 0.38775),
        );
        let adapted = method.adapt(&color);
        assert_eq!(adapted.reference_white(), reference);
        adapted
    }

    #[test]
    fn first_example_cat02() {
        let adapted = first(ZhaiLuoTransform::Cat02);
        assert!((adapted.x - 0.39186).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.y - 0.42155).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.z - 0.19237).abs() < 1e-4, "{adapted:?}");
    }

    #[test]
    fn first_example_cat16() {
        let adapted = first(ZhaiLuoTransform::Cat16);
        assert!((adapted.x - 0.40374).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.y - 0.43694).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.z - 0.20517).abs() < 1e-4, "{adapted:?}");
    }

    #[test]
    fn second_example_cat02() {
        let adapted = second(ZhaiLuoTransform::Cat02);
        assert!((adapted.x - 0.57032).abs() < 1e-5, "{adapted:?}");
        assert!((adapted.y - 0.58934).abs() < 1e-5, "{adapted:?}");
        assert!((adapted.z - 0.64763).abs() < 1e-5, "{adapted:?}");
    }

    #[test]
    fn second_example_cat16() {
        let adapted = second(ZhaiLuoTransform::Cat16);
        assert!((adapted.x - 0.567713).abs() < 1e-5, "{adapted:?}");
        assert!((adapted.y - 0.588132).abs() < 1e-5, "{adapted:?}");
        assert!((adapted.z - 0.646692).abs() < 1e-5, "{adapted:?}");
    }

    #[test]
    fn full_adaptation_matches_von_kries_scaling() {
        // D = 1 on both sides reduces to a diagonal scaling between whites
        let method = ZhaiLuoAdaptation::new(
            1.,
            two_degree::D65,
            1.,
            two_degree::E,
            ZhaiLuoTransform::Cat16,
        );
        let color = Xyz::with_reference_white(0.3, 0.4, 0.2, two_degree::D50).with_opacity(0.9);
        let adapted = method.adapt(&color);
        let m = CAT16;
        let gain = m.mul_vector(two_degree::D65.tristimulus()) / m.mul_vector(two_degree::D50.tristimulus());
        let expected = CAT16_INVERSE.mul_vector(m.mul_vector(color.to_vector()) * gain);
        assert!((adapted.x - expected.v[0]).abs() < 1e-12);
        assert!((adapted.y - expected.v[1]).abs() < 1e-12);
        assert!((adapted.z - expected.v[2]).abs() < 1e-12);
        assert_eq!(adapted.opacity, 0.9);
    }

    #[test]
    fn same_white_and_degree_is_identity() {
        for transform in [ZhaiLuoTransform::Cat02, ZhaiLuoTransform::Cat16] {
            let method =
                ZhaiLuoAdaptation::new(0.7, two_degree::F2, 0.7, two_degree::D65, transform);
            let color = Xyz::with_reference_white(0.3, 0.25, 0.1, two_degree::F2);
            let adapted = method.adapt(&color);
            assert!((adapted.x - color.x).abs() < 1e-12, "{transform:?}");
            assert!((adapted.y - color.y).abs() < 1e-12, "{transform:?}");
            assert!((adapted.z - color.z).abs() < 1e-12, "{transform:?}");
        }
    }
}
