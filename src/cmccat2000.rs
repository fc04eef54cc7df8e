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
use crate::chad::{CMCCAT2000, ChromaticAdaptation};
use crate::illuminant::StandardIlluminant;
use crate::math::{log10, m_clamp};
use crate::matrix::Matrix3d;
use crate::xyz::{Xyz, XyzSpace};

const CMCCAT2000_INVERSE: Matrix3d = CMCCAT2000.inverse_const();

/// Surround of the viewed samples
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewingCondition {
    #[default]
    Average,
    Dim,
    Dark,
}

impl ViewingCondition {
    /// Scale of the degree of adaptation, `F`
    #[inline]
    pub const fn factor(self) -> f64 {
        match self {
            ViewingCondition::Average => 1.,
            ViewingCondition::Dim | ViewingCondition::Dark => 0.8,
        }
    }
}

/// CMCCAT2000 (Li, Luo, Rigg, Hunt 2002), incomplete adaptation driven by the
/// luminances of both adapting fields in cd/m².
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CmcCat2000Adaptation {
    pub test_illuminance: f64,
    pub reference_illuminant: StandardIlluminant,
    pub reference_illuminance: f64,
    pub viewing_condition: ViewingCondition,
}

impl CmcCat2000Adaptation {
    #[inline]
    pub const fn new(
        test_illuminance: f64,
        reference_illuminant: StandardIlluminant,
        reference_illuminance: f64,
        viewing_condition: ViewingCondition,
    ) -> Self {
        Self {
            test_illuminance,
            reference_illuminant,
            reference_illuminance,
            viewing_condition,
        }
    }

    /// Degree of adaptation `D`, clamped to `[0, 1]`.
    pub fn degree_of_adaptation(&self) -> f64 {
        let l1 = self.test_illuminance;
        let l2 = self.reference_illuminance;
        let d = self.viewing_condition.factor()
            * (0.08 * log10(0.5 * (l1 + l2)) + 0.76 - 0.45 * (l1 - l2) / (l1 + l2));
        let clamped = m_clamp(d, 0., 1.);
        if clamped != d {
            tracing::debug!("degree of adaptation {d} clamped to {clamped}");
        }
        clamped
    }
}

impl ChromaticAdaptation for CmcCat2000Adaptation {
    #[inline]
    fn reference_white(&self) -> StandardIlluminant {
        self.reference_illuminant
    }

    fn adapt(&self, color: &Xyz) -> Xyz {
        let test_white = color.reference_white().white_point.to_tristimulus(100.);
        let reference_white = self.reference_illuminant.white_point.to_tristimulus(100.);

        let rgb = CMCCAT2000.mul_vector(color.to_vector() * 100.);
        let rgb_w = CMCCAT2000.mul_vector(test_white);
        let rgb_wr = CMCCAT2000.mul_vector(reference_white);

        let d = self.degree_of_adaptation();
        let alpha = d * test_white.v[1] / reference_white.v[1];
        let gain = (rgb_wr / rgb_w) * alpha + (1. - d);

        Xyz::from_vector(
            CMCCAT2000_INVERSE.mul_vector(rgb * gain) / 100.,
            color.opacity,
            XyzSpace::with_reference_white(self.reference_illuminant),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant::{ten_degree, two_degree};

    fn sample() -> Xyz {
        Xyz::with_reference_white(0.2248, 0.2274, 0.0854, ten_degree::A)
    }

    #[test]
    fn average_surround() {
        let method =
            CmcCat2000Adaptation::new(200., ten_degree::D65, 200., ViewingCondition::Average);
        assert!((method.degree_of_adaptation() - 0.94408).abs() < 1e-5);
        let adapted = method.adapt(&sample());
        assert!((adapted.x - 0.1953).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.y - 0.2307).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.z - 0.2497).abs() < 1e-4, "{adapted:?}");
        assert_eq!(adapted.reference_white(), ten_degree::D65);
    }

    #[test]
    fn dim_and_dark_agree() {
        let dim = CmcCat2000Adaptation::new(200., ten_degree::D65, 200., ViewingCondition::Dim);
        let dark = CmcCat2000Adaptation {
            viewing_condition: ViewingCondition::Dark,
            ..dim
        };
        assert!((dim.degree_of_adaptation() - 0.75527).abs() < 1e-5);
        let adapted = dim.adapt(&sample().with_opacity(0.6));
        assert!((adapted.x - 0.2011).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.y - 0.2300).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.z - 0.2168).abs() < 1e-4, "{adapted:?}");
        assert_eq!(adapted.opacity, 0.6);
        assert_eq!(dark.adapt(&sample().with_opacity(0.6)), adapted);
    }

    #[test]
    fn degree_is_clamped() {
        let bright = CmcCat2000Adaptation::new(1., two_degree::D65, 100000., ViewingCondition::Average);
        assert_eq!(bright.degree_of_adaptation(), 1.);
        let reversed =
            CmcCat2000Adaptation::new(100000., two_degree::D65, 1., ViewingCondition::Average);
        assert!((reversed.degree_of_adaptation() - 0.6859).abs() < 1e-4);
        let faint = CmcCat2000Adaptation::new(0.0001, two_degree::D65, 0., ViewingCondition::Average);
        assert_eq!(faint.degree_of_adaptation(), 0.);
    }

    #[test]
    fn no_adaptation_keeps_values() {
        let faint = CmcCat2000Adaptation::new(0.0001, two_degree::D65, 0., ViewingCondition::Average);
        let color = Xyz::with_reference_white(0.3, 0.2, 0.1, two_degree::A);
        let adapted = faint.adapt(&color);
        assert!((adapted.x - 0.3).abs() < 1e-12);
        assert!((adapted.y - 0.2).abs() < 1e-12);
        assert!((adapted.z - 0.1).abs() < 1e-12);
        assert_eq!(adapted.reference_white(), two_degree::D65);
    }

    #[test]
    fn same_white_is_identity() {
        let method =
            CmcCat2000Adaptation::new(50., ten_degree::D65, 1000., ViewingCondition::Dim);
        let color = Xyz::with_reference_white(0.2248, 0.2274, 0.0854, ten_degree::D65);
        let adapted = method.adapt(&color);
        assert!((adapted.x - color.x).abs() < 1e-12);
        assert!((adapted.y - color.y).abs() < 1e-12);
        assert!((adapted.z - color.z).abs() < 1e-12);
    }
}
