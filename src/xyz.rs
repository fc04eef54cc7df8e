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
use crate::chad::{ChromaticAdaptation, LinearAdaptation};
use crate::color::Color;
use crate::illuminant::{StandardIlluminant, two_degree};
use crate::matrix::Vector3d;
use crate::model::XYZ_MODEL;
use crate::profile::{XyzProfile, reference_space};

reference_space!(
    /// CIE XYZ space defined by its reference white
    XyzSpace,
    XYZ_MODEL,
    input_white
);

/// CIE XYZ tristimulus color, the anchor every other color converts through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub opacity: f64,
    pub space: XyzSpace,
}

impl Xyz {
    /// Opaque color under D65
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_reference_white(x, y, z, two_degree::D65)
    }

    #[inline]
    pub const fn with_reference_white(
        x: f64,
        y: f64,
        z: f64,
        reference_white: StandardIlluminant,
    ) -> Self {
        Self {
            x,
            y,
            z,
            opacity: 1.,
            space: XyzSpace {
                profile: XyzProfile { reference_white },
            },
        }
    }

    #[inline]
    pub const fn from_vector(v: Vector3d, opacity: f64, space: XyzSpace) -> Self {
        Self {
            x: v.v[0],
            y: v.v[1],
            z: v.v[2],
            opacity,
            space,
        }
    }

    #[inline]
    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    #[inline]
    pub const fn to_vector(&self) -> Vector3d {
        Vector3d {
            v: [self.x, self.y, self.z],
        }
    }

    #[inline]
    pub const fn reference_white(&self) -> StandardIlluminant {
        self.space.profile.reference_white
    }

    /// Adapts into `reference_white` with linear Bradford, no-op for the same white.
    #[inline]
    pub fn adapt(&self, reference_white: StandardIlluminant) -> Xyz {
        if self.reference_white() == reference_white {
            return *self;
        }
        LinearAdaptation::bradford(reference_white).adapt(self)
    }

    #[inline]
    pub fn adapt_using<A: ChromaticAdaptation + ?Sized>(&self, method: &A) -> Xyz {
        method.adapt(self)
    }
}

impl Color for Xyz {
    type Space = XyzSpace;

    #[inline]
    fn space(&self) -> &XyzSpace {
        &self.space
    }

    #[inline]
    fn opacity(&self) -> f64 {
        self.opacity
    }

    #[inline]
    fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    fn to_xyz(&self) -> Option<Xyz> {
        Some(*self)
    }

    #[inline]
    fn from_adapted_xyz(xyz: Xyz, space: XyzSpace) -> Option<Self> {
        Some(Xyz { space, ..xyz })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant::ten_degree;
    use crate::profile::ColorSpace;

    #[test]
    fn adapts_d50_to_d65() {
        let color = Xyz::with_reference_white(0.11627, 0.07261, 0.23256, two_degree::D50);
        let adapted = Xyz::from_xyz_in(color, XyzSpace::default()).unwrap();
        assert!((adapted.x - 0.12413).abs() < 1e-3);
        assert!((adapted.y - 0.07493).abs() < 1e-3);
        assert!((adapted.z - 0.30933).abs() < 1e-3);
        assert_eq!(adapted.reference_white(), two_degree::D65);
        assert_eq!(adapted, color.adapt(two_degree::D65));
    }

    #[test]
    fn same_white_is_untouched() {
        let color = Xyz::new(0.2, 0.3, 0.4).with_opacity(0.25);
        assert_eq!(color.adapt(two_degree::D65), color);
        let converted: Xyz = color.convert(XyzSpace::default()).unwrap();
        assert_eq!(converted, color);
    }

    #[test]
    fn space_carries_model_and_white() {
        let space = XyzSpace::with_reference_white(ten_degree::D50);
        assert_eq!(space.model().name, "XYZ");
        assert_eq!(space.reference_white(), ten_degree::D50);
        assert_ne!(space, XyzSpace::default());
    }

    #[test]
    fn round_trip_through_other_white() {
        let color = Xyz::with_reference_white(0.35, 0.3, 0.12, two_degree::F11);
        let back = color.adapt(two_degree::D50).adapt(two_degree::F11);
        assert!((back.x - color.x).abs() < 1e-12);
        assert!((back.y - color.y).abs() < 1e-12);
        assert!((back.z - color.z).abs() < 1e-12);
    }
}
