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
use crate::illuminant::StandardIlluminant;
use crate::matrix::Vector3d;
use crate::model::{ColorModel, RGB_MODEL};
use crate::profile::{ColorSpace, RgbProfile};
use crate::xyz::{Xyz, XyzSpace};

/// RGB space defined by an [RgbProfile]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RgbSpace {
    pub profile: RgbProfile,
}

impl RgbSpace {
    /// sRGB primaries and curve under D65, matrices derived from the primaries
    pub const DEFAULT: RgbSpace = RgbSpace::new(RgbProfile::DEFAULT);
    pub const SRGB: RgbSpace = RgbSpace::new(RgbProfile::SRGB);
    pub const DISPLAY_P3: RgbSpace = RgbSpace::new(RgbProfile::DISPLAY_P3);

    #[inline]
    pub const fn new(profile: RgbProfile) -> Self {
        Self { profile }
    }
}

impl ColorSpace for RgbSpace {
    type Profile = RgbProfile;
    const MODEL: ColorModel = RGB_MODEL;

    #[inline]
    fn profile(&self) -> &RgbProfile {
        &self.profile
    }

    #[inline]
    fn reference_white(&self) -> StandardIlluminant {
        self.profile.reference_white
    }

    /// sRGB primaries and curve under `reference_white`.
    fn for_reference_white(reference_white: StandardIlluminant) -> Self {
        if reference_white == RgbSpace::DEFAULT.reference_white() {
            return RgbSpace::DEFAULT;
        }
        match RgbProfile::with_reference_white(reference_white) {
            Ok(profile) => RgbSpace::new(profile),
            Err(err) => {
                tracing::debug!("no sRGB profile under {:?}: {err}", reference_white.white_point);
                RgbSpace::DEFAULT
            }
        }
    }
}

/// Companded RGB color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub opacity: f64,
    pub space: RgbSpace,
}

impl Rgb {
    /// Opaque color in [RgbSpace::DEFAULT]
    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self::new_in(red, green, blue, RgbSpace::DEFAULT)
    }

    #[inline]
    pub const fn new_in(red: f64, green: f64, blue: f64, space: RgbSpace) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.,
            space,
        }
    }

    #[inline]
    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// Components with the transfer function removed
    #[inline]
    pub fn to_linear(&self) -> Vector3d {
        let companding = self.space.profile.companding;
        Vector3d::new(self.red, self.green, self.blue).map(|v| companding.inverse_compand(v))
    }

    #[inline]
    pub(crate) fn max_min(&self) -> (f64, f64) {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        (max, min)
    }
}

impl Color for Rgb {
    type Space = RgbSpace;

    #[inline]
    fn space(&self) -> &RgbSpace {
        &self.space
    }

    #[inline]
    fn opacity(&self) -> f64 {
        self.opacity
    }

    #[inline]
    fn components(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    fn to_xyz(&self) -> Option<Xyz> {
        let xyz = self.space.profile.to_xyz.mul_vector(self.to_linear());
        Some(Xyz::from_vector(
            xyz,
            self.opacity,
            XyzSpace::with_reference_white(self.space.profile.reference_white),
        ))
    }

    fn from_adapted_xyz(xyz: Xyz, space: RgbSpace) -> Option<Self> {
        let companding = space.profile.companding;
        let rgb = space
            .profile
            .to_rgb
            .mul_vector(xyz.to_vector())
            .map(|v| companding.compand(v));
        Some(Rgb {
            red: rgb.v[0],
            green: rgb.v[1],
            blue: rgb.v[2],
            opacity: xyz.opacity,
            space,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant::two_degree;
    use rand::Rng;

    #[test]
    fn from_xyz_default_profile() {
        let xyz = Xyz::new(0.20654008, 0.12197225, 0.05136952);
        let rgb = Rgb::from_xyz(xyz).unwrap();
        assert!((rgb.red - 0.705780).abs() < 1e-5, "{rgb:?}");
        assert!((rgb.green - 0.192321).abs() < 1e-5, "{rgb:?}");
        assert!((rgb.blue - 0.223524).abs() < 1e-5, "{rgb:?}");

        let back = rgb.to_xyz().unwrap();
        assert!((back.x - xyz.x).abs() < 1e-9);
        assert!((back.y - xyz.y).abs() < 1e-9);
        assert!((back.z - xyz.z).abs() < 1e-9);
    }

    #[test]
    fn zero_is_black() {
        let rgb = Rgb::from_xyz(Xyz::new(0., 0., 0.)).unwrap();
        assert_eq!(rgb.components(), [0., 0., 0.]);
    }

    #[test]
    fn white_is_white_in_every_profile() {
        for space in [RgbSpace::DEFAULT, RgbSpace::DISPLAY_P3] {
            let white = Xyz::new(
                two_degree::D65.tristimulus().v[0],
                1.,
                two_degree::D65.tristimulus().v[2],
            );
            let rgb = Rgb::from_xyz_in(white, space).unwrap();
            for c in rgb.components() {
                assert!((c - 1.).abs() < 1e-9, "{rgb:?}");
            }
        }
    }

    #[test]
    fn adapts_before_projection() {
        let d50 = Xyz::with_reference_white(0.3, 0.3, 0.2, two_degree::D50);
        let direct = Rgb::from_xyz_in(d50, RgbSpace::DEFAULT).unwrap();
        let manual = Rgb::from_xyz(d50.adapt(two_degree::D65)).unwrap();
        assert_eq!(direct, manual);
    }

    #[test]
    fn from_xyz_keeps_input_white() {
        let d50 = Xyz::with_reference_white(0.3, 0.3, 0.2, two_degree::D50);
        let rgb = Rgb::from_xyz(d50).unwrap();
        assert_eq!(rgb.space().reference_white(), two_degree::D50);
        let back = rgb.to_xyz().unwrap();
        assert_eq!(back.reference_white(), two_degree::D50);
        assert!((back.x - 0.3).abs() < 1e-12);
        assert!((back.y - 0.3).abs() < 1e-12);
        assert!((back.z - 0.2).abs() < 1e-12);

        let white = Rgb::from_xyz(Xyz::from_vector(
            two_degree::D50.tristimulus(),
            1.,
            XyzSpace::with_reference_white(two_degree::D50),
        ))
        .unwrap();
        for c in white.components() {
            assert!((c - 1.).abs() < 1e-9, "{white:?}");
        }
        assert_eq!(Rgb::from_xyz(Xyz::new(0.2, 0.3, 0.4)).unwrap().space, RgbSpace::DEFAULT);
    }

    #[test]
    fn random_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let rgb = Rgb::new(
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
            );
            let converted = Rgb::from_xyz(rgb.to_xyz().unwrap()).unwrap();
            assert!((converted.red - rgb.red).abs() < 1e-9);
            assert!((converted.green - rgb.green).abs() < 1e-9);
            assert!((converted.blue - rgb.blue).abs() < 1e-9);
        }
    }

    #[test]
    fn p3_is_wider_than_srgb() {
        let red = Rgb::new_in(1., 0., 0., RgbSpace::DISPLAY_P3);
        let srgb: Rgb = red.convert(RgbSpace::DEFAULT).unwrap();
        assert!(srgb.red > 1.);
        assert!(srgb.green < 0.);
    }
}
