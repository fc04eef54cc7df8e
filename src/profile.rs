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
use crate::chromaticity::Chromaticity;
use crate::err::ChromaError;
use crate::illuminant::{StandardIlluminant, two_degree};
use crate::matrix::{Matrix3d, Vector3d};
use crate::model::ColorModel;
use crate::trc::Companding;
use std::fmt::Debug;

/// Mathematical definition of a color space
pub trait Profile: Copy + Debug + PartialEq {
    fn reference_white(&self) -> StandardIlluminant;
}

/// A component model bound to a profile.
pub trait ColorSpace: Copy + Debug + PartialEq + Default {
    type Profile: Profile;

    /// Informational description of the components
    const MODEL: ColorModel;

    fn profile(&self) -> &Self::Profile;

    #[inline]
    fn model(&self) -> ColorModel {
        Self::MODEL
    }

    #[inline]
    fn reference_white(&self) -> StandardIlluminant {
        self.profile().reference_white()
    }

    /// Space that [Color::from_xyz](crate::Color::from_xyz) projects into
    /// for an input under `reference_white`. Fixed to the default space
    /// unless the space can be rebuilt around another white.
    #[inline]
    fn for_reference_white(_reference_white: StandardIlluminant) -> Self {
        Self::default()
    }
}

/// Profile that only carries a reference white
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct XyzProfile {
    pub reference_white: StandardIlluminant,
}

impl XyzProfile {
    #[inline]
    pub const fn new(reference_white: StandardIlluminant) -> Self {
        Self { reference_white }
    }
}

impl Profile for XyzProfile {
    #[inline]
    fn reference_white(&self) -> StandardIlluminant {
        self.reference_white
    }
}

/// RGB space definition: white, primaries, companding and conversion matrices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbProfile {
    pub reference_white: StandardIlluminant,
    pub companding: Companding,
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
    /// Linear RGB into XYZ
    pub to_xyz: Matrix3d,
    /// XYZ into linear RGB
    pub to_rgb: Matrix3d,
}

const SRGB_RED: Chromaticity = Chromaticity::new(0.64, 0.33);
const SRGB_GREEN: Chromaticity = Chromaticity::new(0.30, 0.60);
const SRGB_BLUE: Chromaticity = Chromaticity::new(0.15, 0.06);

#[inline]
const fn primaries_matrix(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> Matrix3d {
    Matrix3d {
        v: [red.to_xyz().v, green.to_xyz().v, blue.to_xyz().v],
    }
    .transpose()
}

/// Scales primaries columns so that RGB (1, 1, 1) lands on the white point.
#[inline]
const fn rgb_to_xyz_const(primaries: Matrix3d, white: Vector3d) -> Matrix3d {
    let s = primaries.inverse_const().mul_vector(white);
    primaries
        .mul_row_vector::<0>(s)
        .mul_row_vector::<1>(s)
        .mul_row_vector::<2>(s)
}

#[inline]
fn rgb_to_xyz(primaries: Matrix3d, white: Vector3d) -> Option<Matrix3d> {
    let s = primaries.inverse()?.mul_vector(white);
    let mut v = primaries.mul_row_vector::<0>(s);
    v = v.mul_row_vector::<1>(s);
    v = v.mul_row_vector::<2>(s);
    Some(v)
}

impl RgbProfile {
    /// sRGB primaries and curve under D65 with matrices derived at full precision.
    pub const DEFAULT: RgbProfile = RgbProfile::derive_const(
        two_degree::D65,
        Companding::Srgb,
        SRGB_RED,
        SRGB_GREEN,
        SRGB_BLUE,
    );

    /// sRGB with the rounded matrices published in IEC 61966-2-1.
    pub const SRGB: RgbProfile = RgbProfile::with_matrices(
        two_degree::D65,
        Companding::Srgb,
        SRGB_RED,
        SRGB_GREEN,
        SRGB_BLUE,
        Matrix3d::new([
            [0.4124, 0.3576, 0.1805],
            [0.2126, 0.7152, 0.0722],
            [0.0193, 0.1192, 0.9505],
        ]),
        Matrix3d::new([
            [3.2406, -1.5372, -0.4986],
            [-0.9689, 1.8758, 0.0415],
            [0.0557, -0.2040, 1.0570],
        ]),
    );

    /// Display P3: DCI-P3 primaries, D65 white and the sRGB-like parametric curve.
    pub const DISPLAY_P3: RgbProfile = RgbProfile::derive_const(
        two_degree::D65,
        Companding::ParametricType3 {
            gamma: 2.4,
            a: 0.948,
            b: 0.052,
            c: 0.077,
            d: 0.04,
        },
        Chromaticity::new(0.680, 0.320),
        Chromaticity::new(0.265, 0.690),
        Chromaticity::new(0.150, 0.060),
    );

    const fn derive_const(
        reference_white: StandardIlluminant,
        companding: Companding,
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
    ) -> Self {
        let to_xyz = rgb_to_xyz_const(
            primaries_matrix(red, green, blue),
            reference_white.tristimulus(),
        );
        Self {
            reference_white,
            companding,
            red,
            green,
            blue,
            to_xyz,
            to_rgb: to_xyz.inverse_const(),
        }
    }

    /// Derives the conversion matrices from the primaries and white point.
    pub fn new(
        reference_white: StandardIlluminant,
        companding: Companding,
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
    ) -> Result<Self, ChromaError> {
        if reference_white.white_point.y <= 0. {
            return Err(ChromaError::InvalidWhitePoint);
        }
        if red.y == 0. || green.y == 0. || blue.y == 0. {
            return Err(ChromaError::DivisionByZero);
        }
        let to_xyz = rgb_to_xyz(
            primaries_matrix(red, green, blue),
            reference_white.tristimulus(),
        )
        .ok_or(ChromaError::SingularMatrix)?;
        let to_rgb = to_xyz.inverse().ok_or(ChromaError::SingularMatrix)?;
        Ok(Self {
            reference_white,
            companding,
            red,
            green,
            blue,
            to_xyz,
            to_rgb,
        })
    }

    /// sRGB primaries and curve under another reference white.
    pub fn with_reference_white(reference_white: StandardIlluminant) -> Result<Self, ChromaError> {
        Self::new(
            reference_white,
            Companding::Srgb,
            SRGB_RED,
            SRGB_GREEN,
            SRGB_BLUE,
        )
    }

    /// Profile with explicitly supplied matrices, no consistency checks are made.
    #[allow(clippy::too_many_arguments)]
    pub const fn with_matrices(
        reference_white: StandardIlluminant,
        companding: Companding,
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        to_xyz: Matrix3d,
        to_rgb: Matrix3d,
    ) -> Self {
        Self {
            reference_white,
            companding,
            red,
            green,
            blue,
            to_xyz,
            to_rgb,
        }
    }
}

impl Default for RgbProfile {
    fn default() -> Self {
        RgbProfile::DEFAULT
    }
}

impl Profile for RgbProfile {
    #[inline]
    fn reference_white(&self) -> StandardIlluminant {
        self.reference_white
    }
}

/// Declares a space whose profile is only a reference white.
///
/// A trailing `input_white` makes [ColorSpace::for_reference_white] keep
/// the white of the input instead of the default D65.
macro_rules! reference_space {
    (@input_white) => {
        #[inline]
        fn for_reference_white(
            reference_white: $crate::illuminant::StandardIlluminant,
        ) -> Self {
            Self::with_reference_white(reference_white)
        }
    };
    ($(#[$meta:meta])* $name:ident, $model:expr $(, $policy:ident)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Default)]
        pub struct $name {
            pub profile: $crate::profile::XyzProfile,
        }

        impl $name {
            #[inline]
            pub const fn new(profile: $crate::profile::XyzProfile) -> Self {
                Self { profile }
            }

            #[inline]
            pub const fn with_reference_white(
                reference_white: $crate::illuminant::StandardIlluminant,
            ) -> Self {
                Self {
                    profile: $crate::profile::XyzProfile::new(reference_white),
                }
            }
        }

        impl $crate::profile::ColorSpace for $name {
            type Profile = $crate::profile::XyzProfile;
            const MODEL: $crate::model::ColorModel = $model;

            #[inline]
            fn profile(&self) -> &Self::Profile {
                &self.profile
            }

            $($crate::profile::reference_space!(@$policy);)?
        }
    };
}

/// Declares a space derived from a parent space and sharing its profile.
macro_rules! alternative_space {
    ($(#[$meta:meta])* $name:ident, $parent:ty, $model:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Default)]
        pub struct $name {
            pub parent: $parent,
        }

        impl $name {
            #[inline]
            pub const fn new(parent: $parent) -> Self {
                Self { parent }
            }
        }

        impl $crate::profile::ColorSpace for $name {
            type Profile = <$parent as $crate::profile::ColorSpace>::Profile;
            const MODEL: $crate::model::ColorModel = $model;

            #[inline]
            fn profile(&self) -> &Self::Profile {
                $crate::profile::ColorSpace::profile(&self.parent)
            }

            #[inline]
            fn for_reference_white(
                reference_white: $crate::illuminant::StandardIlluminant,
            ) -> Self {
                Self::new(
                    <$parent as $crate::profile::ColorSpace>::for_reference_white(reference_white),
                )
            }
        }
    };
}

pub(crate) use {alternative_space, reference_space};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant::ten_degree;

    #[test]
    fn derived_matrices_match_published_srgb() {
        let derived = RgbProfile::DEFAULT;
        assert!(derived.to_xyz.test_equality(RgbProfile::SRGB.to_xyz, 1e-3));
        assert!(derived.to_rgb.test_equality(RgbProfile::SRGB.to_rgb, 1e-3));
        let product = derived.to_xyz.mat_mul(derived.to_rgb);
        assert!(product.test_equality(Matrix3d::IDENTITY, 1e-12));
    }

    #[test]
    fn runtime_derivation_matches_const() {
        let runtime = RgbProfile::with_reference_white(two_degree::D65).unwrap();
        assert!(runtime.to_xyz.test_equality(RgbProfile::DEFAULT.to_xyz, 1e-12));
        assert!(runtime.to_rgb.test_equality(RgbProfile::DEFAULT.to_rgb, 1e-12));
    }

    #[test]
    fn white_maps_to_unit_rgb() {
        let p3 = RgbProfile::DISPLAY_P3;
        let rgb = p3.to_rgb.mul_vector(two_degree::D65.tristimulus());
        assert!((rgb.v[0] - 1.).abs() < 1e-12);
        assert!((rgb.v[1] - 1.).abs() < 1e-12);
        assert!((rgb.v[2] - 1.).abs() < 1e-12);
        assert!((p3.to_xyz.v[0][0] - 0.486569).abs() < 1e-5);
    }

    #[test]
    fn degenerate_primaries_are_rejected() {
        let red = Chromaticity::new(0.5, 0.25);
        let result = RgbProfile::new(ten_degree::D50, Companding::Linear, red, red, red);
        assert_eq!(result, Err(ChromaError::SingularMatrix));
        let flat = Chromaticity::new(0.3, 0.);
        let result = RgbProfile::new(ten_degree::D50, Companding::Linear, flat, red, red);
        assert_eq!(result, Err(ChromaError::DivisionByZero));
    }
}
