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
use crate::err::ChromaError;
use crate::illuminant::StandardIlluminant;
use crate::matrix::{Matrix3d, Vector3d};
use crate::xyz::{Xyz, XyzSpace};

/// Re-expresses an XYZ color as it appears under another illuminant.
///
/// The source illuminant is read from the color's own space; the target is
/// part of the strategy configuration and is attached to the result.
pub trait ChromaticAdaptation {
    /// Illuminant of the adapted colors
    fn reference_white(&self) -> StandardIlluminant;

    fn adapt(&self, color: &Xyz) -> Xyz;
}

/// Cone response basis validated to be invertible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CustomTransform {
    matrix: Matrix3d,
    inverse: Matrix3d,
}

impl CustomTransform {
    /// Fails with [ChromaError::SingularMatrix] when `matrix` has no inverse,
    /// the linear adaptation could not return to XYZ otherwise.
    pub fn new(matrix: Matrix3d) -> Result<Self, ChromaError> {
        let inverse = matrix.inverse().ok_or(ChromaError::SingularMatrix)?;
        Ok(Self { matrix, inverse })
    }

    #[inline]
    pub fn matrix(&self) -> Matrix3d {
        self.matrix
    }
}

/// Cone response basis used by the von Kries family of transforms.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum AdaptationTransform {
    /// Scaling directly in XYZ
    Xyz,
    VonKries,
    #[default]
    Bradford,
    Sharp,
    HuntPointerEstevez,
    Thornton,
    CmcCat97,
    CmcCat2000,
    Cat02,
    /// CAT02 with the Brill & Süsstrunk correction
    Cat02Corrected,
    Cat16,
    BiancoSchettini,
    /// Bianco & Schettini with positivity constraint
    BiancoSchettiniPositive,
    Custom(CustomTransform),
}

pub(crate) const VON_KRIES: Matrix3d = Matrix3d::new([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.0, 0.0, 0.91822],
]);

pub(crate) const BRADFORD: Matrix3d = Matrix3d::new([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

pub(crate) const CMCCAT2000: Matrix3d = Matrix3d::new([
    [0.7982, 0.3389, -0.1371],
    [-0.5918, 1.5512, 0.0406],
    [0.0008, 0.0239, 0.9753],
]);

pub(crate) const CAT02: Matrix3d = Matrix3d::new([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

pub(crate) const CAT16: Matrix3d = Matrix3d::new([
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
]);

impl AdaptationTransform {
    /// Validates a caller supplied basis.
    ///
    /// Unlike the built in bases the matrix is checked up front: a singular
    /// basis is rejected with [ChromaError::SingularMatrix] rather than
    /// producing non-finite colors during adaptation.
    pub fn custom(matrix: Matrix3d) -> Result<Self, ChromaError> {
        Ok(AdaptationTransform::Custom(CustomTransform::new(matrix)?))
    }

    /// XYZ into cone response matrix
    pub const fn matrix(&self) -> Matrix3d {
        match self {
            AdaptationTransform::Xyz => Matrix3d::IDENTITY,
            AdaptationTransform::VonKries => VON_KRIES,
            AdaptationTransform::Bradford => BRADFORD,
            AdaptationTransform::Sharp => Matrix3d::new([
                [1.2694, 0.0988, -0.1706],
                [-0.8364, 1.8006, 0.0357],
                [0.0297, -0.0315, 1.0018],
            ]),
            AdaptationTransform::HuntPointerEstevez => Matrix3d::new([
                [0.3897, 0.6890, -0.0787],
                [-0.2298, 1.1834, 0.0464],
                [0.0, 0.0, 1.0],
            ]),
            AdaptationTransform::Thornton => Matrix3d::new([
                [1.8818, 0.4094, 0.3482],
                [-0.8130, 1.6431, 0.1190],
                [0.0198, -0.0405, 0.9382],
            ]),
            AdaptationTransform::CmcCat97 => Matrix3d::new([
                [0.8951, -0.7502, 0.0389],
                [0.2664, 1.7135, 0.0685],
                [-0.1614, 0.0367, 1.0296],
            ]),
            AdaptationTransform::CmcCat2000 => CMCCAT2000,
            AdaptationTransform::Cat02 => CAT02,
            AdaptationTransform::Cat02Corrected => Matrix3d::new([
                [0.7328, 0.4296, -0.1624],
                [-0.7036, 1.6975, 0.0061],
                [0.0, 0.0, 1.0],
            ]),
            AdaptationTransform::Cat16 => CAT16,
            AdaptationTransform::BiancoSchettini => Matrix3d::new([
                [0.8752, 0.2787, -0.1539],
                [-0.8904, 1.8709, 0.0195],
                [-0.0061, 0.0162, 0.9899],
            ]),
            AdaptationTransform::BiancoSchettiniPositive => Matrix3d::new([
                [0.6489, 0.3915, -0.0404],
                [-0.3775, 1.3055, 0.0720],
                [-0.0271, 0.0888, 0.9383],
            ]),
            AdaptationTransform::Custom(custom) => custom.matrix,
        }
    }

    /// Cone response into XYZ matrix
    #[inline]
    pub fn inverse(&self) -> Option<Matrix3d> {
        match self {
            AdaptationTransform::Custom(custom) => Some(custom.inverse),
            _ => self.matrix().inverse(),
        }
    }
}

#[inline]
fn compute_chromatic_adaption(
    source_white_point: Vector3d,
    dest_white_point: Vector3d,
    transform: AdaptationTransform,
) -> Option<Matrix3d> {
    let chad = transform.matrix();
    let cone_source_rgb = chad.mul_vector(source_white_point);
    let cone_dest_rgb = chad.mul_vector(dest_white_point);

    if cone_source_rgb.v.contains(&0.) {
        return None;
    }

    let cone = Matrix3d::diagonal(cone_dest_rgb / cone_source_rgb);

    let chad_inv = transform.inverse()?;

    let p0 = cone.mat_mul(chad);
    Some(chad_inv.mat_mul(p0))
}

/// Von Kries style adaptation: scaling in a cone response basis.
///
/// ```
/// use moxchroma::{AdaptationTransform, ChromaticAdaptation, LinearAdaptation, Xyz, two_degree};
///
/// let color = Xyz::with_reference_white(0.2248, 0.2274, 0.0854, two_degree::A);
/// let method = LinearAdaptation::new(AdaptationTransform::Bradford, two_degree::D65);
/// let adapted = method.adapt(&color);
/// assert!((adapted.z - 0.2599).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearAdaptation {
    pub transform: AdaptationTransform,
    pub reference_white: StandardIlluminant,
}

impl LinearAdaptation {
    #[inline]
    pub const fn new(transform: AdaptationTransform, reference_white: StandardIlluminant) -> Self {
        Self {
            transform,
            reference_white,
        }
    }

    /// Bradford adaptation into `reference_white`
    #[inline]
    pub const fn bradford(reference_white: StandardIlluminant) -> Self {
        Self::new(AdaptationTransform::Bradford, reference_white)
    }

    /// Matrix adapting XYZ under `source` into XYZ under the reference white.
    ///
    /// `None` when a cone response of the source white is zero
    /// or the basis cannot be inverted.
    pub fn adaptation_matrix(&self, source: StandardIlluminant) -> Option<Matrix3d> {
        if source.white_point.y == 0. || self.reference_white.white_point.y == 0. {
            return None;
        }
        compute_chromatic_adaption(
            source.tristimulus(),
            self.reference_white.tristimulus(),
            self.transform,
        )
    }
}

impl ChromaticAdaptation for LinearAdaptation {
    #[inline]
    fn reference_white(&self) -> StandardIlluminant {
        self.reference_white
    }

    fn adapt(&self, color: &Xyz) -> Xyz {
        let adapted = match self.adaptation_matrix(color.reference_white()) {
            Some(matrix) => matrix.mul_vector(color.to_vector()),
            None => {
                tracing::warn!(
                    "no {:?} adaptation from {:?} to {:?}",
                    self.transform,
                    color.reference_white().white_point,
                    self.reference_white.white_point
                );
                Vector3d::from(f64::NAN)
            }
        };
        Xyz::from_vector(
            adapted,
            color.opacity,
            XyzSpace::with_reference_white(self.reference_white),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant::{ten_degree, two_degree};

    const ALL_TRANSFORMS: [AdaptationTransform; 13] = [
        AdaptationTransform::Xyz,
        AdaptationTransform::VonKries,
        AdaptationTransform::Bradford,
        AdaptationTransform::Sharp,
        AdaptationTransform::HuntPointerEstevez,
        AdaptationTransform::Thornton,
        AdaptationTransform::CmcCat97,
        AdaptationTransform::CmcCat2000,
        AdaptationTransform::Cat02,
        AdaptationTransform::Cat02Corrected,
        AdaptationTransform::Cat16,
        AdaptationTransform::BiancoSchettini,
        AdaptationTransform::BiancoSchettiniPositive,
    ];

    #[test]
    fn bradford_a_to_d65() {
        let color = Xyz::with_reference_white(0.2248, 0.2274, 0.0854, two_degree::A);
        let adapted = LinearAdaptation::bradford(two_degree::D65).adapt(&color);
        assert!((adapted.x - 0.1967).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.y - 0.2313).abs() < 1e-4, "{adapted:?}");
        assert!((adapted.z - 0.2599).abs() < 1e-4, "{adapted:?}");
        assert_eq!(adapted.reference_white(), two_degree::D65);

        let matrix = LinearAdaptation::bradford(two_degree::D65)
            .adaptation_matrix(two_degree::A)
            .unwrap();
        let expected = Matrix3d::new([
            [0.8446795, -0.1179355, 0.3948941],
            [-0.1366408, 1.1041237, 0.1291981],
            [0.0798672, -0.1349315, 3.1928830],
        ]);
        assert!(matrix.test_equality(expected, 1e-6));
    }

    #[test]
    fn every_transform_round_trips() {
        let color = Xyz::with_reference_white(0.489, 0.4362, 0.0625, two_degree::A)
            .with_opacity(0.5);
        for transform in ALL_TRANSFORMS {
            assert!(transform.inverse().is_some(), "{transform:?}");
            let forward = LinearAdaptation::new(transform, ten_degree::D65).adapt(&color);
            let back = LinearAdaptation::new(transform, two_degree::A).adapt(&forward);
            assert!((back.x - color.x).abs() < 1e-9, "{transform:?}");
            assert!((back.y - color.y).abs() < 1e-9, "{transform:?}");
            assert!((back.z - color.z).abs() < 1e-9, "{transform:?}");
            assert_eq!(back.opacity, 0.5);
        }
    }

    #[test]
    fn same_white_is_identity() {
        let color = Xyz::with_reference_white(0.3, 0.4, 0.5, two_degree::F7);
        for transform in ALL_TRANSFORMS {
            let adapted = LinearAdaptation::new(transform, two_degree::F7).adapt(&color);
            assert!((adapted.x - 0.3).abs() < 1e-12);
            assert!((adapted.y - 0.4).abs() < 1e-12);
            assert!((adapted.z - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn singular_custom_basis_is_rejected() {
        let singular = Matrix3d::new([[1., 0., 0.], [0., 1., 0.], [1., 1., 0.]]);
        assert_eq!(
            AdaptationTransform::custom(singular),
            Err(ChromaError::SingularMatrix)
        );
        let custom = AdaptationTransform::custom(BRADFORD).unwrap();
        let color = Xyz::with_reference_white(0.2248, 0.2274, 0.0854, two_degree::A);
        let a = LinearAdaptation::new(custom, two_degree::D65).adapt(&color);
        let b = LinearAdaptation::bradford(two_degree::D65).adapt(&color);
        assert!((a.x - b.x).abs() < 1e-12);
        assert!((a.z - b.z).abs() < 1e-12);
    }

    #[test]
    fn zero_cone_response_propagates_nan() {
        let flat = AdaptationTransform::custom(Matrix3d::new([
            [1., -1., 0.],
            [0., 1., 0.],
            [0., 0., 1.],
        ]))
        .unwrap();
        let color = Xyz::with_reference_white(0.2, 0.2, 0.2, two_degree::E);
        let adapted = LinearAdaptation::new(flat, two_degree::D65).adapt(&color);
        assert!(adapted.x.is_nan());
        assert_eq!(adapted.reference_white(), two_degree::D65);
    }
}
