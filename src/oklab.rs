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
use crate::math::cbrt;
use crate::matrix::{Matrix3d, Vector3d};
use crate::model::OKLAB_MODEL;
use crate::profile::reference_space;
use crate::xyz::{Xyz, XyzSpace};

reference_space!(
    /// Ottosson's Oklab, defined for a D65 white
    OkLabSpace,
    OKLAB_MODEL
);

/// Oklab color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OkLab {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
    pub opacity: f64,
    pub space: OkLabSpace,
}

const XYZ_TO_LMS: Matrix3d = Matrix3d::new([
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
]);
const LMS_TO_XYZ: Matrix3d = XYZ_TO_LMS.inverse_const();

const LMS_TO_LAB: Matrix3d = Matrix3d::new([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);
const LAB_TO_LMS: Matrix3d = LMS_TO_LAB.inverse_const();

impl OkLab {
    #[inline]
    pub fn new(lightness: f64, a: f64, b: f64) -> Self {
        Self {
            lightness,
            a,
            b,
            opacity: 1.,
            space: OkLabSpace::default(),
        }
    }

    #[inline]
    pub fn euclidean_distance(&self, other: Self) -> f64 {
        let dl = self.lightness - other.lightness;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    #[inline]
    pub fn taxicab_distance(&self, other: Self) -> f64 {
        let dl = self.lightness - other.lightness;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl.abs() + da.abs() + db.abs()
    }
}

impl Color for OkLab {
    type Space = OkLabSpace;

    #[inline]
    fn space(&self) -> &OkLabSpace {
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

    #[inline]
    fn to_xyz(&self) -> Option<Xyz> {
        let lms = LAB_TO_LMS
            .mul_vector(Vector3d::new(self.lightness, self.a, self.b))
            .map(|v| v * v * v);
        Some(Xyz::from_vector(
            LMS_TO_XYZ.mul_vector(lms),
            self.opacity,
            XyzSpace::new(self.space.profile),
        ))
    }

    #[inline]
    fn from_adapted_xyz(xyz: Xyz, space: OkLabSpace) -> Option<Self> {
        let lms = XYZ_TO_LMS.mul_vector(xyz.to_vector()).map(cbrt);
        let [lightness, a, b] = LMS_TO_LAB.mul_vector(lms).v;
        Some(OkLab {
            lightness,
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
    use rand::Rng;

    #[test]
    fn white_is_neutral() {
        let lab = OkLab::from_xyz(Xyz::new(0.950, 1.000, 1.089)).unwrap();
        assert!((lab.lightness - 1.).abs() < 1e-3, "{lab:?}");
        assert!(lab.a.abs() < 1e-3, "{lab:?}");
        assert!(lab.b.abs() < 1e-3, "{lab:?}");
    }

    #[test]
    fn unit_axes() {
        let x = OkLab::from_xyz(Xyz::new(1., 0., 0.)).unwrap();
        assert!((x.lightness - 0.450).abs() < 1e-3, "{x:?}");
        assert!((x.a - 1.236).abs() < 1e-3, "{x:?}");
        assert!((x.b + 0.019).abs() < 1e-3, "{x:?}");
        let y = OkLab::from_xyz(Xyz::new(0., 1., 0.)).unwrap();
        assert!((y.lightness - 0.922).abs() < 1e-3, "{y:?}");
        assert!((y.a + 0.671).abs() < 1e-3, "{y:?}");
        assert!((y.b - 0.263).abs() < 1e-3, "{y:?}");
    }

    #[test]
    fn negative_cone_response_stays_real() {
        let lab = OkLab::from_xyz(Xyz::new(0., 0., 1.)).unwrap();
        assert!(lab.lightness.is_finite() && lab.a.is_finite() && lab.b.is_finite());
        let back = lab.to_xyz().unwrap();
        assert!(back.x.abs() < 1e-10);
        assert!(back.y.abs() < 1e-10);
        assert!((back.z - 1.).abs() < 1e-10);
    }

    #[test]
    fn random_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let xyz = Xyz::new(
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
            );
            let back = OkLab::from_xyz(xyz).unwrap().to_xyz().unwrap();
            assert!((back.x - xyz.x).abs() < 1e-10);
            assert!((back.y - xyz.y).abs() < 1e-10);
            assert!((back.z - xyz.z).abs() < 1e-10);
        }
    }

    #[test]
    fn distances() {
        let a = OkLab::new(0.5, 0.1, -0.1);
        let b = OkLab::new(0.5, 0.4, 0.3);
        assert!((a.euclidean_distance(b) - 0.5).abs() < 1e-12);
        assert!((a.taxicab_distance(b) - 0.7).abs() < 1e-12);
    }
}
