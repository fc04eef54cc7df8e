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
use crate::matrix::Vector3d;
use crate::model::LAB_MODEL;
use crate::profile::reference_space;
use crate::trc::{EPSILON, KAPPA};
use crate::xyz::{Xyz, XyzSpace};

reference_space!(
    /// CIE 1976 L\*a\*b\* relative to a reference white
    LabSpace,
    LAB_MODEL,
    input_white
);

/// CIE L\*a\*b\* with every component divided by 100,
/// so lightness of the reference white is 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub lightness: f64,
    pub a: f64,
    pub b: f64,
    pub opacity: f64,
    pub space: LabSpace,
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        cbrt(t)
    } else {
        (KAPPA * t + 16.) / 116.
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let f3 = f * f * f;
    if f3 > EPSILON {
        f3
    } else {
        (116. * f - 16.) / KAPPA
    }
}

/// White tristimulus, `None` if any component is not positive.
#[inline]
fn white_of(space: &LabSpace) -> Option<Vector3d> {
    let white = space.profile.reference_white.tristimulus();
    if white.v.iter().any(|&c| c <= 0.) {
        tracing::trace!("reference white {:?} is not usable for Lab", white.v);
        return None;
    }
    Some(white)
}

impl Lab {
    #[inline]
    pub fn new(lightness: f64, a: f64, b: f64) -> Self {
        Self {
            lightness,
            a,
            b,
            opacity: 1.,
            space: LabSpace::default(),
        }
    }

    /// Euclidean distance, CIE76 ΔE scaled by 1/100
    #[inline]
    pub fn euclidean_distance(&self, other: Self) -> f64 {
        let dl = self.lightness - other.lightness;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl Color for Lab {
    type Space = LabSpace;

    #[inline]
    fn space(&self) -> &LabSpace {
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
        let white = white_of(&self.space)?;
        let l = self.lightness * 100.;
        let fy = (l + 16.) / 116.;
        let fx = self.a * 100. / 500. + fy;
        let fz = fy - self.b * 100. / 200.;
        let yr = if l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            l / KAPPA
        };
        let relative = Vector3d {
            v: [lab_f_inv(fx), yr, lab_f_inv(fz)],
        };
        Some(Xyz::from_vector(
            relative * white,
            self.opacity,
            XyzSpace::new(self.space.profile),
        ))
    }

    fn from_adapted_xyz(xyz: Xyz, space: LabSpace) -> Option<Self> {
        let white = white_of(&space)?;
        let relative = xyz.to_vector() / white;
        let fx = lab_f(relative.v[0]);
        let fy = lab_f(relative.v[1]);
        let fz = lab_f(relative.v[2]);
        Some(Lab {
            lightness: (116. * fy - 16.) / 100.,
            a: 500. * (fx - fy) / 100.,
            b: 200. * (fy - fz) / 100.,
            opacity: xyz.opacity,
            space,
        })
    }
}
