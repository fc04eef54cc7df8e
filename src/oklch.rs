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
use crate::color::{AlternativeColor, Color};
use crate::math::{from_polar, to_polar};
use crate::model::OKLCH_MODEL;
use crate::oklab::{OkLab, OkLabSpace};
use crate::profile::alternative_space;
use crate::xyz::Xyz;

alternative_space!(
    /// Cylindrical form of [OkLabSpace]
    OkLchSpace,
    OkLabSpace,
    OKLCH_MODEL
);

/// Polar form of [OkLab]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OkLch {
    pub lightness: f64,
    pub chroma: f64,
    /// Radians, `[0, 2π)`
    pub hue: f64,
    pub opacity: f64,
    pub space: OkLchSpace,
}

impl OkLch {
    #[inline]
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
            opacity: 1.,
            space: OkLchSpace::default(),
        }
    }

    #[inline]
    pub fn euclidean_distance(&self, other: Self) -> f64 {
        let dl = self.lightness - other.lightness;
        let dc = self.chroma - other.chroma;
        let dh = self.hue - other.hue;
        (dl * dl + dc * dc + dh * dh).sqrt()
    }

    #[inline]
    pub fn taxicab_distance(&self, other: Self) -> f64 {
        let dl = self.lightness - other.lightness;
        let dc = self.chroma - other.chroma;
        let dh = self.hue - other.hue;
        dl.abs() + dc.abs() + dh.abs()
    }
}

impl AlternativeColor for OkLch {
    type Parent = OkLab;

    #[inline]
    fn to_parent(&self) -> OkLab {
        let (a, b) = from_polar(self.chroma, self.hue);
        OkLab {
            lightness: self.lightness,
            a,
            b,
            opacity: self.opacity,
            space: self.space.parent,
        }
    }

    #[inline]
    fn from_parent(parent: OkLab) -> Self {
        let (chroma, hue) = to_polar(parent.a, parent.b);
        OkLch {
            lightness: parent.lightness,
            chroma,
            hue,
            opacity: parent.opacity,
            space: OkLchSpace::new(parent.space),
        }
    }
}

impl Color for OkLch {
    type Space = OkLchSpace;

    #[inline]
    fn space(&self) -> &OkLchSpace {
        &self.space
    }

    #[inline]
    fn opacity(&self) -> f64 {
        self.opacity
    }

    #[inline]
    fn components(&self) -> [f64; 3] {
        [self.lightness, self.chroma, self.hue]
    }

    #[inline]
    fn to_xyz(&self) -> Option<Xyz> {
        self.to_parent().to_xyz()
    }

    #[inline]
    fn from_adapted_xyz(xyz: Xyz, space: OkLchSpace) -> Option<Self> {
        OkLab::from_adapted_xyz(xyz, space.parent).map(OkLch::from_parent)
    }
}
