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
use crate::lab::{Lab, LabSpace};
use crate::math::{from_polar, to_polar};
use crate::model::LCH_AB_MODEL;
use crate::profile::alternative_space;
use crate::xyz::Xyz;

alternative_space!(
    /// Cylindrical form of [LabSpace]
    LchAbSpace,
    LabSpace,
    LCH_AB_MODEL
);

/// CIE LCh(ab), polar form of [Lab]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LchAb {
    pub lightness: f64,
    pub chroma: f64,
    /// Radians, `[0, 2π)`
    pub hue: f64,
    pub opacity: f64,
    pub space: LchAbSpace,
}

impl LchAb {
    #[inline]
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
            opacity: 1.,
            space: LchAbSpace::default(),
        }
    }
}

impl AlternativeColor for LchAb {
    type Parent = Lab;

    #[inline]
    fn to_parent(&self) -> Lab {
        let (a, b) = from_polar(self.chroma, self.hue);
        Lab {
            lightness: self.lightness,
            a,
            b,
            opacity: self.opacity,
            space: self.space.parent,
        }
    }

    #[inline]
    fn from_parent(parent: Lab) -> Self {
        let (chroma, hue) = to_polar(parent.a, parent.b);
        LchAb {
            lightness: parent.lightness,
            chroma,
            hue,
            opacity: parent.opacity,
            space: LchAbSpace::new(parent.space),
        }
    }
}

impl Color for LchAb {
    type Space = LchAbSpace;

    #[inline]
    fn space(&self) -> &LchAbSpace {
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
    fn from_adapted_xyz(xyz: Xyz, space: LchAbSpace) -> Option<Self> {
        Lab::from_adapted_xyz(xyz, space.parent).map(LchAb::from_parent)
    }
}
