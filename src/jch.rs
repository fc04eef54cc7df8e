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
use crate::jab::{Jab, JabSpace};
use crate::math::{from_polar, to_polar};
use crate::model::JCH_MODEL;
use crate::profile::alternative_space;
use crate::xyz::Xyz;

alternative_space!(
    /// Cylindrical form of [JabSpace]
    JchSpace,
    JabSpace,
    JCH_MODEL
);

/// Polar form of [Jab]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jch {
    pub lightness: f64,
    pub chroma: f64,
    /// Radians, `[0, 2π)`
    pub hue: f64,
    pub opacity: f64,
    pub space: JchSpace,
}

impl Jch {
    #[inline]
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
            opacity: 1.,
            space: JchSpace::default(),
        }
    }
}

impl AlternativeColor for Jch {
    type Parent = Jab;

    #[inline]
    fn to_parent(&self) -> Jab {
        let (a, b) = from_polar(self.chroma, self.hue);
        Jab {
            lightness: self.lightness,
            a,
            b,
            opacity: self.opacity,
            space: self.space.parent,
        }
    }

    #[inline]
    fn from_parent(parent: Jab) -> Self {
        let (chroma, hue) = to_polar(parent.a, parent.b);
        Jch {
            lightness: parent.lightness,
            chroma,
            hue,
            opacity: parent.opacity,
            space: JchSpace::new(parent.space),
        }
    }
}

impl Color for Jch {
    type Space = JchSpace;

    #[inline]
    fn space(&self) -> &JchSpace {
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
    fn from_adapted_xyz(xyz: Xyz, space: JchSpace) -> Option<Self> {
        Jab::from_adapted_xyz(xyz, space.parent).map(Jch::from_parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_value() {
        let xyz = Xyz::new(0.20654008, 0.12197225, 0.05136952);
        let jch = Jch::from_xyz(xyz).unwrap();
        assert!((jch.lightness - 0.00535048).abs() < 1e-7, "{jch:?}");
        assert!((jch.chroma - 0.0106349296).abs() < 1e-7, "{jch:?}");
        assert!((jch.hue - 0.5173784272).abs() < 1e-6, "{jch:?}");

        let back = jch.to_xyz().unwrap();
        assert!((back.x - xyz.x).abs() < 1e-9);
        assert!((back.y - xyz.y).abs() < 1e-9);
        assert!((back.z - xyz.z).abs() < 1e-9);
    }

    #[test]
    fn converts_from_lab_family() {
        use crate::lch::LchAb;
        let lch = LchAb::new(0.6, 0.3, 1.);
        let jch: Jch = lch.convert(JchSpace::default()).unwrap();
        let back: LchAb = jch.convert(Default::default()).unwrap();
        assert!((back.lightness - 0.6).abs() < 1e-9);
        assert!((back.chroma - 0.3).abs() < 1e-9);
        assert!((back.hue - 1.).abs() < 1e-9);
    }
}
