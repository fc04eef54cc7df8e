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
use crate::hsl::{hue_sector, rgb_hue};
use crate::math::{to_radians, wrap_radians};
use crate::model::HSV_MODEL;
use crate::profile::alternative_space;
use crate::rgb::{Rgb, RgbSpace};
use crate::xyz::Xyz;

alternative_space!(
    /// Hexcone form of an RGB space
    HsvSpace,
    RgbSpace,
    HSV_MODEL
);

/// Hue, saturation, value over companded RGB
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue angle in radians, `[0, 2π)`
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
    pub opacity: f64,
    pub space: HsvSpace,
}

impl Hsv {
    #[inline]
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
            opacity: 1.,
            space: HsvSpace::default(),
        }
    }
}

impl AlternativeColor for Hsv {
    type Parent = Rgb;

    fn to_parent(&self) -> Rgb {
        let chroma = self.value * self.saturation;
        let (r, g, b) = hue_sector(self.hue, chroma);
        let m = self.value - chroma;
        Rgb {
            red: r + m,
            green: g + m,
            blue: b + m,
            opacity: self.opacity,
            space: self.space.parent,
        }
    }

    fn from_parent(parent: Rgb) -> Self {
        let (max, min) = parent.max_min();
        let chroma = max - min;
        let hue = rgb_hue(&parent, max, chroma);
        Hsv {
            hue: wrap_radians(to_radians(hue)),
            saturation: if max == 0. { 0. } else { chroma / max },
            value: max,
            opacity: parent.opacity,
            space: HsvSpace::new(parent.space),
        }
    }
}

impl Color for Hsv {
    type Space = HsvSpace;

    #[inline]
    fn space(&self) -> &HsvSpace {
        &self.space
    }

    #[inline]
    fn opacity(&self) -> f64 {
        self.opacity
    }

    #[inline]
    fn components(&self) -> [f64; 3] {
        [self.hue, self.saturation, self.value]
    }

    #[inline]
    fn to_xyz(&self) -> Option<Xyz> {
        self.to_parent().to_xyz()
    }

    #[inline]
    fn from_adapted_xyz(xyz: Xyz, space: HsvSpace) -> Option<Self> {
        Rgb::from_adapted_xyz(xyz, space.parent).map(Hsv::from_parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsl::Hsl;
    use rand::Rng;
    use std::f64::consts::PI;

    #[test]
    fn primaries() {
        let red = Hsv::from_parent(Rgb::new(1., 0., 0.));
        assert_eq!(red.components(), [0., 1., 1.]);
        let green = Hsv::from_parent(Rgb::new(0., 1., 0.));
        assert!((green.hue - 2. * PI / 3.).abs() < 1e-12);
        let blue = Hsv::from_parent(Rgb::new(0., 0., 0.5));
        assert!((blue.hue - 4. * PI / 3.).abs() < 1e-12);
        assert_eq!(blue.value, 0.5);
    }

    #[test]
    fn black_has_no_saturation() {
        let black = Hsv::from_parent(Rgb::new(0., 0., 0.));
        assert_eq!(black.components(), [0., 0., 0.]);
    }

    #[test]
    fn converts_between_alternatives() {
        let hsl = Hsl::from_parent(Rgb::new(0.2, 0.6, 0.3).with_opacity(0.7));
        let hsv: Hsv = hsl.convert(HsvSpace::default()).unwrap();
        let rgb = hsv.to_parent();
        assert!((rgb.red - 0.2).abs() < 1e-9);
        assert!((rgb.green - 0.6).abs() < 1e-9);
        assert!((rgb.blue - 0.3).abs() < 1e-9);
        assert_eq!(hsv.opacity, 0.7);
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
            let back = Hsv::from_parent(rgb).to_parent();
            assert!((back.red - rgb.red).abs() < 1e-12);
            assert!((back.green - rgb.green).abs() < 1e-12);
            assert!((back.blue - rgb.blue).abs() < 1e-12);
        }
    }
}
