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
use crate::math::{to_degrees, to_radians, wrap_radians};
use crate::model::HSL_MODEL;
use crate::profile::alternative_space;
use crate::rgb::{Rgb, RgbSpace};
use crate::xyz::Xyz;

alternative_space!(
    /// Cylindrical form of an RGB space
    HslSpace,
    RgbSpace,
    HSL_MODEL
);

/// Hue, saturation, lightness over companded RGB
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue angle in radians, `[0, 2π)`
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub opacity: f64,
    pub space: HslSpace,
}

/// Hue in degrees shared by HSL and HSV, 0 for achromatic colors.
#[inline]
pub(crate) fn rgb_hue(rgb: &Rgb, max: f64, chroma: f64) -> f64 {
    if chroma == 0. {
        0.
    } else if max == rgb.red {
        60. * (rgb.green - rgb.blue) / chroma
    } else if max == rgb.green {
        60. * (2. + (rgb.blue - rgb.red) / chroma)
    } else if max == rgb.blue {
        60. * (4. + (rgb.red - rgb.green) / chroma)
    } else {
        0.
    }
}

/// Sector lookup of the hexcone, returns RGB before the lightness offset.
#[inline]
pub(crate) fn hue_sector(hue: f64, chroma: f64) -> (f64, f64, f64) {
    let h = to_degrees(hue).rem_euclid(360.);
    let x = chroma * (1. - ((h / 60.) % 2. - 1.).abs());
    if (0. ..60.).contains(&h) {
        (chroma, x, 0.)
    } else if (60. ..120.).contains(&h) {
        (x, chroma, 0.)
    } else if (120. ..180.).contains(&h) {
        (0., chroma, x)
    } else if (180. ..240.).contains(&h) {
        (0., x, chroma)
    } else if (240. ..300.).contains(&h) {
        (x, 0., chroma)
    } else {
        (chroma, 0., x)
    }
}

impl Hsl {
    #[inline]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            opacity: 1.,
            space: HslSpace::default(),
        }
    }
}

impl AlternativeColor for Hsl {
    type Parent = Rgb;

    fn to_parent(&self) -> Rgb {
        let chroma = (1. - (2. * self.lightness - 1.).abs()) * self.saturation;
        let (r, g, b) = hue_sector(self.hue, chroma);
        let m = self.lightness - chroma / 2.;
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
        let lightness = (max + min) / 2.;
        let saturation = if lightness == 0. || lightness == 1. {
            0.
        } else {
            chroma / (1. - (2. * lightness - 1.).abs())
        };
        Hsl {
            hue: wrap_radians(to_radians(hue)),
            saturation,
            lightness,
            opacity: parent.opacity,
            space: HslSpace::new(parent.space),
        }
    }
}

impl Color for Hsl {
    type Space = HslSpace;

    #[inline]
    fn space(&self) -> &HslSpace {
        &self.space
    }

    #[inline]
    fn opacity(&self) -> f64 {
        self.opacity
    }

    #[inline]
    fn components(&self) -> [f64; 3] {
        [self.hue, self.saturation, self.lightness]
    }

    #[inline]
    fn to_xyz(&self) -> Option<Xyz> {
        self.to_parent().to_xyz()
    }

    #[inline]
    fn from_adapted_xyz(xyz: Xyz, space: HslSpace) -> Option<Self> {
        Rgb::from_adapted_xyz(xyz, space.parent).map(Hsl::from_parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn known_value() {
        let rgb = Rgb::new(142. / 255., 229. / 255., 238. / 255.);
        let hsl = Hsl::from_parent(rgb);
        assert!((hsl.hue - 3.23976).abs() < 1e-4, "{hsl:?}");
        assert!((hsl.saturation - 0.738461).abs() < 1e-4, "{hsl:?}");
        assert!((hsl.lightness - 0.7450980).abs() < 1e-4, "{hsl:?}");

        let back = hsl.to_parent();
        assert!((back.red - rgb.red).abs() < 1e-4);
        assert!((back.green - rgb.green).abs() < 1e-4);
        assert!((back.blue - rgb.blue).abs() < 1e-4);
    }

    #[test]
    fn achromatic_has_zero_hue() {
        let hsl = Hsl::from_parent(Rgb::new(0.4, 0.4, 0.4));
        assert_eq!(hsl.hue, 0.);
        assert_eq!(hsl.saturation, 0.);
        let white = Hsl::from_parent(Rgb::new(1., 1., 1.));
        assert_eq!(white.saturation, 0.);
        assert_eq!(white.lightness, 1.);
    }

    #[test]
    fn magenta_side_hue_is_wrapped() {
        // red is max and green < blue, hue lands in the last sector
        let rgb = Rgb::new(0.9, 0.1, 0.4);
        let hsl = Hsl::from_parent(rgb);
        assert!(hsl.hue > 5.);
        let back = hsl.to_parent();
        assert!((back.red - 0.9).abs() < 1e-12);
        assert!((back.green - 0.1).abs() < 1e-12);
        assert!((back.blue - 0.4).abs() < 1e-12);
    }

    #[test]
    fn random_round_trip_through_xyz() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let rgb = Rgb::new(
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
            );
            let hsl = Hsl::from_parent(rgb);
            let xyz = hsl.to_xyz().unwrap();
            let restored = Hsl::from_xyz(xyz).unwrap().to_parent();
            assert!((restored.red - rgb.red).abs() < 1e-8);
            assert!((restored.green - rgb.green).abs() < 1e-8);
            assert!((restored.blue - rgb.blue).abs() < 1e-8);
        }
    }
}
