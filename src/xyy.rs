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
use crate::color::Color;
use crate::model::XYY_MODEL;
use crate::profile::reference_space;
use crate::xyz::{Xyz, XyzSpace};

reference_space!(
    /// CIE xyY space, shares the XYZ profile
    XyySpace,
    XYY_MODEL,
    input_white
);

/// Chromaticity plus luminance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XyY {
    pub x: f64,
    pub y: f64,
    pub luminance: f64,
    pub opacity: f64,
    pub space: XyySpace,
}

impl XyY {
    #[inline]
    pub fn new(x: f64, y: f64, luminance: f64) -> Self {
        Self {
            x,
            y,
            luminance,
            opacity: 1.,
            space: XyySpace::default(),
        }
    }

    #[inline]
    pub const fn chromaticity(&self) -> Chromaticity {
        Chromaticity::new(self.x, self.y)
    }
}

impl Color for XyY {
    type Space = XyySpace;

    #[inline]
    fn space(&self) -> &XyySpace {
        &self.space
    }

    #[inline]
    fn opacity(&self) -> f64 {
        self.opacity
    }

    #[inline]
    fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.luminance]
    }

    fn to_xyz(&self) -> Option<Xyz> {
        if self.y <= 0. {
            tracing::trace!("xyY with y = {} has no XYZ", self.y);
            return None;
        }
        let xyz = self.chromaticity().to_tristimulus(self.luminance);
        Some(Xyz::from_vector(
            xyz,
            self.opacity,
            XyzSpace::new(self.space.profile),
        ))
    }

    fn from_adapted_xyz(xyz: Xyz, space: XyySpace) -> Option<Self> {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum <= 0. {
            tracing::trace!("XYZ sum {sum} has no chromaticity");
            return None;
        }
        Some(XyY {
            x: xyz.x / sum,
            y: xyz.y / sum,
            luminance: xyz.y,
            opacity: xyz.opacity,
            space,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminant::two_degree;

    #[test]
    fn from_xyz() {
        let color = XyY::from_xyz(Xyz::new(0.25, 0.5, 0.75)).unwrap();
        assert!((color.x - 0.166667).abs() < 1e-6);
        assert!((color.y - 0.333333).abs() < 1e-6);
        assert!((color.luminance - 0.5).abs() < 1e-12);
        let back = color.to_xyz().unwrap();
        assert!((back.x - 0.25).abs() < 1e-12);
        assert!((back.z - 0.75).abs() < 1e-12);
    }

    #[test]
    fn adapts_into_target_white() {
        let color = Xyz::with_reference_white(0.11627, 0.07261, 0.23256, two_degree::D50);
        let xyy = XyY::from_xyz_in(color, XyySpace::default()).unwrap();
        assert!((xyy.x - 0.244163).abs() < 1e-4);
        assert!((xyy.y - 0.147387).abs() < 1e-4);
        assert!((xyy.luminance - 0.074930).abs() < 1e-4);
    }

    #[test]
    fn degenerate_values_fail() {
        assert!(XyY::from_xyz(Xyz::new(0., 0., 0.)).is_none());
        let flat = XyY::new(0.3, 0., 0.5);
        assert!(flat.to_xyz().is_none());
        let converted: Option<Xyz> = flat.convert(XyzSpace::default());
        assert!(converted.is_none());
    }

    #[test]
    fn space_equality() {
        assert_eq!(XyySpace::default(), XyySpace::default());
        assert_ne!(
            XyySpace::default(),
            XyySpace::with_reference_white(two_degree::E)
        );
    }
}
