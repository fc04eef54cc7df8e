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
use std::hash::{Hash, Hasher};

/// A light source with a published white point.
///
/// Two illuminants are equal when they share the white point and the
/// observer field of view, descriptive metadata is ignored.
#[derive(Clone, Copy, Debug)]
pub struct StandardIlluminant {
    pub name: &'static str,
    /// Family of illuminants this one belongs to
    pub group: &'static str,
    pub details: &'static str,
    pub white_point: Chromaticity,
    /// Observer field of view in degrees
    pub field_of_view: f64,
}

type IlluminantInfo = (&'static str, &'static str, &'static str);

impl StandardIlluminant {
    /// Both observer tables, 2° entries first
    pub const ALL: [StandardIlluminant; 40] = {
        let mut all = [two_degree::A; 40];
        let mut i = 0;
        while i < 20 {
            all[i] = two_degree::ALL[i];
            all[i + 20] = ten_degree::ALL[i];
            i += 1;
        }
        all
    };

    #[inline]
    const fn standard(info: IlluminantInfo, x: f64, y: f64, field_of_view: f64) -> Self {
        Self {
            name: info.0,
            group: info.1,
            details: info.2,
            white_point: Chromaticity::new(x, y),
            field_of_view,
        }
    }

    /// Illuminant with an arbitrary white point, for example a media white.
    #[inline]
    pub const fn custom(white_point: Chromaticity, field_of_view: f64) -> Self {
        Self {
            name: "Custom",
            group: "Custom Illuminants",
            details: "User defined white point.",
            white_point,
            field_of_view,
        }
    }

    /// White point tristimulus value at `Y = 1`
    #[inline]
    pub const fn tristimulus(&self) -> crate::Vector3d {
        self.white_point.to_xyz()
    }
}

impl PartialEq<Self> for StandardIlluminant {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.field_of_view == other.field_of_view && self.white_point == other.white_point
    }
}

impl Eq for StandardIlluminant {}

impl Hash for StandardIlluminant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field_of_view.to_bits().hash(state);
        self.white_point.hash(state);
    }
}

impl Default for StandardIlluminant {
    fn default() -> Self {
        two_degree::D65
    }
}

mod info {
    use super::IlluminantInfo;

    const INCANDESCENT: &str = "Standard Incandescent Illuminants";
    const ENERGY: &str = "Energy Based Illuminants";
    const DAYLIGHT: &str = "Daylight Illuminants";
    const FLUORESCENT: &str = "Standard Fluorescent Illuminants";
    const BROADBAND: &str = "Broadband Fluorescent Illuminants";
    const NARROW_BAND: &str = "Narrow Tri-band Fluorescent Illuminants";
    const OBSOLETE: &str = "Obsolete Illuminants";

    pub(super) const A: IlluminantInfo = ("A", INCANDESCENT, "An incandescent or tungsten bulb.");
    pub(super) const E: IlluminantInfo = ("E", ENERGY, "Equal energy light.");
    pub(super) const D50: IlluminantInfo = ("D50", DAYLIGHT, "Light at the horizon.");
    pub(super) const D55: IlluminantInfo =
        ("D55", DAYLIGHT, "Mid-morning or mid-afternoon daylight.");
    pub(super) const D65: IlluminantInfo = ("D65", DAYLIGHT, "Noon daylight.");
    pub(super) const D75: IlluminantInfo = ("D75", DAYLIGHT, "North sky daylight.");
    pub(super) const F1: IlluminantInfo = ("F1", FLUORESCENT, "Daylight fluorescent bulb.");
    pub(super) const F2: IlluminantInfo = ("F2", FLUORESCENT, "Cool white fluorescent bulb.");
    pub(super) const F3: IlluminantInfo = ("F3", FLUORESCENT, "White fluorescent bulb.");
    pub(super) const F4: IlluminantInfo = ("F4", FLUORESCENT, "Warm white fluorescent bulb.");
    pub(super) const F5: IlluminantInfo = ("F5", FLUORESCENT, "Daylight fluorescent bulb.");
    pub(super) const F6: IlluminantInfo = ("F6", FLUORESCENT, "Lite white fluorescent bulb.");
    pub(super) const F7: IlluminantInfo =
        ("F7", BROADBAND, "Daylight / D65 simulator fluorescent bulb.");
    pub(super) const F8: IlluminantInfo =
        ("F8", BROADBAND, "Mid-morning / D55 simulator fluorescent bulb.");
    pub(super) const F9: IlluminantInfo =
        ("F9", BROADBAND, "Cool white deluxe fluorescent bulb.");
    pub(super) const F10: IlluminantInfo =
        ("F10", NARROW_BAND, "A Philips TL85 or Ultralume 50 bulb.");
    pub(super) const F11: IlluminantInfo =
        ("F11", NARROW_BAND, "A Philips TL84 or Ultralume 40 bulb.");
    pub(super) const F12: IlluminantInfo =
        ("F12", NARROW_BAND, "A Philips TL83 or Ultralume 30 bulb.");
    pub(super) const B: IlluminantInfo = ("B", OBSOLETE, "Direct sunlight at noon.");
    pub(super) const C: IlluminantInfo = ("C", OBSOLETE, "Average northern sky daylight.");
}

macro_rules! illuminant_table {
    ($fov:expr; $($name:ident = ($x:expr, $y:expr)),+ $(,)?) => {
        $(
            pub const $name: StandardIlluminant =
                StandardIlluminant::standard(super::info::$name, $x, $y, $fov);
        )+

        /// Every illuminant of this observer
        pub const ALL: [StandardIlluminant; 20] = [$($name),+];
    };
}

/// White points for the CIE 1931 2° standard observer
pub mod two_degree {
    use super::StandardIlluminant;

    illuminant_table!(2.0;
        A = (0.44757, 0.40745),
        E = (1. / 3., 1. / 3.),
        D50 = (0.34567, 0.35850),
        D55 = (0.33242, 0.34743),
        D65 = (0.31271, 0.32902),
        D75 = (0.29902, 0.31485),
        F1 = (0.31310, 0.33727),
        F2 = (0.37208, 0.37529),
        F3 = (0.40910, 0.39430),
        F4 = (0.44018, 0.40329),
        F5 = (0.31379, 0.34531),
        F6 = (0.37790, 0.38835),
        F7 = (0.31292, 0.32933),
        F8 = (0.34588, 0.35875),
        F9 = (0.37417, 0.37281),
        F10 = (0.34609, 0.35986),
        F11 = (0.38052, 0.37713),
        F12 = (0.43695, 0.40441),
        B = (0.34842, 0.35161),
        C = (0.31006, 0.31616),
    );
}

/// White points for the CIE 1964 10° standard observer
pub mod ten_degree {
    use super::StandardIlluminant;

    illuminant_table!(10.0;
        A = (0.45117, 0.40594),
        E = (1. / 3., 1. / 3.),
        D50 = (0.34773, 0.35952),
        D55 = (0.33411, 0.34877),
        D65 = (0.31382, 0.33100),
        D75 = (0.29968, 0.31740),
        F1 = (0.31811, 0.33559),
        F2 = (0.37925, 0.36733),
        F3 = (0.41761, 0.38324),
        F4 = (0.44920, 0.39074),
        F5 = (0.31975, 0.34246),
        F6 = (0.38660, 0.37847),
        F7 = (0.31569, 0.32960),
        F8 = (0.34902, 0.35939),
        F9 = (0.37829, 0.37045),
        F10 = (0.35090, 0.35444),
        F11 = (0.38541, 0.37123),
        F12 = (0.44256, 0.39717),
        B = (0.34980, 0.35270),
        C = (0.31039, 0.31905),
    );
}
