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
/// Named axis of a color model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModelComponent {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub description: &'static str,
}

/// Descriptor of the components of a color model.
///
/// Purely informational, it never takes part in conversion math.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorModel {
    pub name: &'static str,
    pub components: &'static [ModelComponent],
}

impl ColorModel {
    #[inline]
    pub const fn number_of_components(&self) -> usize {
        self.components.len()
    }
}

const fn component(
    name: &'static str,
    abbreviation: &'static str,
    description: &'static str,
) -> ModelComponent {
    ModelComponent {
        name,
        abbreviation,
        description,
    }
}

const LIGHTNESS_L: ModelComponent = component("lightness", "L", "");
const CHROMA: ModelComponent = component("chroma", "C", "");
const HUE: ModelComponent = component("hue", "h", "Angle in radians.");

pub(crate) const XYZ_MODEL: ColorModel = ColorModel {
    name: "XYZ",
    components: &[
        component("x", "X", "Mix of the cone response curves, roughly red."),
        component("y", "Y", "Luminance."),
        component("z", "Z", "Roughly the blue cone response."),
    ],
};

pub(crate) const XYY_MODEL: ColorModel = ColorModel {
    name: "xyY",
    components: &[
        component("x", "x", "Chromaticity x."),
        component("y", "y", "Chromaticity y."),
        component("luminance", "Y", "Luminance."),
    ],
};

pub(crate) const RGB_MODEL: ColorModel = ColorModel {
    name: "RGB",
    components: &[
        component("red", "R", "Amount of the red primary."),
        component("green", "G", "Amount of the green primary."),
        component("blue", "B", "Amount of the blue primary."),
    ],
};

pub(crate) const HSL_MODEL: ColorModel = ColorModel {
    name: "HSL",
    components: &[
        component("hue", "H", "Angle in radians."),
        component("saturation", "S", ""),
        component("lightness", "L", ""),
    ],
};

pub(crate) const HSV_MODEL: ColorModel = ColorModel {
    name: "HSV",
    components: &[
        component("hue", "H", "Angle in radians."),
        component("saturation", "S", ""),
        component("value", "V", ""),
    ],
};

pub(crate) const LAB_MODEL: ColorModel = ColorModel {
    name: "L*a*b*",
    components: &[
        LIGHTNESS_L,
        component("a", "a", "Green to red axis."),
        component("b", "b", "Blue to yellow axis."),
    ],
};

pub(crate) const LCH_AB_MODEL: ColorModel = ColorModel {
    name: "LCh(ab)",
    components: &[LIGHTNESS_L, CHROMA, HUE],
};

pub(crate) const JAB_MODEL: ColorModel = ColorModel {
    name: "Jab",
    components: &[
        component("lightness", "J", ""),
        component("a", "a", "Green to red axis."),
        component("b", "b", "Blue to yellow axis."),
    ],
};

pub(crate) const JCH_MODEL: ColorModel = ColorModel {
    name: "JCh",
    components: &[component("lightness", "J", ""), CHROMA, HUE],
};

pub(crate) const OKLAB_MODEL: ColorModel = ColorModel {
    name: "OkLab",
    components: &[
        LIGHTNESS_L,
        component("a", "a", "Green to red axis."),
        component("b", "b", "Blue to yellow axis."),
    ],
};

pub(crate) const OKLCH_MODEL: ColorModel = ColorModel {
    name: "OkLCh",
    components: &[LIGHTNESS_L, CHROMA, HUE],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_model_has_three_components() {
        for model in [
            XYZ_MODEL,
            XYY_MODEL,
            RGB_MODEL,
            HSL_MODEL,
            HSV_MODEL,
            LAB_MODEL,
            LCH_AB_MODEL,
            JAB_MODEL,
            JCH_MODEL,
            OKLAB_MODEL,
            OKLCH_MODEL,
        ] {
            assert_eq!(model.number_of_components(), 3, "{}", model.name);
        }
        assert_eq!(JCH_MODEL.components[0].abbreviation, "J");
    }
}
