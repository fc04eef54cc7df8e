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
//! Colorimetry: conversions between color spaces through CIE XYZ and
//! chromatic adaptation between reference whites.
//!
//! Every color type converts into [Xyz] under its own reference white.
//! Converting into a space with another white adapts first, with linear
//! Bradford unless a [ChromaticAdaptation] strategy is supplied.
//!
//! ```
//! use moxchroma::{Color, Lab, LabSpace, Rgb, two_degree};
//!
//! let red = Rgb::new(1., 0., 0.);
//! let lab: Lab = red
//!     .convert(LabSpace::with_reference_white(two_degree::D50))
//!     .unwrap();
//! assert!(lab.lightness > 0.5 && lab.a > 0.7);
//! ```
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
mod chad;
mod chromaticity;
mod cie1994;
mod cmccat2000;
mod color;
mod err;
mod hsl;
mod hsv;
mod illuminant;
mod jab;
mod jch;
mod lab;
mod lch;
/// Thin layer over `pxfm` plus angle helpers
mod math;
mod matrix;
mod mlaf;
mod model;
mod oklab;
mod oklch;
mod profile;
mod rgb;
mod trc;
mod xyy;
mod xyz;
mod zhai_luo;

pub use chad::{AdaptationTransform, ChromaticAdaptation, CustomTransform, LinearAdaptation};
pub use chromaticity::Chromaticity;
pub use cie1994::Cie1994Adaptation;
pub use cmccat2000::{CmcCat2000Adaptation, ViewingCondition};
pub use color::{AlternativeColor, Color, convert};
pub use err::ChromaError;
pub use hsl::{Hsl, HslSpace};
pub use hsv::{Hsv, HsvSpace};
pub use illuminant::{StandardIlluminant, ten_degree, two_degree};
pub use jab::{Jab, JabSpace};
pub use jch::{Jch, JchSpace};
pub use lab::{Lab, LabSpace};
pub use lch::{LchAb, LchAbSpace};
pub use matrix::{Matrix3d, Vector3d};
pub use model::{ColorModel, ModelComponent};
pub use oklab::{OkLab, OkLabSpace};
pub use oklch::{OkLch, OkLchSpace};
pub use profile::{ColorSpace, Profile, RgbProfile, XyzProfile};
pub use rgb::{Rgb, RgbSpace};
pub use trc::Companding;
pub use xyy::{XyY, XyySpace};
pub use xyz::{Xyz, XyzSpace};
pub use zhai_luo::{ZhaiLuoAdaptation, ZhaiLuoTransform};
