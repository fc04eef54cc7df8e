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
use crate::chad::{ChromaticAdaptation, LinearAdaptation};
use crate::profile::ColorSpace;
use crate::xyz::Xyz;

/// A color value that converts to and from CIE XYZ.
///
/// `to_xyz` returns the color under its own reference white. Constructing
/// from XYZ adapts the input first when its reference white differs from the
/// target space, using linear Bradford unless a strategy is supplied.
pub trait Color: Copy {
    type Space: ColorSpace;

    fn space(&self) -> &Self::Space;

    fn opacity(&self) -> f64;

    /// Components in model order
    fn components(&self) -> [f64; 3];

    /// `None` when the conversion is undefined for this value
    fn to_xyz(&self) -> Option<Xyz>;

    /// Builds the color from XYZ that is already expressed under the
    /// reference white of `space`.
    fn from_adapted_xyz(xyz: Xyz, space: Self::Space) -> Option<Self>;

    /// Converts into the space of this color type chosen for the input's
    /// reference white, see [ColorSpace::for_reference_white].
    #[inline]
    fn from_xyz(xyz: Xyz) -> Option<Self> {
        Self::from_xyz_in(xyz, Self::Space::for_reference_white(xyz.reference_white()))
    }

    #[inline]
    fn from_xyz_in(xyz: Xyz, space: Self::Space) -> Option<Self> {
        let method = LinearAdaptation::bradford(space.reference_white());
        Self::from_xyz_using(xyz, space, &method)
    }

    /// Same as [Color::from_xyz_in] with an explicit adaptation strategy.
    ///
    /// When the strategy lands on another white than `space`, its output is
    /// carried the rest of the way with linear Bradford.
    fn from_xyz_using<A: ChromaticAdaptation + ?Sized>(
        xyz: Xyz,
        space: Self::Space,
        method: &A,
    ) -> Option<Self> {
        let target = space.reference_white();
        if xyz.reference_white() == target {
            return Self::from_adapted_xyz(xyz, space);
        }
        let adapted = method.adapt(&xyz);
        if adapted.reference_white() != target {
            tracing::debug!(
                "adaptation lands on {:?}, continuing to {:?}",
                adapted.reference_white().white_point,
                target.white_point
            );
        }
        Self::from_adapted_xyz(adapted.adapt(target), space)
    }

    /// Converts into another color type through XYZ.
    #[inline]
    fn convert<U: Color>(&self, space: U::Space) -> Option<U> {
        U::from_xyz_in(self.to_xyz()?, space)
    }

    #[inline]
    fn convert_using<U: Color, A: ChromaticAdaptation + ?Sized>(
        &self,
        space: U::Space,
        method: &A,
    ) -> Option<U> {
        U::from_xyz_using(self.to_xyz()?, space, method)
    }
}

/// A color type defined algebraically over a parent color type,
/// sharing the parent's profile.
pub trait AlternativeColor: Color {
    type Parent: Color;

    fn to_parent(&self) -> Self::Parent;

    fn from_parent(parent: Self::Parent) -> Self;
}

/// Converts `from` into a color of type `U` living in `space`.
#[inline]
pub fn convert<T: Color, U: Color>(from: &T, space: U::Space) -> Option<U> {
    from.convert(space)
}
