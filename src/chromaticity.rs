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
use crate::err::ChromaError;
use crate::matrix::Vector3d;
use std::hash::{Hash, Hasher};

/// CIE xy chromaticity coordinate
#[derive(Clone, Debug, Copy, Default)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Derived `z = 1 - x - y`
    #[inline]
    pub const fn z(&self) -> f64 {
        1. - self.x - self.y
    }

    /// Tristimulus value of this chromaticity at the given `Y`.
    ///
    /// Not defined for `y == 0`, callers must check [Chromaticity::y] first.
    #[inline]
    pub const fn to_tristimulus(&self, luminance: f64) -> Vector3d {
        let scale = luminance / self.y;
        Vector3d {
            v: [scale * self.x, luminance, scale * self.z()],
        }
    }

    /// Tristimulus value normalized to `Y = 1`.
    #[inline]
    pub const fn to_xyz(&self) -> Vector3d {
        self.to_tristimulus(1.)
    }

    /// Normalizes a tristimulus value by `X + Y + Z`.
    #[inline]
    pub fn from_tristimulus(x: f64, y: f64, z: f64) -> Result<Self, ChromaError> {
        let sum = x + y + z;
        if sum == 0.0 {
            tracing::trace!("tristimulus ({x}, {y}, {z}) has no chromaticity");
            return Err(ChromaError::DivisionByZero);
        }
        let rec = 1. / sum;
        Ok(Chromaticity {
            x: x * rec,
            y: y * rec,
        })
    }
}

impl TryFrom<Vector3d> for Chromaticity {
    type Error = ChromaError;

    #[inline]
    fn try_from(xyz: Vector3d) -> Result<Self, Self::Error> {
        Chromaticity::from_tristimulus(xyz.v[0], xyz.v[1], xyz.v[2])
    }
}

impl PartialEq<Self> for Chromaticity {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Chromaticity {}

impl Hash for Chromaticity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_z() {
        let c = Chromaticity::new(0.25, 0.5);
        assert!((c.z() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn tristimulus_at_luminance() {
        let c = Chromaticity::new(0.31271, 0.32902);
        let xyz = c.to_tristimulus(100.);
        assert!((xyz.v[0] - 95.0428).abs() < 1e-3);
        assert!((xyz.v[1] - 100.).abs() < 1e-12);
        assert!((xyz.v[2] - 108.8267).abs() < 1e-3);
    }

    #[test]
    fn from_tristimulus_normalizes() {
        let c = Chromaticity::from_tristimulus(0.25, 0.5, 0.75).unwrap();
        assert!((c.x - 1. / 6.).abs() < 1e-12);
        assert!((c.y - 1. / 3.).abs() < 1e-12);
        let back = Chromaticity::try_from(c.to_tristimulus(0.5)).unwrap();
        assert!((back.x - c.x).abs() < 1e-12);
    }

    #[test]
    fn zero_tristimulus_fails() {
        assert_eq!(
            Chromaticity::from_tristimulus(0., 0., 0.),
            Err(ChromaError::DivisionByZero)
        );
    }
}
