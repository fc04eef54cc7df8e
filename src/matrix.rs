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
use crate::mlaf::mlaf;
use std::ops::{Add, Div, Mul, Sub};

/// Vector math helper
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default)]
pub struct Vector3d {
    pub v: [f64; 3],
}

impl PartialEq<Self> for Vector3d {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f64 = 1e-10;
        let dx = (self.v[0] - other.v[0]).abs();
        let dy = (self.v[1] - other.v[1]).abs();
        let dz = (self.v[2] - other.v[2]).abs();
        dx < TOLERANCE && dy < TOLERANCE && dz < TOLERANCE
    }
}

impl Vector3d {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { v: [x, y, z] }
    }

    /// Element-wise product
    #[inline]
    pub const fn const_mul_vector(self, rhs: Vector3d) -> Vector3d {
        Vector3d {
            v: [self.v[0] * rhs.v[0], self.v[1] * rhs.v[1], self.v[2] * rhs.v[2]],
        }
    }

    /// Element-wise quotient
    #[inline]
    pub const fn const_div_vector(self, rhs: Vector3d) -> Vector3d {
        Vector3d {
            v: [self.v[0] / rhs.v[0], self.v[1] / rhs.v[1], self.v[2] / rhs.v[2]],
        }
    }

    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Vector3d {
        Vector3d {
            v: [f(self.v[0]), f(self.v[1]), f(self.v[2])],
        }
    }
}

impl Mul<Vector3d> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn mul(self, rhs: Vector3d) -> Self::Output {
        self.const_mul_vector(rhs)
    }
}

impl Mul<f64> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            v: [self.v[0] * rhs, self.v[1] * rhs, self.v[2] * rhs],
        }
    }
}

impl Div<Vector3d> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn div(self, rhs: Vector3d) -> Self::Output {
        self.const_div_vector(rhs)
    }
}

impl Div<f64> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self {
            v: [self.v[0] / rhs, self.v[1] / rhs, self.v[2] / rhs],
        }
    }
}

impl Add<Vector3d> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn add(self, rhs: Vector3d) -> Self::Output {
        Self {
            v: [self.v[0] + rhs.v[0], self.v[1] + rhs.v[1], self.v[2] + rhs.v[2]],
        }
    }
}

impl Add<f64> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        Self {
            v: [self.v[0] + rhs, self.v[1] + rhs, self.v[2] + rhs],
        }
    }
}

impl Sub<Vector3d> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn sub(self, rhs: Vector3d) -> Self::Output {
        Self {
            v: [self.v[0] - rhs.v[0], self.v[1] - rhs.v[1], self.v[2] - rhs.v[2]],
        }
    }
}

impl Sub<f64> for Vector3d {
    type Output = Vector3d;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        Self {
            v: [self.v[0] - rhs, self.v[1] - rhs, self.v[2] - rhs],
        }
    }
}

impl From<f64> for Vector3d {
    fn from(value: f64) -> Self {
        Self {
            v: [value, value, value],
        }
    }
}

/// Row-major 3x3 matrix
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix3d {
    pub v: [[f64; 3]; 3],
}

impl Matrix3d {
    pub const IDENTITY: Matrix3d = Matrix3d {
        v: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn new(v: [[f64; 3]; 3]) -> Self {
        Self { v }
    }

    /// Builds a matrix with `diagonal` on the main diagonal and zeros elsewhere.
    #[inline]
    pub const fn diagonal(diagonal: Vector3d) -> Self {
        Self {
            v: [
                [diagonal.v[0], 0., 0.],
                [0., diagonal.v[1], 0.],
                [0., 0., diagonal.v[2]],
            ],
        }
    }

    #[inline]
    pub const fn transpose(&self) -> Matrix3d {
        Matrix3d {
            v: [
                [self.v[0][0], self.v[1][0], self.v[2][0]],
                [self.v[0][1], self.v[1][1], self.v[2][1]],
                [self.v[0][2], self.v[1][2], self.v[2][2]],
            ],
        }
    }

    /// Element-wise map
    #[inline]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix3d {
        let mut result = *self;
        for row in result.v.iter_mut() {
            for value in row.iter_mut() {
                *value = f(*value);
            }
        }
        result
    }

    #[inline]
    pub fn test_equality(&self, other: Matrix3d, tolerance: f64) -> bool {
        self.v
            .iter()
            .flatten()
            .zip(other.v.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    #[inline]
    pub const fn determinant(&self) -> Option<f64> {
        let v = self.v;
        let a0 = v[0][0] * v[1][1] * v[2][2];
        let a1 = v[0][1] * v[1][2] * v[2][0];
        let a2 = v[0][2] * v[1][0] * v[2][1];

        let s0 = v[0][2] * v[1][1] * v[2][0];
        let s1 = v[0][1] * v[1][0] * v[2][2];
        let s2 = v[0][0] * v[1][2] * v[2][1];

        let j = a0 + a1 + a2 - s0 - s1 - s2;
        if j == 0. {
            return None;
        }
        Some(j)
    }

    #[inline]
    const fn adjugate_scaled(&self, det: f64) -> Self {
        let v = self.v;
        let a = v[0][0];
        let b = v[0][1];
        let c = v[0][2];
        let d = v[1][0];
        let e = v[1][1];
        let f = v[1][2];
        let g = v[2][0];
        let h = v[2][1];
        let i = v[2][2];

        Matrix3d {
            v: [
                [
                    (e * i - f * h) * det,
                    (c * h - b * i) * det,
                    (b * f - c * e) * det,
                ],
                [
                    (f * g - d * i) * det,
                    (a * i - c * g) * det,
                    (c * d - a * f) * det,
                ],
                [
                    (d * h - e * g) * det,
                    (b * g - a * h) * det,
                    (a * e - b * d) * det,
                ],
            ],
        }
    }

    /// Inverse matrix, `None` if the matrix is singular.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        let det = 1. / self.determinant()?;
        Some(self.adjugate_scaled(det))
    }

    /// Inverse usable in const context, singular input yields non-finite values.
    #[inline]
    pub const fn inverse_const(&self) -> Self {
        let m_det = match self.determinant() {
            None => 0f64,
            Some(v) => v,
        };
        self.adjugate_scaled(1. / m_det)
    }

    /// Multiplies row `R` element-wise by `rhs`.
    #[inline]
    pub const fn mul_row_vector<const R: usize>(&self, rhs: Vector3d) -> Self {
        const { assert!(R < 3, "Row index must be in 0..3") };
        let mut v = self.v;
        v[R] = Vector3d { v: v[R] }.const_mul_vector(rhs).v;
        Self { v }
    }

    #[inline]
    pub const fn mul_vector(&self, other: Vector3d) -> Vector3d {
        let x = self.v[0][0] * other.v[0] + self.v[0][1] * other.v[1] + self.v[0][2] * other.v[2];
        let y = self.v[1][0] * other.v[0] + self.v[1][1] * other.v[1] + self.v[1][2] * other.v[2];
        let z = self.v[2][0] * other.v[0] + self.v[2][1] * other.v[1] + self.v[2][2] * other.v[2];
        Vector3d { v: [x, y, z] }
    }

    #[inline]
    pub fn mat_mul(&self, other: Matrix3d) -> Self {
        let mut result = Matrix3d::default();

        for i in 0..3 {
            for j in 0..3 {
                result.v[i][j] = mlaf(
                    mlaf(self.v[i][0] * other.v[0][j], self.v[i][1], other.v[1][j]),
                    self.v[i][2],
                    other.v[2][j],
                );
            }
        }

        result
    }

    #[inline]
    pub const fn mat_mul_const(&self, other: Matrix3d) -> Self {
        let mut result = Matrix3d { v: [[0f64; 3]; 3] };
        let mut i = 0usize;
        while i < 3 {
            let mut j = 0usize;
            while j < 3 {
                result.v[i][j] = self.v[i][0] * other.v[0][j]
                    + self.v[i][1] * other.v[1][j]
                    + self.v[i][2] * other.v[2][j];
                j += 1;
            }
            i += 1;
        }

        result
    }
}

impl Mul<Vector3d> for Matrix3d {
    type Output = Vector3d;

    #[inline]
    fn mul(self, rhs: Vector3d) -> Self::Output {
        let mut r = [0f64; 3];
        for (dst, row) in r.iter_mut().zip(self.v.iter()) {
            *dst = mlaf(mlaf(row[0] * rhs.v[0], row[1], rhs.v[1]), row[2], rhs.v[2]);
        }
        Vector3d { v: r }
    }
}

impl Mul<Matrix3d> for Matrix3d {
    type Output = Matrix3d;

    #[inline]
    fn mul(self, rhs: Matrix3d) -> Self::Output {
        self.mat_mul(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRADFORD: Matrix3d = Matrix3d::new([
        [0.8951, 0.2664, -0.1614],
        [-0.7502, 1.7135, 0.0367],
        [0.0389, -0.0685, 1.0296],
    ]);

    #[test]
    fn inverse_restores_identity() {
        let inv = BRADFORD.inverse().unwrap();
        let product = BRADFORD.mat_mul(inv);
        assert!(product.test_equality(Matrix3d::IDENTITY, 1e-12));
        let const_inv = BRADFORD.inverse_const();
        assert!(const_inv.test_equality(inv, 1e-14));
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Matrix3d::new([[1., 2., 3.], [2., 4., 6.], [0., 1., 1.]]);
        assert!(m.determinant().is_none());
        assert!(m.inverse().is_none());
    }

    #[test]
    fn row_scaling() {
        let m = Matrix3d::IDENTITY.mul_row_vector::<1>(Vector3d::new(2., 3., 4.));
        assert_eq!(m.v[1], [0., 3., 0.]);
        assert_eq!(m.v[0], [1., 0., 0.]);
    }

    #[test]
    fn vector_product_matches_const() {
        let v = Vector3d::new(0.2, 0.4, 0.6);
        assert_eq!(BRADFORD * v, BRADFORD.mul_vector(v));
        let d = Matrix3d::diagonal(Vector3d::new(1., 2., 3.)).map(|x| x * 2.);
        assert_eq!(d.mul_vector(v), Vector3d::new(0.4, 1.6, 3.6));
        assert_eq!(BRADFORD.transpose().transpose(), BRADFORD);
    }
}
