// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Column-major 4×4 matrix.

use core::fmt;
use core::ops::{Add, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use crate::{MathError, Vector4};

/// Column‑major 4×4 matrix.
///
/// - Stored as four [`Vector4`] columns so the memory image matches GPU
///   uniform layouts; see [`Matrix4x4::as_bytes`].
/// - Addressed logically by `(row, column)`; the 16-argument constructor and
///   [`Matrix4x4::from_rows`] take elements in row-major reading order and
///   transpose them into column storage.
/// - Equality is exact componentwise IEEE-754 equality.
///
/// # Examples
/// ```
/// use kestrel_math::{Matrix4x4, Vector4};
/// let m = Matrix4x4::new(
///      1.0,  2.0,  3.0,  4.0,
///      5.0,  6.0,  7.0,  8.0,
///      9.0, 10.0, 11.0, 12.0,
///     13.0, 14.0, 15.0, 16.0,
/// );
/// assert_eq!(m.at(1, 2), 7.0);
/// assert_eq!(m * Matrix4x4::identity(), m);
/// assert_eq!(m * Vector4::new(1.0, 2.0, 3.0, 4.0), Vector4::new(30.0, 70.0, 110.0, 150.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(64))]
pub struct Matrix4x4 {
    columns: [Vector4; 4],
}

impl Matrix4x4 {
    /// Number of rows.
    pub const ROW_COUNT: usize = 4;

    /// Number of columns.
    pub const COLUMN_COUNT: usize = 4;

    /// Builds a matrix from 16 elements given in row-major reading order
    /// (`mRC` is row `R`, column `C`).
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            columns: [
                Vector4::new(m00, m10, m20, m30),
                Vector4::new(m01, m11, m21, m31),
                Vector4::new(m02, m12, m22, m32),
                Vector4::new(m03, m13, m23, m33),
            ],
        }
    }

    /// Builds a matrix from four rows.
    #[rustfmt::skip]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::new(
            r0[0], r0[1], r0[2], r0[3],
            r1[0], r1[1], r1[2], r1[3],
            r2[0], r2[1], r2[2], r2[3],
            r3[0], r3[1], r3[2], r3[3],
        )
    }

    /// Builds a matrix from four columns.
    pub const fn from_columns(columns: [Vector4; 4]) -> Self {
        Self { columns }
    }

    /// The all-zero matrix.
    pub const fn zero() -> Self {
        Self::from_columns([Vector4::zero(); 4])
    }

    /// The identity matrix.
    #[rustfmt::skip]
    pub const fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Element at `(row, column)`.
    ///
    /// Panics if either index is outside `0..4`; see [`Matrix4x4::try_at`].
    pub const fn at(&self, row: usize, column: usize) -> f32 {
        self.columns[column].to_array()[row]
    }

    /// Mutable element at `(row, column)`. Panics out of range.
    pub fn at_mut(&mut self, row: usize, column: usize) -> &mut f32 {
        &mut self.columns[column][row]
    }

    /// Element at `(row, column)`, or [`MathError::ElementOutOfRange`].
    pub fn try_at(&self, row: usize, column: usize) -> Result<f32, MathError> {
        if row < Self::ROW_COUNT && column < Self::COLUMN_COUNT {
            Ok(self.at(row, column))
        } else {
            Err(MathError::ElementOutOfRange { row, column })
        }
    }

    /// Column `index` as a vector. Panics out of range.
    pub const fn column(&self, index: usize) -> Vector4 {
        self.columns[index]
    }

    /// Row `index` as a vector. Panics out of range.
    pub const fn row(&self, index: usize) -> Vector4 {
        Vector4::new(
            self.at(index, 0),
            self.at(index, 1),
            self.at(index, 2),
            self.at(index, 3),
        )
    }

    /// All four columns.
    pub const fn columns(&self) -> [Vector4; 4] {
        self.columns
    }

    /// Returns the transpose (`(row, column)` swapped with `(column, row)`).
    pub const fn transposed(&self) -> Self {
        let [c0, c1, c2, c3] = self.columns;
        Self::from_rows([c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()])
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Multiplies every element by `scalar`.
    pub const fn scaled(&self, scalar: f32) -> Self {
        let [c0, c1, c2, c3] = self.columns;
        Self::from_columns([
            c0.scaled(scalar),
            c1.scaled(scalar),
            c2.scaled(scalar),
            c3.scaled(scalar),
        ])
    }

    /// Matrix product `self * rhs`.
    ///
    /// Row `r` of `self` is read as column `r` of the transpose so each entry
    /// is a dot product of two contiguous columns.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let transpose = self.transposed();
        let mut result = Self::zero();
        for (row, lhs_row) in transpose.columns.iter().enumerate() {
            for (column, rhs_column) in rhs.columns.iter().enumerate() {
                *result.at_mut(row, column) = lhs_row.dot(*rhs_column);
            }
        }
        result
    }

    /// Applies the matrix to a homogeneous vector (`self * vector`).
    pub const fn multiply_vector(&self, vector: Vector4) -> Vector4 {
        let [r0, r1, r2, r3] = self.transposed().columns;
        Vector4::new(r0.dot(vector), r1.dot(vector), r2.dot(vector), r3.dot(vector))
    }

    /// Column-major copy of the 16 elements.
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(self.columns)
    }

    /// Column-major byte image for upload to a graphics API.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for Matrix4x4 {
    /// The identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;
    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        &self.columns[column][row]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        self.at_mut(row, column)
    }
}

impl Neg for Matrix4x4 {
    type Output = Self;
    fn neg(self) -> Self {
        let [c0, c1, c2, c3] = self.columns;
        Self::from_columns([-c0, -c1, -c2, -c3])
    }
}

impl Add for Matrix4x4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3] = self.columns;
        let [b0, b1, b2, b3] = rhs.columns;
        Self::from_columns([a0 + b0, a1 + b1, a2 + b2, a3 + b3])
    }
}

impl Sub for Matrix4x4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3] = self.columns;
        let [b0, b1, b2, b3] = rhs.columns;
        Self::from_columns([a0 - b0, a1 - b1, a2 - b2, a3 - b3])
    }
}

impl Mul<f32> for Matrix4x4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scaled(rhs)
    }
}

impl Mul<Matrix4x4> for f32 {
    type Output = Matrix4x4;
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let [c0, c1, c2, c3] = rhs.columns;
        Matrix4x4::from_columns([self * c0, self * c1, self * c2, self * c3])
    }
}

impl Div<f32> for Matrix4x4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.scaled(1.0 / rhs)
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vector4> for Matrix4x4 {
    type Output = Vector4;
    fn mul(self, rhs: Vector4) -> Vector4 {
        self.multiply_vector(rhs)
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Matrix4x4> for Matrix4x4 {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}

impl fmt::Display for Matrix4x4 {
    /// Row-major: `| a b c d | e f g h | i j k l | m n o p |`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Self::ROW_COUNT {
            write!(f, "|")?;
            for column in 0..Self::COLUMN_COUNT {
                write!(f, " {}", self.at(row, column))?;
            }
            write!(f, " ")?;
        }
        write!(f, "|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_is_sixteen_floats_column_major() {
        assert_eq!(core::mem::size_of::<Matrix4x4>(), 16 * core::mem::size_of::<f32>());
        let m = Matrix4x4::new(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(
            m.to_cols_array(),
            [1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0, 16.0]
        );
        assert_eq!(m.as_bytes().len(), 64);
    }

    #[test]
    fn try_at_rejects_out_of_range() {
        let m = Matrix4x4::identity();
        assert_eq!(m.try_at(3, 3), Ok(1.0));
        assert_eq!(
            m.try_at(4, 0),
            Err(MathError::ElementOutOfRange { row: 4, column: 0 })
        );
        assert_eq!(
            m.try_at(0, 7),
            Err(MathError::ElementOutOfRange { row: 0, column: 7 })
        );
    }
}
