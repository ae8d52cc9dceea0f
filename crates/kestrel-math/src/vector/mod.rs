// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-arity `f32` vectors.
//!
//! The three arities share one operator surface, generated by
//! `impl_vector_ops!`:
//! - componentwise `+`, `-`, unary `-`, and elementwise `*` / `/` between
//!   vectors;
//! - scalar products in both operand orders (`v * s` and `s * v`);
//! - scalar division as multiplication by the reciprocal, which may differ from
//!   naive per-component division in the last bit;
//! - exact componentwise equality (derived `PartialEq`).
//!
//! Length and normalization are `const fn` so they can be folded at compile
//! time. Normalizing a zero vector yields NaN components rather than failing.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Index, Mul, Neg, Sub};

/// Behaviour shared by every vector arity.
///
/// Lets callers (and the [`dot`] free function) work over `Vector2`,
/// `Vector3` and `Vector4` uniformly.
pub trait Vector:
    Copy
    + Debug
    + Display
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
    + Index<usize, Output = f32>
{
    /// Number of components.
    const ARITY: usize;

    /// The all-zero vector.
    fn zero() -> Self;

    /// Sum of componentwise products.
    fn dot(self, rhs: Self) -> f32;

    /// `dot(self, self)`.
    fn squared_length(self) -> f32;

    /// Euclidean length.
    fn length(self) -> f32;

    /// `self` scaled to unit length.
    fn normalized(self) -> Self;
}

/// Sum of the componentwise products of `lhs` and `rhs`.
///
/// # Examples
/// ```
/// use kestrel_math::{dot, Vector3};
/// assert_eq!(dot(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)), 0.0);
/// ```
pub fn dot<V: Vector>(lhs: V, rhs: V) -> f32 {
    lhs.dot(rhs)
}

// Generates the shared inherent API and operator impls for one vector arity.
// The type must be a struct with a single `data: [f32; $arity]` field.
macro_rules! impl_vector_ops {
    ($name:ident, $arity:literal, $first:literal $(, $rest:literal)*) => {
        impl $name {
            /// Number of components.
            pub const ARITY: usize = $arity;

            /// The all-zero vector.
            pub const fn zero() -> Self {
                Self { data: [0.0; $arity] }
            }

            /// Builds a vector from its components in order.
            pub const fn from_array(data: [f32; $arity]) -> Self {
                Self { data }
            }

            /// Returns the components as an array.
            pub const fn to_array(self) -> [f32; $arity] {
                self.data
            }

            /// Component at `index`, or [`MathError::ComponentOutOfRange`].
            ///
            /// [`MathError::ComponentOutOfRange`]: crate::MathError::ComponentOutOfRange
            pub fn try_component(self, index: usize) -> Result<f32, crate::MathError> {
                self.data
                    .get(index)
                    .copied()
                    .ok_or(crate::MathError::ComponentOutOfRange {
                        index,
                        arity: $arity,
                    })
            }

            /// Sum of componentwise products.
            pub const fn dot(self, rhs: Self) -> f32 {
                self.data[$first] * rhs.data[$first] $(+ self.data[$rest] * rhs.data[$rest])*
            }

            /// Multiplies every component by `scalar`.
            pub const fn scaled(self, scalar: f32) -> Self {
                Self {
                    data: [self.data[$first] * scalar $(, self.data[$rest] * scalar)*],
                }
            }

            /// `dot(self, self)`.
            pub const fn squared_length(self) -> f32 {
                self.dot(self)
            }

            /// Euclidean length, via the `const` square root.
            pub const fn length(self) -> f32 {
                crate::scalar::sqrt_f32(self.squared_length())
            }

            /// `1 / length()`; infinite for the zero vector.
            pub const fn inverse_length(self) -> f32 {
                1.0 / self.length()
            }

            /// Returns `inverse_length() * self`.
            pub const fn normalized(self) -> Self {
                self.scaled(self.inverse_length())
            }

            /// Normalizes in place.
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }
        }

        impl crate::vector::Vector for $name {
            const ARITY: usize = $arity;

            fn zero() -> Self {
                Self::zero()
            }

            fn dot(self, rhs: Self) -> f32 {
                Self::dot(self, rhs)
            }

            fn squared_length(self) -> f32 {
                Self::squared_length(self)
            }

            fn length(self) -> f32 {
                Self::length(self)
            }

            fn normalized(self) -> Self {
                Self::normalized(self)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "({}", self.data[$first])?;
                $(write!(f, ", {}", self.data[$rest])?;)*
                write!(f, ")")
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                Self { data: [-self.data[$first] $(, -self.data[$rest])*] }
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self {
                    data: [self.data[$first] + rhs.data[$first] $(, self.data[$rest] + rhs.data[$rest])*],
                }
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self {
                    data: [self.data[$first] - rhs.data[$first] $(, self.data[$rest] - rhs.data[$rest])*],
                }
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Self {
                    data: [self.data[$first] * rhs.data[$first] $(, self.data[$rest] * rhs.data[$rest])*],
                }
            }
        }

        impl core::ops::Div for $name {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                Self {
                    data: [self.data[$first] / rhs.data[$first] $(, self.data[$rest] / rhs.data[$rest])*],
                }
            }
        }

        impl core::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                self.scaled(rhs)
            }
        }

        impl core::ops::Mul<$name> for f32 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name {
                    data: [self * rhs.data[$first] $(, self * rhs.data[$rest])*],
                }
            }
        }

        impl core::ops::Div<f32> for $name {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                self.scaled(1.0 / rhs)
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl core::ops::DivAssign<f32> for $name {
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = f32;
            fn index(&self, index: usize) -> &f32 {
                &self.data[index]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.data[index]
            }
        }

        impl From<[f32; $arity]> for $name {
            fn from(data: [f32; $arity]) -> Self {
                Self { data }
            }
        }

        impl From<$name> for [f32; $arity] {
            fn from(value: $name) -> Self {
                value.data
            }
        }

        impl TryFrom<&[f32]> for $name {
            type Error = crate::MathError;
            fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
                <[f32; $arity]>::try_from(slice)
                    .map(Self::from)
                    .map_err(|_| crate::MathError::LengthMismatch {
                        expected: $arity,
                        actual: slice.len(),
                    })
            }
        }
    };
}

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vector2;
pub use vec3::{cross, Vector3};
pub use vec4::Vector4;
