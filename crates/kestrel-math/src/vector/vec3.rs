// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::Vector4;

/// Three-component `f32` vector.
///
/// * May represent a point or a direction depending on the caller;
///   [`crate::Transform::transform`] treats it as a point (`w = 1`) and
///   [`crate::Transform::transform_direction`] as a direction (`w = 0`).
/// * Laid out four components wide (16-byte alignment, one unnamed trailing
///   padding slot) so it shares a stride with [`Vector4`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 3]", into = "[f32; 3]")
)]
#[repr(C, align(16))]
pub struct Vector3 {
    data: [f32; 3],
}

impl Vector3 {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// First component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Second component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Third component.
    pub const fn z(self) -> f32 {
        self.data[2]
    }

    /// Appends `w`, producing a homogeneous [`Vector4`].
    pub const fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.data[0], self.data[1], self.data[2], w)
    }
}

impl_vector_ops!(Vector3, 3, 0, 1, 2);

/// Right-handed cross product.
///
/// # Examples
/// ```
/// use kestrel_math::{cross, Vector3};
/// assert_eq!(cross(Vector3::UNIT_X, Vector3::UNIT_Y), Vector3::UNIT_Z);
/// ```
pub const fn cross(lhs: Vector3, rhs: Vector3) -> Vector3 {
    let [ax, ay, az] = lhs.data;
    let [bx, by, bz] = rhs.data;
    Vector3::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
}
