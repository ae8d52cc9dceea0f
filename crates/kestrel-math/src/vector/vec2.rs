// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

/// Two-component `f32` vector, 8-byte aligned.
///
/// Used for planar points; [`crate::Transform::transform`] lifts it to the
/// homogeneous point `(x, y, 0, 1)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 2]", into = "[f32; 2]")
)]
#[repr(C, align(8))]
pub struct Vector2 {
    data: [f32; 2],
}

impl Vector2 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// First component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Second component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }
}

impl_vector_ops!(Vector2, 2, 0, 1);
