// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use super::Vector3;

/// Four-component `f32` vector; the column type of [`crate::Matrix4x4`].
///
/// Also serves as a homogeneous coordinate: `w = 1` for points, `w = 0` for
/// directions.
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 4]", into = "[f32; 4]")
)]
#[repr(C, align(16))]
pub struct Vector4 {
    data: [f32; 4],
}

impl Vector4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
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

    /// Fourth (homogeneous) component.
    pub const fn w(self) -> f32 {
        self.data[3]
    }

    /// Drops `w` without dividing by it.
    pub const fn truncate(self) -> Vector3 {
        Vector3::new(self.data[0], self.data[1], self.data[2])
    }
}

impl_vector_ops!(Vector4, 4, 0, 1, 2, 3);
