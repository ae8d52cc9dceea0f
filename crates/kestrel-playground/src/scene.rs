// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The `scene` config document: a transform pipeline plus sample points.
//!
//! Stored as JSON, for example:
//! ```json
//! {
//!   "pipeline": [
//!     { "op": "translate", "offset": [1.0, 0.0, 0.0] },
//!     { "op": "rotate_z", "degrees": 90.0 }
//!   ],
//!   "points": [[0.0, 0.0, 0.0]]
//! }
//! ```

use kestrel_math::scalar::deg_to_rad;
use kestrel_math::{Transform, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Config key the scene is stored under.
pub const SCENE_KEY: &str = "scene";

/// One named transform builder. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformStep {
    /// [`Transform::translation`].
    Translate {
        /// Offset added to points.
        offset: Vector3,
    },
    /// [`Transform::scale`].
    Scale {
        /// Per-axis factors.
        factors: Vector3,
    },
    /// [`Transform::uniform_scale`].
    UniformScale {
        /// Factor applied to every axis.
        factor: f32,
    },
    /// [`Transform::euler_rotation_x`].
    RotateX {
        /// Angle in degrees.
        degrees: f32,
    },
    /// [`Transform::euler_rotation_y`].
    RotateY {
        /// Angle in degrees.
        degrees: f32,
    },
    /// [`Transform::euler_rotation_z`].
    RotateZ {
        /// Angle in degrees.
        degrees: f32,
    },
    /// [`Transform::orthographic`].
    Orthographic {
        /// Box corner mapped to `(-1, -1, -1)`.
        min: Vector3,
        /// Box corner mapped to `(1, 1, 1)`.
        max: Vector3,
    },
}

impl TransformStep {
    /// Builds the transform this step names.
    pub fn to_transform(&self) -> Transform {
        match *self {
            Self::Translate { offset } => Transform::translation(offset),
            Self::Scale { factors } => Transform::scale(factors),
            Self::UniformScale { factor } => Transform::uniform_scale(factor),
            Self::RotateX { degrees } => Transform::euler_rotation_x(deg_to_rad(degrees)),
            Self::RotateY { degrees } => Transform::euler_rotation_y(deg_to_rad(degrees)),
            Self::RotateZ { degrees } => Transform::euler_rotation_z(deg_to_rad(degrees)),
            Self::Orthographic { min, max } => Transform::orthographic(min, max),
        }
    }
}

/// Pipeline steps applied in order, and the points to push through them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Steps, first applied first.
    #[serde(default)]
    pub pipeline: Vec<TransformStep>,
    /// Sample points.
    #[serde(default)]
    pub points: Vec<Vector3>,
}

impl SceneConfig {
    /// Composes the pipeline into one transform; empty pipelines are the identity.
    pub fn build_transform(&self) -> Transform {
        self.pipeline
            .iter()
            .fold(Transform::identity(), |acc, step| acc >> step.to_transform())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            pipeline: vec![
                TransformStep::Translate {
                    offset: Vector3::new(1.0, 0.0, 0.0),
                },
                TransformStep::RotateZ { degrees: 90.0 },
                TransformStep::UniformScale { factor: 2.0 },
            ],
            points: vec![
                Vector3::zero(),
                Vector3::new(1.0, 1.0, 1.0),
                Vector3::UNIT_Y,
            ],
        }
    }
}

/// Loads the stored scene, or falls back to [`SceneConfig::default`].
///
/// With `save_default`, a missing scene is written back so it can be edited.
pub fn load_or_default<S: ConfigStore>(
    service: &ConfigService<S>,
    save_default: bool,
) -> Result<SceneConfig, ConfigError> {
    if let Some(scene) = service.load::<SceneConfig>(SCENE_KEY)? {
        debug!(steps = scene.pipeline.len(), points = scene.points.len(), "loaded stored scene");
        return Ok(scene);
    }
    let scene = SceneConfig::default();
    if save_default {
        service.save(SCENE_KEY, &scene)?;
        info!("no stored scene; wrote the built-in default");
    } else {
        info!("no stored scene; using the built-in default");
    }
    Ok(scene)
}

/// True when every component of `point` is finite.
pub fn is_finite(point: Vector3) -> bool {
    point.to_array().iter().all(|c| c.is_finite())
}
