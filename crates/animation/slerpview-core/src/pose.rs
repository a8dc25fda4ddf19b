//! Poses: a position plus an orientation in either representation.

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

use crate::euler::Euler;
use crate::interp::functions::{interpolate_euler, interpolate_quat, lerp_vec3};
use crate::quat::Quat;

/// Position / generic 3-vector.
pub type Vec3 = [f32; 3];

/// Orientation kept in the representation its scene animates in.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Orientation {
    Quat(Quat),
    Euler(Euler),
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Quat(Quat::IDENTITY)
    }
}

impl From<Quat> for Orientation {
    fn from(q: Quat) -> Self {
        Orientation::Quat(q)
    }
}

impl From<Euler> for Orientation {
    fn from(e: Euler) -> Self {
        Orientation::Euler(e)
    }
}

impl Orientation {
    pub fn to_quat(self) -> Quat {
        match self {
            Orientation::Quat(q) => q.normalize_or_identity(),
            Orientation::Euler(e) => e.to_quat(),
        }
    }

    pub fn to_euler(self) -> Euler {
        match self {
            Orientation::Quat(q) => Euler::from_quat(q),
            Orientation::Euler(e) => e,
        }
    }

    /// Re-express in the representation `mode` interpolates in.
    pub fn in_mode(self, mode: InterpMode) -> Orientation {
        if mode.is_quaternion() {
            Orientation::Quat(self.to_quat())
        } else {
            Orientation::Euler(self.to_euler())
        }
    }

    pub fn to_matrix(self) -> Matrix4<f32> {
        match self {
            Orientation::Quat(q) => q.to_matrix(),
            Orientation::Euler(e) => e.to_matrix(),
        }
    }
}

/// Which interpolator drives a scene.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterpMode {
    /// Per-axis Euler blending with wrap-around.
    Euler,
    /// Normalized linear quaternion blend.
    #[default]
    Nlerp,
    /// Spherical linear quaternion blend.
    Slerp,
}

impl InterpMode {
    /// Quaternion mode selected by the panel's "spherical" flag.
    #[inline]
    pub fn quaternion(spherical: bool) -> Self {
        if spherical {
            InterpMode::Slerp
        } else {
            InterpMode::Nlerp
        }
    }

    #[inline]
    pub fn is_quaternion(self) -> bool {
        matches!(self, InterpMode::Nlerp | InterpMode::Slerp)
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            InterpMode::Euler => "euler",
            InterpMode::Nlerp => "nlerp",
            InterpMode::Slerp => "slerp",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(position: Vec3, orientation: impl Into<Orientation>) -> Self {
        Self {
            position,
            orientation: orientation.into(),
        }
    }

    /// Origin, no rotation.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn in_mode(self, mode: InterpMode) -> Self {
        Self {
            position: self.position,
            orientation: self.orientation.in_mode(mode),
        }
    }
}

/// Blend two poses. Position is always linear; the orientation uses the
/// interpolator selected by `mode`, converting inputs to its representation
/// first.
pub fn interpolate_pose(start: &Pose, end: &Pose, alpha: f32, mode: InterpMode) -> Pose {
    let position = lerp_vec3(start.position, end.position, alpha);
    let orientation = match mode {
        InterpMode::Euler => Orientation::Euler(interpolate_euler(
            start.orientation.to_euler(),
            end.orientation.to_euler(),
            alpha,
        )),
        InterpMode::Nlerp | InterpMode::Slerp => Orientation::Quat(interpolate_quat(
            start.orientation.to_quat(),
            end.orientation.to_quat(),
            alpha,
            mode == InterpMode::Slerp,
        )),
    };
    Pose {
        position,
        orientation,
    }
}
