//! Euler angles and the quaternion <-> Euler transcription.
//!
//! Convention: Tait-Bryan ZYX. `roll` rotates about X, `pitch` about Y and
//! `yaw` about Z, composed as `Rz(yaw) * Ry(pitch) * Rx(roll)`.

use std::f32::consts::FRAC_PI_2;

use nalgebra::{Matrix4, Rotation3};
use serde::{Deserialize, Serialize};

use crate::quat::Quat;

/// Euler triple in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Euler {
    /// Rotation about the x-axis.
    pub roll: f32,
    /// Rotation about the y-axis.
    pub pitch: f32,
    /// Rotation about the z-axis.
    pub yaw: f32,
}

impl Euler {
    pub const ZERO: Euler = Euler {
        roll: 0.0,
        pitch: 0.0,
        yaw: 0.0,
    };

    #[inline]
    pub const fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Build from `[roll, pitch, yaw]`.
    #[inline]
    pub const fn from_array(e: [f32; 3]) -> Self {
        Self::new(e[0], e[1], e[2])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.roll, self.pitch, self.yaw]
    }

    pub fn from_degrees(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::new(roll.to_radians(), pitch.to_radians(), yaw.to_radians())
    }

    pub fn is_finite(self) -> bool {
        self.roll.is_finite() && self.pitch.is_finite() && self.yaw.is_finite()
    }

    #[inline]
    pub fn to_quat(self) -> Quat {
        euler_to_quat(self.roll, self.pitch, self.yaw)
    }

    #[inline]
    pub fn from_quat(q: Quat) -> Self {
        quat_to_euler(q)
    }

    /// Homogeneous rotation matrix `Rz(yaw) * Ry(pitch) * Rx(roll)`.
    pub fn to_matrix(self) -> Matrix4<f32> {
        Rotation3::from_euler_angles(self.roll, self.pitch, self.yaw).to_homogeneous()
    }
}

/// Half-angle product formula. The result is unit length analytically and is
/// renormalized to absorb rounding.
pub fn euler_to_quat(roll: f32, pitch: f32, yaw: f32) -> Quat {
    let (sr, cr) = (roll * 0.5).sin_cos();
    let (sp, cp) = (pitch * 0.5).sin_cos();
    let (sy, cy) = (yaw * 0.5).sin_cos();
    Quat::new(
        cr * cp * cy + sr * sp * sy,
        sr * cp * cy - cr * sp * sy,
        cr * sp * cy + sr * cp * sy,
        cr * cp * sy - sr * sp * cy,
    )
    .normalize()
}

/// Extract (roll, pitch, yaw). At the gimbal-lock boundary the pitch snaps to
/// ±π/2 instead of feeding an out-of-domain value to `asin`.
pub fn quat_to_euler(q: Quat) -> Euler {
    let Quat { w, x, y, z } = q.normalize();

    let sinr_cosp = 2.0 * (w * x + y * z);
    let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
    let roll = sinr_cosp.atan2(cosr_cosp);

    let sinp = 2.0 * (w * y - z * x);
    let pitch = if sinp.abs() >= 1.0 {
        FRAC_PI_2.copysign(sinp)
    } else {
        sinp.asin()
    };

    let siny_cosp = 2.0 * (w * z + x * y);
    let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
    let yaw = siny_cosp.atan2(cosy_cosp);

    Euler::new(roll, pitch, yaw)
}
