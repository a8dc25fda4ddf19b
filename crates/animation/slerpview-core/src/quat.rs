//! Quaternion rotations.
//!
//! Component order is fixed to (w, x, y, z) everywhere in this crate: `w` is
//! the scalar part. Dot products, the Hamilton product, conversions and the
//! matrix export all read fields by name, never by position.

use std::ops::{Add, Mul, Neg, Sub};

use log::warn;
use nalgebra::{Matrix4, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::pose::Vec3;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// No rotation.
    pub const IDENTITY: Quat = Quat {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Norms below this carry no usable direction.
    pub const MIN_NORM: f32 = 1e-6;

    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Build from `[w, x, y, z]`.
    #[inline]
    pub const fn from_array(q: [f32; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }

    /// Export as `[w, x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Rotation of `angle` radians about `axis`. A zero axis yields identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len2 = axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2];
        if len2 <= 0.0 {
            return Self::IDENTITY;
        }
        let inv_len = len2.sqrt().recip();
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(
            c,
            axis[0] * inv_len * s,
            axis[1] * inv_len * s,
            axis[2] * inv_len * s,
        )
    }

    #[inline]
    pub fn dot(self, other: Quat) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn norm_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit length. Zero-length input is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let len2 = self.norm_squared();
        if len2 > 0.0 {
            self * len2.sqrt().recip()
        } else {
            self
        }
    }

    /// Zero-length (below [`Quat::MIN_NORM`]) or non-finite.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        !self.is_finite() || self.norm() < Self::MIN_NORM
    }

    /// Unit-length copy, or identity when `self` is degenerate.
    pub fn normalize_or_identity(self) -> Self {
        if self.is_degenerate() {
            warn!("degenerate quaternion {self:?} replaced by identity");
            Self::IDENTITY
        } else {
            self.normalize()
        }
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Rotation angle (radians, in [0, π]) taking `self` onto `other`.
    /// `q` and `-q` are treated as the same rotation.
    pub fn angle_to(self, other: Quat) -> f32 {
        let d = self.normalize().dot(other.normalize()).abs().min(1.0);
        2.0 * d.acos()
    }

    /// Component-wise comparison that accepts either sign of `other`.
    pub fn approx_eq_rotation(self, other: Quat, eps: f32) -> bool {
        let close = |a: Quat, b: Quat| {
            (a.w - b.w).abs() <= eps
                && (a.x - b.x).abs() <= eps
                && (a.y - b.y).abs() <= eps
                && (a.z - b.z).abs() <= eps
        };
        close(self, other) || close(self, -other)
    }

    /// Rotate a vector by this (unit) quaternion.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = [self.x, self.y, self.z];
        let t = cross(u, v).map(|c| 2.0 * c);
        let ut = cross(u, t);
        [
            v[0] + self.w * t[0] + ut[0],
            v[1] + self.w * t[1] + ut[1],
            v[2] + self.w * t[2] + ut[2],
        ]
    }

    /// Homogeneous 4x4 rotation matrix. Degenerate input maps to identity.
    pub fn to_matrix(self) -> Matrix4<f32> {
        if self.norm_squared() <= 0.0 || !self.is_finite() {
            return Matrix4::identity();
        }
        UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(
            self.w, self.x, self.y, self.z,
        ))
        .to_homogeneous()
    }
}

#[inline]
fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

impl Add for Quat {
    type Output = Quat;
    #[inline]
    fn add(self, rhs: Quat) -> Quat {
        Quat::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Sub for Quat {
    type Output = Quat;
    #[inline]
    fn sub(self, rhs: Quat) -> Quat {
        Quat::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Neg for Quat {
    type Output = Quat;
    #[inline]
    fn neg(self) -> Quat {
        Quat::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Quat {
    type Output = Quat;
    #[inline]
    fn mul(self, s: f32) -> Quat {
        Quat::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl Mul<Quat> for Quat {
    type Output = Quat;
    fn mul(self, b: Quat) -> Quat {
        let a = self;
        Quat::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}
