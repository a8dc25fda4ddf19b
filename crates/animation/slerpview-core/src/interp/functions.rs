//! Interpolation helpers:
//! - lerp_f32 / lerp_vec3 (positions)
//! - wrap_angle / lerp_angle / interpolate_euler (per-axis, shortest way round)
//! - interpolate_quat (NLERP or SLERP with shortest-arc normalization)

use std::f32::consts::{PI, TAU};

use crate::euler::Euler;
use crate::pose::Vec3;
use crate::quat::Quat;

/// Below this value of `1 - |dot|` the inputs are treated as parallel and
/// slerp degrades to a normalized linear blend.
pub const SLERP_PARALLEL_EPS: f32 = 1e-5;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

/// Reduce an angle difference into [-π, π).
#[inline]
pub fn wrap_angle(delta: f32) -> f32 {
    (delta + PI).rem_euclid(TAU) - PI
}

/// Blend from `a0` towards `a1` along the shorter arc.
#[inline]
pub fn lerp_angle(a0: f32, a1: f32, t: f32) -> f32 {
    a0 + wrap_angle(a1 - a0) * t
}

/// Per-axis Euler interpolation. Each axis takes its own shortest arc, so the
/// path is not a geodesic on the rotation group.
pub fn interpolate_euler(e1: Euler, e2: Euler, alpha: f32) -> Euler {
    Euler::new(
        lerp_angle(e1.roll, e2.roll, alpha),
        lerp_angle(e1.pitch, e2.pitch, alpha),
        lerp_angle(e1.yaw, e2.yaw, alpha),
    )
}

/// Quaternion interpolation with shortest-arc correction.
///
/// If `q1 · q2 < 0` the second quaternion is negated before blending, so the
/// result never takes the long way around. With `spherical == false` the
/// components are blended linearly and renormalized (NLERP); otherwise the
/// blend follows the great arc at constant angular velocity (SLERP).
/// The result is always unit length; degenerate inputs count as identity.
pub fn interpolate_quat(q1: Quat, q2: Quat, alpha: f32, spherical: bool) -> Quat {
    let q1 = q1.normalize_or_identity();
    let mut q2 = q2.normalize_or_identity();

    let mut dot = q1.dot(q2);
    if dot < 0.0 {
        q2 = -q2;
        dot = -dot;
    }

    if !spherical || 1.0 - dot < SLERP_PARALLEL_EPS {
        return (q1 * (1.0 - alpha) + q2 * alpha).normalize();
    }

    let theta_0 = dot.clamp(-1.0, 1.0).acos();
    let theta = theta_0 * alpha;

    // Component of q2 orthogonal to q1.
    let q3 = (q2 - q1 * dot).normalize();

    let (s1, s0) = theta.sin_cos();
    (q1 * s0 + q3 * s1).normalize()
}

#[inline]
pub fn nlerp(q1: Quat, q2: Quat, t: f32) -> Quat {
    interpolate_quat(q1, q2, t, false)
}

#[inline]
pub fn slerp(q1: Quat, q2: Quat, t: f32) -> Quat {
    interpolate_quat(q1, q2, t, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_angle_range() {
        for d in [-7.0f32, -PI, -1.0, 0.0, 1.0, PI, 4.0, 12.5] {
            let w = wrap_angle(d);
            assert!((-PI..PI + 1e-6).contains(&w), "wrap({d}) = {w}");
            // Same angle modulo 2π.
            assert!((w - d).rem_euclid(TAU).min(TAU - (w - d).rem_euclid(TAU)) < 1e-4);
        }
    }

    #[test]
    fn zero_quaternion_input_counts_as_identity() {
        let zero = Quat::new(0.0, 0.0, 0.0, 0.0);
        let end = Quat::from_axis_angle([0.0, 1.0, 0.0], 1.0);
        for spherical in [false, true] {
            let q = interpolate_quat(zero, end, 0.01, spherical);
            assert!((q.norm() - 1.0).abs() < 1e-5);
            // Barely moved off identity rather than snapping to the end.
            assert!(q.angle_to(end) > 0.9, "{q:?}");
            let back = interpolate_quat(end, zero, 1.0, spherical);
            assert!(back.approx_eq_rotation(Quat::IDENTITY, 1e-5));
        }
    }

    #[test]
    fn half_turn_tie_wraps_to_negative_pi() {
        assert_eq!(wrap_angle(PI), -PI);
        assert_eq!(wrap_angle(-PI), -PI);
        // So an exact half-turn blend always goes the negative way round.
        assert_eq!(lerp_angle(0.0, PI, 0.5), -PI / 2.0);
    }

    #[test]
    fn lerp_angle_takes_short_way() {
        let a = lerp_angle(0.1, TAU - 0.1, 0.5);
        assert!(a.abs() < 1e-5, "{a}");
    }

    #[test]
    fn near_parallel_slerp_falls_back() {
        let q1 = Quat::from_axis_angle([0.0, 1.0, 0.0], 0.0);
        let q2 = Quat::from_axis_angle([0.0, 1.0, 0.0], 1e-4);
        let q = slerp(q1, q2, 0.5);
        assert!(q.is_finite());
        assert!((q.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn opposite_sign_inputs_take_short_path() {
        let q1 = Quat::from_axis_angle([0.0, 0.0, 1.0], 0.2);
        let q2 = -Quat::from_axis_angle([0.0, 0.0, 1.0], 0.6);
        for spherical in [false, true] {
            let q = interpolate_quat(q1, q2, 0.5, spherical);
            let expect = Quat::from_axis_angle([0.0, 0.0, 1.0], 0.4);
            assert!(q.approx_eq_rotation(expect, 1e-4), "{q:?}");
        }
    }
}
