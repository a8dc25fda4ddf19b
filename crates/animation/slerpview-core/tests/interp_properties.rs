use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use slerpview_core::interp::{lerp_angle, wrap_angle};
use slerpview_core::{
    euler_to_quat, interpolate_euler, interpolate_quat, nlerp, quat_to_euler, slerp, Euler, Quat,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn rot(axis: [f32; 3], angle: f32) -> Quat {
    Quat::from_axis_angle(axis, angle)
}

fn sample_pairs() -> Vec<(Quat, Quat)> {
    vec![
        (Quat::IDENTITY, rot([0.0, 1.0, 0.0], FRAC_PI_2)),
        (rot([1.0, 0.0, 0.0], 0.3), rot([0.0, 0.0, 1.0], 2.9)),
        (rot([1.0, 1.0, 0.0], -1.2), rot([0.0, 1.0, 1.0], 3.1)),
        // Opposite hemispheres of the same rotation.
        (rot([0.0, 0.0, 1.0], 0.7), -rot([0.0, 0.0, 1.0], 0.7)),
        // Unnormalized inputs.
        (Quat::new(2.0, 0.0, 0.0, 0.0), Quat::new(0.0, 3.0, 0.0, 0.0)),
    ]
}

#[test]
fn quaternion_results_are_unit_length() {
    for (a, b) in sample_pairs() {
        for spherical in [false, true] {
            for i in 0..=20 {
                let t = i as f32 / 20.0;
                let q = interpolate_quat(a, b, t, spherical);
                approx(q.norm(), 1.0, 1e-5);
            }
        }
    }
}

#[test]
fn endpoints_are_reproduced_up_to_sign() {
    for (a, b) in sample_pairs() {
        for spherical in [false, true] {
            let q0 = interpolate_quat(a, b, 0.0, spherical);
            let q1 = interpolate_quat(a, b, 1.0, spherical);
            assert!(q0.approx_eq_rotation(a.normalize(), 1e-5), "{q0:?} vs {a:?}");
            assert!(q1.approx_eq_rotation(b.normalize(), 1e-4), "{q1:?} vs {b:?}");
        }
    }
}

#[test]
fn identical_inputs_stay_put() {
    let q = rot([0.2, -0.5, 0.8], 1.3);
    for t in [0.0, 0.25, 0.5, 1.0] {
        assert!(slerp(q, q, t).approx_eq_rotation(q, 1e-5));
        assert!(nlerp(q, q, t).approx_eq_rotation(q, 1e-5));
    }
}

#[test]
fn slerp_has_constant_angular_velocity() {
    let a = rot([0.0, 1.0, 0.0], 0.0);
    let b = rot([0.0, 1.0, 0.0], 2.4);
    let total = a.angle_to(b);
    let mut prev = 0.0;
    for i in 1..=10 {
        let t = i as f32 / 10.0;
        let swept = a.angle_to(slerp(a, b, t));
        approx(swept, total * t, 1e-3);
        assert!(swept >= prev);
        prev = swept;
    }
}

#[test]
fn nlerp_is_not_constant_speed_but_lands_on_the_same_midpoint() {
    let a = Quat::IDENTITY;
    let b = rot([0.0, 0.0, 1.0], 2.4);
    // Symmetric blend: same midpoint for both.
    assert!(nlerp(a, b, 0.5).approx_eq_rotation(slerp(a, b, 0.5), 1e-5));
    // Off-centre the linear blend lags behind near the ends.
    let n = a.angle_to(nlerp(a, b, 0.25));
    let s = a.angle_to(slerp(a, b, 0.25));
    assert!(n < s, "nlerp={n} slerp={s}");
}

#[test]
fn quaternion_blend_takes_the_short_arc() {
    let a = rot([0.0, 1.0, 0.0], 0.1);
    let b = -rot([0.0, 1.0, 0.0], 0.5);
    let mid = slerp(a, b, 0.5);
    assert!(mid.approx_eq_rotation(rot([0.0, 1.0, 0.0], 0.3), 1e-5));
}

#[test]
fn quarter_turn_midpoint_is_eighth_turn() {
    let q = slerp(Quat::IDENTITY, rot([0.0, 1.0, 0.0], FRAC_PI_2), 0.5);
    assert!(q.approx_eq_rotation(rot([0.0, 1.0, 0.0], FRAC_PI_4), 1e-5));
}

#[test]
fn wrap_angle_stays_in_half_open_range() {
    for i in -40..=40 {
        let d = i as f32 * 0.37;
        let w = wrap_angle(d);
        assert!(w >= -PI - 1e-6 && w < PI + 1e-6, "wrap({d}) = {w}");
    }
}

#[test]
fn euler_blend_wraps_across_the_seam() {
    let start = Euler::from_degrees(0.0, 0.0, 170.0);
    let end = Euler::from_degrees(0.0, 0.0, -170.0);
    let mid = interpolate_euler(start, end, 0.5);
    approx(mid.yaw.abs(), PI, 1e-4);
    approx(mid.roll, 0.0, 1e-6);

    // A quarter of the way along is 175°, not 85°.
    approx(
        lerp_angle(start.yaw, end.yaw, 0.25),
        175f32.to_radians(),
        1e-4,
    );
}

#[test]
fn euler_blend_endpoints_match_modulo_full_turns() {
    let start = Euler::new(0.4, -1.0, 2.5);
    let end = Euler::new(-2.8, 0.9, -2.6);
    let e1 = interpolate_euler(start, end, 1.0);
    for (got, want) in e1.to_array().into_iter().zip(end.to_array()) {
        approx(wrap_angle(got - want), 0.0, 1e-5);
    }
}

#[test]
fn euler_quaternion_round_trip_away_from_gimbal_lock() {
    for (r, p, y) in [(0.3, -0.4, 0.5), (-2.0, 1.2, 3.0), (1.0, 0.0, -1.0)] {
        let q = euler_to_quat(r, p, y);
        approx(q.norm(), 1.0, 1e-6);
        let e = quat_to_euler(q);
        approx(e.roll, r, 1e-4);
        approx(e.pitch, p, 1e-4);
        approx(e.yaw, y, 1e-4);
    }
}

#[test]
fn gimbal_lock_pitch_is_clamped() {
    let e = quat_to_euler(euler_to_quat(0.5, FRAC_PI_2, 0.0));
    assert!(e.pitch.is_finite());
    approx(e.pitch, FRAC_PI_2, 2e-3);
    let e = quat_to_euler(euler_to_quat(0.0, -FRAC_PI_2, 0.5));
    approx(e.pitch, -FRAC_PI_2, 2e-3);
}
