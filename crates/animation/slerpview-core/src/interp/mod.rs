//! Interpolation kernels.
//!
//! Quaternion nlerp/slerp with shortest-arc sign correction, per-axis Euler
//! blending with wrap-around, and plain linear helpers for positions.

pub mod functions;

pub use functions::{
    interpolate_euler, interpolate_quat, lerp_angle, lerp_f32, lerp_vec3, nlerp, slerp,
    wrap_angle, SLERP_PARALLEL_EPS,
};
