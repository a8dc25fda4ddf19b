//! Control panel model.
//!
//! Holds the editable fields the UI widgets bind to. Editing one rotation
//! representation transcribes the other so both stay consistent; nothing
//! reaches the scenes until [`ControlPanel::commit`].

use crate::config::{ComparisonConfig, PoseConfig};
use crate::error::ConfigError;
use crate::euler::{euler_to_quat, quat_to_euler, Euler};
use crate::quat::Quat;

/// Raw widget buffers. Quaternions are `[w, x, y, z]`, Euler triples are
/// `[roll, pitch, yaw]` in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPanel {
    pub start_position: [f32; 3],
    pub start_euler: [f32; 3],
    pub start_quat: [f32; 4],
    pub end_position: [f32; 3],
    pub end_euler: [f32; 3],
    pub end_quat: [f32; 4],
    pub duration: f32,
    pub spherical: bool,
    pub show_all_frames: bool,
    /// Signed like the integer widget; negative values commit as 0.
    pub intermediate_frames: i32,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::from_config(&ComparisonConfig::default())
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the buffers from a committed config.
    pub fn from_config(cfg: &ComparisonConfig) -> Self {
        Self {
            start_position: cfg.start.position,
            start_euler: cfg.start.euler.to_array(),
            start_quat: cfg.start.quat.to_array(),
            end_position: cfg.end.position,
            end_euler: cfg.end.euler.to_array(),
            end_quat: cfg.end.quat.to_array(),
            duration: cfg.duration,
            spherical: cfg.spherical,
            show_all_frames: cfg.show_all_frames,
            intermediate_frames: i32::try_from(cfg.intermediate_frames).unwrap_or(i32::MAX),
        }
    }

    pub fn edit_start_euler(&mut self, euler: [f32; 3]) {
        self.start_euler = euler;
        self.start_quat = euler_to_quat(euler[0], euler[1], euler[2]).to_array();
    }

    pub fn edit_end_euler(&mut self, euler: [f32; 3]) {
        self.end_euler = euler;
        self.end_quat = euler_to_quat(euler[0], euler[1], euler[2]).to_array();
    }

    /// The raw entry is kept as typed; the Euler buffer gets the angles of
    /// its normalized form.
    pub fn edit_start_quat(&mut self, quat: [f32; 4]) {
        self.start_quat = quat;
        self.start_euler = quat_to_euler(Quat::from_array(quat)).to_array();
    }

    pub fn edit_end_quat(&mut self, quat: [f32; 4]) {
        self.end_quat = quat;
        self.end_euler = quat_to_euler(Quat::from_array(quat)).to_array();
    }

    /// Normalize the quaternion buffers in place, validate, and produce the
    /// config handed to the scenes. On error the buffers are left untouched.
    pub fn commit(&mut self) -> Result<ComparisonConfig, ConfigError> {
        let frames = self.intermediate_frames.max(0);
        let cfg = ComparisonConfig {
            start: PoseConfig {
                position: self.start_position,
                euler: Euler::from_array(self.start_euler),
                quat: Quat::from_array(self.start_quat).normalize(),
            },
            end: PoseConfig {
                position: self.end_position,
                euler: Euler::from_array(self.end_euler),
                quat: Quat::from_array(self.end_quat).normalize(),
            },
            duration: self.duration,
            spherical: self.spherical,
            show_all_frames: self.show_all_frames,
            intermediate_frames: frames as u32,
        };
        cfg.validate()?;

        self.start_quat = cfg.start.quat.to_array();
        self.end_quat = cfg.end.quat.to_array();
        self.intermediate_frames = frames;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn euler_edit_transcribes_quaternion() {
        let mut p = ControlPanel::new();
        p.edit_start_euler([0.0, FRAC_PI_2, 0.0]);
        let q = Quat::from_array(p.start_quat);
        assert!(q.approx_eq_rotation(Quat::from_axis_angle([0.0, 1.0, 0.0], FRAC_PI_2), 1e-6));
    }

    #[test]
    fn quaternion_edit_transcribes_euler_from_normalized_copy() {
        let mut p = ControlPanel::new();
        let q = Quat::from_axis_angle([0.0, 0.0, 1.0], 0.5) * 3.0;
        p.edit_end_quat(q.to_array());
        assert_eq!(p.end_quat, q.to_array());
        assert!((p.end_euler[2] - 0.5).abs() < 1e-5);
        assert!(p.end_euler[0].abs() < 1e-6 && p.end_euler[1].abs() < 1e-6);
    }

    #[test]
    fn commit_normalizes_and_clamps() {
        let mut p = ControlPanel::new();
        p.edit_start_quat([2.0, 0.0, 0.0, 0.0]);
        p.intermediate_frames = -3;
        let cfg = p.commit().unwrap();
        assert_eq!(cfg.start.quat, Quat::IDENTITY);
        assert_eq!(p.start_quat, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cfg.intermediate_frames, 0);
        assert_eq!(p.intermediate_frames, 0);
    }

    #[test]
    fn commit_rejects_zero_quaternion_without_touching_buffers() {
        let mut p = ControlPanel::new();
        p.end_quat = [0.0; 4];
        p.intermediate_frames = -1;
        let err = p.commit().unwrap_err();
        assert_eq!(err, ConfigError::DegenerateQuaternion { field: "end.quat" });
        assert_eq!(p.intermediate_frames, -1);
    }

    #[test]
    fn from_config_seeds_buffers() {
        let mut cfg = ComparisonConfig::default();
        cfg.duration = 1.5;
        cfg.intermediate_frames = 7;
        let p = ControlPanel::from_config(&cfg);
        assert_eq!(p.duration, 1.5);
        assert_eq!(p.intermediate_frames, 7);
        assert_eq!(p.start_quat, [1.0, 0.0, 0.0, 0.0]);
    }
}
