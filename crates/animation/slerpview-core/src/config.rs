//! Committed comparison configuration.
//!
//! The control panel owns transient edit buffers; once the user starts an
//! interpolation the buffers are committed into this struct and handed to
//! the scenes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::euler::Euler;
use crate::pose::{InterpMode, Orientation, Pose, Vec3};
use crate::quat::Quat;

/// One endpoint of the animation, carrying both rotation representations.
/// The quaternion scene reads `quat`, the Euler scene reads `euler`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    pub position: Vec3,
    pub euler: Euler,
    pub quat: Quat,
}

impl PoseConfig {
    /// Both representations derived from one Euler triple.
    pub fn from_euler(position: Vec3, euler: Euler) -> Self {
        Self {
            position,
            euler,
            quat: euler.to_quat(),
        }
    }

    /// Both representations derived from one quaternion.
    pub fn from_quat(position: Vec3, quat: Quat) -> Self {
        let quat = quat.normalize();
        Self {
            position,
            euler: Euler::from_quat(quat),
            quat,
        }
    }

    pub fn orientation_for(&self, mode: InterpMode) -> Orientation {
        if mode.is_quaternion() {
            Orientation::Quat(self.quat.normalize())
        } else {
            Orientation::Euler(self.euler)
        }
    }

    pub fn pose_for(&self, mode: InterpMode) -> Pose {
        Pose {
            position: self.position,
            orientation: self.orientation_for(mode),
        }
    }

    fn validate(&self, fields: &EndpointFields) -> Result<(), ConfigError> {
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NonFinite {
                field: fields.position,
            });
        }
        if !self.euler.is_finite() {
            return Err(ConfigError::NonFinite {
                field: fields.euler,
            });
        }
        if !self.quat.is_finite() {
            return Err(ConfigError::NonFinite { field: fields.quat });
        }
        if self.quat.norm() < Quat::MIN_NORM {
            return Err(ConfigError::DegenerateQuaternion { field: fields.quat });
        }
        Ok(())
    }
}

/// Field names reported in validation errors.
struct EndpointFields {
    position: &'static str,
    euler: &'static str,
    quat: &'static str,
}

const START_FIELDS: EndpointFields = EndpointFields {
    position: "start.position",
    euler: "start.euler",
    quat: "start.quat",
};

const END_FIELDS: EndpointFields = EndpointFields {
    position: "end.position",
    euler: "end.euler",
    quat: "end.quat",
};

/// Configuration consumed by both scenes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub start: PoseConfig,
    pub end: PoseConfig,
    /// Interpolation duration in seconds.
    pub duration: f32,
    /// Slerp instead of nlerp for the quaternion scene.
    pub spherical: bool,
    /// Draw the whole trajectory, not just the live cursor.
    pub show_all_frames: bool,
    /// Extra samples between start and end when `show_all_frames` is set.
    pub intermediate_frames: u32,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            start: PoseConfig::default(),
            end: PoseConfig::default(),
            duration: 5.0,
            spherical: false,
            show_all_frames: false,
            intermediate_frames: 0,
        }
    }
}

impl ComparisonConfig {
    /// Decode and validate a JSON config. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: ComparisonConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ConfigError::InvalidDuration {
                duration: self.duration,
            });
        }
        self.start.validate(&START_FIELDS)?;
        self.end.validate(&END_FIELDS)?;
        Ok(())
    }

    /// Quaternion-scene mode selected by the `spherical` flag.
    #[inline]
    pub fn quaternion_mode(&self) -> InterpMode {
        InterpMode::quaternion(self.spherical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let cfg = ComparisonConfig::from_json(r#"{ "duration": 2.0 }"#).unwrap();
        assert_eq!(cfg.duration, 2.0);
        assert_eq!(cfg.start.quat, Quat::IDENTITY);
        assert_eq!(cfg.intermediate_frames, 0);
        assert!(!cfg.spherical);
    }

    #[test]
    fn rejects_negative_duration() {
        let err = ComparisonConfig::from_json(r#"{ "duration": -1.0 }"#).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDuration { duration: -1.0 });
    }

    #[test]
    fn rejects_zero_quaternion() {
        let text = r#"{ "end": { "quat": { "w": 0.0, "x": 0.0, "y": 0.0, "z": 0.0 } } }"#;
        let err = ComparisonConfig::from_json(text).unwrap_err();
        assert_eq!(err, ConfigError::DegenerateQuaternion { field: "end.quat" });
    }

    #[test]
    fn rejects_non_finite_position() {
        let mut cfg = ComparisonConfig::default();
        cfg.start.position[1] = f32::NAN;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonFinite {
                field: "start.position"
            })
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ComparisonConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let mut cfg = ComparisonConfig::default();
        cfg.end = PoseConfig::from_euler([1.0, 2.0, 3.0], Euler::new(0.1, 0.2, 0.3));
        cfg.intermediate_frames = 4;
        let back = ComparisonConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }
}
