//! Per-scene animation state: start/end poses, duration, elapsed time and the
//! live pose, advanced once per frame.
//!
//! Phases:
//! - Idle: elapsed == 0, live pose == start
//! - Running: 0 < elapsed < duration
//! - Done: elapsed == duration, live pose == end; further updates are no-ops
//!
//! `start()` always returns to Idle.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::ComparisonConfig;
use crate::pose::{interpolate_pose, InterpMode, Orientation, Pose, Vec3};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Running,
    Done,
}

impl Phase {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Done => "done",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AnimationState {
    start: Pose,
    end: Pose,
    duration: f32,
    elapsed: f32,
    mode: InterpMode,
    current: Pose,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(InterpMode::default())
    }
}

impl AnimationState {
    /// Identity poses at the origin and zero duration.
    pub fn new(mode: InterpMode) -> Self {
        let pose = Pose::identity().in_mode(mode);
        Self {
            start: pose,
            end: pose,
            duration: 0.0,
            elapsed: 0.0,
            mode,
            current: pose,
        }
    }

    pub fn set_start_position(&mut self, position: Vec3) {
        self.start.position = position;
    }

    pub fn set_end_position(&mut self, position: Vec3) {
        self.end.position = position;
    }

    /// A degenerate quaternion is stored as identity.
    pub fn set_start_orientation(&mut self, orientation: impl Into<Orientation>) {
        self.start.orientation = sanitize(orientation.into());
    }

    pub fn set_end_orientation(&mut self, orientation: impl Into<Orientation>) {
        self.end.orientation = sanitize(orientation.into());
    }

    /// Non-finite durations are stored as zero, which disables `update`.
    pub fn set_duration(&mut self, duration: f32) {
        if duration.is_finite() {
            self.duration = duration;
        } else {
            warn!("ignoring non-finite duration {duration}; using 0");
            self.duration = 0.0;
        }
    }

    /// Takes effect on the next `update`/`sample_at`; the live pose is kept.
    pub fn set_mode(&mut self, mode: InterpMode) {
        self.mode = mode;
    }

    /// Pull positions, duration and the orientation representation matching
    /// this state's kind from a committed config. Quaternion-driven states
    /// also pick nlerp or slerp from `cfg.spherical`.
    pub fn configure(&mut self, cfg: &ComparisonConfig) {
        if self.mode.is_quaternion() {
            self.mode = cfg.quaternion_mode();
        }
        self.start = cfg.start.pose_for(self.mode);
        self.end = cfg.end.pose_for(self.mode);
        self.set_duration(cfg.duration);
    }

    /// Reset to Idle and snap the live pose to the start pose.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.current = self.start.in_mode(self.mode);
    }

    /// Advance by `dt` seconds and recompute the live pose.
    pub fn update(&mut self, dt: f32) {
        if self.duration <= 0.0 {
            return;
        }
        if !dt.is_finite() {
            warn!("ignoring non-finite frame delta {dt}");
            return;
        }
        if self.phase() == Phase::Done {
            return;
        }

        self.elapsed = (self.elapsed + dt).max(0.0);
        let alpha = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.current = self.sample_at(alpha);

        if let Orientation::Euler(e) = self.current.orientation {
            trace!(
                "interpolated euler angles: ({}, {}, {})",
                e.roll,
                e.pitch,
                e.yaw
            );
        }

        if alpha >= 1.0 {
            self.elapsed = self.duration;
            debug!(
                "{} interpolation finished after {}s",
                self.mode.name(),
                self.duration
            );
        }
    }

    /// Pose at an arbitrary progress value without touching the live state.
    pub fn sample_at(&self, alpha: f32) -> Pose {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        interpolate_pose(&self.start, &self.end, alpha, self.mode)
    }

    /// `intermediate_frames + 2` poses evenly spaced from start to end
    /// inclusive, for drawing the whole trajectory. Poses are computed lazily.
    pub fn samples(&self, intermediate_frames: u32) -> impl Iterator<Item = Pose> + '_ {
        let last = u64::from(intermediate_frames) + 1;
        (0..=last).map(move |i| self.sample_at(i as f32 / last as f32))
    }

    pub fn phase(&self) -> Phase {
        if self.duration > 0.0 && self.elapsed >= self.duration {
            Phase::Done
        } else if self.elapsed > 0.0 {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// Normalized progress in [0, 1]; 0 when the duration is not positive.
    pub fn alpha(&self) -> f32 {
        if self.duration <= 0.0 {
            0.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[inline]
    pub fn current(&self) -> &Pose {
        &self.current
    }

    #[inline]
    pub fn start_pose(&self) -> &Pose {
        &self.start
    }

    #[inline]
    pub fn end_pose(&self) -> &Pose {
        &self.end
    }

    #[inline]
    pub fn mode(&self) -> InterpMode {
        self.mode
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

fn sanitize(orientation: Orientation) -> Orientation {
    match orientation {
        Orientation::Quat(q) => Orientation::Quat(q.normalize_or_identity()),
        euler => euler,
    }
}
