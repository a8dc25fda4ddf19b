//! Per-tick signals for hosts (status line, logging, UI highlighting).

use serde::{Deserialize, Serialize};

use crate::pose::InterpMode;

/// The two side-by-side scenes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    /// Left half, driven by nlerp or slerp.
    Quaternion,
    /// Right half, driven by per-axis Euler blending.
    Euler,
}

impl SceneId {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            SceneId::Quaternion => "quaternion",
            SceneId::Euler => "euler",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SceneEvent {
    Started { scene: SceneId, mode: InterpMode },
    Finished { scene: SceneId, duration: f32 },
}
