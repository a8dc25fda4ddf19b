//! slerpview core (engine-agnostic)
//!
//! Side-by-side comparison of quaternion interpolation (nlerp / slerp) and
//! per-axis Euler interpolation for a 3D cursor gizmo moving between two
//! poses. This crate holds the math, the per-scene animation state, the
//! control panel model, camera/input handling and the render contract.
//! Windowing, GPU resources and UI widgets live in the host, behind
//! [`Renderer`] and [`Clock`].

pub mod animation;
pub mod camera;
pub mod clock;
pub mod comparison;
pub mod config;
pub mod error;
pub mod euler;
pub mod inputs;
pub mod interp;
pub mod mesh;
pub mod outputs;
pub mod panel;
pub mod pose;
pub mod quat;
pub mod render;
pub mod scene;

// Re-exports for consumers (hosts)
pub use animation::{AnimationState, Phase};
pub use camera::OrbitCamera;
pub use clock::{Clock, FixedClock, FrameClock};
pub use comparison::{split_viewports, Comparison};
pub use config::{ComparisonConfig, PoseConfig};
pub use error::ConfigError;
pub use euler::{euler_to_quat, quat_to_euler, Euler};
pub use inputs::{InputEvent, InputFrame, InputQueue, MouseButton};
pub use interp::{interpolate_euler, interpolate_quat, nlerp, slerp};
pub use mesh::{cursor_mesh, ground_grid, Mesh};
pub use outputs::{SceneEvent, SceneId};
pub use panel::ControlPanel;
pub use pose::{interpolate_pose, InterpMode, Orientation, Pose, Vec3};
pub use quat::Quat;
pub use render::{
    DrawCommand, Mat4, MeshKind, Primitive, RecordingRenderer, Renderer, Rgba, ShaderKind,
    Viewport,
};
pub use scene::{Cursor, Ground, Scene};
