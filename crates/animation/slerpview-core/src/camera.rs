//! Orbit camera driven by per-frame input snapshots.

use std::f32::consts::FRAC_PI_2;

use nalgebra::{Point3, Vector3};

use crate::inputs::{InputEvent, InputFrame, MouseButton};
use crate::pose::Vec3;
use crate::render::Mat4;

/// Radians of orbit per pixel of cursor travel.
pub const ROTATE_SENSITIVITY: f32 = 0.01;
/// Distance change per scroll step.
pub const SCROLL_ZOOM: f32 = 0.8;
pub const MIN_DISTANCE: f32 = 0.1;
pub const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

const DEFAULT_PITCH: f32 = 0.4;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    dragging: bool,
    last_cursor: Option<[f64; 2]>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(1.0, [0.0, 0.0, 0.0])
    }
}

impl OrbitCamera {
    pub fn new(distance: f32, target: Vec3) -> Self {
        Self {
            target,
            distance: distance.max(MIN_DISTANCE),
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
            dragging: false,
            last_cursor: None,
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Orbit by a cursor delta in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * ROTATE_SENSITIVITY;
        self.pitch = (self.pitch + dy * ROTATE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive `delta` moves towards the target.
    pub fn change_distance(&mut self, delta: f32) {
        self.distance = (self.distance - delta).max(MIN_DISTANCE);
    }

    /// Consume one frame of input. Dragging with the primary button orbits;
    /// scrolling zooms. Clicks and scrolls are ignored while the UI has the
    /// mouse.
    pub fn apply_input(&mut self, frame: &InputFrame) {
        for event in &frame.events {
            match *event {
                InputEvent::CursorMoved { x, y } => {
                    if let (true, Some([px, py])) = (self.dragging, self.last_cursor) {
                        self.rotate((px - x) as f32, (py - y) as f32);
                    }
                    self.last_cursor = Some([x, y]);
                }
                InputEvent::MouseButton { button, pressed } => {
                    if frame.ui_wants_mouse {
                        continue;
                    }
                    self.dragging = button == MouseButton::Primary && pressed;
                }
                InputEvent::Scroll { dy, .. } => {
                    if frame.ui_wants_mouse {
                        continue;
                    }
                    self.change_distance(SCROLL_ZOOM * dy as f32);
                }
                InputEvent::Resized { .. } => {}
            }
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        [
            self.target[0] + self.distance * cp * sy,
            self.target[1] + self.distance * sp,
            self.target[2] + self.distance * cp * cy,
        ]
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        Mat4::look_at_rh(
            &Point3::new(eye[0], eye[1], eye[2]),
            &Point3::new(self.target[0], self.target[1], self.target[2]),
            &Vector3::y(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Primary,
            pressed,
        }
    }

    #[test]
    fn drag_orbits_only_while_pressed() {
        let mut cam = OrbitCamera::default();
        cam.apply_input(&InputFrame::new(vec![
            InputEvent::CursorMoved { x: 100.0, y: 100.0 },
            InputEvent::CursorMoved { x: 90.0, y: 100.0 },
        ]));
        assert_eq!(cam.yaw(), 0.0);

        cam.apply_input(&InputFrame::new(vec![
            press(true),
            InputEvent::CursorMoved { x: 80.0, y: 100.0 },
        ]));
        assert!((cam.yaw() - 10.0 * ROTATE_SENSITIVITY).abs() < 1e-6);

        cam.apply_input(&InputFrame::new(vec![
            press(false),
            InputEvent::CursorMoved { x: 0.0, y: 100.0 },
        ]));
        assert!((cam.yaw() - 10.0 * ROTATE_SENSITIVITY).abs() < 1e-6);
    }

    #[test]
    fn pitch_and_distance_are_clamped() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 1.0e6);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        cam.change_distance(100.0);
        assert_eq!(cam.distance(), MIN_DISTANCE);
    }

    #[test]
    fn ui_capture_blocks_clicks_and_scroll() {
        let mut cam = OrbitCamera::default();
        let frame = InputFrame {
            events: vec![press(true), InputEvent::Scroll { dx: 0.0, dy: 1.0 }],
            ui_wants_mouse: true,
        };
        cam.apply_input(&frame);
        assert!(!cam.is_dragging());
        assert_eq!(cam.distance(), 1.0);
    }

    #[test]
    fn view_maps_target_in_front_of_eye() {
        let cam = OrbitCamera::new(5.0, [1.0, 0.0, -2.0]);
        let v = cam.view_matrix() * nalgebra::Vector4::new(1.0, 0.0, -2.0, 1.0);
        assert!(v.x.abs() < 1e-4 && v.y.abs() < 1e-4);
        assert!((v.z + 5.0).abs() < 1e-4);
    }
}
