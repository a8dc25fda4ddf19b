//! Split-screen driver: the quaternion scene on the left half of the window,
//! the Euler scene on the right, sharing one orbit camera.
//!
//! Per frame: `tick` (input, then both scenes advance by `dt`) followed by
//! `render`. `frame` does both with a [`Clock`].

use std::f32::consts::FRAC_PI_4;

use log::{debug, info};

use crate::animation::Phase;
use crate::camera::OrbitCamera;
use crate::clock::Clock;
use crate::config::ComparisonConfig;
use crate::inputs::{InputEvent, InputFrame};
use crate::outputs::SceneEvent;
use crate::render::{perspective, Renderer, Viewport};
use crate::scene::Scene;

pub const FOVY: f32 = FRAC_PI_4;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Left and right halves of a `width` x `height` framebuffer. The right half
/// takes the odd pixel.
pub fn split_viewports(width: u32, height: u32) -> (Viewport, Viewport) {
    let half = width / 2;
    (
        Viewport::new(0, 0, half, height),
        Viewport::new(half, 0, width - half, height),
    )
}

#[derive(Debug)]
pub struct Comparison {
    quat_scene: Scene,
    euler_scene: Scene,
    pub camera: OrbitCamera,
    width: u32,
    height: u32,
    show_all_frames: bool,
    intermediate_frames: u32,
}

impl Comparison {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            quat_scene: Scene::quaternion(),
            euler_scene: Scene::euler(),
            camera: OrbitCamera::default(),
            width,
            height,
            show_all_frames: false,
            intermediate_frames: 0,
        }
    }

    /// Push a committed config into both scenes and start them.
    pub fn apply(&mut self, cfg: &ComparisonConfig) -> Vec<SceneEvent> {
        self.show_all_frames = cfg.show_all_frames;
        self.intermediate_frames = cfg.intermediate_frames;

        let mut events = Vec::with_capacity(2);
        for scene in [&mut self.quat_scene, &mut self.euler_scene] {
            scene.state.configure(cfg);
            scene.state.start();
            events.push(SceneEvent::Started {
                scene: scene.id(),
                mode: scene.state.mode(),
            });
        }
        info!(
            "started comparison: duration={}s quaternion={} show_all_frames={} intermediate_frames={}",
            cfg.duration,
            self.quat_scene.state.mode().name(),
            cfg.show_all_frames,
            cfg.intermediate_frames
        );
        events
    }

    /// Consume input and advance both scenes by `dt` seconds. Returns a
    /// `Finished` event for each scene that reached its end on this tick.
    pub fn tick(&mut self, dt: f32, input: &InputFrame) -> Vec<SceneEvent> {
        for event in &input.events {
            if let InputEvent::Resized { width, height } = *event {
                self.resize(width, height);
            }
        }
        self.camera.apply_input(input);

        let mut events = Vec::new();
        for scene in [&mut self.quat_scene, &mut self.euler_scene] {
            let before = scene.state.phase();
            scene.state.update(dt);
            if before != Phase::Done && scene.state.phase() == Phase::Done {
                debug!("{} scene finished", scene.id().name());
                events.push(SceneEvent::Finished {
                    scene: scene.id(),
                    duration: scene.state.duration(),
                });
            }
        }
        events
    }

    /// Draw both halves. Trajectory samples go first so the live cursor is
    /// drawn over them.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.set_view(&self.camera.view_matrix());
        let (left, right) = split_viewports(self.width, self.height);
        for (scene, viewport) in [(&self.quat_scene, left), (&self.euler_scene, right)] {
            renderer.set_viewport(viewport);
            renderer.set_projection(&perspective(FOVY, viewport.aspect(), Z_NEAR, Z_FAR));
            if self.show_all_frames {
                scene.render_samples(renderer, self.intermediate_frames);
            }
            scene.render(renderer);
        }
    }

    /// One full frame: read the clock, tick, render.
    pub fn frame(
        &mut self,
        clock: &mut dyn Clock,
        input: &InputFrame,
        renderer: &mut dyn Renderer,
    ) -> Vec<SceneEvent> {
        let dt = clock.delta_seconds();
        let events = self.tick(dt, input);
        self.render(renderer);
        events
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn quat_scene(&self) -> &Scene {
        &self.quat_scene
    }

    #[inline]
    pub fn euler_scene(&self) -> &Scene {
        &self.euler_scene
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn show_all_frames(&self) -> bool {
        self.show_all_frames
    }

    #[inline]
    pub fn intermediate_frames(&self) -> u32 {
        self.intermediate_frames
    }
}
