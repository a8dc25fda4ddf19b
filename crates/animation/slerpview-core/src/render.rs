//! Render contract between the scenes and the host's graphics backend.
//!
//! The core never touches GPU state. Hosts implement [`Renderer`] on top of
//! their own context (buffers for [`MeshKind`] uploaded from [`crate::mesh`]).
//! [`RecordingRenderer`] captures the command stream for tests and headless
//! runs.

use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::pose::Vec3;

pub type Mat4 = Matrix4<f32>;
pub type Rgba = [f32; 4];

pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: Rgba = [0.0, 1.0, 0.0, 1.0];
pub const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderKind {
    /// Flat-colored solid geometry.
    Object,
    /// Unlit lines.
    Grid,
}

/// Static meshes the host uploads once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshKind {
    Cursor,
    Ground,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Triangles,
    Lines,
}

/// Pixel rectangle, origin bottom-left.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width over height; a zero height is treated as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

pub trait Renderer {
    fn set_model(&mut self, model: &Mat4);
    fn set_view(&mut self, view: &Mat4);
    fn set_projection(&mut self, projection: &Mat4);
    fn set_color(&mut self, color: Rgba);
    fn set_shader(&mut self, shader: ShaderKind);
    fn set_viewport(&mut self, viewport: Viewport);
    fn draw_indexed(&mut self, mesh: MeshKind, primitive: Primitive, count: u32);
    fn draw_arrays(&mut self, mesh: MeshKind, primitive: Primitive, count: u32);
}

/// One recorded renderer call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetModel(Mat4),
    SetView(Mat4),
    SetProjection(Mat4),
    SetColor(Rgba),
    SetShader(ShaderKind),
    SetViewport(Viewport),
    DrawIndexed {
        mesh: MeshKind,
        primitive: Primitive,
        count: u32,
    },
    DrawArrays {
        mesh: MeshKind,
        primitive: Primitive,
        count: u32,
    },
}

impl DrawCommand {
    #[inline]
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            DrawCommand::DrawIndexed { .. } | DrawCommand::DrawArrays { .. }
        )
    }
}

/// Renderer that appends every call to a command list.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn draw_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }

    /// Model matrix bound at each draw call, in order.
    pub fn draw_models(&self) -> Vec<Mat4> {
        let mut model = Mat4::identity();
        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::SetModel(m) => model = *m,
                c if c.is_draw() => out.push(model),
                _ => {}
            }
        }
        out
    }

    /// (color, mesh) bound at each draw call, in order.
    pub fn draw_colors(&self) -> Vec<(Rgba, MeshKind)> {
        let mut color = WHITE;
        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::SetColor(c) => color = *c,
                DrawCommand::DrawIndexed { mesh, .. } | DrawCommand::DrawArrays { mesh, .. } => {
                    out.push((color, *mesh))
                }
                _ => {}
            }
        }
        out
    }
}

impl Renderer for RecordingRenderer {
    fn set_model(&mut self, model: &Mat4) {
        self.commands.push(DrawCommand::SetModel(*model));
    }
    fn set_view(&mut self, view: &Mat4) {
        self.commands.push(DrawCommand::SetView(*view));
    }
    fn set_projection(&mut self, projection: &Mat4) {
        self.commands.push(DrawCommand::SetProjection(*projection));
    }
    fn set_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetColor(color));
    }
    fn set_shader(&mut self, shader: ShaderKind) {
        self.commands.push(DrawCommand::SetShader(shader));
    }
    fn set_viewport(&mut self, viewport: Viewport) {
        self.commands.push(DrawCommand::SetViewport(viewport));
    }
    fn draw_indexed(&mut self, mesh: MeshKind, primitive: Primitive, count: u32) {
        self.commands.push(DrawCommand::DrawIndexed {
            mesh,
            primitive,
            count,
        });
    }
    fn draw_arrays(&mut self, mesh: MeshKind, primitive: Primitive, count: u32) {
        self.commands.push(DrawCommand::DrawArrays {
            mesh,
            primitive,
            count,
        });
    }
}

#[inline]
pub fn translation(v: Vec3) -> Mat4 {
    Mat4::new_translation(&Vector3::new(v[0], v[1], v[2]))
}

#[inline]
pub fn rotation_x(angle: f32) -> Mat4 {
    Mat4::from_axis_angle(&Vector3::x_axis(), angle)
}

#[inline]
pub fn rotation_y(angle: f32) -> Mat4 {
    Mat4::from_axis_angle(&Vector3::y_axis(), angle)
}

/// Right-handed perspective projection (OpenGL clip conventions).
#[inline]
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::new_perspective(aspect, fovy, near, far)
}
