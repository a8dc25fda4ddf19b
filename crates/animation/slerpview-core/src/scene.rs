//! Scene adapter: feeds an [`AnimationState`]'s poses into the cursor gizmo
//! and issues draw calls through a [`Renderer`].

use std::f32::consts::FRAC_PI_2;

use crate::animation::AnimationState;
use crate::mesh::{grid_vertex_count, CURSOR_INDEX_COUNT};
use crate::outputs::SceneId;
use crate::pose::{InterpMode, Pose};
use crate::render::{
    rotation_x, rotation_y, translation, Mat4, MeshKind, Primitive, Renderer, ShaderKind, BLUE,
    GREEN, RED, WHITE,
};

/// Three-axis gizmo: one cylinder per local axis, X red, Y green, Z blue.
#[derive(Clone, Debug)]
pub struct Cursor {
    index_count: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            index_count: CURSOR_INDEX_COUNT,
        }
    }

    /// `T(position) * R(orientation)`.
    pub fn model_matrix(pose: &Pose) -> Mat4 {
        translation(pose.position) * pose.orientation.to_matrix()
    }

    pub fn render(&self, pose: &Pose, renderer: &mut dyn Renderer) {
        let model = Self::model_matrix(pose);
        renderer.set_shader(ShaderKind::Object);

        // The mesh runs along +Z.
        renderer.set_model(&model);
        renderer.set_color(BLUE);
        self.draw(renderer);

        renderer.set_model(&(model * rotation_x(-FRAC_PI_2)));
        renderer.set_color(GREEN);
        self.draw(renderer);

        renderer.set_model(&(model * rotation_y(FRAC_PI_2)));
        renderer.set_color(RED);
        self.draw(renderer);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.draw_indexed(MeshKind::Cursor, Primitive::Triangles, self.index_count);
    }
}

#[derive(Clone, Debug)]
pub struct Ground {
    vertex_count: u32,
}

impl Default for Ground {
    fn default() -> Self {
        Self::new()
    }
}

impl Ground {
    pub fn new() -> Self {
        Self {
            vertex_count: grid_vertex_count(),
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.set_model(&Mat4::identity());
        renderer.set_shader(ShaderKind::Grid);
        renderer.set_color(WHITE);
        renderer.draw_arrays(MeshKind::Ground, Primitive::Lines, self.vertex_count);
    }
}

/// One half of the comparison: an animation state plus its gizmo and grid.
#[derive(Clone, Debug)]
pub struct Scene {
    id: SceneId,
    pub state: AnimationState,
    cursor: Cursor,
    ground: Ground,
}

impl Scene {
    pub fn new(id: SceneId, mode: InterpMode) -> Self {
        Self {
            id,
            state: AnimationState::new(mode),
            cursor: Cursor::new(),
            ground: Ground::new(),
        }
    }

    /// Quaternion-driven scene (nlerp until configured otherwise).
    pub fn quaternion() -> Self {
        Self::new(SceneId::Quaternion, InterpMode::Nlerp)
    }

    /// Euler-driven scene.
    pub fn euler() -> Self {
        Self::new(SceneId::Euler, InterpMode::Euler)
    }

    #[inline]
    pub fn id(&self) -> SceneId {
        self.id
    }

    /// Cursor at the live pose, then the ground grid.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.cursor.render(self.state.current(), renderer);
        self.ground.render(renderer);
    }

    /// Cursor at every pose along the trajectory (start and end included).
    /// The live pose is not touched.
    pub fn render_samples(&self, renderer: &mut dyn Renderer, intermediate_frames: u32) {
        for pose in self.state.samples(intermediate_frames) {
            self.cursor.render(&pose, renderer);
        }
    }
}
