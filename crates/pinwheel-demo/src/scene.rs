//! The animated arrowhead.
//!
//! ```text
//!          (0,1)
//!           /|\
//!          / | \
//!         /  |  \
//!        / (0,0) \
//!       /   / \   \
//!      /  /     \  \
//!     / /         \ \
//!    //             \\
//! (-1,-1)           (1,-1)
//! ```

use pinwheel_engine::render::{Mesh, MeshRenderer, MeshVertex, RenderCtx, RenderTarget};
use pinwheel_engine::time::{FrameClock, FrameTime, MonotonicTime, TimeSource};
use pinwheel_motion::{Motion, TransformState};

const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

pub const VERTICES: [MeshVertex; 4] = [
    MeshVertex::new([0.0, 0.0, 0.0, 1.0], MAGENTA),
    MeshVertex::new([0.0, 1.0, 0.0, 1.0], MAGENTA),
    MeshVertex::new([-1.0, -1.0, 0.0, 1.0], RED),
    MeshVertex::new([1.0, -1.0, 0.0, 1.0], BLUE),
];

pub const INDICES: [u32; 6] = [
    0, 1, 2, // left triangle
    0, 1, 3, // right triangle
];

/// Owns the arrowhead's motion state, its clock and its GPU resources.
pub struct Scene<T: TimeSource = MonotonicTime> {
    motion: Motion,
    transform: TransformState,
    clock: FrameClock<T>,

    renderer: MeshRenderer,
    mesh: Option<Mesh>,
}

impl Scene<MonotonicTime> {
    pub fn new(motion: Motion) -> Self {
        Self::with_time_source(motion, MonotonicTime::new())
    }
}

impl<T: TimeSource> Scene<T> {
    /// Seeds the transform at `motion.seed_offset` and starts the clock from `source`.
    pub fn with_time_source(motion: Motion, source: T) -> Self {
        Self {
            motion,
            transform: TransformState::seeded(motion.seed_offset),
            clock: FrameClock::with_source(source),
            renderer: MeshRenderer::new(),
            mesh: None,
        }
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    /// Reads the clock and advances the transform by the elapsed time.
    pub fn update(&mut self) -> FrameTime {
        let ft = self.clock.tick();
        self.transform.advance(&self.motion, ft.dt);
        ft
    }

    /// Draws the mesh with the current transform. Uploads the mesh on first use.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let mesh = self
            .mesh
            .get_or_insert_with(|| Mesh::upload(ctx.device, "arrowhead", &VERTICES, &INDICES));

        self.renderer.render(ctx, target, mesh, self.transform.matrix());
    }

    /// One render tick: advance from the clock, then draw.
    pub fn update_and_draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
    ) -> FrameTime {
        let ft = self.update();
        self.draw(ctx, target);
        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinwheel_engine::time::ManualTime;
    use pinwheel_motion::Vec2;

    fn manual_scene() -> (ManualTime, Scene<ManualTime>) {
        let time = ManualTime::new(0.0);
        let scene = Scene::with_time_source(Motion::default(), time.clone());
        (time, scene)
    }

    #[test]
    fn construction_seeds_translation_only() {
        let (_time, scene) = manual_scene();
        let m = scene.transform().matrix();
        assert_eq!(scene.transform().position(), Vec2::new(-0.5, 0.0));
        assert_eq!([m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y], [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn first_update_without_elapsed_time_keeps_position() {
        let (_time, mut scene) = manual_scene();
        let ft = scene.update();
        assert_eq!(ft.dt, 0.0);
        assert_eq!(scene.transform().position(), Vec2::new(-0.5, 0.0));
        assert_eq!(scene.transform().matrix().x_axis.x, 0.1);
    }

    #[test]
    fn update_follows_injected_time() {
        let (time, mut scene) = manual_scene();
        time.advance(0.1);
        scene.update();

        let t = scene.transform();
        assert!((t.heading() - -0.5).abs() < 1e-5);
        assert!((t.position().x - -0.3801).abs() < 1e-3);
        assert!((t.position().y - 0.2194).abs() < 1e-3);
    }

    #[test]
    fn clock_rollback_does_not_move_backwards() {
        let (time, mut scene) = manual_scene();
        time.advance(0.1);
        scene.update();
        let before = *scene.transform();

        time.advance(-1.0);
        scene.update();
        assert_eq!(scene.transform().position(), before.position());
        assert_eq!(scene.transform().heading(), before.heading());
    }

    #[test]
    fn long_stall_advances_one_capped_step() {
        let (time, mut scene) = manual_scene();
        time.advance(1.0);
        let ft = scene.update();
        assert_eq!(ft.dt, 0.25);

        let t = scene.transform();
        assert!((t.heading() - -1.25).abs() < 1e-5);
        assert!((t.position().x - 0.0931).abs() < 1e-3);
        assert!((t.position().y - 0.1971).abs() < 1e-3);
    }

    #[test]
    fn mesh_indices_reference_every_vertex() {
        for i in 0..VERTICES.len() as u32 {
            assert!(INDICES.contains(&i));
        }
        assert!(INDICES.iter().all(|&i| (i as usize) < VERTICES.len()));
        assert_eq!(INDICES.len() % 3, 0);
    }
}
