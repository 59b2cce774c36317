use glam::{Mat4, Vec2};

use crate::matrix;
use crate::motion::Motion;

/// Heading + model matrix advanced once per frame.
///
/// The matrix is the only place the position is stored; each step reads the
/// previous translation back out of it before writing the new one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformState {
    heading: f32,
    matrix: Mat4,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            heading: 0.0,
            matrix: Mat4::IDENTITY,
        }
    }
}

impl TransformState {
    /// Identity transform translated by `offset`. No rotation or scale is applied
    /// until the first [`advance`](Self::advance).
    pub fn seeded(offset: Vec2) -> Self {
        Self {
            heading: 0.0,
            matrix: matrix::translation(Mat4::IDENTITY, offset.x, offset.y),
        }
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.matrix.w_axis.x, self.matrix.w_axis.y)
    }

    /// Advances the transform by `dt` seconds.
    ///
    /// Order is fixed: heading, then forward step with the new heading, then the
    /// rotation block is rewritten and finally scaled.
    ///
    /// Negative or non-finite `dt` is treated as zero. A zero `dt` still rewrites
    /// the rotation/scale block.
    pub fn advance(&mut self, motion: &Motion, dt: f32) {
        let dt = sanitize_dt(dt);

        self.heading += motion.angular_speed * dt;

        let mut m = self.matrix;
        m = matrix::move_forward(m, motion.forward_speed, self.heading, dt);
        m = matrix::rotation(m, self.heading);
        m = matrix::scale(m, motion.scale.x, motion.scale.y);
        self.matrix = m;

        log::trace!(
            "transform: dt={dt:.4} heading={:.4} pos=({:.4}, {:.4})",
            self.heading,
            self.matrix.w_axis.x,
            self.matrix.w_axis.y
        );
    }

    /// By-value form of [`advance`](Self::advance).
    #[must_use]
    pub fn step(mut self, motion: &Motion, dt: f32) -> Self {
        self.advance(motion, dt);
        self
    }
}

fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        return dt;
    }
    log::debug!("transform: rejecting dt={dt}, using 0");
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn block(m: Mat4) -> [f32; 4] {
        [m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y]
    }

    // ── seed ──────────────────────────────────────────────────────────────

    #[test]
    fn seeded_is_translation_only() {
        let s = TransformState::seeded(Vec2::new(-0.5, 0.0));
        assert_eq!(s.position(), Vec2::new(-0.5, 0.0));
        assert_eq!(block(s.matrix()), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(s.matrix().z_axis, Mat4::IDENTITY.z_axis);
        assert_eq!(s.matrix().w_axis.z, 0.0);
        assert_eq!(s.matrix().w_axis.w, 1.0);
        assert_eq!(s.heading(), 0.0);
    }

    // ── heading / position ────────────────────────────────────────────────

    #[test]
    fn heading_advances_by_angular_speed_times_dt() {
        let motion = Motion::default().with_angular_speed(3.0);
        let mut s = TransformState::default();
        s.advance(&motion, 0.25);
        assert_close(s.heading(), 0.75);
        s.advance(&motion, 0.5);
        assert_close(s.heading(), 2.25);
    }

    #[test]
    fn position_uses_post_update_heading() {
        let motion = Motion::default()
            .with_forward_speed(1.0)
            .with_angular_speed(std::f32::consts::FRAC_PI_2);
        let s = TransformState::default().step(&motion, 1.0);

        // Heading after the step is pi/2, so the forward direction is -X.
        // With the pre-update heading (0) it would have moved along +Y instead.
        assert_close(s.position().x, -1.0);
        assert_close(s.position().y, 0.0);
    }

    #[test]
    fn reference_scenario() {
        let motion = Motion::default();
        let s = TransformState::seeded(motion.seed_offset).step(&motion, 0.1);

        assert_close(s.heading(), -0.5);
        assert_close(s.position().x, -0.5 + 2.5 * 0.5f32.sin() * 0.1);
        assert_close(s.position().y, 2.5 * 0.5f32.cos() * 0.1);
        assert!((s.position().x - -0.3801).abs() < 1e-3);
        assert!((s.position().y - 0.2194).abs() < 1e-3);

        let (sin, cos) = (-0.5f32).sin_cos();
        let [a, b, c, d] = block(s.matrix());
        assert_close(a, cos * 0.1);
        assert_close(b, sin * 0.1);
        assert_close(c, -sin * 0.1);
        assert_close(d, cos * 0.1);
    }

    // ── zero dt ───────────────────────────────────────────────────────────

    #[test]
    fn zero_dt_rewrites_block_but_keeps_translation() {
        let motion = Motion::default();
        let seeded = TransformState::seeded(motion.seed_offset);
        let s = seeded.step(&motion, 0.0);

        assert_eq!(s.position(), seeded.position());
        assert_eq!(s.heading(), 0.0);
        assert_eq!(block(s.matrix()), [0.1, 0.0, 0.0, 0.1]);
    }

    #[test]
    fn scale_does_not_accumulate() {
        let motion = Motion::default();
        let first = TransformState::seeded(motion.seed_offset).step(&motion, 0.0);
        let second = first.step(&motion, 0.0);
        assert_eq!(block(first.matrix()), block(second.matrix()));
        assert_eq!(first, second);
    }

    // ── bad dt ────────────────────────────────────────────────────────────

    #[test]
    fn negative_dt_is_treated_as_zero() {
        let motion = Motion::default();
        let seeded = TransformState::seeded(motion.seed_offset);
        assert_eq!(seeded.step(&motion, -0.2), seeded.step(&motion, 0.0));
    }

    #[test]
    fn non_finite_dt_is_treated_as_zero() {
        let motion = Motion::default();
        let seeded = TransformState::seeded(motion.seed_offset);
        let zero = seeded.step(&motion, 0.0);
        assert_eq!(seeded.step(&motion, f32::NAN), zero);
        assert_eq!(seeded.step(&motion, f32::INFINITY), zero);
    }

    // ── multi-frame ───────────────────────────────────────────────────────

    #[test]
    fn full_turn_returns_to_same_block() {
        let motion = Motion::default()
            .with_forward_speed(0.0)
            .with_angular_speed(std::f32::consts::TAU);
        let start = TransformState::default().step(&motion, 0.0);
        let mut s = start;
        for _ in 0..4 {
            s.advance(&motion, 0.25);
        }
        for (a, b) in block(s.matrix()).into_iter().zip(block(start.matrix())) {
            assert_close(a, b);
        }
        assert_eq!(s.position(), Vec2::ZERO);
    }

    #[test]
    fn split_steps_match_single_step_for_straight_motion() {
        let motion = Motion::default()
            .with_forward_speed(2.0)
            .with_angular_speed(0.0);
        let once = TransformState::default().step(&motion, 1.0);
        let twice = TransformState::default().step(&motion, 0.5).step(&motion, 0.5);
        assert_close(once.position().y, 2.0);
        assert_close(twice.position().y, 2.0);
        assert_close(once.position().x, twice.position().x);
    }
}
