//! Matrix-writing primitives.
//!
//! Each function takes the matrix by value and returns the updated copy.
//! They overwrite specific entries instead of composing full transforms, so the
//! order in which they are applied matters.

use glam::Mat4;

/// Overwrites the x/y translation. z and w are left alone.
#[inline]
pub fn translation(m: Mat4, tx: f32, ty: f32) -> Mat4 {
    let mut m = m;
    m.w_axis.x = tx;
    m.w_axis.y = ty;
    m
}

/// Steps the translation along the heading direction `(-sin, cos)`.
///
/// `heading` is in radians; `speed` is in units per second.
#[inline]
pub fn move_forward(m: Mat4, speed: f32, heading: f32, dt: f32) -> Mat4 {
    let (sin, cos) = heading.sin_cos();
    let x = m.w_axis.x + speed * -sin * dt;
    let y = m.w_axis.y + speed * cos * dt;
    translation(m, x, y)
}

/// Replaces the 2x2 block with a rotation by `angle` radians.
///
/// Reading the block row-major: `[[cos, -sin], [sin, cos]]`.
#[inline]
pub fn rotation(m: Mat4, angle: f32) -> Mat4 {
    let (sin, cos) = angle.sin_cos();
    let mut m = m;
    m.x_axis.x = cos;
    m.x_axis.y = sin;
    m.y_axis.x = -sin;
    m.y_axis.y = cos;
    m
}

/// Scales column 0 of the 2x2 block by `sx` and column 1 by `sy`, in place.
#[inline]
pub fn scale(m: Mat4, sx: f32, sy: f32) -> Mat4 {
    let mut m = m;
    m.x_axis.x *= sx;
    m.x_axis.y *= sx;
    m.y_axis.x *= sy;
    m.y_axis.y *= sy;
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec4};

    const EPS: f32 = 1e-6;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS
    }

    // ── translation ───────────────────────────────────────────────────────

    #[test]
    fn translation_writes_only_xy() {
        let m = Mat4::from_cols(
            Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(5.0, 6.0, 7.0, 8.0),
            Vec4::new(9.0, 10.0, 11.0, 12.0),
            Vec4::new(13.0, 14.0, 15.0, 16.0),
        );
        let t = translation(m, -0.5, 0.25);

        assert_eq!(t.w_axis, Vec4::new(-0.5, 0.25, 15.0, 16.0));
        assert_eq!(t.x_axis, m.x_axis);
        assert_eq!(t.y_axis, m.y_axis);
        assert_eq!(t.z_axis, m.z_axis);
    }

    #[test]
    fn translation_moves_points() {
        let t = translation(Mat4::IDENTITY, 2.0, -3.0);
        let p = t.transform_point3(glam::Vec3::ZERO);
        assert_eq!(p.truncate(), Vec2::new(2.0, -3.0));
        assert_eq!(p.z, 0.0);
    }

    // ── move_forward ──────────────────────────────────────────────────────

    #[test]
    fn move_forward_zero_heading_goes_up() {
        let m = move_forward(Mat4::IDENTITY, 2.0, 0.0, 0.5);
        assert!(close(m.w_axis.x, 0.0));
        assert!(close(m.w_axis.y, 1.0));
    }

    #[test]
    fn move_forward_quarter_turn_goes_left() {
        let m = move_forward(Mat4::IDENTITY, 1.0, std::f32::consts::FRAC_PI_2, 1.0);
        assert!(close(m.w_axis.x, -1.0));
        assert!(close(m.w_axis.y, 0.0));
    }

    #[test]
    fn move_forward_accumulates_from_previous_translation() {
        let m = translation(Mat4::IDENTITY, 3.0, 4.0);
        let m = move_forward(m, 1.0, 0.0, 1.0);
        assert!(close(m.w_axis.x, 3.0));
        assert!(close(m.w_axis.y, 5.0));
    }

    #[test]
    fn move_forward_zero_dt_keeps_translation() {
        let m = translation(Mat4::IDENTITY, -0.5, 0.0);
        assert_eq!(move_forward(m, 2.5, 1.3, 0.0), m);
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotation_replaces_block_instead_of_composing() {
        let once = rotation(Mat4::IDENTITY, 0.7);
        let twice = rotation(once, 0.7);
        assert_eq!(once, twice);
    }

    #[test]
    fn rotation_keeps_translation() {
        let m = translation(Mat4::IDENTITY, 1.0, 2.0);
        let r = rotation(m, 1.0);
        assert_eq!(r.w_axis, m.w_axis);
        assert_eq!(r.z_axis, m.z_axis);
    }

    #[test]
    fn rotation_turns_x_axis_counter_clockwise() {
        let r = rotation(Mat4::IDENTITY, std::f32::consts::FRAC_PI_2);
        let v = r.transform_vector3(glam::Vec3::X);
        assert!(close(v.x, 0.0));
        assert!(close(v.y, 1.0));
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_multiplies_columns() {
        let m = rotation(Mat4::IDENTITY, 0.3);
        let s = scale(m, 2.0, 3.0);
        assert!(close(s.x_axis.x, m.x_axis.x * 2.0));
        assert!(close(s.x_axis.y, m.x_axis.y * 2.0));
        assert!(close(s.y_axis.x, m.y_axis.x * 3.0));
        assert!(close(s.y_axis.y, m.y_axis.y * 3.0));
    }

    #[test]
    fn scale_compounds_when_applied_twice_without_rotation() {
        // The primitive itself is multiplicative; only the per-frame ordering keeps it from compounding.
        let s = scale(scale(Mat4::IDENTITY, 0.5, 0.5), 0.5, 0.5);
        assert_eq!(s.x_axis.x, 0.25);
        assert_eq!(s.y_axis.y, 0.25);
    }

    #[test]
    fn scale_leaves_translation_and_z() {
        let m = translation(Mat4::IDENTITY, 1.0, 1.0);
        let s = scale(m, 0.1, 0.1);
        assert_eq!(s.w_axis, m.w_axis);
        assert_eq!(s.z_axis, m.z_axis);
    }
}
