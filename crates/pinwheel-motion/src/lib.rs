//! Pinwheel motion crate.
//!
//! Advances a heading angle and a 2D position from a delta time, and writes the
//! result into a homogeneous 4x4 model matrix.
//!
//! Matrix convention (glam, column-major):
//! - translation lives in `w_axis.x` / `w_axis.y`
//! - the fused rotation/scale 2x2 block lives in `x_axis.{x,y}` and `y_axis.{x,y}`
//! - the z row/column keep their identity values

pub mod matrix;
mod motion;
mod state;

pub use motion::Motion;
pub use state::TransformState;

pub use glam::{Mat4, Vec2};
