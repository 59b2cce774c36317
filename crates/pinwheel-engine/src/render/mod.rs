//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, bind groups) and
//! issue commands into a `RenderTarget` handed out by `core::FrameCtx`.
//!
//! Convention:
//! - geometry is authored directly in clip space (x/y in -1..1)
//! - the model matrix is the only transform applied in the vertex shader

mod ctx;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{Mesh, MeshRenderer, MeshVertex};
