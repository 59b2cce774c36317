//! Pinwheel engine crate.
//!
//! Owns the platform + GPU runtime pieces the demo scene draws through:
//! window/event loop, device + surface, frame timing, logging and the
//! indexed mesh renderer.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
