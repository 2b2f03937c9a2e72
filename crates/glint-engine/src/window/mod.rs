//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.
//! One window, rendered continuously: render rate equals present rate.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
