//! Shader compilation and uniform (constant-buffer) layouts.
//!
//! WGSL sources are opaque text blobs supplied by the renderer; this module
//! passes them to the device compiler and captures diagnostics. Uniform
//! structs are the strongly-typed, alignment-checked records that per-frame
//! writes go through — no raw pointer casts of mapped memory.

mod program;
mod uniforms;

pub use program::ShaderProgram;
pub use uniforms::{uniform_binding_size, SceneUniform, TintUniform};
