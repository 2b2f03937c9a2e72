//! GPU rendering subsystem.
//!
//! The quad renderer owns every GPU resource it draws with (pipeline,
//! buffers, textures) and creates all of them up front, in dependency
//! order — any failure is fatal before the frame loop starts. Per-frame
//! work is limited to two uniform writes and one indexed draw.

mod ctx;
mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::{QuadConfig, QuadRenderer};
