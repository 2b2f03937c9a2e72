//! CPU-side geometry and its GPU buffer wrappers.
//!
//! Convention:
//! - positions are in world units, right-handed, +Y up
//! - texture coordinates have their origin at the top-left
//! - indices are `u32`, counter-clockwise winding

mod buffer;
mod vertex;

pub use buffer::{IndexBuffer, VertexBuffer};
pub use vertex::{Vertex, UNIT_QUAD_INDICES, UNIT_QUAD_VERTICES};
