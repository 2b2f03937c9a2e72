use bytemuck::{Pod, Zeroable};

/// Per-vertex data: position + texture coordinate.
///
/// The layout here is the single source of truth for the pipeline's vertex
/// input; the shader's `@location` attributes must match it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Unit quad centered on the origin in the XY plane.
pub const UNIT_QUAD_VERTICES: [Vertex; 4] = [
    Vertex { position: [-0.5, -0.5, 0.0], uv: [0.0, 1.0] },
    Vertex { position: [-0.5, 0.5, 0.0], uv: [0.0, 0.0] },
    Vertex { position: [0.5, 0.5, 0.0], uv: [1.0, 0.0] },
    Vertex { position: [0.5, -0.5, 0.0], uv: [1.0, 1.0] },
];

pub const UNIT_QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_and_offsets_match_declared_layout() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    fn unit_quad_draws_six_indices() {
        assert_eq!(UNIT_QUAD_VERTICES.len(), 4);
        assert_eq!(UNIT_QUAD_INDICES.len(), 6);
        assert_eq!(UNIT_QUAD_INDICES, [0, 1, 2, 2, 3, 0]);
        // All indices reference existing vertices.
        assert!(UNIT_QUAD_INDICES
            .iter()
            .all(|&i| (i as usize) < UNIT_QUAD_VERTICES.len()));
    }
}
