use wgpu::util::DeviceExt;

use crate::error::RenderError;

use super::vertex::Vertex;

/// GPU vertex buffer.
///
/// Created with `COPY_DST` so contents may be re-uploaded after creation;
/// the buffer itself is released by `Drop`.
pub struct VertexBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
}

impl VertexBuffer {
    /// Allocates a device buffer sized to `vertices` and copies the initial
    /// contents. Empty input is rejected before any device call.
    pub fn create(device: &wgpu::Device, vertices: &[Vertex]) -> Result<Self, RenderError> {
        ensure_non_empty("vertex buffer", vertices.len())?;

        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint vertex buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(RenderError::ResourceCreation(err.to_string()));
        }

        Ok(Self {
            buffer,
            capacity: vertices.len(),
        })
    }

    /// Re-uploads vertex data, overwriting from the start of the buffer.
    ///
    /// The queue stages the write internally, so in-flight GPU reads of the
    /// previous frame's contents are never corrupted (write-discard
    /// semantics). Uploads larger than the creation size are rejected.
    pub fn write(&self, queue: &wgpu::Queue, vertices: &[Vertex]) -> Result<(), RenderError> {
        ensure_non_empty("vertex upload", vertices.len())?;
        if vertices.len() > self.capacity {
            return Err(RenderError::ResourceCreation(format!(
                "vertex upload of {} vertices exceeds buffer capacity {}",
                vertices.len(),
                self.capacity
            )));
        }
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(vertices));
        Ok(())
    }

    pub fn raw(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

/// GPU index buffer. Immutable after creation.
pub struct IndexBuffer {
    buffer: wgpu::Buffer,
    count: u32,
}

impl IndexBuffer {
    /// Allocates an immutable device buffer holding `indices` and records
    /// the index count used for draw calls.
    pub fn create(device: &wgpu::Device, indices: &[u32]) -> Result<Self, RenderError> {
        ensure_non_empty("index buffer", indices.len())?;

        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("glint index buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(RenderError::ResourceCreation(err.to_string()));
        }

        Ok(Self {
            buffer,
            count: indices.len() as u32,
        })
    }

    /// Number of indices, i.e. the argument for `draw_indexed`.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn raw(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

fn ensure_non_empty(what: &str, len: usize) -> Result<(), RenderError> {
    if len == 0 {
        return Err(RenderError::ResourceCreation(format!(
            "{what} requires at least one element"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected_before_device_access() {
        let err = ensure_non_empty("vertex buffer", 0).unwrap_err();
        assert!(matches!(err, RenderError::ResourceCreation(_)));
        assert!(ensure_non_empty("vertex buffer", 4).is_ok());
    }
}
