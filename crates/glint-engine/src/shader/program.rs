use crate::error::{RenderError, ShaderStage};

/// Compiled vertex + fragment stages.
///
/// Each stage compiles independently. A failed stage stays unset and its
/// diagnostic is retained; construction itself never fails, but `modules()`
/// refuses to hand out stages until both compiled cleanly — callers check it
/// before building a pipeline, i.e. before the first draw.
pub struct ShaderProgram {
    vertex: Option<wgpu::ShaderModule>,
    fragment: Option<wgpu::ShaderModule>,
    error: Option<RenderError>,
}

impl ShaderProgram {
    /// Compiles both stages from WGSL source text.
    pub fn compile(device: &wgpu::Device, vertex_src: &str, fragment_src: &str) -> Self {
        let (vertex, vertex_err) = compile_stage(device, ShaderStage::Vertex, vertex_src);
        let (fragment, fragment_err) = compile_stage(device, ShaderStage::Fragment, fragment_src);

        Self {
            vertex,
            fragment,
            error: vertex_err.or(fragment_err),
        }
    }

    /// Returns both compiled stages, or the first captured compile error.
    pub fn modules(&self) -> Result<(&wgpu::ShaderModule, &wgpu::ShaderModule), RenderError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        match (&self.vertex, &self.fragment) {
            (Some(v), Some(f)) => Ok((v, f)),
            // Unreachable while the error/stage invariant holds; report the
            // missing stage rather than panic.
            (v, _) => Err(RenderError::ShaderCompile {
                stage: if v.is_none() {
                    ShaderStage::Vertex
                } else {
                    ShaderStage::Fragment
                },
                diagnostic: "stage module missing".into(),
            }),
        }
    }
}

/// Compiles one stage inside a validation error scope, capturing the
/// compiler diagnostic on failure.
fn compile_stage(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> (Option<wgpu::ShaderModule>, Option<RenderError>) {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(match stage {
            ShaderStage::Vertex => "glint vertex shader",
            ShaderStage::Fragment => "glint fragment shader",
        }),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    match pollster::block_on(error_scope.pop()) {
        Some(err) => {
            let diagnostic = err.to_string();
            log::error!("{stage} shader failed to compile:\n{diagnostic}");
            (
                None,
                Some(RenderError::ShaderCompile { stage, diagnostic }),
            )
        }
        None => (Some(module), None),
    }
}
