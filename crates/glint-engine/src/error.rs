//! Engine error taxonomy.
//!
//! Startup-phase failures are fatal: they bubble up through `anyhow` context
//! chains in the binary and terminate the process with a printed diagnostic.
//! There is no runtime recovery path — once the frame loop is running, only
//! the close signal (or a fatal surface error) ends it.

use std::path::PathBuf;

use thiserror::Error;

/// Shader pipeline stage, used to attribute compile diagnostics.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Errors produced while building or driving the renderer.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// Device/surface/swap-chain creation failed, including the one retry
    /// with debug instrumentation disabled.
    #[error("device initialization failed: {0}")]
    DeviceInit(String),

    /// Buffer, texture or sampler creation was rejected by the device.
    #[error("resource creation failed: {0}")]
    ResourceCreation(String),

    /// A shader stage failed to compile. The object that holds the stage
    /// stays constructible but refuses to draw; `diagnostic` carries the
    /// compiler's message verbatim.
    #[error("{stage} shader compilation failed:\n{diagnostic}")]
    ShaderCompile {
        stage: ShaderStage,
        diagnostic: String,
    },

    /// An asset file was missing or undecodable. No fallback is attempted.
    #[error("failed to load asset {path:?}: {reason}")]
    AssetLoad { path: PathBuf, reason: String },

    /// The vertex buffer layout does not match the shader's input signature.
    #[error("vertex layout does not match shader input: {0}")]
    LayoutMismatch(String),
}
