//! Image-backed GPU textures.
//!
//! Decoding goes through the `image` crate and always expands to RGBA8,
//! regardless of the source channel count. Content is immutable after
//! upload; there is no streaming or mip generation.

use std::path::Path;

use crate::error::RenderError;

/// A 2D texture plus its shader-visible view and sampler.
///
/// One mip level, one array layer, RGBA8 sRGB. Released by `Drop`.
pub struct Texture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    size: (u32, u32),
}

impl Texture {
    /// Decodes `path` and uploads it to the device.
    ///
    /// Missing or undecodable files fail with `AssetLoad`; there is no
    /// fallback texture. Device rejection of the descriptor fails with
    /// `ResourceCreation`.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<Self, RenderError> {
        let decoded = image::open(path).map_err(|e| RenderError::AssetLoad {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;

        // Expand to 4 channels unconditionally.
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("loaded texture {path:?} ({width}x{height})");

        Self::from_rgba8(device, queue, &rgba, width, height)
    }

    /// 1x1 white placeholder, bound when the viewer runs untextured so one
    /// pipeline serves both the textured and untextured configurations.
    pub fn solid_white(device: &wgpu::Device, queue: &wgpu::Queue) -> Result<Self, RenderError> {
        Self::from_rgba8(device, queue, &[255, 255, 255, 255], 1, 1)
    }

    /// Uploads decoded RGBA8 pixels: 2D texture, one mip, one layer,
    /// row pitch = width * 4 bytes.
    fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("glint texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("glint texture sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(RenderError::ResourceCreation(err.to_string()));
        }

        Ok(Self {
            texture,
            view,
            sampler,
            size: (width, height),
        })
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}
