use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

pub const DIFFUSE_MAP: &str = "container2.png";
pub const SPECULAR_MAP: &str = "container2_specular.png";

const FALLBACK_SIZE: u32 = 64;
const CHECKER_CELL: u32 = 8;

/// Which placeholder to use when an asset cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Checker,
    Grey,
}

impl Fallback {
    pub fn image(self) -> RgbaImage {
        match self {
            Fallback::Checker => RgbaImage::from_fn(FALLBACK_SIZE, FALLBACK_SIZE, |x, y| {
                if ((x / CHECKER_CELL) + (y / CHECKER_CELL)) % 2 == 0 {
                    Rgba([200, 160, 110, 255])
                } else {
                    Rgba([120, 90, 60, 255])
                }
            }),
            Fallback::Grey => RgbaImage::from_pixel(FALLBACK_SIZE, FALLBACK_SIZE, Rgba([128, 128, 128, 255])),
        }
    }
}

/// Decode an image file, flipped so texture row 0 is the bottom of the image
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).with_context(|| format!("Failed to load texture: {}", path.display()))?;
    Ok(image.flipv().into_rgba8())
}

/// Like `load_rgba`, but a missing or broken asset only logs a warning
pub fn load_rgba_or(path: &Path, fallback: Fallback) -> RgbaImage {
    match load_rgba(path) {
        Ok(image) => {
            log::info!("Loaded texture {} ({}x{})", path.display(), image.width(), image.height());
            image
        }
        Err(e) => {
            log::warn!("{:#}; using {:?} placeholder", e, fallback);
            fallback.image()
        }
    }
}

/// Sampled 2D texture living on the GPU
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        label: &str,
    ) -> Self {
        let (width, height) = image.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
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
            image.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Load `<dir>/<name>` onto the GPU, substituting a placeholder on failure
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        dir: &Path,
        name: &str,
        fallback: Fallback,
    ) -> Self {
        let image = load_rgba_or(&dir.join(name), fallback);
        Self::from_image(device, queue, &image, name)
    }

    pub fn create_depth(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: config.width.max(1),
                height: config.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}
