use crate::constants::CLEAR_COLOR;
use crate::core::resources::Tracked;
use crate::core::scene::SceneFrame;
use web_sys as web;

mod background;
mod helpers;
mod particles;

use background::{create_background_resources, BackgroundResources};
use particles::{create_particle_resources, ParticleResources};

// ===================== WebGPU scene renderer =====================

/// GPU side of the scene engine: one surface, one device, the background
/// plane and the particle sprites.
///
/// Field order is drop order: pipelines and buffers go first, the device is
/// destroyed last.
pub struct SceneRenderer {
    background: BackgroundResources,
    particles: ParticleResources,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    queue: wgpu::Queue,
    device: Tracked<wgpu::Device>,
    width: u32,
    height: u32,
}

impl SceneRenderer {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        size: (u32, u32),
        particle_capacity: u32,
    ) -> anyhow::Result<Self> {
        let (width, height) = (size.0.max(1), size.1.max(1));

        // Falls back to WebGL2 when navigator.gpu exists but yields no adapter
        let instance =
            wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor::default())
                .await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU/WebGL adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2 limits keep the fallback backend usable
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("scene_device"),
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Shader colours are authored for direct output, so prefer a linear format.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let background = create_background_resources(&device, format);
        let particles = create_particle_resources(&device, &queue, format, particle_capacity);
        log::info!(
            "[gpu] ready {}x{} format={:?} backend={:?}",
            width,
            height,
            format,
            adapter.get_info().backend
        );

        Ok(Self {
            background,
            particles,
            surface,
            config,
            queue,
            device: Tracked::new(device),
            width,
            height,
        })
    }

    /// Reconfigure the surface when the output size changes. Repeating the
    /// same size does nothing.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure with the current size after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw one frame: noise plane, then particles on top.
    pub fn render(
        &mut self,
        frame: &SceneFrame,
        instances: &[u8],
        count: u32,
    ) -> Result<(), wgpu::SurfaceError> {
        self.resize_if_needed(frame.surface_size.0, frame.surface_size.1);
        self.background.write(&self.queue, frame);
        self.particles.write(&self.queue, frame, instances);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: CLEAR_COLOR[0],
                            g: CLEAR_COLOR[1],
                            b: CLEAR_COLOR[2],
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.background.draw(&mut rpass);
            self.particles.draw(&mut rpass, count);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
