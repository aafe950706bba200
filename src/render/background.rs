use super::helpers;
use crate::core::resources::Tracked;
use crate::core::scene::SceneFrame;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BackgroundUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) pointer: [f32; 2],
    pub(crate) time: f32,
    pub(crate) _pad: [f32; 3],
}

impl BackgroundUniforms {
    pub(crate) fn from_frame(frame: &SceneFrame) -> Self {
        Self {
            resolution: frame.resolution,
            pointer: frame.pointer,
            time: frame.time,
            _pad: [0.0; 3],
        }
    }
}

/// Full-viewport noise plane drawn first in the scene pass.
pub(crate) struct BackgroundResources {
    pub(crate) pipeline: Tracked<wgpu::RenderPipeline>,
    pub(crate) bind_group: Tracked<wgpu::BindGroup>,
    pub(crate) uniform_buffer: Tracked<wgpu::Buffer>,
}

impl BackgroundResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, frame: &SceneFrame) {
        let u = BackgroundUniforms::from_frame(frame);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &*self.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}

pub(crate) fn create_background_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> BackgroundResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("background_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::BACKGROUND_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("background_bgl"),
        entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::FRAGMENT)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("background_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_pipeline(
        device,
        "background_pipeline",
        &pl,
        &shader,
        "vs_fullscreen",
        "fs_background",
        &[],
        color_format,
        None,
    );
    let uniform_buffer = helpers::uniform_buffer(
        device,
        "background_uniforms",
        std::mem::size_of::<BackgroundUniforms>(),
    );
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("background_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    BackgroundResources {
        pipeline: Tracked::new(pipeline),
        bind_group: Tracked::new(bind_group),
        uniform_buffer: Tracked::new(uniform_buffer),
    }
}
