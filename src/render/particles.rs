use super::helpers;
use crate::camera::sprite_world_size;
use crate::constants::{PARTICLE_COLOR, PARTICLE_OPACITY, PARTICLE_SIZE, SPRITE_TEXTURE_SIZE};
use crate::core::particles::{sprite_texels, Particle};
use crate::core::resources::Tracked;
use crate::core::scene::SceneFrame;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) params: [f32; 4],
}

// Only the position is read; the stride skips `scale`
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// Instanced sprite quads for the dust field, blended additively over the
/// background.
pub(crate) struct ParticleResources {
    pub(crate) pipeline: Tracked<wgpu::RenderPipeline>,
    pub(crate) bind_group: Tracked<wgpu::BindGroup>,
    pub(crate) sampler: Tracked<wgpu::Sampler>,
    pub(crate) sprite_view: Tracked<wgpu::TextureView>,
    pub(crate) sprite: Tracked<wgpu::Texture>,
    pub(crate) uniform_buffer: Tracked<wgpu::Buffer>,
    pub(crate) instance_buffer: Tracked<wgpu::Buffer>,
    pub(crate) capacity: u32,
}

impl ParticleResources {
    /// Upload this frame's uniforms and particle positions.
    pub(crate) fn write(&self, queue: &wgpu::Queue, frame: &SceneFrame, instances: &[u8]) {
        let u = ParticleUniforms {
            view_proj: frame.view_proj.to_cols_array_2d(),
            model: frame.field_model.to_cols_array_2d(),
            color: [
                PARTICLE_COLOR[0],
                PARTICLE_COLOR[1],
                PARTICLE_COLOR[2],
                PARTICLE_OPACITY,
            ],
            params: [sprite_world_size(PARTICLE_SIZE), 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
        let max_bytes = self.capacity as usize * std::mem::size_of::<Particle>();
        let n = instances.len().min(max_bytes);
        if n > 0 {
            queue.write_buffer(&self.instance_buffer, 0, &instances[..n]);
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, count: u32) {
        let count = count.min(self.capacity);
        if count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &*self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..count);
    }
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    color_format: wgpu::TextureFormat,
    capacity: u32,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("particles_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let additive = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::Zero,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    };
    let pipeline = helpers::make_pipeline(
        device,
        "particles_pipeline",
        &pl,
        &shader,
        "vs_particle",
        "fs_particle",
        &[wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Particle>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        }],
        color_format,
        Some(additive),
    );

    let texels = sprite_texels(SPRITE_TEXTURE_SIZE);
    let (sprite, sprite_view) =
        helpers::create_sprite_texture(device, queue, "particle_sprite", SPRITE_TEXTURE_SIZE, &texels);
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("particle_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    let uniform_buffer = helpers::uniform_buffer(
        device,
        "particles_uniforms",
        std::mem::size_of::<ParticleUniforms>(),
    );
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("particles_instances"),
        size: (capacity.max(1) as usize * std::mem::size_of::<Particle>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("particles_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&sprite_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });

    ParticleResources {
        pipeline: Tracked::new(pipeline),
        bind_group: Tracked::new(bind_group),
        sampler: Tracked::new(sampler),
        sprite_view: Tracked::new(sprite_view),
        sprite: Tracked::new(sprite),
        uniform_buffer: Tracked::new(uniform_buffer),
        instance_buffer: Tracked::new(instance_buffer),
        capacity,
    }
}
