use super::resources::{MarkerInstance, SceneInstance, DEPTH_FORMAT};
use super::shaders::{OVERLAY_SHADER, SCENE_SHADER};
use crate::mesh::Vertex;
use wgpu::*;

pub struct PipelineState {
    pub scene_pipeline: RenderPipeline,
    pub overlay_pipeline: RenderPipeline,
    pub camera_layout: BindGroupLayout,
}

pub fn create_pipelines(device: &Device, format: TextureFormat) -> PipelineState {
    // 1. Camera bind group layout
    let camera_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Camera Bind Group Layout"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let vertex_buffer_layout = VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: VertexStepMode::Vertex,
        attributes: &vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };

    // 2. Scene pipeline: camera, depth-tested cubes
    let scene_shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Scene Shader"),
        source: ShaderSource::Wgsl(SCENE_SHADER.into()),
    });

    let scene_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Scene Pipeline Layout"),
        bind_group_layouts: &[&camera_layout],
        push_constant_ranges: &[],
    });

    let scene_instance_layout = VertexBufferLayout {
        array_stride: std::mem::size_of::<SceneInstance>() as u64,
        step_mode: VertexStepMode::Instance,
        attributes: &vertex_attr_array![
            2 => Float32x4, // model matrix columns
            3 => Float32x4,
            4 => Float32x4,
            5 => Float32x4,
            6 => Float32x4, // tint
        ],
    };

    let scene_pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("Scene Pipeline"),
        layout: Some(&scene_layout),
        vertex: VertexState {
            module: &scene_shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_buffer_layout.clone(), scene_instance_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &scene_shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: Some(DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: CompareFunction::LessEqual,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
        }),
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    // 3. Overlay pipeline: clip-space score markers on top of the scene
    let overlay_shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Overlay Shader"),
        source: ShaderSource::Wgsl(OVERLAY_SHADER.into()),
    });

    let overlay_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Overlay Pipeline Layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });

    let marker_instance_layout = VertexBufferLayout {
        array_stride: std::mem::size_of::<MarkerInstance>() as u64,
        step_mode: VertexStepMode::Instance,
        attributes: &vertex_attr_array![
            2 => Float32x4, // transform
            3 => Float32x4, // tint
        ],
    };

    let overlay_pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("Overlay Pipeline"),
        layout: Some(&overlay_layout),
        vertex: VertexState {
            module: &overlay_shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_buffer_layout, marker_instance_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &overlay_shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::ALPHA_BLENDING),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        // Drawn in the same pass as the scene; markers always win
        depth_stencil: Some(DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: CompareFunction::Always,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
        }),
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    PipelineState {
        scene_pipeline,
        overlay_pipeline,
        camera_layout,
    }
}
