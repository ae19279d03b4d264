/// Mesh vertex for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Camera and lighting uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = eye position
    pub eye: [f32; 4],
    /// xyz = point light position, w = intensity
    pub light: [f32; 4],
    /// rgb = ambient radiance
    pub ambient: [f32; 4],
}

/// Shading model discriminant shared with the shader
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShadingModel {
    Lambert = 0,
    Standard = 1,
    Physical = 2,
    Phong = 3,
}

/// Per-instance transform and material parameters for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub shading_model: u32,
    /// roughness, metalness, clearcoat, clearcoat roughness
    pub pbr: [f32; 4],
    /// x = shininess
    pub phong: [f32; 4],
}
