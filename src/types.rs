use glam::Mat4;

/// Position-only vertex, matching the demo shader's single attribute
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![0 => Float32x3];

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }

    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Camera uniform buffer data for GPU: the clip-space matrix, column-major
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub clip_space: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self {
            clip_space: matrix.to_cols_array_2d(),
        }
    }
}

/// Per-object uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub color: [f32; 4],
}

/// CPU-side mesh description: flat triangle list plus a flat color.
/// Pure data; the renderer turns this into GPU buffers.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub label: &'static str,
    pub vertices: Vec<Vertex>,
    pub color: [f32; 4],
}

impl MeshData {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_matches_struct_size() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
    }

    #[test]
    fn test_camera_uniform_is_column_major() {
        let matrix = Mat4::from_cols_array_2d(&[
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let uniform = CameraUniform::from_matrix(matrix);
        // first column of the matrix is the first array row of the uniform
        assert_eq!(uniform.clip_space[0], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(uniform.clip_space[3], [13.0, 14.0, 15.0, 16.0]);
    }
}
