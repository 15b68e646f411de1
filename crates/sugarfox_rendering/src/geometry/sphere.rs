//! # Sphere Geometry
//!
//! UV sphere mesh for the hero and the per-frame transform that spins and
//! scales it.
//!
//! The mesh is generated once at mount and never touched again; all motion
//! happens in the model matrix and the vertex shader.

use bytemuck::{Pod, Zeroable};

use sugarfox_shared::constants::{
    SCALE_PER_SCROLL, SPHERE_MAX_SEGMENTS, SPIN_X_BASE, SPIN_X_PER_SCROLL, SPIN_Y_BASE,
    SPIN_Y_PER_SCROLL,
};
use sugarfox_shared::Mat4;

/// Sphere vertex: rest position and outward normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SphereVertex {
    /// Rest position
    pub position: [f32; 3],
    /// Unit normal
    pub normal: [f32; 3],
}

impl SphereVertex {
    /// Size in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Vertex buffer layout
    #[must_use]
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Indexed triangle mesh of a UV sphere.
#[derive(Debug, Clone, Default)]
pub struct SphereMesh {
    /// Vertices, `(stacks + 1) * (slices + 1)` of them (seam duplicated)
    pub vertices: Vec<SphereVertex>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Generates a sphere with `segments` slices around and `segments`
    /// stacks from pole to pole.
    ///
    /// `segments` is clamped to `[3, SPHERE_MAX_SEGMENTS]` so every index
    /// fits in a `u32`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn generate(radius: f32, segments: u32) -> Self {
        let segments = segments.clamp(3, SPHERE_MAX_SEGMENTS);
        let slices = segments;
        let stacks = segments;

        let ring = slices + 1;
        let vertex_count = ring as usize * (stacks as usize + 1);
        let mut vertices = Vec::with_capacity(vertex_count);
        let mut indices = Vec::with_capacity(slices as usize * stacks as usize * 6);

        for stack in 0..=stacks {
            let v = stack as f32 / stacks as f32;
            let phi = v * std::f32::consts::PI;
            let (sin_phi, cos_phi) = phi.sin_cos();

            for slice in 0..=slices {
                let u = slice as f32 / slices as f32;
                let theta = u * std::f32::consts::TAU;
                let (sin_theta, cos_theta) = theta.sin_cos();

                let normal = [-cos_theta * sin_phi, cos_phi, sin_theta * sin_phi];
                vertices.push(SphereVertex {
                    position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                    normal,
                });
            }
        }

        for stack in 0..stacks {
            for slice in 0..slices {
                let a = stack * ring + slice;
                let b = a + ring;

                // The pole rows are degenerate; skip their collapsed triangle.
                if stack != 0 {
                    indices.extend_from_slice(&[a, b, a + 1]);
                }
                if stack != stacks - 1 {
                    indices.extend_from_slice(&[b, b + 1, a + 1]);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertices as bytes for GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Indices as bytes for GPU upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Accumulated spin and current scale of the sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereTransform {
    /// Rotation about X, radians
    pub rotation_x: f32,
    /// Rotation about Y, radians
    pub rotation_y: f32,
    /// Uniform scale
    pub scale: f32,
}

impl SphereTransform {
    /// Unrotated, unit scale.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }

    /// Spins by one frame and rescales for `scroll`.
    pub fn advance(&mut self, scroll: f32) {
        self.rotation_y += SPIN_Y_BASE + scroll * SPIN_Y_PER_SCROLL;
        self.rotation_x += SPIN_X_BASE + scroll * SPIN_X_PER_SCROLL;
        self.scale = 1.0 + scroll * SCALE_PER_SCROLL;
    }

    /// Model matrix (`Rx * Ry * S`).
    #[must_use]
    pub fn model(&self) -> Mat4 {
        Mat4::rotation_x(self.rotation_x)
            .mul(&Mat4::rotation_y(self.rotation_y))
            .mul(&Mat4::scale(self.scale))
    }
}

impl Default for SphereTransform {
    fn default() -> Self {
        Self::new()
    }
}
