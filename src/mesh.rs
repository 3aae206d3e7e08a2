use glam::Vec3;
use std::f32::consts::{PI, TAU};

use crate::math::SurfaceFunction;

/// Interleaved vertex for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle mesh: positions, per-vertex normals, UVs.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleave attributes for the vertex buffer.
    pub fn vertex_data(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| Vertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: *uv,
            })
            .collect()
    }

    /// Flat grid in the XZ plane (+Y up), `(segments_x + 1) * (segments_z + 1)`
    /// vertices spanning [-width/2, width/2] x [-height/2, height/2].
    pub fn plane(width: f32, height: f32, segments_x: u32, segments_z: u32) -> Self {
        let cols = segments_x + 1;
        let rows = segments_z + 1;

        let mut positions = Vec::with_capacity((cols * rows) as usize);
        let mut normals = Vec::with_capacity((cols * rows) as usize);
        let mut uvs = Vec::with_capacity((cols * rows) as usize);

        for iz in 0..rows {
            let tz = iz as f32 / segments_z as f32;
            let z = (tz - 0.5) * height;
            for ix in 0..cols {
                let tx = ix as f32 / segments_x as f32;
                let x = (tx - 0.5) * width;
                positions.push(Vec3::new(x, 0.0, z));
                normals.push(Vec3::Y);
                uvs.push([tx, 1.0 - tz]);
            }
        }

        let mut indices = Vec::with_capacity((segments_x * segments_z * 6) as usize);
        for iz in 0..segments_z {
            for ix in 0..segments_x {
                let a = iz * cols + ix;
                let b = a + cols;
                indices.extend_from_slice(&[a, b, a + 1]);
                indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }

        Self {
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Displaced grid: a plane with `y = f(x, z)` applied per vertex and
    /// normals recomputed from the displaced positions.
    pub fn surface(
        function: SurfaceFunction,
        width: f32,
        height: f32,
        segments_x: u32,
        segments_z: u32,
    ) -> Self {
        let mut mesh = Self::plane(width, height, segments_x, segments_z);
        for p in &mut mesh.positions {
            p.y = function.sample(p.x, p.z);
        }
        mesh.compute_vertex_normals();
        mesh
    }

    /// UV sphere with outward normals.
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let cols = width_segments + 1;

        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut uvs = Vec::new();

        for iy in 0..=height_segments {
            let v = iy as f32 / height_segments as f32;
            let theta = v * PI;
            for ix in 0..cols {
                let u = ix as f32 / width_segments as f32;
                let phi = u * TAU;
                let dir = Vec3::new(
                    theta.sin() * phi.cos(),
                    theta.cos(),
                    theta.sin() * phi.sin(),
                );
                positions.push(dir * radius);
                normals.push(dir);
                uvs.push([1.0 - u, v]);
            }
        }

        let mut indices = Vec::new();
        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = iy * cols + ix;
                let b = a + cols;
                if iy != 0 {
                    indices.extend_from_slice(&[a, a + 1, b]);
                }
                if iy != height_segments - 1 {
                    indices.extend_from_slice(&[b, a + 1, b + 1]);
                }
            }
        }

        Self {
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Closed cylinder along +Y, centered at the origin.
    pub fn cylinder(radius: f32, length: f32, radial_segments: u32) -> Self {
        let cols = radial_segments + 1;
        let half = length * 0.5;

        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut uvs = Vec::new();
        let mut indices = Vec::new();

        // Side wall: two rings with radial normals.
        for (ring, y) in [(0u32, -half), (1u32, half)] {
            for ix in 0..cols {
                let u = ix as f32 / radial_segments as f32;
                let phi = u * TAU;
                let radial = Vec3::new(phi.cos(), 0.0, phi.sin());
                positions.push(radial * radius + Vec3::new(0.0, y, 0.0));
                normals.push(radial);
                uvs.push([u, ring as f32]);
            }
        }
        for ix in 0..radial_segments {
            let a = ix;
            let b = ix + cols;
            indices.extend_from_slice(&[a, b, a + 1]);
            indices.extend_from_slice(&[a + 1, b, b + 1]);
        }

        // Caps: fan around a center vertex, axial normals.
        for (sign, y) in [(1.0f32, half), (-1.0f32, -half)] {
            let center = positions.len() as u32;
            positions.push(Vec3::new(0.0, y, 0.0));
            normals.push(Vec3::Y * sign);
            uvs.push([0.5, 0.5]);

            let ring_start = positions.len() as u32;
            for ix in 0..cols {
                let phi = ix as f32 / radial_segments as f32 * TAU;
                positions.push(Vec3::new(phi.cos() * radius, y, phi.sin() * radius));
                normals.push(Vec3::Y * sign);
                uvs.push([0.5 + phi.cos() * 0.5, 0.5 + phi.sin() * 0.5 * sign]);
            }
            for ix in 0..radial_segments {
                let a = ring_start + ix;
                if sign > 0.0 {
                    indices.extend_from_slice(&[center, a + 1, a]);
                } else {
                    indices.extend_from_slice(&[center, a, a + 1]);
                }
            }
        }

        Self {
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Recompute per-vertex normals from the current positions: accumulate
    /// area-weighted face normals, then normalize. Degenerate vertices keep
    /// a +Y normal.
    pub fn compute_vertex_normals(&mut self) {
        self.normals = vec![Vec3::ZERO; self.positions.len()];

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let edge1 = self.positions[i1] - p0;
            let edge2 = self.positions[i2] - p0;
            let face = edge1.cross(edge2);
            self.normals[i0] += face;
            self.normals[i1] += face;
            self.normals[i2] += face;
        }

        for n in &mut self.normals {
            *n = n.try_normalize().unwrap_or(Vec3::Y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_vertex_and_triangle_counts() {
        let mesh = Mesh::plane(2.0, 2.0, 20, 20);
        assert_eq!(mesh.vertex_count(), 441);
        assert_eq!(mesh.triangle_count(), 800);
        assert_eq!(mesh.uvs.len(), 441);
    }

    #[test]
    fn plane_spans_half_extents() {
        let mesh = Mesh::plane(4.0, 2.0, 8, 8);
        let min_x = mesh.positions.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let max_x = mesh.positions.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        let max_z = mesh.positions.iter().map(|p| p.z).fold(f32::MIN, f32::max);
        assert!((min_x + 2.0).abs() < 1e-6);
        assert!((max_x - 2.0).abs() < 1e-6);
        assert!((max_z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn flat_plane_normals_point_up() {
        let mut mesh = Mesh::plane(2.0, 2.0, 4, 4);
        mesh.compute_vertex_normals();
        for n in &mesh.normals {
            assert!((n.y - 1.0).abs() < 1e-5, "normal {n:?}");
        }
    }

    #[test]
    fn surface_applies_sampler_to_every_vertex() {
        let mesh = Mesh::surface(SurfaceFunction::SinWave, 2.0, 2.0, 20, 20);
        assert_eq!(mesh.vertex_count(), 441);
        for p in &mesh.positions {
            let expected = SurfaceFunction::SinWave.sample(p.x, p.z);
            assert!((p.y - expected).abs() < 1e-6, "at ({}, {})", p.x, p.z);
        }
    }

    #[test]
    fn surface_normals_reflect_displacement() {
        let mesh = Mesh::surface(SurfaceFunction::Saddle, 2.0, 2.0, 10, 10);
        // A saddle is not flat; normals must tilt away from +Y somewhere.
        let tilted = mesh.normals.iter().any(|n| n.y < 0.99);
        assert!(tilted);
        for n in &mesh.normals {
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_vertices_on_radius() {
        let mesh = Mesh::sphere(2.5, 16, 12);
        assert_eq!(mesh.vertex_count(), 17 * 13);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            assert!((p.length() - 2.5).abs() < 1e-4);
            assert!((n.length() - 1.0).abs() < 1e-4);
            // Outward normal is the radial direction.
            assert!((*p - *n * 2.5).length() < 1e-4);
        }
    }

    #[test]
    fn cylinder_extents_match_length() {
        let mesh = Mesh::cylinder(0.3, 4.0, 22);
        let min_y = mesh.positions.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let max_y = mesh.positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!((min_y + 2.0).abs() < 1e-5);
        assert!((max_y - 2.0).abs() < 1e-5);
        for p in &mesh.positions {
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!(r < 0.3 + 1e-5);
        }
    }

    #[test]
    fn vertex_data_interleaves_all_attributes() {
        let mesh = Mesh::plane(1.0, 1.0, 2, 2);
        let data = mesh.vertex_data();
        assert_eq!(data.len(), mesh.vertex_count());
        assert_eq!(data[0].position, mesh.positions[0].to_array());
        assert_eq!(data[0].normal, mesh.normals[0].to_array());
    }
}
