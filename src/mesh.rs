//! CPU tessellation of the catalog primitives.
//!
//! Vertex order and segment conventions match the usual y-up primitive
//! generators so the shapes look the same as in other engines.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::geometry::Primitive;
use crate::types::Vertex;

/// Indexed triangle list
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        });
        index
    }

    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
}

pub fn tessellate(primitive: &Primitive) -> Mesh {
    match *primitive {
        Primitive::Sphere {
            radius,
            width_segments,
            height_segments,
        } => sphere(radius, width_segments, height_segments),
        Primitive::Box {
            width,
            height,
            depth,
        } => cuboid(width, height, depth),
        Primitive::Cone {
            radius,
            height,
            radial_segments,
        } => cylinder(0.0, radius, height, radial_segments),
        Primitive::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        } => cylinder(radius_top, radius_bottom, height, radial_segments),
        Primitive::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => torus(radius, tube, radial_segments, tubular_segments),
        Primitive::TorusKnot {
            radius,
            tube,
            tubular_segments,
            radial_segments,
            p,
            q,
        } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
    }
}

fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let row = width_segments + 1;

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let position = Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.push(position, position);
        }
    }

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // pole rows collapse to a single triangle
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    mesh
}

fn cuboid(width: f32, height: f32, depth: f32) -> Mesh {
    let half = Vec3::new(width, height, depth) * 0.5;
    // (normal, u axis, v axis) per face
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut mesh = Mesh::default();
    for (normal, u, v) in faces {
        let center = normal * half;
        let (u, v) = (u * half, v * half);
        let a = mesh.push(center - u - v, normal);
        let b = mesh.push(center + u - v, normal);
        let c = mesh.push(center + u + v, normal);
        let d = mesh.push(center - u + v, normal);
        mesh.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }
    mesh
}

fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let half_height = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;

    // torso: top ring then bottom ring
    let mut rings = [Vec::new(), Vec::new()];
    for (y, ring) in rings.iter_mut().enumerate() {
        let v = y as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let position = Vec3::new(radius * sin, -v * height + half_height, radius * cos);
            ring.push(mesh.push(position, Vec3::new(sin, slope, cos)));
        }
    }
    for x in 0..radial_segments as usize {
        let a = rings[0][x];
        let b = rings[1][x];
        let c = rings[1][x + 1];
        let d = rings[0][x + 1];
        if radius_top > 0.0 {
            mesh.indices.extend_from_slice(&[a, b, d]);
        }
        if radius_bottom > 0.0 {
            mesh.indices.extend_from_slice(&[b, c, d]);
        }
    }

    if radius_top > 0.0 {
        cap(&mut mesh, radius_top, half_height, radial_segments, true);
    }
    if radius_bottom > 0.0 {
        cap(&mut mesh, radius_bottom, half_height, radial_segments, false);
    }
    mesh
}

fn cap(mesh: &mut Mesh, radius: f32, half_height: f32, radial_segments: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);
    let y = half_height * sign;

    let center_start = mesh.vertices.len() as u32;
    for _ in 0..radial_segments {
        mesh.push(Vec3::new(0.0, y, 0.0), normal);
    }
    let edge_start = mesh.vertices.len() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.push(Vec3::new(radius * sin, y, radius * cos), normal);
    }

    for x in 0..radial_segments {
        let c = center_start + x;
        let i = edge_start + x;
        if top {
            mesh.indices.extend_from_slice(&[i, i + 1, c]);
        } else {
            mesh.indices.extend_from_slice(&[i + 1, i, c]);
        }
    }
}

fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let row = tubular_segments + 1;

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.push(position, position - center);
        }
    }

    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            mesh.quad(
                row * j + i - 1,
                row * (j - 1) + i - 1,
                row * (j - 1) + i,
                row * j + i,
            );
        }
    }

    mesh
}

fn torus_knot(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32, p: u32, q: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let row = radial_segments + 1;
    let (p, q) = (p as f32, q as f32);

    let curve = |u: f32| {
        let quo_p = q / p * u;
        let cs = quo_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * quo_p.sin() * 0.5,
        )
    };

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);

        // Frenet-like frame along the knot
        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1);
        let normal = binormal.cross(tangent).normalize();
        let binormal = binormal.normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + normal * cx + binormal * cy;
            mesh.push(position, position - p1);
        }
    }

    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            mesh.quad(
                row * (j - 1) + i - 1,
                row * j + i - 1,
                row * j + i,
                row * (j - 1) + i,
            );
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GeometryCatalog, Shape};

    fn mesh_for(shape: Shape) -> Mesh {
        tessellate(&GeometryCatalog::new().get(shape).primitive)
    }

    #[test]
    fn test_vertex_and_index_counts() {
        let expected = [
            (Shape::Sphere, 33 * 33, 32 * 31 * 6),
            (Shape::Box, 24, 36),
            (Shape::Cone, 66 + 65, 96 + 96),
            (Shape::Cylinder, 66 + 2 * 65, 192 + 2 * 96),
            (Shape::Torus, 33 * 65, 32 * 64 * 6),
            (Shape::TorusKnot, 129 * 33, 128 * 32 * 6),
        ];

        for (shape, vertices, indices) in expected {
            let mesh = mesh_for(shape);
            assert_eq!(mesh.vertices.len(), vertices, "{shape} vertices");
            assert_eq!(mesh.indices.len(), indices, "{shape} indices");
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        for shape in Shape::ALL {
            let mesh = mesh_for(shape);
            let count = mesh.vertices.len() as u32;
            assert!(mesh.indices.iter().all(|&i| i < count), "{shape}");
            assert_eq!(mesh.indices.len() % 3, 0);
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for shape in Shape::ALL {
            for vertex in mesh_for(shape).vertices {
                let length = Vec3::from_array(vertex.normal).length();
                assert!((length - 1.0).abs() < 1e-4, "{shape} normal length {length}");
            }
        }
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        for vertex in mesh_for(Shape::Sphere).vertices {
            let length = Vec3::from_array(vertex.position).length();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_box_extents() {
        let mesh = mesh_for(Shape::Box);
        for vertex in &mesh.vertices {
            for c in vertex.position {
                assert!((c.abs() - 1.0).abs() < 1e-6);
            }
        }
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_cone_apex_at_top() {
        let mesh = mesh_for(Shape::Cone);
        let max_y = mesh
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max);
        assert!((max_y - 1.0).abs() < 1e-6);
    }
}
