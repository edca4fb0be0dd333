// src/mesh.rs

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::config::MeshOptions;
use crate::geometry::orient;
use crate::shape::{CapsuleDirection, ColliderShape, ShapeKind};
use crate::triangulator::Triangulator;

pub const SQRT2_DIV2: f32 = 0.70710678118;
pub const SQRT3_DIV2: f32 = 0.86602540378;
pub const COS15: f32 = 0.96592582628;
pub const SIN15: f32 = 0.2588190451;

pub const RING_POINTS: usize = 24;
pub const CAPSULE_POINTS: usize = 26;

/// Unit directions every 15 degrees, clockwise from straight up.
const RING: [Vec2; RING_POINTS] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(SIN15, COS15),
    Vec2::new(0.5, SQRT3_DIV2),
    Vec2::new(SQRT2_DIV2, SQRT2_DIV2),
    Vec2::new(SQRT3_DIV2, 0.5),
    Vec2::new(COS15, SIN15),
    Vec2::new(1.0, 0.0),
    Vec2::new(COS15, -SIN15),
    Vec2::new(SQRT3_DIV2, -0.5),
    Vec2::new(SQRT2_DIV2, -SQRT2_DIV2),
    Vec2::new(0.5, -SQRT3_DIV2),
    Vec2::new(SIN15, -COS15),
    Vec2::new(0.0, -1.0),
    Vec2::new(-SIN15, -COS15),
    Vec2::new(-0.5, -SQRT3_DIV2),
    Vec2::new(-SQRT2_DIV2, -SQRT2_DIV2),
    Vec2::new(-SQRT3_DIV2, -0.5),
    Vec2::new(-COS15, -SIN15),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-COS15, SIN15),
    Vec2::new(-SQRT3_DIV2, 0.5),
    Vec2::new(-SQRT2_DIV2, SQRT2_DIV2),
    Vec2::new(-0.5, SQRT3_DIV2),
    Vec2::new(-SIN15, COS15),
];

pub const BOX_MESH_NAME: &str = "BoxCollider2D";
pub const CAPSULE_MESH_NAME: &str = "CapsuleCollider2D";
pub const CIRCLE_MESH_NAME: &str = "CircleCollider2D";
pub const POLYGON_MESH_NAME: &str = "PolygonCollider2D";

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
    pub normals: Vec<Vec3>,
    pub bounds: Aabb,
}

impl Mesh {
    /// Triangulates one contour. `points` is never modified; with `flip_y` a
    /// mirrored copy is triangulated instead.
    pub fn from_points(points: &[Vec2], flip_y: bool) -> Self {
        let flipped: Vec<Vec2>;
        let points = if flip_y {
            flipped = points.iter().map(|p| Vec2::new(p.x, -p.y)).collect();
            &flipped[..]
        } else {
            points
        };

        let mut mesh = Mesh {
            name: String::new(),
            vertices: points.iter().map(|p| p.extend(0.0)).collect(),
            triangles: Triangulator::new(points).triangulate(),
            normals: Vec::new(),
            bounds: Aabb::default(),
        };
        mesh.recalculate();
        mesh
    }

    /// Concatenates meshes, offsetting each one's indices past the vertices before it.
    pub fn combine<'a, I>(meshes: I) -> Self
    where
        I: IntoIterator<Item = &'a Mesh>,
    {
        let mut combined = Mesh::default();
        for mesh in meshes {
            let base = combined.vertices.len() as u32;
            combined.vertices.extend_from_slice(&mesh.vertices);
            combined.triangles.extend(mesh.triangles.iter().map(|&i| i + base));
        }
        combined.recalculate();
        combined
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Sum of the triangle areas.
    pub fn area(&self) -> f32 {
        self.triangles
            .chunks_exact(3)
            .map(|t| {
                let a = self.vertices[t[0] as usize].truncate();
                let b = self.vertices[t[1] as usize].truncate();
                let c = self.vertices[t[2] as usize].truncate();
                orient(a, b, c).abs() * 0.5
            })
            .sum()
    }

    pub fn recalculate(&mut self) {
        self.recalculate_normals();
        self.recalculate_bounds();
    }

    /// Per-vertex sum of face normals, normalized. Unused vertices get zero.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];
        for t in self.triangles.chunks_exact(3) {
            let (a, b, c) = (t[0] as usize, t[1] as usize, t[2] as usize);
            let face = (self.vertices[b] - self.vertices[a]).cross(self.vertices[c] - self.vertices[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        for normal in normals.iter_mut() {
            *normal = normal.normalize_or_zero();
        }
        self.normals = normals;
    }

    pub fn recalculate_bounds(&mut self) {
        let mut vertices = self.vertices.iter().copied();
        self.bounds = match vertices.next() {
            Some(first) => {
                let (min, max) = vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
                Aabb { min, max }
            }
            None => Aabb::default(),
        };
    }

    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .zip(self.normals.iter().chain(std::iter::repeat(&Vec3::ZERO)))
            .map(|(position, normal)| Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
            })
            .collect()
    }

    /// Interleaved position/normal data ready for upload.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_vertices()).to_vec()
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}

pub fn box_points(size: Vec2, offset: Vec2) -> Vec<Vec2> {
    let half = size * 0.5;
    vec![
        offset + Vec2::new(-half.x, half.y),
        offset + half,
        offset + Vec2::new(half.x, -half.y),
        offset - half,
    ]
}

pub fn circle_points(radius: f32, offset: Vec2) -> Vec<Vec2> {
    RING.iter().map(|&dir| offset + dir * radius).collect()
}

/// Outline of a capsule. Collapses to a 24-point circle when the long axis is
/// not longer than the short one; otherwise two 13-point half rings joined at
/// their ends.
pub fn capsule_points(size: Vec2, direction: CapsuleDirection, offset: Vec2) -> Vec<Vec2> {
    let (short, long, axis, start) = match direction {
        CapsuleDirection::Vertical => (size.x, size.y, Vec2::Y, 18),
        CapsuleDirection::Horizontal => (size.y, size.x, Vec2::X, 0),
    };
    if short >= long {
        return circle_points(short * 0.5, offset);
    }

    let radius = short * 0.5;
    let center = axis * (long * 0.5 - radius);
    let half = RING_POINTS / 2;
    let first = (start..=start + half).map(|i| offset + center + RING[i % RING_POINTS] * radius);
    let second = (start + half..=start + RING_POINTS)
        .map(|i| offset - center + RING[i % RING_POINTS] * radius);
    first.chain(second).collect()
}

/// Meshes every path on its own and concatenates the results.
pub fn polygon_mesh<P>(paths: &[P], offset: Vec2, flip_y: bool) -> Mesh
where
    P: AsRef<[Vec2]>,
{
    let parts: Vec<Mesh> = paths
        .iter()
        .map(|path| {
            let points: Vec<Vec2> = path.as_ref().iter().map(|&p| offset + p).collect();
            Mesh::from_points(&points, flip_y)
        })
        .collect();
    Mesh::combine(&parts).with_name(POLYGON_MESH_NAME)
}

pub fn box_mesh(size: Vec2, offset: Vec2, flip_y: bool) -> Mesh {
    Mesh::from_points(&box_points(size, offset), flip_y).with_name(BOX_MESH_NAME)
}

pub fn circle_mesh(radius: f32, offset: Vec2, flip_y: bool) -> Mesh {
    Mesh::from_points(&circle_points(radius, offset), flip_y).with_name(CIRCLE_MESH_NAME)
}

pub fn capsule_mesh(size: Vec2, direction: CapsuleDirection, offset: Vec2, flip_y: bool) -> Mesh {
    Mesh::from_points(&capsule_points(size, direction, offset), flip_y).with_name(CAPSULE_MESH_NAME)
}

impl ColliderShape {
    /// Mesh around the local origin. Position and rotation are left to the
    /// renderer's transform.
    pub fn build_mesh(&self, options: &MeshOptions) -> Mesh {
        let flip_y = options.flip_y;
        let mesh = match &self.kind {
            ShapeKind::Box { size } => box_mesh(*size, Vec2::ZERO, flip_y),
            ShapeKind::Capsule { size, direction } => capsule_mesh(*size, *direction, Vec2::ZERO, flip_y),
            ShapeKind::Circle { radius } => circle_mesh(*radius, Vec2::ZERO, flip_y),
            ShapeKind::Polygon { paths } => polygon_mesh(paths.as_slice(), Vec2::ZERO, flip_y),
        };
        log::debug!(
            "built {} mesh: {} vertices, {} triangles",
            mesh.name,
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PolygonPath;
    use crate::shape::ColliderType;
    use approx::assert_relative_eq;

    #[test]
    fn ring_is_unit_length() {
        for dir in RING {
            assert_relative_eq!(dir.length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn box_mesh_is_two_triangles() {
        let mesh = box_mesh(Vec2::new(2.0, 4.0), Vec2::ZERO, false);
        assert_eq!(mesh.name, BOX_MESH_NAME);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_relative_eq!(mesh.area(), 8.0, epsilon = 1e-5);
        assert_eq!(mesh.bounds, Aabb { min: Vec3::new(-1.0, -2.0, 0.0), max: Vec3::new(1.0, 2.0, 0.0) });
    }

    #[test]
    fn normals_face_negative_z() {
        let mesh = circle_mesh(1.0, Vec2::ZERO, false);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
        for normal in &mesh.normals {
            assert_relative_eq!(normal.z, -1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn tiny_circle_is_still_meshed() {
        let mesh = ColliderShape::from_kind(ShapeKind::Circle { radius: 1e-4 })
            .build_mesh(&MeshOptions::default());
        assert_eq!(mesh.vertices.len(), RING_POINTS);
        assert_eq!(mesh.triangle_count(), RING_POINTS - 2);
        assert_relative_eq!(mesh.area(), std::f32::consts::PI * 1e-8, max_relative = 0.1);
    }

    #[test]
    fn circle_mesh_is_24_gon() {
        let mesh = circle_mesh(2.0, Vec2::new(1.0, 1.0), false);
        assert_eq!(mesh.vertices.len(), RING_POINTS);
        assert_eq!(mesh.triangle_count(), RING_POINTS - 2);
        // regular 24-gon area: n/2 * r^2 * sin(2pi/n)
        let expected = 12.0 * 4.0 * (std::f32::consts::TAU / 24.0).sin();
        assert_relative_eq!(mesh.area(), expected, epsilon = 1e-3);
        assert!(mesh.vertices.iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn capsule_outline_layout() {
        let points = capsule_points(Vec2::new(1.0, 3.0), CapsuleDirection::Vertical, Vec2::ZERO);
        assert_eq!(points.len(), CAPSULE_POINTS);
        assert_eq!(points[0], Vec2::new(-0.5, 1.0));
        assert_eq!(points[6], Vec2::new(0.0, 1.5));
        assert_eq!(points[12], Vec2::new(0.5, 1.0));
        assert_eq!(points[13], Vec2::new(0.5, -1.0));
        assert_eq!(points[19], Vec2::new(0.0, -1.5));
        assert_eq!(points[25], Vec2::new(-0.5, -1.0));

        let points = capsule_points(Vec2::new(3.0, 1.0), CapsuleDirection::Horizontal, Vec2::ZERO);
        assert_eq!(points.len(), CAPSULE_POINTS);
        assert_eq!(points[0], Vec2::new(1.0, 0.5));
        assert_eq!(points[6], Vec2::new(1.5, 0.0));
        assert_eq!(points[12], Vec2::new(1.0, -0.5));
        assert_eq!(points[13], Vec2::new(-1.0, -0.5));
        assert_eq!(points[25], Vec2::new(-1.0, 0.5));
    }

    #[test]
    fn capsule_mesh_counts() {
        let mesh = capsule_mesh(Vec2::new(1.0, 3.0), CapsuleDirection::Vertical, Vec2::ZERO, false);
        assert_eq!(mesh.name, CAPSULE_MESH_NAME);
        assert_eq!(mesh.vertices.len(), CAPSULE_POINTS);
        assert_eq!(mesh.triangle_count(), CAPSULE_POINTS - 2);
    }

    #[test]
    fn wide_vertical_capsule_is_a_circle() {
        let points = capsule_points(Vec2::new(2.0, 1.0), CapsuleDirection::Vertical, Vec2::ZERO);
        assert_eq!(points, circle_points(1.0, Vec2::ZERO));
    }

    #[test]
    fn flip_y_mirrors_without_touching_input() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0)];
        let snapshot = points.clone();
        let mesh = Mesh::from_points(&points, true);
        assert_eq!(points, snapshot);
        assert_eq!(mesh.vertices[1], Vec3::new(1.0, -2.0, 0.0));
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.bounds.min, Vec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn polygon_paths_are_concatenated() {
        let mut shape = ColliderShape::new(ColliderType::Polygon);
        shape.paths_mut().unwrap().push(PolygonPath::from(box_points(Vec2::ONE, Vec2::new(3.0, 0.0))));
        let mesh = shape.build_mesh(&MeshOptions::default());
        assert_eq!(mesh.name, POLYGON_MESH_NAME);
        assert_eq!(mesh.vertices.len(), 9);
        assert_eq!(mesh.triangle_count(), 5);
        assert!(mesh.triangles[9..].iter().all(|&i| i >= 5));
    }

    #[test]
    fn degenerate_paths_keep_vertices() {
        let shape = ColliderShape::from_kind(ShapeKind::Polygon {
            paths: vec![PolygonPath::from(vec![Vec2::ZERO, Vec2::ONE]), PolygonPath::new()],
        });
        let mesh = shape.build_mesh(&MeshOptions::default());
        assert_eq!(mesh.vertices.len(), 2);
        assert!(mesh.is_empty());
        assert_eq!(mesh.normals, vec![Vec3::ZERO; 2]);
    }

    #[test]
    fn vertex_bytes_are_interleaved() {
        let mesh = box_mesh(Vec2::ONE, Vec2::ZERO, false);
        let bytes = mesh.vertex_bytes();
        assert_eq!(bytes.len(), 4 * std::mem::size_of::<Vertex>());
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
        let second_position: &[u8] = bytemuck::cast_slice(&[0.5f32, 0.5, 0.0]);
        assert_eq!(&bytes[24..36], second_position);
    }
}
