// src/native.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::MeshOptions;
use crate::mesh::{box_mesh, capsule_mesh, circle_mesh, polygon_mesh, Mesh};
use crate::path::PolygonPath;
use crate::shape::{CapsuleDirection, ColliderShape, ShapeKind};

/// A host engine's physics collider, described by its own fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NativeCollider {
    Box { offset: Vec2, size: Vec2 },
    Capsule { offset: Vec2, size: Vec2, direction: CapsuleDirection },
    Circle { offset: Vec2, radius: f32 },
    Polygon { offset: Vec2, paths: Vec<Vec<Vec2>> },
}

impl NativeCollider {
    pub fn offset(&self) -> Vec2 {
        match self {
            NativeCollider::Box { offset, .. }
            | NativeCollider::Capsule { offset, .. }
            | NativeCollider::Circle { offset, .. }
            | NativeCollider::Polygon { offset, .. } => *offset,
        }
    }

    /// Equivalent local shape, positioned at the collider's offset.
    pub fn to_shape(&self) -> ColliderShape {
        let kind = match self {
            NativeCollider::Box { size, .. } => ShapeKind::Box { size: *size },
            NativeCollider::Capsule { size, direction, .. } => {
                ShapeKind::Capsule { size: *size, direction: *direction }
            }
            NativeCollider::Circle { radius, .. } => ShapeKind::Circle { radius: *radius },
            NativeCollider::Polygon { paths, .. } => ShapeKind::Polygon {
                paths: paths.iter().map(|path| PolygonPath::from(path.as_slice())).collect(),
            },
        };
        ColliderShape::from_kind(kind).with_position(self.offset())
    }

    /// Mesh with the offset baked into the vertices.
    pub fn build_mesh(&self, options: &MeshOptions) -> Mesh {
        let flip_y = options.flip_y;
        match self {
            NativeCollider::Box { offset, size } => box_mesh(*size, *offset, flip_y),
            NativeCollider::Capsule { offset, size, direction } => {
                capsule_mesh(*size, *direction, *offset, flip_y)
            }
            NativeCollider::Circle { offset, radius } => circle_mesh(*radius, *offset, flip_y),
            NativeCollider::Polygon { offset, paths } => polygon_mesh(paths.as_slice(), *offset, flip_y),
        }
    }
}

impl From<&ColliderShape> for NativeCollider {
    /// Rotation has no native counterpart and is dropped.
    fn from(shape: &ColliderShape) -> Self {
        let offset = shape.position;
        match &shape.kind {
            ShapeKind::Box { size } => NativeCollider::Box { offset, size: *size },
            ShapeKind::Capsule { size, direction } => {
                NativeCollider::Capsule { offset, size: *size, direction: *direction }
            }
            ShapeKind::Circle { radius } => NativeCollider::Circle { offset, radius: *radius },
            ShapeKind::Polygon { paths } => NativeCollider::Polygon {
                offset,
                paths: paths.iter().map(|path| path.points().to_vec()).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{CIRCLE_MESH_NAME, POLYGON_MESH_NAME};

    #[test]
    fn to_shape_uses_offset_as_position() {
        let native = NativeCollider::Circle { offset: Vec2::new(2.0, -1.0), radius: 0.75 };
        let shape = native.to_shape();
        assert_eq!(shape.position, Vec2::new(2.0, -1.0));
        assert_eq!(shape.rotation, 0.0);
        assert_eq!(shape.kind, ShapeKind::Circle { radius: 0.75 });
        assert!(shape.contains(Vec2::new(2.5, -1.0)));
    }

    #[test]
    fn polygon_paths_are_copied() {
        let native = NativeCollider::Polygon {
            offset: Vec2::ONE,
            paths: vec![vec![Vec2::ZERO, Vec2::X, Vec2::Y], vec![]],
        };
        let shape = native.to_shape();
        let paths = shape.paths().unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].points(), &[Vec2::ZERO, Vec2::X, Vec2::Y]);
        assert!(paths[1].is_empty());
        assert_eq!(NativeCollider::from(&shape), native);
    }

    #[test]
    fn mesh_includes_offset() {
        let native = NativeCollider::Circle { offset: Vec2::new(3.0, 4.0), radius: 1.0 };
        let mesh = native.build_mesh(&MeshOptions::default());
        assert_eq!(mesh.name, CIRCLE_MESH_NAME);
        assert_eq!(mesh.bounds.min.truncate(), Vec2::new(2.0, 3.0));
        assert_eq!(mesh.bounds.max.truncate(), Vec2::new(4.0, 5.0));

        let flipped = native.build_mesh(&MeshOptions::flipped());
        assert_eq!(flipped.bounds.min.truncate(), Vec2::new(2.0, -5.0));
    }

    #[test]
    fn polygon_mesh_offsets_every_path() {
        let native = NativeCollider::Polygon {
            offset: Vec2::new(10.0, 0.0),
            paths: vec![
                vec![Vec2::ZERO, Vec2::X, Vec2::Y],
                vec![Vec2::new(5.0, 5.0), Vec2::new(6.0, 5.0), Vec2::new(5.0, 6.0)],
            ],
        };
        let mesh = native.build_mesh(&MeshOptions::default());
        assert_eq!(mesh.name, POLYGON_MESH_NAME);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.bounds.min.x, 10.0);
        assert_eq!(mesh.bounds.max.x, 16.0);
    }
}
