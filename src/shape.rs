// src/shape.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::{point_in_polygon, rotate_about, Rect};
use crate::path::PolygonPath;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColliderType {
    Box,
    Capsule,
    Circle,
    Polygon,
}

/// Which axis of a capsule holds the two semicircular caps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapsuleDirection {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// `size` is the full extent, not half-extents.
    Box { size: Vec2 },
    Capsule { size: Vec2, direction: CapsuleDirection },
    Circle { radius: f32 },
    /// Every path is an independent contour; the shape is their union.
    Polygon { paths: Vec<PolygonPath> },
}

impl ShapeKind {
    pub fn default_for(ty: ColliderType) -> Self {
        match ty {
            ColliderType::Box => ShapeKind::Box { size: Vec2::ONE },
            ColliderType::Capsule => ShapeKind::Capsule {
                size: Vec2::new(0.5, 1.0),
                direction: CapsuleDirection::Vertical,
            },
            ColliderType::Circle => ShapeKind::Circle { radius: 0.5 },
            ColliderType::Polygon => ShapeKind::Polygon { paths: vec![PolygonPath::pentagon()] },
        }
    }

    pub fn collider_type(&self) -> ColliderType {
        match self {
            ShapeKind::Box { .. } => ColliderType::Box,
            ShapeKind::Capsule { .. } => ColliderType::Capsule,
            ShapeKind::Circle { .. } => ColliderType::Circle,
            ShapeKind::Polygon { .. } => ColliderType::Polygon,
        }
    }
}

/// A collider in the local space of a sprite frame.
///
/// `rotation` is in degrees, clockwise, applied about `position`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColliderShape {
    pub position: Vec2,
    pub rotation: f32,
    pub kind: ShapeKind,
}

impl Default for ColliderShape {
    fn default() -> Self {
        Self::new(ColliderType::Box)
    }
}

impl ColliderShape {
    pub fn new(ty: ColliderType) -> Self {
        Self::from_kind(ShapeKind::default_for(ty))
    }

    pub fn from_kind(kind: ShapeKind) -> Self {
        Self { position: Vec2::ZERO, rotation: 0.0, kind }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn collider_type(&self) -> ColliderType {
        self.kind.collider_type()
    }

    /// Switches the shape type. Parameters of the old type are discarded and the
    /// new type starts from its defaults; position and rotation are kept.
    pub fn set_type(&mut self, ty: ColliderType) {
        if self.collider_type() != ty {
            self.kind = ShapeKind::default_for(ty);
        }
    }

    pub fn paths(&self) -> Option<&[PolygonPath]> {
        match &self.kind {
            ShapeKind::Polygon { paths } => Some(paths),
            _ => None,
        }
    }

    pub fn paths_mut(&mut self) -> Option<&mut Vec<PolygonPath>> {
        match &mut self.kind {
            ShapeKind::Polygon { paths } => Some(paths),
            _ => None,
        }
    }

    /// Axis-aligned bounds in the unrotated local frame.
    pub fn bounds(&self) -> Rect {
        match &self.kind {
            ShapeKind::Box { size } => Rect::from_center_size(self.position, *size),
            ShapeKind::Capsule { size, direction } => {
                Rect::from_center_size(self.position, capsule_extent(*size, *direction))
            }
            ShapeKind::Circle { radius } => {
                Rect::from_center_size(self.position, Vec2::splat(radius * 2.0))
            }
            ShapeKind::Polygon { paths } => {
                let mut points = paths.iter().flat_map(|path| path.iter().copied());
                match points.next() {
                    Some(first) => {
                        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
                        Rect::from_min_max(self.position + min, self.position + max)
                    }
                    None => Rect::ZERO,
                }
            }
        }
    }

    /// Exact point test; `point` is in the same space as `position`.
    pub fn contains(&self, point: Vec2) -> bool {
        let point = if self.rotation != 0.0 {
            rotate_about(point, self.position, self.rotation)
        } else {
            point
        };

        let bounds = self.bounds();
        if !bounds.has_area() || !bounds.contains(point) {
            return false;
        }

        match &self.kind {
            ShapeKind::Box { .. } => true,
            ShapeKind::Capsule { size, direction } => {
                capsule_contains(self.position, *size, *direction, &bounds, point)
            }
            ShapeKind::Circle { radius } => point.distance_squared(self.position) <= radius * radius,
            ShapeKind::Polygon { paths } => {
                let local = point - self.position;
                paths.iter().any(|path| point_in_polygon(local, path.points()))
            }
        }
    }
}

/// Capsule size with the long axis grown to cover the caps.
fn capsule_extent(size: Vec2, direction: CapsuleDirection) -> Vec2 {
    let long = size.x.max(size.y);
    match direction {
        CapsuleDirection::Vertical => Vec2::new(size.x, long),
        CapsuleDirection::Horizontal => Vec2::new(long, size.y),
    }
}

/// `point` has already passed the bounds test.
fn capsule_contains(
    position: Vec2,
    size: Vec2,
    direction: CapsuleDirection,
    bounds: &Rect,
    point: Vec2,
) -> bool {
    let (short, long, axis) = match direction {
        CapsuleDirection::Vertical => (size.x, size.y, Vec2::Y),
        CapsuleDirection::Horizontal => (size.y, size.x, Vec2::X),
    };
    let cap_radius = short * 0.5;
    let cap_radius_sq = cap_radius * cap_radius;
    if long <= short {
        return point.distance_squared(position) <= cap_radius_sq;
    }

    let along = point.dot(axis);
    let band_min = bounds.min().dot(axis) + cap_radius;
    let band_max = bounds.max().dot(axis) - cap_radius;
    // Cap centres sit on the capsule's axis line through `position`.
    let across = position - position.dot(axis) * axis;
    if along < band_min {
        point.distance_squared(across + band_min * axis) <= cap_radius_sq
    } else if along > band_max {
        point.distance_squared(across + band_max * axis) <= cap_radius_sq
    } else {
        true
    }
}
