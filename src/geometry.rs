// src/geometry.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle stored as min corner plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let min = center - size * 0.5;
        Self::new(min.x, min.y, size.x, size.y)
    }

    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.min() + self.size() * 0.5
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Min edges are inclusive, max edges exclusive.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.x && point.x < max.x && point.y >= self.y && point.y < max.y
    }

    /// True when `other` lies entirely within `self`.
    pub fn encloses(&self, other: &Rect) -> bool {
        let (min, max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        other_min.x >= min.x && other_min.y >= min.y && other_max.x <= max.x && other_max.y <= max.y
    }
}

/// Rotates `point` about `pivot` by `degrees` counter-clockwise.
///
/// Shapes store their rotation clockwise, so this is the transform that takes
/// a world-space point back into a shape's unrotated frame.
#[inline]
pub fn rotate_about(point: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - pivot;
    Vec2::new(cos * d.x - sin * d.y, sin * d.x + cos * d.y) + pivot
}

#[inline(always)]
pub fn orient(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Shoelace area, positive for counter-clockwise contours.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let count = points.len();
    if count < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..count {
        let j = (i + 1) % count;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

/// Inclusive test: points on an edge count as inside.
#[inline(always)]
pub fn point_in_triangle(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    let abp = orient(a, b, p);
    let bcp = orient(b, c, p);
    let cap = orient(c, a, p);
    (abp >= 0.0 && bcp >= 0.0 && cap >= 0.0) || (abp <= 0.0 && bcp <= 0.0 && cap <= 0.0)
}

/// Even-odd crossing test for a single closed contour.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let count = polygon.len();
    if count < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = count - 1;
    for i in 0..count {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_intercept = pi.x + (point.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if point.x < x_intercept {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
