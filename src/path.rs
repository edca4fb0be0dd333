// src/path.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

const PENTAGON_POINTS: [Vec2; 5] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(-0.9510565, 0.309017),
    Vec2::new(-0.5877852, -0.8090171),
    Vec2::new(0.5877854, -0.8090169),
    Vec2::new(0.9510565, 0.3090171),
];

/// One closed contour of a polygon collider. Point order defines the edges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonPath {
    points: Vec<Vec2>,
}

impl PolygonPath {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Unit regular pentagon, the contour new polygon colliders start with.
    pub fn pentagon() -> Self {
        Self { points: PENTAGON_POINTS.to_vec() }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Removes the first point exactly equal to `point`. Returns false if none matched.
    pub fn remove(&mut self, point: Vec2) -> bool {
        match self.points.iter().position(|&p| p == point) {
            Some(index) => {
                self.points.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Vec2> {
        self.check_index(index)?;
        Ok(self.points.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<Vec2> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    pub fn set(&mut self, index: usize, point: Vec2) -> Result<()> {
        self.check_index(index)?;
        self.points[index] = point;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(GeometryError::IndexOutOfRange { index, len: self.points.len() })
        }
    }
}

impl From<Vec<Vec2>> for PolygonPath {
    fn from(points: Vec<Vec2>) -> Self {
        Self { points }
    }
}

impl From<&[Vec2]> for PolygonPath {
    fn from(points: &[Vec2]) -> Self {
        Self { points: points.to_vec() }
    }
}

impl FromIterator<Vec2> for PolygonPath {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl AsRef<[Vec2]> for PolygonPath {
    fn as_ref(&self) -> &[Vec2] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a PolygonPath {
    type Item = &'a Vec2;
    type IntoIter = std::slice::Iter<'a, Vec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
