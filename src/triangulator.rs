// src/triangulator.rs

use glam::Vec2;

use crate::geometry::{orient, point_in_triangle, signed_area};

/// Ear-clipping triangulator for a single simple polygon.
///
/// Triangles are emitted clockwise (Y up) whatever the winding of the input,
/// as indices into the input slice.
pub struct Triangulator<'a> {
    points: &'a [Vec2],
}

impl<'a> Triangulator<'a> {
    pub fn new(points: &'a [Vec2]) -> Self {
        Self { points }
    }

    pub fn triangulate(&self) -> Vec<u32> {
        let points = self.points;
        let n = points.len();
        if n < 3 {
            return Vec::new();
        }

        let area = signed_area(points);
        let (lo, hi) = points
            .iter()
            .fold((points[0], points[0]), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        let extent = hi - lo;
        // Tolerance scales with the contour so tiny shapes still triangulate.
        if area.abs() <= f32::EPSILON * extent.x * extent.y {
            log::trace!("skipping zero-area contour of {} points", n);
            return Vec::new();
        }

        let mut ring = Ring {
            points,
            // +1 for counter-clockwise input, -1 for clockwise
            winding: area.signum(),
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            ear: vec![false; n],
            start: 0,
            len: n,
        };
        ring.refresh_ears();

        let mut indices = Vec::with_capacity((n - 2) * 3);
        let mut refreshed = true;
        while ring.len > 3 {
            if let Some(v) = ring.find(|ring, v| ring.ear[v]) {
                let (a, c) = (ring.prev[v], ring.next[v]);
                Self::emit(&mut indices, a, v, c, ring.winding);
                ring.unlink(v);
                refreshed = false;
                continue;
            }
            if !refreshed {
                ring.refresh_ears();
                refreshed = true;
                continue;
            }
            // Collinear vertices contribute no area and never form ears.
            match ring.find(|ring, v| ring.orient_at(v) == 0.0) {
                Some(v) => ring.unlink(v),
                None => {
                    log::warn!(
                        "no ear found with {} of {} vertices left, contour is not simple",
                        ring.len,
                        n
                    );
                    return indices;
                }
            }
        }

        let b = ring.start;
        let (a, c) = (ring.prev[b], ring.next[b]);
        if ring.orient_at(b) * ring.winding > 0.0 {
            Self::emit(&mut indices, a, b, c, ring.winding);
        }
        indices
    }

    #[inline]
    fn emit(indices: &mut Vec<u32>, a: usize, b: usize, c: usize, winding: f32) {
        if winding > 0.0 {
            indices.extend_from_slice(&[a as u32, c as u32, b as u32]);
        } else {
            indices.extend_from_slice(&[a as u32, b as u32, c as u32]);
        }
    }
}

/// Remaining polygon vertices as a doubly linked ring over the input indices.
struct Ring<'a> {
    points: &'a [Vec2],
    winding: f32,
    prev: Vec<usize>,
    next: Vec<usize>,
    ear: Vec<bool>,
    start: usize,
    len: usize,
}

impl Ring<'_> {
    fn orient_at(&self, v: usize) -> f32 {
        orient(self.points[self.prev[v]], self.points[v], self.points[self.next[v]])
    }

    fn find(&self, mut predicate: impl FnMut(&Self, usize) -> bool) -> Option<usize> {
        let mut v = self.start;
        for _ in 0..self.len {
            if predicate(self, v) {
                return Some(v);
            }
            v = self.next[v];
        }
        None
    }

    /// Convex vertex whose triangle holds no other remaining vertex.
    fn is_ear(&self, v: usize) -> bool {
        if self.orient_at(v) * self.winding <= 0.0 {
            return false;
        }
        let (prev, next) = (self.prev[v], self.next[v]);
        let (a, b, c) = (self.points[prev], self.points[v], self.points[next]);
        let bb_min = a.min(b).min(c);
        let bb_max = a.max(b).max(c);
        let mut k = self.next[next];
        while k != prev {
            let p = self.points[k];
            if p != a
                && p != b
                && p != c
                && p.cmpge(bb_min).all()
                && p.cmple(bb_max).all()
                && point_in_triangle(a, b, c, p)
            {
                return false;
            }
            k = self.next[k];
        }
        true
    }

    fn refresh_ears(&mut self) {
        let mut v = self.start;
        for _ in 0..self.len {
            self.ear[v] = self.is_ear(v);
            v = self.next[v];
        }
    }

    /// Removes `v`; only its two neighbours change shape.
    fn unlink(&mut self, v: usize) {
        let (prev, next) = (self.prev[v], self.next[v]);
        self.next[prev] = next;
        self.prev[next] = prev;
        self.len -= 1;
        self.start = next;
        self.ear[prev] = self.is_ear(prev);
        self.ear[next] = self.is_ear(next);
    }
}

/// Shorthand for `Triangulator::new(points).triangulate()`.
pub fn triangulate(points: &[Vec2]) -> Vec<u32> {
    Triangulator::new(points).triangulate()
}
