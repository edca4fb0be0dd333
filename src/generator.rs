// src/generator.rs

use glam::Vec2;
use rand::Rng;

use crate::path::PolygonPath;

/// Random contours for property tests and benchmarks.
pub struct PolygonGenerator;

impl PolygonGenerator {
    /// Counter-clockwise star-shaped contour around `center`. Radii vary
    /// between 80% and 120% of `avg_radius`, so the result may be concave
    /// but never self-intersects. A non-positive `avg_radius` yields an empty path.
    pub fn star_polygon(
        rng: &mut impl Rng,
        center: Vec2,
        avg_radius: f32,
        num_vertices: usize,
    ) -> PolygonPath {
        if !(avg_radius > 0.0) {
            return PolygonPath::new();
        }
        Self::angles(rng, num_vertices)
            .into_iter()
            .map(|angle| {
                let radius = rng.gen_range(avg_radius * 0.8..avg_radius * 1.2);
                center + Vec2::from_angle(angle) * radius
            })
            .collect()
    }

    /// Counter-clockwise convex contour inscribed in a circle of `radius`.
    pub fn convex_polygon(
        rng: &mut impl Rng,
        center: Vec2,
        radius: f32,
        num_vertices: usize,
    ) -> PolygonPath {
        Self::angles(rng, num_vertices)
            .into_iter()
            .map(|angle| center + Vec2::from_angle(angle) * radius)
            .collect()
    }

    /// Evenly spaced angles with some jitter, strictly increasing within one turn.
    fn angles(rng: &mut impl Rng, num_vertices: usize) -> Vec<f32> {
        if num_vertices == 0 {
            return Vec::new();
        }
        let step = std::f32::consts::TAU / num_vertices as f32;
        let max_perturbation = step * 0.3;
        (0..num_vertices)
            .map(|i| i as f32 * step + rng.gen_range(-max_perturbation..max_perturbation))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::signed_area;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generated_contours_wind_counter_clockwise() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 4..12 {
            let star = PolygonGenerator::star_polygon(&mut rng, Vec2::ZERO, 10.0, n);
            assert_eq!(star.len(), n);
            assert!(signed_area(star.points()) > 0.0);
            let convex = PolygonGenerator::convex_polygon(&mut rng, Vec2::ONE, 5.0, n);
            assert!(signed_area(convex.points()) > 0.0);
        }
    }

    #[test]
    fn non_positive_radius_gives_empty_star() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(PolygonGenerator::star_polygon(&mut rng, Vec2::ZERO, 0.0, 8).is_empty());
        assert!(PolygonGenerator::star_polygon(&mut rng, Vec2::ZERO, -1.0, 8).is_empty());
    }
}
