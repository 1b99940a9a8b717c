//! Piecewise-linear ground profile
//!
//! Screen coordinates: y grows downward, so a *larger* height value means
//! lower ground.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Ground control points spanning `[0, width]`, strictly increasing in x
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terrain {
    points: Vec<Vec2>,
    /// Height returned outside the terrain domain
    fallback: f32,
}

impl Terrain {
    /// Build from explicit points. Points must be strictly increasing in x.
    pub fn from_points(points: Vec<Vec2>, fallback: f32) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].x < w[1].x));
        Self { points, fallback }
    }

    /// Generate a rugged random-walk profile.
    ///
    /// Produces `segments + 1` evenly spaced points; every height lies in
    /// `[base_height - 440, base_height - 60]`. `segments` must be ≥ 1.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        width: f32,
        base_height: f32,
        segments: usize,
    ) -> Self {
        let segments = segments.max(1);
        let ceiling = base_height - TERRAIN_CEILING_DEPTH;
        let floor = base_height - TERRAIN_FLOOR_DEPTH;
        let step = width / segments as f32;

        let mut last_y = (base_height - TERRAIN_START_DEPTH).max(base_height / TERRAIN_START_RATIO);
        let mut points = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            let jitter = rng.random_range(-TERRAIN_ROUGHNESS..=TERRAIN_ROUGHNESS);
            let y = (last_y + jitter).clamp(ceiling, floor);
            points.push(Vec2::new(i as f32 * step, y));
            last_y = y;
        }

        log::info!(
            "Generated terrain: {} points over {}px (base {})",
            points.len(),
            width,
            base_height
        );

        Self {
            points,
            fallback: base_height - TERRAIN_FALLBACK_DEPTH,
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn fallback(&self) -> f32 {
        self.fallback
    }

    /// Interpolated ground height, `None` outside the terrain domain
    pub fn segment_height(&self, x: f32) -> Option<f32> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if self.points.len() < 2 || x < first.x || x > last.x {
            return None;
        }

        // Index of the first point strictly right of x, then step back to the
        // bracketing pair (the final point belongs to the last segment).
        let right = self.points.partition_point(|p| p.x <= x);
        let i = right.saturating_sub(1).min(self.points.len() - 2);
        let (p0, p1) = (self.points[i], self.points[i + 1]);
        let t = (x - p0.x) / (p1.x - p0.x);
        Some(p0.y + (p1.y - p0.y) * t)
    }

    /// Ground height at `x`, or the fallback outside the domain
    pub fn height_at(&self, x: f32) -> f32 {
        self.segment_height(x).unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ramp() -> Terrain {
        Terrain::from_points(
            vec![
                Vec2::new(0.0, 100.0),
                Vec2::new(10.0, 200.0),
                Vec2::new(30.0, 100.0),
            ],
            999.0,
        )
    }

    #[test]
    fn test_height_at_interpolates() {
        let terrain = ramp();
        assert_eq!(terrain.height_at(0.0), 100.0);
        assert_eq!(terrain.height_at(5.0), 150.0);
        assert_eq!(terrain.height_at(10.0), 200.0);
        assert_eq!(terrain.height_at(20.0), 150.0);
        assert_eq!(terrain.height_at(30.0), 100.0);
    }

    #[test]
    fn test_height_at_outside_domain_uses_fallback() {
        let terrain = ramp();
        assert_eq!(terrain.height_at(-0.1), 999.0);
        assert_eq!(terrain.height_at(30.5), 999.0);
        assert_eq!(terrain.segment_height(31.0), None);
    }

    #[test]
    fn test_empty_terrain_is_all_fallback() {
        let terrain = Terrain::from_points(Vec::new(), 42.0);
        assert_eq!(terrain.height_at(0.0), 42.0);
    }

    #[test]
    fn test_generate_shape() {
        let mut rng = Pcg32::seed_from_u64(7);
        let terrain = Terrain::generate(&mut rng, 8000.0, 900.0, 250);
        assert_eq!(terrain.points().len(), 251);
        assert_eq!(terrain.points()[0].x, 0.0);
        assert!((terrain.points()[250].x - 8000.0).abs() < 1e-2);
        assert_eq!(terrain.fallback(), 850.0);
    }

    #[test]
    fn test_generate_is_seeded() {
        let a = Terrain::generate(&mut Pcg32::seed_from_u64(99), 2000.0, 700.0, 50);
        let b = Terrain::generate(&mut Pcg32::seed_from_u64(99), 2000.0, 700.0, 50);
        assert_eq!(a.points(), b.points());
    }

    proptest! {
        #[test]
        fn prop_generated_heights_in_band(
            seed in any::<u64>(),
            base in 450.0f32..1400.0,
            segments in 1usize..300,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let terrain = Terrain::generate(&mut rng, 8000.0, base, segments);
            for p in terrain.points() {
                prop_assert!(p.y >= base - 440.0 && p.y <= base - 60.0);
            }
            for w in terrain.points().windows(2) {
                prop_assert!(w[0].x < w[1].x);
            }
        }

        #[test]
        fn prop_height_at_matches_linear_interpolation(
            seed in any::<u64>(),
            x in 0.0f32..4000.0,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let terrain = Terrain::generate(&mut rng, 4000.0, 800.0, 125);
            let pts = terrain.points();
            let i = pts.windows(2).position(|w| x >= w[0].x && x <= w[1].x).unwrap();
            let (p0, p1) = (pts[i], pts[i + 1]);
            let expected = p0.y + (p1.y - p0.y) * ((x - p0.x) / (p1.x - p0.x));
            prop_assert!((terrain.height_at(x) - expected).abs() < 1e-3);
        }
    }
}
