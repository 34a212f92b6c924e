//! Star pool and twinkle animation.

use byeol_core::Viewport;
use rand::Rng;

/// Lower opacity bound for the twinkle oscillation.
pub const OPACITY_FLOOR: f32 = 0.3;

/// Upper opacity bound for the twinkle oscillation.
pub const OPACITY_CEIL: f32 = 1.0;

/// One star per this many square pixels of viewport area.
pub const AREA_PER_STAR: f32 = 5000.0;

/// Hard cap on the star pool, regardless of viewport size.
pub const MAX_STARS: usize = 300;

/// Stars with a depth above this render with the accent tint.
pub const ACCENT_DEPTH: f32 = 3.5;

/// A single twinkling point sprite.
#[derive(Debug, Clone)]
pub struct Star {
    /// Position in logical pixels.
    pub x: f32,
    pub y: f32,
    /// Depth tier in [0, 4); only used to flag the rare tinted subset.
    pub depth: f32,
    /// Radius in logical pixels.
    pub radius: f32,
    /// Current opacity, kept within [OPACITY_FLOOR, OPACITY_CEIL].
    pub opacity: f32,
    /// Signed per-frame opacity delta; flips sign at either bound.
    pub twinkle: f32,
}

impl Star {
    /// Advance the twinkle oscillation one frame. The opacity ping-pongs
    /// between the bounds: on hitting either one it clamps there and the
    /// delta reverses, giving a smooth pulse instead of a sawtooth.
    pub fn twinkle_step(&mut self) {
        self.opacity += self.twinkle;
        if self.opacity >= OPACITY_CEIL || self.opacity <= OPACITY_FLOOR {
            self.opacity = self.opacity.clamp(OPACITY_FLOOR, OPACITY_CEIL);
            self.twinkle = -self.twinkle;
        }
    }

    /// Whether this star gets the accent overlay. Deterministic per star
    /// from its fixed depth, never re-rolled per frame.
    pub fn is_accent(&self) -> bool {
        self.depth > ACCENT_DEPTH
    }
}

/// Star count for a viewport: one per 5000 px², capped at 300.
pub fn star_count(viewport: &Viewport) -> usize {
    ((viewport.area() / AREA_PER_STAR) as usize).min(MAX_STARS)
}

/// Build a fresh star pool for the viewport. Called on every resize; the
/// previous pool never survives.
pub fn init_pool<R: Rng>(viewport: &Viewport, rng: &mut R) -> Vec<Star> {
    (0..star_count(viewport))
        .map(|_| Star {
            x: rng.gen_range(0.0..viewport.width),
            y: rng.gen_range(0.0..viewport.height),
            depth: rng.gen_range(0.0..4.0),
            radius: rng.gen_range(0.5..2.0),
            opacity: rng.gen_range(0.3..0.8),
            twinkle: rng.gen_range(0.01..0.06),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_star_count_formula() {
        // 80x24 cells = 800x480 px -> floor(384000 / 5000) = 76
        let vp = Viewport::from_cells(80, 24);
        assert_eq!(star_count(&vp), 76);
    }

    #[test]
    fn test_star_count_caps_at_300() {
        // The 1920x1080 scenario: floor(1920*1080/5000) = 414 -> 300.
        let vp = Viewport::from_pixels(1920.0, 1080.0);
        assert_eq!(star_count(&vp), 300);
    }

    #[test]
    fn test_star_count_zero_area() {
        let vp = Viewport::from_cells(0, 10);
        assert_eq!(star_count(&vp), 0);
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(init_pool(&vp, &mut rng).is_empty());
    }

    #[test]
    fn test_init_pool_ranges() {
        let vp = Viewport::from_cells(100, 40);
        let mut rng = SmallRng::seed_from_u64(7);
        let pool = init_pool(&vp, &mut rng);
        assert_eq!(pool.len(), star_count(&vp));
        for star in &pool {
            assert!(star.x >= 0.0 && star.x < vp.width);
            assert!(star.y >= 0.0 && star.y < vp.height);
            assert!(star.depth >= 0.0 && star.depth < 4.0);
            assert!(star.radius >= 0.5 && star.radius < 2.0);
            assert!(star.opacity >= 0.3 && star.opacity < 0.8);
            assert!(star.twinkle >= 0.01 && star.twinkle < 0.06);
        }
    }

    #[test]
    fn test_twinkle_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let vp = Viewport::from_cells(100, 40);
        let mut pool = init_pool(&vp, &mut rng);
        for _ in 0..10_000 {
            for star in &mut pool {
                star.twinkle_step();
                assert!(star.opacity >= OPACITY_FLOOR && star.opacity <= OPACITY_CEIL);
            }
        }
    }

    #[test]
    fn test_twinkle_reflects_at_ceiling() {
        let mut star = Star {
            x: 0.0,
            y: 0.0,
            depth: 0.0,
            radius: 1.0,
            opacity: 0.98,
            twinkle: 0.05,
        };
        star.twinkle_step();
        assert_eq!(star.opacity, OPACITY_CEIL);
        assert_eq!(star.twinkle, -0.05);
        star.twinkle_step();
        assert!(star.opacity < OPACITY_CEIL);
    }

    #[test]
    fn test_twinkle_reflects_at_floor() {
        let mut star = Star {
            x: 0.0,
            y: 0.0,
            depth: 0.0,
            radius: 1.0,
            opacity: 0.31,
            twinkle: -0.05,
        };
        star.twinkle_step();
        assert_eq!(star.opacity, OPACITY_FLOOR);
        assert_eq!(star.twinkle, 0.05);
    }

    #[test]
    fn test_accent_threshold() {
        let mut star = Star {
            x: 0.0,
            y: 0.0,
            depth: 3.5,
            radius: 1.0,
            opacity: 0.5,
            twinkle: 0.02,
        };
        assert!(!star.is_accent());
        star.depth = 3.51;
        assert!(star.is_accent());
    }
}
