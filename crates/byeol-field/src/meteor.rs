//! Glyph meteors: batches of code-themed characters streaking across.

use byeol_core::Viewport;
use rand::Rng;

use crate::chars::METEOR_GLYPHS;
use crate::comet::CULL_MARGIN;

/// Meteors per batch.
pub const BATCH_SIZE: usize = 3;

/// Frames between batches (~5 s at 60 fps).
pub const SPAWN_INTERVAL_FRAMES: u64 = 300;

/// Frame of the first batch (~1 s at 60 fps).
pub const FIRST_SPAWN_FRAME: u64 = 60;

/// Offset outside the viewport where meteors spawn.
const EDGE_OFFSET: f32 = 50.0;

/// Lifetime at a 1x speed multiplier; faster meteors live shorter.
const BASE_MAX_AGE: f32 = 180.0;

/// A single glyph streaking down-and-left.
#[derive(Debug, Clone)]
pub struct Meteor {
    /// The code glyph drawn for this meteor.
    pub glyph: char,
    /// Position in logical pixels.
    pub x: f32,
    pub y: f32,
    /// Constant velocity, scaled by the per-meteor speed multiplier.
    pub vx: f32,
    pub vy: f32,
    /// Frames since spawn.
    pub age: u32,
    /// Lifetime in frames, inverse to the speed multiplier.
    pub max_age: u32,
}

impl Meteor {
    /// Spawn one meteor at a random edge with a random speed multiplier
    /// in [1, 3); its lifetime shrinks as its speed grows.
    pub fn spawn<R: Rng>(viewport: &Viewport, rng: &mut R) -> Self {
        let from_top = rng.gen_bool(0.5);
        let (x, y) = if from_top {
            (rng.gen_range(0.0..viewport.width), -EDGE_OFFSET)
        } else {
            (
                viewport.width + EDGE_OFFSET,
                rng.gen_range(0.0..viewport.height * 0.7),
            )
        };
        let multiplier: f32 = rng.gen_range(1.0..3.0);
        Self {
            glyph: METEOR_GLYPHS[rng.gen_range(0..METEOR_GLYPHS.len())],
            x,
            y,
            vx: -rng.gen_range(2.0..6.0) * multiplier,
            vy: rng.gen_range(2.0..6.0) * multiplier,
            age: 0,
            max_age: (BASE_MAX_AGE / multiplier) as u32,
        }
    }

    /// Advance one frame.
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.age += 1;
    }

    /// Whether the meteor should be removed.
    pub fn expired(&self, viewport: &Viewport) -> bool {
        self.age >= self.max_age || self.x < -CULL_MARGIN || self.y > viewport.height + CULL_MARGIN
    }

    /// Remaining-life fraction, 1.0 at spawn down to 0.0 at expiry.
    pub fn life_left(&self) -> f32 {
        1.0 - self.age as f32 / self.max_age as f32
    }
}

/// Whether a batch is due this frame.
pub fn batch_due(frame: u64) -> bool {
    frame == FIRST_SPAWN_FRAME || (frame > 0 && frame % SPAWN_INTERVAL_FRAMES == 0)
}
