//! Comet lifecycle: spawn, animate, cull.

use std::collections::VecDeque;

use byeol_core::Viewport;
use rand::Rng;

/// Per-frame Bernoulli probability of spawning a comet.
pub const SPAWN_CHANCE: f64 = 0.005;

/// Frames a comet lives before it is culled.
pub const MAX_AGE: u32 = 100;

/// Maximum trail length; the oldest point is evicted past this.
pub const TRAIL_CAP: usize = 20;

/// A comet is culled once it leaves the viewport by this margin on the
/// left or bottom.
pub const CULL_MARGIN: f32 = 80.0;

/// Offset outside the viewport where comets spawn.
const EDGE_OFFSET: f32 = 30.0;

/// A transient streak effect with a bounded fading trail.
#[derive(Debug, Clone)]
pub struct Comet {
    /// Head position in logical pixels.
    pub x: f32,
    pub y: f32,
    /// Constant velocity, always down-and-left.
    pub vx: f32,
    pub vy: f32,
    /// Frames since spawn.
    pub age: u32,
    /// Recent head positions, oldest first.
    pub trail: VecDeque<(f32, f32)>,
}

impl Comet {
    /// Spawn a comet at a random edge: the top edge across the full width,
    /// or the right edge in the upper half of the height, each at even odds.
    pub fn spawn<R: Rng>(viewport: &Viewport, rng: &mut R) -> Self {
        let from_top = rng.gen_bool(0.5);
        let (x, y) = if from_top {
            (rng.gen_range(0.0..viewport.width), -EDGE_OFFSET)
        } else {
            (
                viewport.width + EDGE_OFFSET,
                rng.gen_range(0.0..viewport.height * 0.5),
            )
        };
        Self {
            x,
            y,
            vx: -rng.gen_range(2.0..5.0),
            vy: rng.gen_range(2.0..5.0),
            age: 0,
            trail: VecDeque::with_capacity(TRAIL_CAP),
        }
    }

    /// Advance one frame: move by the velocity, age, and record the new
    /// position in the trail, evicting the oldest point past the cap.
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.age += 1;

        self.trail.push_back((self.x, self.y));
        if self.trail.len() > TRAIL_CAP {
            self.trail.pop_front();
        }
    }

    /// Whether the comet should be removed: out of life, or past the cull
    /// margin on the left or bottom. The margins themselves are still alive.
    pub fn expired(&self, viewport: &Viewport) -> bool {
        self.age >= MAX_AGE || self.x < -CULL_MARGIN || self.y > viewport.height + CULL_MARGIN
    }

    /// Remaining-life fraction, 1.0 at spawn down to 0.0 at max age.
    pub fn life_left(&self) -> f32 {
        1.0 - self.age as f32 / MAX_AGE as f32
    }
}
