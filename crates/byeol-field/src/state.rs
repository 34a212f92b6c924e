//! Field state management: one owner for all animation state.

use byeol_core::{ColorTheme, Viewport};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::{ACCENT_STAR, COMET_HEAD, STAR_GLYPHS, TRAIL_GLYPHS};
use crate::color::{BACKDROP, WHITE, alpha_scale};
use crate::comet::{self, Comet};
use crate::meteor::{self, Meteor};
use crate::star::{self, Star};

/// One rasterized cell: a glyph and its color.
type Cell = Option<(char, Color)>;

/// Owner of the star pool, comets, and meteors. All mutation happens in
/// [`FieldState::advance`] and [`FieldState::resize`]; nothing outside
/// this struct ever holds the entities.
#[derive(Debug)]
pub struct FieldState {
    stars: Vec<Star>,
    comets: Vec<Comet>,
    meteors: Vec<Meteor>,
    viewport: Viewport,
    frame: u64,
    rng: SmallRng,
}

impl FieldState {
    /// Create a field sized to the given cell dimensions, seeded from
    /// entropy.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self::seeded(cols, rows, SmallRng::from_entropy())
    }

    /// Create a field with a fixed seed, for deterministic tests.
    pub fn with_seed(cols: u16, rows: u16, seed: u64) -> Self {
        Self::seeded(cols, rows, SmallRng::seed_from_u64(seed))
    }

    fn seeded(cols: u16, rows: u16, mut rng: SmallRng) -> Self {
        let viewport = Viewport::from_cells(cols, rows);
        let stars = star::init_pool(&viewport, &mut rng);
        Self {
            stars,
            comets: Vec::new(),
            meteors: Vec::new(),
            viewport,
            frame: 0,
            rng,
        }
    }

    /// Handle a resize: recompute the viewport, regenerate the entire
    /// star pool, and clear in-flight comets whose trails would otherwise
    /// be anchored to pre-resize coordinates.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::from_cells(cols, rows);
        self.stars = star::init_pool(&self.viewport, &mut self.rng);
        self.comets.clear();
    }

    /// Replace the RNG and rebuild the field from scratch.
    pub fn reseed(&mut self) {
        self.rng = SmallRng::from_entropy();
        self.stars = star::init_pool(&self.viewport, &mut self.rng);
        self.comets.clear();
        self.meteors.clear();
        self.frame = 0;
    }

    /// Advance the whole field one frame. The reduce-motion flag is
    /// polled here every frame: when set, nothing spawns, in-flight
    /// comets and meteors are force-cleared, and star opacity is held
    /// constant.
    pub fn advance(&mut self, reduce_motion: bool) {
        self.frame += 1;

        if reduce_motion {
            self.comets.clear();
            self.meteors.clear();
            return;
        }

        for star in &mut self.stars {
            star.twinkle_step();
        }

        if self.viewport.area() > 0.0 {
            if self.rng.gen_bool(comet::SPAWN_CHANCE) {
                self.comets.push(Comet::spawn(&self.viewport, &mut self.rng));
            }
            if meteor::batch_due(self.frame) {
                for _ in 0..meteor::BATCH_SIZE {
                    self.meteors.push(Meteor::spawn(&self.viewport, &mut self.rng));
                }
            }
        }

        let viewport = self.viewport;
        for comet in &mut self.comets {
            comet.advance();
        }
        self.comets.retain(|c| !c.expired(&viewport));

        for meteor in &mut self.meteors {
            meteor.advance();
        }
        self.meteors.retain(|m| !m.expired(&viewport));
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn comets(&self) -> &[Comet] {
        &self.comets
    }

    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Render the field over the whole frame as a paragraph of styled
    /// spans on the near-black backdrop.
    pub fn render(&self, frame: &mut Frame, theme: ColorTheme) {
        let area = frame.area();
        // Sized by the viewport, not the frame: if a resize event has not
        // caught up with the frame area yet, the paragraph clips.
        let grid = self.rasterize(theme);

        let lines: Vec<Line> = grid
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Some((ch, color)) => {
                            Span::styled(ch.to_string(), Style::new().fg(color))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).style(Style::new().bg(BACKDROP)), area);
    }

    /// Rasterize the field into its viewport's cell grid: stars first,
    /// comet trails and heads over them, meteors on top.
    fn rasterize(&self, theme: ColorTheme) -> Vec<Vec<Cell>> {
        let cols = self.viewport.cols() as usize;
        let rows = self.viewport.rows() as usize;
        let mut grid: Vec<Vec<Cell>> = vec![vec![None; cols]; rows];
        let accent = theme.accent_rgb();

        // to_cell only yields coordinates inside the viewport, and the
        // grid spans exactly that many cells.
        let mut plot = |x: f32, y: f32, ch: char, color: Color| {
            if let Some((col, row)) = self.viewport.to_cell(x, y) {
                grid[row as usize][col as usize] = Some((ch, color));
            }
        };

        for star in &self.stars {
            if star.is_accent() {
                // The rare tinted subset gets the accent overlay at 60%
                // of the computed alpha.
                plot(star.x, star.y, ACCENT_STAR, alpha_scale(accent, star.opacity * 0.6));
            } else {
                let tier = if star.radius < 1.0 {
                    0
                } else if star.radius < 1.5 {
                    1
                } else {
                    2
                };
                plot(star.x, star.y, STAR_GLYPHS[tier], alpha_scale(WHITE, star.opacity));
            }
        }

        for comet in &self.comets {
            let life = comet.life_left();
            let len = comet.trail.len();
            for (i, &(x, y)) in comet.trail.iter().enumerate() {
                // Fades both by position in the trail and by remaining life.
                let alpha = (i as f32 / len as f32) * 0.8 * life;
                let tier = if alpha < 0.2 {
                    0
                } else if alpha < 0.45 {
                    1
                } else {
                    2
                };
                plot(x, y, TRAIL_GLYPHS[tier], alpha_scale(accent, alpha));
            }
            // Head glow, fading only with remaining life.
            plot(comet.x, comet.y, COMET_HEAD, alpha_scale(accent, life));
        }

        for meteor in &self.meteors {
            plot(meteor.x, meteor.y, meteor.glyph, alpha_scale(WHITE, meteor.life_left()));
        }

        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_resize_regenerates_pool() {
        let mut field = FieldState::with_seed(80, 24, 9);
        assert_eq!(field.stars().len(), 76);

        field.resize(120, 40);
        // 1200x800 px -> floor(960000 / 5000) = 192
        assert_eq!(field.stars().len(), 192);
    }

    #[test]
    fn test_resize_clamps_star_count() {
        let mut field = FieldState::with_seed(10, 10, 9);
        field.resize(300, 80);
        // 3000x1600 px -> 960 uncapped, clamped to 300.
        assert_eq!(field.stars().len(), 300);
    }

    #[test]
    fn test_resize_clears_comets() {
        let mut field = FieldState::with_seed(80, 24, 2);
        field.comets.push(Comet {
            x: 100.0,
            y: 100.0,
            vx: -3.0,
            vy: 3.0,
            age: 5,
            trail: VecDeque::new(),
        });
        field.resize(81, 24);
        assert!(field.comets().is_empty());
    }

    #[test]
    fn test_reduce_motion_freezes_everything() {
        let mut field = FieldState::with_seed(80, 24, 21);
        // Run normally long enough for meteors (and likely comets) to exist.
        for _ in 0..400 {
            field.advance(false);
        }
        let opacities: Vec<f32> = field.stars().iter().map(|s| s.opacity).collect();

        field.advance(true);
        assert!(field.comets().is_empty());
        assert!(field.meteors().is_empty());
        let frozen: Vec<f32> = field.stars().iter().map(|s| s.opacity).collect();
        assert_eq!(opacities, frozen);

        // Stays empty and frozen on every subsequent reduced frame.
        for _ in 0..500 {
            field.advance(true);
        }
        assert!(field.comets().is_empty());
        assert!(field.meteors().is_empty());
        let still: Vec<f32> = field.stars().iter().map(|s| s.opacity).collect();
        assert_eq!(opacities, still);
    }

    #[test]
    fn test_advance_twinkles_stars() {
        let mut field = FieldState::with_seed(80, 24, 13);
        let before: Vec<f32> = field.stars().iter().map(|s| s.opacity).collect();
        field.advance(false);
        let after: Vec<f32> = field.stars().iter().map(|s| s.opacity).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_meteors_spawn_in_batches() {
        let mut field = FieldState::with_seed(80, 24, 17);
        for _ in 0..meteor::FIRST_SPAWN_FRAME - 1 {
            field.advance(false);
        }
        assert!(field.meteors().is_empty());
        field.advance(false);
        assert_eq!(field.meteors().len(), meteor::BATCH_SIZE);
    }

    #[test]
    fn test_comet_invariants_over_long_run() {
        let mut field = FieldState::with_seed(100, 30, 101);
        for _ in 0..5000 {
            field.advance(false);
            for comet in field.comets() {
                assert!(comet.trail.len() <= comet::TRAIL_CAP);
                assert!(comet.age < comet::MAX_AGE);
                assert!(comet.x >= -comet::CULL_MARGIN);
                assert!(comet.y <= field.viewport().height + comet::CULL_MARGIN);
            }
        }
    }

    #[test]
    fn test_zero_viewport_never_spawns() {
        let mut field = FieldState::with_seed(0, 0, 3);
        for _ in 0..1000 {
            field.advance(false);
        }
        assert!(field.stars().is_empty());
        assert!(field.comets().is_empty());
        assert!(field.meteors().is_empty());
    }

    #[test]
    fn test_rasterize_places_star() {
        let mut field = FieldState::with_seed(80, 24, 1);
        field.stars.clear();
        field.stars.push(Star {
            x: 15.0,
            y: 25.0,
            depth: 1.0,
            radius: 1.7,
            opacity: 1.0,
            twinkle: 0.02,
        });
        let grid = field.rasterize(ColorTheme::Azure);
        assert_eq!(grid[1][1], Some(('*', Color::Rgb(255, 255, 255))));
        assert_eq!(grid[0][0], None);
    }

    #[test]
    fn test_rasterize_accent_star_tinted() {
        let mut field = FieldState::with_seed(80, 24, 1);
        field.stars.clear();
        field.stars.push(Star {
            x: 5.0,
            y: 5.0,
            depth: 3.9,
            radius: 1.0,
            opacity: 1.0,
            twinkle: 0.02,
        });
        let grid = field.rasterize(ColorTheme::Azure);
        // Accent alpha is 60% of the star's opacity.
        assert_eq!(grid[0][0], Some(('✦', Color::Rgb(0, 72, 127))));
    }

    #[test]
    fn test_rasterize_skips_offscreen_points() {
        let mut field = FieldState::with_seed(80, 24, 1);
        field.stars.clear();
        field.comets.push(Comet {
            x: -40.0,
            y: 100.0,
            vx: -3.0,
            vy: 3.0,
            age: 10,
            trail: VecDeque::from([(-35.0, 90.0), (820.0, 100.0)]),
        });
        // Nothing panics and the grid matches the viewport's cell grid.
        let grid = field.rasterize(ColorTheme::Azure);
        assert_eq!(grid.len(), field.viewport().rows() as usize);
        assert!(
            grid.iter()
                .all(|row| row.len() == field.viewport().cols() as usize)
        );
    }
}
