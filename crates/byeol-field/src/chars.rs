//! Glyph constants for the animations.

/// Star glyphs, dimmest to brightest, indexed by radius tier.
pub const STAR_GLYPHS: &[char] = &['·', '•', '*'];

/// Glyph for accent stars (the rare tinted subset).
pub const ACCENT_STAR: char = '✦';

/// Comet trail glyphs, faintest to brightest.
pub const TRAIL_GLYPHS: &[char] = &['·', '•', '*'];

/// Glyph for the comet head glow.
pub const COMET_HEAD: char = '✦';

/// Code-themed glyphs for meteors.
pub const METEOR_GLYPHS: &[char] = &['{', '}', '<', '>', '/', '*', '#', '&', ';', 'λ'];

/// Glyphs flashed over the scan ring during glitch bursts.
pub const GLITCH_GLYPHS: &[char] = &['░', '▒', '▓'];
