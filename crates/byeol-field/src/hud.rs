//! Biometric scan HUD: a small corner overlay cycling through three
//! states on an eight second loop, with glitch bursts while scanning.

use byeol_core::ColorTheme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::GLITCH_GLYPHS;
use crate::color::alpha_scale;

/// Full cycle length in milliseconds.
pub const CYCLE_MS: u64 = 8000;

/// Cycle offset where the scanning phase begins.
const SCANNING_AT_MS: u64 = 4000;

/// Cycle offset where the verified phase begins.
const VERIFIED_AT_MS: u64 = 7000;

/// Duration of a glitch burst.
const GLITCH_BURST_MS: u64 = 150;

/// Width of the rendered overlay in cells.
const HUD_WIDTH: u16 = 17;

/// Height of the rendered overlay in cells.
const HUD_HEIGHT: u16 = 5;

/// Scan cycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning,
    Verified,
}

impl ScanState {
    /// Label shown under the eye.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "BIOMETRIC SCAN",
            Self::Scanning => "SCANNING...",
            Self::Verified => "VERIFIED",
        }
    }

    /// Full rotation period of the ring sweep. Scanning runs 20% faster.
    fn ring_period_ms(self) -> u64 {
        match self {
            Self::Scanning => 1600,
            _ => 2000,
        }
    }
}

/// State for a given elapsed time: idle for the first four seconds of the
/// cycle, scanning for the next three, verified for the last one.
pub fn scan_state(elapsed_ms: u64) -> ScanState {
    match elapsed_ms % CYCLE_MS {
        t if t < SCANNING_AT_MS => ScanState::Idle,
        t if t < VERIFIED_AT_MS => ScanState::Scanning,
        _ => ScanState::Verified,
    }
}

/// Whether a glitch burst is active. Bursts only fire while scanning, in
/// roughly a third of the half-second slots, each lasting ~150 ms. The
/// slot hash keeps the schedule deterministic for a given elapsed time.
pub fn glitch_active(elapsed_ms: u64) -> bool {
    if scan_state(elapsed_ms) != ScanState::Scanning {
        return false;
    }
    let slot = (elapsed_ms / 500) as usize;
    let mixed = slot.wrapping_mul(2654435761).wrapping_add(97);
    mixed % 100 < 34 && elapsed_ms % 500 < GLITCH_BURST_MS
}

/// Eight ring positions on the perimeter of a 5x3 cell eye, clockwise
/// from the top-left, as (col, row) offsets.
const RING: [(u16, u16); 8] = [
    (0, 0),
    (2, 0),
    (4, 0),
    (4, 1),
    (4, 2),
    (2, 2),
    (0, 2),
    (0, 1),
];

/// Effective pose for a frame: the state shown, the sweep head index
/// around the ring, and whether a glitch burst is active. Reduced motion
/// holds the idle state with a static ring and no glitches.
pub fn hud_pose(elapsed_ms: u64, reduce_motion: bool) -> (ScanState, usize, bool) {
    if reduce_motion {
        return (ScanState::Idle, 0, false);
    }
    let state = scan_state(elapsed_ms);
    let period = state.ring_period_ms();
    let sweep = ((elapsed_ms % period) * RING.len() as u64 / period) as usize;
    (state, sweep, glitch_active(elapsed_ms))
}

/// Render the HUD into the top-right corner of the frame. Skipped when
/// the frame is too small to hold it.
pub fn render_hud(frame: &mut Frame, elapsed_ms: u64, reduce_motion: bool, theme: ColorTheme) {
    let area = frame.area();
    if area.width < HUD_WIDTH + 2 || area.height < HUD_HEIGHT + 2 {
        return;
    }

    let (state, sweep, glitching) = hud_pose(elapsed_ms, reduce_motion);

    let accent = theme.accent_rgb();
    let eye_left = (HUD_WIDTH - 5) / 2;

    // Three eye rows plus a blank spacer and the label.
    let mut rows: Vec<Vec<Span>> = (0..3)
        .map(|row| {
            let mut spans: Vec<Span> = Vec::with_capacity(HUD_WIDTH as usize);
            for col in 0..HUD_WIDTH {
                let offset = (col.wrapping_sub(eye_left), row);
                let span = if offset == (2, 1) {
                    // Pupil, brightest during the verified flash.
                    let alpha = if state == ScanState::Verified { 1.0 } else { 0.8 };
                    Span::styled("●", Style::new().fg(alpha_scale(accent, alpha)))
                } else if let Some(idx) = RING.iter().position(|&p| p == offset) {
                    let ch = if glitching {
                        GLITCH_GLYPHS[(idx + (elapsed_ms / 50) as usize) % GLITCH_GLYPHS.len()]
                    } else if idx == sweep {
                        '✦'
                    } else {
                        '·'
                    };
                    let alpha = if idx == sweep { 1.0 } else { 0.45 };
                    Span::styled(ch.to_string(), Style::new().fg(alpha_scale(accent, alpha)))
                } else {
                    Span::raw(" ")
                };
                spans.push(span);
            }
            spans
        })
        .collect();

    rows.push(vec![Span::raw(" ")]);

    let label = state.label();
    let pad = (HUD_WIDTH as usize).saturating_sub(label.len()) / 2;
    rows.push(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(label.to_string(), Style::new().fg(alpha_scale(accent, 0.9))),
    ]);

    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    let hud_area = Rect::new(area.right() - HUD_WIDTH - 1, area.y + 1, HUD_WIDTH, HUD_HEIGHT);
    frame.render_widget(Paragraph::new(lines), hud_area);
}
