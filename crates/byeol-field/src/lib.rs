//! Background animation state for the byeol screensaver.
//!
//! This crate owns every piece of mutable animation state: the twinkling
//! star pool, the comet spawner with its fading trails, the glyph meteor
//! batches, and the biometric scan HUD state machine. Everything advances
//! one step per frame under a single owner; there is no shared state and
//! no synchronization.

mod chars;
mod color;
mod comet;
mod hud;
mod meteor;
mod star;
mod state;

pub use comet::Comet;
pub use hud::{ScanState, hud_pose, render_hud, scan_state};
pub use meteor::Meteor;
pub use star::Star;
pub use state::FieldState;
