//! Animation playback system
//!
//! This module provides real-time playback for a parsed skeleton:
//! - Quaternion math with ZYX Euler conversion and slerp
//! - A playback state machine (stopped / playing / paused)
//! - A controller that resamples the discrete frame sequence at an
//!   arbitrary signed rate and writes interpolated poses into the
//!   joint hierarchy
//!
//! # Example
//!
//! ```rust,ignore
//! use bvh_motion::{parser, Player};
//!
//! let skeleton = parser::parse_file("walk.bvh")?;
//! let mut player = Player::new(skeleton)?;
//!
//! // Once per redraw tick:
//! player.advance()?;
//! for id in player.skeleton().hierarchy().iter_depth_first() {
//!     // submit joint transforms to the renderer
//! }
//! ```

mod clock;
mod state;
pub mod types;

pub use clock::{DEFAULT_BASE_FPS, Player};
pub use state::{PlaybackState, Tick};
pub use types::{AngleAxis, Lerp, Quat};
