//! Real-time playback controller
//!
//! Maps monotonic clock reads onto frame indices and writes the resolved
//! pose into the owned [`Skeleton`] once per external tick. The frame
//! position is absolute: `elapsed_since_start × playback_rate`, never
//! offset by the previously resolved index, so a given elapsed time
//! always lands on the same pose. Positions past the last bracketing
//! pair, and negative ones under a reversed rate, take the wrap branch
//! and restart from frame 0.

use std::time::{Duration, Instant};

use log::debug;

use crate::error::{Error, Result};
use crate::skeleton::Skeleton;

use super::state::{PlaybackState, Tick};

/// Default redraw throttle when none is configured (ticks per second)
pub const DEFAULT_BASE_FPS: f32 = 60.0;

/// Playback controller owning a skeleton and its animation clock
#[derive(Debug, Clone)]
pub struct Player {
    skeleton: Skeleton,
    state: PlaybackState,
    /// Signed playback rate in frames per second; zero stalls, negative reverses
    playback_fps: f32,
    /// Rate restored by `reset()`
    configured_fps: f32,
    /// Real-time redraw throttle, independent of the playback rate
    base_fps: f32,
    start_time: Option<Instant>,
    last_render: Option<Instant>,
    paused_at: Option<Instant>,
    last_frame_index: usize,
}

impl Player {
    /// Create a controller for the given skeleton.
    ///
    /// The playback rate defaults to the authored sampling rate
    /// (`1 / sample_period`); the redraw throttle to
    /// [`DEFAULT_BASE_FPS`]. Fails with [`Error::EmptyMotion`] if the
    /// store holds no frames; playback has no other failure mode.
    pub fn new(skeleton: Skeleton) -> Result<Self> {
        let period = skeleton.motion().sample_period();
        let rate = if period > 0.0 {
            1.0 / period
        } else {
            DEFAULT_BASE_FPS
        };
        Self::with_rates(skeleton, rate, DEFAULT_BASE_FPS)
    }

    /// Create a controller with explicit playback and base rates
    pub fn with_rates(skeleton: Skeleton, playback_fps: f32, base_fps: f32) -> Result<Self> {
        if skeleton.motion().is_empty() {
            return Err(Error::EmptyMotion);
        }

        Ok(Self {
            skeleton,
            state: PlaybackState::Stopped,
            playback_fps,
            configured_fps: playback_fps,
            base_fps: base_fps.max(1e-3),
            start_time: None,
            last_render: None,
            paused_at: None,
            last_frame_index: 0,
        })
    }

    /// The owned skeleton, with the most recently applied pose
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Consume the controller, returning the skeleton
    pub fn into_skeleton(self) -> Skeleton {
        self.skeleton
    }

    /// Current state machine position
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current signed playback rate (frames per second)
    pub fn rate(&self) -> f32 {
        self.playback_fps
    }

    /// Index of the most recently resolved first frame
    pub fn last_frame_index(&self) -> usize {
        self.last_frame_index
    }

    /// Advance using the wall clock; see [`Player::advance_at`]
    pub fn advance(&mut self) -> Result<Tick> {
        self.advance_at(Instant::now())
    }

    /// Advance playback to the given instant.
    ///
    /// Designed to be called once per external redraw tick from a single
    /// thread; `now` must come from a monotonic clock.
    pub fn advance_at(&mut self, now: Instant) -> Result<Tick> {
        match self.state {
            PlaybackState::Paused => return Ok(Tick::Idle),
            PlaybackState::Stopped => return self.start(now),
            PlaybackState::Playing => {}
        }

        let Some(start) = self.start_time else {
            return self.start(now);
        };

        // Redraw throttle, independent of the animation rate
        if let Some(last) = self.last_render {
            if now.saturating_duration_since(last) < self.base_period() {
                return Ok(Tick::Throttled);
            }
        }

        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        let position = elapsed * self.playback_fps;
        let first = position.floor();

        let frame_count = self.skeleton.motion().len();
        let last_pair_start = frame_count - 1;

        if !first.is_finite() || first < 0.0 || first as usize >= last_pair_start {
            // Off either end of the sequence: restart from frame 0
            debug!("playback wrapped at position {position}");
            self.start_time = Some(now);
            self.last_render = Some(now);
            self.last_frame_index = 0;
            self.skeleton.apply_frame_index(0)?;
            return Ok(Tick::Wrapped);
        }

        let first_frame = first as usize;
        let t = position - first;
        self.skeleton.apply_interpolated(first_frame, t)?;
        self.last_frame_index = first_frame;
        self.last_render = Some(now);

        Ok(Tick::Interpolated { first_frame, t })
    }

    /// Suspend playback; no channel change
    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    /// Suspend playback at the given instant
    pub fn pause_at(&mut self, now: Instant) {
        if self.state.is_playing() {
            self.state = PlaybackState::Paused;
            self.paused_at = Some(now);
        }
    }

    /// Resume playback; see [`Player::resume_at`]
    pub fn resume(&mut self) {
        self.resume_at(Instant::now());
    }

    /// Resume playback at the given instant.
    ///
    /// The start anchor is shifted forward by the paused duration, so the
    /// animation picks up where it paused instead of jumping ahead.
    pub fn resume_at(&mut self, now: Instant) {
        if !self.state.is_paused() {
            return;
        }

        if let (Some(start), Some(paused_at)) = (self.start_time, self.paused_at) {
            let paused_for = now.saturating_duration_since(paused_at);
            self.start_time = Some(start + paused_for);
        }
        self.paused_at = None;
        self.state = PlaybackState::Playing;
    }

    /// Stop playback and return the skeleton to its rest pose.
    ///
    /// Zeroes every joint channel, clears the timing anchors, and
    /// restores the configured playback rate.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Stopped;
        self.skeleton.hierarchy_mut().reset_pose();
        self.start_time = None;
        self.last_render = None;
        self.paused_at = None;
        self.last_frame_index = 0;
        self.playback_fps = self.configured_fps;
    }

    /// Add `delta` to the playback rate.
    ///
    /// Zero is degenerate but legal (the frame position stops growing);
    /// negative rates reverse the apparent direction and resolve through
    /// the wrap branch.
    pub fn adjust_rate(&mut self, delta: f32) {
        self.playback_fps += delta;
    }

    fn start(&mut self, now: Instant) -> Result<Tick> {
        self.start_time = Some(now);
        self.last_render = Some(now);
        self.last_frame_index = 0;
        self.skeleton.apply_frame_index(0)?;
        self.state = PlaybackState::Playing;
        Ok(Tick::Started)
    }

    fn base_period(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.base_fps)
    }
}
