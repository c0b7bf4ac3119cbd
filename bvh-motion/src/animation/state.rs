//! Playback state tracking

/// State machine position of the playback controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Initial state; also entered by `reset()`
    #[default]
    Stopped,
    /// Advancing in real time
    Playing,
    /// Suspended; elapsed wall time is excluded on resume
    Paused,
}

impl PlaybackState {
    /// Whether the controller is advancing
    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }

    /// Whether the controller is paused
    pub fn is_paused(self) -> bool {
        self == PlaybackState::Paused
    }
}

/// What a single `advance` call did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// First advance from `Stopped`: frame 0 applied verbatim
    Started,
    /// Less than one base tick period since the last render; no-op
    Throttled,
    /// Interpolated pose applied between `first_frame` and `first_frame + 1`
    Interpolated {
        /// Index of the earlier frame of the bracketing pair
        first_frame: usize,
        /// Interpolation parameter in `[0, 1)`
        t: f32,
    },
    /// Playback position ran off the end (or start); frame 0 re-applied
    Wrapped,
    /// Advance while paused; nothing changed
    Idle,
}
