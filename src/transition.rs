//! Room transition and torchlight animation module.
//!
//! This module contains the timers driving the two animated effects of the in-game screen: the
//! fade played after every successful move and the flicker of the player's torch. Neither one
//! touches the maze; the fade only doubles as the gate that keeps moves from overlapping.

use std::time::{Duration, Instant};

use crate::{maze::Direction, navigation::MoveGate};

/// Default length of the fade played after each move, in milliseconds.
pub(crate) const DEFAULT_TRANSITION_MS: u64 = 300;

/// Phase advance of the torch flicker per rendered frame.
pub(crate) const TORCH_PHASE_STEP: f64 = 0.3;

/// Fade-in played when the player enters a new room.
///
/// This structure keeps track of when the current fade started and how long it lasts. While it is
/// active, player moves are rejected through its [`MoveGate`] implementation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Transition {
    /// Instant the current fade started, or `None` when idle.
    started: Option<Instant>,
    /// Total length of a fade.
    duration: Duration,
    /// Direction of the move that started the current fade.
    direction: Option<Direction>,
    /// Progress measured at the last [`update`](Transition::update).
    progress: f64,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TRANSITION_MS))
    }
}

impl Transition {
    /// Creates an idle transition lasting `duration`.
    pub(crate) const fn new(duration: Duration) -> Self {
        Self {
            started: None,
            duration,
            direction: None,
            progress: 0.,
        }
    }

    /// Starts a fade for a move in `direction`.
    pub(crate) fn start(&mut self, direction: Direction) {
        self.start_at(direction, Instant::now());
    }

    /// Starts a fade at a given instant.
    pub(crate) fn start_at(&mut self, direction: Direction, now: Instant) {
        self.started = Some(now);
        self.direction = Some(direction);
        self.progress = 0.;
    }

    /// Advances the fade to the current time.
    pub(crate) fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Advances the fade to `now`, ending it once its duration has elapsed.
    ///
    /// An idle transition ignores the call. A clock reading earlier than the start counts as no
    /// time elapsed, and a zero duration ends the fade on the first update.
    pub(crate) fn update_at(&mut self, now: Instant) {
        let Some(started) = self.started else {
            return;
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.started = None;
            self.direction = None;
            self.progress = 0.;
        } else {
            self.progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        }
    }

    /// Whether a fade is running.
    pub(crate) const fn is_active(&self) -> bool {
        self.started.is_some()
    }

    /// Direction of the move behind the running fade.
    pub(crate) const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Fraction of the fade already played, in `[0, 1)`; zero when idle.
    pub(crate) const fn progress(&self) -> f64 {
        self.progress
    }

    /// How dark the room should be drawn: one right after a move, fading to zero.
    pub(crate) fn darkness(&self) -> f64 {
        if self.is_active() {
            (1. - self.progress).clamp(0., 1.)
        } else {
            0.
        }
    }
}

impl MoveGate for Transition {
    fn is_busy(&self) -> bool {
        self.is_active()
    }
}

/// Flickering brightness of the player's torch.
///
/// This structure advances a sine wave by a fixed phase step every frame, so the flicker speed is
/// tied to the frame rate rather than to wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TorchFlicker {
    /// Phase of the flicker wave.
    phase: f64,
}

impl TorchFlicker {
    /// Advances the flicker by one frame.
    pub(crate) fn advance(&mut self) {
        self.phase += TORCH_PHASE_STEP;
    }

    /// Current brightness, oscillating between 0.8 and 1.0.
    pub(crate) fn intensity(&self) -> f64 {
        self.phase.sin().mul_add(0.1, 0.9)
    }
}
