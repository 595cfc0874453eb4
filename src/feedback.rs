//! Sound and haptic feedback boundary.
//!
//! The game never plays audio itself. The session emits fire-and-forget
//! requests into a [`FeedbackSink`]; what the sink does with them (play a
//! sample, ring a bell, log a line, nothing) is up to the host. Sinks must
//! not fail: a broken audio device is the sink's problem, not the game's.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// The fixed catalog of sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sfx {
    /// Generic button click.
    Click,
    /// Alternate click.
    ClickAlt,
    /// Button press and release (correct answer).
    Press,
    /// Heavier press (wrong answer).
    PressBig,
    /// Start button.
    Start,
    /// Round won.
    Success,
    /// Round lost.
    Fail,
    /// Information pop.
    Info,
    /// Sci-fi information pop.
    InfoSciFi,
    /// Carousel swipe.
    Swoosh,
    /// Zap.
    Zap,
}

impl Sfx {
    /// Asset file name for hosts that play real samples.
    #[must_use]
    pub const fn asset(self) -> &'static str {
        match self {
            Self::Click => "button_click.wav",
            Self::ClickAlt => "button_click_var2.wav",
            Self::Press => "button_press_release.wav",
            Self::PressBig => "button_press_release_large.wav",
            Self::Start => "start_game_button.wav",
            Self::Success => "game_complete.wav",
            Self::Fail => "game_over.wav",
            Self::Info => "info_pop.wav",
            Self::InfoSciFi => "info_pop_scifi.wav",
            Self::Swoosh => "swipe_dynamic.wav",
            Self::Zap => "futurama_zap.wav",
        }
    }
}

impl fmt::Display for Sfx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Haptic patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Haptic {
    /// Error notification buzz.
    Error,
}

/// One feedback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Play a sound effect.
    Sound(Sfx),
    /// Trigger a haptic pattern.
    Haptic(Haptic),
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sound(sfx) => write!(f, "{sfx}"),
            Self::Haptic(haptic) => write!(f, "haptic:{haptic:?}"),
        }
    }
}

/// Receiver of fire-and-forget feedback requests.
pub trait FeedbackSink {
    /// Play a sound effect. `now_ms` is the session clock.
    fn play(&mut self, sfx: Sfx, now_ms: u64);

    /// Trigger a haptic pattern. Ignored by default.
    fn haptic(&mut self, haptic: Haptic) {
        let _ = haptic;
    }

    /// Dispatch a cue to `play` or `haptic`.
    fn cue(&mut self, cue: Cue, now_ms: u64) {
        match cue {
            Cue::Sound(sfx) => self.play(sfx, now_ms),
            Cue::Haptic(haptic) => self.haptic(haptic),
        }
    }
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for &mut S {
    fn play(&mut self, sfx: Sfx, now_ms: u64) {
        (**self).play(sfx, now_ms);
    }

    fn haptic(&mut self, haptic: Haptic) {
        (**self).haptic(haptic);
    }
}

/// Drops every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn play(&mut self, _sfx: Sfx, _now_ms: u64) {}
}

/// Logs requests at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl FeedbackSink for TracingSink {
    fn play(&mut self, sfx: Sfx, now_ms: u64) {
        tracing::debug!(%sfx, asset = sfx.asset(), now_ms, "play sound");
    }

    fn haptic(&mut self, haptic: Haptic) {
        tracing::debug!(?haptic, "haptic");
    }
}

/// Keeps every request, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Requests received so far.
    pub cues: Vec<Cue>,
}

impl RecordingSink {
    /// Take the recorded cues, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }
}

impl FeedbackSink for RecordingSink {
    fn play(&mut self, sfx: Sfx, _now_ms: u64) {
        self.cues.push(Cue::Sound(sfx));
    }

    fn haptic(&mut self, haptic: Haptic) {
        self.cues.push(Cue::Haptic(haptic));
    }
}

/// Drops repeats of the same effect inside a time window.
#[derive(Debug)]
pub struct Throttled<S> {
    inner: S,
    window_ms: u64,
    last_played: HashMap<Sfx, u64>,
}

impl<S: FeedbackSink> Throttled<S> {
    /// Default window between repeats of one effect.
    pub const DEFAULT_WINDOW_MS: u64 = 150;

    /// Wrap a sink.
    #[must_use]
    pub fn new(inner: S, window_ms: u64) -> Self {
        Self {
            inner,
            window_ms,
            last_played: HashMap::new(),
        }
    }

    /// The wrapped sink.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Mutable access to the wrapped sink.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}

impl<S: FeedbackSink> FeedbackSink for Throttled<S> {
    fn play(&mut self, sfx: Sfx, now_ms: u64) {
        if let Some(&last) = self.last_played.get(&sfx)
            && now_ms.saturating_sub(last) < self.window_ms
        {
            tracing::trace!(%sfx, "throttled");
            return;
        }
        self.last_played.insert(sfx, now_ms);
        self.inner.play(sfx, now_ms);
    }

    fn haptic(&mut self, haptic: Haptic) {
        self.inner.haptic(haptic);
    }
}
