//! Discrete actions the state machine responds to.

use std::fmt;
use std::str::FromStr;

/// Everything that can happen to a game: player input and timer ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Begin a new round (shuffle targets, enter memorize).
    StartGame,
    /// Open the instructions screen.
    ShowHowToPlay,
    /// Leave the instructions screen; reinitializes the state.
    BackToMenu,
    /// Focus the next carousel choice.
    NextChoice,
    /// Focus the previous carousel choice.
    PreviousChoice,
    /// Submit the focused choice as the answer for the highlighted target.
    SelectCurrentChoice,
    /// Discard the round and return to the menu.
    ResetGame,
    /// One second of the memorize clock.
    TickTimer,
    /// One second of the recall clock.
    TickRecallTimer,
    /// Open the origin overlay (pauses timers).
    ShowOriginPopup,
    /// Close the origin overlay (resumes timers).
    HideOriginPopup,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 11] = [
        Self::StartGame,
        Self::ShowHowToPlay,
        Self::BackToMenu,
        Self::NextChoice,
        Self::PreviousChoice,
        Self::SelectCurrentChoice,
        Self::ResetGame,
        Self::TickTimer,
        Self::TickRecallTimer,
        Self::ShowOriginPopup,
        Self::HideOriginPopup,
    ];

    /// Script name, e.g. `START_GAME`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StartGame => "START_GAME",
            Self::ShowHowToPlay => "SHOW_HOW_TO_PLAY",
            Self::BackToMenu => "BACK_TO_MENU",
            Self::NextChoice => "NEXT_CHOICE",
            Self::PreviousChoice => "PREVIOUS_CHOICE",
            Self::SelectCurrentChoice => "SELECT_CURRENT_CHOICE",
            Self::ResetGame => "RESET_GAME",
            Self::TickTimer => "TICK_TIMER",
            Self::TickRecallTimer => "TICK_RECALL_TIMER",
            Self::ShowOriginPopup => "SHOW_ORIGIN_POPUP",
            Self::HideOriginPopup => "HIDE_ORIGIN_POPUP",
        }
    }

    /// Whether this action comes from the clock rather than the player.
    #[must_use]
    pub const fn is_tick(self) -> bool {
        matches!(self, Self::TickTimer | Self::TickRecallTimer)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| s.to_string())
    }
}
