//! Read-only snapshot of the session handed to the shell after every update.

use serde::{Deserialize, Serialize};

use crate::typing::{LevelResult, Outcome};

/// State tag of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    Menu,
    Countdown,
    Typing,
    LevelResult,
    FinalSummary,
}

/// Feedback hint for the shell, e.g. a sound or a bell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Start,
    Key,
    Newline,
    Backspace,
    Finish,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypingView {
    pub target: String,
    pub input: String,
    /// One entry per character of `input`.
    pub outcomes: Vec<Outcome>,
    pub elapsed_secs: f64,
    pub time_limit_secs: f64,
    pub finished: bool,
    pub cursor_visible: bool,
}

impl TypingView {
    /// Fraction of the time limit still available, in `[0, 1]`.
    pub fn time_left_ratio(&self) -> f64 {
        if self.time_limit_secs <= 0.0 {
            return 0.0;
        }
        (1.0 - self.elapsed_secs / self.time_limit_secs).clamp(0.0, 1.0)
    }

    /// Characters paired with their outcome, for drawing.
    pub fn classified(&self) -> impl Iterator<Item = (char, Outcome)> + '_ {
        self.input.chars().zip(self.outcomes.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Menu { prompt_visible: bool },
    Countdown { remaining_secs: u32 },
    Typing(TypingView),
    LevelResult { result: LevelResult },
    FinalSummary {
        results: Vec<LevelResult>,
        total_elapsed_secs: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub level_index: usize,
    pub level_count: usize,
    pub view: View,
    /// Cues raised by the update that produced this snapshot.
    pub cues: Vec<Cue>,
}

impl RenderModel {
    pub fn phase(&self) -> Phase {
        match self.view {
            View::Menu { .. } => Phase::Menu,
            View::Countdown { .. } => Phase::Countdown,
            View::Typing(_) => Phase::Typing,
            View::LevelResult { .. } => Phase::LevelResult,
            View::FinalSummary { .. } => Phase::FinalSummary,
        }
    }

    /// True while typed text is being captured, so Enter means newline.
    pub fn accepts_text(&self) -> bool {
        matches!(&self.view, View::Typing(t) if !t.finished)
    }

    /// One-based level number for display, capped at the level count.
    pub fn level_number(&self) -> usize {
        (self.level_index + 1).min(self.level_count)
    }

    pub fn has_cue(&self, cue: Cue) -> bool {
        self.cues.contains(&cue)
    }
}
