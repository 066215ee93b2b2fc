use tracing::{debug, info};

use crate::config::{Config, BLINK_INTERVAL_SECS, COUNTDOWN_SECS};
use crate::input_policy::CharPolicy;
use crate::metrics::blink_on;
use crate::passage::Level;
use crate::render::{Cue, RenderModel, TypingView, View};
use crate::typing::{LevelResult, TypingSession, MAX_BUFFER_LEN};

/// Discrete input delivered by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Char(char),
    Newline,
    Backspace,
    Confirm,
    ManualFinish,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    Menu,
    Countdown { started_at: f64 },
    Typing { started_at: f64, finished: bool },
    LevelResult,
    FinalSummary,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub countdown_secs: u32,
    pub policy: CharPolicy,
    pub buffer_capacity: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            countdown_secs: COUNTDOWN_SECS,
            policy: CharPolicy::default(),
            buffer_capacity: MAX_BUFFER_LEN,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            countdown_secs: cfg.countdown_secs,
            policy: cfg.input_filter,
            buffer_capacity: MAX_BUFFER_LEN,
        }
    }
}

/// Drives a run through every level and owns its results
#[derive(Debug)]
pub struct Session {
    levels: Vec<Level>,
    settings: SessionSettings,
    current_level: usize,
    state: SessionState,
    typing: TypingSession,
    results: Vec<Option<LevelResult>>,
    total_elapsed_secs: f64,
    cues: Vec<Cue>,
}

impl Session {
    pub fn new(levels: Vec<Level>, settings: SessionSettings) -> Self {
        let results = vec![None; levels.len()];
        Self {
            typing: TypingSession::new(settings.policy, settings.buffer_capacity),
            levels,
            settings,
            current_level: 0,
            state: SessionState::Menu,
            results,
            total_elapsed_secs: 0.0,
            cues: Vec::new(),
        }
    }

    /// Applies one frame of input and time, then returns what to draw.
    pub fn update(&mut self, events: &[Event], now: f64) -> RenderModel {
        self.cues.clear();
        for &event in events {
            self.handle_event(event, now);
        }
        self.advance_clock(now);
        self.render_model(now)
    }

    fn handle_event(&mut self, event: Event, now: f64) {
        match (self.state, event) {
            (SessionState::Menu, Event::Confirm) if self.levels.is_empty() => {
                self.state = SessionState::FinalSummary;
            }
            (SessionState::Menu, Event::Confirm) => self.enter_countdown(now),
            (SessionState::Typing { finished: false, .. }, Event::Char(c)) => {
                let cue = if c == '\n' { Cue::Newline } else { Cue::Key };
                if self.typing.append_char(c) {
                    self.cues.push(cue);
                }
            }
            (SessionState::Typing { finished: false, .. }, Event::Newline) => {
                if self.typing.append_newline() {
                    self.cues.push(Cue::Newline);
                }
            }
            (SessionState::Typing { finished: false, .. }, Event::Backspace) => {
                if self.typing.backspace() {
                    self.cues.push(Cue::Backspace);
                }
            }
            (SessionState::Typing { finished: false, .. }, Event::ManualFinish) => {
                debug!(level = self.current_level + 1, "finished manually");
                self.mark_finished(now);
            }
            (SessionState::Typing { finished: true, .. }, Event::Confirm) => {
                self.record_result(now);
            }
            (SessionState::LevelResult, Event::Confirm) => self.advance_level(now),
            _ => {}
        }
    }

    fn advance_clock(&mut self, now: f64) {
        match self.state {
            SessionState::Countdown { started_at }
                if now - started_at >= f64::from(self.settings.countdown_secs) =>
            {
                self.typing.start(now);
                self.state = SessionState::Typing {
                    started_at: now,
                    finished: false,
                };
                self.cues.push(Cue::Start);
                info!(level = self.current_level + 1, "typing started");
            }
            SessionState::Typing {
                started_at,
                finished: false,
            } if now - started_at >= self.current().time_limit_secs() => {
                debug!(level = self.current_level + 1, "time limit reached");
                self.mark_finished(now);
            }
            _ => {}
        }
    }

    fn enter_countdown(&mut self, now: f64) {
        self.typing.clear();
        self.state = SessionState::Countdown { started_at: now };
        self.cues.push(Cue::Start);
        debug!(level = self.current_level + 1, "countdown started");
    }

    fn mark_finished(&mut self, now: f64) {
        if let SessionState::Typing { started_at, .. } = self.state {
            self.typing.freeze(now);
            self.state = SessionState::Typing {
                started_at,
                finished: true,
            };
            self.cues.push(Cue::Finish);
        }
    }

    fn record_result(&mut self, now: f64) {
        let target = self.current().target_string();
        let result = self.typing.finish(&target, now);

        let slot = &mut self.results[self.current_level];
        debug_assert!(slot.is_none(), "level result written twice");
        if slot.is_none() {
            *slot = Some(result);
        }
        self.total_elapsed_secs = self.results.iter().flatten().map(|r| r.elapsed_secs).sum();
        self.state = SessionState::LevelResult;

        info!(
            level = self.current_level + 1,
            accuracy = result.accuracy,
            wpm = result.wpm,
            elapsed_secs = result.elapsed_secs,
            "level complete"
        );
    }

    fn advance_level(&mut self, now: f64) {
        self.current_level += 1;
        if self.current_level < self.levels.len() {
            self.enter_countdown(now);
        } else {
            self.state = SessionState::FinalSummary;
            info!(
                total_elapsed_secs = self.total_elapsed_secs,
                "run complete"
            );
        }
    }

    fn current(&self) -> &Level {
        &self.levels[self.current_level]
    }

    pub fn render_model(&self, now: f64) -> RenderModel {
        let view = match self.state {
            SessionState::Menu => View::Menu {
                prompt_visible: blink_on(now, BLINK_INTERVAL_SECS),
            },
            SessionState::Countdown { started_at } => {
                let whole_secs = (now - started_at).max(0.0).floor() as u32;
                View::Countdown {
                    remaining_secs: self.settings.countdown_secs.saturating_sub(whole_secs),
                }
            }
            SessionState::Typing { finished, .. } => {
                let target = self.current().target_string();
                View::Typing(TypingView {
                    outcomes: self.typing.outcomes(&target),
                    input: self.typing.input(),
                    target,
                    elapsed_secs: self.typing.elapsed_secs(now),
                    time_limit_secs: self.current().time_limit_secs(),
                    finished,
                    cursor_visible: !finished && blink_on(now, BLINK_INTERVAL_SECS),
                })
            }
            SessionState::LevelResult => View::LevelResult {
                result: self.results[self.current_level].unwrap_or_default(),
            },
            SessionState::FinalSummary => View::FinalSummary {
                results: self.results.iter().flatten().copied().collect(),
                total_elapsed_secs: self.total_elapsed_secs,
            },
        };

        RenderModel {
            level_index: self.current_level,
            level_count: self.levels.len(),
            view,
            cues: self.cues.clone(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn typing(&self) -> &TypingSession {
        &self.typing
    }

    pub fn result(&self, level: usize) -> Option<&LevelResult> {
        self.results.get(level).and_then(Option::as_ref)
    }

    pub fn results(&self) -> &[Option<LevelResult>] {
        &self.results
    }

    pub fn total_elapsed_secs(&self) -> f64 {
        self.total_elapsed_secs
    }
}
