use crate::input_policy::CharPolicy;
use crate::metrics;

/// Capacity of the typing buffer, in characters.
pub const MAX_BUFFER_LEN: usize = 999;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Scores for one completed level
#[derive(Clone, Debug, Copy, PartialEq, Default)]
pub struct LevelResult {
    pub accuracy: f64,
    pub wpm: f64,
    pub elapsed_secs: f64,
}

/// Bounded append/delete-only character sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingBuffer {
    chars: Vec<char>,
    capacity: usize,
}

impl TypingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity.min(MAX_BUFFER_LEN)),
            capacity,
        }
    }

    /// Returns false when the buffer is full.
    pub fn push(&mut self, c: char) -> bool {
        if self.chars.len() < self.capacity {
            self.chars.push(c);
            true
        } else {
            false
        }
    }

    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chars.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for TypingBuffer {
    fn default() -> Self {
        Self::new(MAX_BUFFER_LEN)
    }
}

impl std::fmt::Display for TypingBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Live input for the active level, scored against the level's target
#[derive(Debug, Clone)]
pub struct TypingSession {
    buffer: TypingBuffer,
    policy: CharPolicy,
    started_at: f64,
    frozen_at: Option<f64>,
}

impl TypingSession {
    pub fn new(policy: CharPolicy, capacity: usize) -> Self {
        Self {
            buffer: TypingBuffer::new(capacity),
            policy,
            started_at: 0.0,
            frozen_at: None,
        }
    }

    /// Empties the buffer and starts timing from `now`.
    pub fn start(&mut self, now: f64) {
        self.buffer.clear();
        self.started_at = now;
        self.frozen_at = None;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.frozen_at = None;
    }

    /// Returns true if the character was stored.
    pub fn append_char(&mut self, c: char) -> bool {
        if c == '\n' {
            return self.append_newline();
        }
        if self.is_frozen() || !self.policy.admits(c) {
            return false;
        }
        self.buffer.push(c)
    }

    pub fn append_newline(&mut self) -> bool {
        if self.is_frozen() {
            return false;
        }
        self.buffer.push('\n')
    }

    pub fn backspace(&mut self) -> bool {
        if self.is_frozen() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Stops accepting input. Only the first call records a time.
    pub fn freeze(&mut self, now: f64) {
        if self.frozen_at.is_none() {
            self.frozen_at = Some(now);
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_at.is_some()
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    pub fn elapsed_secs(&self, now: f64) -> f64 {
        (self.frozen_at.unwrap_or(now) - self.started_at).max(0.0)
    }

    pub fn buffer(&self) -> &TypingBuffer {
        &self.buffer
    }

    pub fn input(&self) -> String {
        self.buffer.to_string()
    }

    pub fn outcomes(&self, target: &str) -> Vec<Outcome> {
        classify(self.buffer.as_chars(), target)
    }

    /// Freezes the buffer and scores it against `target`.
    ///
    /// Elapsed time runs up to the moment the session was first frozen, so a
    /// level that was finished early keeps its early time.
    pub fn finish(&mut self, target: &str, now: f64) -> LevelResult {
        self.freeze(now);

        let target: Vec<char> = target.chars().collect();
        let typed = self.buffer.as_chars();
        let elapsed_secs = self.elapsed_secs(now);
        let correct = metrics::correct_chars(typed, &target);

        LevelResult {
            accuracy: metrics::accuracy(correct, target.len()),
            wpm: metrics::wpm(typed.len(), elapsed_secs),
            elapsed_secs,
        }
    }
}

impl Default for TypingSession {
    fn default() -> Self {
        Self::new(CharPolicy::default(), MAX_BUFFER_LEN)
    }
}

/// Per typed character, whether it matches the target at the same position.
pub fn classify(typed: &[char], target: &str) -> Vec<Outcome> {
    let mut expected = target.chars();
    typed
        .iter()
        .map(|c| match expected.next() {
            Some(e) if e == *c => Outcome::Correct,
            _ => Outcome::Incorrect,
        })
        .collect()
}
