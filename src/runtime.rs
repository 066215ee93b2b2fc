use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum TermEvent {
    Key(KeyEvent),
    Resize,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait TermEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<TermEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<TermEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                // key releases and repeats are not separate presses
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(TermEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(TermEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TermEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TermEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<TermEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<TermEvent>) -> Self {
        Self { rx }
    }
}

impl TermEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TermEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Monotonic seconds handed to the session every frame
pub trait Clock {
    fn now(&self) -> f64;
}

/// Seconds since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Everything that arrived during one frame
#[derive(Debug, Default)]
pub struct Frame {
    pub keys: Vec<KeyEvent>,
    pub resized: bool,
}

/// Runner that batches terminal events into fixed-length frames
pub struct Runner<E: TermEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: TermEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Collects events for one tick interval, in arrival order.
    pub fn next_frame(&self) -> Frame {
        let deadline = Instant::now() + self.ticker.interval();
        let mut frame = Frame::default();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.event_source.recv_timeout(remaining) {
                Ok(TermEvent::Key(key)) => frame.keys.push(key),
                Ok(TermEvent::Resize) => frame.resized = true,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => {
                    std::thread::sleep(remaining);
                    break;
                }
            }
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::mpsc;

    #[test]
    fn next_frame_batches_keys_in_order() {
        let (tx, rx) = mpsc::channel();
        for c in ['a', 'b', 'c'] {
            tx.send(TermEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
                .unwrap();
        }
        tx.send(TermEvent::Resize).unwrap();
        let runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(20)),
        );

        let frame = runner.next_frame();
        let codes: Vec<KeyCode> = frame.keys.iter().map(|k| k.code).collect();
        assert_eq!(
            codes,
            vec![KeyCode::Char('a'), KeyCode::Char('b'), KeyCode::Char('c')]
        );
        assert!(frame.resized);
    }

    #[test]
    fn next_frame_is_empty_without_events() {
        let (_tx, rx) = mpsc::channel();
        let runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(2)),
        );
        let frame = runner.next_frame();
        assert!(frame.keys.is_empty());
        assert!(!frame.resized);
    }

    #[test]
    fn next_frame_drains_then_waits_out_a_closed_source() {
        let (tx, rx) = mpsc::channel();
        tx.send(TermEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .unwrap();
        drop(tx);
        let interval = Duration::from_millis(15);
        let runner = Runner::new(TestEventSource::new(rx), FixedTicker::new(interval));

        let started = Instant::now();
        let frame = runner.next_frame();
        assert_eq!(frame.keys.len(), 1);
        assert_eq!(frame.keys[0].code, KeyCode::Enter);
        // a closed source still waits out the tick
        assert!(started.elapsed() >= interval);

        let frame = runner.next_frame();
        assert!(frame.keys.is_empty());
        assert!(!frame.resized);
    }

    #[test]
    fn monotonic_clock_moves_forward() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        std::thread::sleep(Duration::from_millis(2));
        assert!(clock.now() > a);
        assert!(a >= 0.0);
    }
}
