use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use typemaster::keymap::translate_batch;
use typemaster::passage::Level;
use typemaster::render::{Phase, RenderModel, View};
use typemaster::runtime::{FixedTicker, Runner, TermEvent, TestEventSource};
use typemaster::session::{Session, SessionSettings};

fn key(code: KeyCode) -> TermEvent {
    TermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

type TestRunner = Runner<TestEventSource, FixedTicker>;

/// Queues `keys`, collects one frame and feeds it to the session at `now`.
fn drive(
    session: &mut Session,
    runner: &TestRunner,
    tx: &mpsc::Sender<TermEvent>,
    keys: &[TermEvent],
    now: f64,
) -> RenderModel {
    for k in keys {
        tx.send(k.clone()).unwrap();
    }
    let frame = runner.next_frame();
    let (events, quit) = translate_batch(&frame.keys, session.render_model(now).accepts_text());
    assert!(!quit);
    session.update(&events, now)
}

// Headless integration using the internal runtime + Session without a TTY.
// Frames are collected by the Runner; time is supplied by the test.
#[test]
fn headless_level_flow_completes() {
    let mut session = Session::new(vec![Level::new(["hi"], 45.0)], SessionSettings::default());

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    let model = drive(&mut session, &runner, &tx, &[key(KeyCode::Enter)], 0.0);
    assert_eq!(model.phase(), Phase::Countdown);

    let model = drive(&mut session, &runner, &tx, &[], 3.0);
    assert_eq!(model.phase(), Phase::Typing);

    let model = drive(
        &mut session,
        &runner,
        &tx,
        &[key(KeyCode::Char('h')), key(KeyCode::Char('i'))],
        4.0,
    );
    assert!(model.accepts_text());

    let model = drive(&mut session, &runner, &tx, &[key(KeyCode::Tab)], 5.0);
    assert!(!model.accepts_text());

    let model = drive(&mut session, &runner, &tx, &[key(KeyCode::Enter)], 6.0);
    match &model.view {
        View::LevelResult { result } => {
            assert_eq!(result.accuracy, 100.0);
            assert_eq!(result.elapsed_secs, 2.0);
            assert!((result.wpm - 12.0).abs() < 1e-9);
        }
        other => panic!("expected level result, got {other:?}"),
    }

    let model = drive(&mut session, &runner, &tx, &[key(KeyCode::Enter)], 6.5);
    assert_eq!(model.phase(), Phase::FinalSummary);
}

#[test]
fn headless_enter_is_newline_while_typing() {
    let mut session = Session::new(
        vec![Level::new(["a", "b"], 45.0)],
        SessionSettings::default(),
    );
    session.update(&[typemaster::session::Event::Confirm], 0.0);
    let model = session.update(&[], 3.0);

    let keys = [
        KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE),
    ];
    let (events, _) = translate_batch(&keys, model.accepts_text());
    session.update(&events, 4.0);

    assert_eq!(session.typing().input(), "a\nb");
}

#[test]
fn headless_escape_quits_from_any_phase() {
    let keys = [KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)];
    let (events, quit) = translate_batch(&keys, false);
    assert!(quit);
    assert!(events.is_empty());
}

#[test]
fn headless_tab_and_enter_in_one_frame_shows_result() {
    let mut session = Session::new(vec![Level::new(["hi"], 45.0)], SessionSettings::default());

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    drive(&mut session, &runner, &tx, &[key(KeyCode::Enter)], 0.0);
    drive(&mut session, &runner, &tx, &[], 3.0);

    let model = drive(
        &mut session,
        &runner,
        &tx,
        &[
            key(KeyCode::Char('h')),
            TermEvent::Key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            key(KeyCode::Tab),
            key(KeyCode::Enter),
        ],
        4.0,
    );
    assert_eq!(model.phase(), Phase::LevelResult);
    assert_eq!(session.typing().input(), "h");
}
