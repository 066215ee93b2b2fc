use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::Event;

/// What a key press means to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Session(Event),
    Quit,
}

/// Maps a key press onto the session vocabulary.
///
/// Enter is a newline while text is being captured and a confirm otherwise.
pub fn translate(key: KeyEvent, accepts_text: bool) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let event = match key.code {
        KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Enter if accepts_text => Event::Newline,
        KeyCode::Enter => Event::Confirm,
        KeyCode::Tab => Event::ManualFinish,
        KeyCode::Backspace => Event::Backspace,
        // chords are shortcuts, not text
        KeyCode::Char(_)
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            return None
        }
        KeyCode::Char(c) => Event::Char(c),
        _ => return None,
    };

    Some(Command::Session(event))
}

/// Translates a frame's keys; the batch stops at the first quit.
///
/// A manual finish ends text capture, so any Enter after it in the same
/// batch confirms.
pub fn translate_batch(keys: &[KeyEvent], accepts_text: bool) -> (Vec<Event>, bool) {
    let mut accepts_text = accepts_text;
    let mut events = Vec::with_capacity(keys.len());
    for key in keys {
        match translate(*key, accepts_text) {
            Some(Command::Quit) => return (events, true),
            Some(Command::Session(ev)) => {
                if ev == Event::ManualFinish {
                    accepts_text = false;
                }
                events.push(ev);
            }
            None => {}
        }
    }
    (events, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_depends_on_typing() {
        assert_eq!(
            translate(key(KeyCode::Enter), true),
            Some(Command::Session(Event::Newline))
        );
        assert_eq!(
            translate(key(KeyCode::Enter), false),
            Some(Command::Session(Event::Confirm))
        );
    }

    #[test]
    fn editing_keys() {
        assert_eq!(
            translate(key(KeyCode::Tab), true),
            Some(Command::Session(Event::ManualFinish))
        );
        assert_eq!(
            translate(key(KeyCode::Backspace), true),
            Some(Command::Session(Event::Backspace))
        );
        assert_eq!(
            translate(key(KeyCode::Char('x')), true),
            Some(Command::Session(Event::Char('x')))
        );
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT), true),
            Some(Command::Session(Event::Char('X')))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(translate(key(KeyCode::Esc), true), Some(Command::Quit));
        assert_eq!(
            translate(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                true
            ),
            Some(Command::Quit)
        );
    }

    #[test]
    fn modified_chars_are_not_text() {
        for mods in [
            KeyModifiers::CONTROL,
            KeyModifiers::ALT,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ] {
            assert_eq!(translate(KeyEvent::new(KeyCode::Char('w'), mods), true), None);
        }
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Backspace, KeyModifiers::CONTROL), true),
            Some(Command::Session(Event::Backspace))
        );
    }

    #[test]
    fn enter_after_tab_in_one_batch_confirms() {
        let keys = [
            key(KeyCode::Char('a')),
            key(KeyCode::Tab),
            key(KeyCode::Enter),
        ];
        let (events, quit) = translate_batch(&keys, true);
        assert!(!quit);
        assert_eq!(
            events,
            vec![Event::Char('a'), Event::ManualFinish, Event::Confirm]
        );
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(translate(key(KeyCode::Left), true), None);
        assert_eq!(translate(key(KeyCode::F(5)), false), None);
    }

    #[test]
    fn batch_stops_at_quit() {
        let keys = [
            key(KeyCode::Char('a')),
            key(KeyCode::Up),
            key(KeyCode::Enter),
            key(KeyCode::Esc),
            key(KeyCode::Char('b')),
        ];
        let (events, quit) = translate_batch(&keys, true);
        assert!(quit);
        assert_eq!(events, vec![Event::Char('a'), Event::Newline]);
    }
}
