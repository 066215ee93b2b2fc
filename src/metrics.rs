/// Characters per "word" in words-per-minute figures.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Position-aligned matches between `typed` and `target`.
///
/// No alignment is attempted: one inserted or dropped character shifts every
/// later comparison.
pub fn correct_chars(typed: &[char], target: &[char]) -> usize {
    typed
        .iter()
        .zip(target.iter())
        .filter(|(t, e)| t == e)
        .count()
}

pub fn accuracy(correct: usize, target_len: usize) -> f64 {
    if target_len > 0 {
        correct as f64 / target_len as f64 * 100.0
    } else {
        0.0
    }
}

pub fn wpm(typed_len: usize, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        (typed_len as f64 / CHARS_PER_WORD) / (elapsed_secs / 60.0)
    } else {
        0.0
    }
}

/// Whether a blinking element is lit at `now` for a given half period.
pub fn blink_on(now: f64, interval_secs: f64) -> bool {
    if interval_secs <= 0.0 || now < 0.0 {
        return true;
    }
    (now / interval_secs).floor() as u64 % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_correct_chars_aligned() {
        assert_eq!(correct_chars(&chars("cat\ndig"), &chars("cat\ndog")), 6);
        assert_eq!(correct_chars(&chars("hello"), &chars("hello")), 5);
    }

    #[test]
    fn test_correct_chars_desyncs_after_insert() {
        assert_eq!(correct_chars(&chars("xhello"), &chars("hello")), 0);
    }

    #[test]
    fn test_correct_chars_ignores_overflow() {
        assert_eq!(correct_chars(&chars("catsss"), &chars("cat")), 3);
        assert_eq!(correct_chars(&chars("ca"), &chars("cat")), 2);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(5, 5), 100.0);
        assert_eq!(accuracy(0, 5), 0.0);
        assert!((accuracy(6, 7) - 85.714_285).abs() < 1e-4);
    }

    #[test]
    fn test_accuracy_empty_target() {
        assert_eq!(accuracy(0, 0), 0.0);
    }

    #[test]
    fn test_wpm() {
        assert!((wpm(7, 12.0) - 7.0).abs() < 1e-9);
        assert_eq!(wpm(300, 60.0), 60.0);
        assert_eq!(wpm(0, 30.0), 0.0);
    }

    #[test]
    fn test_wpm_zero_elapsed() {
        assert_eq!(wpm(42, 0.0), 0.0);
        assert_eq!(wpm(42, -1.0), 0.0);
    }

    #[test]
    fn test_blink_on() {
        assert!(blink_on(0.0, 0.5));
        assert!(blink_on(0.49, 0.5));
        assert!(!blink_on(0.5, 0.5));
        assert!(!blink_on(0.99, 0.5));
        assert!(blink_on(1.0, 0.5));
    }

    fn arb_text() -> impl Strategy<Value = Vec<char>> {
        prop::collection::vec(
            prop_oneof![
                8 => prop::char::range('a', 'e'),
                1 => Just(' '),
                1 => Just('\n'),
                1 => any::<char>(),
            ],
            0..64,
        )
    }

    proptest! {
        #[test]
        fn accuracy_stays_within_percent_bounds(typed in arb_text(), target in arb_text()) {
            let correct = correct_chars(&typed, &target);
            prop_assert!(correct <= typed.len().min(target.len()));

            let acc = accuracy(correct, target.len());
            prop_assert!((0.0..=100.0).contains(&acc), "accuracy {} out of range", acc);
        }

        #[test]
        fn wpm_follows_five_char_words(n in 0usize..10_000, elapsed in 1e-3f64..86_400.0) {
            let expected = (n as f64 / 5.0) / (elapsed / 60.0);
            prop_assert!((wpm(n, elapsed) - expected).abs() <= expected * 1e-12);
        }

        #[test]
        fn wpm_is_zero_without_elapsed_time(n in any::<usize>(), elapsed in -1e6f64..=0.0) {
            prop_assert_eq!(wpm(n, 0.0), 0.0);
            prop_assert_eq!(wpm(n, elapsed), 0.0);
        }
    }
}
