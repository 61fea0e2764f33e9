//! Type / hold / delete cycle for the rotating hero roles.

/// Upper bound on time consumed by a single `advance` call, so a tab that
/// was in the background does not fast-forward through whole words.
pub const MAX_CATCH_UP_MS: f64 = 2_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypewriterTiming {
    pub type_ms: f64,
    pub delete_ms: f64,
    pub hold_ms: f64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 70.0,
            delete_ms: 50.0,
            hold_ms: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    timing: TypewriterTiming,
    word: usize,
    chars: usize,
    phase: Phase,
    pending_ms: f64,
}

impl Typewriter {
    pub fn new(words: Vec<String>, timing: TypewriterTiming) -> Self {
        // zero-length steps would never consume time
        let timing = TypewriterTiming {
            type_ms: timing.type_ms.max(1.0),
            delete_ms: timing.delete_ms.max(1.0),
            hold_ms: timing.hold_ms.max(1.0),
        };
        Self {
            words,
            timing,
            word: 0,
            chars: 0,
            phase: Phase::Typing,
            pending_ms: 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    /// Currently visible prefix of the current word.
    pub fn text(&self) -> &str {
        let Some(word) = self.words.get(self.word) else {
            return "";
        };
        let end = word
            .char_indices()
            .nth(self.chars)
            .map(|(i, _)| i)
            .unwrap_or(word.len());
        &word[..end]
    }

    /// Feed elapsed time; returns true when the visible text changed.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        if self.words.is_empty() || !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return false;
        }
        self.pending_ms += elapsed_ms.min(MAX_CATCH_UP_MS);
        let before = (self.word, self.chars);
        loop {
            let step = match self.phase {
                Phase::Typing => self.timing.type_ms,
                Phase::Holding => self.timing.hold_ms,
                Phase::Deleting => self.timing.delete_ms,
            };
            if self.pending_ms < step {
                break;
            }
            self.pending_ms -= step;
            self.step();
        }
        before != (self.word, self.chars)
    }

    fn current_len(&self) -> usize {
        self.words
            .get(self.word)
            .map(|w| w.chars().count())
            .unwrap_or(0)
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                let len = self.current_len();
                if self.chars < len {
                    self.chars += 1;
                }
                if self.chars >= len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(words: &[&str]) -> Typewriter {
        Typewriter::new(
            words.iter().map(|w| w.to_string()).collect(),
            TypewriterTiming::default(),
        )
    }

    #[test]
    fn test_types_one_char_per_step() {
        let mut tw = writer(&["Rust."]);
        assert_eq!(tw.text(), "");
        assert!(!tw.advance(69.0));
        assert!(tw.advance(1.0));
        assert_eq!(tw.text(), "R");
        tw.advance(140.0);
        assert_eq!(tw.text(), "Rus");
    }

    #[test]
    fn test_full_cycle_moves_to_next_word() {
        let mut tw = writer(&["ab", "xyz"]);
        tw.advance(140.0);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), Phase::Holding);

        // holding does not change the text
        assert!(!tw.advance(999.0));
        tw.advance(1.0);
        assert_eq!(tw.phase(), Phase::Deleting);

        tw.advance(50.0);
        assert_eq!(tw.text(), "a");
        tw.advance(50.0);
        assert_eq!(tw.word_index(), 1);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);

        tw.advance(70.0);
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_loops_forever() {
        let mut tw = writer(&["a", "b"]);
        // type 70 + hold 1000 + delete 50 per word
        for _ in 0..2 {
            tw.advance(1120.0);
        }
        assert_eq!(tw.word_index(), 0);
    }

    #[test]
    fn test_multibyte_words() {
        let mut tw = writer(&["héllo"]);
        tw.advance(140.0);
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_empty_inputs() {
        let mut tw = writer(&[]);
        assert!(!tw.advance(10_000.0));
        assert_eq!(tw.text(), "");

        let mut tw = writer(&["ok"]);
        assert!(!tw.advance(f64::NAN));
        assert!(!tw.advance(-5.0));
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut tw = writer(&["abcdefghijklmnopqrstuvwxyz0123456789"]);
        tw.advance(60_000.0);
        // 2000ms of typing at 70ms per char
        assert_eq!(tw.text().len(), 28);
    }
}
