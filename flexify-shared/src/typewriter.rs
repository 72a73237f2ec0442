//! Character-by-character reveal of a sequence of phrases.
//!
//! The state machine is driven by the caller: after each [`Typewriter::tick`]
//! the caller waits [`Typewriter::next_delay_ms`] and ticks again, until the
//! machine reports [`TypewriterStep::Finished`].

/// Delay between two revealed characters.
pub const TYPING_DELAY_MS: u32 = 100;

/// Pause on a fully revealed phrase before it is cleared.
pub const PHRASE_PAUSE_MS: u32 = 1_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterStep {
    /// One more character of the current phrase is visible.
    Typed,
    /// The completed phrase was cleared and the next one selected.
    Advanced,
    /// Every phrase has been shown.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    revealed: usize,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            index: 0,
            revealed: 0,
        }
    }

    fn current_phrase(&self) -> Option<&str> {
        self.phrases.get(self.index).map(String::as_str)
    }

    /// Visible prefix of the current phrase.
    #[must_use]
    pub fn displayed(&self) -> &str {
        let Some(phrase) = self.current_phrase() else {
            return "";
        };
        let end = phrase
            .char_indices()
            .nth(self.revealed)
            .map_or(phrase.len(), |(offset, _)| offset);
        &phrase[..end]
    }

    #[must_use]
    pub const fn phrase_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.phrases.len()
    }

    /// The blinking caret is shown until the last phrase has been cleared.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        !self.is_finished()
    }

    fn phrase_complete(&self) -> bool {
        self.current_phrase()
            .is_none_or(|phrase| self.revealed >= phrase.chars().count())
    }

    /// How long to wait before the next [`Typewriter::tick`], or `None` once finished.
    #[must_use]
    pub fn next_delay_ms(&self) -> Option<u32> {
        if self.is_finished() {
            None
        } else if self.phrase_complete() {
            Some(PHRASE_PAUSE_MS)
        } else {
            Some(TYPING_DELAY_MS)
        }
    }

    pub fn tick(&mut self) -> TypewriterStep {
        if self.is_finished() {
            return TypewriterStep::Finished;
        }

        if self.phrase_complete() {
            self.index += 1;
            self.revealed = 0;
            if self.is_finished() {
                TypewriterStep::Finished
            } else {
                TypewriterStep::Advanced
            }
        } else {
            self.revealed += 1;
            TypewriterStep::Typed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_tick() {
        let mut typewriter = Typewriter::new(["Hey"]);
        assert_eq!(typewriter.displayed(), "");
        assert_eq!(typewriter.next_delay_ms(), Some(TYPING_DELAY_MS));

        assert_eq!(typewriter.tick(), TypewriterStep::Typed);
        assert_eq!(typewriter.displayed(), "H");
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.displayed(), "Hey");
        assert_eq!(typewriter.next_delay_ms(), Some(PHRASE_PAUSE_MS));
    }

    #[test]
    fn pauses_then_moves_to_next_phrase() {
        let mut typewriter = Typewriter::new(["Hi", "Go"]);
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.displayed(), "Hi");

        assert_eq!(typewriter.tick(), TypewriterStep::Advanced);
        assert_eq!(typewriter.phrase_index(), 1);
        assert_eq!(typewriter.displayed(), "");
        assert!(typewriter.cursor_visible());
    }

    #[test]
    fn finishes_after_last_phrase_is_cleared() {
        let mut typewriter = Typewriter::new(["Welcome to Flexify", "Log in to Continue"]);
        let mut ticks = 0;
        while typewriter.tick() != TypewriterStep::Finished {
            ticks += 1;
        }
        // 18 + 18 characters plus one advance between the phrases.
        assert_eq!(ticks, 37);
        assert!(typewriter.is_finished());
        assert!(!typewriter.cursor_visible());
        assert_eq!(typewriter.next_delay_ms(), None);
        assert_eq!(typewriter.displayed(), "");
        assert_eq!(typewriter.tick(), TypewriterStep::Finished);
    }

    #[test]
    fn empty_phrase_list_is_finished_immediately() {
        let mut typewriter = Typewriter::new(Vec::<String>::new());
        assert!(typewriter.is_finished());
        assert_eq!(typewriter.next_delay_ms(), None);
        assert_eq!(typewriter.tick(), TypewriterStep::Finished);
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        let mut typewriter = Typewriter::new(["¡Olé!"]);
        typewriter.tick();
        assert_eq!(typewriter.displayed(), "¡");
        typewriter.tick();
        typewriter.tick();
        typewriter.tick();
        assert_eq!(typewriter.displayed(), "¡Olé");
    }
}
