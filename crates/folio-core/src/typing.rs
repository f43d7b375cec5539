use std::time::Duration;

use crate::constants::{DELETE_DELAY_MS, TYPE_DELAY_MS, TYPING_PAUSE_MS};

/// Text to display and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Types a phrase one character at a time, holds it, deletes it, then moves
/// on to the next phrase, forever.
#[derive(Clone, Debug)]
pub struct TypingLoop {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    shown: usize,
    phase: Phase,
    pause: Duration,
    type_delay: Duration,
    delete_delay: Duration,
}

impl TypingLoop {
    /// `None` when there is nothing to type.
    pub fn new<I, S>(phrases: I, pause: Duration) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .filter(|p| !p.is_empty())
            .collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
            pause,
            type_delay: Duration::from_millis(TYPE_DELAY_MS),
            delete_delay: Duration::from_millis(DELETE_DELAY_MS),
        })
    }

    pub fn with_default_pause<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(phrases, Duration::from_millis(TYPING_PAUSE_MS))
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn tick(&mut self) -> TypingFrame {
        let len = self.phrases[self.phrase].len();
        let delay = match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= len {
                    self.phase = Phase::Deleting;
                    self.pause
                } else {
                    self.type_delay
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    let frame = self.frame(self.delete_delay);
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    return frame;
                }
                self.delete_delay
            }
        };
        self.frame(delay)
    }

    fn frame(&self, delay: Duration) -> TypingFrame {
        TypingFrame {
            text: self.phrases[self.phrase][..self.shown].iter().collect(),
            delay,
        }
    }
}
