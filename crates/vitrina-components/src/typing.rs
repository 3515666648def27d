//! Typewriter text animation for hero headings.

use serde::{Deserialize, Serialize};

/// Default delay between typed characters.
pub const DEFAULT_TYPE_SPEED_MS: f64 = 50.0;

/// A typing step: the text to render and whether the animation finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingStep {
    /// Prefix of the full text to render.
    pub text: String,
    /// Set on the final step; the caller drops the typing class.
    pub finished: bool,
}

/// Typewriter controller: reveals one character per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typing {
    text: Vec<char>,
    shown: usize,
    speed_ms: f64,
}

impl Typing {
    /// Create a typing animation for the given text.
    #[must_use]
    pub fn new(text: &str, speed_ms: f64) -> Self {
        Self {
            text: text.chars().collect(),
            shown: 0,
            speed_ms: if speed_ms > 0.0 {
                speed_ms
            } else {
                DEFAULT_TYPE_SPEED_MS
            },
        }
    }

    /// Delay between ticks.
    #[must_use]
    pub const fn speed_ms(&self) -> f64 {
        self.speed_ms
    }

    /// Whether all characters have been revealed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.shown >= self.text.len()
    }

    /// Reveal the next character. Returns `None` once finished.
    pub fn on_tick(&mut self) -> Option<TypingStep> {
        if self.is_finished() {
            return None;
        }
        self.shown += 1;
        Some(TypingStep {
            text: self.text[..self.shown].iter().collect(),
            finished: self.shown == self.text.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_character_per_tick() {
        let mut t = Typing::new("Hi!", 50.0);
        assert_eq!(
            t.on_tick(),
            Some(TypingStep {
                text: "H".into(),
                finished: false
            })
        );
        assert_eq!(t.on_tick().map(|s| s.text), Some("Hi".into()));
        let last = t.on_tick().expect("third tick");
        assert_eq!(last.text, "Hi!");
        assert!(last.finished);
        assert_eq!(t.on_tick(), None);
    }

    #[test]
    fn test_empty_text_finishes_immediately() {
        let mut t = Typing::new("", 50.0);
        assert!(t.is_finished());
        assert_eq!(t.on_tick(), None);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut t = Typing::new("héllo", 50.0);
        t.on_tick();
        assert_eq!(t.on_tick().map(|s| s.text), Some("hé".into()));
    }

    #[test]
    fn test_invalid_speed_falls_back_to_default() {
        let t = Typing::new("x", 0.0);
        assert_eq!(t.speed_ms(), DEFAULT_TYPE_SPEED_MS);
    }
}
