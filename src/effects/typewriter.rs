//! Character-by-character text reveal.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::consts;
use crate::state::prefs::PreferenceSet;

/// Yields successively longer prefixes of a text, one character per step.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), typed: 0 }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.chars.len() - self.typed;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Typewriter {}

/// When to start typing an element and how fast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingJob {
    pub delay_ms: u32,
    pub tick_ms: u32,
}

impl TypingJob {
    /// The `index`-th `.terminal-command` line.
    #[must_use]
    pub fn command(index: usize, prefs: &PreferenceSet) -> Self {
        Self { delay_ms: stagger(index), tick_ms: prefs.typewriter_speed_ms }
    }

    /// The `index`-th `.terminal-output` line; starts after its command.
    #[must_use]
    pub fn output(index: usize, prefs: &PreferenceSet) -> Self {
        Self {
            delay_ms: stagger(index).saturating_add(consts::OUTPUT_OFFSET_MS),
            tick_ms: prefs.output_speed_ms(),
        }
    }

    #[must_use]
    pub fn tagline() -> Self {
        Self { delay_ms: consts::TAGLINE_DELAY_MS, tick_ms: consts::TAGLINE_TICK_MS }
    }
}

fn stagger(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(consts::LINE_STAGGER_MS)
}
