use std::sync::Arc;

use super::{AlgorithmCode, Matcher};
use crate::keyboard::KeyboardModel;

/// Accepts equal-length tokens where every typed character lies within one
/// key of the intended one.
#[derive(Debug, Clone)]
pub struct FatFinger {
    keyboard: Arc<KeyboardModel>,
}

impl FatFinger {
    /// Creates the matcher over a shared keyboard model.
    pub fn new(keyboard: Arc<KeyboardModel>) -> FatFinger {
        FatFinger { keyboard }
    }
}

impl Matcher for FatFinger {
    fn code(&self) -> AlgorithmCode {
        AlgorithmCode::FatFinger
    }

    fn matches(&self, canonical: &str, candidate: &str) -> bool {
        if canonical.chars().count() != candidate.chars().count() {
            return false;
        }

        canonical
            .chars()
            .zip(candidate.chars())
            .all(|(intended, typed)| self.keyboard.is_adjacent(typed, intended))
    }
}

/// Accepts a candidate that spells a keyboard-neighbour prefix of the
/// canonical token: each canonical character must lie on a key next to the
/// candidate character at the same position.
///
/// This looks the table up in the opposite direction from [`FatFinger`],
/// so the candidate's letters are the centers.
#[derive(Debug, Clone)]
pub struct KeyboardPrefix {
    keyboard: Arc<KeyboardModel>,
}

impl KeyboardPrefix {
    /// Creates the matcher over a shared keyboard model.
    pub fn new(keyboard: Arc<KeyboardModel>) -> KeyboardPrefix {
        KeyboardPrefix { keyboard }
    }
}

impl Matcher for KeyboardPrefix {
    fn code(&self) -> AlgorithmCode {
        AlgorithmCode::KeyboardPrefix
    }

    fn matches(&self, canonical: &str, candidate: &str) -> bool {
        let mut canonical = canonical.chars();

        for typed in candidate.chars() {
            match canonical.next() {
                Some(intended) if self.keyboard.is_adjacent(intended, typed) => {}
                _ => return false,
            }
        }

        true
    }
}
