//! Token-level approximate matching.
//!
//! Every algorithm answers one question: could `candidate` be a noisy
//! rendition of the `canonical` arbor token? The [`MatcherRegistry`] holds
//! the configured algorithms in priority order; the resolver asks them in
//! turn at every arbor node.
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use crate::error::CanonError;
use crate::keyboard::KeyboardModel;

mod edit;
mod keyboard;

pub use self::edit::{Contraction, EditDistance1};
pub use self::keyboard::{FatFinger, KeyboardPrefix};

/// One-character name of a matching algorithm, as used in priority strings
/// and resolution traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlgorithmCode {
    /// `_`: keyboard-neighbour prefix
    KeyboardPrefix,
    /// `c`: abbreviation
    Contraction,
    /// `e`: identical token
    Exact,
    /// `f`: every character one key off
    FatFinger,
    /// `L`: edit distance of one
    Levenshtein,
    /// `m`: reserved
    Metaphone,
    /// `N`: reserved
    Nysiis,
    /// `s`: reserved
    Soundex,
}

impl AlgorithmCode {
    /// Every algorithm code.
    pub const ALL: [AlgorithmCode; 8] = [
        AlgorithmCode::KeyboardPrefix,
        AlgorithmCode::Contraction,
        AlgorithmCode::Exact,
        AlgorithmCode::FatFinger,
        AlgorithmCode::Levenshtein,
        AlgorithmCode::Metaphone,
        AlgorithmCode::Nysiis,
        AlgorithmCode::Soundex,
    ];

    /// The code as written in priority strings and traces.
    pub fn as_char(self) -> char {
        match self {
            AlgorithmCode::KeyboardPrefix => '_',
            AlgorithmCode::Contraction => 'c',
            AlgorithmCode::Exact => 'e',
            AlgorithmCode::FatFinger => 'f',
            AlgorithmCode::Levenshtein => 'L',
            AlgorithmCode::Metaphone => 'm',
            AlgorithmCode::Nysiis => 'N',
            AlgorithmCode::Soundex => 's',
        }
    }

    /// Phonetic slots are reserved; their matchers never accept.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            AlgorithmCode::Metaphone | AlgorithmCode::Nysiis | AlgorithmCode::Soundex
        )
    }
}

impl TryFrom<char> for AlgorithmCode {
    type Error = CanonError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        AlgorithmCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_char() == value)
            .ok_or(CanonError::UnknownAlgorithm(value))
    }
}

impl fmt::Display for AlgorithmCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A token-level matching algorithm.
pub trait Matcher: fmt::Debug + Send + Sync {
    /// The code this matcher is registered and traced under.
    fn code(&self) -> AlgorithmCode;

    /// Whether `candidate` is accepted as a rendition of `canonical`.
    fn matches(&self, canonical: &str, candidate: &str) -> bool;
}

/// Accepts identical tokens only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

impl Matcher for Exact {
    fn code(&self) -> AlgorithmCode {
        AlgorithmCode::Exact
    }

    #[inline]
    fn matches(&self, canonical: &str, candidate: &str) -> bool {
        canonical == candidate
    }
}

/// Placeholder for a phonetic algorithm that has no implementation yet.
#[derive(Debug, Clone, Copy)]
pub struct Reserved(AlgorithmCode);

impl Matcher for Reserved {
    fn code(&self) -> AlgorithmCode {
        self.0
    }

    #[inline]
    fn matches(&self, _canonical: &str, _candidate: &str) -> bool {
        false
    }
}

fn builtin(code: AlgorithmCode, keyboard: &Arc<KeyboardModel>) -> Arc<dyn Matcher> {
    match code {
        AlgorithmCode::Exact => Arc::new(Exact),
        AlgorithmCode::FatFinger => Arc::new(FatFinger::new(keyboard.clone())),
        AlgorithmCode::KeyboardPrefix => Arc::new(KeyboardPrefix::new(keyboard.clone())),
        AlgorithmCode::Levenshtein => Arc::new(EditDistance1),
        AlgorithmCode::Contraction => Arc::new(Contraction),
        code => Arc::new(Reserved(code)),
    }
}

/// Matchers in priority order.
#[derive(Debug, Clone)]
pub struct MatcherRegistry {
    matchers: Vec<Arc<dyn Matcher>>,
}

impl MatcherRegistry {
    /// Builds the registry for a priority string such as `"cefLmNs"`.
    ///
    /// Repeated codes keep their first position. Contraction is left out
    /// when `contraction` is false.
    pub fn new(
        algorithms: &str,
        keyboard: Arc<KeyboardModel>,
        contraction: bool,
    ) -> Result<MatcherRegistry, CanonError> {
        let codes = algorithms
            .chars()
            .map(AlgorithmCode::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let matchers = codes
            .into_iter()
            .unique()
            .filter(|code| contraction || *code != AlgorithmCode::Contraction)
            .map(|code| builtin(code, &keyboard))
            .collect::<Vec<_>>();

        let registry = MatcherRegistry { matchers };
        log::debug!(
            "matcher registry {:?} on {} keyboard",
            registry.codes(),
            keyboard.layout()
        );

        Ok(registry)
    }

    /// Replaces the matcher registered under the same code, or appends it
    /// with the lowest priority.
    pub fn register(&mut self, matcher: Arc<dyn Matcher>) {
        let code = matcher.code();

        match self.matchers.iter_mut().find(|m| m.code() == code) {
            Some(slot) => *slot = matcher,
            None => self.matchers.push(matcher),
        }
    }

    /// The registered codes in priority order.
    pub fn codes(&self) -> String {
        self.matchers.iter().map(|m| m.code().as_char()).collect()
    }

    /// The matchers in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Matcher> {
        self.matchers.iter().map(|m| m.as_ref())
    }

    /// Number of registered matchers.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether no matcher is registered.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// The highest-priority algorithm accepting the pair.
    pub fn first_match(&self, canonical: &str, candidate: &str) -> Option<AlgorithmCode> {
        self.iter()
            .find(|m| m.matches(canonical, candidate))
            .map(|m| m.code())
    }
}
