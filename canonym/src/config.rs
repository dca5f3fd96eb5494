//! Canonicalizer configuration and vocabulary input.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::{
    DEFAULT_ALGORITHMS, DEFAULT_KEYBOARD, DEFAULT_MAX_ALIAS_HOPS, DEFAULT_STOPWORDS,
};
use crate::error::CanonError;
use crate::keyboard::KeyboardLayout;

/// Settings of a canonicalizer, read from camelCase JSON. Missing fields
/// take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanonConfig {
    /// Algorithm codes in priority order
    pub algorithms: String,
    /// Keyboard layout name used by the keyboard matchers
    pub keyboard: String,
    /// Words dropped while lexing, matched case-insensitively
    pub stopwords: Vec<String>,
    /// Whether the acronym index is consulted before the arbor
    pub acronym_matching: bool,
    /// Whether contraction matching is registered
    pub contraction_matching: bool,
    /// Upper bound on re-resolutions in chained alias lookups
    pub max_alias_hops: usize,
}

impl CanonConfig {
    /// Parses a JSON configuration object.
    pub fn from_json(json: &str) -> Result<CanonConfig, CanonError> {
        serde_json::from_str(json).map_err(CanonError::Config)
    }

    /// The configured keyboard layout.
    pub fn layout(&self) -> Result<KeyboardLayout, CanonError> {
        self.keyboard.parse()
    }
}

impl Default for CanonConfig {
    fn default() -> Self {
        CanonConfig {
            algorithms: DEFAULT_ALGORITHMS.to_string(),
            keyboard: DEFAULT_KEYBOARD.to_string(),
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            acronym_matching: true,
            contraction_matching: true,
            max_alias_hops: DEFAULT_MAX_ALIAS_HOPS,
        }
    }
}

/// Canonical phrases and their aliases, ordered by phrase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: BTreeMap<SmolStr, Vec<SmolStr>>,
}

impl Vocabulary {
    /// Parses a JSON object mapping phrases to alias lists.
    pub fn from_json(json: &str) -> Result<Vocabulary, CanonError> {
        serde_json::from_str(json).map_err(CanonError::Vocabulary)
    }

    /// Adds a canonical phrase, appending `aliases` to any it already has.
    pub fn insert<K, I, S>(&mut self, phrase: K, aliases: I)
    where
        K: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries
            .entry(SmolStr::from(phrase.as_ref()))
            .or_default()
            .extend(aliases.into_iter().map(|a| SmolStr::from(a.as_ref())));
    }

    /// Aliases of `phrase`, if it is a canonical phrase.
    pub fn aliases(&self, phrase: &str) -> Option<&[SmolStr]> {
        self.entries.get(phrase).map(Vec::as_slice)
    }

    /// Phrases with their aliases, in phrase order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SmolStr])> {
        self.entries
            .iter()
            .map(|(phrase, aliases)| (phrase.as_str(), aliases.as_slice()))
    }

    /// Number of canonical phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no phrases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, S> FromIterator<(K, Vec<S>)> for Vocabulary
where
    K: AsRef<str>,
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (K, Vec<S>)>>(iter: T) -> Self {
        let mut vocabulary = Vocabulary::default();
        for (phrase, aliases) in iter {
            vocabulary.insert(phrase, aliases);
        }
        vocabulary
    }
}
