use std::borrow::Borrow;
use std::collections::BTreeSet;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// First letters of every token, e.g. `MIT` for
/// `MASSACHUSETTS INSTITUTE TECHNOLOGY`.
pub fn acronym<S: Borrow<str>>(tokens: &[S]) -> SmolStr {
    tokens
        .iter()
        .filter_map(|token| Borrow::<str>::borrow(token).chars().next())
        .collect()
}

/// Raw vocabulary strings grouped by their acronym.
///
/// Several phrases may share an acronym; lookups return all of them and leave
/// the choice to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcronymIndex {
    entries: HashMap<SmolStr, BTreeSet<SmolStr>>,
}

impl AcronymIndex {
    /// Files `raw` under the acronym of `tokens`. Token sequences without
    /// letters have no acronym and are ignored.
    pub fn insert<S: Borrow<str>>(&mut self, tokens: &[S], raw: &str) -> bool {
        let key = acronym(tokens);

        if key.is_empty() {
            return false;
        }

        self.entries
            .entry(key)
            .or_default()
            .insert(SmolStr::from(raw))
    }

    /// Raw strings filed under exactly `acronym`.
    pub fn get(&self, acronym: &str) -> Option<&BTreeSet<SmolStr>> {
        self.entries.get(acronym)
    }

    /// Tries the concatenation of all input tokens first, then the first
    /// token alone.
    pub fn lookup<S: Borrow<str>>(&self, tokens: &[S]) -> Option<&BTreeSet<SmolStr>> {
        let mut whole = String::new();
        for token in tokens {
            whole.push_str(Borrow::<str>::borrow(token));
        }

        self.get(&whole)
            .or_else(|| tokens.first().and_then(|first| self.get(Borrow::<str>::borrow(first))))
    }

    /// Number of distinct acronyms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no acronym is filed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
