//! Outcome of canonicalizing one input line.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// What an input line resolved to
pub enum Canonical {
    /// a canonical phrase reached through the arbor
    Phrase(SmolStr),
    /// every vocabulary string sharing the input's acronym
    Acronym(BTreeSet<SmolStr>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Result of one canonicalization
pub struct Resolution {
    /// the raw input line
    pub input: SmolStr,
    /// the canonical form, if one was found
    pub canonical: Option<Canonical>,
    /// one algorithm code per resolved token, `.` for exact edges
    pub trace: String,
    /// alias re-resolutions taken after the first lookup
    #[serde(default, skip_serializing_if = "is_zero")]
    pub hops: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl Resolution {
    /// creates a resolution
    pub fn new(input: &str, canonical: Option<Canonical>, trace: String, hops: usize) -> Resolution {
        Resolution {
            input: SmolStr::from(input),
            canonical,
            trace,
            hops,
        }
    }

    pub(crate) fn unmatched(input: &str) -> Resolution {
        Resolution::new(input, None, String::new(), 0)
    }

    /// whether a canonical form was found
    pub fn is_match(&self) -> bool {
        match &self.canonical {
            Some(Canonical::Phrase(phrase)) => !phrase.is_empty(),
            Some(Canonical::Acronym(set)) => !set.is_empty(),
            None => false,
        }
    }

    /// the canonical phrase, when the arbor produced one
    pub fn phrase(&self) -> Option<&str> {
        match &self.canonical {
            Some(Canonical::Phrase(phrase)) => Some(phrase.as_str()),
            _ => None,
        }
    }

    /// the acronym candidates, when the input matched an acronym
    pub fn acronyms(&self) -> Option<&BTreeSet<SmolStr>> {
        match &self.canonical {
            Some(Canonical::Acronym(set)) => Some(set),
            _ => None,
        }
    }

    /// gets the algorithm trace
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// gets the number of alias hops
    pub fn hops(&self) -> usize {
        self.hops
    }
}
