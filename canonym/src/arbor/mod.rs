//! The arbor: a token-keyed tree holding the canonical vocabulary.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::config::Vocabulary;
use crate::tokenizer::Tokenizer;

mod acronym;
mod node;
pub mod phonetic;

pub use self::acronym::{acronym, AcronymIndex};
pub use self::node::ArborNode;

/// Vocabulary tree plus the acronym index built alongside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arbor {
    root: ArborNode,
    acronyms: AcronymIndex,
}

impl Arbor {
    /// An empty arbor.
    pub fn new() -> Arbor {
        Arbor::default()
    }

    /// Builds the arbor for a vocabulary.
    ///
    /// Phrases are inserted in order, each one followed by its aliases, so
    /// the first phrase to claim a token path names it.
    pub fn from_vocabulary(vocabulary: &Vocabulary, tokenizer: &Tokenizer) -> Arbor {
        let mut arbor = Arbor::new();

        for (phrase, aliases) in vocabulary.iter() {
            arbor.insert(&tokenizer.lex(phrase), phrase);

            for alias in aliases {
                arbor.insert_alias(&tokenizer.lex(alias), alias, phrase);
            }
        }

        log::debug!(
            "arbor holds {} phrases, {} acronyms",
            arbor.root.terminal_count(),
            arbor.acronyms.len()
        );

        arbor
    }

    /// The node for the empty token path.
    pub fn root(&self) -> &ArborNode {
        &self.root
    }

    /// Acronyms of every inserted phrase and alias.
    pub fn acronyms(&self) -> &AcronymIndex {
        &self.acronyms
    }

    /// Inserts `phrase` under its own tokens.
    pub fn insert(&mut self, tokens: &[SmolStr], phrase: &str) -> bool {
        self.insert_alias(tokens, phrase, phrase)
    }

    /// Inserts the tokens of `alias`, naming `phrase` at the end of the path.
    /// The acronym index files the alias text itself.
    ///
    /// Returns whether a new terminal was set. Token sequences that lexed to
    /// nothing and empty phrases are skipped.
    pub fn insert_alias(&mut self, tokens: &[SmolStr], alias: &str, phrase: &str) -> bool {
        if tokens.first().map_or(true, |t| t.is_empty()) {
            log::warn!("skipping {:?}: no tokens", alias);
            return false;
        }

        if phrase.is_empty() {
            log::warn!("skipping {:?}: empty phrase", alias);
            return false;
        }

        self.acronyms.insert(tokens, alias);

        let inserted = self.root.insert(tokens, phrase);
        if inserted {
            log::trace!("arbor {:?} -> {:?}", tokens, phrase);
        }
        inserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUGH: [&str; 27] = [
        "a a a", "a a b", "a a c", "a b a", "a b b", "a b c", "a c a", "a c b", "a c c",
        "b a a", "b a b", "b a c", "b b a", "b b b", "b b c", "b c a", "b c b", "b c c",
        "c a a", "c a b", "c a c", "c b a", "c b b", "c b c", "c c a", "c c b", "c c c",
    ];

    const SOUNDEX: [&str; 27] = [
        "A000", "A100", "A200", "A100", "A100", "A120", "A200", "A210", "A200",
        "B000", "B100", "B200", "B100", "B100", "B120", "B200", "B210", "B200",
        "C000", "C100", "C200", "C100", "C100", "C120", "C200", "C210", "C200",
    ];

    const METAPHONE: [&str; 27] = [
        "A", "AP", "AK", "AP", "APP", "APK", "AK", "AKP", "AKK",
        "P", "PP", "PK", "PP", "PPP", "PPK", "PK", "PKP", "PKK",
        "K", "KP", "KK", "KP", "KPP", "KPK", "KK", "KKP", "KKK",
    ];

    #[test]
    fn arbor_shape() {
        let tokenizer = Tokenizer::default();
        let mut arbor = Arbor::new();

        for rough in ROUGH.iter() {
            assert!(arbor.insert(&tokenizer.lex(rough), rough));
        }

        let root = arbor.root();
        assert_eq!(root.depth(), 0);
        assert_eq!(root.terminal(), None);
        assert_eq!(root.terminal_count(), 27);

        for ((rough, soundex), metaphone) in ROUGH.iter().zip(SOUNDEX.iter()).zip(METAPHONE.iter()) {
            let mut node = root;
            for (depth, token) in tokenizer.lex(rough).iter().enumerate() {
                node = node.child(token).unwrap();
                assert_eq!(node.depth(), depth + 1);
            }

            assert!(node.is_leaf());
            assert_eq!(node.terminal(), Some(*rough));
            let keys = node.phonetic().unwrap();
            assert_eq!(keys.soundex, *soundex, "{}", rough);
            assert_eq!(keys.metaphone, *metaphone, "{}", rough);
            assert_eq!(keys.metaphone_alternate, None, "{}", rough);
        }

        for (_, first) in root.children() {
            assert_eq!(first.children().count(), 3);
            for (_, second) in first.children() {
                assert_eq!(second.children().count(), 3);
                assert_eq!(second.terminal(), None);
            }
        }
    }

    #[test]
    fn insertion_is_idempotent() {
        let tokenizer = Tokenizer::default();
        let mut once = Arbor::new();
        let mut twice = Arbor::new();

        for rough in ROUGH.iter() {
            once.insert(&tokenizer.lex(rough), rough);
        }
        for rough in ROUGH.iter().chain(ROUGH.iter()) {
            twice.insert(&tokenizer.lex(rough), rough);
        }

        assert_eq!(once, twice);
    }

    #[test]
    fn from_vocabulary() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.insert("American Board of Internal Medicine", ["ABIM"]);
        vocabulary.insert("Massachusetts Institute of Technology", ["M.I.T.", "The"]);

        let arbor = Arbor::from_vocabulary(&vocabulary, &Tokenizer::default());
        let root = arbor.root();

        assert_eq!(
            root.child("ABIM").and_then(ArborNode::terminal),
            Some("American Board of Internal Medicine")
        );
        assert_eq!(
            root.child("M")
                .and_then(|n| n.child("I"))
                .and_then(|n| n.child("T"))
                .and_then(ArborNode::terminal),
            Some("Massachusetts Institute of Technology")
        );
        assert_eq!(root.terminal(), None);
        assert_eq!(root.terminal_count(), 4);

        let abim = arbor.acronyms().get("ABIM").unwrap();
        assert!(abim.contains("American Board of Internal Medicine"));
        assert!(arbor.acronyms().get("A").unwrap().contains("ABIM"));
        assert!(arbor.acronyms().get("MIT").unwrap().contains("M.I.T."));
    }

    #[test]
    fn first_phrase_claims_path() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.insert("Boston College", Vec::<&str>::new());
        vocabulary.insert("Boston University", ["Boston College"]);

        let arbor = Arbor::from_vocabulary(&vocabulary, &Tokenizer::default());

        assert_eq!(
            arbor
                .root()
                .child("BOSTON")
                .and_then(|n| n.child("COLLEGE"))
                .and_then(ArborNode::terminal),
            Some("Boston College")
        );
    }

    #[test]
    fn empty_phrase_is_skipped() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.insert("", ["Yale U"]);
        vocabulary.insert("Yale University", Vec::<&str>::new());

        let arbor = Arbor::from_vocabulary(&vocabulary, &Tokenizer::default());
        let yale = arbor.root().child("YALE").unwrap();

        assert_eq!(yale.child("U"), None);
        assert_eq!(
            yale.child("UNIVERSITY").and_then(ArborNode::terminal),
            Some("Yale University")
        );
        assert_eq!(arbor.root().terminal_count(), 1);
        assert_eq!(arbor.acronyms().get("YU").unwrap().len(), 1);

        let mut arbor = Arbor::new();
        assert!(!arbor.insert_alias(&[SmolStr::from("YALE")], "Yale", ""));
        assert!(arbor.root().is_leaf());
        assert!(arbor.acronyms().is_empty());
    }

    #[test]
    fn serializes() {
        let mut arbor = Arbor::new();
        arbor.insert(&[SmolStr::from("YALE")], "Yale");

        let json = serde_json::to_string(&arbor).unwrap();
        let back: Arbor = serde_json::from_str(&json).unwrap();
        assert_eq!(arbor, back);
    }
}
