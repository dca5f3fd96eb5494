//! Lexing of raw name lines into uppercase tokens.
use hashbrown::HashSet;
use smol_str::SmolStr;

use self::char_class::CharClassifier;

pub mod char_class;

/// Full Unicode upper-casing.
#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Splits a line into normalized tokens, dropping stopwords.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    classifier: CharClassifier,
    stopwords: HashSet<SmolStr>,
}

impl Tokenizer {
    /// Creates a tokenizer dropping `stopwords`.
    pub fn new<I, S>(stopwords: I) -> Tokenizer
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Tokenizer {
            classifier: CharClassifier::new(),
            stopwords: stopwords
                .into_iter()
                .map(|w| upper_case(w.as_ref()))
                .collect(),
        }
    }

    /// The character tables in use.
    pub fn classifier(&self) -> &CharClassifier {
        &self.classifier
    }

    /// Whether an upper-case token is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Lexes one line.
    ///
    /// Scanning stops at the first bracket, comma or slash. Tokens are
    /// returned in input order; a line without any token yields a single
    /// empty token, unless its last word was a stopword, in which case the
    /// result is empty.
    pub fn lex(&self, line: &str) -> Vec<SmolStr> {
        let mut tokens = vec![];
        let mut current = String::new();
        let mut building = false;
        let mut trailing_stopword = false;

        for ch in line.chars() {
            let class = self.classifier.classify(ch);

            if class.is_terminator() {
                break;
            }

            if class.is_word() {
                building = true;
                if let Some(translated) = self.classifier.translate(ch) {
                    current.push(translated);
                }
            } else if building {
                building = false;
                trailing_stopword = self.complete(&mut current, &mut tokens);
            }
        }

        if building {
            trailing_stopword = self.complete(&mut current, &mut tokens);
        }

        if tokens.is_empty() && !trailing_stopword {
            tokens.push(SmolStr::default());
        }

        tokens
    }

    /// Moves a finished token into `tokens`. Returns whether it was dropped
    /// as a stopword.
    fn complete(&self, current: &mut String, tokens: &mut Vec<SmolStr>) -> bool {
        let token = std::mem::take(current);

        if token.is_empty() {
            return false;
        }

        if self.is_stopword(&token) {
            log::trace!("dropping stopword {:?}", token);
            return true;
        }

        tokens.push(SmolStr::from(token));
        false
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(crate::constants::DEFAULT_STOPWORDS)
    }
}
