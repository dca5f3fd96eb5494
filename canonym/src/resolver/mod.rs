//! Resolution of raw lines to canonical phrases.
use std::sync::Arc;

use hashbrown::HashSet;
use smol_str::SmolStr;

use self::worker::ResolverWorker;
use crate::arbor::Arbor;
use crate::config::{CanonConfig, Vocabulary};
use crate::error::CanonError;
use crate::keyboard::KeyboardModel;
use crate::matcher::MatcherRegistry;
use crate::tokenizer::Tokenizer;

mod resolution;
mod worker;

pub use self::resolution::{Canonical, Resolution};

/// Canonicalization of raw lines against a vocabulary.
pub trait Canonicalize {
    /// Lexes a line the way vocabulary phrases are lexed.
    fn lex(&self, raw: &str) -> Vec<SmolStr>;
    /// Resolves a line through the acronym index or the arbor.
    fn canonicalize(self: Arc<Self>, raw: &str) -> Resolution;
    /// Resolves a line, then keeps resolving the phrase found until it no
    /// longer changes.
    fn canonicalize_chained(self: Arc<Self>, raw: &str) -> Resolution;
}

/// An immutable vocabulary arbor together with the matchers used to walk it.
#[derive(Debug)]
pub struct Canonicalizer {
    tokenizer: Tokenizer,
    keyboard: Arc<KeyboardModel>,
    registry: MatcherRegistry,
    arbor: Arbor,
    config: CanonConfig,
}

impl Canonicalizer {
    /// Builds the arbor for `vocabulary` and the matchers named in `config`.
    pub fn new(
        vocabulary: &Vocabulary,
        config: CanonConfig,
    ) -> Result<Arc<Canonicalizer>, CanonError> {
        let tokenizer = Tokenizer::new(&config.stopwords);
        let arbor = Arbor::from_vocabulary(vocabulary, &tokenizer);

        Canonicalizer::build(tokenizer, arbor, config, None)
    }

    /// Uses a prebuilt arbor, e.g. one deserialized from disk.
    pub fn with_arbor(arbor: Arbor, config: CanonConfig) -> Result<Arc<Canonicalizer>, CanonError> {
        let tokenizer = Tokenizer::new(&config.stopwords);

        Canonicalizer::build(tokenizer, arbor, config, None)
    }

    /// Uses a registry prepared by the caller, e.g. one with extra matchers
    /// registered. `config.algorithms` is ignored.
    pub fn with_registry(
        vocabulary: &Vocabulary,
        config: CanonConfig,
        registry: MatcherRegistry,
    ) -> Result<Arc<Canonicalizer>, CanonError> {
        let tokenizer = Tokenizer::new(&config.stopwords);
        let arbor = Arbor::from_vocabulary(vocabulary, &tokenizer);

        Canonicalizer::build(tokenizer, arbor, config, Some(registry))
    }

    fn build(
        tokenizer: Tokenizer,
        arbor: Arbor,
        config: CanonConfig,
        registry: Option<MatcherRegistry>,
    ) -> Result<Arc<Canonicalizer>, CanonError> {
        let keyboard = Arc::new(KeyboardModel::new(config.layout()?));

        let registry = match registry {
            Some(registry) => registry,
            None => MatcherRegistry::new(
                &config.algorithms,
                keyboard.clone(),
                config.contraction_matching,
            )?,
        };

        Ok(Arc::new(Canonicalizer {
            tokenizer,
            keyboard,
            registry,
            arbor,
            config,
        }))
    }

    /// The tokenizer used for inputs and vocabulary.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The keyboard model shared by the keyboard matchers.
    pub fn keyboard(&self) -> &KeyboardModel {
        &self.keyboard
    }

    /// The matchers in priority order.
    pub fn registry(&self) -> &MatcherRegistry {
        &self.registry
    }

    /// The vocabulary arbor.
    pub fn arbor(&self) -> &Arbor {
        &self.arbor
    }

    /// The configuration it was built with.
    pub fn config(&self) -> &CanonConfig {
        &self.config
    }

    fn resolve_tokens(self: &Arc<Self>, tokens: Vec<SmolStr>) -> Option<(SmolStr, String)> {
        match tokens.first() {
            Some(first) if !first.is_empty() => ResolverWorker::new(self.clone(), tokens).resolve(),
            _ => None,
        }
    }
}

impl Canonicalize for Canonicalizer {
    #[inline]
    fn lex(&self, raw: &str) -> Vec<SmolStr> {
        self.tokenizer.lex(raw)
    }

    fn canonicalize(self: Arc<Self>, raw: &str) -> Resolution {
        let tokens = self.lex(raw);

        if tokens.first().map_or(true, |t| t.is_empty()) {
            log::debug!("{:?}: no tokens", raw);
            return Resolution::unmatched(raw);
        }

        if self.config.acronym_matching {
            if let Some(found) = self.arbor.acronyms().lookup(&tokens) {
                log::debug!("{:?}: acronym of {:?}", raw, found);
                return Resolution::new(raw, Some(Canonical::Acronym(found.clone())), String::new(), 0);
            }
        }

        match self.resolve_tokens(tokens) {
            Some((phrase, trace)) => {
                log::debug!("{:?}: {:?} [{}]", raw, phrase, trace);
                Resolution::new(raw, Some(Canonical::Phrase(phrase)), trace, 0)
            }
            None => {
                log::debug!("{:?}: no match", raw);
                Resolution::unmatched(raw)
            }
        }
    }

    fn canonicalize_chained(self: Arc<Self>, raw: &str) -> Resolution {
        let first = self.clone().canonicalize(raw);

        let mut phrase = match first.phrase() {
            Some(phrase) => SmolStr::from(phrase),
            None => return first,
        };

        let mut visited = HashSet::new();
        visited.insert(phrase.clone());
        let mut hops = 0;

        loop {
            if hops == self.config.max_alias_hops {
                log::warn!("{:?}: stopped after {} alias hops at {:?}", raw, hops, phrase);
                break;
            }

            let next = match self.resolve_tokens(self.lex(&phrase)) {
                Some((next, _)) => next,
                None => break,
            };

            if next == phrase {
                break;
            }

            if !visited.insert(next.clone()) {
                log::warn!("{:?}: alias cycle through {:?}", raw, next);
                break;
            }

            log::trace!("{:?}: alias {:?} -> {:?}", raw, phrase, next);
            phrase = next;
            hops += 1;
        }

        Resolution {
            canonical: Some(Canonical::Phrase(phrase)),
            hops,
            ..first
        }
    }
}
