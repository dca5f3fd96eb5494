/*! Canonicalization of noisy organization names.

Resolves free-text institution names that are misspelled, abbreviated or
mistyped against a vocabulary of canonical phrases. Input lines are lexed
into uppercase tokens and walked through a token-keyed tree (the arbor) that
holds the vocabulary. Where a token has no exact edge, the resolver tries the
configured matching algorithms in priority order and backtracks out of
branches that dead-end:

- exact match,
- fat-finger match (every character within one key on a keyboard layout),
- Levenshtein distance of one,
- contraction (`Int'l` for `INTERNATIONAL`, `Bd` for `BOARD`),
- acronyms of whole phrases (`ABIM`).

# Usage examples

```
use canonym::config::{CanonConfig, Vocabulary};
use canonym::resolver::{Canonicalize, Canonicalizer};

let mut vocabulary = Vocabulary::default();
vocabulary.insert("American Board of Internal Medicine", ["ABIM"]);

let canonicalizer = Canonicalizer::new(&vocabulary, CanonConfig::default()).unwrap();
let result = canonicalizer.clone().canonicalize("Amer. Brd of Int'l Medicine");

assert!(result.is_match());
assert_eq!(result.phrase(), Some("American Board of Internal Medicine"));
assert_eq!(result.trace(), "ccc.");
```
*/

#![warn(missing_docs)]
pub mod arbor;
pub mod config;
pub mod error;
pub mod keyboard;
pub mod matcher;
pub mod resolver;
pub mod tokenizer;

pub(crate) mod constants;

pub use crate::error::CanonError;
