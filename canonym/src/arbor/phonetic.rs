//! Phonetic keys stored on arbor terminals.
use itertools::Itertools;
use rphonetic::{DoubleMetaphone, Encoder};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::SOUNDEX_LENGTH;

/// Precomputed phonetic codes of a canonical phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneticKeys {
    /// Four-character Soundex code
    pub soundex: SmolStr,
    /// Primary Double Metaphone code
    pub metaphone: SmolStr,
    /// Alternate Double Metaphone code, when it differs from the primary one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metaphone_alternate: Option<SmolStr>,
}

impl PhoneticKeys {
    /// Computes every key for `phrase`.
    pub fn of(phrase: &str) -> PhoneticKeys {
        let (metaphone, metaphone_alternate) = double_metaphone(phrase);

        PhoneticKeys {
            soundex: soundex(phrase),
            metaphone,
            metaphone_alternate,
        }
    }
}

/// Primary and alternate Double Metaphone codes of `phrase`.
///
/// Words are joined with hyphens before encoding, so rules looking across a
/// space (`Mac Gregor`) never merge two words. The alternate code is `None`
/// when it equals the primary one.
pub fn double_metaphone(phrase: &str) -> (SmolStr, Option<SmolStr>) {
    let words = phrase.split_whitespace().join("-");
    if words.is_empty() {
        return (SmolStr::default(), None);
    }

    let encoder = DoubleMetaphone::default();
    let primary = encoder.encode(&words);
    let alternate = encoder.encode_alternate(&words);

    let alternate = if alternate.is_empty() || alternate == primary {
        None
    } else {
        Some(SmolStr::from(alternate))
    };

    (SmolStr::from(primary), alternate)
}

#[inline]
fn soundex_digit(letter: char) -> Option<char> {
    match letter {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Four-character Soundex code of the ASCII letters in `phrase`.
///
/// Vowels break runs of equal digits, `H`, `W` and everything that is not a
/// letter are skipped. A phrase without letters has an empty code.
pub fn soundex(phrase: &str) -> SmolStr {
    let mut letters = phrase
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase());

    let first = match letters.next() {
        Some(c) => c,
        None => return SmolStr::default(),
    };

    let mut code = String::with_capacity(SOUNDEX_LENGTH);
    code.push(first);

    let mut last = None;
    for letter in letters {
        if code.len() == SOUNDEX_LENGTH {
            break;
        }

        match soundex_digit(letter) {
            Some(digit) if last != Some(digit) => {
                code.push(digit);
                last = Some(digit);
            }
            Some(_) => {}
            None if matches!(letter, 'H' | 'W') => {}
            None => last = None,
        }
    }

    while code.len() < SOUNDEX_LENGTH {
        code.push('0');
    }

    SmolStr::from(code)
}
