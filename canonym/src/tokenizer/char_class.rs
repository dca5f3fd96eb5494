//! Table-driven character classification and translation.

/// Lexical class of a character.
///
/// The order matters: every class from [`CharClass::Alpha`] upwards is part
/// of a word, everything below separates words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    /// Control characters
    Exit,
    /// Space, tab, form feed, carriage return, newline
    White,
    /// `,`
    Comma,
    /// Reserved for a free-standing dash; the ASCII table maps `-` to [`CharClass::FakeAlpha`]
    Minus,
    /// `/`
    Ratio,
    /// `;`
    Semicolon,
    /// Characters after which lexing stops
    Terminator,
    /// Any other printable character
    Other,
    /// `0`-`9`
    Digit,
    /// `A`-`Z`, `a`-`z`
    Alpha,
    /// Characters kept inside names: apostrophe and hyphen
    FakeAlpha,
    /// Anything above 0x9F, treated as one opaque letter-like cluster
    Unicode,
}

impl CharClass {
    /// Whether characters of this class belong to a word.
    #[inline(always)]
    pub fn is_word(self) -> bool {
        self >= CharClass::Alpha
    }

    /// Whether a character of this class ends lexing of the line.
    ///
    /// Brackets announce an embedded annotation, commas and slashes a list
    /// of alternate names; the caller tokenizes those separately.
    #[inline(always)]
    pub fn is_terminator(self) -> bool {
        matches!(
            self,
            CharClass::Terminator | CharClass::Ratio | CharClass::Comma
        )
    }
}

const X: CharClass = CharClass::Exit;
const W: CharClass = CharClass::White;
const C: CharClass = CharClass::Comma;
const R: CharClass = CharClass::Ratio;
const S: CharClass = CharClass::Semicolon;
const T: CharClass = CharClass::Terminator;
const O: CharClass = CharClass::Other;
const D: CharClass = CharClass::Digit;
const A: CharClass = CharClass::Alpha;
const F: CharClass = CharClass::FakeAlpha;
const U: CharClass = CharClass::Unicode;

#[rustfmt::skip]
const ASCII_CLASSES: [CharClass; 256] = [
//  00 01 02 03  04 05 06 07   08 09 0A 0B  0C 0D 0E 0F
    X, X, X, X,  X, X, X, X,   X, W, W, X,  W, W, X, X, // 00
    X, X, X, X,  X, X, X, X,   X, X, X, X,  X, X, X, X, // 10
    W, O, O, O,  O, O, O, F,   T, O, O, O,  C, F, O, R, // 20
    D, D, D, D,  D, D, D, D,   D, D, O, S,  O, O, O, O, // 30

    O, A, A, A,  A, A, A, A,   A, A, A, A,  A, A, A, A, // 40
    A, A, A, A,  A, A, A, A,   A, A, A, T,  T, O, O, O, // 50
    O, A, A, A,  A, A, A, A,   A, A, A, A,  A, A, A, A, // 60
    A, A, A, A,  A, A, A, A,   A, A, A, T,  O, O, O, X, // 70

    X, X, X, X,  X, X, X, X,   X, X, X, X,  X, X, X, X, // 80
    X, X, X, X,  X, X, X, X,   X, X, X, X,  X, X, X, X, // 90
    U, U, U, U,  U, U, U, U,   U, U, U, U,  U, U, U, U, // A0
    U, U, U, U,  U, U, U, U,   U, U, U, U,  U, U, U, U, // B0

    U, U, U, U,  U, U, U, U,   U, U, U, U,  U, U, U, U, // C0
    U, U, U, U,  U, U, U, U,   U, U, U, U,  U, U, U, U, // D0
    U, U, U, U,  U, U, U, U,   U, U, U, U,  U, U, U, U, // E0
    U, U, U, U,  U, U, U, U,   U, U, U, U,  U, U, U, U, // F0
//  00 01 02 03  04 05 06 07   08 09 0A 0B  0C 0D 0E 0F
];

/// Classification and translation tables for the lexer.
///
/// Translation upper-cases ASCII letters and keeps apostrophes and hyphens;
/// every other character translates to nothing.
#[derive(Debug, Clone)]
pub struct CharClassifier {
    classes: [CharClass; 256],
    translations: [Option<char>; 256],
}

impl CharClassifier {
    /// Builds the ASCII and Latin-1 tables.
    pub fn new() -> CharClassifier {
        let mut translations = [None; 256];

        for (code, slot) in translations.iter_mut().enumerate() {
            let ch = code as u8 as char;
            *slot = match ch {
                'A'..='Z' | '\'' | '-' => Some(ch),
                'a'..='z' => Some(ch.to_ascii_uppercase()),
                _ => None,
            };
        }

        CharClassifier {
            classes: ASCII_CLASSES,
            translations,
        }
    }

    /// Class of `ch`; anything above Latin-1 is [`CharClass::Unicode`].
    #[inline(always)]
    pub fn classify(&self, ch: char) -> CharClass {
        match u8::try_from(ch as u32) {
            Ok(code) => self.classes[code as usize],
            Err(_) => CharClass::Unicode,
        }
    }

    /// The character kept in a token for `ch`, if any.
    #[inline(always)]
    pub fn translate(&self, ch: char) -> Option<char> {
        match u8::try_from(ch as u32) {
            Ok(code) => self.translations[code as usize],
            Err(_) => None,
        }
    }
}

impl Default for CharClassifier {
    fn default() -> Self {
        CharClassifier::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        let c = CharClassifier::new();

        assert_eq!(c.classify('a'), CharClass::Alpha);
        assert_eq!(c.classify('Z'), CharClass::Alpha);
        assert_eq!(c.classify('7'), CharClass::Digit);
        assert_eq!(c.classify(' '), CharClass::White);
        assert_eq!(c.classify('\t'), CharClass::White);
        assert_eq!(c.classify('\u{0B}'), CharClass::Exit);
        assert_eq!(c.classify('\''), CharClass::FakeAlpha);
        assert_eq!(c.classify('-'), CharClass::FakeAlpha);
        assert_eq!(c.classify(','), CharClass::Comma);
        assert_eq!(c.classify('/'), CharClass::Ratio);
        assert_eq!(c.classify(';'), CharClass::Semicolon);
        assert_eq!(c.classify('!'), CharClass::Other);
        assert_eq!(c.classify('\u{85}'), CharClass::Exit);
        assert_eq!(c.classify('é'), CharClass::Unicode);
        assert_eq!(c.classify('日'), CharClass::Unicode);

        for ch in ['(', '[', '\\', '{'] {
            assert_eq!(c.classify(ch), CharClass::Terminator, "{:?}", ch);
        }
        for ch in [')', ']', '}', '.', ':', '&'] {
            assert_eq!(c.classify(ch), CharClass::Other, "{:?}", ch);
        }
    }

    #[test]
    fn word_classes() {
        assert!(CharClass::Alpha.is_word());
        assert!(CharClass::FakeAlpha.is_word());
        assert!(CharClass::Unicode.is_word());
        assert!(!CharClass::Digit.is_word());
        assert!(!CharClass::White.is_word());

        assert!(CharClass::Comma.is_terminator());
        assert!(CharClass::Ratio.is_terminator());
        assert!(CharClass::Terminator.is_terminator());
        assert!(!CharClass::Semicolon.is_terminator());
        assert!(!CharClass::Exit.is_terminator());
    }

    #[test]
    fn translations() {
        let c = CharClassifier::new();

        assert_eq!(c.translate('a'), Some('A'));
        assert_eq!(c.translate('Q'), Some('Q'));
        assert_eq!(c.translate('\''), Some('\''));
        assert_eq!(c.translate('-'), Some('-'));
        assert_eq!(c.translate('3'), None);
        assert_eq!(c.translate(' '), None);
        assert_eq!(c.translate('é'), None);
        assert_eq!(c.translate('日'), None);
    }
}
