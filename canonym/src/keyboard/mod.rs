//! Keyboard adjacency for fat-finger style matching.
use std::fmt;
use std::str::FromStr;

use crate::constants::LOOKUP_TABLE_SIZE;
use crate::error::CanonError;

mod layout;

/// A supported keyboard layout. Configuration names it by string, matched
/// case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardLayout {
    /// US QWERTY
    Qwerty,
    /// US Dvorak
    Dvorak,
}

impl KeyboardLayout {
    /// Upper-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            KeyboardLayout::Qwerty => "QWERTY",
            KeyboardLayout::Dvorak => "DVORAK",
        }
    }

    fn table(self) -> &'static [(char, &'static str)] {
        match self {
            KeyboardLayout::Qwerty => &layout::QWERTY,
            KeyboardLayout::Dvorak => &layout::DVORAK,
        }
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        KeyboardLayout::Qwerty
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyboardLayout {
    type Err = CanonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "QWERTY" => Ok(KeyboardLayout::Qwerty),
            "DVORAK" => Ok(KeyboardLayout::Dvorak),
            _ => Err(CanonError::UnknownLayout(s.to_string())),
        }
    }
}

#[inline(always)]
fn index(typed: char, intended: char) -> Option<usize> {
    let typed = u8::try_from(typed as u32).ok()?;
    let intended = u8::try_from(intended as u32).ok()?;

    Some(typed as usize + ((intended as usize) << 8))
}

/// Adjacency of one keyboard layout, flattened into a 64Ki lookup table.
///
/// Entry `typed + intended * 256` is set when `typed` lies within one key of
/// the letter `intended`. Only Latin-1 characters have entries.
pub struct KeyboardModel {
    layout: KeyboardLayout,
    lookup: Box<[bool]>,
}

impl KeyboardModel {
    /// Builds the lookup table for `layout`.
    pub fn new(layout: KeyboardLayout) -> KeyboardModel {
        let mut lookup = vec![false; LOOKUP_TABLE_SIZE].into_boxed_slice();

        for &(intended, neighbors) in layout.table() {
            for typed in neighbors.chars() {
                if let Some(i) = index(typed, intended) {
                    lookup[i] = true;
                }
            }
        }

        log::trace!(
            "{} keyboard: {} adjacent pairs",
            layout,
            lookup.iter().filter(|x| **x).count()
        );

        KeyboardModel { layout, lookup }
    }

    /// The layout the table was built from.
    pub fn layout(&self) -> KeyboardLayout {
        self.layout
    }

    /// Whether `typed` could have been struck when aiming for `intended`.
    #[inline(always)]
    pub fn is_adjacent(&self, typed: char, intended: char) -> bool {
        match index(typed, intended) {
            Some(i) => self.lookup[i],
            None => false,
        }
    }

    /// The neighbour string of an uppercase letter, if the layout has one.
    pub fn neighbors(&self, letter: char) -> Option<&'static str> {
        self.layout
            .table()
            .iter()
            .find(|(center, _)| *center == letter)
            .map(|(_, neighbors)| *neighbors)
    }

    /// Number of adjacent `(typed, intended)` pairs.
    pub fn pair_count(&self) -> usize {
        self.lookup.iter().filter(|x| **x).count()
    }
}

impl fmt::Debug for KeyboardModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardModel")
            .field("layout", &self.layout)
            .field("pairs", &self.pair_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_layout() {
        assert_eq!("QWERTY".parse::<KeyboardLayout>().unwrap(), KeyboardLayout::Qwerty);
        assert_eq!("dvorak".parse::<KeyboardLayout>().unwrap(), KeyboardLayout::Dvorak);
        assert!(matches!(
            "AZERTY".parse::<KeyboardLayout>(),
            Err(CanonError::UnknownLayout(name)) if name == "AZERTY"
        ));
        assert_eq!(KeyboardLayout::default().to_string(), "QWERTY");

        for layout in [KeyboardLayout::Qwerty, KeyboardLayout::Dvorak] {
            assert_eq!(layout.name().parse::<KeyboardLayout>().unwrap(), layout);
            assert_eq!(layout.to_string().to_lowercase().parse::<KeyboardLayout>().unwrap(), layout);
        }
    }

    #[test]
    fn qwerty_adjacency() {
        let model = KeyboardModel::new(KeyboardLayout::Qwerty);

        assert!(model.is_adjacent('F', 'F'));
        assert!(model.is_adjacent('f', 'F'));
        assert!(model.is_adjacent('R', 'F'));
        assert!(model.is_adjacent('O', 'I'));
        assert!(model.is_adjacent('(', 'I'));
        assert!(!model.is_adjacent('P', 'F'));
        assert!(!model.is_adjacent('F', 'f'));
        assert!(!model.is_adjacent('é', 'E'));
        assert!(!model.is_adjacent('日', 'E'));
    }

    #[test]
    fn dvorak_adjacency() {
        let model = KeyboardModel::new(KeyboardLayout::Dvorak);

        assert!(model.is_adjacent('O', 'A'));
        assert!(model.is_adjacent('\'', 'A'));
        assert!(!model.is_adjacent('S', 'A'));
        assert_eq!(model.layout(), KeyboardLayout::Dvorak);
    }

    #[test]
    fn neighbors() {
        let model = KeyboardModel::new(KeyboardLayout::Qwerty);

        assert_eq!(model.neighbors('Z'), Some("ZzASXasx"));
        assert_eq!(model.neighbors('z'), None);
        assert_eq!(model.neighbors('1'), None);
    }

    #[test]
    fn pair_count() {
        let qwerty = KeyboardModel::new(KeyboardLayout::Qwerty);
        let expected = layout::QWERTY
            .iter()
            .flat_map(|(c, n)| n.chars().map(move |t| (*c, t)))
            .collect::<hashbrown::HashSet<_>>()
            .len();

        assert_eq!(qwerty.pair_count(), expected);
    }
}
