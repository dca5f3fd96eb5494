use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::phonetic::PhoneticKeys;

/// One node of the arbor.
///
/// Children are kept in lexicographic order of their tokens, which fixes the
/// order in which the resolver tries fuzzy edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArborNode {
    depth: usize,
    children: BTreeMap<SmolStr, ArborNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terminal: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phonetic: Option<PhoneticKeys>,
}

impl ArborNode {
    pub(crate) fn with_depth(depth: usize) -> ArborNode {
        ArborNode {
            depth,
            ..ArborNode::default()
        }
    }

    /// Distance from the root, which has depth zero.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The canonical phrase named by the path ending here.
    #[inline(always)]
    pub fn terminal(&self) -> Option<&str> {
        self.terminal.as_deref()
    }

    /// Phonetic keys of the terminal phrase.
    pub fn phonetic(&self) -> Option<&PhoneticKeys> {
        self.phonetic.as_ref()
    }

    /// The child reached through the exact edge `token`.
    #[inline(always)]
    pub fn child(&self, token: &str) -> Option<&ArborNode> {
        self.children.get(token)
    }

    /// Edges and children in token order.
    pub fn children(&self) -> impl Iterator<Item = (&SmolStr, &ArborNode)> {
        self.children.iter()
    }

    /// Whether no edge leaves this node.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Creates the path for `tokens` below this node and names `phrase` at
    /// its end, unless a phrase is already named there.
    ///
    /// Returns whether the terminal was set.
    pub(crate) fn insert(&mut self, tokens: &[SmolStr], phrase: &str) -> bool {
        let mut node = self;

        for token in tokens {
            let depth = node.depth + 1;
            node = node
                .children
                .entry(token.clone())
                .or_insert_with(|| ArborNode::with_depth(depth));
        }

        if node.terminal.is_some() {
            return false;
        }

        node.terminal = Some(SmolStr::from(phrase));
        node.phonetic = Some(PhoneticKeys::of(phrase));
        true
    }

    /// Number of phrases named in this subtree.
    pub fn terminal_count(&self) -> usize {
        self.terminal.is_some() as usize
            + self
                .children
                .values()
                .map(ArborNode::terminal_count)
                .sum::<usize>()
    }
}
