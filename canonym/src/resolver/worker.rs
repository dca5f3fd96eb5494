use std::sync::Arc;

use smol_str::SmolStr;

use super::Canonicalizer;
use crate::arbor::ArborNode;
use crate::constants::EXACT_EDGE;

/// A phrase and the trace of the path that produced it, deepest entry last.
type Found = (SmolStr, Vec<char>);

pub(crate) struct ResolverWorker {
    canonicalizer: Arc<Canonicalizer>,
    input: Vec<SmolStr>,
}

impl ResolverWorker {
    #[inline(always)]
    pub(crate) fn new(canonicalizer: Arc<Canonicalizer>, input: Vec<SmolStr>) -> ResolverWorker {
        ResolverWorker {
            canonicalizer,
            input,
        }
    }

    /// Walks the arbor from the root.
    pub(crate) fn resolve(&self) -> Option<(SmolStr, String)> {
        let root = self.canonicalizer.arbor().root();

        self.walk(root, &self.input)
            .map(|(phrase, trace)| (phrase, trace.into_iter().collect()))
    }

    fn walk(&self, node: &ArborNode, tokens: &[SmolStr]) -> Option<Found> {
        let (token, rest) = match tokens.split_first() {
            Some(split) => split,
            None => return named(node).map(|phrase| (phrase, vec![])),
        };

        if let Some(child) = node.child(token) {
            if let Some(found) = self.descend(node, child, rest, EXACT_EDGE) {
                return Some(found);
            }
        }

        let registry = self.canonicalizer.registry();

        for (key, child) in node.children() {
            if key == token {
                continue;
            }

            let code = match registry.first_match(key, token) {
                Some(code) => code,
                None => continue,
            };

            log::trace!(
                "depth {}: {:?} ~ {:?} by {}",
                child.depth(),
                token,
                key,
                code
            );

            if let Some(found) = self.descend(node, child, rest, code.as_char()) {
                return Some(found);
            }

            log::trace!("depth {}: {:?} dead-ends", child.depth(), key);
        }

        None
    }

    /// Continues below `child`, falling back to the phrase named at `node`.
    fn descend(
        &self,
        node: &ArborNode,
        child: &ArborNode,
        rest: &[SmolStr],
        code: char,
    ) -> Option<Found> {
        let (phrase, mut trace) = match self.walk(child, rest) {
            Some(found) => found,
            None => (named(node)?, vec![]),
        };

        trace.insert(0, code);
        Some((phrase, trace))
    }
}

/// The phrase named at `node`. An empty phrase names nothing.
#[inline(always)]
fn named(node: &ArborNode) -> Option<SmolStr> {
    node.terminal()
        .filter(|phrase| !phrase.is_empty())
        .map(SmolStr::from)
}
