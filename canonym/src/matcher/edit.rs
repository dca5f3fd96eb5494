use super::{AlgorithmCode, Matcher};

/// Lengths of the common prefix and suffix of two tokens, each bounded by
/// the shorter token. They may overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EditSpan {
    head: usize,
    tail: usize,
    min_len: usize,
}

impl EditSpan {
    fn new(canonical: &[char], candidate: &[char]) -> EditSpan {
        let min_len = canonical.len().min(candidate.len());

        let head = canonical
            .iter()
            .zip(candidate.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let tail = canonical
            .iter()
            .rev()
            .zip(candidate.iter().rev())
            .take_while(|(a, b)| a == b)
            .count();

        EditSpan {
            head,
            tail,
            min_len,
        }
    }

    #[inline(always)]
    fn both(&self) -> usize {
        self.head + self.tail
    }
}

/// Accepts one insertion, deletion, substitution or swap of two adjacent
/// characters.
///
/// Swaps of characters further apart (`ONE` and `ENO`) are two edits and are
/// rejected, unlike a looser check that only compares the differing span.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistance1;

impl Matcher for EditDistance1 {
    fn code(&self) -> AlgorithmCode {
        AlgorithmCode::Levenshtein
    }

    fn matches(&self, canonical: &str, candidate: &str) -> bool {
        if canonical == candidate {
            return true;
        }

        let canonical = canonical.chars().collect::<Vec<_>>();
        let candidate = candidate.chars().collect::<Vec<_>>();

        let len = canonical.len();
        if len.abs_diff(candidate.len()) > 1 {
            return false;
        }

        let span = EditSpan::new(&canonical, &candidate);

        if len != candidate.len() {
            // The shorter token must be covered by prefix and suffix alone.
            return span.both() >= span.min_len;
        }

        if span.min_len.saturating_sub(span.both()) == 1 {
            return true;
        }

        let (left, right) = (span.head, len - 1 - span.tail);

        right == left + 1 && canonical[left] == candidate[right] && canonical[right] == candidate[left]
    }
}

/// Accepts abbreviations: truncations (`AMER`), tokens keeping the first two
/// letters (`INT'L`) and tokens that drop interior letters (`BRD`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Contraction;

impl Matcher for Contraction {
    fn code(&self) -> AlgorithmCode {
        AlgorithmCode::Contraction
    }

    fn matches(&self, canonical: &str, candidate: &str) -> bool {
        if canonical == candidate {
            return true;
        }

        let canonical = canonical.chars().collect::<Vec<_>>();
        let candidate = candidate.chars().collect::<Vec<_>>();
        let span = EditSpan::new(&canonical, &candidate);
        let len = candidate.len();

        span.head == len || span.head >= 2 || span.both() as isize > len as isize - 2
    }
}
