/// Matching algorithms tried at each arbor node, highest priority first.
pub const DEFAULT_ALGORITHMS: &str = "cefLmNs";
pub const DEFAULT_KEYBOARD: &str = "QWERTY";
pub const DEFAULT_STOPWORDS: [&str; 6] = ["THE", "OF", "AND", "FOR", "INC", "--"];
pub const DEFAULT_MAX_ALIAS_HOPS: usize = 8;

/// Trace entry for a token that followed an arbor edge verbatim.
pub const EXACT_EDGE: char = '.';

pub const LOOKUP_TABLE_SIZE: usize = 1 << 16;
pub const SOUNDEX_LENGTH: usize = 4;
