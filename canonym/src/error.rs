//! Error types for building a canonicalizer.

/// Errors raised while configuring or constructing a [`Canonicalizer`].
///
/// Failing to find a canonical phrase is not an error; it is reported by
/// [`Resolution::is_match`].
///
/// [`Canonicalizer`]: crate::resolver::Canonicalizer
/// [`Resolution::is_match`]: crate::resolver::Resolution::is_match
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CanonError {
    /// The algorithm priority string contains a code with no matcher
    #[error("Unknown algorithm code {0:?}")]
    UnknownAlgorithm(char),

    /// The keyboard layout name is not one of the built-in layouts
    #[error("Unknown keyboard layout {0:?}")]
    UnknownLayout(String),

    /// The configuration could not be parsed
    #[error("Failed to parse configuration")]
    Config(#[source] serde_json::Error),

    /// The vocabulary could not be parsed
    #[error("Failed to parse vocabulary")]
    Vocabulary(#[source] serde_json::Error),
}
