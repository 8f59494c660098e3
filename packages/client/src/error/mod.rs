//! Error taxonomy for configuration composition.

/// A `Result` alias where the `Err` case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the configuration core.
///
/// Everything here is a synchronous in-memory transform; nothing is retried
/// and nothing touches the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A name matched neither the short nor the long form of any catalog row.
    #[error("{0} is not a known curl option")]
    UnknownOption(String),

    /// A configuration fragment was malformed at a validation boundary.
    /// Global state is left untouched when this is returned.
    #[error("invalid request configuration: {0}")]
    InvalidConfig(String),

    /// An invariant of the typed model was broken, e.g. a non-header option
    /// carrying a sequence. Fails fast, never coerced.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
