use thiserror::Error;

/// Errors surfaced by the `try_*` dialog calls.
///
/// The plain calls fold every variant into an empty answer, so callers that
/// need to tell "cancelled" from "no dialog tool" use the `try_*` family.
#[derive(Error, Debug)]
pub enum DialogError {
    /// No dialog backend is installed or usable in this session.
    #[error("no usable dialog backend found")]
    NoBackend,
    /// The dialog command could not be started.
    #[error("failed to spawn dialog command: {0}")]
    Spawn(#[from] std::io::Error),
    /// The dialog did not answer within the configured timeout.
    #[error("dialog timed out")]
    TimedOut,
    /// The caller's cancel token fired while the dialog was open.
    #[error("dialog cancelled by caller")]
    Cancelled,
    /// A caller-supplied string contains a quote character.
    #[error("{field} contains a quote character")]
    QuotedInput {
        /// Which request field was rejected.
        field: &'static str,
    },
    /// The dialog returned a path that failed post-validation.
    #[error("invalid path returned by dialog: {0}")]
    InvalidPath(String),
}

/// Result alias for dialog calls.
pub type Result<T> = std::result::Result<T, DialogError>;
