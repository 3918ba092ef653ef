use thiserror::Error;

use itemdex_catalog::ResolveError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Bad argument combination
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
