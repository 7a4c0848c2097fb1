use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Malformed or out-of-range initial parameters.  Raised before any
    /// simulation step runs.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field:  &'static str,
        reason: String,
    },

    /// A post-condition failed mid-run.  This is an engine defect, not a
    /// user error; the run is aborted.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),

    #[error("parameter parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidInput { field, reason: reason.into() }
    }
}

pub type SimResult<T> = Result<T, SimError>;
