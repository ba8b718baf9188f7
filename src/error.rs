use thiserror::Error;

/// Why a primary (collaborator-backed) attempt was abandoned in favour of
/// its deterministic fallback. Logged, never surfaced to callers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FallbackReason {
    #[error("collaborator not configured")]
    Unavailable,

    #[error("collaborator failed: {0}")]
    Collaborator(String),

    #[error("collaborator timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("collaborator returned nothing usable")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response covered {got} of {expected} sources")]
    Incomplete { expected: usize, got: usize },
}

impl From<anyhow::Error> for FallbackReason {
    fn from(err: anyhow::Error) -> Self {
        FallbackReason::Collaborator(err.to_string())
    }
}

pub type Attempt<T> = Result<T, FallbackReason>;
