use thiserror::Error;

/// Caller-visible failure taxonomy of the engine. Every variant is
/// recoverable; `Storage` carries persistence-layer failures unchanged.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    PermissionDenied(String),
    #[error(transparent)]
    Storage(anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Repositories speak `anyhow`; a typed engine error raised inside a
/// repository closure round-trips instead of being buried as infrastructure.
impl From<anyhow::Error> for EngineError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<EngineError>() {
            Ok(engine) => engine,
            Err(other) => Self::Storage(other),
        }
    }
}

impl EngineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }
}
