use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown learning delivery FAM type: {0}")]
    UnknownFamType(String),
    #[error("unknown employment status monitoring type: {0}")]
    UnknownEsmType(String),
    #[error("unknown apprenticeship financial record type: {0}")]
    UnknownAFinType(String),
    #[error("unknown lookup type: {0}")]
    UnknownLookupType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
