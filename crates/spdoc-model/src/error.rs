use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown procedure type '{0}' (expected select|insert|update|delete)")]
    UnknownProcedureType(String),
    #[error("unknown filter '{0}' (expected all|select|insert|update|delete)")]
    UnknownTypeFilter(String),
    #[error("unknown filter composition '{0}' (expected override|intersect)")]
    UnknownComposition(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
