use thiserror::Error;

use crate::core::types::{ActorId, LocationId};

#[derive(Error, Debug)]
pub enum DinoError {
    /// A factory or parser was handed a token it does not recognise.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A collaborator broke a call contract (missing target, bad index, ...).
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Fatal state: {0}")]
    FatalState(String),

    #[error("Actor not found: {0:?}")]
    ActorNotFound(ActorId),

    #[error("Location out of bounds: {0:?}")]
    LocationOutOfBounds(LocationId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DinoError>;
