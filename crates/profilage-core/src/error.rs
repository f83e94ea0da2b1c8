use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid span label: {0}")]
    InvalidSpanLabel(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::vocab::ConfigError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] crate::reconcile::PipelineError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
