use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The model provider could not produce a model. Terminal for the session.
    #[error("model failed to load: {0}")]
    ModelLoad(String),

    /// A single classification attempt failed. The session keeps going.
    #[error("classification failed: {0}")]
    Classification(String),

    #[error("failed to release image reference: {0}")]
    Release(String),
}
