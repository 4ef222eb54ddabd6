//! Error types for agent orchestration

use thiserror::Error;

/// Errors that can occur while running an agent loop
#[derive(Error, Debug)]
pub enum AgentError<E> {
    /// The underlying LLM provider failed
    #[error("LLM provider error: {0}")]
    Provider(E),

    /// Worker state could not be serialized for a prompt
    #[error("State serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
