//! Text-generation backends
//!
//! The analyzer depends only on the [`TextGenerator`] capability; which
//! backend fulfils it is a configuration choice. Two interchangeable
//! implementations exist: a local model server reachable over loopback HTTP
//! ([`LocalGenerator`]) and a cloud inference endpoint ([`CloudGenerator`]).
//! Both honor a bounded timeout and surface failures as error values.

mod cloud;
mod local;

pub use cloud::CloudGenerator;
pub use local::LocalGenerator;

use std::future::Future;
use thiserror::Error;

/// Errors from a generation backend
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Generation endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Generation response contained no text")]
    EmptyResponse,

    #[error("Missing API key: environment variable {0} is not set")]
    MissingApiKey(String),
}

/// Result type alias for generation operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// A text-generation capability: one prompt in, one completion out
///
/// Implementations are stateless per call and must not panic on backend
/// failure; an unreachable or erroring backend is an `Err`, never an abort.
pub trait TextGenerator {
    /// Human-readable backend description for logs
    fn label(&self) -> String;

    /// Generates a completion for the prompt
    fn generate(&self, prompt: &str) -> impl Future<Output = GeneratorResult<String>> + Send;
}
