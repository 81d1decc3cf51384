mod chat;
mod prompt;

use async_trait::async_trait;
use mealweek_shared::recipe::Recipe;

pub use chat::*;
pub use prompt::prompt;

/// Text returned when the completion carries no message content.
pub const FALLBACK_DETAILS: &str = "Recipe details could not be generated.";

#[derive(Debug, thiserror::Error)]
pub enum ExpanderError {
    #[error("no API key configured for the chat completion endpoint")]
    MissingApiKey,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid completion payload: {0}")]
    Decode(String),
}

/// Turns a recipe into free-form cooking instructions.
#[async_trait]
pub trait Expander: Send + Sync {
    async fn expand(&self, recipe: &Recipe) -> Result<String, ExpanderError>;
}
