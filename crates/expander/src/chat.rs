use std::time::Duration;

use async_trait::async_trait;
use mealweek_shared::recipe::Recipe;
use serde::{Deserialize, Serialize};

use crate::{Expander, ExpanderError, FALLBACK_DETAILS};

pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b:fastest";

#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
            language: None,
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl ChatResponse {
    fn into_details(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| FALLBACK_DETAILS.to_owned())
    }
}

/// OpenAI-compatible chat completion client.
pub struct ChatCompletionExpander {
    client: reqwest::Client,
    settings: Settings,
}

impl ChatCompletionExpander {
    pub fn new(settings: Settings) -> Result<Self, ExpanderError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self { client, settings })
    }
}

#[async_trait]
impl Expander for ChatCompletionExpander {
    async fn expand(&self, recipe: &Recipe) -> Result<String, ExpanderError> {
        let Some(api_key) = self.settings.api_key.as_deref().filter(|k| !k.is_empty()) else {
            return Err(ExpanderError::MissingApiKey);
        };

        let content = crate::prompt(recipe, self.settings.language.as_deref());
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &content,
            }],
        };

        tracing::debug!(recipe = %recipe.name, model = %self.settings.model, "Requesting recipe details");

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExpanderError::Status(response.status()));
        }

        let body = response.bytes().await?;
        let completion = serde_json::from_slice::<ChatResponse>(&body)
            .map_err(|e| ExpanderError::Decode(e.to_string()))?;

        Ok(completion.into_details())
    }
}
