use std::sync::Arc;

use scribe_llm::{CompletionProvider, CompletionRequest, SubstitutionStrategy};
use serde::Deserialize;

use crate::shared::api_error::ApiError;

use super::scripting_prompts::{GeneratePrompt, ImprovePrompt, TranslatePrompt};

pub const NO_RESPONSE: &str = "No response";
pub const NO_SCRIPT_GENERATED: &str = "No script generated";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub content: Option<String>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub additional_notes: Option<String>,
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveRequest {
    pub script: Option<String>,
    pub conditions: Option<String>,
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub dialog: Option<String>,
    pub plot: Option<String>,
    pub genre: Option<String>,
    pub custom_prompt: Option<String>,
}

#[derive(Clone)]
pub struct ScriptingService {
    provider: Arc<dyn CompletionProvider>,
    strategy: SubstitutionStrategy,
}

impl ScriptingService {
    pub fn new(provider: Arc<dyn CompletionProvider>, strategy: SubstitutionStrategy) -> Self {
        Self { provider, strategy }
    }

    pub async fn translate(&self, request: TranslateRequest) -> Result<String, ApiError> {
        let prompt = TranslatePrompt::build(
            request.content.as_deref(),
            request.source_language.as_deref(),
            request.target_language.as_deref(),
            request.additional_notes.as_deref(),
            request.custom_prompt.as_deref(),
            self.strategy,
        )?;

        self.complete(prompt, "Translation failed", NO_RESPONSE).await
    }

    pub async fn improve(&self, request: ImproveRequest) -> Result<String, ApiError> {
        let prompt = ImprovePrompt::build(
            request.script.as_deref(),
            request.conditions.as_deref(),
            request.custom_prompt.as_deref(),
            self.strategy,
        )?;

        self.complete(prompt, "Failed to improve script", NO_RESPONSE).await
    }

    pub async fn generate(&self, request: GenerateRequest) -> Result<String, ApiError> {
        let prompt = GeneratePrompt::build(
            request.dialog.as_deref(),
            request.plot.as_deref(),
            request.genre.as_deref(),
            request.custom_prompt.as_deref(),
            self.strategy,
        )?;

        self.complete(prompt, "Failed to generate script", NO_SCRIPT_GENERATED).await
    }

    async fn complete(
        &self,
        prompt: String,
        failure: &'static str,
        empty: &'static str,
    ) -> Result<String, ApiError> {
        let request = CompletionRequest::new(prompt);
        let text = self
            .provider
            .complete(&request)
            .await
            .map_err(|e| ApiError::server(failure, e))?;

        if text.is_empty() {
            tracing::info!(model = %request.model, "Provider returned no content");
            return Ok(empty.to_string());
        }

        Ok(text)
    }
}
