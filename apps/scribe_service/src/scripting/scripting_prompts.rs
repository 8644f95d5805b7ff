use scribe_llm::{PromptTemplate, PromptVariables, SubstitutionStrategy};

use crate::shared::api_error::ApiError;

/// Renders a caller template with the configured strategy, or `default` when
/// the caller sent none. Defaults always use a single scan so values land
/// verbatim.
fn render(
    custom: Option<&str>,
    default: &str,
    strategy: SubstitutionStrategy,
    variables: &PromptVariables,
) -> String {
    match custom {
        Some(custom) if !custom.trim().is_empty() => {
            PromptTemplate::new(custom).render_with(strategy, variables)
        }
        _ => PromptTemplate::new(default).render(variables),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

pub struct TranslatePrompt;

impl TranslatePrompt {
    pub const DEFAULT_TEMPLATE: &'static str = "Translate the following text from {sourceLanguage} to {targetLanguage}.\nAdditional notes: {additionalNotes}\n\nText:\n{text}";

    pub fn build(
        content: Option<&str>,
        source_language: Option<&str>,
        target_language: Option<&str>,
        additional_notes: Option<&str>,
        custom_prompt: Option<&str>,
        strategy: SubstitutionStrategy,
    ) -> Result<String, ApiError> {
        let content = present(content).ok_or_else(|| ApiError::invalid("content is required"))?;

        let variables = PromptVariables::new()
            .with(
                "sourceLanguage",
                present(source_language).unwrap_or("the detected language"),
            )
            .with("targetLanguage", present(target_language).unwrap_or("English"))
            .with("additionalNotes", present(additional_notes).unwrap_or("None"))
            .with("text", content);

        Ok(render(
            custom_prompt,
            Self::DEFAULT_TEMPLATE,
            strategy,
            &variables,
        ))
    }
}

pub struct ImprovePrompt;

impl ImprovePrompt {
    pub const DEFAULT_TEMPLATE: &'static str =
        "Improve the following script based on these conditions: {conditions}\n\n{script}";

    pub fn build(
        script: Option<&str>,
        conditions: Option<&str>,
        custom_prompt: Option<&str>,
        strategy: SubstitutionStrategy,
    ) -> Result<String, ApiError> {
        let script = present(script).ok_or_else(|| ApiError::invalid("script is required"))?;

        let variables = PromptVariables::new()
            .with("conditions", conditions.unwrap_or_default())
            .with("script", script);

        Ok(render(
            custom_prompt,
            Self::DEFAULT_TEMPLATE,
            strategy,
            &variables,
        ))
    }
}

pub struct GeneratePrompt;

impl GeneratePrompt {
    pub const DEFAULT_GENRE: &'static str = "drama";
    pub const DEFAULT_TEMPLATE: &'static str = "Write a {genre} script based on the following plot and dialog.\n\nPlot:\n{plot}\n\nDialog:\n{dialog}";

    /// `dialog` and `plot` only need to be present; an empty string counts.
    pub fn build(
        dialog: Option<&str>,
        plot: Option<&str>,
        genre: Option<&str>,
        custom_prompt: Option<&str>,
        strategy: SubstitutionStrategy,
    ) -> Result<String, ApiError> {
        let (dialog, plot) = match (dialog, plot) {
            (Some(dialog), Some(plot)) => (dialog, plot),
            (None, None) => return Err(ApiError::invalid("dialog and plot are required")),
            (None, _) => return Err(ApiError::invalid("dialog is required")),
            (_, None) => return Err(ApiError::invalid("plot is required")),
        };

        let variables = PromptVariables::new()
            .with("dialog", dialog)
            .with("plot", plot)
            .with("genre", present(genre).unwrap_or(Self::DEFAULT_GENRE));

        Ok(render(
            custom_prompt,
            Self::DEFAULT_TEMPLATE,
            strategy,
            &variables,
        ))
    }
}
