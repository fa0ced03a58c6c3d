//! Branded image generation tool.
//!
//! Every prompt gets the brand clause appended before it reaches the remote
//! provider. The tool never returns an error to the runtime: provider errors,
//! empty responses and even a panicking provider all become
//! [`ImageResult::Failure`] so a provider outage cannot end the conversation.

use std::sync::Arc;

use async_trait::async_trait;

use super::arguments::ToolArguments;
use super::tool::{Tool, ToolExecutionContext};
use super::types::ParameterSchema;
use super::validation::validate_arguments;
use crate::config::ImageSettings;
use crate::contracts::GENERATE_IMAGE;
use crate::error::{ErrorCategory, OnBrandError};
use crate::provider::{ImageDescriptor, ImageRequest, ImageSynthesizer};
use crate::types::image::{ImageResult, IMAGE_FAILURE_MESSAGE, NO_IMAGE_DETAILS};

/// Palette and style constraints appended to every prompt.
pub const BRAND_CLAUSE: &str = ". Style: Minimalist, professional, academic. Colors: Deep Blue (#003366) and Gold (#FFCC00). No text.";

const DESCRIPTION: &str = "Generate an image for event posters or social media backgrounds.";

/// Append the brand clause. The original prompt is kept verbatim.
pub fn brand_prompt(prompt: &str) -> String {
    format!("{prompt}{BRAND_CLAUSE}")
}

/// The `generateImage` tool.
pub struct GenerateImageTool {
    synthesizer: Arc<dyn ImageSynthesizer>,
    settings: ImageSettings,
    parameters: ParameterSchema,
}

impl std::fmt::Debug for GenerateImageTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateImageTool")
            .field("provider", &self.synthesizer.provider_name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl GenerateImageTool {
    pub fn new(synthesizer: Arc<dyn ImageSynthesizer>) -> Self {
        Self {
            synthesizer,
            settings: ImageSettings::default(),
            parameters: ParameterSchema::object()
                .string("prompt", "The description of the image.", true)
                .build(),
        }
    }

    pub fn with_settings(mut self, settings: ImageSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Tool backed by the OpenAI Images API, configured from `config`.
    #[cfg(feature = "openai")]
    pub fn from_config(config: &crate::config::OnBrandConfig) -> Result<Self, OnBrandError> {
        let provider = crate::provider::OpenAiImageProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider)).with_settings(config.image().clone()))
    }

    /// Generate one branded image. Always yields a result, never an error.
    pub async fn generate(&self, prompt: &str) -> ImageResult {
        let request = ImageRequest::new(brand_prompt(prompt), &self.settings);
        let synthesizer = Arc::clone(&self.synthesizer);

        // Spawned so a panicking provider surfaces as a JoinError.
        let outcome =
            tokio::spawn(async move { synthesizer.generate_images(&request).await }).await;

        match outcome {
            Ok(Ok(images)) => match images.into_iter().next() {
                Some(ImageDescriptor {
                    url: Some(url),
                    revised_prompt,
                }) if !url.trim().is_empty() => {
                    tracing::debug!(tool = GENERATE_IMAGE, "image generated");
                    ImageResult::success(url, revised_prompt)
                }
                _ => self.fail(ErrorCategory::Api, NO_IMAGE_DETAILS.to_string()),
            },
            Ok(Err(e)) => self.fail(e.category(), e.to_string()),
            Err(join_error) => self.fail(
                ErrorCategory::Unknown,
                format!("image provider task aborted: {join_error}"),
            ),
        }
    }

    fn fail(&self, category: ErrorCategory, details: String) -> ImageResult {
        tracing::warn!(
            tool = GENERATE_IMAGE,
            provider = self.synthesizer.provider_name(),
            category = %category,
            details = %details,
            "image generation failed"
        );
        ImageResult::failure(IMAGE_FAILURE_MESSAGE, Some(details))
    }
}

#[async_trait]
impl Tool for GenerateImageTool {
    fn name(&self) -> &str {
        GENERATE_IMAGE
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters(&self) -> &ParameterSchema {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        _ctx: &ToolExecutionContext,
    ) -> Result<serde_json::Value, OnBrandError> {
        let prompt = validate_arguments(args.raw(), &self.parameters.schema)
            .and_then(|()| args.get_str("prompt"));

        // Blank prompts are rejected, but the prompt itself is sent as given.
        let result = match prompt {
            Ok(prompt) if !prompt.trim().is_empty() => self.generate(prompt).await,
            Ok(_) => self.fail(ErrorCategory::Unknown, "argument 'prompt' is empty".to_string()),
            Err(e) => self.fail(e.category(), e.to_string()),
        };
        Ok(serde_json::to_value(result)?)
    }
}
