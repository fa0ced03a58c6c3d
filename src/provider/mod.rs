//! Remote image-synthesis providers.

pub mod http;

#[cfg(feature = "openai")]
pub mod openai_images;

#[cfg(feature = "openai")]
pub use openai_images::OpenAiImageProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ImageSettings;
use crate::error::OnBrandError;

/// Request body for one image-synthesis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
}

impl ImageRequest {
    /// Build a single-image request.
    pub fn new(prompt: impl Into<String>, settings: &ImageSettings) -> Self {
        Self {
            model: settings.model.clone(),
            prompt: prompt.into(),
            n: 1,
            size: settings.size.clone(),
        }
    }
}

/// One generated image as described by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

/// A backend that turns a prompt into image descriptors.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Provider name, for diagnostics.
    fn provider_name(&self) -> &str;

    /// Issue exactly one synthesis request.
    async fn generate_images(
        &self,
        request: &ImageRequest,
    ) -> Result<Vec<ImageDescriptor>, OnBrandError>;
}
