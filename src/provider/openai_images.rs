//! OpenAI Images API provider (`/images/generations`).

use async_trait::async_trait;
use serde::Deserialize;

use super::http::{bearer_headers, shared_client, status_to_error};
use super::{ImageDescriptor, ImageRequest, ImageSynthesizer};
use crate::config::OnBrandConfig;
use crate::error::OnBrandError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const PROVIDER_NAME: &str = "openai";

/// Image synthesis through the OpenAI Images API.
#[derive(Clone)]
pub struct OpenAiImageProvider {
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAiImageProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiImageProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAiImageProvider {
    pub fn new(api_key: String) -> Self {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn new_with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Build from configuration; the API key is required.
    pub fn from_config(config: &OnBrandConfig) -> Result<Self, OnBrandError> {
        let api_key = config.get_api_key(PROVIDER_NAME).ok_or_else(|| {
            OnBrandError::Authentication("OPENAI_API_KEY is not configured".to_string())
        })?;
        let base_url = config
            .get_base_url(PROVIDER_NAME)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self::new_with_base_url(api_key, base_url))
    }

    fn endpoint(&self) -> String {
        format!("{}/images/generations", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ImageSynthesizer for OpenAiImageProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate_images(
        &self,
        request: &ImageRequest,
    ) -> Result<Vec<ImageDescriptor>, OnBrandError> {
        if self.api_key.trim().is_empty() {
            return Err(OnBrandError::Authentication(
                "Missing OpenAI API key for image generation".to_string(),
            ));
        }

        let response = shared_client()
            .post(self.endpoint())
            .headers(bearer_headers(&self.api_key))
            .json(request)
            .send()
            .await?;

        parse_images_response(response).await
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiImagesResponse {
    #[serde(default)]
    data: Option<Vec<ImageDescriptor>>,
}

async fn parse_images_response(
    response: reqwest::Response,
) -> Result<Vec<ImageDescriptor>, OnBrandError> {
    let status = response.status().as_u16();
    if status != 200 {
        let body = response.text().await.unwrap_or_default();
        return Err(status_to_error(status, &body));
    }

    let body = response.text().await?;
    let parsed: OpenAiImagesResponse = serde_json::from_str(&body)?;
    let images = parsed.data.unwrap_or_default();
    tracing::debug!(count = images.len(), "OpenAI images response");
    Ok(images)
}
