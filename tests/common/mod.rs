//! Shared test helpers and stub image providers.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use onbrand::error::OnBrandError;
use onbrand::provider::{ImageDescriptor, ImageRequest, ImageSynthesizer};

/// How a [`StubSynthesizer`] answers.
pub enum StubReply {
    Images(Vec<ImageDescriptor>),
    Fail(fn() -> OnBrandError),
    Panic,
}

/// A stub provider that records requests and returns a canned reply.
pub struct StubSynthesizer {
    reply: StubReply,
    requests: Mutex<Vec<ImageRequest>>,
}

impl StubSynthesizer {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A stub returning one image.
    pub fn with_image(url: &str, revised_prompt: Option<&str>) -> Self {
        Self::new(StubReply::Images(vec![ImageDescriptor {
            url: Some(url.to_string()),
            revised_prompt: revised_prompt.map(ToString::to_string),
        }]))
    }

    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSynthesizer for StubSynthesizer {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn generate_images(
        &self,
        request: &ImageRequest,
    ) -> Result<Vec<ImageDescriptor>, OnBrandError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            StubReply::Images(images) => Ok(images.clone()),
            StubReply::Fail(make_error) => Err(make_error()),
            StubReply::Panic => panic!("stub provider exploded"),
        }
    }
}
