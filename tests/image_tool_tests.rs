//! Tests for the branded image generation tool.

mod common;

use std::sync::Arc;

use common::{StubReply, StubSynthesizer};
use onbrand::config::ImageSettings;
use onbrand::error::OnBrandError;
use onbrand::provider::ImageDescriptor;
use onbrand::tools::{GenerateImageTool, Tool, ToolArguments, ToolExecutionContext, BRAND_CLAUSE};
use onbrand::types::{ImageResult, IMAGE_FAILURE_MESSAGE, NO_IMAGE_DETAILS};
use pretty_assertions::assert_eq;
use serde_json::json;

fn tool_with(stub: StubSynthesizer) -> (GenerateImageTool, Arc<StubSynthesizer>) {
    let stub = Arc::new(stub);
    (GenerateImageTool::new(stub.clone()), stub)
}

#[tokio::test]
async fn transformed_prompt_keeps_original_text() {
    let (tool, stub) = tool_with(StubSynthesizer::with_image("https://x/y.png", None));

    tool.generate("graduation ceremony banner").await;

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert!(sent.prompt.contains("graduation ceremony banner"));
    assert!(sent.prompt.contains(BRAND_CLAUSE));
    assert!(sent.prompt.len() > "graduation ceremony banner".len());
    assert_eq!(sent.n, 1);
    assert_eq!(sent.model, "dall-e-3");
    assert_eq!(sent.size, "1024x1024");
}

#[tokio::test]
async fn success_carries_url_and_revised_prompt() {
    let (tool, _) = tool_with(StubSynthesizer::with_image(
        "https://x/y.png",
        Some("a poster, blue and gold"),
    ));

    let result = tool.generate("poster").await;

    assert_eq!(
        result,
        ImageResult::success("https://x/y.png", Some("a poster, blue and gold".to_string()))
    );
}

#[tokio::test]
async fn empty_image_list_is_failure() {
    let (tool, _) = tool_with(StubSynthesizer::new(StubReply::Images(vec![])));

    match tool.generate("poster").await {
        ImageResult::Failure { error, details } => {
            assert!(!error.is_empty());
            assert_eq!(error, IMAGE_FAILURE_MESSAGE);
            assert_eq!(details.as_deref(), Some(NO_IMAGE_DETAILS));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn descriptor_without_url_is_failure() {
    let (tool, _) = tool_with(StubSynthesizer::new(StubReply::Images(vec![
        ImageDescriptor {
            url: None,
            revised_prompt: Some("orphan".to_string()),
        },
    ])));

    assert!(!tool.generate("poster").await.is_success());
}

#[tokio::test]
async fn provider_error_is_converted_with_details() {
    let (tool, _) = tool_with(StubSynthesizer::new(StubReply::Fail(|| {
        OnBrandError::api(500, "upstream exploded")
    })));

    match tool.generate("poster").await {
        ImageResult::Failure { error, details } => {
            assert_eq!(error, IMAGE_FAILURE_MESSAGE);
            assert!(details.unwrap_or_default().contains("upstream exploded"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn panicking_provider_is_contained() {
    let (tool, stub) = tool_with(StubSynthesizer::new(StubReply::Panic));

    let result = tool.generate("poster").await;

    assert!(!result.is_success());
    assert_eq!(stub.requests().len(), 1);
    // The tool stays usable after the provider task died.
    assert!(!tool.generate("again").await.is_success());
}

#[tokio::test]
async fn settings_flow_into_request() {
    let stub = Arc::new(StubSynthesizer::with_image("https://x/y.png", None));
    let tool = GenerateImageTool::new(stub.clone())
        .with_settings(ImageSettings::builder().model("dall-e-2").size("512x512").build());

    tool.generate("poster").await;

    let request = &stub.requests()[0];
    assert_eq!(request.model, "dall-e-2");
    assert_eq!(request.size, "512x512");
}

#[tokio::test]
async fn execute_returns_wire_shape() {
    let (tool, _) = tool_with(StubSynthesizer::with_image("https://x/y.png", Some("p")));

    let value = tool
        .execute(
            &ToolArguments::new(json!({"prompt": "poster"})),
            &ToolExecutionContext::default(),
        )
        .await
        .unwrap();

    assert_eq!(value, json!({"imageUrl": "https://x/y.png", "revisedPrompt": "p"}));
}

#[tokio::test]
async fn execute_sends_prompt_untrimmed() {
    let (tool, stub) = tool_with(StubSynthesizer::with_image("https://x/y.png", None));

    tool.execute(
        &ToolArguments::new(json!({"prompt": "  poster "})),
        &ToolExecutionContext::default(),
    )
    .await
    .unwrap();

    assert_eq!(stub.requests()[0].prompt, format!("  poster {BRAND_CLAUSE}"));
}

#[tokio::test]
async fn execute_failure_matches_serde_wire_shape() {
    let (tool, _) = tool_with(StubSynthesizer::new(StubReply::Images(vec![])));

    let value = tool
        .execute(
            &ToolArguments::new(json!({"prompt": "poster"})),
            &ToolExecutionContext::default(),
        )
        .await
        .unwrap();

    assert_eq!(
        value,
        json!({"error": IMAGE_FAILURE_MESSAGE, "details": NO_IMAGE_DETAILS})
    );
    let decoded: ImageResult = serde_json::from_value(value).unwrap();
    assert!(!decoded.is_success());
}

#[tokio::test]
async fn execute_with_bad_arguments_never_calls_provider() {
    let (tool, stub) = tool_with(StubSynthesizer::with_image("https://x/y.png", None));

    for args in [json!({}), json!({"prompt": "  "}), json!({"prompt": 7})] {
        let value = tool
            .execute(&ToolArguments::new(args), &ToolExecutionContext::default())
            .await
            .unwrap();
        assert_eq!(value["error"], IMAGE_FAILURE_MESSAGE);
        assert!(value["details"].is_string());
    }
    assert!(stub.requests().is_empty());
}

#[test]
fn definition_declares_single_required_prompt() {
    let (tool, _) = tool_with(StubSynthesizer::with_image("https://x/y.png", None));
    let definition = tool.definition();

    assert_eq!(definition["name"], "generateImage");
    let schema = &definition["parameters"];
    assert_eq!(schema["properties"]["prompt"]["type"], "string");
    assert_eq!(schema["required"], json!(["prompt"]));
    assert_eq!(schema["properties"].as_object().unwrap().len(), 1);
}
