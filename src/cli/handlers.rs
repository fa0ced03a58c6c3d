//! Command handlers. Each returns the text to print on stdout.

use std::path::Path;

use serde_json::Value;

use crate::config::OnBrandConfig;
use crate::contracts::ContractRegistry;
use crate::conversation::Conversation;
use crate::error::{OnBrandError, Result};
use crate::render::Renderer;
use crate::tools::GenerateImageTool;
use crate::types::ChatMessage;

/// Resolve the config: explicit file, else the default file, then env.
pub fn load_config(path: Option<&Path>) -> Result<OnBrandConfig> {
    match path {
        Some(path) => Ok(OnBrandConfig::load_file(path)?.apply_env()),
        None => OnBrandConfig::load(),
    }
}

/// Parse a transcript file.
///
/// Accepts a JSON array of messages, or JSON lines where each line is one
/// part of a single assistant message. Unparseable lines become empty parts.
pub fn parse_transcript(raw: &str) -> Result<Vec<ChatMessage>> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let parts: Vec<Value> = raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap_or(Value::Null))
        .collect();
    Ok(vec![ChatMessage::assistant("transcript", parts)])
}

pub fn handle_render(
    config: &OnBrandConfig,
    file: &Path,
    caption_limit: Option<usize>,
) -> Result<String> {
    let raw = std::fs::read_to_string(file)?;
    let messages = parse_transcript(&raw)?;

    let mut conversation = Conversation::new();
    for message in messages {
        conversation.apply_update(message);
    }

    let limit = caption_limit.unwrap_or(config.display().caption_limit);
    if limit == 0 {
        return Err(OnBrandError::InvalidArgument(
            "--caption-limit must be greater than zero".to_string(),
        ));
    }
    let renderer = Renderer::new().with_caption_limit(limit);
    let records = conversation.presentations(&renderer);
    tracing::info!(records = records.len(), file = %file.display(), "rendered transcript");

    Ok(serde_json::to_string_pretty(&records)?)
}

pub async fn handle_generate_image(config: &OnBrandConfig, prompt: &str) -> Result<String> {
    let tool = GenerateImageTool::from_config(config)?;
    let result = tool.generate(prompt).await;
    Ok(serde_json::to_string_pretty(&result)?)
}

pub fn handle_contracts() -> String {
    ContractRegistry::builtin()
        .contracts()
        .into_iter()
        .map(|c| {
            format!(
                "{:<16} [{}] {} / [{}] {}",
                c.id, c.call_icon, c.call_label, c.result_icon, c.result_label
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn json_lines_become_one_assistant_message() {
        let raw = "{\"type\":\"tool-webSearch\",\"input\":{\"query\":\"q\"}}\n\nnot json\n";
        let messages = parse_transcript(raw).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].parts.len(), 2);
        assert_eq!(messages[0].parts[1], Value::Null);
    }

    #[test]
    fn render_file_emits_keyed_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chat.json");
        std::fs::write(
            &path,
            r#"[{"id":"m1","role":"assistant","parts":[
                {"type":"tool-generateImage","input":{"prompt":"poster"}}
            ]}]"#,
        )
        .unwrap();

        let out = handle_render(&OnBrandConfig::new(), &path, None).unwrap();
        let records: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(records[0]["key"]["message_id"], "m1");
        assert_eq!(records[0]["body"]["kind"], "call");
        assert_eq!(records[0]["body"]["body"]["arg_summary"], "poster");
    }

    #[test]
    fn contracts_listing_names_builtin_tools() {
        let listing = handle_contracts();
        assert!(listing.contains("generateImage"));
        assert!(listing.contains("Searching the web"));
    }
}
