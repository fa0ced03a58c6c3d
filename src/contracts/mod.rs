//! Tool display contracts: labels, icons and argument formatters per tool.
//!
//! The built-in table is initialized once and never mutated. Lookups always
//! succeed; unknown identifiers resolve to [`DEFAULT_CONTRACT`] so tools added
//! to the model runtime later still render as a generic "Using tool" row.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Canonical identifier of the web search tool.
pub const WEB_SEARCH: &str = "webSearch";
/// Canonical identifier of the image generation tool.
pub const GENERATE_IMAGE: &str = "generateImage";

static BUILTIN: OnceLock<ContractRegistry> = OnceLock::new();

/// Icon tag a UI maps to a glyph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum IconRef {
    Search,
    Globe,
    Book,
    Presentation,
    Image,
    Wrench,
}

/// Produces a one-line argument summary for a tool call.
pub type ArgFormatter = fn(tool_id: &str, args: Option<&serde_json::Value>) -> String;

/// Display metadata for one tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolContract {
    pub id: &'static str,
    pub call_label: &'static str,
    pub call_icon: IconRef,
    pub result_label: &'static str,
    pub result_icon: IconRef,
    pub format_args: Option<ArgFormatter>,
}

/// Contract used for unknown or unidentified tools.
pub static DEFAULT_CONTRACT: ToolContract = ToolContract {
    id: "",
    call_label: "Using tool",
    call_icon: IconRef::Wrench,
    result_label: "Used tool",
    result_icon: IconRef::Wrench,
    format_args: None,
};

/// Map from tool identifier to display contract.
#[derive(Debug, Clone, Default)]
pub struct ContractRegistry {
    entries: HashMap<&'static str, ToolContract>,
}

impl ContractRegistry {
    /// Create an empty registry (every lookup yields the default contract).
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry of built-in tools.
    pub fn builtin() -> &'static ContractRegistry {
        BUILTIN.get_or_init(|| {
            Self::new()
                .register(ToolContract {
                    id: WEB_SEARCH,
                    call_label: "Searching the web",
                    call_icon: IconRef::Search,
                    result_label: "Searched the web",
                    result_icon: IconRef::Search,
                    format_args: Some(format_web_search_args),
                })
                .register(ToolContract {
                    id: GENERATE_IMAGE,
                    call_label: "Designing image...",
                    call_icon: IconRef::Image,
                    result_label: "Generated image",
                    result_icon: IconRef::Image,
                    format_args: Some(format_image_args),
                })
        })
    }

    /// Add (or replace) a contract.
    pub fn register(mut self, contract: ToolContract) -> Self {
        self.entries.insert(contract.id, contract);
        self
    }

    /// Resolve a contract; never fails.
    pub fn lookup(&self, tool_id: Option<&str>) -> &ToolContract {
        tool_id
            .filter(|id| !id.is_empty())
            .and_then(|id| self.entries.get(id))
            .unwrap_or(&DEFAULT_CONTRACT)
    }

    pub fn contains(&self, tool_id: &str) -> bool {
        self.entries.contains_key(tool_id)
    }

    /// Registered contracts, ordered by identifier.
    pub fn contracts(&self) -> Vec<&ToolContract> {
        let mut contracts: Vec<_> = self.entries.values().collect();
        contracts.sort_by_key(|c| c.id);
        contracts
    }
}

/// Look up a contract in the built-in registry.
pub fn lookup(tool_id: Option<&str>) -> &'static ToolContract {
    ContractRegistry::builtin().lookup(tool_id)
}

fn format_web_search_args(_tool_id: &str, args: Option<&serde_json::Value>) -> String {
    field_text(args, "query")
}

fn format_image_args(_tool_id: &str, args: Option<&serde_json::Value>) -> String {
    field_text(args, "prompt")
}

fn field_text(args: Option<&serde_json::Value>, key: &str) -> String {
    match args.and_then(|a| a.as_object()).and_then(|obj| obj.get(key)) {
        Some(serde_json::Value::String(s)) => s.clone(),
        None | Some(serde_json::Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_lookup_finds_web_search() {
        let contract = lookup(Some("webSearch"));
        assert_eq!(contract.call_label, "Searching the web");
        assert_eq!(contract.result_icon, IconRef::Search);
    }

    #[test]
    fn unknown_and_missing_ids_use_default() {
        for id in [None, Some(""), Some("translateText"), Some("WEBSEARCH")] {
            let contract = lookup(id);
            assert_eq!(contract.call_label, "Using tool");
            assert_eq!(contract.result_label, "Used tool");
            assert!(contract.format_args.is_none());
        }
    }

    #[test]
    fn web_search_formatter_reads_query_only() {
        let format = lookup(Some(WEB_SEARCH)).format_args.unwrap();
        assert_eq!(format(WEB_SEARCH, Some(&json!({"query": "roar fest"}))), "roar fest");
        assert_eq!(format(WEB_SEARCH, Some(&json!({"prompt": "x"}))), "");
        assert_eq!(format(WEB_SEARCH, Some(&json!("raw"))), "");
        assert_eq!(format(WEB_SEARCH, None), "");
    }

    #[test]
    fn custom_registry_extends_with_one_entry() {
        let registry = ContractRegistry::new().register(ToolContract {
            id: "translateText",
            call_label: "Translating",
            call_icon: IconRef::Globe,
            result_label: "Translated",
            result_icon: IconRef::Globe,
            format_args: None,
        });

        assert!(registry.contains("translateText"));
        assert_eq!(registry.lookup(Some("translateText")).call_label, "Translating");
        assert_eq!(registry.lookup(Some("webSearch")).call_label, "Using tool");
    }

    #[test]
    fn icon_tags_are_kebab_case() {
        assert_eq!(IconRef::Presentation.to_string(), "presentation");
        assert_eq!("wrench".parse::<IconRef>().unwrap(), IconRef::Wrench);
    }
}
