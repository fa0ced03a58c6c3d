//! Configuration system (layered: code > env > config file > defaults).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{OnBrandError, Result};

/// Global default config (lazy-initialized from file + env).
static DEFAULT_CONFIG: OnceLock<OnBrandConfig> = OnceLock::new();

pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
/// Maximum caption length for rendered image results, in characters.
pub const DEFAULT_CAPTION_LIMIT: usize = 100;

/// Settings for the remote image-synthesis call.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageSettings {
    #[builder(into, default = DEFAULT_IMAGE_MODEL.to_string())]
    pub model: String,
    #[builder(into, default = DEFAULT_IMAGE_SIZE.to_string())]
    pub size: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Settings for presentation records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplaySettings {
    pub caption_limit: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            caption_limit: DEFAULT_CAPTION_LIMIT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    openai: ProviderSection,
    image: ImageSection,
    display: DisplaySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderSection {
    api_key: Option<String>,
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImageSection {
    model: Option<String>,
    size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DisplaySection {
    caption_limit: Option<usize>,
}

/// Layered configuration for OnBrand.
///
/// Resolution order:
/// 1. Explicit values set in code (`set_api_key`, `with_image`, ...)
/// 2. Environment variables (and `.env`)
/// 3. `~/.onbrand/config.toml`
/// 4. Built-in defaults
#[derive(Debug, Clone)]
pub struct OnBrandConfig {
    api_keys: Arc<RwLock<HashMap<String, String>>>,
    base_urls: Arc<RwLock<HashMap<String, String>>>,
    image: ImageSettings,
    display: DisplaySettings,
}

impl Default for OnBrandConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OnBrandConfig {
    /// Create a config holding only defaults.
    pub fn new() -> Self {
        Self {
            api_keys: Arc::new(RwLock::new(HashMap::new())),
            base_urls: Arc::new(RwLock::new(HashMap::new())),
            image: ImageSettings::default(),
            display: DisplaySettings::default(),
        }
    }

    /// Default config file location (`~/.onbrand/config.toml`).
    pub fn default_path() -> PathBuf {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join(".onbrand"))
            .unwrap_or_else(|| PathBuf::from(".onbrand"))
            .join("config.toml")
    }

    /// Parse a TOML config document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        let mut config = Self::new();

        if let Some(key) = file.openai.api_key {
            config.set_api_key("openai", key);
        }
        if let Some(url) = file.openai.base_url {
            config.set_base_url("openai", url);
        }
        if let Some(model) = file.image.model {
            config.image.model = model;
        }
        if let Some(size) = file.image.size {
            config.image.size = size;
        }
        if let Some(limit) = file.display.caption_limit {
            config = config.with_caption_limit(limit)?;
        }

        Ok(config)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load from environment variables only.
    pub fn from_env() -> Self {
        Self::new().apply_env()
    }

    /// Load the default config file, then apply environment overrides.
    pub fn load() -> Result<Self> {
        Ok(Self::load_file(Self::default_path())?.apply_env())
    }

    /// Get (or create) the global default config.
    pub fn global() -> &'static OnBrandConfig {
        DEFAULT_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring unreadable config file");
                Self::from_env()
            })
        })
    }

    /// Overlay environment variables (OPENAI_API_KEY, ONBRAND_IMAGE_MODEL, ...).
    pub fn apply_env(mut self) -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.set_api_key("openai", key);
        }
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            self.set_base_url("openai", url);
        }
        if let Ok(model) = std::env::var("ONBRAND_IMAGE_MODEL") {
            self.image.model = model;
        }
        if let Ok(size) = std::env::var("ONBRAND_IMAGE_SIZE") {
            self.image.size = size;
        }
        if let Ok(raw) = std::env::var("ONBRAND_CAPTION_LIMIT") {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => self.display.caption_limit = limit,
                _ => tracing::warn!(value = %raw, "ignoring invalid ONBRAND_CAPTION_LIMIT"),
            }
        }

        self
    }

    pub fn set_api_key(&self, provider: &str, key: String) {
        self.api_keys
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(provider.to_string(), key);
    }

    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        self.api_keys
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(provider)
            .cloned()
    }

    pub fn set_base_url(&self, provider: &str, url: String) {
        self.base_urls
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(provider.to_string(), url);
    }

    pub fn get_base_url(&self, provider: &str) -> Option<String> {
        self.base_urls
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(provider)
            .cloned()
    }

    pub fn image(&self) -> &ImageSettings {
        &self.image
    }

    pub fn display(&self) -> DisplaySettings {
        self.display
    }

    pub fn with_image(mut self, image: ImageSettings) -> Self {
        self.image = image;
        self
    }

    /// Set the caption limit; zero would hide every caption and is rejected.
    pub fn with_caption_limit(mut self, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(OnBrandError::Configuration(
                "caption_limit must be greater than zero".to_string(),
            ));
        }
        self.display.caption_limit = limit;
        Ok(self)
    }
}
