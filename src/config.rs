//! Render configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/tagtree/tagtree.toml`
//! 3. Explicit config file passed by the caller
//! 4. Environment variables: `TAGTREE_*` prefix

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::AttributeOrder;
use crate::errors::{TagTreeError, TagTreeResult};

/// Settings consumed by the [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Whitespace emitted once per nesting level (default: two spaces)
    pub indent_unit: String,
    /// Attribute emission order (default: lexical)
    pub attribute_order: AttributeOrder,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            indent_unit: "  ".into(),
            attribute_order: AttributeOrder::Lexical,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub indent_unit: Option<String>,
    /// Shorthand for an indent unit of N spaces; `indent_unit` wins if both are set
    pub indent_width: Option<usize>,
    pub attribute_order: Option<AttributeOrder>,
}

/// Get the XDG config directory for tagtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tagtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tagtree.toml"))
}

fn config_err(e: ConfigError) -> TagTreeError {
    TagTreeError::config(e.to_string())
}

fn parse_raw(content: &str, origin: &str) -> TagTreeResult<RawRenderSettings> {
    toml::from_str(content).map_err(|e| TagTreeError::config(format!("parse {origin}: {e}")))
}

fn load_raw_settings(path: &Path) -> TagTreeResult<RawRenderSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| TagTreeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_raw(&content, &path.display().to_string())
}

/// `TAGTREE_*` entries of `vars`; pairs that are not valid UTF-8 are skipped.
fn prefixed_env<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .filter(|(key, _)| key.starts_with("TAGTREE_"))
        .collect()
}

fn parse_attribute_order(value: &str) -> TagTreeResult<AttributeOrder> {
    match value.trim().to_ascii_lowercase().as_str() {
        "lexical" => Ok(AttributeOrder::Lexical),
        "insertion" => Ok(AttributeOrder::Insertion),
        other => Err(TagTreeError::config(format!(
            "unknown attribute_order '{other}' (expected 'lexical' or 'insertion')"
        ))),
    }
}

impl RenderSettings {
    /// Indent with `width` spaces per level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_unit = " ".repeat(width);
        self
    }

    pub fn with_attribute_order(mut self, order: AttributeOrder) -> Self {
        self.attribute_order = order;
        self
    }

    /// Overlay values win where specified, otherwise keep base.
    fn merge_with(&self, overlay: &RawRenderSettings) -> Self {
        let indent_unit = overlay
            .indent_unit
            .clone()
            .or_else(|| overlay.indent_width.map(|w| " ".repeat(w)))
            .unwrap_or_else(|| self.indent_unit.clone());
        Self {
            indent_unit,
            attribute_order: overlay.attribute_order.unwrap_or(self.attribute_order),
        }
    }

    /// The indent unit may only contain spaces and tabs.
    pub fn validate(&self) -> TagTreeResult<()> {
        if self.indent_unit.chars().any(|c| c != ' ' && c != '\t') {
            return Err(TagTreeError::config(format!(
                "indent_unit must contain only spaces or tabs, got {:?}",
                self.indent_unit
            )));
        }
        Ok(())
    }

    /// Parse settings from TOML, starting from compiled defaults.
    pub fn from_toml_str(content: &str) -> TagTreeResult<Self> {
        let raw = parse_raw(content, "inline config")?;
        let settings = Self::default().merge_with(&raw);
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist if given
    pub fn load(config_file: Option<&Path>) -> TagTreeResult<Self> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), config_file, prefixed_env(std::env::vars_os()))
    }

    /// Load settings from explicit layers.
    ///
    /// `env` stands in for the process environment; only `TAGTREE_*` entries
    /// are considered.
    #[instrument(level = "debug", skip(env))]
    pub fn load_from<I>(
        global_file: Option<&Path>,
        config_file: Option<&Path>,
        env: I,
    ) -> TagTreeResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(path) = global_file {
            debug!(path = %path.display(), "applying global config");
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 3. Explicit config
        if let Some(path) = config_file {
            debug!(path = %path.display(), "applying config file");
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment overrides
        current = current.apply_env_overrides(env)?;

        current.validate()?;
        Ok(current)
    }

    /// Apply TAGTREE_* variables as explicit overrides.
    fn apply_env_overrides<I>(mut self, env: I) -> TagTreeResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let source = env
            .into_iter()
            .filter(|(key, _)| key.starts_with("TAGTREE_"))
            .collect();

        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TAGTREE")
                    .prefix_separator("_")
                    .source(Some(source)),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("indent_width") {
            let width = val.trim().parse::<usize>().map_err(|e| {
                TagTreeError::config(format!("TAGTREE_INDENT_WIDTH '{val}': {e}"))
            })?;
            self.indent_unit = " ".repeat(width);
        }
        if let Ok(val) = config.get_string("indent_unit") {
            self.indent_unit = val;
        }
        if let Ok(val) = config.get_string("attribute_order") {
            self.attribute_order = parse_attribute_order(&val)?;
        }

        Ok(self)
    }
}
