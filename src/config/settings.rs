//! Settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through `settings.toml`.  Missing keys fall
//! back to their defaults, so a partial file is valid.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::commands::CommandGroup;
use crate::context::DEFAULT_VIM_PATTERN;

// ---------------------------------------------------------------------------
// GrammarConfig
// ---------------------------------------------------------------------------

/// Settings for the command grammar.
///
/// The limits mirror what the grammar offers the recognition engine; a
/// recognition exceeding them is rejected before anything executes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Regular expression matched against the start of the window title to
    /// select the VIM templates.
    pub vim_window_pattern: String,
    /// Command groups loaded into the table.
    pub command_groups: Vec<CommandGroup>,
    /// Format styles offered by the grammar (spoken names).  Empty means all.
    pub format_styles: Vec<String>,
    /// Maximum number of commands chained in one utterance.
    pub max_sequence_len: usize,
    /// Largest repeat count (`<n>` and `repeat <n> times`).
    pub max_repeat: u32,
    /// Maximum number of spelled characters in a finish.
    pub max_spelled_len: usize,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            vim_window_pattern: DEFAULT_VIM_PATTERN.into(),
            command_groups: vec![CommandGroup::General, CommandGroup::Python],
            format_styles: Vec::new(),
            max_sequence_len: 15,
            max_repeat: 99,
            max_spelled_len: 19,
        }
    }
}

// ---------------------------------------------------------------------------
// LoggingConfig
// ---------------------------------------------------------------------------

/// Logging settings for the binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `env_logger` filter; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use multi_edit::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grammar: GrammarConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
