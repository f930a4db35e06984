use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Undo/redo behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of undo steps. Unbounded when absent.
    #[serde(default)]
    pub max_depth: Option<usize>,
    /// Collapse drags, resizes and appearance tweaks into one undo step
    /// (default: true).
    #[serde(default = "default_merge_continuous_edits")]
    pub merge_continuous_edits: bool,
}

/// Router paths produced by the navigation observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Prefix for document paths (default: "/").
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_merge_continuous_edits() -> bool {
    true
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            merge_continuous_edits: default_merge_continuous_edits(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
