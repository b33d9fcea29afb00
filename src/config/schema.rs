use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Top-level CLI configuration.
///
/// Example YAML:
/// ```yaml
/// locale: ja
/// strict: true
/// output:
///   format: json
///   color: never
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Language for labels, trait names and comments
    #[serde(default)]
    pub locale: Locale,

    /// Require every profile question to be answered with a whole 1-5 value
    /// instead of clamping and skipping
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,

    /// Maximum width of score bars in text output
    #[serde(default)]
    pub bar_width: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colors when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}
