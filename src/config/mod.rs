mod schema;

pub use schema::{ColorMode, Config, OutputConfig, OutputFormat};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/love-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("love-score"))
}

/// Get the default config file path (~/.config/love-score/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional explicit path. If None, uses ~/.config/love-score/config.yaml
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config path does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing default config file is not an error; defaults are returned.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => {
            let default_path = match get_config_path() {
                Ok(p) => p,
                Err(_) => return Ok(Config::default()),
            };
            if default_path.exists() {
                read_config(&default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    // An empty file is a valid, all-default config
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}

/// Validate configuration values serde cannot check on its own.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(width) = config.output.bar_width {
        if width == 0 {
            errors.push("output.bar_width: must be at least 1".to_string());
        }
        if width > 200 {
            errors.push(format!("output.bar_width: {} is wider than 200", width));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.locale, Locale::En);
        assert!(!config.strict);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.color, ColorMode::Auto);
        assert!(config.output.bar_width.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
locale: ja
strict: true
output:
  format: json
  color: never
  bar_width: 30
"#,
        );

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.locale, Locale::Ja);
        assert!(config.strict);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.color, ColorMode::Never);
        assert_eq!(config.output.bar_width, Some(30));
    }

    #[test]
    fn test_partial_config_parse() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "locale: ja\n");

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.locale, Locale::Ja);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        assert_eq!(load_config(Some(path)).unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "threshold: 0.5\n");
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            locale: Locale::Ja,
            strict: true,
            output: OutputConfig {
                format: OutputFormat::Json,
                color: ColorMode::Always,
                bar_width: Some(20),
            },
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_validate_bar_width() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.output.bar_width = Some(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("output.bar_width"));

        config.output.bar_width = Some(500);
        assert!(validate_config(&config).is_err());
    }
}
