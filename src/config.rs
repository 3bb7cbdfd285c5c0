use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "dot-editor";

/// Runtime configuration, read from `<config_dir>/dot-editor/config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Directory holding the durable snapshot slot
    pub storage_dir: PathBuf,
    /// Where exported images are written
    pub export_dir: PathBuf,
    /// TTF with CJK glyphs for the Japanese messages
    pub font_path: Option<PathBuf>,
    pub log_level: String,
    pub drawing: DrawingConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DrawingConfig {
    /// Fill cells skipped between two pointer samples
    pub interpolate_strokes: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Ignore fade/hide timers left over from an earlier message
    pub latest_wins: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            storage_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
            export_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            font_path: None,
            log_level: "info".to_string(),
            drawing: DrawingConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl EditorConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from the default location; a missing file means defaults
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read config at {}", path.display()));
            }
        };

        Self::parse(&content).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_from(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config, EditorConfig::default());
        assert!(!config.drawing.interpolate_strokes);
        assert!(!config.notifications.latest_wins);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let config = EditorConfig::parse(
            r#"
            storage_dir = "/tmp/dots"
            font_path = "/usr/share/fonts/noto.ttf"

            [drawing]
            interpolate_strokes = true
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_dir, PathBuf::from("/tmp/dots"));
        assert_eq!(config.font_path, Some(PathBuf::from("/usr/share/fonts/noto.ttf")));
        assert!(config.drawing.interpolate_strokes);
        assert!(!config.notifications.latest_wins);
        assert_eq!(config.export_dir, EditorConfig::default().export_dir);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "drawing = [").unwrap();
        assert!(EditorConfig::load_from(&path).is_err());
    }
}
