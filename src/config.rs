//! linkqr runtime configuration handling

use crate::error::{Error, Result};
use crate::qr::{Color, DEFAULT_OUTPUT, RenderSettings};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure loaded from disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkqrConfig {
    /// Output and rendering options
    pub qr: QrOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

/// File names looked up in the working directory, in order
const LOCAL_FILES: [&str; 3] = ["linkqr.toml", "linkqr.yaml", "linkqr.yml"];
/// File names looked up under `$XDG_CONFIG_HOME/linkqr`, in order
const XDG_FILES: [&str; 3] = ["config.toml", "config.yaml", "config.yml"];

impl LinkqrConfig {
    /// Build the effective configuration.
    ///
    /// Reads `explicit_path` if given, otherwise the first file from
    /// [`LinkqrConfig::search_paths`] that exists, otherwise defaults. `LINKQR_*`
    /// environment variables are applied on top.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let source = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::search_paths().into_iter().find(|path| path.is_file()),
        };

        let mut config = match source {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration file");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Candidate configuration files, highest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = LOCAL_FILES.iter().map(PathBuf::from).collect();
        if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
            let base = Path::new(&xdg).join("linkqr");
            paths.extend(XDG_FILES.iter().map(|name| base.join(name)));
        }
        paths
    }

    /// Read configuration from a TOML or YAML file, chosen by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::of(path)?;
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;
        format
            .parse(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Apply `LINKQR_*` overrides after file/default loading.
    ///
    /// `lookup` resolves a variable name to its value; [`LinkqrConfig::load`]
    /// passes the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.qr.apply_overrides(&lookup);
        self.logging.apply_overrides(&lookup);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    fn of(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(Error::Config(format!(
                "Unsupported config file '{}', expected .toml, .yaml or .yml",
                path.display()
            ))),
        }
    }

    fn parse(self, contents: &str) -> std::result::Result<LinkqrConfig, String> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// Output path and pass-through rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    /// Image file to write
    pub output: PathBuf,
    /// Pixels per module
    pub box_size: u32,
    /// Quiet-zone width in modules
    pub border: u32,
    /// Dark module color (name or `#rrggbb`)
    pub fill_color: String,
    /// Light module color (name or `#rrggbb`)
    pub back_color: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            box_size: 10,
            border: 4,
            fill_color: "black".to_string(),
            back_color: "white".to_string(),
        }
    }
}

impl QrOptions {
    fn apply_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(output) = lookup("LINKQR_OUTPUT") {
            if !output.trim().is_empty() {
                self.output = PathBuf::from(output);
            }
        }
        if let Some(size) = lookup("LINKQR_BOX_SIZE") {
            if let Ok(parsed) = size.parse::<u32>() {
                self.box_size = parsed;
            }
        }
        if let Some(border) = lookup("LINKQR_BORDER") {
            if let Ok(parsed) = border.parse::<u32>() {
                self.border = parsed;
            }
        }
        if let Some(fill) = lookup("LINKQR_FILL_COLOR") {
            self.fill_color = fill;
        }
        if let Some(back) = lookup("LINKQR_BACK_COLOR") {
            self.back_color = back;
        }
    }

    /// Resolve colors and validate geometry for the encoder.
    pub fn render_settings(&self) -> Result<RenderSettings> {
        let settings = RenderSettings {
            box_size: self.box_size,
            border: self.border,
            fill_color: self.fill_color.parse::<Color>()?,
            back_color: self.back_color.parse::<Color>()?,
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `LINKQR_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stderr logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    fn apply_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("LINKQR_LOG_LEVEL") {
            self.level = level;
        }
        if let Some(file) = lookup("LINKQR_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Some(color) = lookup("LINKQR_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Some(rotation) = lookup("LINKQR_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::parse(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_fixed_settings() {
        let config = LinkqrConfig::default();
        assert_eq!(config.qr.output, PathBuf::from("apk_qr_code.png"));
        assert_eq!(
            config.qr.render_settings().unwrap(),
            RenderSettings::default()
        );
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkqr.toml");
        fs::write(
            &path,
            "[qr]\nbox_size = 6\nfill_color = \"#112233\"\n\n[logging]\nrotation = \"daily\"\n",
        )
        .unwrap();

        let config = LinkqrConfig::from_file(&path).unwrap();
        assert_eq!(config.qr.box_size, 6);
        assert_eq!(config.qr.border, 4);
        assert_eq!(config.qr.fill_color, "#112233");
        assert_eq!(config.logging.rotation, Some(LogRotation::Daily));
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkqr.yml");
        fs::write(&path, "qr:\n  output: code.png\n  border: 2\n").unwrap();

        let config = LinkqrConfig::from_file(&path).unwrap();
        assert_eq!(config.qr.output, PathBuf::from("code.png"));
        assert_eq!(config.qr.border, 2);
    }

    #[test]
    fn test_search_paths_start_in_working_directory() {
        let paths = LinkqrConfig::search_paths();
        assert_eq!(paths[0], PathBuf::from("linkqr.toml"));
        assert_eq!(paths[2], PathBuf::from("linkqr.yml"));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkqr.toml");
        fs::write(&path, "[qr\nbox_size = ").unwrap();

        let err = LinkqrConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkqr.ini");
        fs::write(&path, "box_size=3").unwrap();

        let err = LinkqrConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let mut config = LinkqrConfig::default();
        config.apply_overrides(lookup_from(&[
            ("LINKQR_OUTPUT", "out.jpg"),
            ("LINKQR_BOX_SIZE", "4"),
            ("LINKQR_BORDER", "not-a-number"),
            ("LINKQR_BACK_COLOR", "yellow"),
            ("LINKQR_LOG_COLOR", "off"),
            ("LINKQR_LOG_ROTATION", "HOURLY"),
        ]));

        assert_eq!(config.qr.output, PathBuf::from("out.jpg"));
        assert_eq!(config.qr.box_size, 4);
        assert_eq!(config.qr.border, 4);
        assert_eq!(config.qr.back_color, "yellow");
        assert!(!config.logging.color);
        assert_eq!(config.logging.rotation, Some(LogRotation::Hourly));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let options = QrOptions {
            fill_color: "octarine".to_string(),
            ..QrOptions::default()
        };
        assert!(matches!(
            options.render_settings(),
            Err(Error::InvalidColor(_))
        ));
    }
}
