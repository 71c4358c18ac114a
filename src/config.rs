//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/newsdesk/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search backend
    pub api_url: String,

    /// Whether to run the TUI (disable for scripted use)
    pub enable_tui: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set: "error".."trace"
    pub level: String,

    /// Also write JSON logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            enable_tui: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "newsdesk.log".to_string(),
        }
    }
}

/// Config file structure (everything optional, defaults fill the gaps)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
}

impl Config {
    /// Config file path: ~/.config/newsdesk/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("newsdesk").join("config.toml"))
    }

    /// Create the config file with defaults if it doesn't exist, so
    /// users can discover the options. Failure is silently ignored -
    /// the config file is optional.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Render the config as a commented TOML template
    pub fn to_toml(&self) -> String {
        format!(
            "# newsdesk configuration\n\
             \n\
             # Base URL of the search backend\n\
             api_url = {:?}\n\
             \n\
             [logging]\n\
             # Default log level when RUST_LOG is not set\n\
             level = {:?}\n\
             # Also write JSON logs to rotating files\n\
             file_enabled = {}\n\
             file_dir = {:?}\n\
             file_prefix = {:?}\n",
            self.api_url,
            self.logging.level,
            self.logging.file_enabled,
            self.logging.file_dir.display().to_string(),
            self.logging.file_prefix,
        )
    }

    /// Load the file config if present.
    ///
    /// A config file that exists but cannot be parsed is a fatal error.
    /// Failing fast beats silently falling back to defaults while the
    /// user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: failed to parse config file {}", path.display());
                    eprintln!("  {}", e);
                    eprintln!("  To reset, delete the file and restart newsdesk.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Error: cannot read config file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::from_parts(
            Self::load_file_config(),
            std::env::var("NEWSDESK_API_URL").ok(),
            std::env::var("NEWSDESK_NO_TUI").ok(),
        )
    }

    /// Merge the three layers. Split out from [`Config::from_env`] so
    /// tests can exercise precedence without touching the process env.
    fn from_parts(
        file: FileConfig,
        env_api_url: Option<String>,
        env_no_tui: Option<String>,
    ) -> Self {
        let api_url = env_api_url
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // TUI toggle: env only (runtime flag)
        let enable_tui = env_no_tui
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let file_logging = file.logging.unwrap_or_default();
        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.level),
            file_enabled: file_logging.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_prefix: file_logging.file_prefix.unwrap_or(defaults.file_prefix),
        };

        Self {
            api_url,
            enable_tui,
            logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The generated template must parse back. Catches TOML syntax
    /// errors in the hand-written template string.
    #[test]
    fn default_template_roundtrips() {
        let toml_str = Config::default().to_toml();
        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "default template should parse.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );
    }

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config = Config::from_parts(FileConfig::default(), None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.enable_tui);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn env_overrides_file_overrides_default() {
        let file: FileConfig = toml::from_str(
            r#"
            api_url = "http://from-file:9000"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        let from_file = Config::from_parts(file, None, None);
        assert_eq!(from_file.api_url, "http://from-file:9000");
        assert_eq!(from_file.logging.level, "debug");

        let file: FileConfig = toml::from_str(r#"api_url = "http://from-file:9000""#).unwrap();
        let from_env = Config::from_parts(file, Some("http://from-env:8000".to_string()), None);
        assert_eq!(from_env.api_url, "http://from-env:8000");
    }

    #[test]
    fn no_tui_flag_disables_the_tui() {
        for value in ["1", "true", "TRUE"] {
            let config = Config::from_parts(FileConfig::default(), None, Some(value.to_string()));
            assert!(!config.enable_tui, "value {:?} should disable the TUI", value);
        }
        let config = Config::from_parts(FileConfig::default(), None, Some("0".to_string()));
        assert!(config.enable_tui);
    }
}
