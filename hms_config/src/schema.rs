use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

// Store sizing lives next to the store itself
use hms_core::StoreConfig;

const CONFIG_DIR_NAME: &str = "hms";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    #[serde(default = "MenuConfig::default_title")]
    pub title: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
        }
    }
}

impl MenuConfig {
    fn default_title() -> String {
        "Hospital Management System".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, e.g. `warn` or `hms_core=debug`.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'hms init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::from_json_str(&content)?;
        debug!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    /// Parse `content`, or fall back to defaults when it is malformed.
    ///
    /// The parse error is handed back with the defaults so the caller can
    /// report it.
    pub fn from_json_str_or_default(content: &str) -> (Self, Option<anyhow::Error>) {
        match Self::from_json_str(content) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load the config file if there is one, otherwise fall back to defaults.
    ///
    /// A file that cannot be read or parsed never stops the program: the
    /// defaults are returned together with the error.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        let config_path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => return (Self::default(), Some(e)),
        };

        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return (Self::default(), None);
        }

        match std::fs::read_to_string(&config_path) {
            Ok(content) => {
                let (config, err) = Self::from_json_str_or_default(&content);
                let err =
                    err.map(|e| e.context(format!("Invalid config at {}", config_path.display())));
                (config, err)
            }
            Err(e) => (
                Self::default(),
                Some(anyhow::Error::new(e).context(format!(
                    "Cannot read config at {}",
                    config_path.display()
                ))),
            ),
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let content = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(&config_path, content)?;
        info!("Wrote default config to {}", config_path.display());

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Configuration options:");
        println!("   - store.capacity: maximum number of patient records (default 100)");
        println!("   - menu.title: heading printed above the menu");
        println!("   - logging.level: log filter, overridden by RUST_LOG or --log-level");
        println!();
        Ok(())
    }
}
