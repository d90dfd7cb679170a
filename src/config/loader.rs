//! Configuration File Loading
//!
//! Looks for a `config.toml` or `config.json` in the usual places and
//! falls back to [`PlotterConfig::default`] when none exists.

use super::PlotterConfig;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "GNUPLOT_PIPE_CONFIG";

const APP_DIR: &str = "gnuplot-pipe";

/// Configuration file loader
pub struct ConfigLoader {
    /// Base paths (without extension) searched for configuration files
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats, in priority order
    supported_formats: Vec<ConfigFormat>,
    /// Path of the last successfully loaded file
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }

    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to fall back to the default config if none exists
    pub create_default: bool,
    /// Whether to validate configuration after loading
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
        }
    }
}

impl ConfigLoader {
    /// Create a loader over the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration with default options
    pub fn load() -> Result<PlotterConfig> {
        Self::new().load_with(LoadOptions::default())
    }

    /// Load configuration with custom options
    pub fn load_with_options(options: LoadOptions) -> Result<PlotterConfig> {
        Self::new().load_with(options)
    }

    /// Load using this loader's search paths
    pub fn load_with(&mut self, options: LoadOptions) -> Result<PlotterConfig> {
        // An explicit file from the environment must exist and parse
        if let Some(explicit) = env::var_os(CONFIG_ENV_VAR) {
            let path = PathBuf::from(explicit);
            let config = self.load_from_path(&path)?;
            if options.validate {
                config.validate()?;
            }
            return Ok(config);
        }

        if let Some((path, config)) = self.find_and_load_config()? {
            debug!("Loaded configuration from {}", path.display());
            self.current_path = Some(path);
            if options.validate {
                config.validate()?;
            }
            return Ok(config);
        }

        if options.create_default {
            Ok(PlotterConfig::default())
        } else {
            Err(Error::ConfigNotFound)
        }
    }

    /// Load a specific configuration file, format chosen by extension
    pub fn load_from_path(&mut self, path: &Path) -> Result<PlotterConfig> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "Configuration file does not exist".to_string(),
            });
        }

        let format = ConfigFormat::from_path(path).unwrap_or(ConfigFormat::Toml);
        let config = self.load_config_file(path, format)?;
        self.current_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config: &PlotterConfig, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = match ConfigFormat::from_path(path) {
            Some(ConfigFormat::Json) => {
                serde_json::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })?
            }
            _ => toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            })?,
        };

        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, PlotterConfig)>> {
        for path in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = path.with_extension(format.extension());

                if config_path.exists() {
                    match self.load_config_file(&config_path, *format) {
                        Ok(config) => return Ok(Some((config_path, config))),
                        Err(e) => {
                            // Keep searching; a broken file should not hide a good one
                            warn!(
                                "Failed to load config from {}: {}",
                                config_path.display(),
                                e
                            );
                            continue;
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    fn load_config_file(&self, path: &Path, format: ConfigFormat) -> Result<PlotterConfig> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: format.name().to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Default search paths, without file extensions
    fn get_search_paths() -> Vec<PathBuf> {
        use crate::platform::Platform;

        let mut paths = Vec::new();

        if let Ok(config_dir) = Platform::paths().config_dir() {
            paths.push(config_dir.join(APP_DIR).join("config"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{}", APP_DIR)).join("config"));
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join(format!(".{}", APP_DIR)));
        }

        paths
    }

    /// Path of the last loaded configuration file
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Clear all search paths and add a single base path
    pub fn set_search_path(&mut self, path: PathBuf) {
        self.search_paths = vec![path];
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
