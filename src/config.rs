//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SERC4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serc4d_core::{RotationAngles, DEFAULT_COPIES, DEFAULT_EDGE_LENGTH};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base simplex configuration
    #[serde(default)]
    pub simplex: SimplexConfig,
    /// Helix composition configuration
    #[serde(default)]
    pub helix: HelixConfig,
    /// Startup view configuration
    #[serde(default)]
    pub view: ViewConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simplex: SimplexConfig::default(),
            helix: HelixConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SERC4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SERC4D_HELIX__COPIES=7 -> helix.copies = 7
        figment = figment.merge(Env::prefixed("SERC4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Shape selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    /// The base simplex alone
    Single,
    /// The multi-copy tetrahelix
    Helix,
}

/// Base simplex configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplexConfig {
    /// Edge-length parameter for the base simplex
    pub edge_length: f32,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            edge_length: DEFAULT_EDGE_LENGTH,
        }
    }
}

/// Helix composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelixConfig {
    /// Number of simplex copies in helix mode
    pub copies: usize,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            copies: DEFAULT_COPIES,
        }
    }
}

/// Startup view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Shape shown at startup
    pub mode: ShapeMode,
    /// Starting rotation angles in radians
    pub angles: RotationAngles,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mode: ShapeMode::Single,
            angles: RotationAngles::ZERO,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
