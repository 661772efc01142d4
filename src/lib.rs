//! 4SERC Modeler - shell library
//!
//! The thin shell around [`serc4d_core`]: configuration loading and the
//! per-session view state. The binary wires these into a headless driver;
//! an interactive front end would own a [`ViewState`] the same way.

pub mod config;
pub mod state;

pub use config::{AppConfig, ConfigError, ShapeMode};
pub use state::ViewState;
