//! ecn-config: run configuration format and validation.
//!
//! A run is described by a TOML file with `[operating_conditions]` (solver
//! time step, optional external profile CSV) and `[runtime_options]`
//! (optional explicit end time). The CLI may override individual fields; each
//! override is validated on its own before it is merged.

pub mod overrides;
pub mod schema;
pub mod validate;

pub use overrides::{CliOverrides, resolve_profile_path};
pub use schema::{OperatingConditions, RunConfig, RuntimeOptions};
pub use validate::validate_config;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config value: {0}")]
    Invalid(#[from] ecn_core::CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a run configuration from a TOML file and validate it.
pub fn load_toml(path: &std::path::Path) -> ConfigResult<RunConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: RunConfig = toml::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}
