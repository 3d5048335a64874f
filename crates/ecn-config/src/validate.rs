//! Configuration validation logic.

use ecn_core::ensure_positive;

use crate::schema::RunConfig;
use crate::{ConfigError, ConfigResult};

/// Validate a run configuration field by field.
///
/// The time step must be strictly positive and finite; the end time, when
/// present, likewise. The profile path is not checked for existence here --
/// that is the parser's job at load time.
pub fn validate_config(config: &RunConfig) -> ConfigResult<()> {
    ensure_positive(config.operating_conditions.dt_s, "operating_conditions.dt_s")
        .map_err(ConfigError::Invalid)?;
    if let Some(t_end) = config.runtime_options.t_end_s {
        ensure_positive(t_end, "runtime_options.t_end_s").map_err(ConfigError::Invalid)?;
    }
    Ok(())
}
