//! Typed command-line overrides for a run configuration.
//!
//! Each override is an explicit named optional field that is validated on its
//! own before it is merged into the configuration, so one bad flag cannot
//! leave a half-updated config behind.

use std::path::{Path, PathBuf};

use ecn_core::ensure_positive;

use crate::schema::RunConfig;
use crate::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// Replacement external current-profile CSV.
    pub profile: Option<PathBuf>,
    /// Replacement solver time step in seconds.
    pub dt_s: Option<f64>,
    /// Replacement simulation end time in seconds.
    pub t_end_s: Option<f64>,
}

impl CliOverrides {
    pub fn is_empty(&self) -> bool {
        self.profile.is_none() && self.dt_s.is_none() && self.t_end_s.is_none()
    }

    /// Validate every supplied override, then merge them into `config`.
    ///
    /// Validation happens before any field is written: either all supplied
    /// overrides apply or none do.
    pub fn apply(&self, config: &mut RunConfig) -> ConfigResult<()> {
        if let Some(dt) = self.dt_s {
            ensure_positive(dt, "--dt").map_err(ConfigError::Invalid)?;
        }
        if let Some(t_end) = self.t_end_s {
            ensure_positive(t_end, "--t-end").map_err(ConfigError::Invalid)?;
        }

        if let Some(profile) = &self.profile {
            config.operating_conditions.profile_csv = Some(profile.clone());
        }
        if let Some(dt) = self.dt_s {
            config.operating_conditions.dt_s = dt;
        }
        if let Some(t_end) = self.t_end_s {
            config.runtime_options.t_end_s = Some(t_end);
        }
        Ok(())
    }
}

/// Resolve a profile path the way the CLI expects: absolute paths and paths
/// that exist relative to the working directory pass through; otherwise an
/// optional search directory is tried before falling back to the original.
pub fn resolve_profile_path(path: &Path, search_dir: Option<&Path>) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    if let Some(dir) = search_dir {
        let candidate = dir.join(path);
        if candidate.exists() {
            return candidate;
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{OperatingConditions, RuntimeOptions};

    fn base_config() -> RunConfig {
        RunConfig {
            operating_conditions: OperatingConditions {
                dt_s: 1.0,
                profile_csv: Some(PathBuf::from("profiles/base.csv")),
            },
            runtime_options: RuntimeOptions { t_end_s: None },
        }
    }

    #[test]
    fn empty_overrides_leave_config_untouched() {
        let mut config = base_config();
        let overrides = CliOverrides::default();
        assert!(overrides.is_empty());
        overrides.apply(&mut config).unwrap();
        assert_eq!(config, base_config());
    }

    #[test]
    fn overrides_take_precedence_over_file_values() {
        let mut config = base_config();
        let overrides = CliOverrides {
            profile: Some(PathBuf::from("profiles/other.csv")),
            dt_s: Some(0.25),
            t_end_s: Some(120.0),
        };
        overrides.apply(&mut config).unwrap();
        assert_eq!(
            config.operating_conditions.profile_csv,
            Some(PathBuf::from("profiles/other.csv"))
        );
        assert_eq!(config.operating_conditions.dt_s, 0.25);
        assert_eq!(config.runtime_options.t_end_s, Some(120.0));
    }

    #[test]
    fn invalid_override_applies_nothing() {
        let mut config = base_config();
        let overrides = CliOverrides {
            profile: Some(PathBuf::from("profiles/other.csv")),
            dt_s: Some(-0.25),
            t_end_s: None,
        };
        assert!(overrides.apply(&mut config).is_err());
        assert_eq!(config, base_config());
    }

    #[test]
    fn absolute_profile_path_passes_through() {
        let path = std::env::temp_dir().join("no_such_profile.csv");
        assert_eq!(resolve_profile_path(&path, None), path);
    }
}
