//! Run configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    pub operating_conditions: OperatingConditions,
    #[serde(default)]
    pub runtime_options: RuntimeOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatingConditions {
    /// Solver time step in seconds.
    pub dt_s: f64,
    /// External current-profile CSV driving the run, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_csv: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuntimeOptions {
    /// Simulation end time in seconds; inferred from the profile's last
    /// sample when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_end_s: Option<f64>,
}
