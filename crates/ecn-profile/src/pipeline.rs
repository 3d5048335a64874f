//! Profile load pipeline: parse, build grid, resample.

use std::path::Path;

use ecn_core::Real;
use serde::Serialize;
use tracing::debug;

use crate::error::ProfileResult;
use crate::grid::build_time_grid;
use crate::interp::interpolate_profile;
use crate::parse::load_profile_csv;
use crate::profile::CurrentProfile;

/// Solver input: a uniform time grid paired with one current per grid point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResampledProfile {
    pub time_s: Vec<Real>,
    pub current_a: Vec<Real>,
}

impl ResampledProfile {
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }
}

/// Load a profile CSV and resample it at `dt` steps, inferring the end time
/// from the profile's own last sample.
///
/// Because `t_end` comes from the data being interpolated, the resulting grid
/// never leaves the profile's time range.
pub fn load_current_profile(path: &Path, dt: Real) -> ProfileResult<ResampledProfile> {
    let profile = load_profile_csv(path)?;
    let t_end = profile.last_time_s();
    debug!(samples = profile.len(), t_end, "inferred end time from profile");
    resample(&profile, dt, t_end)
}

/// Load a profile CSV and resample it at `dt` steps up to a caller-supplied
/// end time.
///
/// The explicit `t_end` passes straight through to the same range-validated
/// interpolation path: a `t_end` whose grid reaches past the profile's last
/// sample fails with a range error, while a smaller `t_end` yields a grid
/// that deliberately under-covers the profile.
pub fn load_current_profile_to(
    path: &Path,
    dt: Real,
    t_end: Real,
) -> ProfileResult<ResampledProfile> {
    let profile = load_profile_csv(path)?;
    debug!(samples = profile.len(), t_end, "using caller-supplied end time");
    resample(&profile, dt, t_end)
}

fn resample(profile: &CurrentProfile, dt: Real, t_end: Real) -> ProfileResult<ResampledProfile> {
    let time_s = build_time_grid(dt, t_end)?;
    let current_a = interpolate_profile(profile, &time_s)?;
    Ok(ResampledProfile { time_s, current_a })
}
