//! Piecewise-linear resampling onto a target time grid.

use ecn_core::Real;

use crate::error::{ProfileError, ProfileResult};
use crate::profile::CurrentProfile;

/// Resample a validated profile onto `time_grid`, returning one current per
/// grid point.
///
/// No extrapolation: every grid point must lie within
/// `[profile.first_time_s(), profile.last_time_s()]` inclusive, otherwise the
/// corresponding range error is returned and no values are produced.
///
/// A grid point that exactly equals a sample time returns that sample's
/// current directly (no zero-interval division). When consecutive samples
/// share a time (a step discontinuity), an exact hit resolves to the FIRST
/// occurrence, i.e. the current just before the jump. This also holds for
/// runs of three or more duplicated timestamps.
pub fn interpolate_profile(
    profile: &CurrentProfile,
    time_grid: &[Real],
) -> ProfileResult<Vec<Real>> {
    if time_grid.is_empty() {
        return Err(ProfileError::EmptyGrid);
    }

    let times = profile.times_s();
    let currents = profile.currents_a();
    let profile_start = profile.first_time_s();
    let profile_end = profile.last_time_s();

    let mut resampled = Vec::with_capacity(time_grid.len());
    for &t in time_grid {
        // NaN compares false against both range bounds, so it must be
        // rejected explicitly before the bracket search.
        if !t.is_finite() {
            return Err(ProfileError::InvalidParameter {
                what: "time grid values must be finite",
            });
        }
        if t < profile_start {
            return Err(ProfileError::RangeErrorBefore {
                grid_time: t,
                profile_start,
            });
        }
        if t > profile_end {
            return Err(ProfileError::RangeErrorAfter {
                grid_time: t,
                profile_end,
            });
        }
        resampled.push(sample_at(times, currents, t));
    }
    Ok(resampled)
}

/// Linear interpolation at `t`, which must lie within `[times[0], times[last]]`.
fn sample_at(times: &[Real], currents: &[Real], t: Real) -> Real {
    // First index whose time is >= t; an exact hit therefore lands on the
    // first of any run of duplicated timestamps.
    let idx = times.partition_point(|&x| x < t);
    if times[idx] == t {
        return currents[idx];
    }
    // times[idx - 1] < t < times[idx], so the bracketing interval is nonzero.
    let (t0, t1) = (times[idx - 1], times[idx]);
    let (i0, i1) = (currents[idx - 1], currents[idx]);
    i0 + (i1 - i0) * (t - t0) / (t1 - t0)
}
