//! Uniform solver time-grid construction.

use ecn_core::Real;

use crate::error::{ProfileError, ProfileResult};

/// Build the uniform time grid `0, dt, 2*dt, ...` covering `[0, t_end]`.
///
/// The grid is the half-open range `[0, floor(t_end/dt)*dt + dt)` sampled at
/// multiples of `dt`, with the point count computed in floating point
/// (`ceil(stop/dt)`). Two consequences callers rely on:
///
/// - when `t_end` is an exact binary multiple of `dt` the last point equals
///   `t_end` (e.g. `dt = 0.5`, `t_end = 2.0` gives `[0, 0.5, 1, 1.5, 2]`);
/// - when the `stop/dt` quotient rounds just above an integer, the grid gains
///   one extra trailing point past `t_end`.
///
/// Callers that need an exact end time must truncate downstream.
///
/// The point count is capped at [`MAX_GRID_POINTS`]; a `t_end / dt` ratio
/// beyond that (or one that overflows to infinity) is rejected as an invalid
/// parameter rather than attempted as an allocation.
pub fn build_time_grid(dt: Real, t_end: Real) -> ProfileResult<Vec<Real>> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(ProfileError::InvalidParameter {
            what: "dt must be positive and finite",
        });
    }
    if !t_end.is_finite() || t_end <= 0.0 {
        return Err(ProfileError::InvalidParameter {
            what: "t_end must be positive and finite",
        });
    }

    let steps = (t_end / dt).floor();
    let stop = steps * dt + dt;
    let points = (stop / dt).ceil();
    if !points.is_finite() || points > MAX_GRID_POINTS as Real {
        return Err(ProfileError::InvalidParameter {
            what: "t_end / dt yields more grid points than the solver supports",
        });
    }
    let n = points as usize;
    Ok((0..n).map(|k| k as Real * dt).collect())
}

/// Upper bound on grid points (800 MB of `f64` time values); far beyond any
/// schedule a solver run would step through.
pub const MAX_GRID_POINTS: usize = 100_000_000;
