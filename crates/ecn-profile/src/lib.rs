//! ecn-profile: external current-profile ingestion and resampling.
//!
//! Turns a time/current CSV schedule (positive = discharge, negative = charge)
//! into the uniformly sampled current sequence the solver consumes at fixed
//! time steps. Strict validate-then-interpolate: the whole file is validated
//! before any result is returned, and no extrapolation is ever performed.
//!
//! - `profile`: immutable sample sequence + validating factory
//! - `parse`: CSV ingest with schema and row-level errors
//! - `grid`: uniform solver time-grid construction
//! - `interp`: piecewise-linear resampling with step-discontinuity support
//! - `pipeline`: the two load entry points (inferred vs explicit end time)

pub mod error;
pub mod grid;
pub mod interp;
pub mod parse;
pub mod pipeline;
pub mod profile;

pub use error::{ProfileError, ProfileResult};
pub use grid::{MAX_GRID_POINTS, build_time_grid};
pub use interp::interpolate_profile;
pub use parse::{CURRENT_COLUMN, TIME_COLUMN, load_profile_csv};
pub use pipeline::{ResampledProfile, load_current_profile, load_current_profile_to};
pub use profile::CurrentProfile;
