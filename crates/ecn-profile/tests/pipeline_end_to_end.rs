//! End-to-end pipeline tests: CSV in, resampled current sequence out.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ecn_profile::{ProfileError, load_current_profile, load_current_profile_to};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn write_profile(prefix: &str, contents: &str) -> PathBuf {
    let dir = unique_temp_dir(prefix);
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("profile.csv");
    fs::write(&path, contents).expect("failed to write profile CSV");
    path
}

const RAMP: &str = "t_s,I_A\n0.0,0.0\n1.0,5.0\n1.0,10.0\n2.0,0.0\n";

#[test]
fn inferred_end_time_covers_the_profile() {
    let path = write_profile("ecn_pipeline_infer", RAMP);
    let resampled = load_current_profile(&path, 0.5).expect("pipeline should succeed");

    assert_eq!(resampled.time_s, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    // t = 1.0 hits the step discontinuity: first occurrence wins.
    assert_eq!(resampled.current_a, vec![0.0, 2.5, 5.0, 5.0, 0.0]);
    assert_eq!(resampled.len(), resampled.current_a.len());
}

#[test]
fn explicit_end_time_beyond_profile_fails_range_check() {
    let path = write_profile("ecn_pipeline_overrun", RAMP);
    let err = load_current_profile_to(&path, 0.5, 3.0).unwrap_err();
    assert!(matches!(err, ProfileError::RangeErrorAfter { .. }));
}

#[test]
fn explicit_end_time_may_under_cover_the_profile() {
    let path = write_profile("ecn_pipeline_undercover", RAMP);
    let resampled = load_current_profile_to(&path, 0.5, 1.0).expect("pipeline should succeed");
    assert_eq!(resampled.time_s, vec![0.0, 0.5, 1.0]);
    assert_eq!(resampled.current_a, vec![0.0, 2.5, 5.0]);
}

#[test]
fn invalid_dt_is_rejected_before_interpolation() {
    let path = write_profile("ecn_pipeline_bad_dt", RAMP);
    let err = load_current_profile(&path, -1.0).unwrap_err();
    assert!(matches!(err, ProfileError::InvalidParameter { .. }));
}

#[test]
fn example_profile_resamples_end_to_end() {
    let mut profile_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    profile_path.pop(); // go to crates
    profile_path.pop(); // go to repo root
    profile_path.push("profiles");
    profile_path.push("pulse_discharge.csv");

    if !profile_path.exists() {
        eprintln!("Skipping test: example profile not found at {profile_path:?}");
        return;
    }

    let resampled = load_current_profile(&profile_path, 1.0).expect("pipeline should succeed");
    assert_eq!(resampled.time_s.first(), Some(&0.0));
    assert_eq!(resampled.time_s.last(), Some(&3600.0));
    assert_eq!(resampled.len(), 3601);
    // The 600 s sample is a step discontinuity: first occurrence wins.
    assert_eq!(resampled.current_a[600], 2.5);
    assert_eq!(resampled.current_a[601], 0.0);
}

#[test]
fn parse_failures_propagate_through_the_pipeline() {
    let path = write_profile("ecn_pipeline_bad_csv", "t_s,I_A\n0.0,zero\n");
    let err = load_current_profile(&path, 0.5).unwrap_err();
    assert!(matches!(err, ProfileError::ParseError { row: 2, .. }));
}
