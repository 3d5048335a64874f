//! Smoke test against the repository's example configuration.

use std::path::PathBuf;

use ecn_config::{CliOverrides, load_toml};

#[test]
fn example_config_loads_and_accepts_overrides() {
    let mut config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    config_path.pop(); // go to crates
    config_path.pop(); // go to repo root
    config_path.push("configs");
    config_path.push("pulse_discharge.toml");

    if !config_path.exists() {
        eprintln!("Skipping test: example config not found at {config_path:?}");
        return;
    }

    let mut config = load_toml(&config_path).expect("example config should load");
    assert_eq!(config.operating_conditions.dt_s, 1.0);
    assert!(config.operating_conditions.profile_csv.is_some());
    assert!(config.runtime_options.t_end_s.is_none());

    let overrides = CliOverrides {
        profile: None,
        dt_s: Some(0.5),
        t_end_s: Some(1800.0),
    };
    overrides.apply(&mut config).expect("overrides should apply");
    assert_eq!(config.operating_conditions.dt_s, 0.5);
    assert_eq!(config.runtime_options.t_end_s, Some(1800.0));
}
