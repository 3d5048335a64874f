use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ecn_config::{CliOverrides, load_toml, resolve_profile_path};
use ecn_core::Real;
use ecn_profile::{
    CurrentProfile, ResampledProfile, load_current_profile, load_current_profile_to,
    load_profile_csv,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "ecnsim")]
#[command(about = "ECN battery simulation - current profile tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a run configuration (and the profile it names, if any)
    Validate {
        /// Path to the TOML run configuration
        config_path: PathBuf,
    },
    /// Show summary statistics for a profile CSV
    Inspect {
        /// Path to the profile CSV
        profile_path: PathBuf,
    },
    /// Resample a profile CSV onto a uniform solver time grid
    Resample {
        /// Path to the profile CSV
        profile_path: PathBuf,
        /// Time step in seconds
        #[arg(long)]
        dt: f64,
        /// End time in seconds (defaults to the profile's last sample)
        #[arg(long)]
        t_end: Option<f64>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load a configuration, apply overrides, and prepare the solver input
    Run {
        /// Path to the TOML run configuration
        config_path: PathBuf,
        /// External current profile CSV (overrides the config)
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Solver time step in seconds (overrides the config)
        #[arg(long)]
        dt: Option<f64>,
        /// Simulation end time in seconds (overrides the config)
        #[arg(long)]
        t_end: Option<f64>,
    },
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Profile error: {0}")]
    Profile(#[from] ecn_profile::ProfileError),

    #[error("Config error: {0}")]
    Config(#[from] ecn_config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

type AppResult<T> = Result<T, AppError>;

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Inspect { profile_path } => cmd_inspect(&profile_path),
        Commands::Resample {
            profile_path,
            dt,
            t_end,
            output,
        } => cmd_resample(&profile_path, dt, t_end, output.as_deref()),
        Commands::Run {
            config_path,
            profile,
            dt,
            t_end,
        } => cmd_run(&config_path, profile, dt, t_end),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let config = load_toml(config_path)?;
    println!("✓ Configuration is valid");
    println!("  dt = {} s", config.operating_conditions.dt_s);
    match config.runtime_options.t_end_s {
        Some(t_end) => println!("  t_end = {} s", t_end),
        None => println!("  t_end inferred from profile"),
    }

    if let Some(profile_csv) = &config.operating_conditions.profile_csv {
        let profile_path = resolve_profile_path(profile_csv, config_path.parent());
        let profile = load_profile_csv(&profile_path)?;
        println!("✓ Profile is valid: {}", profile_path.display());
        print_profile_summary(&profile);
    }
    Ok(())
}

fn cmd_inspect(profile_path: &Path) -> AppResult<()> {
    let profile = load_profile_csv(profile_path)?;
    println!("Profile: {}", profile_path.display());
    print_profile_summary(&profile);
    Ok(())
}

fn cmd_resample(
    profile_path: &Path,
    dt: f64,
    t_end: Option<f64>,
    output: Option<&Path>,
) -> AppResult<()> {
    let resampled = match t_end {
        Some(t_end) => load_current_profile_to(profile_path, dt, t_end)?,
        None => load_current_profile(profile_path, dt)?,
    };
    write_resampled_csv(&resampled, output)?;
    if let Some(path) = output {
        eprintln!("✓ Wrote {} samples to {}", resampled.len(), path.display());
    }
    Ok(())
}

fn cmd_run(
    config_path: &Path,
    profile: Option<PathBuf>,
    dt: Option<f64>,
    t_end: Option<f64>,
) -> AppResult<()> {
    let mut config = load_toml(config_path)?;
    let overrides = CliOverrides {
        profile,
        dt_s: dt,
        t_end_s: t_end,
    };
    overrides.apply(&mut config)?;

    let profile_csv = config.operating_conditions.profile_csv.ok_or_else(|| {
        AppError::InvalidInput(
            "no profile CSV configured; set operating_conditions.profile_csv or pass --profile"
                .to_string(),
        )
    })?;
    let profile_path = resolve_profile_path(&profile_csv, config_path.parent());
    let dt = config.operating_conditions.dt_s;

    info!(profile = %profile_path.display(), dt, "preparing solver input");
    let resampled = match config.runtime_options.t_end_s {
        Some(t_end) => load_current_profile_to(&profile_path, dt, t_end)?,
        None => load_current_profile(&profile_path, dt)?,
    };

    println!("✓ Solver input prepared");
    println!("  Profile: {}", profile_path.display());
    println!("  dt = {} s", dt);
    println!("  Grid points: {}", resampled.len());
    if let (Some(first), Some(last)) = (resampled.time_s.first(), resampled.time_s.last()) {
        println!("  Time span: {first} .. {last} s");
    }
    let (i_min, i_max) = min_max(&resampled.current_a);
    println!("  Current range: {i_min} .. {i_max} A");
    Ok(())
}

fn print_profile_summary(profile: &CurrentProfile) {
    println!("  Samples: {}", profile.len());
    println!(
        "  Time span: {} .. {} s",
        profile.first_time_s(),
        profile.last_time_s()
    );
    let (i_min, i_max) = min_max(profile.currents_a());
    println!("  Current range: {i_min} .. {i_max} A");
    println!("  Step discontinuities: {}", profile.step_count());
}

fn min_max(values: &[Real]) -> (Real, Real) {
    values.iter().fold(
        (Real::INFINITY, Real::NEG_INFINITY),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    )
}

fn write_resampled_csv(resampled: &ResampledProfile, output: Option<&Path>) -> AppResult<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["t_s", "I_A"])?;
    for (t, i) in resampled.time_s.iter().zip(&resampled.current_a) {
        csv_writer.write_record([t.to_string(), i.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}
