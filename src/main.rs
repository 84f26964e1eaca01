//! confenv
//!
//! Loads a config file, prints the resolved values, applies environment
//! overrides and prints them again.

use clap::Parser;
use confenv::{ConfigRecord, apply_env_overrides, load_config};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Load a config file and apply environment overrides
#[derive(Parser, Debug)]
#[command(name = "confenv")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the config file (.json, .xml, .yml, .toml or .hcl)
    #[arg(short, long, default_value = "config/config.json")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CONFENV_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn print_config(config: &ConfigRecord) {
    println!("{}", config.base_url);
    println!("{}", config.name);
    println!("{}", config.driver);
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG takes precedence over --log-level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    info!(path = %args.config, "Loading configuration");

    let mut config = load_config(&args.config)
        .inspect_err(|e| error!(error = %e, "Failed to load configuration"))?;

    print_config(&config);

    apply_env_overrides(&mut config)
        .inspect_err(|e| error!(error = %e, "Failed to apply environment overrides"))?;

    print_config(&config);

    Ok(())
}
