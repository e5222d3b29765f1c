//! Chaos experiment config CLI.

use anyhow::{bail, Result};
use ccip_chaos_config::{ChaosConfig, ExperimentPlan, NamedEnvironment};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "ccip-chaos-config")]
#[command(about = "Validate and inspect chaos experiment configs for CCIP integration tests")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "chaos.yaml")]
    config: PathBuf,

    /// Name of the environment the config is validated against
    #[arg(short, long, default_value = "local")]
    environment: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "info")]
    log_level: String,

    /// Output format for the resolved experiment plan
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print example configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Validate configuration and exit
    #[arg(long)]
    validate: bool,
}

fn print_example_config() {
    let example = r#"# Chaos experiment configuration

namespace: "ccip-chaos"            # k8s namespace under test
dashboard_uids:                    # dashboards watched during the run
  - "ccip-lanes"
  - "ccip-commit-exec"
wait_before_start: "5m"            # optional, empty means start immediately
experiment_full_interval: "1h"     # whole experiment window
experiment_injection_interval: "10m"  # time between fault injections
"#;
    println!("{}", example);
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --print-config
    if args.print_config {
        print_example_config();
        return Ok(());
    }

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    info!(config = %args.config.display(), "Loading configuration");
    let content = std::fs::read_to_string(&args.config)?;
    let config = ChaosConfig::from_yaml_str(&content)?;

    // Validate against the named environment
    let env = NamedEnvironment::new(args.environment);
    let report = config.validate(&env);
    if !report.is_ok() {
        for issue in report.issues() {
            error!(field = issue.field, "{}", issue.message);
        }
        bail!(
            "{} invalid field(s) in {}",
            report.issues().len(),
            args.config.display()
        );
    }

    // Handle --validate
    if args.validate {
        info!(environment = %env, "Configuration is valid");
        return Ok(());
    }

    // Resolve and print the experiment plan
    let plan = ExperimentPlan::resolve(&config, Utc::now())?;
    match args.format {
        OutputFormat::Text => println!("{}", plan),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }

    Ok(())
}
