//! Command line interface for pendulum

use clap::Parser;
use std::fmt;

use crate::config::SimulationConfig;
use crate::physics::integrators::IntegratorRegistry;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Invalid integrator name provided
    InvalidIntegrator(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidIntegrator(msg) => write!(f, "Invalid integrator: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Pendulum - chaotic double pendulum simulation
#[derive(Parser, Debug, Default)]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Gravitational acceleration in pixels/s² (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<f64>,

    /// Length of the upper rod in pixels
    #[arg(long, value_name = "PIXELS")]
    pub length1: Option<f64>,

    /// Length of the lower rod in pixels
    #[arg(long, value_name = "PIXELS")]
    pub length2: Option<f64>,

    /// Mass of the upper bob
    #[arg(long, value_name = "MASS")]
    pub mass1: Option<f64>,

    /// Mass of the lower bob
    #[arg(long, value_name = "MASS")]
    pub mass2: Option<f64>,

    /// Angular velocity multiplier per derivative evaluation (1.0 disables damping)
    #[arg(short = 'd', long, value_name = "FACTOR")]
    pub damping: Option<f64>,

    /// Integrator type (e.g., rk4, heun, euler)
    #[arg(short = 'i', long, value_name = "TYPE")]
    pub integrator: Option<String>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available integrators and exit
    #[arg(long)]
    pub list_integrators: bool,
}

/// Handles the --list-integrators flag by printing available integrators and exiting
pub fn handle_list_integrators() {
    let registry = IntegratorRegistry::new().with_standard_integrators();
    println!("Available integrators:");
    for name in registry.list_available() {
        println!("  - {name}");
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        println!("\nAliases:");
        for (alias, target) in aliases {
            println!("  - {alias} -> {target}");
        }
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let config = if let Some(config_path) = &args.config {
        if !std::path::Path::new(config_path).exists() {
            return Err(CliError::ConfigLoad(format!("{config_path} does not exist")));
        }
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::load_from_user_config()
    };

    apply_overrides(args, config)
}

/// Applies command-line overrides on top of an already loaded configuration
pub fn apply_overrides(
    args: &Args,
    mut config: SimulationConfig,
) -> Result<SimulationConfig, CliError> {
    if let Some(gravity) = args.gravity {
        println!("Overriding gravity to: {gravity}");
        config.physics.gravity = gravity;
    }

    if let Some(length1) = args.length1 {
        println!("Overriding upper rod length to: {length1}");
        config.physics.length1 = length1;
    }

    if let Some(length2) = args.length2 {
        println!("Overriding lower rod length to: {length2}");
        config.physics.length2 = length2;
    }

    if let Some(mass1) = args.mass1 {
        println!("Overriding upper mass to: {mass1}");
        config.physics.mass1 = mass1;
    }

    if let Some(mass2) = args.mass2 {
        println!("Overriding lower mass to: {mass2}");
        config.physics.mass2 = mass2;
    }

    if let Some(damping) = args.damping {
        println!("Overriding damping to: {damping}");
        config.physics.damping = damping;
    }

    if let Some(integrator_type) = &args.integrator {
        // Validate integrator name against registry
        let registry = IntegratorRegistry::new().with_standard_integrators();
        registry
            .create(integrator_type)
            .map_err(CliError::InvalidIntegrator)?;

        println!("Using integrator: {integrator_type}");
        config.integrator.integrator_type = integrator_type.clone();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "pendulum",
            "-g",
            "20",
            "--mass2",
            "2.5",
            "--damping",
            "1.0",
            "-i",
            "heun",
            "--paused",
        ])
        .unwrap();

        assert_eq!(args.gravity, Some(20.0));
        assert_eq!(args.mass2, Some(2.5));
        assert!(args.paused);
        assert!(!args.verbose);

        let config = apply_overrides(&args, SimulationConfig::default()).unwrap();
        assert_eq!(config.physics.gravity, 20.0);
        assert_eq!(config.physics.mass2, 2.5);
        assert_eq!(config.physics.mass1, 1.0);
        assert_eq!(config.physics.damping, 1.0);
        assert_eq!(config.integrator.integrator_type, "heun");
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let args = Args::try_parse_from(["pendulum"]).unwrap();

        let config = apply_overrides(&args, SimulationConfig::default()).unwrap();

        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_alias_is_accepted() {
        let args = Args {
            integrator: Some("runge_kutta_4".to_string()),
            ..Args::default()
        };

        let config = apply_overrides(&args, SimulationConfig::default()).unwrap();

        assert_eq!(config.integrator.integrator_type, "runge_kutta_4");
    }

    #[test]
    fn test_unknown_integrator_is_rejected() {
        let args = Args {
            integrator: Some("leapfrog".to_string()),
            ..Args::default()
        };

        let err = apply_overrides(&args, SimulationConfig::default()).unwrap_err();

        assert!(matches!(err, CliError::InvalidIntegrator(_)));
        assert!(err.to_string().contains("leapfrog"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args {
            config: Some("/nonexistent/pendulum/config.toml".to_string()),
            ..Args::default()
        };

        let err = load_and_apply_config(&args).unwrap_err();

        assert!(matches!(err, CliError::ConfigLoad(_)));
    }
}
