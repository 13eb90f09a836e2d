use crate::physics::dynamics::{PendulumDynamics, PhysicalParameters};
use crate::physics::math::{Scalar, Vector};
use crate::physics::state::PendulumState;
use crate::physics::stepper::FixedStepper;
use crate::physics::trajectory::TrajectoryBuffer;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENVIRONMENT_PREFIX: &str = "PENDULUM";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub integrator: IntegratorConfig,
    pub trails: TrailConfig,
    pub rendering: RenderingConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: Scalar,
    pub length1: Scalar,
    pub length2: Scalar,
    pub mass1: Scalar,
    pub mass2: Scalar,
    /// Multiplier on the angular-velocity terms of each derivative evaluation
    pub damping: Scalar,
    pub initial_theta1_degrees: Scalar,
    pub initial_theta2_degrees: Scalar,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let parameters = PhysicalParameters::default();

        Self {
            gravity: parameters.gravity,
            length1: parameters.length1,
            length2: parameters.length2,
            mass1: parameters.mass1,
            mass2: parameters.mass2,
            damping: PendulumDynamics::DEFAULT_DAMPING,
            initial_theta1_degrees: 120.0,
            initial_theta2_degrees: -10.0,
        }
    }
}

impl PhysicsConfig {
    pub fn parameters(&self) -> PhysicalParameters {
        PhysicalParameters {
            gravity: self.gravity,
            length1: self.length1,
            length2: self.length2,
            mass1: self.mass1,
            mass2: self.mass2,
        }
    }

    pub fn dynamics(&self) -> PendulumDynamics {
        PendulumDynamics::new(self.parameters(), self.damping)
    }

    pub fn initial_state(&self) -> PendulumState {
        PendulumState::at_rest_degrees(self.initial_theta1_degrees, self.initial_theta2_degrees)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct IntegratorConfig {
    /// Name or alias from the integrator registry
    pub integrator_type: String,
    pub substep_rate_hz: Scalar,
    pub max_substeps_per_frame: usize,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            integrator_type: "rk4".to_string(),
            substep_rate_hz: FixedStepper::DEFAULT_SUBSTEP_RATE_HZ,
            max_substeps_per_frame: FixedStepper::DEFAULT_MAX_SUBSTEPS_PER_FRAME,
        }
    }
}

impl IntegratorConfig {
    pub fn stepper(&self) -> FixedStepper {
        FixedStepper::from_rate(self.substep_rate_hz, self.max_substeps_per_frame)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    pub enabled: bool,
    pub max_points: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_points: TrajectoryBuffer::DEFAULT_CAPACITY,
        }
    }
}

/// Screen-space layout; y grows downward from the top-left corner.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderingConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub pivot_x: Scalar,
    pub pivot_y: Scalar,
    pub pivot_radius: f32,
    pub mass_radius: f32,
    pub show_hud: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            pivot_x: 400.0,
            pivot_y: 300.0,
            pivot_radius: 4.0,
            mass_radius: 8.0,
            show_hud: true,
        }
    }
}

impl RenderingConfig {
    pub fn pivot(&self) -> Vector {
        Vector::new(self.pivot_x, self.pivot_y)
    }
}

impl SimulationConfig {
    /// Location of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pendulum")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the per-user configuration, falling back to defaults
    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(path),
            None => {
                info!("No user configuration directory available. Using defaults.");
                Self::load_layered(None).unwrap_or_default()
            }
        }
    }

    /// Load configuration from a file, falling back to defaults if the file
    /// doesn't exist or can't be parsed.
    ///
    /// Environment variables such as `PENDULUM_PHYSICS__GRAVITY` override
    /// values from the file.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file {} not found. Using defaults.", path.display());
        }

        match Self::load_layered(Some(path)) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config file {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    fn load_layered(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            );
        }

        builder
            .add_source(
                ::config::Environment::with_prefix(ENVIRONMENT_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
