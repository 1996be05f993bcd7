use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{KIND_MEDICAL, KIND_RESCUE_TEAM, KIND_TRUCK};

pub const ENV_PREFIX: &str = "DRROS";
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_CENTER: (f64, f64) = (28.61, 77.20);

/// Parameters of one simulation run: scenario synthesis plus the seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    pub incident_count: usize,
    pub resource_count: usize,
    pub center_lat: f64,
    pub center_lon: f64,
    pub incident_spread: f64,
    pub resource_spread: f64,
    pub severity_min: f64,
    pub severity_max: f64,
    pub demand_min: u32,
    pub demand_max: u32,
    pub capacity_min: u32,
    pub capacity_max: u32,
    pub resource_kinds: Vec<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            incident_count: 10,
            resource_count: 6,
            center_lat: DEFAULT_CENTER.0,
            center_lon: DEFAULT_CENTER.1,
            incident_spread: 0.3,
            resource_spread: 0.4,
            severity_min: 3.0,
            severity_max: 10.0,
            demand_min: 1,
            demand_max: 5,
            capacity_min: 3,
            capacity_max: 8,
            resource_kinds: vec![
                KIND_MEDICAL.to_string(),
                KIND_RESCUE_TEAM.to_string(),
                KIND_TRUCK.to_string(),
            ],
        }
    }
}

impl SimulationConfig {
    /// Layers defaults, an optional config file and `DRROS_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings = builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?;

        let config: SimulationConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.center_lat.is_finite() || !(-90.0..=90.0).contains(&self.center_lat) {
            return Err(Error::InvalidConfig(format!("center_lat out of range: {}", self.center_lat)));
        }
        if !self.center_lon.is_finite() || !(-180.0..=180.0).contains(&self.center_lon) {
            return Err(Error::InvalidConfig(format!("center_lon out of range: {}", self.center_lon)));
        }
        for (name, spread) in [("incident_spread", self.incident_spread), ("resource_spread", self.resource_spread)] {
            if !spread.is_finite() || spread < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be non-negative, got {spread}")));
            }
        }
        if !self.severity_min.is_finite() || self.severity_min <= 0.0 || self.severity_min > self.severity_max {
            return Err(Error::InvalidConfig(format!(
                "severity range {}..={} is invalid",
                self.severity_min, self.severity_max
            )));
        }
        if !self.severity_max.is_finite() {
            return Err(Error::InvalidConfig("severity_max must be finite".to_string()));
        }
        if self.demand_min == 0 || self.demand_min > self.demand_max {
            return Err(Error::InvalidConfig(format!(
                "demand range {}..={} is invalid",
                self.demand_min, self.demand_max
            )));
        }
        if self.capacity_min > self.capacity_max {
            return Err(Error::InvalidConfig(format!(
                "capacity range {}..={} is invalid",
                self.capacity_min, self.capacity_max
            )));
        }
        if self.resource_kinds.is_empty() {
            return Err(Error::InvalidConfig("resource_kinds is empty".to_string()));
        }
        Ok(())
    }
}
