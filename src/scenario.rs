//! Seeded synthesis of incidents and resources around a center point.
//!
//! All randomness flows through a caller-provided [`Rng`]; [`Scenario::generate`]
//! uses `ChaCha8Rng` so a seed yields the same scenario on every platform.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::allocator::{allocate, AllocationOutcome};
use crate::error::Result;
use crate::models::{Incident, Resource, KIND_MEDICAL};
use crate::settings::SimulationConfig;
use crate::validation::{validate_inputs, ValidationError};

pub fn generate_incidents<R: Rng>(config: &SimulationConfig, rng: &mut R) -> Vec<Incident> {
    (0..config.incident_count)
        .map(|i| {
            let (lat, lon) = jitter(config.center_lat, config.center_lon, config.incident_spread, rng);
            let severity = rng.gen_range(config.severity_min..=config.severity_max);
            Incident {
                id: i as u32 + 1,
                lat,
                lon,
                severity: (severity * 10.0).round() / 10.0,
                demand: rng.gen_range(config.demand_min..=config.demand_max),
            }
        })
        .collect()
}

pub fn generate_resources<R: Rng>(config: &SimulationConfig, rng: &mut R) -> Vec<Resource> {
    (0..config.resource_count)
        .map(|i| {
            let (lat, lon) = jitter(config.center_lat, config.center_lon, config.resource_spread, rng);
            let capacity = rng.gen_range(config.capacity_min..=config.capacity_max);
            let kind = config
                .resource_kinds
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| KIND_MEDICAL.to_string());
            Resource {
                id: i as u32 + 1,
                lat,
                lon,
                capacity,
                kind,
            }
        })
        .collect()
}

fn jitter<R: Rng>(lat: f64, lon: f64, spread: f64, rng: &mut R) -> (f64, f64) {
    let lat = (lat + rng.gen_range(-spread..=spread)).clamp(-90.0, 90.0);
    let lon = (lon + rng.gen_range(-spread..=spread)).clamp(-180.0, 180.0);
    (lat, lon)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub incidents: Vec<Incident>,
    pub resources: Vec<Resource>,
}

impl Scenario {
    pub fn new(incidents: Vec<Incident>, resources: Vec<Resource>) -> Self {
        Self { incidents, resources }
    }

    pub fn generate(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let incidents = generate_incidents(config, &mut rng);
        let resources = generate_resources(config, &mut rng);
        info!(
            seed = config.seed,
            incidents = incidents.len(),
            resources = resources.len(),
            "scenario generated"
        );
        Ok(Self { incidents, resources })
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_inputs(&self.incidents, &self.resources)
    }

    /// Runs the allocator, leaving post-allocation capacities in `self.resources`.
    pub fn allocate(&mut self) -> AllocationOutcome {
        allocate(&self.incidents, &mut self.resources)
    }
}
