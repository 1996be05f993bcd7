use serde::{Deserialize, Serialize};

use crate::allocator::AllocationOutcome;
use crate::models::Incident;

/// Nearest-rank percentile; `pct` is clamped to 0..=100.
pub fn percentile(values: &[f64], pct: u32) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut ordered = values.to_vec();
    ordered.sort_by(|a, b| a.total_cmp(b));
    let pct = pct.min(100) as usize;
    if pct == 0 {
        return ordered[0];
    }
    let index = (pct * ordered.len()).div_ceil(100).saturating_sub(1);
    ordered[index]
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_demand: u64,
    pub total_assigned: u64,
    pub total_unmet: u64,
    pub fill_ratio: f64,
    pub incidents_fully_served: usize,
    pub incidents_unserved: usize,
    pub mean_distance_km: f64,
    pub p90_distance_km: f64,
    pub max_distance_km: f64,
}

impl RunSummary {
    pub fn from_run(incidents: &[Incident], outcome: &AllocationOutcome) -> Self {
        let total_demand: u64 = incidents.iter().map(|i| i.demand as u64).sum();
        let total_assigned = outcome.units_assigned();
        let total_unmet: u64 = outcome.unmet.iter().map(|u| u.unmet as u64).sum();
        let fill_ratio = if total_demand == 0 {
            0.0
        } else {
            total_assigned as f64 / total_demand as f64
        };

        let distances: Vec<f64> = outcome.records.iter().map(|r| r.distance_km).collect();
        let incidents_unserved = outcome.unmet.iter().filter(|u| u.unmet == u.requested).count();

        Self {
            total_demand,
            total_assigned,
            total_unmet,
            fill_ratio,
            incidents_fully_served: incidents.len().saturating_sub(outcome.unmet.len()),
            incidents_unserved,
            mean_distance_km: mean(&distances),
            p90_distance_km: percentile(&distances, 90),
            max_distance_km: distances.iter().copied().fold(0.0, f64::max),
        }
    }
}
