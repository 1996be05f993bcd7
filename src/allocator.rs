use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::geo::round_km;
use crate::models::{AllocationRecord, Incident, Resource, UnmetDemand};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    pub records: Vec<AllocationRecord>,
    pub unmet: Vec<UnmetDemand>,
}

impl AllocationOutcome {
    pub fn is_fully_served(&self) -> bool {
        self.unmet.is_empty()
    }

    pub fn units_assigned(&self) -> u64 {
        self.records.iter().map(|r| r.units_assigned as u64).sum()
    }
}

/// A resource scored against one incident.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub index: usize,
    pub resource_id: u32,
    pub distance_km: f64,
    pub score: f64,
}

/// Remaining capacity per resource position for the duration of one run.
///
/// The engine draws from the ledger instead of the resource records and
/// writes the final counters back with [`CapacityLedger::commit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityLedger {
    remaining: Vec<u32>,
}

impl CapacityLedger {
    pub fn from_resources(resources: &[Resource]) -> Self {
        Self {
            remaining: resources.iter().map(|r| r.capacity).collect(),
        }
    }

    pub fn remaining(&self, index: usize) -> u32 {
        self.remaining.get(index).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.remaining.iter().map(|c| *c as u64).sum()
    }

    /// Draws up to `units` from the resource at `index`, returning what was taken.
    pub fn take(&mut self, index: usize, units: u32) -> u32 {
        match self.remaining.get_mut(index) {
            Some(capacity) => {
                let taken = units.min(*capacity);
                *capacity -= taken;
                taken
            }
            None => 0,
        }
    }

    pub fn commit(self, resources: &mut [Resource]) {
        for (resource, capacity) in resources.iter_mut().zip(self.remaining) {
            resource.capacity = capacity;
        }
    }

    fn rank(&self, incident: &Incident, resources: &[Resource]) -> Vec<Candidate> {
        let origin = incident.location();
        let mut candidates: Vec<Candidate> = resources
            .iter()
            .enumerate()
            .filter(|(index, _)| self.remaining(*index) > 0)
            .map(|(index, resource)| {
                let distance_km = origin.distance_km(&resource.location());
                Candidate {
                    index,
                    resource_id: resource.id,
                    distance_km,
                    score: score(incident.severity, distance_km),
                }
            })
            .collect();

        // sort_by is stable: equal scores keep resource input order
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates
    }
}

pub fn score(severity: f64, distance_km: f64) -> f64 {
    severity / (1.0 + distance_km)
}

/// Orders incidents by descending severity, then descending demand, keeping
/// input order among equal keys.
pub fn prioritize_incidents(incidents: &[Incident]) -> Vec<&Incident> {
    let mut ordered: Vec<&Incident> = incidents.iter().collect();
    ordered.sort_by(|a, b| {
        b.severity
            .total_cmp(&a.severity)
            .then_with(|| b.demand.cmp(&a.demand))
    });
    ordered
}

/// Resources with remaining capacity, best score first.
pub fn rank_candidates(incident: &Incident, resources: &[Resource]) -> Vec<Candidate> {
    CapacityLedger::from_resources(resources).rank(incident, resources)
}

pub fn allocate(incidents: &[Incident], resources: &mut [Resource]) -> AllocationOutcome {
    let mut ledger = CapacityLedger::from_resources(resources);
    let mut outcome = AllocationOutcome::default();

    for incident in prioritize_incidents(incidents) {
        let mut remaining = incident.demand;

        for candidate in ledger.rank(incident, resources) {
            if remaining == 0 {
                break;
            }
            let assigned = ledger.take(candidate.index, remaining);
            if assigned == 0 {
                continue;
            }
            remaining -= assigned;

            let record = AllocationRecord {
                incident_id: incident.id,
                resource_id: candidate.resource_id,
                units_assigned: assigned,
                distance_km: round_km(candidate.distance_km),
            };
            debug!(
                incident_id = record.incident_id,
                resource_id = record.resource_id,
                units = record.units_assigned,
                distance_km = record.distance_km,
                "units assigned"
            );
            outcome.records.push(record);
        }

        if remaining > 0 {
            warn!(
                incident_id = incident.id,
                requested = incident.demand,
                unmet = remaining,
                "demand left unserved"
            );
            outcome.unmet.push(UnmetDemand {
                incident_id: incident.id,
                requested: incident.demand,
                unmet: remaining,
            });
        }
    }

    info!(
        incidents = incidents.len(),
        resources = resources.len(),
        records = outcome.records.len(),
        unserved = outcome.unmet.len(),
        capacity_left = ledger.total(),
        "allocation run complete"
    );
    ledger.commit(resources);
    outcome
}

/// Greedy allocation returning only the record log. Capacities in
/// `resources` are reduced by what was assigned.
pub fn allocate_resources(incidents: &[Incident], resources: &mut [Resource]) -> Vec<AllocationRecord> {
    allocate(incidents, resources).records
}

pub fn unallocated_units(incidents: &[Incident], records: &[AllocationRecord]) -> u64 {
    let requested: u64 = incidents.iter().map(|item| item.demand as u64).sum();
    let assigned: u64 = records.iter().map(|item| item.units_assigned as u64).sum();
    requested.saturating_sub(assigned)
}
