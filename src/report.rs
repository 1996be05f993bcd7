use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::allocator::AllocationOutcome;
use crate::error::Result;
use crate::models::{AllocationRecord, Incident, Resource, UnmetDemand};
use crate::statistics::RunSummary;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub incidents: Vec<Incident>,
    pub resources: Vec<Resource>,
    pub allocations: Vec<AllocationRecord>,
    pub unmet: Vec<UnmetDemand>,
    pub summary: RunSummary,
}

impl RunReport {
    /// `resources` should carry post-allocation capacities.
    pub fn new(incidents: &[Incident], resources: &[Resource], outcome: &AllocationOutcome) -> Self {
        Self {
            incidents: incidents.to_vec(),
            resources: resources.to_vec(),
            allocations: outcome.records.clone(),
            unmet: outcome.unmet.clone(),
            summary: RunSummary::from_run(incidents, outcome),
        }
    }
}

pub fn render_json(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_report(report: &RunReport) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, report)?;
    Ok(out)
}

fn write_report(out: &mut String, report: &RunReport) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "==============================")?;
    writeln!(out, "   DRROS SIMULATION RESULTS")?;
    writeln!(out, "==============================")?;
    writeln!(out)?;

    writeln!(out, "INCIDENTS:")?;
    for inc in &report.incidents {
        writeln!(
            out,
            "ID {} | Lat {:.4} | Lon {:.4} | Severity {:.1} | Demand {}",
            inc.id, inc.lat, inc.lon, inc.severity, inc.demand
        )?;
    }
    writeln!(out)?;

    writeln!(out, "RESOURCES (Post Allocation):")?;
    for res in &report.resources {
        writeln!(
            out,
            "ID {} | Lat {:.4} | Lon {:.4} | Left {} | Type {}",
            res.id, res.lat, res.lon, res.capacity, res.kind
        )?;
    }
    writeln!(out)?;

    writeln!(out, "ALLOCATIONS MADE:")?;
    if report.allocations.is_empty() {
        writeln!(out, "No allocations were made.")?;
    } else {
        for a in &report.allocations {
            writeln!(
                out,
                "Incident {} <-- {} units -- Resource {} (Distance: {:.2} km)",
                a.incident_id, a.units_assigned, a.resource_id, a.distance_km
            )?;
        }
    }

    if !report.unmet.is_empty() {
        writeln!(out)?;
        writeln!(out, "UNMET DEMAND:")?;
        for u in &report.unmet {
            writeln!(
                out,
                "Incident {} | Requested {} | Unmet {}",
                u.incident_id, u.requested, u.unmet
            )?;
        }
    }

    let summary = &report.summary;
    writeln!(out)?;
    writeln!(
        out,
        "Assigned {} of {} units ({:.1}% filled), mean distance {:.2} km",
        summary.total_assigned,
        summary.total_demand,
        summary.fill_ratio * 100.0,
        summary.mean_distance_km
    )?;
    writeln!(out)?;
    writeln!(out, "Simulation Complete.")?;
    Ok(())
}
