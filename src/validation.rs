//! Boundary checks for caller-supplied incidents and resources.
//!
//! The allocator itself accepts anything; inputs coming from files or other
//! drivers should pass through [`validate_inputs`] first.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Incident, Resource};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{entity} {id} has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinate {
        entity: &'static str,
        id: u32,
        lat: f64,
        lon: f64,
    },

    #[error("incident {id} has invalid severity {severity}")]
    InvalidSeverity { id: u32, severity: f64 },

    #[error("incident {id} has zero demand")]
    ZeroDemand { id: u32 },

    #[error("duplicate incident id: {0}")]
    DuplicateIncident(u32),

    #[error("duplicate resource id: {0}")]
    DuplicateResource(u32),
}

pub fn valid_coordinate(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

pub fn validate_incident(incident: &Incident) -> Result<(), ValidationError> {
    if !valid_coordinate(incident.lat, incident.lon) {
        return Err(ValidationError::InvalidCoordinate {
            entity: "incident",
            id: incident.id,
            lat: incident.lat,
            lon: incident.lon,
        });
    }
    if !incident.severity.is_finite() || incident.severity <= 0.0 {
        return Err(ValidationError::InvalidSeverity {
            id: incident.id,
            severity: incident.severity,
        });
    }
    if incident.demand == 0 {
        return Err(ValidationError::ZeroDemand { id: incident.id });
    }
    Ok(())
}

/// Zero capacity is allowed; such resources are simply never scored.
pub fn validate_resource(resource: &Resource) -> Result<(), ValidationError> {
    if !valid_coordinate(resource.lat, resource.lon) {
        return Err(ValidationError::InvalidCoordinate {
            entity: "resource",
            id: resource.id,
            lat: resource.lat,
            lon: resource.lon,
        });
    }
    Ok(())
}

pub fn validate_inputs(incidents: &[Incident], resources: &[Resource]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for incident in incidents {
        validate_incident(incident)?;
        if !seen.insert(incident.id) {
            return Err(ValidationError::DuplicateIncident(incident.id));
        }
    }

    let mut seen = HashSet::new();
    for resource in resources {
        validate_resource(resource)?;
        if !seen.insert(resource.id) {
            return Err(ValidationError::DuplicateResource(resource.id));
        }
    }
    Ok(())
}
