use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

pub const KIND_MEDICAL: &str = "Medical";
pub const KIND_RESCUE_TEAM: &str = "Rescue Team";
pub const KIND_TRUCK: &str = "Truck";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: u32,
    pub lat: f64,
    pub lon: f64,
    pub severity: f64,
    pub demand: u32,
}

impl Incident {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// A pool of assignable units. `kind` is advisory and never affects scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub lat: f64,
    pub lon: f64,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Resource {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    pub incident_id: u32,
    pub resource_id: u32,
    pub units_assigned: u32,
    pub distance_km: f64,
}

/// Demand left over once every candidate resource was exhausted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmetDemand {
    pub incident_id: u32,
    pub requested: u32,
    pub unmet: u32,
}
