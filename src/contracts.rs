pub const REQUIRED_INCIDENT_FIELDS: &[&str] = &["id", "lat", "lon", "severity", "demand"];

pub const REQUIRED_RESOURCE_FIELDS: &[&str] = &["id", "lat", "lon", "capacity", "type"];

pub const REQUIRED_RECORD_FIELDS: &[&str] = &[
    "incident_id",
    "resource_id",
    "units_assigned",
    "distance_km",
];
