pub mod allocator;
pub mod contracts;
pub mod error;
pub mod geo;
pub mod models;
pub mod report;
pub mod scenario;
pub mod settings;
pub mod statistics;
pub mod telemetry;
pub mod validation;

pub use allocator::{allocate, allocate_resources, AllocationOutcome, CapacityLedger};
pub use settings::SimulationConfig;
pub use error::{Error, Result};
pub use geo::{haversine_km, GeoPoint};
pub use models::{AllocationRecord, Incident, Resource, UnmetDemand};
pub use scenario::Scenario;
