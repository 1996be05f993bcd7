use serde_json::Value;

use drros::contracts::{REQUIRED_INCIDENT_FIELDS, REQUIRED_RECORD_FIELDS, REQUIRED_RESOURCE_FIELDS};
use drros::models::{AllocationRecord, Incident, Resource};

fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default();
    keys.sort();
    keys
}

fn sorted(fields: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
    out.sort();
    out
}

#[test]
fn serialized_entities_match_field_contracts() {
    let incident = Incident { id: 1, lat: 1.0, lon: 2.0, severity: 3.0, demand: 4 };
    let resource = Resource { id: 2, lat: 1.0, lon: 2.0, capacity: 5, kind: "Rescue Team".into() };
    let record = AllocationRecord { incident_id: 1, resource_id: 2, units_assigned: 4, distance_km: 0.0 };

    assert_eq!(keys(&serde_json::to_value(&incident).unwrap()), sorted(REQUIRED_INCIDENT_FIELDS));
    assert_eq!(keys(&serde_json::to_value(&resource).unwrap()), sorted(REQUIRED_RESOURCE_FIELDS));
    assert_eq!(keys(&serde_json::to_value(&record).unwrap()), sorted(REQUIRED_RECORD_FIELDS));
}

#[test]
fn resource_kind_reads_from_type_field() {
    let resource: Resource =
        serde_json::from_str(r#"{"id":3,"lat":28.6,"lon":77.2,"capacity":6,"type":"Truck"}"#).unwrap();
    assert_eq!(resource.kind, "Truck");
    assert_eq!(resource.capacity, 6);
}
