use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use drros::scenario::{generate_incidents, generate_resources, Scenario};
use drros::SimulationConfig;

#[test]
fn generated_entities_respect_configured_ranges() {
    let config = SimulationConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let incidents = generate_incidents(&config, &mut rng);
    assert_eq!(incidents.len(), 10);
    for (i, inc) in incidents.iter().enumerate() {
        assert_eq!(inc.id, i as u32 + 1);
        assert!((inc.lat - config.center_lat).abs() <= config.incident_spread + 1e-9);
        assert!((inc.lon - config.center_lon).abs() <= config.incident_spread + 1e-9);
        assert!((3.0..=10.0).contains(&inc.severity));
        assert_eq!((inc.severity * 10.0).round() / 10.0, inc.severity);
        assert!((1..=5).contains(&inc.demand));
    }

    let resources = generate_resources(&config, &mut rng);
    assert_eq!(resources.len(), 6);
    for res in &resources {
        assert!((res.lat - config.center_lat).abs() <= config.resource_spread + 1e-9);
        assert!((3..=8).contains(&res.capacity));
        assert!(config.resource_kinds.contains(&res.kind));
    }
}

#[test]
fn generated_scenario_passes_validation() {
    let scenario = Scenario::generate(&SimulationConfig::default()).unwrap();
    assert!(scenario.validate().is_ok());
}

#[test]
fn invalid_config_is_refused() {
    let config = SimulationConfig { resource_kinds: Vec::new(), ..SimulationConfig::default() };
    assert!(Scenario::generate(&config).is_err());
}

#[test]
fn allocation_updates_scenario_resources() {
    let mut scenario = Scenario::generate(&SimulationConfig { seed: 99, ..SimulationConfig::default() }).unwrap();
    let before: u32 = scenario.resources.iter().map(|r| r.capacity).sum();

    let outcome = scenario.allocate();

    let after: u32 = scenario.resources.iter().map(|r| r.capacity).sum();
    assert_eq!((before - after) as u64, outcome.units_assigned());
}

#[test]
fn zero_spread_places_everything_at_center() {
    let config = SimulationConfig {
        incident_spread: 0.0,
        resource_spread: 0.0,
        ..SimulationConfig::default()
    };
    let mut scenario = Scenario::generate(&config).unwrap();
    assert!(scenario.incidents.iter().all(|i| i.lat == config.center_lat && i.lon == config.center_lon));

    let outcome = scenario.allocate();
    assert!(outcome.records.iter().all(|r| r.distance_km == 0.0));
}
