use drros::geo::{haversine_km, round_km, GeoPoint, EARTH_RADIUS_KM};

#[test]
fn same_point_is_zero_distance() {
    assert_eq!(haversine_km(28.61, 77.20, 28.61, 77.20), 0.0);
}

#[test]
fn one_degree_of_latitude_matches_arc_length() {
    let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
    let distance = haversine_km(0.0, 0.0, 1.0, 0.0);
    assert!((distance - expected).abs() < 1e-9);
}

#[test]
fn distance_is_symmetric_and_non_negative() {
    let a = GeoPoint::new(28.45, 77.02);
    let b = GeoPoint::new(19.07, 72.88);
    let ab = a.distance_km(&b);
    let ba = b.distance_km(&a);
    assert!(ab > 0.0);
    assert!((ab - ba).abs() < 1e-9);
}

#[test]
fn antipodal_points_are_half_circumference() {
    let distance = haversine_km(0.0, 0.0, 0.0, 180.0);
    assert!((distance - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
}

#[test]
fn rounding_keeps_two_decimals() {
    assert_eq!(round_km(157.2494), 157.25);
    assert_eq!(round_km(0.004), 0.0);
    assert_eq!(round_km(12.0), 12.0);
}

#[test]
fn near_antipodal_pairs_stay_finite() {
    let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;
    let mut lat = -89.5;
    while lat <= 89.5 {
        let mut lon = -180.0;
        while lon <= 180.0 {
            let partner_lon = if lon > 0.0 { lon - 180.0 } else { lon + 180.0 };
            let distance = haversine_km(lat, lon, -lat, partner_lon);
            assert!(distance.is_finite(), "({lat}, {lon}) gave {distance}");
            assert!(distance >= 0.0);
            assert!(distance <= half_circumference + 1e-6);
            lon += 2.5;
        }
        lat += 0.5;
    }
}

#[test]
fn polar_antipodes_are_half_circumference() {
    let distance = haversine_km(-87.5, 0.0, 87.5, -180.0);
    assert!((distance - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 0.01);
}
