// tests/fleet_test.rs
//
// Library-level scenarios across the public API.

use sonarcheck::{
    cavitation_contribution, compare_all, loudest, quietest, signal_to_noise_ratio, snr_series,
    source_level, transmission_loss, DetectionModel, FleetAnalysis, PropagationConfig,
    SonarError, VesselCatalog, VesselClass, VesselProfileBuilder,
};

fn seawolf_reference() -> sonarcheck::VesselProfile {
    VesselProfileBuilder::new("Seawolf")
        .resting_level(94.0)
        .cavitation_threshold_speed(20.0)
        .noise_scaling_exponent(2.3)
        .cavitation_growth_rate(2.5)
        .cavitation_scale(0.1)
        .build()
        .unwrap()
}

#[test]
fn test_seawolf_one_knot_over_threshold() {
    let profile = seawolf_reference();
    assert!((cavitation_contribution(21.0, &profile).unwrap() - 0.1).abs() < 1e-12);

    let expected = 94.0 + 10.0 * (1.0 + (21.0f64 / 20.0).powf(2.3)).log10() + 0.1;
    let level = source_level(21.0, &profile).unwrap();
    assert!((level - expected).abs() < 1e-9);
    assert!((level - 97.36).abs() < 0.01);
}

#[test]
fn test_one_kilometre_transmission_loss() {
    assert!((transmission_loss(1000.0).unwrap() - 60.04).abs() < 1e-9);
}

#[test]
fn test_empty_catalog_extrema() {
    let empty = VesselCatalog::new(Vec::new()).unwrap();
    assert!(matches!(
        loudest(10.0, 1000.0, 50.0, &empty),
        Err(SonarError::EmptyCatalog)
    ));
    assert!(matches!(
        quietest(10.0, 1000.0, 50.0, &empty),
        Err(SonarError::EmptyCatalog)
    ));
}

#[test]
fn test_thousand_sample_series() {
    let catalog = VesselCatalog::standard();
    let profile = catalog.get("seawolf").unwrap();
    let series = snr_series(10.0, 1000.0, 50.0, profile, 1000).unwrap();
    assert_eq!(series.len(), 1000);
    assert_eq!(series.first().unwrap().distance, 1.0);
    assert_eq!(series.last().unwrap().distance, 1000.0);
}

#[test]
fn test_extrema_agree_with_comparison() {
    let catalog = VesselCatalog::standard();
    for speed in [0.0, 6.0, 14.0, 22.0, 30.0] {
        let all = compare_all(speed, 3000.0, 55.0, &catalog).unwrap();
        let max = all.iter().map(|v| v.snr_db).fold(f64::NEG_INFINITY, f64::max);
        let min = all.iter().map(|v| v.snr_db).fold(f64::INFINITY, f64::min);

        let loud = loudest(speed, 3000.0, 55.0, &catalog).unwrap();
        let quiet = quietest(speed, 3000.0, 55.0, &catalog).unwrap();
        assert_eq!(loud.snr_db, max);
        assert_eq!(quiet.snr_db, min);

        // First entry holding the extreme value
        let first_max = all.iter().find(|v| v.snr_db == max).unwrap();
        assert_eq!(loud.name, first_max.name);
        assert_ne!(loud.name, quiet.name);
    }
}

#[test]
fn test_ambient_shift_moves_every_vessel_equally() {
    let catalog = VesselCatalog::standard();
    let quiet_sea = compare_all(12.0, 2000.0, 40.0, &catalog).unwrap();
    let loud_sea = compare_all(12.0, 2000.0, 52.5, &catalog).unwrap();
    for (a, b) in quiet_sea.iter().zip(&loud_sea) {
        assert_eq!(a.name, b.name);
        assert!((a.snr_db - b.snr_db - 12.5).abs() < 1e-9);
    }
}

#[test]
fn test_shallow_water_analysis() {
    let catalog = VesselCatalog::standard();
    let shallow = FleetAnalysis::new(DetectionModel::new(PropagationConfig::shallow_water()));
    let open = FleetAnalysis::default();

    let a = open.compare_all(8.0, 10_000.0, 60.0, &catalog).unwrap();
    let b = shallow.compare_all(8.0, 10_000.0, 60.0, &catalog).unwrap();
    for (o, s) in a.iter().zip(&b) {
        assert!((s.snr_db - o.snr_db - 40.0).abs() < 1e-9);
    }
}

#[test]
fn test_catalog_shared_across_threads() {
    let catalog = std::sync::Arc::new(VesselCatalog::standard());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let catalog = catalog.clone();
            std::thread::spawn(move || {
                let profile = catalog.get("Ohio").unwrap();
                signal_to_noise_ratio(5.0 + i as f64, 1000.0, 50.0, profile).unwrap()
            })
        })
        .collect();
    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_reference_class_profile_lookup() {
    let catalog = VesselCatalog::standard();
    assert_eq!(catalog.get("OHIO").unwrap(), &VesselClass::Ohio.profile());
}
