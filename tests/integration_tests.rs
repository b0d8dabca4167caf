use geo::{MultiPolygon, Polygon, Rect, polygon};
use tzlocate::{
    AmbiguityPolicy, Config, Containment, RegionStore, Resolution, Resolver, ResolverBuilder,
};

fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon<f64> {
    Rect::new((min_x, min_y), (max_x, max_y)).to_polygon()
}

/// Four quadrant zones around the origin plus an island in the north-east.
fn quadrants() -> Resolver {
    ResolverBuilder::new()
        .region(rect(-10.0, 0.0, 0.0, 10.0), "Zone/NorthWest")
        .unwrap()
        .region(rect(0.0, 0.0, 10.0, 10.0), "Zone/NorthEast")
        .unwrap()
        .region(rect(-10.0, -10.0, 0.0, 0.0), "Zone/SouthWest")
        .unwrap()
        .region(rect(0.0, -10.0, 10.0, 0.0), "Zone/SouthEast")
        .unwrap()
        .region(rect(20.0, 20.0, 22.0, 22.0), "Zone/Island")
        .unwrap()
        .build()
        .expect("Failed to build resolver")
}

#[test]
fn test_square_scenario() {
    let mut store = RegionStore::new();
    store
        .add(
            polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 10.0), (x: 10.0, y: 10.0), (x: 10.0, y: 0.0)],
            "Zone/A",
        )
        .expect("Failed to add region");
    let resolver = Resolver::new(store, Config::default()).expect("Failed to build resolver");

    assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/A"));
    assert_eq!(resolver.resolve(-1.0, -1.0), Resolution::NoMatch);
}

#[test]
fn test_quadrant_interiors() {
    let resolver = quadrants();

    assert_eq!(resolver.resolve(5.0, -5.0), Resolution::zone("Zone/NorthWest"));
    assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/NorthEast"));
    assert_eq!(resolver.resolve(-5.0, -5.0), Resolution::zone("Zone/SouthWest"));
    assert_eq!(resolver.resolve(-5.0, 5.0), Resolution::zone("Zone/SouthEast"));
    assert_eq!(resolver.resolve(21.0, 21.0), Resolution::zone("Zone/Island"));
}

#[test]
fn test_shared_corner_touches_four_zones() {
    let resolver = quadrants();

    let resolution = resolver.resolve(0.0, 0.0);
    assert_eq!(
        resolution,
        Resolution::ambiguous([
            "Zone/NorthEast",
            "Zone/NorthWest",
            "Zone/SouthEast",
            "Zone/SouthWest"
        ])
    );

    let report = resolver.resolve_detailed(0.0, 0.0);
    assert_eq!(report.candidates, 4);
    assert_eq!(report.matches.len(), 4);
    assert!(report.faults.is_empty());
    assert!(
        report
            .matches
            .iter()
            .all(|m| m.containment == Containment::Boundary)
    );
}

#[test]
fn test_outside_every_envelope() {
    let resolver = quadrants();

    assert!(resolver.candidates(50.0, 50.0).is_empty());
    assert_eq!(resolver.resolve(50.0, 50.0), Resolution::NoMatch);

    let report = resolver.resolve_detailed(50.0, 50.0);
    assert_eq!(report.candidates, 0);
    assert!(report.matches.is_empty());
}

#[test]
fn test_gap_between_regions() {
    // Between the quadrants and the island: inside the index bounds,
    // outside every region envelope
    let resolver = quadrants();
    assert_eq!(resolver.resolve(15.0, 15.0), Resolution::NoMatch);
}

#[test]
fn test_policies_on_overlap() {
    let regions = vec![
        (rect(0.0, 0.0, 100.0, 100.0), "Zone/Wide"),
        (rect(10.0, 10.0, 20.0, 20.0), "Zone/Narrow"),
    ];

    let report_all = ResolverBuilder::new()
        .regions(regions.clone())
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        report_all.resolve(15.0, 15.0),
        Resolution::ambiguous(["Zone/Narrow", "Zone/Wide"])
    );

    let first = ResolverBuilder::new()
        .ambiguity_policy(AmbiguityPolicy::PreferFirstLoaded)
        .regions(regions.clone())
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(first.resolve(15.0, 15.0), Resolution::zone("Zone/Wide"));

    let smallest = ResolverBuilder::new()
        .ambiguity_policy(AmbiguityPolicy::PreferSmallestArea)
        .regions(regions)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(smallest.resolve(15.0, 15.0), Resolution::zone("Zone/Narrow"));

    // Policies only apply to ambiguity
    for resolver in [&report_all, &first, &smallest] {
        assert_eq!(resolver.resolve(50.0, 50.0), Resolution::zone("Zone/Wide"));
        assert_eq!(resolver.resolve(500.0, 500.0), Resolution::NoMatch);
    }
}

#[test]
fn test_multipart_zone_across_antimeridian() {
    let fiji = MultiPolygon::new(vec![
        rect(177.0, -20.0, 180.0, -15.0),
        rect(-180.0, -20.0, -178.0, -15.0),
    ]);
    let resolver = ResolverBuilder::new()
        .geographic_bounds(true)
        .region(fiji, "Pacific/Fiji")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(resolver.resolve(-17.0, 178.0), Resolution::zone("Pacific/Fiji"));
    assert_eq!(resolver.resolve(-17.0, -179.0), Resolution::zone("Pacific/Fiji"));
    assert_eq!(resolver.resolve(-17.0, 180.0), Resolution::zone("Pacific/Fiji"));
    // Inside the combined envelope, between the parts
    assert_eq!(resolver.resolve(-17.0, 0.0), Resolution::NoMatch);

    assert!(resolver.try_resolve(-17.0, 181.0).is_err());
}

#[test]
fn test_idempotent_queries() {
    let resolver = quadrants();

    for &(lat, lng) in &[(5.0, 5.0), (0.0, 0.0), (0.0, 5.0), (50.0, 50.0), (21.0, 21.0)] {
        let first = resolver.resolve(lat, lng);
        for _ in 0..5 {
            assert_eq!(resolver.resolve(lat, lng), first);
        }
        assert_eq!(resolver.resolve_detailed(lat, lng).resolution, first);
    }
}

#[test]
fn test_zone_interning() {
    let resolver = ResolverBuilder::new()
        .region(rect(0.0, 0.0, 1.0, 1.0), "Europe/Berlin")
        .unwrap()
        .region(rect(1.0, 0.0, 2.0, 1.0), "Europe/Berlin")
        .unwrap()
        .region(rect(2.0, 0.0, 3.0, 1.0), "Europe/Prague")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(resolver.store().len(), 3);
    assert_eq!(resolver.store().zones(), vec!["Europe/Berlin", "Europe/Prague"]);

    // Internal border of one zone
    assert_eq!(resolver.resolve(0.5, 1.0), Resolution::zone("Europe/Berlin"));
    // Border between two zones
    assert_eq!(
        resolver.resolve(0.5, 2.0),
        Resolution::ambiguous(["Europe/Berlin", "Europe/Prague"])
    );
}

#[test]
fn test_config_file_drives_resolver() {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    write!(
        file,
        r#"{{"node_capacity": 4, "ambiguity_policy": "prefer_smallest_area"}}"#
    )
    .unwrap();

    let config = Config::load(file.path()).expect("Failed to load config");
    let resolver = ResolverBuilder::new()
        .config(config)
        .regions(vec![
            (rect(0.0, 0.0, 10.0, 10.0), "Zone/Outer"),
            (rect(4.0, 4.0, 6.0, 6.0), "Zone/Inner"),
        ])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(resolver.index().node_capacity(), 4);
    assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/Inner"));
}
