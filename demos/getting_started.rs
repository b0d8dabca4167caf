//! Walkthrough of loading timezone regions and resolving coordinates.
//!
//! Run with: RUST_LOG=debug cargo run --example getting_started

use geo::{MultiPolygon, Rect};
use tzlocate::{AmbiguityPolicy, Config, Resolution, ResolverBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== tzlocate getting started ===\n");

    // Coarse, made-up boxes; real data would come from a boundary file
    let regions = vec![
        (Rect::new((-10.0, 35.0), (3.0, 44.0)).to_polygon(), "Europe/Madrid"),
        (Rect::new((3.0, 42.0), (8.0, 51.0)).to_polygon(), "Europe/Paris"),
        (Rect::new((8.0, 45.0), (17.0, 55.0)).to_polygon(), "Europe/Berlin"),
        (Rect::new((12.0, 41.0), (14.0, 43.0)).to_polygon(), "Europe/Rome"),
    ];

    println!("1. Building a resolver over {} regions", regions.len());
    let mut builder = ResolverBuilder::new().config(Config::default().with_node_capacity(4));
    let report = builder.regions_lenient(regions);
    println!("   admitted {}, rejected {}", report.admitted, report.rejected.len());

    let resolver = builder.build()?;
    let stats = resolver.stats();
    println!(
        "   index: {} entries, {} nodes, height {}\n",
        stats.entries, stats.nodes, stats.height
    );

    println!("2. Resolving single points");
    for (name, lat, lng) in [
        ("Madrid", 40.4, -3.7),
        ("Lyon", 45.76, 4.84),
        ("Berlin", 52.5, 13.4),
        ("Mid-Atlantic", 40.0, -40.0),
    ] {
        println!("   {:<14} -> {}", name, resolver.resolve(lat, lng));
    }

    println!("\n3. Borders");
    let border = resolver.resolve(43.0, 3.0);
    println!("   (43.0, 3.0)    -> {}", border);
    if let Resolution::Ambiguous(zones) = &border {
        println!("   {} zones share this border", zones.len());
    }

    println!("\n4. Detailed report");
    let detailed = resolver.resolve_detailed(48.0, 8.0);
    println!(
        "   (48.0, 8.0): {} candidates, {} matches -> {}",
        detailed.candidates,
        detailed.matches.len(),
        detailed.resolution
    );
    for m in &detailed.matches {
        println!("     {} {} ({:?})", m.handle, m.zone_id, m.containment);
    }

    println!("\n5. Preferring the smallest region on overlap");
    let resolver = ResolverBuilder::new()
        .ambiguity_policy(AmbiguityPolicy::PreferSmallestArea)
        .region(
            MultiPolygon::new(vec![Rect::new((6.0, 36.0), (19.0, 47.0)).to_polygon()]),
            "Europe/Rome",
        )?
        .region(Rect::new((12.4, 41.89), (12.46, 41.91)).to_polygon(), "Europe/Vatican")?
        .build()?;
    println!("   (41.9, 12.45)  -> {}", resolver.resolve(41.9, 12.45));
    println!("   (45.0, 10.0)   -> {}", resolver.resolve(45.0, 10.0));

    println!("\n6. Validated input");
    let strict = ResolverBuilder::new()
        .geographic_bounds(true)
        .region(Rect::new((-180.0, -90.0), (180.0, 90.0)).to_polygon(), "Etc/UTC")?
        .build()?;
    match strict.try_resolve(95.0, 0.0) {
        Ok(resolution) => println!("   (95.0, 0.0)   -> {}", resolution),
        Err(e) => println!("   (95.0, 0.0)   -> rejected: {}", e),
    }

    println!("\n=== done ===");
    Ok(())
}
