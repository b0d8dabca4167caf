//! Two-stage point-to-zone resolution.
//!
//! 1. **Envelope stage**: the [`SpatialIndex`] returns every region whose
//!    bounding box contains the point. Cheap, and never misses a region.
//! 2. **Exact stage**: each candidate's rings are tested with a closed
//!    point-in-polygon rule. Candidates whose geometry cannot be tested are
//!    skipped and reported, never fatal.
//!
//! The distinct zone ids that survive stage 2 are then reduced by the
//! configured [`AmbiguityPolicy`]. Several regions of the *same* zone
//! matching (multi-part zones, shared internal borders) is a single-zone
//! answer, not an ambiguity.
//!
//! A built [`Resolver`] is immutable, `Send` and `Sync`; share it behind an
//! `Arc` and query from any number of threads.

use crate::compute::spatial::containment::Containment;
use crate::compute::validation::{validate_finite, validate_geographic};
use crate::config::{AmbiguityPolicy, Config};
use crate::error::{GeometryFault, Result, TzError};
use crate::index::{IndexStats, SpatialIndex};
use crate::store::{Region, RegionHandle, RegionStore};
use geo::Coord;
use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tzlocate_types::coordinate::LatLng;

/// Outcome of resolving one coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Exactly one zone contains the point.
    Zone(Arc<str>),
    /// Several distinct zones contain the point, sorted by id.
    Ambiguous(BTreeSet<Arc<str>>),
    /// No zone contains the point.
    NoMatch,
}

impl Resolution {
    /// Convenience constructor, mostly for comparisons in tests.
    pub fn zone(zone_id: &str) -> Self {
        Resolution::Zone(Arc::from(zone_id))
    }

    /// Convenience constructor, mostly for comparisons in tests.
    pub fn ambiguous<'a, I>(zone_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Resolution::Ambiguous(zone_ids.into_iter().map(Arc::from).collect())
    }

    /// The zone id when the answer is unambiguous.
    pub fn zone_id(&self) -> Option<&str> {
        match self {
            Resolution::Zone(zone_id) => Some(zone_id),
            _ => None,
        }
    }

    /// Every zone id in the answer; empty for [`Resolution::NoMatch`].
    pub fn zone_ids(&self) -> Vec<&str> {
        match self {
            Resolution::Zone(zone_id) => vec![zone_id.as_ref()],
            Resolution::Ambiguous(zone_ids) => zone_ids.iter().map(|z| z.as_ref()).collect(),
            Resolution::NoMatch => Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Resolution::NoMatch)
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Resolution::Ambiguous(_))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Zone(zone_id) => f.write_str(zone_id),
            Resolution::Ambiguous(zone_ids) => {
                f.write_str("ambiguous(")?;
                for (i, zone_id) in zone_ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(zone_id)?;
                }
                f.write_str(")")
            }
            Resolution::NoMatch => f.write_str("no match"),
        }
    }
}

/// A candidate that passed the exact test.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMatch {
    pub handle: RegionHandle,
    pub zone_id: Arc<str>,
    /// Interior, or on an edge/vertex
    pub containment: Containment,
}

/// A candidate excluded because its geometry cannot be tested.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFault {
    pub handle: RegionHandle,
    pub zone_id: Arc<str>,
    pub fault: GeometryFault,
}

/// Resolution plus the evidence it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionReport {
    pub resolution: Resolution,
    /// Regions whose envelope contained the point
    pub candidates: usize,
    /// Candidates that passed the exact test, ordered by handle
    pub matches: Vec<ZoneMatch>,
    /// Candidates skipped because their geometry is untestable
    pub faults: Vec<CandidateFault>,
}

type Matches = SmallVec<[(RegionHandle, Containment); 4]>;

/// Immutable resolver over a frozen region store and its index.
#[derive(Debug)]
pub struct Resolver {
    store: RegionStore,
    index: SpatialIndex,
    config: Config,
}

impl Resolver {
    /// Freeze `store` and build its index.
    ///
    /// An empty store is allowed; every query then resolves to
    /// [`Resolution::NoMatch`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tzlocate::{Config, RegionStore, Resolution, Resolver};
    /// use geo::polygon;
    ///
    /// let mut store = RegionStore::new();
    /// store.add(
    ///     polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 10.0), (x: 10.0, y: 10.0), (x: 10.0, y: 0.0)],
    ///     "Zone/A",
    /// )?;
    ///
    /// let resolver = Resolver::new(store, Config::default())?;
    /// assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/A"));
    /// assert_eq!(resolver.resolve(-1.0, -1.0), Resolution::NoMatch);
    /// # Ok::<(), tzlocate::TzError>(())
    /// ```
    pub fn new(store: RegionStore, config: Config) -> Result<Self> {
        config.validate().map_err(TzError::InvalidConfig)?;
        if config.has_large_node_capacity() {
            log::warn!(
                "Node capacity of {} is very large; every leaf visit scans up to {} envelopes",
                config.node_capacity,
                config.node_capacity
            );
        }

        let started = Instant::now();
        let index = SpatialIndex::from_store(&store, config.node_capacity);

        if store.is_empty() {
            log::warn!("Built timezone index over zero regions; every query will return no match");
        } else {
            log::info!(
                "Built timezone index: {} regions, {} zones, {} nodes, height {} in {:?}",
                store.len(),
                store.zone_count(),
                index.node_count(),
                index.height(),
                started.elapsed()
            );
        }

        let faulty = store.iter().filter(|(_, r)| r.fault().is_some()).count();
        if faulty > 0 {
            log::warn!(
                "{} regions have untestable geometry and will be skipped at query time",
                faulty
            );
        }

        Ok(Self {
            store,
            index,
            config,
        })
    }

    /// Resolve a latitude/longitude pair.
    ///
    /// Non-finite input resolves to [`Resolution::NoMatch`]; use
    /// [`try_resolve`](Self::try_resolve) to have it rejected instead.
    pub fn resolve(&self, latitude: f64, longitude: f64) -> Resolution {
        self.resolve_coord(LatLng::new(latitude, longitude).to_coord())
    }

    pub fn resolve_latlng(&self, position: LatLng) -> Resolution {
        self.resolve_coord(position.to_coord())
    }

    /// Resolve a planar coordinate (`x = longitude`, `y = latitude`).
    pub fn resolve_coord(&self, coord: Coord<f64>) -> Resolution {
        let candidates = self.index.query_coord(coord);
        let matches = self.exact_matches(coord, &candidates, |handle, region, fault| {
            log_fault(coord, handle, region, &fault);
        });
        self.apply_policy(&matches)
    }

    /// Validate the coordinate, then resolve it.
    ///
    /// # Errors
    ///
    /// [`TzError::InvalidCoordinate`] for non-finite input, or for
    /// out-of-range input when [`Config::geographic_bounds`] is set.
    pub fn try_resolve(&self, latitude: f64, longitude: f64) -> Result<Resolution> {
        let position = LatLng::new(latitude, longitude);
        if self.config.geographic_bounds {
            validate_geographic(&position)?;
        } else {
            validate_finite(&position)?;
        }
        Ok(self.resolve_latlng(position))
    }

    /// Resolve and report candidates, matches and faults.
    pub fn resolve_detailed(&self, latitude: f64, longitude: f64) -> ResolutionReport {
        let coord = LatLng::new(latitude, longitude).to_coord();
        let candidates = self.index.query_coord(coord);

        let mut faults = Vec::new();
        let mut matches = self.exact_matches(coord, &candidates, |handle, region, fault| {
            log_fault(coord, handle, region, &fault);
            faults.push(CandidateFault {
                handle,
                zone_id: Arc::clone(region.zone_id_shared()),
                fault,
            });
        });
        matches.sort_unstable_by_key(|(handle, _)| *handle);
        faults.sort_unstable_by_key(|f| f.handle);

        let resolution = self.apply_policy(&matches);
        let matches = matches
            .iter()
            .filter_map(|&(handle, containment)| {
                self.store.get(handle).map(|region| ZoneMatch {
                    handle,
                    zone_id: Arc::clone(region.zone_id_shared()),
                    containment,
                })
            })
            .collect();

        ResolutionReport {
            resolution,
            candidates: candidates.len(),
            matches,
            faults,
        }
    }

    /// Envelope-stage candidates only; no exact test.
    pub fn candidates(&self, latitude: f64, longitude: f64) -> Vec<RegionHandle> {
        self.index.query_point(longitude, latitude).into_vec()
    }

    pub fn region(&self, handle: RegionHandle) -> Option<&Region> {
        self.store.get(handle)
    }

    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Candidates passing the exact test. Faulty candidates go to `on_fault`.
    fn exact_matches<F>(
        &self,
        coord: Coord<f64>,
        candidates: &[RegionHandle],
        mut on_fault: F,
    ) -> Matches
    where
        F: FnMut(RegionHandle, &Region, GeometryFault),
    {
        let mut matches = Matches::new();

        for handle in candidates.iter().copied() {
            let Some(region) = self.store.get(handle) else {
                continue;
            };
            match region.locate(coord) {
                Ok(containment) if containment.is_inside() => matches.push((handle, containment)),
                Ok(_) => {}
                Err(fault) => on_fault(handle, region, fault),
            }
        }

        log::trace!(
            "Query ({}, {}): {} candidates, {} exact matches",
            coord.y,
            coord.x,
            candidates.len(),
            matches.len()
        );
        matches
    }

    fn apply_policy(&self, matches: &[(RegionHandle, Containment)]) -> Resolution {
        let zone_of = |handle: RegionHandle| self.store.get(handle).map(Region::zone_id_shared);

        let Some(first) = matches.first().and_then(|&(handle, _)| zone_of(handle)) else {
            return Resolution::NoMatch;
        };
        if matches
            .iter()
            .all(|&(handle, _)| zone_of(handle).is_some_and(|z| z == first))
        {
            return Resolution::Zone(Arc::clone(first));
        }

        let chosen = match self.config.ambiguity_policy {
            AmbiguityPolicy::ReportAll => None,
            AmbiguityPolicy::PreferFirstLoaded => matches.iter().map(|&(handle, _)| handle).min(),
            AmbiguityPolicy::PreferSmallestArea => matches
                .iter()
                .filter_map(|&(handle, _)| self.store.get(handle).map(|r| (handle, r.area())))
                .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
                .map(|(handle, _)| handle),
        };

        if let Some(zone_id) = chosen.and_then(zone_of) {
            return Resolution::Zone(Arc::clone(zone_id));
        }

        let zone_ids: BTreeSet<Arc<str>> = matches
            .iter()
            .filter_map(|&(handle, _)| zone_of(handle).cloned())
            .collect();
        log::debug!(
            "Ambiguous resolution: {} zones contain the point ({:?})",
            zone_ids.len(),
            zone_ids
        );
        Resolution::Ambiguous(zone_ids)
    }
}

fn log_fault(coord: Coord<f64>, handle: RegionHandle, region: &Region, fault: &GeometryFault) {
    log::warn!(
        "Skipping region {} ({}) for query ({}, {}): {}",
        handle,
        region.zone_id(),
        coord.y,
        coord.x,
        fault
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, MultiPolygon, Polygon, polygon};

    fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon<f64> {
        polygon![
            (x: min_x, y: min_y),
            (x: min_x, y: max_y),
            (x: max_x, y: max_y),
            (x: max_x, y: min_y),
        ]
    }

    fn resolver_with(regions: Vec<(Polygon<f64>, &str)>, config: Config) -> Resolver {
        let mut store = RegionStore::new();
        for (polygon, zone_id) in regions {
            store.add(polygon, zone_id).unwrap();
        }
        Resolver::new(store, config).unwrap()
    }

    fn resolver(regions: Vec<(Polygon<f64>, &str)>) -> Resolver {
        resolver_with(regions, Config::default())
    }

    #[test]
    fn test_single_square() {
        let resolver = resolver(vec![(rect(0.0, 0.0, 10.0, 10.0), "Zone/A")]);

        assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/A"));
        assert_eq!(resolver.resolve(-1.0, -1.0), Resolution::NoMatch);
    }

    #[test]
    fn test_latitude_is_y_and_longitude_is_x() {
        // Tall thin strip: x in [0, 1], y in [0, 50]
        let resolver = resolver(vec![(rect(0.0, 0.0, 1.0, 50.0), "Zone/Strip")]);

        assert_eq!(resolver.resolve(40.0, 0.5), Resolution::zone("Zone/Strip"));
        assert_eq!(resolver.resolve(0.5, 40.0), Resolution::NoMatch);
    }

    #[test]
    fn test_overlapping_regions_are_ambiguous() {
        let resolver = resolver(vec![
            (rect(0.0, 0.0, 5.0, 5.0), "Zone/A"),
            (rect(2.0, 2.0, 8.0, 8.0), "Zone/B"),
        ]);

        assert_eq!(
            resolver.resolve(3.0, 3.0),
            Resolution::ambiguous(["Zone/A", "Zone/B"])
        );
        assert_eq!(resolver.resolve(1.0, 1.0), Resolution::zone("Zone/A"));
        assert_eq!(resolver.resolve(7.0, 7.0), Resolution::zone("Zone/B"));
    }

    #[test]
    fn test_shared_edge_is_ambiguous() {
        let resolver = resolver(vec![
            (rect(0.0, 0.0, 10.0, 10.0), "Zone/West"),
            (rect(10.0, 0.0, 20.0, 10.0), "Zone/East"),
        ]);

        // longitude 10 is the shared edge
        let resolution = resolver.resolve(5.0, 10.0);
        assert_eq!(resolution, Resolution::ambiguous(["Zone/East", "Zone/West"]));

        let report = resolver.resolve_detailed(5.0, 10.0);
        assert!(report
            .matches
            .iter()
            .all(|m| m.containment == Containment::Boundary));
    }

    #[test]
    fn test_candidate_without_exact_match() {
        // Right triangle occupying the lower-right half of its envelope
        let triangle = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0)];
        let resolver = resolver(vec![(triangle, "Zone/T")]);

        assert_eq!(resolver.candidates(9.0, 1.0).len(), 1);
        assert_eq!(resolver.resolve(9.0, 1.0), Resolution::NoMatch);
        assert_eq!(resolver.resolve(1.0, 9.0), Resolution::zone("Zone/T"));

        let report = resolver.resolve_detailed(9.0, 1.0);
        assert_eq!(report.candidates, 1);
        assert!(report.matches.is_empty());
        assert_eq!(report.resolution, Resolution::NoMatch);
    }

    #[test]
    fn test_same_zone_twice_is_not_ambiguous() {
        let resolver = resolver(vec![
            (rect(0.0, 0.0, 10.0, 10.0), "America/Chicago"),
            (rect(10.0, 0.0, 20.0, 10.0), "America/Chicago"),
        ]);

        assert_eq!(resolver.resolve(5.0, 10.0), Resolution::zone("America/Chicago"));
    }

    #[test]
    fn test_point_in_hole_resolves_to_enclave() {
        let outer = Polygon::new(
            rect(0.0, 0.0, 10.0, 10.0).exterior().clone(),
            vec![rect(4.0, 4.0, 6.0, 6.0).exterior().clone()],
        );
        let resolver = resolver(vec![
            (outer, "Zone/Outer"),
            (rect(4.0, 4.0, 6.0, 6.0), "Zone/Enclave"),
        ]);

        assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/Enclave"));
        assert_eq!(resolver.resolve(2.0, 2.0), Resolution::zone("Zone/Outer"));
    }

    #[test]
    fn test_faulty_candidate_is_isolated() {
        let mut store = RegionStore::new();
        store.add(rect(0.0, 0.0, 10.0, 10.0), "Zone/Good").unwrap();
        let broken = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 10.0), (0.0, 0.0)]),
            vec![],
        );
        let broken_handle = store.add(broken, "Zone/Broken").unwrap();
        let resolver = Resolver::new(store, Config::default()).unwrap();

        assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/Good"));

        let report = resolver.resolve_detailed(5.0, 5.0);
        assert_eq!(report.candidates, 2);
        assert_eq!(report.resolution, Resolution::zone("Zone/Good"));
        assert_eq!(report.faults.len(), 1);
        assert_eq!(report.faults[0].handle, broken_handle);
        assert_eq!(report.faults[0].zone_id.as_ref(), "Zone/Broken");
    }

    #[test]
    fn test_back_and_forth_spike_is_faulty() {
        let mut store = RegionStore::new();
        store.add(rect(0.0, 0.0, 10.0, 10.0), "Zone/Good").unwrap();
        let spike = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 10.0), (0.0, 0.0), (10.0, 10.0), (0.0, 0.0)]),
            vec![],
        );
        let spike_handle = store.add(spike, "Zone/Spike").unwrap();
        assert!(store.get(spike_handle).unwrap().fault().is_some());
        let resolver = Resolver::new(store, Config::default()).unwrap();

        // (5, 5) lies on the spike's segment
        assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/Good"));

        let report = resolver.resolve_detailed(5.0, 5.0);
        assert_eq!(report.resolution, Resolution::zone("Zone/Good"));
        assert_eq!(report.faults.len(), 1);
        assert_eq!(report.faults[0].handle, spike_handle);
    }

    #[test]
    fn test_detailed_report_counts_match_candidates() {
        let resolver = resolver(vec![
            (rect(0.0, 0.0, 10.0, 10.0), "Zone/A"),
            (rect(5.0, 5.0, 15.0, 15.0), "Zone/B"),
            (polygon![(x: 0.0, y: 0.0), (x: 20.0, y: 0.0), (x: 20.0, y: 20.0)], "Zone/T"),
        ]);

        for &(lat, lng) in &[(7.0, 7.0), (12.0, 2.0), (2.0, 12.0), (30.0, 30.0)] {
            let candidates = resolver.candidates(lat, lng);
            let report = resolver.resolve_detailed(lat, lng);

            assert_eq!(report.candidates, candidates.len());
            assert!(report.matches.len() <= report.candidates);
            assert!(report.matches.iter().all(|m| candidates.contains(&m.handle)));
            assert_eq!(report.resolution, resolver.resolve(lat, lng));
        }
    }

    #[test]
    fn test_prefer_first_loaded() {
        let config = Config::default().with_ambiguity_policy(AmbiguityPolicy::PreferFirstLoaded);
        let resolver = resolver_with(
            vec![
                (rect(2.0, 2.0, 8.0, 8.0), "Zone/B"),
                (rect(0.0, 0.0, 5.0, 5.0), "Zone/A"),
            ],
            config,
        );

        assert_eq!(resolver.resolve(3.0, 3.0), Resolution::zone("Zone/B"));
    }

    #[test]
    fn test_prefer_smallest_area() {
        let config = Config::default().with_ambiguity_policy(AmbiguityPolicy::PreferSmallestArea);
        let resolver = resolver_with(
            vec![
                (rect(0.0, 0.0, 100.0, 100.0), "Zone/Big"),
                (rect(40.0, 40.0, 45.0, 45.0), "Zone/Small"),
            ],
            config,
        );

        assert_eq!(resolver.resolve(42.0, 42.0), Resolution::zone("Zone/Small"));
        assert_eq!(resolver.resolve(10.0, 10.0), Resolution::zone("Zone/Big"));
    }

    #[test]
    fn test_try_resolve_validation() {
        let planar = resolver(vec![(rect(0.0, 0.0, 500.0, 500.0), "Zone/Planar")]);
        assert_eq!(
            planar.try_resolve(250.0, 250.0).unwrap(),
            Resolution::zone("Zone/Planar")
        );
        assert!(matches!(
            planar.try_resolve(f64::NAN, 1.0),
            Err(TzError::InvalidCoordinate(_))
        ));

        let geographic = resolver_with(
            vec![(rect(-10.0, -10.0, 10.0, 10.0), "Etc/Test")],
            Config::default().with_geographic_bounds(true),
        );
        assert!(geographic.try_resolve(0.0, 0.0).is_ok());
        assert!(matches!(
            geographic.try_resolve(91.0, 0.0),
            Err(TzError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_nan_resolves_to_no_match() {
        let resolver = resolver(vec![(rect(0.0, 0.0, 10.0, 10.0), "Zone/A")]);
        assert_eq!(resolver.resolve(f64::NAN, 5.0), Resolution::NoMatch);
    }

    #[test]
    fn test_empty_store() {
        let resolver = Resolver::new(RegionStore::new(), Config::default()).unwrap();
        assert_eq!(resolver.resolve(0.0, 0.0), Resolution::NoMatch);
        assert!(resolver.candidates(0.0, 0.0).is_empty());
        assert_eq!(resolver.stats().entries, 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            node_capacity: 1,
            ..Config::default()
        };
        assert!(matches!(
            Resolver::new(RegionStore::new(), config),
            Err(TzError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_large_capacity_from_json_still_resolves() {
        let config = Config::from_json(r#"{"node_capacity": 100000}"#).unwrap();
        assert!(config.has_large_node_capacity());

        let resolver = resolver_with(
            vec![
                (rect(0.0, 0.0, 10.0, 10.0), "Zone/A"),
                (rect(10.0, 0.0, 20.0, 10.0), "Zone/B"),
            ],
            config,
        );
        assert_eq!(resolver.index().node_capacity(), 100000);
        assert_eq!(resolver.index().height(), 1);
        assert_eq!(resolver.resolve(5.0, 15.0), Resolution::zone("Zone/B"));
    }

    #[test]
    fn test_multipolygon_region() {
        let mut store = RegionStore::new();
        let islands = MultiPolygon::new(vec![rect(0.0, 0.0, 1.0, 1.0), rect(5.0, 5.0, 6.0, 6.0)]);
        store.add(islands, "Pacific/Islands").unwrap();
        let resolver = Resolver::new(store, Config::default()).unwrap();

        assert_eq!(resolver.resolve(5.5, 5.5), Resolution::zone("Pacific/Islands"));
        assert_eq!(resolver.candidates(3.0, 3.0).len(), 1);
        assert_eq!(resolver.resolve(3.0, 3.0), Resolution::NoMatch);
    }

    #[test]
    fn test_resolution_accessors_and_display() {
        let zone = Resolution::zone("Europe/Paris");
        assert_eq!(zone.zone_id(), Some("Europe/Paris"));
        assert_eq!(zone.to_string(), "Europe/Paris");
        assert!(zone.is_match() && !zone.is_ambiguous());

        let ambiguous = Resolution::ambiguous(["B", "A"]);
        assert_eq!(ambiguous.zone_ids(), vec!["A", "B"]);
        assert_eq!(ambiguous.zone_id(), None);
        assert_eq!(ambiguous.to_string(), "ambiguous(A, B)");

        assert_eq!(Resolution::NoMatch.to_string(), "no match");
        assert!(Resolution::NoMatch.zone_ids().is_empty());
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Resolver>();
    }
}
