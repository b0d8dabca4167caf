//! Resolver builder for loading regions and configuration in one chain.
//!
//! Loaders that stream regions from an external source can choose between
//! aborting on the first bad record ([`ResolverBuilder::regions`]) and
//! skipping bad records with a [`LoadReport`]
//! ([`ResolverBuilder::regions_lenient`]).

use crate::config::{AmbiguityPolicy, Config};
use crate::error::{Result, TzError};
use crate::resolver::Resolver;
use crate::store::{RegionHandle, RegionStore};
use geo::MultiPolygon;

/// Summary of a lenient bulk load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Regions admitted to the store
    pub admitted: usize,
    /// Rejected records as `(position in input, error)`
    pub rejected: Vec<(usize, TzError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Builder for a [`Resolver`].
///
/// # Examples
///
/// ```
/// use tzlocate::{AmbiguityPolicy, Resolution, ResolverBuilder};
/// use geo::Rect;
///
/// let resolver = ResolverBuilder::new()
///     .ambiguity_policy(AmbiguityPolicy::PreferSmallestArea)
///     .region(Rect::new((0.0, 0.0), (10.0, 10.0)).to_polygon(), "Zone/Outer")?
///     .region(Rect::new((4.0, 4.0), (6.0, 6.0)).to_polygon(), "Zone/Inner")?
///     .build()?;
///
/// assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/Inner"));
/// # Ok::<(), tzlocate::TzError>(())
/// ```
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    store: RegionStore,
    config: Config,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing store.
    pub fn from_store(store: RegionStore) -> Self {
        Self {
            store,
            config: Config::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the index node capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 2`.
    pub fn node_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_node_capacity(capacity);
        self
    }

    pub fn ambiguity_policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.config = self.config.with_ambiguity_policy(policy);
        self
    }

    pub fn geographic_bounds(mut self, enabled: bool) -> Self {
        self.config = self.config.with_geographic_bounds(enabled);
        self
    }

    /// Add one region.
    pub fn region(mut self, geometry: impl Into<MultiPolygon<f64>>, zone_id: &str) -> Result<Self> {
        self.store.add(geometry, zone_id)?;
        Ok(self)
    }

    /// Add many regions, stopping at the first rejected record.
    pub fn regions<I, G, S>(mut self, regions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (G, S)>,
        G: Into<MultiPolygon<f64>>,
        S: AsRef<str>,
    {
        for (geometry, zone_id) in regions {
            self.store.add(geometry, zone_id.as_ref())?;
        }
        Ok(self)
    }

    /// Add many regions, skipping rejected records.
    pub fn regions_lenient<I, G, S>(&mut self, regions: I) -> LoadReport
    where
        I: IntoIterator<Item = (G, S)>,
        G: Into<MultiPolygon<f64>>,
        S: AsRef<str>,
    {
        let mut report = LoadReport::default();

        for (position, (geometry, zone_id)) in regions.into_iter().enumerate() {
            match self.store.add(geometry, zone_id.as_ref()) {
                Ok(_) => report.admitted += 1,
                Err(e) => {
                    log::debug!("Skipping region at position {}: {}", position, e);
                    report.rejected.push((position, e));
                }
            }
        }

        if !report.is_clean() {
            log::info!(
                "Lenient load admitted {} regions, rejected {}",
                report.admitted,
                report.rejected.len()
            );
        }
        report
    }

    /// Add one region in place, returning its handle.
    pub fn add_region(
        &mut self,
        geometry: impl Into<MultiPolygon<f64>>,
        zone_id: &str,
    ) -> Result<RegionHandle> {
        self.store.add(geometry, zone_id)
    }

    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    /// Freeze the loaded regions and build the index.
    pub fn build(self) -> Result<Resolver> {
        Resolver::new(self.store, self.config)
    }
}
