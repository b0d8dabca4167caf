//! Region store: the single owner of every timezone polygon.
//!
//! Regions are admitted once, during loading, and never change afterwards.
//! Everything downstream (the spatial index, the resolver) refers to regions
//! through copyable [`RegionHandle`]s. Building a [`Resolver`](crate::Resolver)
//! consumes the store, which is what freezes it.

use crate::compute::spatial::containment::{self, Containment};
use crate::compute::validation::{validate_envelope, validate_zone_id};
use crate::error::{GeometryFault, Result, TzError};
use crate::index::IndexEntry;
use geo::{Area, BoundingRect, Coord, Geometry, MultiPolygon};
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::Arc;
use tzlocate_types::envelope::Envelope;

/// Non-owning reference to a region in a [`RegionStore`].
///
/// Handles are dense and assigned in admission order, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionHandle(pub(crate) usize);

impl RegionHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RegionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A timezone polygon with its zone identifier and cached envelope.
#[derive(Debug, Clone)]
pub struct Region {
    geometry: MultiPolygon<f64>,
    zone_id: Arc<str>,
    envelope: Envelope,
    fault: Option<GeometryFault>,
}

impl Region {
    /// Polygon parts in `(x = longitude, y = latitude)` order.
    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    pub(crate) fn zone_id_shared(&self) -> &Arc<str> {
        &self.zone_id
    }

    /// Bounding box covering the whole geometry.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Why the exact test is undefined for this region, if it is.
    pub fn fault(&self) -> Option<&GeometryFault> {
        self.fault.as_ref()
    }

    /// Exact closed containment test.
    ///
    /// Fails with the cached fault when the geometry cannot be tested.
    pub fn locate(&self, coord: Coord<f64>) -> std::result::Result<Containment, GeometryFault> {
        match &self.fault {
            Some(fault) => Err(fault.clone()),
            None => Ok(containment::locate(&self.geometry, coord)),
        }
    }

    /// Unsigned planar area, in squared coordinate units.
    pub fn area(&self) -> f64 {
        self.geometry.unsigned_area()
    }
}

/// Owns all regions and interns their zone identifiers.
#[derive(Debug, Default)]
pub struct RegionStore {
    regions: Vec<Region>,
    zone_ids: FxHashSet<Arc<str>>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            regions: Vec::with_capacity(capacity),
            zone_ids: FxHashSet::default(),
        }
    }

    /// Admit a region, computing its envelope from the geometry.
    ///
    /// # Errors
    ///
    /// * [`TzError::MissingZoneId`] if `zone_id` is empty or whitespace
    /// * [`TzError::EmptyGeometry`] if the geometry has no coordinates
    /// * [`TzError::InvalidEnvelope`] if the computed bounds are not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use tzlocate::RegionStore;
    /// use geo::polygon;
    ///
    /// let mut store = RegionStore::new();
    /// let square = polygon![(x: 0.0, y: 0.0), (x: 0.0, y: 10.0), (x: 10.0, y: 10.0), (x: 10.0, y: 0.0)];
    /// let handle = store.add(square, "Zone/A")?;
    /// assert_eq!(store.get(handle).unwrap().zone_id(), "Zone/A");
    /// # Ok::<(), tzlocate::TzError>(())
    /// ```
    pub fn add(
        &mut self,
        geometry: impl Into<MultiPolygon<f64>>,
        zone_id: &str,
    ) -> Result<RegionHandle> {
        let zone_id = validate_zone_id(zone_id)?;
        let geometry = geometry.into();
        let envelope = computed_envelope(&geometry, zone_id)?;
        validate_envelope(zone_id, &envelope)?;

        Ok(self.admit(geometry, zone_id, envelope))
    }

    /// Admit a region with an envelope supplied by the loader.
    ///
    /// The supplied envelope is cached as-is, so it may be looser than the
    /// geometry's own bounds but never tighter.
    ///
    /// # Errors
    ///
    /// Everything [`add`](Self::add) returns, plus
    /// [`TzError::InvalidEnvelope`] for `min > max` or non-finite bounds and
    /// [`TzError::EnvelopeMismatch`] when the envelope does not cover the
    /// geometry.
    pub fn add_with_envelope(
        &mut self,
        geometry: impl Into<MultiPolygon<f64>>,
        zone_id: &str,
        envelope: Envelope,
    ) -> Result<RegionHandle> {
        let zone_id = validate_zone_id(zone_id)?;
        validate_envelope(zone_id, &envelope)?;

        let geometry = geometry.into();
        let actual = computed_envelope(&geometry, zone_id)?;
        if !envelope.contains_envelope(&actual) {
            return Err(TzError::EnvelopeMismatch {
                zone_id: zone_id.to_string(),
                supplied: envelope,
                actual,
            });
        }

        Ok(self.admit(geometry, zone_id, envelope))
    }

    /// Admit a region from a generic `geo::Geometry`.
    ///
    /// Accepts `Polygon`, `MultiPolygon`, `Rect` and `Triangle`.
    pub fn add_geometry(&mut self, geometry: Geometry<f64>, zone_id: &str) -> Result<RegionHandle> {
        match geometry {
            Geometry::Polygon(polygon) => self.add(polygon, zone_id),
            Geometry::MultiPolygon(multi) => self.add(multi, zone_id),
            Geometry::Rect(rect) => self.add(rect.to_polygon(), zone_id),
            Geometry::Triangle(triangle) => self.add(triangle.to_polygon(), zone_id),
            other => Err(TzError::UnsupportedGeometry {
                zone_id: zone_id.to_string(),
                kind: geometry_kind(&other),
            }),
        }
    }

    pub fn get(&self, handle: RegionHandle) -> Option<&Region> {
        self.regions.get(handle.0)
    }

    /// Like [`get`](Self::get), but an unknown handle is an error.
    pub fn try_get(&self, handle: RegionHandle) -> Result<&Region> {
        self.get(handle).ok_or(TzError::UnknownRegion(handle))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionHandle, &Region)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, region)| (RegionHandle(i), region))
    }

    /// Number of distinct zone identifiers.
    pub fn zone_count(&self) -> usize {
        self.zone_ids.len()
    }

    /// Distinct zone identifiers, sorted.
    pub fn zones(&self) -> Vec<&str> {
        let mut zones: Vec<&str> = self.zone_ids.iter().map(|z| z.as_ref()).collect();
        zones.sort_unstable();
        zones
    }

    /// `(envelope, handle)` pairs in admission order, as the index consumes them.
    pub fn index_entries(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        self.iter().map(|(handle, region)| IndexEntry {
            envelope: region.envelope,
            handle,
        })
    }

    fn admit(&mut self, geometry: MultiPolygon<f64>, zone_id: &str, envelope: Envelope) -> RegionHandle {
        let fault = containment::check_geometry(&geometry).err();
        if let Some(fault) = &fault {
            log::debug!("Admitting zone '{}' with untestable geometry: {}", zone_id, fault);
        }

        let zone_id = self.intern(zone_id);
        let handle = RegionHandle(self.regions.len());
        self.regions.push(Region {
            geometry,
            zone_id,
            envelope,
            fault,
        });
        handle
    }

    fn intern(&mut self, zone_id: &str) -> Arc<str> {
        if let Some(existing) = self.zone_ids.get(zone_id) {
            return Arc::clone(existing);
        }
        let shared: Arc<str> = Arc::from(zone_id);
        self.zone_ids.insert(Arc::clone(&shared));
        shared
    }
}

fn computed_envelope(geometry: &MultiPolygon<f64>, zone_id: &str) -> Result<Envelope> {
    geometry
        .bounding_rect()
        .map(Envelope::from_rect)
        .ok_or_else(|| TzError::EmptyGeometry {
            zone_id: zone_id.to_string(),
        })
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
        #[allow(unreachable_patterns)]
        _ => "Geometry",
    }
}
