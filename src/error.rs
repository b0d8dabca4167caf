//! Error types for region loading, configuration and query validation.

use crate::store::RegionHandle;
use thiserror::Error;
use tzlocate_types::envelope::Envelope;

/// Errors surfaced synchronously to the caller.
///
/// Query outcomes such as "no zone" or "several zones" are not errors; they
/// are [`Resolution`](crate::Resolution) values.
#[derive(Debug, Error)]
pub enum TzError {
    #[error("zone identifier must not be empty")]
    MissingZoneId,

    #[error("geometry for zone '{zone_id}' has no coordinates")]
    EmptyGeometry { zone_id: String },

    #[error("envelope for zone '{zone_id}' is malformed: {envelope:?}")]
    InvalidEnvelope { zone_id: String, envelope: Envelope },

    #[error("envelope {supplied:?} for zone '{zone_id}' does not cover its geometry {actual:?}")]
    EnvelopeMismatch {
        zone_id: String,
        supplied: Envelope,
        actual: Envelope,
    },

    #[error("unsupported geometry type for zone '{zone_id}': {kind}")]
    UnsupportedGeometry { zone_id: String, kind: &'static str },

    #[error("unknown region handle {0}")]
    UnknownRegion(RegionHandle),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TzError>;

/// Why the exact containment test is undefined for one region.
///
/// Reported per candidate; a faulty region never aborts a whole query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryFault {
    #[error("polygon {polygon} ring {ring} has {vertices} distinct vertices, need at least 3")]
    DegenerateRing {
        polygon: usize,
        ring: usize,
        vertices: usize,
    },

    #[error("polygon {polygon} ring {ring} encloses no area")]
    ZeroAreaRing { polygon: usize, ring: usize },

    #[error("polygon {polygon} ring {ring} contains a non-finite coordinate")]
    NonFiniteCoordinate { polygon: usize, ring: usize },
}
