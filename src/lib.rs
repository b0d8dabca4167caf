//! Offline timezone lookup: resolve a latitude/longitude to the identifier of
//! the timezone region containing it.
//!
//! Regions are loaded into a [`RegionStore`], frozen into a [`Resolver`] that
//! packs their bounding boxes into a static R-tree, and then queried with a
//! closed point-in-polygon test. A point on a border shared by two zones is
//! reported as [`Resolution::Ambiguous`] rather than silently assigned.
//!
//! ```rust
//! use tzlocate::{Resolution, ResolverBuilder};
//! use geo::Rect;
//!
//! let resolver = ResolverBuilder::new()
//!     .region(Rect::new((0.0, 0.0), (10.0, 10.0)).to_polygon(), "Zone/West")?
//!     .region(Rect::new((10.0, 0.0), (20.0, 10.0)).to_polygon(), "Zone/East")?
//!     .build()?;
//!
//! assert_eq!(resolver.resolve(5.0, 5.0), Resolution::zone("Zone/West"));
//! assert_eq!(
//!     resolver.resolve(5.0, 10.0),
//!     Resolution::ambiguous(["Zone/East", "Zone/West"])
//! );
//! assert_eq!(resolver.resolve(50.0, 50.0), Resolution::NoMatch);
//! # Ok::<(), tzlocate::TzError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod index;
pub mod resolver;
pub mod store;

#[cfg(feature = "sync")]
pub mod sync;

pub use builder::{LoadReport, ResolverBuilder};
pub use compute::spatial::Containment;
pub use config::{AmbiguityPolicy, Config};
pub use error::{GeometryFault, Result, TzError};
pub use index::{IndexEntry, IndexStats, SpatialIndex};
pub use resolver::{CandidateFault, Resolution, ResolutionReport, Resolver, ZoneMatch};
pub use store::{Region, RegionHandle, RegionStore};

#[cfg(feature = "sync")]
pub use sync::SharedResolver;

pub use tzlocate_types::coordinate::LatLng;
pub use tzlocate_types::envelope::Envelope;

pub use geo::{MultiPolygon, Polygon, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Result, TzError};

    pub use crate::{Resolution, Resolver, ResolverBuilder};

    pub use crate::{AmbiguityPolicy, Config};

    pub use crate::{Envelope, LatLng, RegionStore};

    pub use geo::{MultiPolygon, Polygon, Rect};

    #[cfg(feature = "sync")]
    pub use crate::SharedResolver;
}
