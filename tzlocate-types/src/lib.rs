//! # tzlocate-types
//!
//! Plain spatial value types shared by the tzlocate resolver:
//!
//! - **Envelope**: axis-aligned bounding box used by the coarse index stage
//! - **LatLng**: a latitude/longitude query coordinate
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's primitives.
//!
//! ## Examples
//!
//! ```rust
//! use tzlocate_types::coordinate::LatLng;
//! use tzlocate_types::envelope::Envelope;
//!
//! let envelope = Envelope::new(0.0, 0.0, 10.0, 10.0);
//! let query = LatLng::new(5.0, 5.0);
//! assert!(envelope.contains_coord(query.to_coord()));
//! ```

pub mod coordinate;
pub mod envelope;
