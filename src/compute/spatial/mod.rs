//! Spatial algorithms behind the two resolution stages.
//!
//! - [`str_pack`]: sort-tile-recursive packing used to bulk-build the index
//! - [`containment`]: exact closed point-in-polygon test for candidates

pub mod containment;
pub mod str_pack;

pub use containment::{Containment, check_geometry, locate};
pub use str_pack::{MIN_NODE_CAPACITY, pack};
