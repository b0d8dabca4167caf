//! Compute layer for index construction and exact geometry tests.
//!
//! This module separates the algorithms from the data they run over. It
//! provides:
//! - Spatial packing and point-in-polygon testing
//! - Coordinate, envelope and zone id validation
//!
//! Nothing here owns region data; the store and index call into it.

pub mod spatial;
pub mod validation;
