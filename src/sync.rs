//! Thread-safe handle for replacing the region set while queries run.
//!
//! A [`Resolver`] is already `Send + Sync`, so read-only sharing only needs an
//! `Arc`. `SharedResolver` adds hot replacement: a new region set is built
//! off to the side and swapped in atomically. In-flight queries finish
//! against the snapshot they started with.
//!
//! Enable the `sync` feature (on by default) to use this module.
//!
//! # Examples
//!
//! ```rust
//! use tzlocate::{Config, RegionStore, Resolution, SharedResolver};
//! use geo::Rect;
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = RegionStore::new();
//! store.add(Rect::new((0.0, 0.0), (10.0, 10.0)).to_polygon(), "Zone/Old")?;
//! let shared = SharedResolver::build(store, Config::default())?;
//!
//! let reader = shared.clone();
//! let handle = thread::spawn(move || reader.resolve(5.0, 5.0));
//!
//! let mut replacement = RegionStore::new();
//! replacement.add(Rect::new((0.0, 0.0), (10.0, 10.0)).to_polygon(), "Zone/New")?;
//! shared.rebuild(replacement, Config::default())?;
//!
//! assert!(handle.join().unwrap().is_match());
//! assert_eq!(shared.resolve(5.0, 5.0), Resolution::zone("Zone/New"));
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::error::Result;
use crate::resolver::{Resolution, Resolver};
use crate::store::RegionStore;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to the current [`Resolver`].
///
/// The lock is held only long enough to clone the inner `Arc`; queries
/// themselves run without holding it.
#[derive(Clone, Debug)]
pub struct SharedResolver {
    inner: Arc<RwLock<Arc<Resolver>>>,
}

impl SharedResolver {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(resolver))),
        }
    }

    /// Build a resolver from `store` and wrap it.
    pub fn build(store: RegionStore, config: Config) -> Result<Self> {
        Ok(Self::new(Resolver::new(store, config)?))
    }

    /// The resolver currently in service.
    pub fn snapshot(&self) -> Arc<Resolver> {
        Arc::clone(&self.inner.read())
    }

    pub fn resolve(&self, latitude: f64, longitude: f64) -> Resolution {
        self.snapshot().resolve(latitude, longitude)
    }

    pub fn try_resolve(&self, latitude: f64, longitude: f64) -> Result<Resolution> {
        self.snapshot().try_resolve(latitude, longitude)
    }

    /// Swap in `resolver`, returning the one it replaces.
    pub fn replace(&self, resolver: Resolver) -> Arc<Resolver> {
        let next = Arc::new(resolver);
        let previous = std::mem::replace(&mut *self.inner.write(), next);
        log::info!(
            "Replaced timezone resolver: {} regions -> {} regions",
            previous.store().len(),
            self.inner.read().store().len()
        );
        previous
    }

    /// Build a resolver from `store` and swap it in.
    ///
    /// On error the current resolver stays in service.
    pub fn rebuild(&self, store: RegionStore, config: Config) -> Result<Arc<Resolver>> {
        let resolver = Resolver::new(store, config)?;
        Ok(self.replace(resolver))
    }
}

impl From<Resolver> for SharedResolver {
    fn from(resolver: Resolver) -> Self {
        Self::new(resolver)
    }
}
