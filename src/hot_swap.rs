//! # Hot Swap Module
//!
//! Atomic replacement of a live [`RouteTable`] without blocking readers.
//!
//! A [`RouteTable`] itself is immutable; changing the route set means
//! building a fresh table. [`SharedTable`] holds the current table behind an
//! [`arc_swap::ArcSwap`] so dispatch paths keep resolving lock-free while a
//! reload builds and swaps in the replacement. If the rebuild fails, nothing
//! is swapped and the previous table keeps serving.
//!
//! ```
//! use trailhead::hot_swap::SharedTable;
//! use trailhead::router::{RouteDef, RouteTable};
//!
//! let shared = SharedTable::new(
//!     RouteTable::build(vec![RouteDef::new("v1", "api/<res>")]).unwrap(),
//! );
//! assert!(shared.resolve("api/pets").is_some());
//!
//! // Later, a reload thread:
//! let rebuilt = RouteTable::build(vec![RouteDef::new("v2", "api/v2/<res>")]).unwrap();
//! shared.swap(rebuilt);
//! assert!(shared.resolve("api/v2/pets").is_some());
//! ```

use crate::router::{RouteMatch, RouteTable};
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::info;

/// A route table shared between dispatch threads and a reloader.
#[derive(Debug)]
pub struct SharedTable {
    inner: ArcSwap<RouteTable>,
}

impl SharedTable {
    /// Wrap an initial table.
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        Self {
            inner: ArcSwap::from_pointee(table),
        }
    }

    /// Snapshot of the current table.
    #[must_use]
    pub fn load(&self) -> Arc<RouteTable> {
        self.inner.load_full()
    }

    /// Atomically replace the current table, returning the previous one.
    ///
    /// In-flight `resolve` calls finish against the table they loaded;
    /// subsequent calls see the replacement.
    pub fn swap(&self, table: RouteTable) -> Arc<RouteTable> {
        info!(route_count = table.len(), "swapping in rebuilt route table");
        self.inner.swap(Arc::new(table))
    }

    /// Resolve against the current table.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.inner.load().resolve(path)
    }
}

impl From<RouteTable> for SharedTable {
    fn from(table: RouteTable) -> Self {
        Self::new(table)
    }
}
