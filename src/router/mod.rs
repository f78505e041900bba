//! # Router Module
//!
//! Route table construction and path resolution.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling declarative route definitions into a [`RouteTable`]
//! - Resolving incoming paths to a named parameter set
//! - Merging per-route defaults into the resolved parameters
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: At startup, each definition's pattern (e.g.
//!    `admin/(<controller>(/<action>))`) is translated by
//!    [`crate::pattern`] into an anchored regex with named capture groups.
//!    Any malformed pattern or constraint fails the whole build.
//!
//! 2. **Matching**: For each incoming path, compiled matchers are tried in
//!    registration order until one succeeds; the first match wins and later
//!    routes are never consulted.
//!
//! ## Example
//!
//! ```
//! use trailhead::router::{RouteDef, RouteTable};
//!
//! let table = RouteTable::build(vec![
//!     RouteDef::new("item", "item/<id>").constraint("id", r"\d+"),
//!     RouteDef::new("page", "page(/<action>)").default_value("action", "index"),
//! ])
//! .unwrap();
//!
//! let m = table.resolve("item/42").unwrap();
//! assert_eq!(m.get("id"), Some("42"));
//!
//! let m = table.resolve("page").unwrap();
//! assert_eq!(m.get("action"), Some("index"));
//! ```
//!
//! ## Performance
//!
//! Matching is O(n) in the number of routes, with each matcher backed by the
//! `regex` crate's finite automata — no backtracking, so per-route cost is
//! linear in path length regardless of pattern shape.

mod core;

pub use core::{BuildError, CompiledRoute, RouteDef, RouteMatch, RouteTable};
