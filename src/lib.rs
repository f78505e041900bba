//! # Trailhead
//!
//! **Trailhead** is a small URI routing engine: declarative route patterns —
//! literal segments, named `<placeholder>` segments, nested optional groups
//! and per-placeholder regex constraints — are compiled once into anchored
//! matchers, and incoming paths are resolved into named parameter maps with
//! per-route defaults filling in whatever an optional group left out.
//!
//! ## Overview
//!
//! A routing table is built once from an ordered list of definitions, then
//! queried many times. Matching is first-match-wins: routes are tried in
//! registration order and the earliest matcher that succeeds decides the
//! outcome, so declaration order is the only priority scheme.
//!
//! This crate is a library boundary only. It expects a path already trimmed
//! of leading and trailing slashes and hands back a parameter map (or
//! `None`); HTTP parsing, config loading and handler invocation belong to
//! the surrounding application.
//!
//! ## Architecture
//!
//! - **[`pattern`]** - the pattern compiler: escape → optional groups →
//!   placeholders → anchor, producing a regex with named capture groups
//! - **[`router`]** - [`RouteTable`] construction and first-match path
//!   resolution with default merging
//! - **[`hot_swap`]** - lock-free atomic replacement of a live table for
//!   route reloads
//!
//! ## Example
//!
//! ```
//! use trailhead::{RouteDef, RouteTable};
//!
//! let table = RouteTable::build(vec![
//!     RouteDef::new("admin", "admin/(<controller>(/<action>(/<id>)))")
//!         .default_value("controller", "register")
//!         .default_value("action", "logout")
//!         .constraint("action", "login|logout|register")
//!         .constraint("id", r"\d+"),
//! ])
//! .unwrap();
//!
//! let m = table.resolve("admin/register/login/2005").unwrap();
//! assert_eq!(m.get("controller"), Some("register"));
//! assert_eq!(m.get("action"), Some("login"));
//! assert_eq!(m.get("id"), Some("2005"));
//!
//! // Optional groups absent from the path fall back to defaults.
//! let m = table.resolve("admin").unwrap();
//! assert_eq!(m.get("controller"), Some("register"));
//! assert_eq!(m.get("action"), Some("logout"));
//! assert_eq!(m.get("id"), None);
//! ```
//!
//! ## Concurrency
//!
//! A built [`RouteTable`] is immutable and safe for unsynchronized
//! concurrent reads; `resolve` is a pure query. Route reloads are expressed
//! as "build a new table, swap the shared reference" via
//! [`hot_swap::SharedTable`] — never as in-place mutation.

pub mod hot_swap;
pub mod pattern;
pub mod router;

pub use pattern::PatternError;
pub use router::{BuildError, RouteDef, RouteMatch, RouteTable};
