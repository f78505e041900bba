//! Tests for path resolution against a built table.
//!
//! # Test Coverage
//!
//! - Literal/segment-count equivalence for plain patterns
//! - Optional-group nesting and the parameter sets it produces
//! - Constraint enforcement at match time
//! - Default merging and capture precedence
//! - First-match-wins ordering, including the empty-result edge
//! - Idempotence of `resolve` and unsynchronized concurrent reads
//! - Table hot-swapping

use std::collections::HashMap;
use std::sync::Arc;
use trailhead::hot_swap::SharedTable;
use trailhead::{RouteDef, RouteTable};

fn single(def: RouteDef) -> RouteTable {
    RouteTable::build(vec![def]).expect("failed to build table")
}

#[test]
fn plain_pattern_requires_exact_segments() {
    let table = single(RouteDef::new("post", "blog/<year>/<slug>"));
    let m = table.resolve("blog/2020/hello-world").unwrap();
    assert_eq!(m.get("year"), Some("2020"));
    assert_eq!(m.get("slug"), Some("hello-world"));

    // Wrong segment count or a mismatched literal never resolves.
    assert!(table.resolve("blog/2020").is_none());
    assert!(table.resolve("blog/2020/a/b").is_none());
    assert!(table.resolve("blag/2020/hello-world").is_none());
    assert!(table.resolve("xblog/2020/hello-world").is_none());
}

#[test]
fn nested_optional_groups_grow_the_parameter_set() {
    let table = single(RouteDef::new("nested", "a(/<b>(/<c>))").default_value("kind", "a"));

    let m = table.resolve("a").unwrap();
    assert_eq!(m.params.len(), 1); // just the default
    let m = table.resolve("a/1").unwrap();
    assert_eq!(m.get("b"), Some("1"));
    assert_eq!(m.get("c"), None);
    let m = table.resolve("a/1/2").unwrap();
    assert_eq!(m.get("b"), Some("1"));
    assert_eq!(m.get("c"), Some("2"));

    assert!(table.resolve("a//2").is_none());
}

#[test]
fn constraints_are_enforced() {
    let table = single(RouteDef::new("item", "item/<id>").constraint("id", r"\d+"));
    let m = table.resolve("item/42").unwrap();
    assert_eq!(m.params, HashMap::from([("id".to_string(), "42".to_string())]));
    assert!(table.resolve("item/abc").is_none());
}

#[test]
fn captures_override_defaults() {
    let table = single(RouteDef::new("page", "page(/<action>)").default_value("action", "index"));
    assert_eq!(table.resolve("page").unwrap().get("action"), Some("index"));
    assert_eq!(table.resolve("page/edit").unwrap().get("action"), Some("edit"));
}

#[test]
fn first_registered_route_wins() {
    let table = RouteTable::build(vec![
        RouteDef::new("specific", "docs/<page>").default_value("source", "specific"),
        RouteDef::new("generic", "<section>/<page>").default_value("source", "generic"),
    ])
    .unwrap();

    // Both patterns accept this path; registration order decides.
    let m = table.resolve("docs/intro").unwrap();
    assert_eq!(m.route, "specific");
    assert_eq!(m.get("source"), Some("specific"));
}

#[test]
fn resolve_is_idempotent() {
    let table = single(RouteDef::new("item", "item/<id>"));
    let first = table.resolve("item/7");
    for _ in 0..3 {
        assert_eq!(table.resolve("item/7"), first);
    }
}

#[test]
fn empty_result_reports_no_match() {
    // No placeholders, no defaults: the matcher succeeds but the merged
    // parameter set is empty, which is indistinguishable from failure.
    let table = single(RouteDef::new("ping", "ping"));
    assert!(table.resolve("ping").is_none());

    // The same literal route with a default resolves to just that default.
    let table = single(RouteDef::new("ping", "ping").default_value("handler", "pong"));
    let m = table.resolve("ping").unwrap();
    assert_eq!(m.get("handler"), Some("pong"));
}

#[test]
fn empty_result_does_not_fall_through_to_later_routes() {
    // The bare route matches first and ends iteration; the catch-all below
    // it is never attempted even though it would have produced parameters.
    let table = RouteTable::build(vec![
        RouteDef::new("bare", "ping"),
        RouteDef::new("catchall", "<word>"),
    ])
    .unwrap();
    assert!(table.resolve("ping").is_none());
    assert_eq!(table.resolve("pong").unwrap().route, "catchall");
}

#[test]
fn table_supports_unsynchronized_concurrent_reads() {
    let table = Arc::new(single(
        RouteDef::new("item", "item/<id>").constraint("id", r"\d+"),
    ));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = Arc::clone(&table);
            std::thread::spawn(move || {
                for n in 0..100 {
                    let path = format!("item/{}", i * 100 + n);
                    let m = table.resolve(&path).unwrap();
                    assert_eq!(m.get("id"), Some(path.trim_start_matches("item/")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn hot_swap_replaces_the_live_table() {
    let shared = SharedTable::new(single(RouteDef::new("v1", "api/<res>")));
    assert_eq!(shared.resolve("api/pets").unwrap().route, "v1");
    assert!(shared.resolve("api/v2/pets").is_none());

    let old = shared.swap(single(RouteDef::new("v2", "api/v2/<res>")));
    assert_eq!(shared.resolve("api/v2/pets").unwrap().route, "v2");
    assert!(shared.resolve("api/pets").is_none());

    // A snapshot taken before the swap still serves the old routes.
    assert_eq!(old.resolve("api/pets").unwrap().route, "v1");
}
