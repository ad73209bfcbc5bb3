#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::Method;
use routereg::{DuplicateRouteError, MethodSet, PathRouter, RouteRegistry, RouteSpec};
use std::sync::Arc;

type Handler = fn() -> &'static str;

fn h1() -> &'static str {
    "h1"
}
fn h2() -> &'static str {
    "h2"
}
fn h3() -> &'static str {
    "h3"
}

/// Stand-in for a path-matching router: records what it was handed.
#[derive(Default)]
struct RecordingRouter {
    added: Vec<Arc<RouteSpec<Handler>>>,
}

impl PathRouter<Handler> for RecordingRouter {
    fn add_route(&mut self, route: Arc<RouteSpec<Handler>>) {
        self.added.push(route);
    }
}

fn new_registry() -> RouteRegistry<Handler, RecordingRouter> {
    RouteRegistry::new(RecordingRouter::default())
}

fn explicit_sets() -> Vec<MethodSet> {
    vec![
        MethodSet::from(Method::GET),
        MethodSet::from(Method::POST),
        MethodSet::from([Method::PUT, Method::PATCH]),
        MethodSet::from([Method::DELETE, Method::HEAD]),
        MethodSet::from([Method::GET, Method::OPTIONS]),
        MethodSet::from(Method::from_bytes(b"PURGE").unwrap()),
    ]
}

fn intersects(a: &MethodSet, b: &MethodSet) -> bool {
    let a = a.methods().unwrap();
    let b = b.methods().unwrap();
    a.iter().any(|m| b.contains(m))
}

#[test]
fn test_users_scenario() {
    let mut registry = new_registry();
    registry.get("/users", h1).unwrap();
    registry.post("/users", h2).unwrap();

    let err: DuplicateRouteError = registry.get("/users", h3).unwrap_err();
    assert_eq!(err.path, "/users");
    assert_eq!(err.existing.to_string(), "GET");
    assert!(err.to_string().contains("/users"));
    assert!(err.to_string().contains("GET"));

    let paths: Vec<String> = registry
        .routes()
        .iter()
        .map(|r| format!("{} {}", r.methods, r.path))
        .collect();
    assert_eq!(paths, vec!["GET /users", "POST /users"]);
}

#[test]
fn test_status_scenario() {
    let mut registry = new_registry();
    registry.any("/status", h1).unwrap();
    assert!(registry.get("/status", h2).is_err());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_shared_post_scenario() {
    let mut registry = new_registry();
    registry
        .route("/a", h1, [Method::GET, Method::POST], None)
        .unwrap();
    let err = registry
        .route("/a", h2, [Method::POST, Method::DELETE], None)
        .unwrap_err();
    assert_eq!(err.path, "/a");
    assert_eq!(err.requested.to_string(), "POST, DELETE");
}

#[test]
fn test_every_pair_of_explicit_sets() {
    for a in explicit_sets() {
        for b in explicit_sets() {
            let mut registry = new_registry();
            registry.route("/p", h1, a.clone(), None).unwrap();
            let second = registry.route("/p", h2, b.clone(), None);

            if intersects(&a, &b) {
                let err = second.unwrap_err();
                assert_eq!(err.existing, a, "{a} then {b}");
                assert_eq!(registry.len(), 1);
            } else {
                second.unwrap();
                assert_eq!(registry.len(), 2, "{a} then {b}");
                assert_eq!(registry.routes()[1].methods, b);
            }
        }
    }
}

#[test]
fn test_any_conflicts_in_either_order() {
    let mut others = explicit_sets();
    others.push(MethodSet::Any);

    for other in others {
        let mut any_first = new_registry();
        any_first.any("/p", h1).unwrap();
        assert!(any_first.route("/p", h2, other.clone(), None).is_err());

        let mut any_last = new_registry();
        any_last.route("/p", h1, other.clone(), None).unwrap();
        let err = any_last.any("/p", h2).unwrap_err();
        assert_eq!(err.existing, other);
    }
}

#[test]
fn test_order_preserved_and_rejections_invisible() {
    let mut registry = new_registry();
    let calls: Vec<(&str, MethodSet)> = vec![
        ("/a", MethodSet::from(Method::GET)),
        ("/b", MethodSet::Any),
        ("/a", MethodSet::from([Method::GET, Method::PUT])), // rejected
        ("/a", MethodSet::from(Method::PUT)),
        ("/b", MethodSet::from(Method::DELETE)), // rejected
        ("/c", MethodSet::from(Method::PATCH)),
        ("/a", MethodSet::Any), // rejected
    ];

    let mut expected = Vec::new();
    for (path, methods) in calls {
        if registry.route(path, h1, methods.clone(), None).is_ok() {
            expected.push(format!("{methods} {path}"));
        }
    }

    let listed: Vec<String> = registry
        .iter()
        .map(|r| format!("{} {}", r.methods, r.path))
        .collect();
    assert_eq!(listed, vec!["GET /a", "any /b", "PUT /a", "PATCH /c"]);
    assert_eq!(listed, expected);

    let forwarded: Vec<String> = registry
        .router()
        .added
        .iter()
        .map(|r| format!("{} {}", r.methods, r.path))
        .collect();
    assert_eq!(forwarded, listed);
}

#[test]
fn test_listing_is_idempotent() {
    let mut registry = new_registry();
    registry.get("/a", h1).unwrap();
    registry.any("/b", h2).unwrap();

    let first: Vec<Arc<RouteSpec<Handler>>> = registry.routes().to_vec();
    let second: Vec<Arc<RouteSpec<Handler>>> = registry.routes().to_vec();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert!(Arc::ptr_eq(a, b));
    }
}

#[test]
fn test_handler_forwarded_untouched() {
    let mut registry = new_registry();
    let spec = registry.get("/a", h3).unwrap();
    assert_eq!((spec.handler)(), "h3");
    assert_eq!((registry.router().added[0].handler)(), "h3");
}

#[test]
fn test_independent_registries() {
    let mut first = new_registry();
    let mut second = new_registry();
    first.get("/a", h1).unwrap();
    second.get("/a", h2).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}
