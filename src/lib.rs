//! # routereg
//!
//! **routereg** is a route registration façade for an HTTP request-dispatch
//! layer. Application startup code declares routes (path pattern, allowed
//! methods, handler, optional name); each registration is checked for
//! collisions with earlier ones and, if accepted, recorded in order and
//! forwarded to a path-matching router.
//!
//! ## Architecture
//!
//! - **[`method`]** - [`MethodSet`]: an explicit method list or the `Any` wildcard
//! - **[`registry`]** - [`RouteRegistry`], [`ConflictDetector`], [`SharedRouteRegistry`]
//! - **[`manifest`]** - YAML/JSON route tables registered by handler name
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `routereg` manifest checker
//!
//! ### Registration Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App as Startup code
//!     participant Registry as RouteRegistry
//!     participant Detector as ConflictDetector
//!     participant Router as PathRouter
//!
//!     App->>Registry: get("/users", handler)
//!     Registry->>Registry: Build RouteSpec
//!     Registry->>Detector: check(path, methods)
//!     alt Overlaps an existing route on the same path
//!         Detector-->>App: DuplicateRouteError
//!     end
//!     Detector-->>Registry: Ok (entry recorded)
//!     Registry->>Registry: Append to route list
//!     Registry->>Router: add_route(Arc<RouteSpec>)
//!     Registry-->>App: Arc<RouteSpec>
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use routereg::{RouteRegistry, RouteSpec};
//! use std::sync::Arc;
//!
//! // Any `PathRouter` works; a Vec just records routes in order
//! let mut registry = RouteRegistry::new(Vec::<Arc<RouteSpec<&str>>>::new());
//!
//! registry.get("/users", "list_users").unwrap();
//! registry.post("/users", "create_user").unwrap();
//! registry.any("/status", "status").unwrap();
//!
//! // Same path, overlapping method: rejected
//! let err = registry.get("/users", "other").unwrap_err();
//! assert_eq!(err.to_string(), "duplicate route: `/users` is already registered for GET");
//!
//! // Arbitrary methods go through `route`
//! registry
//!     .route("/users/{id}", "user_rw", [Method::GET, Method::PUT], Some("users.item"))
//!     .unwrap();
//!
//! assert_eq!(registry.routes().len(), 4);
//! ```
//!
//! ## Conflict Semantics
//!
//! Paths are compared as plain strings. On the same path, the `Any` wildcard
//! collides with everything (including another `Any`); explicit method sets
//! collide when they share a method. Route names are never checked for
//! uniqueness.

pub mod cli;
pub mod logging;
pub mod manifest;
pub mod method;
pub mod registry;

pub use manifest::{register_manifest, ManifestRoute, RouteManifest};
pub use method::{InvalidMethodError, MethodSet};
pub use registry::{
    ConflictDetector, DuplicateRouteError, PathRouter, RouteRegistry, RouteSpec,
    SharedRouteRegistry,
};
