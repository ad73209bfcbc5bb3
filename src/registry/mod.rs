//! # Registry Module
//!
//! The registry module is the route registration façade. Application startup
//! code declares routes here; each one is checked for collisions before it is
//! recorded and forwarded to the path-matching router.
//!
//! ## Overview
//!
//! - [`RouteRegistry`] builds a [`RouteSpec`] per registration, validates it,
//!   appends it to the ordered route list, and calls [`PathRouter::add_route`]
//! - [`ConflictDetector`] decides whether a `(path, methods)` pair collides
//!   with one already accepted
//! - [`SharedRouteRegistry`] wraps the registry in a mutex for registration
//!   from several threads
//!
//! ## Conflict Rule
//!
//! Two registrations conflict when their path strings are equal and their
//! method sets overlap:
//!
//! | existing        | new              | result   |
//! |-----------------|------------------|----------|
//! | `GET`           | `POST`           | accepted |
//! | `GET, POST`     | `POST, DELETE`   | rejected |
//! | any             | `GET`            | rejected |
//! | `GET`           | any              | rejected |
//! | any             | any              | rejected |
//!
//! Route names play no part in the check and may repeat.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use routereg::{RouteRegistry, RouteSpec};
//! use std::sync::Arc;
//!
//! let mut registry = RouteRegistry::new(Vec::<Arc<RouteSpec<u32>>>::new());
//! registry
//!     .route("/a", 1, [Method::GET, Method::POST], Some("a.rw"))
//!     .unwrap();
//!
//! let err = registry
//!     .route("/a", 2, [Method::POST, Method::DELETE], None)
//!     .unwrap_err();
//! assert_eq!(err.path, "/a");
//! assert_eq!(err.existing.to_string(), "GET, POST");
//! ```

mod conflict;
mod core;
mod error;
mod shared;

pub use self::core::{PathRouter, RouteRegistry, RouteSpec};
pub use conflict::ConflictDetector;
pub use error::DuplicateRouteError;
pub use shared::SharedRouteRegistry;
