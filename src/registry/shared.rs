//! Thread-safe registry handle for concurrent registration at startup.
//!
//! Every registering call holds one mutex across the conflict check, the
//! append, and the router call, so two threads racing on the same
//! `(path, method)` cannot both succeed.

use crate::method::MethodSet;
use parking_lot::Mutex;
use std::sync::Arc;

use super::core::{PathRouter, RouteRegistry, RouteSpec};
use super::error::DuplicateRouteError;

/// Cloneable, lock-protected [`RouteRegistry`]
pub struct SharedRouteRegistry<H, R> {
    inner: Arc<Mutex<RouteRegistry<H, R>>>,
}

impl<H, R> Clone for SharedRouteRegistry<H, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H, R> SharedRouteRegistry<H, R>
where
    R: PathRouter<H>,
{
    /// Wrap a fresh registry around `router`.
    pub fn new(router: R) -> Self {
        Self::from_registry(RouteRegistry::new(router))
    }

    /// Share an existing registry, keeping the routes it already holds.
    pub fn from_registry(registry: RouteRegistry<H, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// See [`RouteRegistry::route`].
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateRouteError`] on collision.
    pub fn route(
        &self,
        path: impl Into<String>,
        handler: H,
        methods: impl Into<MethodSet>,
        name: Option<&str>,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.inner.lock().route(path, handler, methods, name)
    }

    /// Register a `GET` route. See [`RouteRegistry::get`].
    pub fn get(
        &self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.inner.lock().get(path, handler)
    }

    /// Register a `POST` route. See [`RouteRegistry::post`].
    pub fn post(
        &self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.inner.lock().post(path, handler)
    }

    /// Register a `PUT` route. See [`RouteRegistry::put`].
    pub fn put(
        &self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.inner.lock().put(path, handler)
    }

    /// Register a `PATCH` route. See [`RouteRegistry::patch`].
    pub fn patch(
        &self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.inner.lock().patch(path, handler)
    }

    /// Register a `DELETE` route. See [`RouteRegistry::delete`].
    pub fn delete(
        &self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.inner.lock().delete(path, handler)
    }

    /// Register a route for any method. See [`RouteRegistry::any`].
    pub fn any(
        &self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.inner.lock().any(path, handler)
    }
}

impl<H, R> SharedRouteRegistry<H, R> {
    /// Copy of the route list in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<RouteSpec<H>>> {
        self.inner.lock().routes().to_vec()
    }

    /// Number of accepted routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True until the first route is accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` with the registry locked, e.g. to inspect the router.
    pub fn with<T>(&self, f: impl FnOnce(&RouteRegistry<H, R>) -> T) -> T {
        f(&self.inner.lock())
    }

    /// Recover the registry once every other handle has been dropped.
    ///
    /// Returns `self` back if other clones are still alive.
    pub fn try_into_inner(self) -> Result<RouteRegistry<H, R>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
