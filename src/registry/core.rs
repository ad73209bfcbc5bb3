//! Registry core - route records, the router contract, and the façade.

use crate::method::MethodSet;
use http::Method;
use std::sync::Arc;
use tracing::{debug, warn};

use super::conflict::ConflictDetector;
use super::error::DuplicateRouteError;

/// An accepted route: path pattern, allowed methods, optional name, handler
///
/// Immutable once built. The registry keeps one `Arc` in its ordered list and
/// hands a clone of the same `Arc` to the router.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSpec<H> {
    /// Path pattern as given by the caller; interpreted only by the router
    pub path: String,
    /// Methods this route accepts
    pub methods: MethodSet,
    /// Caller-supplied identifier; not required to be unique
    pub name: Option<String>,
    /// Request handler, stored and forwarded as-is
    pub handler: H,
}

impl<H> RouteSpec<H> {
    /// Whether this route accepts `method`.
    #[inline]
    #[must_use]
    pub fn accepts(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }
}

/// The path-matching router routes are forwarded to once accepted
///
/// Registration is infallible from the registry's point of view; any
/// pattern compilation problem belongs to the implementor.
pub trait PathRouter<H> {
    /// Accept a route that passed the duplicate check.
    fn add_route(&mut self, route: Arc<RouteSpec<H>>);
}

impl<H, R> PathRouter<H> for &mut R
where
    R: PathRouter<H> + ?Sized,
{
    fn add_route(&mut self, route: Arc<RouteSpec<H>>) {
        (**self).add_route(route);
    }
}

/// A plain routing table that records routes in arrival order.
impl<H> PathRouter<H> for Vec<Arc<RouteSpec<H>>> {
    fn add_route(&mut self, route: Arc<RouteSpec<H>>) {
        self.push(route);
    }
}

/// Route registration façade
///
/// Builds a [`RouteSpec`] for each registration, rejects it if it collides
/// with an earlier route on the same path, and otherwise appends it to the
/// ordered route list and forwards it to the router `R`.
///
/// Registration is all-or-nothing: a rejected call changes neither the
/// route list nor the router.
///
/// # Example
///
/// ```rust
/// use routereg::{RouteRegistry, RouteSpec};
/// use std::sync::Arc;
///
/// let mut registry = RouteRegistry::new(Vec::<Arc<RouteSpec<&str>>>::new());
/// registry.get("/users", "list_users").unwrap();
/// registry.post("/users", "create_user").unwrap();
/// assert!(registry.get("/users", "other").is_err());
/// assert_eq!(registry.routes().len(), 2);
/// ```
#[derive(Debug)]
pub struct RouteRegistry<H, R> {
    routes: Vec<Arc<RouteSpec<H>>>,
    detector: ConflictDetector,
    router: R,
}

impl<H, R> RouteRegistry<H, R>
where
    R: PathRouter<H>,
{
    /// Create an empty registry forwarding to `router`.
    pub fn new(router: R) -> Self {
        Self {
            routes: Vec::new(),
            detector: ConflictDetector::new(),
            router,
        }
    }

    /// Register a route.
    ///
    /// `methods` accepts anything convertible to [`MethodSet`]; `None`, an
    /// empty list, or [`MethodSet::Any`] all mean "any method".
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateRouteError`] if the path is already registered with
    /// an overlapping method set.
    pub fn route(
        &mut self,
        path: impl Into<String>,
        handler: H,
        methods: impl Into<MethodSet>,
        name: Option<&str>,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        let spec = RouteSpec {
            path: path.into(),
            methods: methods.into().canonicalize(),
            name: name.map(str::to_string),
            handler,
        };

        if let Err(err) = self
            .detector
            .check(&spec.path, &spec.methods, spec.name.as_deref())
        {
            warn!(
                path = %err.path,
                requested = %err.requested,
                existing = %err.existing,
                existing_name = ?err.existing_name,
                "Duplicate route rejected"
            );
            return Err(err);
        }

        let spec = Arc::new(spec);
        self.routes.push(Arc::clone(&spec));
        self.router.add_route(Arc::clone(&spec));

        debug!(
            path = %spec.path,
            methods = %spec.methods,
            name = ?spec.name,
            routes_count = self.routes.len(),
            "Route registered"
        );

        Ok(spec)
    }

    /// Register a `GET` route.
    pub fn get(
        &mut self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.route(path, handler, Method::GET, None)
    }

    /// Register a `POST` route.
    pub fn post(
        &mut self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.route(path, handler, Method::POST, None)
    }

    /// Register a `PUT` route.
    pub fn put(
        &mut self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.route(path, handler, Method::PUT, None)
    }

    /// Register a `PATCH` route.
    pub fn patch(
        &mut self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.route(path, handler, Method::PATCH, None)
    }

    /// Register a `DELETE` route.
    pub fn delete(
        &mut self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.route(path, handler, Method::DELETE, None)
    }

    /// Register a route that accepts every method. Blocks all other
    /// registrations on the same path.
    pub fn any(
        &mut self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Arc<RouteSpec<H>>, DuplicateRouteError> {
        self.route(path, handler, MethodSet::Any, None)
    }
}

impl<H, R> RouteRegistry<H, R> {
    /// Accepted routes in registration order.
    #[inline]
    #[must_use]
    pub fn routes(&self) -> &[Arc<RouteSpec<H>>] {
        &self.routes
    }

    /// Iterate accepted routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RouteSpec<H>>> {
        self.routes.iter()
    }

    /// Number of accepted routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True until the first route is accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Methods of the route that would block `methods` on `path`, if any.
    ///
    /// Does not register anything; useful for dry runs.
    #[must_use]
    pub fn conflicts_with(&self, path: &str, methods: &MethodSet) -> Option<&MethodSet> {
        self.detector.find_conflict(path, methods)
    }

    /// The router routes are forwarded to.
    #[must_use]
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Split into the ordered route list and the router.
    pub fn into_parts(self) -> (Vec<Arc<RouteSpec<H>>>, R) {
        (self.routes, self.router)
    }

    /// Print all registered routes to stdout
    ///
    /// Useful for debugging and verifying that routes are registered correctly.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for route in &self.routes {
            match &route.name {
                Some(name) => println!("[route] {} {} ({name})", route.methods, route.path),
                None => println!("[route] {} {}", route.methods, route.path),
            }
        }
    }
}

impl<H, R> Default for RouteRegistry<H, R>
where
    R: PathRouter<H> + Default,
{
    fn default() -> Self {
        Self::new(R::default())
    }
}
