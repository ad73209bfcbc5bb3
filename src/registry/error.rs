use crate::method::MethodSet;
use std::fmt;

/// A registration collided with an existing route on the same path
///
/// Returned by [`RouteRegistry::route`](super::RouteRegistry::route) and the
/// verb shortcuts. The rejected route was not added and the router was not
/// called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRouteError {
    /// The contested path, exactly as both callers supplied it
    pub path: String,
    /// Methods of the registration that blocks the new one
    pub existing: MethodSet,
    /// Methods the rejected registration asked for
    pub requested: MethodSet,
    /// Name of the blocking route, if it was given one
    pub existing_name: Option<String>,
}

impl fmt::Display for DuplicateRouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate route: `{}` is already registered for {}",
            self.path, self.existing
        )?;
        if let Some(name) = &self.existing_name {
            write!(f, " (route \"{}\")", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for DuplicateRouteError {}
