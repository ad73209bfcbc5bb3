//! # Route Manifests
//!
//! A manifest declares a route table as data, so it can be checked for
//! duplicates before any code runs (see the `routereg check` command) or
//! registered at startup with handlers looked up by name.
//!
//! ```yaml
//! routes:
//!   - path: /users
//!     methods: [GET]
//!     handler: list_users
//!     name: users.list
//!   - path: /users
//!     methods: [POST]
//!     handler: create_user
//!   - path: /status
//!     handler: status      # no methods: any
//! ```
//!
//! Files ending in `.yaml`/`.yml` are read as YAML, anything else as JSON.

use crate::method::MethodSet;
use crate::registry::{PathRouter, RouteRegistry};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A declared route table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    #[serde(default)]
    pub routes: Vec<ManifestRoute>,
}

/// One manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRoute {
    pub path: String,
    /// Method names; absent or empty means any method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    /// Handler name, resolved at registration time
    pub handler: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ManifestRoute {
    /// Parse the declared method names.
    ///
    /// # Errors
    ///
    /// Fails if a method name is not a valid HTTP token.
    pub fn method_set(&self) -> Result<MethodSet> {
        match &self.methods {
            None => Ok(MethodSet::Any),
            Some(names) => MethodSet::parse(names)
                .with_context(|| format!("route `{}` has an invalid method list", self.path)),
        }
    }
}

impl RouteManifest {
    /// Load a manifest file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route manifest {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let manifest = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML manifest {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON manifest {}", path.display()))?
        };
        Ok(manifest)
    }

    /// Parse a manifest from YAML text.
    ///
    /// # Errors
    ///
    /// Fails if the text does not parse.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse YAML manifest")
    }
}

/// Register every manifest entry, in order, resolving handlers by name.
///
/// Stops at the first entry whose handler is unknown, whose methods do not
/// parse, or which collides with an earlier route. Entries before it stay
/// registered. Returns the number of routes registered.
///
/// # Errors
///
/// The error names the failing entry's index and path; a duplicate keeps the
/// [`DuplicateRouteError`](crate::DuplicateRouteError) as its source.
pub fn register_manifest<H, R, F>(
    registry: &mut RouteRegistry<H, R>,
    manifest: &RouteManifest,
    mut resolve: F,
) -> Result<usize>
where
    R: PathRouter<H>,
    F: FnMut(&str) -> Option<H>,
{
    for (index, entry) in manifest.routes.iter().enumerate() {
        let methods = entry
            .method_set()
            .with_context(|| format!("manifest entry #{index}"))?;
        let handler = resolve(&entry.handler).ok_or_else(|| {
            anyhow!(
                "manifest entry #{index} (`{}`): unknown handler `{}`",
                entry.path,
                entry.handler
            )
        })?;

        registry
            .route(entry.path.as_str(), handler, methods, entry.name.as_deref())
            .with_context(|| format!("manifest entry #{index} (`{}`)", entry.path))?;
    }

    info!(
        routes_count = manifest.routes.len(),
        total_routes = registry.len(),
        "Route manifest registered"
    );
    Ok(manifest.routes.len())
}
