use crate::logging;
use crate::manifest::{register_manifest, RouteManifest};
use crate::registry::{RouteRegistry, RouteSpec};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Registry whose handlers are the manifest's handler names
pub type ManifestRegistry = RouteRegistry<String, Vec<Arc<RouteSpec<String>>>>;

/// Command-line interface for route manifests
#[derive(Parser)]
#[command(name = "routereg")]
#[command(about = "Check route manifests for duplicate routes", long_about = None)]
pub struct Cli {
    /// Log level: trace/debug/info/warn/error
    #[arg(long, global = true, env = "ROUTEREG_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Register a manifest and fail on the first duplicate route
    Check {
        /// Path to the route manifest (YAML or JSON)
        #[arg(short, long, env = "ROUTEREG_MANIFEST")]
        manifest: PathBuf,
    },
    /// Register a manifest and print the route table
    List {
        /// Path to the route manifest (YAML or JSON)
        #[arg(short, long, env = "ROUTEREG_MANIFEST")]
        manifest: PathBuf,
    },
}

/// Load `path` and register it into a fresh registry.
///
/// # Errors
///
/// Fails if the manifest cannot be loaded or an entry is rejected.
pub fn load_and_register(path: &Path) -> Result<ManifestRegistry> {
    let manifest = RouteManifest::from_path(path)?;
    let mut registry = ManifestRegistry::new(Vec::new());
    register_manifest(&mut registry, &manifest, |name| Some(name.to_string()))
        .with_context(|| format!("{} rejected", path.display()))?;
    Ok(registry)
}

/// Format the route table, one route per line, in registration order.
#[must_use]
pub fn render_table(registry: &ManifestRegistry) -> String {
    let width = registry
        .iter()
        .map(|r| r.methods.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for route in registry.iter() {
        let methods = route.methods.to_string();
        out.push_str(&format!(
            "{methods:<width$}  {}  -> {}",
            route.path, route.handler
        ));
        if let Some(name) = &route.name {
            out.push_str(&format!("  [{name}]"));
        }
        out.push('\n');
    }
    out
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if logging cannot be initialized, the manifest cannot
/// be loaded, or a route is rejected.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    match &cli.command {
        Commands::Check { manifest } => {
            let registry = load_and_register(manifest)?;
            println!(
                "✅ {}: {} route(s), no duplicates",
                manifest.display(),
                registry.len()
            );
            Ok(())
        }
        Commands::List { manifest } => {
            let registry = load_and_register(manifest)?;
            print!("{}", render_table(&registry));
            Ok(())
        }
    }
}
