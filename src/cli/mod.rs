//! # CLI Module
//!
//! Command-line tooling for route manifests.
//!
//! ## Commands
//!
//! ### `check`
//!
//! Register every entry of a manifest into a fresh registry and fail on the
//! first duplicate:
//!
//! ```bash
//! routereg check --manifest routes.yaml
//! ```
//!
//! ### `list`
//!
//! Same as `check`, then print the route table in registration order:
//!
//! ```bash
//! routereg list --manifest routes.yaml
//! ```
//!
//! `--manifest` falls back to `ROUTEREG_MANIFEST`, `--log-level` to
//! `ROUTEREG_LOG_LEVEL`.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{load_and_register, render_table, run_cli, Cli, Commands, ManifestRegistry};
