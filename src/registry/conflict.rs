//! Duplicate-route detection.
//!
//! Two registrations conflict when they use the same path string and their
//! method sets overlap (see [`MethodSet::overlaps`]). Paths are compared by
//! exact string equality: `/users/{id}` and `/users/{user_id}` never conflict
//! here even though a matcher may treat them as the same route.

use crate::method::MethodSet;
use std::collections::HashMap;

use super::error::DuplicateRouteError;

#[derive(Debug, Clone)]
struct Entry {
    methods: MethodSet,
    name: Option<String>,
}

/// Accepted `(path, methods)` pairs, grouped by path. Append-only.
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    by_path: HashMap<String, Vec<Entry>>,
}

impl ConflictDetector {
    /// An empty detector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a candidate and record it if it does not collide.
    ///
    /// `methods` is canonicalized first, so a hand-built empty explicit set
    /// is recorded as `Any`.
    ///
    /// The candidate is compared against every entry already accepted for
    /// `path`; the first overlapping entry rejects it. O(k) in the number of
    /// entries at that path.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateRouteError`] naming the blocking entry. Nothing is
    /// recorded in that case.
    pub fn check(
        &mut self,
        path: &str,
        methods: &MethodSet,
        name: Option<&str>,
    ) -> Result<(), DuplicateRouteError> {
        let methods = methods.clone().canonicalize();
        if let Some(existing) = self.find_entry(path, &methods) {
            return Err(DuplicateRouteError {
                path: path.to_string(),
                existing: existing.methods.clone(),
                requested: methods,
                existing_name: existing.name.clone(),
            });
        }

        self.by_path
            .entry(path.to_string())
            .or_default()
            .push(Entry {
                methods,
                name: name.map(str::to_string),
            });
        Ok(())
    }

    /// The method set of the first accepted entry that would block `methods`
    /// on `path`, without recording anything.
    #[must_use]
    pub fn find_conflict(&self, path: &str, methods: &MethodSet) -> Option<&MethodSet> {
        self.find_entry(path, &methods.clone().canonicalize())
            .map(|e| &e.methods)
    }

    /// Number of distinct paths seen.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.by_path.len()
    }

    fn find_entry(&self, path: &str, methods: &MethodSet) -> Option<&Entry> {
        self.by_path
            .get(path)?
            .iter()
            .find(|entry| entry.methods.overlaps(methods))
    }
}
