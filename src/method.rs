//! # Method Sets
//!
//! A route accepts either an explicit, non-empty set of HTTP methods or the
//! `Any` wildcard. The two are distinct: `Any` also covers extension methods
//! that no explicit list enumerates, and it overlaps with every other set on
//! the same path, including another `Any`.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use routereg::MethodSet;
//!
//! let read = MethodSet::from(Method::GET);
//! let write = MethodSet::from([Method::POST, Method::PUT]);
//! assert!(!read.overlaps(&write));
//! assert!(MethodSet::Any.overlaps(&read));
//! assert_eq!(write.to_string(), "POST, PUT");
//! ```

use http::Method;
use smallvec::SmallVec;
use std::fmt;

/// Most routes accept one or two methods.
pub const MAX_INLINE_METHODS: usize = 4;

/// Deduplicated method list, kept in first-seen order for display.
pub type MethodVec = SmallVec<[Method; MAX_INLINE_METHODS]>;

/// The set of HTTP methods a route accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MethodSet {
    /// An explicit, non-empty list of methods.
    Explicit(MethodVec),
    /// Every method, including ones no explicit list names.
    #[default]
    Any,
}

impl MethodSet {
    /// Build a method set from a list of methods.
    ///
    /// Duplicates are collapsed. An empty list canonicalizes to [`MethodSet::Any`],
    /// the same as omitting the list.
    pub fn from_methods<I>(methods: I) -> Self
    where
        I: IntoIterator<Item = Method>,
    {
        let mut set = MethodVec::new();
        for method in methods {
            if !set.contains(&method) {
                set.push(method);
            }
        }
        if set.is_empty() {
            MethodSet::Any
        } else {
            MethodSet::Explicit(set)
        }
    }

    /// Restore the canonical form of a set that may have been built by hand.
    ///
    /// An `Explicit` list is deduplicated, and an empty one becomes
    /// [`MethodSet::Any`].
    #[must_use]
    pub fn canonicalize(self) -> Self {
        match self {
            MethodSet::Any => MethodSet::Any,
            MethodSet::Explicit(methods) => Self::from_methods(methods),
        }
    }

    /// Parse caller-supplied method names.
    ///
    /// Names are trimmed and upper-cased. `*` or `any` (any case) anywhere in
    /// the list yields the wildcard, but every other name must still be valid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMethodError`] if a name is not a valid HTTP method token.
    pub fn parse<I, S>(names: I) -> Result<Self, InvalidMethodError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods = MethodVec::new();
        let mut wildcard = false;
        for name in names {
            let name = name.as_ref().trim().to_ascii_uppercase();
            if name == "*" || name == "ANY" {
                wildcard = true;
                continue;
            }
            let method = Method::from_bytes(name.as_bytes())
                .map_err(|_| InvalidMethodError { method: name.clone() })?;
            methods.push(method);
        }
        if wildcard {
            return Ok(MethodSet::Any);
        }
        Ok(Self::from_methods(methods))
    }

    /// True for the `Any` wildcard.
    #[inline]
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, MethodSet::Any)
    }

    /// Whether a request with `method` would be accepted by this set.
    #[must_use]
    pub fn contains(&self, method: &Method) -> bool {
        match self {
            MethodSet::Any => true,
            MethodSet::Explicit(methods) => methods.contains(method),
        }
    }

    /// Whether two registrations on the same path would collide.
    ///
    /// `Any` overlaps unconditionally. Two explicit sets overlap iff they
    /// share at least one method.
    #[must_use]
    pub fn overlaps(&self, other: &MethodSet) -> bool {
        match (self, other) {
            (MethodSet::Any, _) | (_, MethodSet::Any) => true,
            (MethodSet::Explicit(a), MethodSet::Explicit(b)) => a.iter().any(|m| b.contains(m)),
        }
    }

    /// The explicit methods, or `None` for the wildcard.
    #[must_use]
    pub fn methods(&self) -> Option<&[Method]> {
        match self {
            MethodSet::Any => None,
            MethodSet::Explicit(methods) => Some(methods),
        }
    }
}

impl From<Method> for MethodSet {
    fn from(method: Method) -> Self {
        let mut methods = MethodVec::new();
        methods.push(method);
        MethodSet::Explicit(methods)
    }
}

impl From<Option<MethodSet>> for MethodSet {
    fn from(methods: Option<MethodSet>) -> Self {
        methods.unwrap_or(MethodSet::Any)
    }
}

impl From<Vec<Method>> for MethodSet {
    fn from(methods: Vec<Method>) -> Self {
        MethodSet::from_methods(methods)
    }
}

impl From<&[Method]> for MethodSet {
    fn from(methods: &[Method]) -> Self {
        MethodSet::from_methods(methods.iter().cloned())
    }
}

impl<const N: usize> From<[Method; N]> for MethodSet {
    fn from(methods: [Method; N]) -> Self {
        MethodSet::from_methods(methods)
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodSet::Any => write!(f, "any"),
            MethodSet::Explicit(methods) => {
                for (i, method) in methods.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{method}")?;
                }
                Ok(())
            }
        }
    }
}

/// A method name that is not a valid HTTP token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMethodError {
    /// The rejected name, after normalization
    pub method: String,
}

impl fmt::Display for InvalidMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid HTTP method '{}'", self.method)
    }
}

impl std::error::Error for InvalidMethodError {}
