//! Automation element
//!
//! The element supplies the owning handle that patterns are resolved from
//! and keeps at most one resolved pattern per kind. It borrows the
//! [`ComRuntime`] it was created under, so the subsystem cannot be shut
//! down while the element or its cached patterns are alive:
//!
//! ```compile_fail
//! use uia_com::{ComRuntime, ForeignHandle, RawUnknown};
//! use uia_patterns::{AutomationElement, PatternKind};
//!
//! fn shutdown_under_element(mut runtime: ComRuntime, handle: ForeignHandle<dyn RawUnknown>) {
//!     let element = AutomationElement::new(&runtime, handle).unwrap();
//!     runtime.shutdown();
//!     let _ = element.supports(PatternKind::Toggle);
//! }
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use uia_com::{ComRuntime, ForeignHandle, RawUnknown};

use crate::error::{PatternError, Result};
use crate::patterns::AnyPattern;
use crate::{resolver, Pattern, PatternKind};

/// A node of the accessibility tree and its pattern cache
#[derive(Debug)]
pub struct AutomationElement<'rt> {
    runtime: &'rt ComRuntime,
    handle: ForeignHandle<dyn RawUnknown>,
    patterns: HashMap<PatternKind, AnyPattern>,
}

impl<'rt> AutomationElement<'rt> {
    /// Wrap an element handle
    ///
    /// Fails with [`PatternError::InvalidState`] if `runtime` has already
    /// been shut down.
    pub fn new(runtime: &'rt ComRuntime, handle: ForeignHandle<dyn RawUnknown>) -> Result<Self> {
        if !runtime.is_active() {
            return Err(PatternError::InvalidState(
                "native subsystem has been shut down".to_string(),
            ));
        }
        Ok(Self {
            runtime,
            handle,
            patterns: HashMap::new(),
        })
    }

    /// Runtime the element was created under
    pub fn runtime(&self) -> &'rt ComRuntime {
        self.runtime
    }

    /// Owning handle of the element
    pub fn handle(&self) -> &ForeignHandle<dyn RawUnknown> {
        &self.handle
    }

    /// Resolve a fresh, uncached instance of pattern `P`
    pub fn pattern<P: Pattern>(&self) -> Result<P> {
        resolver::resolve(&self.handle)
    }

    /// Unbound pattern `P` that resolves on its first operation
    pub fn lazy_pattern<P: Pattern>(&self) -> P {
        P::with_owner(self.handle.clone())
    }

    /// Cached pattern `P`, resolved on first request
    ///
    /// A pattern the element does not support is cached too; its
    /// operations keep failing with [`PatternError::Unavailable`] without
    /// querying the element again. A cached pattern the caller unbound is
    /// resolved again from the element's handle.
    pub fn pattern_mut<P: Pattern>(&mut self) -> Result<&mut P> {
        let handle = &self.handle;
        let any = match self.patterns.entry(P::KIND) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let pattern = resolver::resolve::<P, _>(handle)?;
                tracing::debug!(pattern = %P::KIND, bound = pattern.is_bound(), "pattern cached");
                entry.insert(pattern.into_any())
            }
        };

        let pattern = P::from_any_mut(any).ok_or_else(|| {
            PatternError::InvalidState(format!("cache entry for {} holds another pattern", P::KIND))
        })?;

        if pattern.is_available() && !pattern.is_unsupported() {
            *pattern = resolver::resolve(handle)?;
            tracing::debug!(pattern = %P::KIND, "cached pattern resolved again");
        }
        Ok(pattern)
    }

    /// Check whether the element exposes `kind`, without caching
    pub fn supports(&self, kind: PatternKind) -> Result<bool> {
        Ok(AnyPattern::resolve(kind, &self.handle)?.is_bound())
    }

    /// Kinds currently cached, in catalog order
    pub fn cached_kinds(&self) -> Vec<PatternKind> {
        let mut kinds: Vec<_> = self.patterns.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Drop every cached pattern and its handle
    pub fn release_patterns(&mut self) {
        let count = self.patterns.len();
        self.patterns.clear();
        if count > 0 {
            tracing::debug!(count, "cached patterns released");
        }
    }
}
