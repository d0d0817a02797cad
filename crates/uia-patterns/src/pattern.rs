//! Pattern base contract
//!
//! Every concrete pattern wraps a [`PatternSlot`] holding at most one
//! handle for its interface. The slot is the only state the base contract
//! carries; operation-specific state lives in the variants.

use std::fmt;

use uia_com::{ForeignHandle, Interface, RawUnknown};

use crate::error::{PatternError, Result};
use crate::patterns::AnyPattern;
use crate::resolver;
use crate::PatternKind;

/// A control pattern bound to exactly one foreign interface
pub trait Pattern: Sized {
    /// Foreign contract of this pattern
    type Raw: ?Sized + Interface;

    /// Which pattern this is
    const KIND: PatternKind;

    /// Build the pattern around a slot
    fn from_slot(slot: PatternSlot<Self::Raw>) -> Self;

    /// Borrow the slot
    fn slot(&self) -> &PatternSlot<Self::Raw>;

    /// Mutably borrow the slot
    fn slot_mut(&mut self) -> &mut PatternSlot<Self::Raw>;

    /// Wrap into the tagged union
    fn into_any(self) -> AnyPattern;

    /// Borrow out of the tagged union if the variant matches
    fn from_any_mut(any: &mut AnyPattern) -> Option<&mut Self>;

    /// Unbound pattern with nothing to resolve from
    fn new() -> Self {
        Self::from_slot(PatternSlot::new(Self::KIND))
    }

    /// Unbound pattern that resolves from `owner` on first use
    fn with_owner(owner: ForeignHandle<dyn RawUnknown>) -> Self {
        Self::from_slot(PatternSlot::with_owner(Self::KIND, owner))
    }

    /// True iff no foreign handle is bound
    ///
    /// This reports the *unbound* state: it is true right after
    /// construction and false once [`bind`](Pattern::bind) has run. Use
    /// [`is_bound`](Pattern::is_bound) for the positive question.
    fn is_available(&self) -> bool {
        self.slot().is_available()
    }

    /// True iff a foreign handle is bound
    fn is_bound(&self) -> bool {
        self.slot().is_bound()
    }

    /// True once resolution found the pattern missing on the element
    fn is_unsupported(&self) -> bool {
        self.slot().is_unsupported()
    }

    /// Attach a handle, releasing the previously bound one first
    fn bind(&mut self, handle: ForeignHandle<Self::Raw>) {
        self.slot_mut().bind(handle);
    }

    /// Drop the bound handle, if any
    fn unbind(&mut self) {
        self.slot_mut().unbind();
    }
}

/// Storage for a pattern's foreign handle
///
/// States:
/// - unbound, with or without an owner to resolve from
/// - bound to exactly one handle
/// - known unsupported (the owner answered `E_NOINTERFACE`)
pub struct PatternSlot<I: ?Sized + Interface> {
    kind: PatternKind,
    owner: Option<ForeignHandle<dyn RawUnknown>>,
    bound: Option<ForeignHandle<I>>,
    unsupported: bool,
}

impl<I: ?Sized + Interface> PatternSlot<I> {
    /// Empty slot
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            owner: None,
            bound: None,
            unsupported: false,
        }
    }

    /// Empty slot that resolves lazily from `owner`
    pub fn with_owner(kind: PatternKind, owner: ForeignHandle<dyn RawUnknown>) -> Self {
        Self {
            owner: Some(owner),
            ..Self::new(kind)
        }
    }

    /// Empty slot recorded as unsupported
    pub(crate) fn unsupported(kind: PatternKind) -> Self {
        Self {
            unsupported: true,
            ..Self::new(kind)
        }
    }

    /// Pattern kind this slot belongs to
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// True iff no handle is bound
    pub fn is_available(&self) -> bool {
        self.bound.is_none()
    }

    /// True iff a handle is bound
    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// True once resolution has found the interface missing
    pub fn is_unsupported(&self) -> bool {
        self.unsupported
    }

    /// Bound handle, without resolving
    pub fn handle(&self) -> Option<&ForeignHandle<I>> {
        self.bound.as_ref()
    }

    /// Attach a handle, releasing the previous one first
    pub fn bind(&mut self, handle: ForeignHandle<I>) {
        let rebind = self.bound.take().is_some();
        self.bound = Some(handle);
        self.unsupported = false;
        tracing::trace!(pattern = %self.kind, rebind, "pattern bound");
    }

    /// Release the bound handle
    pub fn unbind(&mut self) {
        if self.bound.take().is_some() {
            tracing::trace!(pattern = %self.kind, "pattern unbound");
        }
    }

    /// Bound handle, resolving it from the owner first if needed
    ///
    /// Fails with [`PatternError::Unavailable`] when the owner does not
    /// support the interface, and with [`PatternError::InvalidState`] when
    /// there is no handle and no owner to resolve from.
    pub fn resolve(&mut self) -> Result<&ForeignHandle<I>> {
        if self.bound.is_none() {
            if self.unsupported {
                return Err(PatternError::Unavailable(self.kind));
            }

            let owner = self.owner.as_ref().ok_or_else(|| {
                PatternError::InvalidState(format!(
                    "{} pattern is not bound and has no element to resolve from",
                    self.kind
                ))
            })?;

            match resolver::query::<I, _>(owner)? {
                Some(handle) => self.bind(handle),
                None => {
                    self.unsupported = true;
                    return Err(PatternError::Unavailable(self.kind));
                }
            }
        }

        self.bound.as_ref().ok_or_else(|| {
            PatternError::InvalidState(format!("{} pattern lost its binding", self.kind))
        })
    }
}

impl<I: ?Sized + Interface> fmt::Debug for PatternSlot<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternSlot")
            .field("kind", &self.kind)
            .field("bound", &self.bound.is_some())
            .field("owner", &self.owner.is_some())
            .field("unsupported", &self.unsupported)
            .finish()
    }
}
