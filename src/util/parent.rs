//! Access to a "parent" object held through a weak back-reference
//!
//! Objects that keep a [`Weak`] reference to their owner should not be used
//! after the owner is gone. Doing so is a programming error, so these helpers
//! panic with a message naming the parent type and the caller's location.

use std::any::type_name;
use std::rc;
use std::sync::Weak;

/// Run `f` with the live parent behind `parent`.
///
/// # Panics
///
/// When the parent has already been dropped.
#[track_caller]
pub fn with_parent<P, R>(parent: &Weak<P>, f: impl FnOnce(&P) -> R) -> R {
    match parent.upgrade() {
        Some(parent) => f(&parent),
        None => missing_parent::<P>(),
    }
}

/// [`with_parent`] for single-threaded [`rc::Weak`] back-references.
#[track_caller]
pub fn with_local_parent<P, R>(parent: &rc::Weak<P>, f: impl FnOnce(&P) -> R) -> R {
    match parent.upgrade() {
        Some(parent) => f(&parent),
        None => missing_parent::<P>(),
    }
}

/// [`with_parent`] for an already resolved, optional parent.
#[track_caller]
pub fn with_parent_opt<P, R>(parent: Option<P>, f: impl FnOnce(P) -> R) -> R {
    match parent {
        Some(parent) => f(parent),
        None => missing_parent::<P>(),
    }
}

#[track_caller]
fn missing_parent<P>() -> ! {
    let caller = std::panic::Location::caller();
    panic!(
        "Using {caller} on an object without parent `{}`",
        type_name::<P>()
    )
}
