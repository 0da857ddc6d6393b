//! # Driftwood
//!
//! > *Small pieces, worn smooth, useful everywhere*
//!
//! A small utility library of three independent facilities:
//!
//! - [`compose`]: function-composition helpers: currying, argument
//!   reversal, left fold, and runtime type-matching projection.
//! - [`collections`]: null-tolerant collection helpers: defensive
//!   copies, filtered copies, read-only views, set construction, and
//!   concatenation, all treating the absent container as empty.
//! - [`unchecked`]: error normalization: run fallible operations behind
//!   callback-shaped signatures, with every failure re-categorized into a
//!   single [`UncheckedError`] taxonomy, cause preserved.
//!
//! The modules do not interact; each is a set of stateless, synchronous
//! transformations over caller-supplied values.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::io;
//! use driftwood::collections::{as_set, copy_vec_if};
//! use driftwood::compose::fold_left;
//! use driftwood::unchecked::{get_unchecked, UncheckedError};
//!
//! // Collection helpers tolerate the absent container
//! assert!(copy_vec_if::<i32, _>(None, |_| true).is_empty());
//! assert_eq!(as_set(["a", "b", "a"]).len(), 2);
//!
//! // Explicit left fold
//! assert_eq!(fold_left([1, 2, 3], |acc, x| acc + x, 0), 6);
//!
//! // Failures come back normalized, cause intact
//! let result = get_unchecked(|| -> Result<(), io::Error> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
//! });
//! assert!(matches!(result, Err(UncheckedError::Io(_))));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod collections;
pub mod compose;
pub mod unchecked;

// Re-exports
pub use collections::Unmodifiable;
pub use unchecked::{classify, get_unchecked, run_unchecked, unchecked_fn, UncheckedError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::collections::{
        as_set, concat, contains_any, copy_map, copy_map_if, copy_set, copy_set_if,
        copy_sorted_set, copy_vec, copy_vec_if, to_set, unmodifiable, Membership, Unmodifiable,
    };
    pub use crate::compose::{apply, curry, curry_apply, curry_pred, flip, fold_left, match_type};
    pub use crate::unchecked::{
        classify, classify_panic, get_unchecked, identity, run_unchecked, unchecked_fn, DynError,
        UncheckedError,
    };
}
