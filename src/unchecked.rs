//! Error normalization for callback boundaries
//!
//! This module turns arbitrary failures into a single normalized error
//! type, [`UncheckedError`], so that failure-raising logic can live inside
//! contexts with a fixed error contract (callback hosts, `filter_map`
//! pipelines, trait methods with a concrete error type). Nothing is
//! retried and nothing is swallowed: every failure is surfaced
//! immediately, re-categorized, with the original preserved as the cause.
//!
//! Three categories exist:
//!
//! - [`UncheckedError::Io`] for I/O failures,
//! - [`UncheckedError::Panic`] for panics captured at a call boundary,
//! - [`UncheckedError::Other`] for everything else.
//!
//! # Examples
//!
//! ```
//! use std::io;
//! use driftwood::unchecked::{get_unchecked, UncheckedError};
//!
//! let result = get_unchecked(|| -> Result<String, io::Error> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "missing.conf"))
//! });
//!
//! match result {
//!     Err(UncheckedError::Io(cause)) => assert_eq!(cause.kind(), io::ErrorKind::NotFound),
//!     other => panic!("expected an I/O category, got {:?}", other),
//! }
//! ```
//!
//! Wrapping a fallible function for use where an infallible-looking
//! signature is required:
//!
//! ```
//! use driftwood::unchecked::unchecked_fn;
//!
//! let parse = unchecked_fn(|s: &str| s.parse::<i32>());
//!
//! assert_eq!(parse("42").unwrap(), 42);
//! assert!(parse("nope").is_err());
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::panic::{self, AssertUnwindSafe};

/// A boxed error, the common currency of [`classify`].
pub type DynError = Box<dyn StdError + Send + Sync>;

/// A failure normalized into one of three categories.
///
/// The original failure is always reachable: as the [`source`] for the
/// `Io` and `Other` categories, and as the extracted message for `Panic`.
///
/// [`source`]: std::error::Error::source
#[derive(Debug)]
pub enum UncheckedError {
    /// An I/O failure. The wrapped error is the original cause.
    Io(io::Error),
    /// A panic captured at a call boundary, carrying the panic message.
    Panic(String),
    /// Any other failure, preserved as the cause.
    Other(DynError),
}

impl UncheckedError {
    /// Short name of this error's category: `"io"`, `"panic"`, or
    /// `"other"`.
    pub fn category(&self) -> &'static str {
        match self {
            UncheckedError::Io(_) => "io",
            UncheckedError::Panic(_) => "panic",
            UncheckedError::Other(_) => "other",
        }
    }
}

impl fmt::Display for UncheckedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UncheckedError::Io(cause) => write!(f, "I/O error: {}", cause),
            UncheckedError::Panic(message) => write!(f, "panic at call boundary: {}", message),
            UncheckedError::Other(cause) => write!(f, "error: {}", cause),
        }
    }
}

impl StdError for UncheckedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            UncheckedError::Io(cause) => Some(cause),
            UncheckedError::Panic(_) => None,
            UncheckedError::Other(cause) => Some(cause.as_ref()),
        }
    }
}

impl From<io::Error> for UncheckedError {
    fn from(cause: io::Error) -> Self {
        UncheckedError::Io(cause)
    }
}

/// Normalize a failure into an [`UncheckedError`].
///
/// Classification rules, in order:
///
/// 1. An already-normalized [`UncheckedError`] is taken as-is. Re-applying
///    `classify` never nests wrappers; the transform is idempotent.
/// 2. An [`io::Error`] becomes [`UncheckedError::Io`].
/// 3. Anything else becomes [`UncheckedError::Other`], with the original
///    preserved as the cause.
///
/// # Examples
///
/// ```
/// use std::error::Error;
/// use std::io;
/// use driftwood::unchecked::{classify, UncheckedError};
///
/// let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "locked");
/// assert!(matches!(classify(io_err), UncheckedError::Io(_)));
///
/// let other = classify("credential expired");
/// assert!(matches!(other, UncheckedError::Other(_)));
/// assert_eq!(other.source().unwrap().to_string(), "credential expired");
/// ```
///
/// Idempotence:
///
/// ```
/// use std::error::Error;
/// use driftwood::unchecked::{classify, UncheckedError};
///
/// let once = classify("boom");
/// let twice = classify(once);
/// // Still the original category, not an Other wrapping an Other
/// assert_eq!(twice.source().unwrap().to_string(), "boom");
/// ```
pub fn classify(err: impl Into<DynError>) -> UncheckedError {
    let normalized = classify_boxed(err.into());
    #[cfg(feature = "tracing")]
    tracing::debug!(category = normalized.category(), error = %normalized, "normalized failure");
    normalized
}

fn classify_boxed(err: DynError) -> UncheckedError {
    let err = match err.downcast::<UncheckedError>() {
        Ok(already_normalized) => return *already_normalized,
        Err(err) => err,
    };
    match err.downcast::<io::Error>() {
        Ok(io_err) => UncheckedError::Io(*io_err),
        Err(err) => UncheckedError::Other(err),
    }
}

/// Normalize a captured panic payload into an [`UncheckedError`].
///
/// A payload that carries an inner error (a [`DynError`] or an
/// [`UncheckedError`] used as the panic value) is unwrapped and
/// reclassified recursively, so an I/O error thrown through a panic still
/// lands in the `Io` category. String payloads, the common case, become
/// [`UncheckedError::Panic`] with the message preserved.
///
/// # Examples
///
/// ```
/// use std::panic;
/// use driftwood::unchecked::{classify_panic, UncheckedError};
///
/// let payload = panic::catch_unwind(|| panic!("ran aground")).unwrap_err();
/// match classify_panic(payload) {
///     UncheckedError::Panic(message) => assert_eq!(message, "ran aground"),
///     other => panic!("expected a panic category, got {:?}", other),
/// }
/// ```
pub fn classify_panic(payload: Box<dyn Any + Send>) -> UncheckedError {
    let payload = match payload.downcast::<UncheckedError>() {
        Ok(already_normalized) => return *already_normalized,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<DynError>() {
        Ok(inner) => return classify_boxed(*inner),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<io::Error>() {
        Ok(io_err) => return UncheckedError::Io(*io_err),
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<String>() {
        Ok(message) => return UncheckedError::Panic(*message),
        Err(payload) => payload,
    };
    match payload.downcast::<&'static str>() {
        Ok(message) => UncheckedError::Panic((*message).to_string()),
        Err(_) => UncheckedError::Panic("non-string panic payload".to_string()),
    }
}

/// Run a fallible action, normalizing any failure.
///
/// Returns `Ok(())` when the action succeeds. A returned error is passed
/// through [`classify`]; a panic inside the action is caught and passed
/// through [`classify_panic`] instead of unwinding into the caller.
///
/// # Examples
///
/// ```
/// use std::io;
/// use driftwood::unchecked::{run_unchecked, UncheckedError};
///
/// assert!(run_unchecked(|| Ok::<(), io::Error>(())).is_ok());
///
/// let failed = run_unchecked(|| -> Result<(), io::Error> {
///     Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
/// });
/// assert!(matches!(failed, Err(UncheckedError::Io(_))));
/// ```
pub fn run_unchecked<E, F>(action: F) -> Result<(), UncheckedError>
where
    E: Into<DynError>,
    F: FnOnce() -> Result<(), E>,
{
    match panic::catch_unwind(AssertUnwindSafe(action)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(classify(err)),
        Err(payload) => Err(classify_panic(payload)),
    }
}

/// Run a fallible supplier, returning its value or a normalized failure.
///
/// On success the value is passed through unchanged. A returned error is
/// passed through [`classify`]; a panic inside the supplier is caught and
/// passed through [`classify_panic`].
///
/// # Examples
///
/// ```
/// use driftwood::unchecked::get_unchecked;
///
/// let value = get_unchecked(|| "7".parse::<i32>());
/// assert_eq!(value.unwrap(), 7);
///
/// let failed = get_unchecked(|| "x".parse::<i32>());
/// assert!(failed.is_err());
/// ```
pub fn get_unchecked<T, E, F>(supplier: F) -> Result<T, UncheckedError>
where
    E: Into<DynError>,
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(supplier)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(classify(err)),
        Err(payload) => Err(classify_panic(payload)),
    }
}

/// Wrap a fallible one-argument function so its errors are normalized.
///
/// The wrapped function has the same input/output contract but fails only
/// with [`UncheckedError`], making it usable wherever a single concrete
/// error type is required.
///
/// # Examples
///
/// ```
/// use driftwood::unchecked::{unchecked_fn, UncheckedError};
///
/// let parse = unchecked_fn(|s: &str| s.parse::<u32>());
/// let parsed: Vec<Result<u32, UncheckedError>> = ["1", "2"].iter().map(|s| parse(s)).collect();
/// assert!(parsed.iter().all(Result::is_ok));
/// ```
pub fn unchecked_fn<A, T, E, F>(f: F) -> impl Fn(A) -> Result<T, UncheckedError>
where
    E: Into<DynError>,
    F: Fn(A) -> Result<T, E>,
{
    move |a| f(a).map_err(classify)
}

/// The identity function in the bridge's fallible shape.
///
/// Always succeeds with its input. Useful as a neutral element where a
/// `Fn(T) -> Result<T, UncheckedError>` is expected.
///
/// # Examples
///
/// ```
/// use driftwood::unchecked::identity;
///
/// assert_eq!(identity("unchanged").unwrap(), "unchanged");
/// ```
pub fn identity<T>(value: T) -> Result<T, UncheckedError> {
    Ok(value)
}
