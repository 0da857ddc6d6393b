//! Function-composition helpers
//!
//! This module provides small composition primitives that Rust's closure
//! types do not offer directly: partial application (`curry`), argument
//! reversal (`flip`), an explicit left fold (`fold_left`), and a runtime
//! type-matching projection (`match_type`).
//!
//! # Examples
//!
//! ```
//! use driftwood::compose::{curry, flip, fold_left};
//!
//! let add = |a: i32, b: i32| a + b;
//!
//! let add_ten = curry(add, 10);
//! assert_eq!(add_ten(5), 15);
//!
//! let sub = |a: i32, b: i32| a - b;
//! assert_eq!(flip(sub)(3, 10), 7);
//!
//! assert_eq!(fold_left([1, 2, 3], |acc, x| acc + x, 0), 6);
//! ```

use std::any::Any;
use std::iter;

/// Project a dynamically typed value into a single-element iterator of `T`.
///
/// Returns `Some` containing a one-element iterator when the value is a `T`
/// at runtime, and `None` otherwise. Note the asymmetry: a non-match yields
/// an *absent* iterator, never an empty one. Callers chaining this through
/// [`Iterator::filter_map`] get the "collect matching elements of a
/// heterogeneous collection by type" pattern for free, because `filter_map`
/// drops the `None`s.
///
/// The generic function item itself is the projection: `match_type::<T>`
/// can be passed anywhere an `Fn(&dyn Any) -> Option<_>` is expected.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use driftwood::compose::match_type;
///
/// let mixed: Vec<Box<dyn Any>> = vec![Box::new(1_i32), Box::new("s"), Box::new(2_i32)];
///
/// let ints: Vec<i32> = mixed
///     .iter()
///     .filter_map(|value| match_type::<i32>(value.as_ref()))
///     .flatten()
///     .copied()
///     .collect();
///
/// assert_eq!(ints, vec![1, 2]);
/// ```
///
/// A non-match is `None`, not an empty iterator:
///
/// ```
/// use std::any::Any;
/// use driftwood::compose::match_type;
///
/// let value: Box<dyn Any> = Box::new("text");
/// assert!(match_type::<i32>(value.as_ref()).is_none());
/// ```
pub fn match_type<T: Any>(value: &dyn Any) -> Option<iter::Once<&T>> {
    value.downcast_ref::<T>().map(iter::once)
}

/// Partially apply a two-argument function, binding its first argument.
///
/// The returned closure is reusable, so the bound argument must be `Clone`;
/// it is cloned on each call.
///
/// # Examples
///
/// ```
/// use driftwood::compose::curry;
///
/// let join = |sep: &str, word: &str| format!("{}{}", sep, word);
/// let prefixed = curry(join, "# ");
///
/// assert_eq!(prefixed("title"), "# title");
/// assert_eq!(prefixed("other"), "# other");
/// ```
pub fn curry<A, B, C, F>(f: F, a: A) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    move |b| f(a.clone(), b)
}

/// Fully-applied shorthand for [`curry`]: `curry_apply(f, a, b)` is
/// `curry(f, a)(b)`, which is `f(a, b)`.
///
/// # Examples
///
/// ```
/// use driftwood::compose::curry_apply;
///
/// assert_eq!(curry_apply(|a: i32, b: i32| a * b, 6, 7), 42);
/// ```
pub fn curry_apply<A, B, C, F>(f: F, a: A, b: B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    curry(f, a)(b)
}

/// Immediate application of a one-argument function.
///
/// This is the degenerate single-argument case of [`curry`]: there is
/// nothing left to bind, so the function is applied directly. It exists for
/// API symmetry with [`curry_apply`].
///
/// # Examples
///
/// ```
/// use driftwood::compose::apply;
///
/// assert_eq!(apply(|x: i32| x + 1, 41), 42);
/// ```
pub fn apply<A, B, F>(f: F, a: A) -> B
where
    F: FnOnce(A) -> B,
{
    f(a)
}

/// Partially apply a two-argument predicate, binding its first argument.
///
/// Predicates take their arguments by reference, so no cloning is needed;
/// the bound value is moved into the returned closure and borrowed on each
/// call.
///
/// # Examples
///
/// ```
/// use driftwood::compose::curry_pred;
///
/// let longer_than = |limit: &usize, s: &String| s.len() > *limit;
/// let longer_than_three = curry_pred(longer_than, 3);
///
/// assert!(longer_than_three(&"driftwood".to_string()));
/// assert!(!longer_than_three(&"dry".to_string()));
/// ```
pub fn curry_pred<A, B, P>(p: P, a: A) -> impl Fn(&B) -> bool
where
    P: Fn(&A, &B) -> bool,
{
    move |b| p(&a, b)
}

/// Reverse the argument order of a two-argument function.
///
/// `flip(f)(a, b)` is `f(b, a)`.
///
/// # Examples
///
/// ```
/// use driftwood::compose::flip;
///
/// let divide = |a: f64, b: f64| a / b;
/// assert_eq!(flip(divide)(2.0, 10.0), 5.0);
/// ```
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

/// Left-to-right reduction over a container's iteration order.
///
/// Starts from `init` and folds each element into the accumulator in
/// iteration order. For containers without a defined order (such as
/// `HashSet`) the result of an order-dependent accumulator is
/// nondeterministic; callers needing determinism must supply an ordered
/// container.
///
/// # Examples
///
/// ```
/// use driftwood::compose::fold_left;
///
/// let sum = fold_left([1, 2, 3], |acc, x| acc + x, 0);
/// assert_eq!(sum, 6);
///
/// // Order-dependent: fold_left is not fold_right
/// let digits = fold_left(["1", "2", "3"], |acc: String, d| acc + d, String::new());
/// assert_eq!(digits, "123");
/// ```
pub fn fold_left<A, B, I, F>(items: I, mut f: F, init: B) -> B
where
    I: IntoIterator<Item = A>,
    F: FnMut(B, A) -> B,
{
    let mut acc = init;
    for item in items {
        acc = f(acc, item);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_hit_yields_single_element() {
        let value: Box<dyn Any> = Box::new(7_i32);
        let matched: Vec<&i32> = match_type::<i32>(value.as_ref())
            .expect("i32 value should match i32")
            .collect();
        assert_eq!(matched, vec![&7]);
    }

    #[test]
    fn test_match_type_miss_is_absent_not_empty() {
        let value: Box<dyn Any> = Box::new("not an i32");
        assert!(match_type::<i32>(value.as_ref()).is_none());
    }

    #[test]
    fn test_match_type_collects_by_type() {
        let mixed: Vec<Box<dyn Any>> = vec![
            Box::new(1_u8),
            Box::new("a"),
            Box::new(2_u8),
            Box::new(3.5_f64),
        ];
        let bytes: Vec<u8> = mixed
            .iter()
            .filter_map(|v| match_type::<u8>(v.as_ref()))
            .flatten()
            .copied()
            .collect();
        assert_eq!(bytes, vec![1, 2]);
    }

    #[test]
    fn test_curry_binds_first_argument() {
        let add = |a: i32, b: i32| a + b;
        let add_five = curry(add, 5);
        assert_eq!(add_five(1), 6);
        assert_eq!(add_five(-5), 0);
    }

    #[test]
    fn test_curry_apply_equals_direct_call() {
        let concat = |a: String, b: String| a + &b;
        assert_eq!(
            curry_apply(concat, "foo".to_string(), "bar".to_string()),
            "foobar"
        );
    }

    #[test]
    fn test_curry_then_apply_equals_curry_apply() {
        let sub = |a: i32, b: i32| a - b;
        assert_eq!(curry(sub, 10)(3), curry_apply(sub, 10, 3));
    }

    #[test]
    fn test_apply_is_immediate() {
        assert_eq!(apply(|s: &str| s.len(), "four"), 4);
    }

    #[test]
    fn test_curry_pred() {
        let divisible = |d: &i32, n: &i32| n % d == 0;
        let even = curry_pred(divisible, 2);
        assert!(even(&4));
        assert!(!even(&5));
    }

    #[test]
    fn test_flip_swaps_arguments() {
        let pair = |a: i32, b: &str| format!("{}:{}", a, b);
        let flipped = flip(pair);
        assert_eq!(flipped("x", 1), pair(1, "x"));
    }

    #[test]
    fn test_fold_left_sums() {
        assert_eq!(fold_left([1, 2, 3], |acc, x| acc + x, 0), 6);
    }

    #[test]
    fn test_fold_left_empty_returns_initial() {
        let empty: [i32; 0] = [];
        assert_eq!(fold_left(empty, |acc, x| acc + x, 41), 41);
    }

    #[test]
    fn test_fold_left_is_left_associative() {
        // (((10 - 1) - 2) - 3) = 4, not 10 - (1 - (2 - 3)) = 6
        assert_eq!(fold_left([1, 2, 3], |acc, x| acc - x, 10), 4);
    }

    #[test]
    fn test_fold_left_over_borrowed_vec() {
        let words = vec!["a".to_string(), "b".to_string()];
        let joined = fold_left(&words, |acc: String, w: &String| acc + w, String::new());
        assert_eq!(joined, "ab");
    }
}
