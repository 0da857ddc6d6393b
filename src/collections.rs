//! Null-tolerant collection copy, filter, and view helpers
//!
//! Every helper in this module is total over "container or absent": the
//! absent container is modeled as `Option`, and `None` never fails: it
//! yields a fresh, empty result of the expected kind. Copies are shallow in
//! the Rust sense: elements are cloned, container identity is not shared,
//! and the input is never mutated.
//!
//! # Examples
//!
//! ```
//! use driftwood::collections::{copy_vec, copy_vec_if, concat};
//!
//! let source = vec![1, 2, 3, 4];
//!
//! // Defensive copy; the result is independently mutable
//! let mut copied = copy_vec(Some(source.as_slice()));
//! copied.push(5);
//! assert_eq!(source.len(), 4);
//!
//! // Absent input is treated as empty
//! assert!(copy_vec::<i32>(None).is_empty());
//!
//! // Filtered copy
//! assert_eq!(copy_vec_if(Some(source.as_slice()), |x| x % 2 == 0), vec![2, 4]);
//!
//! // Flat concatenation in order
//! assert_eq!(concat([vec![1, 2], vec![3]]), vec![1, 2, 3]);
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use std::ops::Deref;

/// Membership testing for the second operand of [`contains_any`].
///
/// Each container kind answers membership with its native lookup, so a
/// `HashSet` or `BTreeSet` operand keeps its sublinear probe while slices
/// fall back to a linear scan.
pub trait Membership<T> {
    /// Whether `element` is contained in this container, by equality.
    fn contains_element(&self, element: &T) -> bool;
}

impl<T: PartialEq> Membership<T> for [T] {
    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq> Membership<T> for Vec<T> {
    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: Eq + Hash> Membership<T> for HashSet<T> {
    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    #[inline]
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }
}

/// Whether any element of `a` is also an element of `b`.
///
/// Short-circuits on the first match. Costs one membership probe of `b`
/// per element of `a` visited.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use driftwood::collections::contains_any;
///
/// let names = vec!["ada", "grace"];
/// let reserved: HashSet<&str> = ["root", "grace"].into_iter().collect();
///
/// assert!(contains_any(&names, &reserved));
/// assert!(!contains_any(&vec!["ada"], &reserved));
/// ```
pub fn contains_any<'a, T, A, M>(a: A, b: &M) -> bool
where
    T: 'a,
    A: IntoIterator<Item = &'a T>,
    M: Membership<T> + ?Sized,
{
    a.into_iter().any(|element| b.contains_element(element))
}

/// Copy an ordered sequence, treating `None` as empty.
///
/// # Examples
///
/// ```
/// use driftwood::collections::copy_vec;
///
/// assert_eq!(copy_vec(Some(&[1, 2][..])), vec![1, 2]);
/// assert!(copy_vec::<u8>(None).is_empty());
/// ```
pub fn copy_vec<T: Clone>(list: Option<&[T]>) -> Vec<T> {
    list.map(<[T]>::to_vec).unwrap_or_default()
}

/// Copy a hash set, treating `None` as empty.
pub fn copy_set<T>(set: Option<&HashSet<T>>) -> HashSet<T>
where
    T: Clone + Eq + Hash,
{
    set.cloned().unwrap_or_default()
}

/// Copy a sorted set, treating `None` as empty.
///
/// The semantic kind is preserved: copying a sorted set yields a sorted
/// set, not an unordered one.
pub fn copy_sorted_set<T>(set: Option<&BTreeSet<T>>) -> BTreeSet<T>
where
    T: Clone + Ord,
{
    set.cloned().unwrap_or_default()
}

/// Copy a key-value mapping, treating `None` as empty.
pub fn copy_map<K, V>(map: Option<&HashMap<K, V>>) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    map.cloned().unwrap_or_default()
}

/// Copy the elements of an ordered sequence that satisfy `filter`.
///
/// `None` yields an empty sequence; the input is never mutated.
///
/// # Examples
///
/// ```
/// use driftwood::collections::copy_vec_if;
///
/// let nums = vec![1, 2, 3, 4, 5];
/// assert_eq!(copy_vec_if(Some(nums.as_slice()), |n| n % 2 != 0), vec![1, 3, 5]);
/// ```
pub fn copy_vec_if<T, P>(list: Option<&[T]>, filter: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    match list {
        Some(items) => items.iter().filter(|item| filter(item)).cloned().collect(),
        None => Vec::new(),
    }
}

/// Copy the elements of a hash set that satisfy `filter`.
pub fn copy_set_if<T, P>(set: Option<&HashSet<T>>, filter: P) -> HashSet<T>
where
    T: Clone + Eq + Hash,
    P: Fn(&T) -> bool,
{
    match set {
        Some(items) => items.iter().filter(|item| filter(item)).cloned().collect(),
        None => HashSet::new(),
    }
}

/// Copy the entries of a mapping whose key and value satisfy `filter`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use driftwood::collections::copy_map_if;
///
/// let mut scores = HashMap::new();
/// scores.insert("ada", 90);
/// scores.insert("bob", 40);
///
/// let passing = copy_map_if(Some(&scores), |_, score| *score >= 50);
/// assert_eq!(passing.len(), 1);
/// assert_eq!(passing["ada"], 90);
/// ```
pub fn copy_map_if<K, V, P>(map: Option<&HashMap<K, V>>, filter: P) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    P: Fn(&K, &V) -> bool,
{
    match map {
        Some(entries) => entries
            .iter()
            .filter(|(k, v)| filter(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        None => HashMap::new(),
    }
}

/// A read-only view over a container.
///
/// Created by [`unmodifiable`]. The view derefs to the container and
/// exposes no mutable surface, so mutation through it is rejected at
/// compile time:
///
/// ```compile_fail
/// use driftwood::collections::unmodifiable;
///
/// let items = vec![1, 2, 3];
/// let view = unmodifiable(Some(&items));
/// view.push(4); // does not compile: the view is read-only
/// ```
///
/// While the view borrows the original, the original cannot be mutated
/// either; the view is a true snapshot of whatever it observes.
#[derive(Debug)]
pub struct Unmodifiable<'a, C>(ViewRepr<'a, C>);

#[derive(Debug)]
enum ViewRepr<'a, C> {
    Borrowed(&'a C),
    Empty(C),
}

impl<C> Deref for Unmodifiable<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        match &self.0 {
            ViewRepr::Borrowed(container) => container,
            ViewRepr::Empty(container) => container,
        }
    }
}

impl<C> AsRef<C> for Unmodifiable<'_, C> {
    fn as_ref(&self) -> &C {
        self
    }
}

/// A read-only view over `container`, or over an owned empty container if
/// absent.
///
/// Works for any container with a `Default` empty value (`Vec`, `HashSet`,
/// `BTreeSet`, `HashMap`, ...).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use driftwood::collections::unmodifiable;
///
/// let mut settings = HashMap::new();
/// settings.insert("debug", true);
///
/// let view = unmodifiable(Some(&settings));
/// assert_eq!(view.get("debug"), Some(&true));
///
/// let empty = unmodifiable::<HashMap<&str, bool>>(None);
/// assert!(empty.is_empty());
/// ```
pub fn unmodifiable<C: Default>(container: Option<&C>) -> Unmodifiable<'_, C> {
    match container {
        Some(c) => Unmodifiable(ViewRepr::Borrowed(c)),
        None => Unmodifiable(ViewRepr::Empty(C::default())),
    }
}

/// Collect a container's distinct elements into a hash set.
///
/// `None` yields an empty set; order is not preserved.
///
/// # Examples
///
/// ```
/// use driftwood::collections::to_set;
///
/// let set = to_set(Some(vec![1, 2, 2, 3]));
/// assert_eq!(set.len(), 3);
/// assert!(to_set::<i32, Vec<i32>>(None).is_empty());
/// ```
pub fn to_set<T, I>(collection: Option<I>) -> HashSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    collection
        .map(|items| items.into_iter().collect())
        .unwrap_or_default()
}

/// Build a set from a sequence of elements, the set analog of a literal.
///
/// Duplicates collapse, as sets do.
///
/// # Examples
///
/// ```
/// use driftwood::collections::as_set;
///
/// let stooges = as_set(["Larry", "Moe", "Curly", "Moe"]);
/// assert_eq!(stooges.len(), 3);
/// ```
pub fn as_set<T: Eq + Hash>(elements: impl IntoIterator<Item = T>) -> HashSet<T> {
    elements.into_iter().collect()
}

/// Concatenate ordered sequences into one flat sequence.
///
/// Elements appear in argument order, then per-sequence iteration order.
///
/// # Examples
///
/// ```
/// use driftwood::collections::concat;
///
/// let all = concat([vec![1, 2], vec![], vec![3]]);
/// assert_eq!(all, vec![1, 2, 3]);
/// ```
pub fn concat<T, I>(sequences: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    sequences.into_iter().flatten().collect()
}
