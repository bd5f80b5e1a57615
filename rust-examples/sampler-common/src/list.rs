//! # Sequence Operations
//!
//! Generic higher-order operations over borrowed slices.
//!
//! Every function here takes `&[T]` and returns a fresh value. The input
//! slice is never mutated, which the borrow checker enforces for free.
//!
//! ## Example
//!
//! ```
//! use sampler_common::list::{apply, filter, reduce};
//!
//! let nums = vec![1, 2, 3, 4, 5];
//!
//! let squares = apply(&nums, |x| x * x);
//! assert_eq!(squares, vec![1, 4, 9, 16, 25]);
//!
//! let evens = filter(&nums, |x| x % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let total = reduce(&nums, 0, |acc, x| acc + x);
//! assert_eq!(total, 15);
//!
//! // The original is untouched.
//! assert_eq!(nums, vec![1, 2, 3, 4, 5]);
//! ```

/// Transforms every element, preserving order and length.
///
/// # Example
/// ```
/// use sampler_common::list::apply;
/// assert_eq!(apply(&[1, 2, 3, 4], |x| x * x), vec![1, 4, 9, 16]);
/// assert!(apply(&[] as &[i64], |x| x + 1).is_empty());
/// ```
pub fn apply<T, U, F>(seq: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    seq.iter().map(f).collect()
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// # Example
/// ```
/// use sampler_common::list::filter;
/// assert_eq!(filter(&[1, 2, 3, 4, 5], |x| x % 2 == 0), vec![2, 4]);
/// assert!(filter(&[1, 3, 5], |x| x % 2 == 0).is_empty());
/// ```
pub fn filter<T: Clone, F>(seq: &[T], predicate: F) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    seq.iter().filter(|x| predicate(x)).cloned().collect()
}

/// Left fold: `f(...f(f(initial, s0), s1)..., sn)`.
///
/// An empty sequence returns `initial` unchanged.
///
/// # Example
/// ```
/// use sampler_common::list::reduce;
/// assert_eq!(reduce(&[1, 2, 3, 4], 0, |acc, x| acc + x), 10);
/// assert_eq!(reduce(&[] as &[i64], 7, |acc, x| acc * x), 7);
/// ```
pub fn reduce<T, A, F>(seq: &[T], initial: A, f: F) -> A
where
    F: Fn(A, &T) -> A,
{
    seq.iter().fold(initial, f)
}
