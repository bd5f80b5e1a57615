//! Formulating abstractions with higher-order functions.
//!
//! `compose` builds a new function out of two others. The small named
//! helpers below are the building blocks the demos and tests feed into
//! `compose` and the sequence operations in `sampler_common::list`.

/// Function composition: `compose(f, g)(x) == f(g(x))`.
///
/// `g` is always applied first.
///
/// # Examples
/// ```
/// use sampler_numeric::higher_order::{add_ten, compose, double};
///
/// let double_then_add_ten = compose(add_ten, double);
/// assert_eq!(double_then_add_ten(5), 20);
///
/// let add_ten_then_double = compose(double, add_ten);
/// assert_eq!(add_ten_then_double(5), 30);
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Squares a number (wrapping on overflow).
///
/// # Examples
/// ```
/// use sampler_numeric::higher_order::square;
/// assert_eq!(square(5), 25);
/// assert_eq!(square(-3), 9);
/// ```
pub fn square(x: i64) -> i64 {
    x.wrapping_mul(x)
}

/// Multiplies by two.
pub fn double(x: i64) -> i64 {
    x.wrapping_mul(2)
}

/// Adds ten.
pub fn add_ten(x: i64) -> i64 {
    x.wrapping_add(10)
}

/// True for multiples of two, negatives included.
///
/// # Examples
/// ```
/// use sampler_numeric::higher_order::is_even;
/// assert!(is_even(-4));
/// assert!(!is_even(7));
/// ```
pub fn is_even(x: i64) -> bool {
    x % 2 == 0
}

/// Binary addition, shaped to be used as a reducer.
pub fn sum(acc: i64, x: i64) -> i64 {
    acc.wrapping_add(x)
}
