//! Value and Reference Semantics
//!
//! Passing an `i64` by value hands the callee a copy; passing `&mut i64`
//! hands it the caller's variable. The same split shows up between
//! returning a plain value (lives in the caller's frame) and returning a
//! `Box` (lives on the heap, owned through a pointer).
//!
//! # Comparison
//!
//! | By value | By reference |
//! |----------|--------------|
//! | `double_value(x)` returns the doubled copy, `x` unchanged | `double_in_place(&mut x)` doubles `x` |
//! | `swap_values(a, b)` returns `(b, a)` | `swap_in_place(&mut a, &mut b)` swaps the variables |
//! | `create_on_stack()` returns `i64` | `create_on_heap()` returns `Box<i64>` |

use std::fmt;

/// Doubles a copy of `x`. The caller's variable is untouched.
///
/// ```
/// use sampler_process::pointers::double_value;
///
/// let n = 10;
/// assert_eq!(double_value(n), 20);
/// assert_eq!(n, 10);
/// ```
#[must_use]
pub fn double_value(mut x: i64) -> i64 {
    x = x.wrapping_mul(2);
    x
}

/// Doubles the caller's variable through a mutable reference.
///
/// ```
/// use sampler_process::pointers::double_in_place;
///
/// let mut n = 10;
/// double_in_place(&mut n);
/// assert_eq!(n, 20);
/// ```
pub fn double_in_place(x: &mut i64) {
    *x = x.wrapping_mul(2);
}

/// Plain value: returned by copy into the caller's frame.
#[must_use]
pub fn create_on_stack() -> i64 {
    42
}

/// Boxed value: the `Box` moves to the caller, the `100` stays put on the heap.
#[must_use]
pub fn create_on_heap() -> Box<i64> {
    Box::new(100)
}

/// Returns the pair swapped; the caller must rebind to see the swap.
///
/// ```
/// use sampler_process::pointers::swap_values;
/// assert_eq!(swap_values(5, 10), (10, 5));
/// ```
#[must_use]
pub fn swap_values(a: i64, b: i64) -> (i64, i64) {
    (b, a)
}

/// Swaps the caller's two variables through mutable references.
///
/// ```
/// use sampler_process::pointers::swap_in_place;
///
/// let (mut a, mut b) = (5, 10);
/// swap_in_place(&mut a, &mut b);
/// assert_eq!((a, b), (10, 5));
/// ```
pub fn swap_in_place(a: &mut i64, b: &mut i64) {
    std::mem::swap(a, b);
}

/// The two values produced by [`create_on_stack`] and [`create_on_heap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeReport {
    pub stack_value: i64,
    pub heap_value: Box<i64>,
}

impl fmt::Display for EscapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Value from create_on_stack (stack): {}", self.stack_value)?;
        writeln!(f, "Value from create_on_heap (heap): {}", self.heap_value)?;
        write!(
            f,
            "Note: stack_value is returned by copy, heap_value is owned through a Box"
        )
    }
}

#[must_use]
pub fn analyze_escape() -> EscapeReport {
    EscapeReport {
        stack_value: create_on_stack(),
        heap_value: create_on_heap(),
    }
}
