//! Factory Functions and Local State
//!
//! Each factory hands back something callable that owns a private integer.
//! Instead of capturing a mutable variable in a closure, the state lives in a
//! small struct with methods; the closure-returning factories are thin
//! wrappers over those structs.
//!
//! # Key Rust Concepts
//!
//! - `&mut self` methods: exclusive access to the counter, checked at compile time
//! - `Cell<T>`: shared, single-threaded mutation for the accumulator's `Copy` total
//! - `impl FnMut` / `impl Fn`: returning closures without boxing
//!
//! # Overflow
//!
//! All updates wrap on overflow, matching the arithmetic module.

use std::cell::Cell;

use tracing::trace;

// ============================================================================
// Counter
// ============================================================================

/// A counter that advances by one on every call.
///
/// # Example
///
/// ```
/// use sampler_state::Counter;
///
/// let mut counter = Counter::new(0);
/// assert_eq!(counter.next_value(), 1);
/// assert_eq!(counter.next_value(), 2);
/// assert_eq!(counter.current(), 2);
///
/// // A counter is also an endless iterator.
/// let from_ten: Vec<i64> = Counter::new(10).take(3).collect();
/// assert_eq!(from_ten, vec![11, 12, 13]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    #[must_use]
    pub fn new(start: i64) -> Self {
        Self { count: start }
    }

    /// Increments the count and returns the new value.
    pub fn next_value(&mut self) -> i64 {
        self.count = self.count.wrapping_add(1);
        self.count
    }

    /// Returns the last value handed out (or the start value).
    #[must_use]
    pub fn current(&self) -> i64 {
        self.count
    }
}

impl Iterator for Counter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(self.next_value())
    }
}

/// Returns a zero-argument closure; each call returns the next count.
///
/// The first call after `make_counter(s)` returns `s + 1`.
///
/// ```
/// use sampler_state::make_counter;
///
/// let mut counter = make_counter(-5);
/// let calls: Vec<i64> = (0..4).map(|_| counter()).collect();
/// assert_eq!(calls, vec![-4, -3, -2, -1]);
/// ```
pub fn make_counter(start: i64) -> impl FnMut() -> i64 {
    trace!(start, "make_counter");
    let mut counter = Counter::new(start);
    move || counter.next_value()
}

// ============================================================================
// Multiplier
// ============================================================================

/// Returns a pure function multiplying its input by `factor`.
///
/// ```
/// use sampler_state::make_multiplier;
///
/// let triple = make_multiplier(3);
/// assert_eq!(triple(5), 15);
/// assert_eq!(triple(5), 15);
/// ```
pub fn make_multiplier(factor: i64) -> impl Fn(i64) -> i64 {
    trace!(factor, "make_multiplier");
    move |x| x.wrapping_mul(factor)
}

// ============================================================================
// Accumulator
// ============================================================================

/// A running total shared by `add`, `subtract` and `get`.
///
/// The total sits in a `Cell<i64>`, so every method takes `&self` and the
/// three operations can be handed out together as closures (see
/// [`Accumulator::handles`]). `Cell` makes the type `!Sync`: sharing one
/// accumulator across threads does not compile, and callers that need that
/// must add their own synchronization around it.
///
/// # Example
///
/// ```
/// use sampler_state::Accumulator;
///
/// let acc = Accumulator::new(100);
/// acc.add(50);
/// acc.add(25);
/// acc.subtract(30);
/// assert_eq!(acc.get(), 145);
/// ```
#[derive(Debug, Default)]
pub struct Accumulator {
    total: Cell<i64>,
}

impl Accumulator {
    #[must_use]
    pub fn new(initial: i64) -> Self {
        Self {
            total: Cell::new(initial),
        }
    }

    pub fn add(&self, x: i64) {
        self.total.set(self.total.get().wrapping_add(x));
    }

    pub fn subtract(&self, x: i64) {
        self.total.set(self.total.get().wrapping_sub(x));
    }

    #[must_use]
    pub fn get(&self) -> i64 {
        self.total.get()
    }

    /// Splits the accumulator into its three operations.
    ///
    /// All three closures borrow the same total, so each observes the others'
    /// updates in call order.
    ///
    /// ```
    /// use sampler_state::make_accumulator;
    ///
    /// let acc = make_accumulator(10);
    /// let (add, subtract, get) = acc.handles();
    /// add(5);
    /// subtract(2);
    /// assert_eq!(get(), 13);
    /// ```
    pub fn handles(
        &self,
    ) -> (
        impl Fn(i64) + '_,
        impl Fn(i64) + '_,
        impl Fn() -> i64 + '_,
    ) {
        (
            move |x| self.add(x),
            move |x| self.subtract(x),
            move || self.get(),
        )
    }
}

/// Creates an [`Accumulator`] starting at `initial`.
#[must_use]
pub fn make_accumulator(initial: i64) -> Accumulator {
    trace!(initial, "make_accumulator");
    Accumulator::new(initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_counter_from_zero() {
        let mut counter = make_counter(0);
        assert_eq!([counter(), counter(), counter()], [1, 2, 3]);
    }

    #[test]
    fn test_counter_from_negative() {
        let mut counter = make_counter(-5);
        let calls: Vec<i64> = (0..4).map(|_| counter()).collect();
        assert_eq!(calls, vec![-4, -3, -2, -1]);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut a = make_counter(0);
        let mut b = make_counter(100);

        assert_eq!(a(), 1);
        assert_eq!(b(), 101);
        assert_eq!(a(), 2);
        assert_eq!(b(), 102);
    }

    #[test]
    fn test_counter_struct_and_iterator() {
        let mut counter = Counter::new(3);
        assert_eq!(counter.current(), 3);
        assert_eq!(counter.next_value(), 4);
        assert_eq!(counter.by_ref().take(2).collect::<Vec<_>>(), vec![5, 6]);
        assert_eq!(counter.current(), 6);
    }

    #[test]
    fn test_counter_wraps_at_max() {
        let mut counter = Counter::new(i64::MAX);
        assert_eq!(counter.next_value(), i64::MIN);
    }

    #[test]
    fn test_multiplier() {
        let double = make_multiplier(2);
        let triple = make_multiplier(3);

        assert_eq!(double(5), 10);
        assert_eq!(triple(5), 15);
        assert_eq!(make_multiplier(0)(42), 0);
        assert_eq!(make_multiplier(-1)(7), -7);
    }

    #[test]
    fn test_accumulator_sequence() {
        let acc = make_accumulator(100);
        acc.add(50);
        acc.add(25);
        acc.subtract(30);
        assert_eq!(acc.get(), 145);
    }

    #[test]
    fn test_accumulator_handles_share_state() {
        let acc = make_accumulator(100);
        let (add, subtract, get) = acc.handles();

        add(50);
        assert_eq!(get(), 150);
        subtract(200);
        assert_eq!(get(), -50);

        // The struct itself sees the same total.
        assert_eq!(acc.get(), -50);
    }

    #[test]
    fn test_accumulators_are_independent() {
        let a = make_accumulator(0);
        let b = make_accumulator(0);
        a.add(10);
        b.subtract(10);
        assert_eq!((a.get(), b.get()), (10, -10));
    }

    proptest! {
        #[test]
        fn prop_counter_yields_consecutive(start in -1_000_000i64..1_000_000, n in 0usize..50) {
            let values: Vec<i64> = Counter::new(start).take(n).collect();
            let expected: Vec<i64> = (1..=n as i64).map(|i| start + i).collect();
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn prop_accumulator_matches_fold(
            initial in -1_000i64..1_000,
            ops in prop::collection::vec((any::<bool>(), -1_000i64..1_000), 0..32),
        ) {
            let acc = make_accumulator(initial);
            for &(is_add, x) in &ops {
                if is_add { acc.add(x) } else { acc.subtract(x) }
            }
            let expected = ops
                .iter()
                .fold(initial, |total, &(is_add, x)| if is_add { total + x } else { total - x });
            prop_assert_eq!(acc.get(), expected);
        }
    }
}
