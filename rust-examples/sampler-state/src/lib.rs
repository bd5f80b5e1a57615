//! Sampler state crate: functions that carry private state.
//!
//! - Counters that advance on every call
//! - Multipliers with no mutable state at all
//! - Accumulators whose add/subtract/get share one hidden total

pub mod factories;

pub use factories::{Accumulator, Counter, make_accumulator, make_counter, make_multiplier};
