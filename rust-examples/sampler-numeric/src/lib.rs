//! Sampler numeric crate: arithmetic and function-level abstraction.
//!
//! - Integer arithmetic with domain checks (factorial, primality, power)
//! - Higher-order procedures that build new functions from old ones

pub mod arithmetic;
pub mod higher_order;

// Re-export commonly used items.
pub use arithmetic::{factorial, is_prime, power};
pub use higher_order::compose;
