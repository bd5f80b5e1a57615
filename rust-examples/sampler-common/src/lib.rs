//! # Sampler Common
//!
//! Shared pieces for the sampler crates.
//!
//! ## Modules
//!
//! - [`error`]: The single error taxonomy (`ToolkitError::InvalidArgument`)
//! - [`list`]: Generic sequence operations (`apply`, `filter`, `reduce`)
//!
//! ## Design Principles
//!
//! 1. **Pure Functional**: Sequence operations borrow their input and return new values
//! 2. **Iterator-centric**: Every operation is a thin layer over iterator combinators
//! 3. **Errors as values**: Invalid numeric input is reported through `Result`, never a panic

pub mod error;
pub mod list;

// Re-export main types for convenience
pub use error::{Result, ToolkitError};
pub use list::{apply, filter, reduce};
