//! Sampler process crate: what a running program looks like from inside.
//!
//! - Process identity (pid / parent pid) behind a small platform trait
//! - Address of a container vs. address of its data
//! - Value vs. reference semantics
//! - The demo sections driven by `sampler-demo`

pub mod demo;
pub mod explorer;
pub mod platform;
pub mod pointers;

pub use explorer::{ProcessReport, explore_process};
pub use platform::{OsPlatform, PlatformInfo};
