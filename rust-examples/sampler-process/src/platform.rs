//! Minimal view of the host operating system.
//!
//! Only two facts are needed: the current process id and its parent's id.
//! Keeping them behind [`PlatformInfo`] lets the explorer run against a fixed
//! double in tests.

/// Source of process identity.
pub trait PlatformInfo {
    fn process_id(&self) -> u32;

    /// `None` where the platform exposes no parent id.
    fn parent_process_id(&self) -> Option<u32>;
}

/// Reads identity from the running OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPlatform;

impl PlatformInfo for OsPlatform {
    fn process_id(&self) -> u32 {
        std::process::id()
    }

    #[cfg(unix)]
    fn parent_process_id(&self) -> Option<u32> {
        Some(std::os::unix::process::parent_id())
    }

    #[cfg(not(unix))]
    fn parent_process_id(&self) -> Option<u32> {
        None
    }
}

/// Fixed identity, for tests and deterministic demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPlatform {
    pub pid: u32,
    pub ppid: Option<u32>,
}

impl PlatformInfo for FixedPlatform {
    fn process_id(&self) -> u32 {
        self.pid
    }

    fn parent_process_id(&self) -> Option<u32> {
        self.ppid
    }
}
