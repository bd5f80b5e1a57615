//! Process explorer.
//!
//! Reports the current and parent process ids and contrasts two addresses
//! of a `Vec`: the handle itself (pointer, length, capacity, on the stack)
//! and its first element (in the heap buffer the handle points to).
//!
//! The addresses are for illustration only. They are valid inside this
//! process and meaningless to any other, since each process has its own
//! address space.

use std::fmt;

use tracing::info;

use crate::platform::PlatformInfo;

/// What [`explore_process`] observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub pid: u32,
    pub ppid: Option<u32>,
    /// Address of the `Vec` handle.
    pub container_addr: usize,
    /// Address of `data[0]` inside the heap buffer.
    pub first_element_addr: usize,
}

impl ProcessReport {
    #[must_use]
    pub fn addresses_differ(&self) -> bool {
        self.container_addr != self.first_element_addr
    }
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Process ID: {}", self.pid)?;
        match self.ppid {
            Some(ppid) => writeln!(f, "Parent Process ID: {ppid}")?,
            None => writeln!(f, "Parent Process ID: unavailable on this platform")?,
        }
        writeln!(
            f,
            "Memory Address of the Vec handle: {:#x}",
            self.container_addr
        )?;
        writeln!(
            f,
            "Memory Address of the first element: {:#x}",
            self.first_element_addr
        )?;
        write!(
            f,
            "Note: Other processes cannot access these memory addresses due to process isolation."
        )
    }
}

/// Samples process identity from `platform` and the two addresses of a
/// small `Vec`.
///
/// # Example
/// ```
/// use sampler_process::explorer::explore_process;
/// use sampler_process::platform::FixedPlatform;
///
/// let report = explore_process(&FixedPlatform { pid: 7, ppid: Some(1) });
/// assert_eq!(report.pid, 7);
/// assert!(report.addresses_differ());
/// ```
pub fn explore_process(platform: &impl PlatformInfo) -> ProcessReport {
    let pid = platform.process_id();
    let ppid = platform.parent_process_id();

    let data: Vec<i64> = vec![1, 2, 3, 4, 5];
    let container_addr = std::ptr::from_ref(&data) as usize;
    let first_element_addr = data.as_ptr() as usize;

    info!(pid, ?ppid, "explored process identity");

    ProcessReport {
        pid,
        ppid,
        container_addr,
        first_element_addr,
    }
}
