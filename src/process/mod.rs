/*!
 * Process Module
 * Process records, lifecycle state machine and the process manager
 */

pub mod manager;
pub mod record;
mod replay;
pub mod types;

// Re-export for convenience
pub use manager::ProcessManager;
pub use record::Process;
pub use types::{ProcessDescriptor, ProcessState};
