/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (caller-assigned, unique per manager)
pub type Pid = u32;

/// Simulated clock unit
///
/// The simulator never reads wall-clock time; every timestamp is a tick
/// count advanced only by a scheduling loop.
pub type Ticks = u64;

/// Priority level
///
/// Carried on every record but not consulted by FCFS, SJF or Round-Robin.
pub type Priority = i32;

/// Label used when a descriptor names no owning user
pub const DEFAULT_USER: &str = "system";

/// Inline string for short labels such as user names
pub type Label = smartstring::alias::String;
