/*!
 * Simulator Limits and Defaults
 *
 * Centralized location for tunable defaults shared by the library and the CLI.
 */

use super::types::Ticks;

// =============================================================================
// SCHEDULING
// =============================================================================

/// Default Round-Robin time quantum (ticks)
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Default policy name used by the CLI when none is given
pub const DEFAULT_POLICY: &str = "fcfs";

/// Default process priority when a descriptor omits it
pub const DEFAULT_PRIORITY: i32 = 0;

/// Largest accepted burst time (ticks)
///
/// Bounds the Gantt bar width and the number of Round-Robin slices per process.
pub const MAX_BURST_TIME: Ticks = 1_000_000;

/// Latest accepted arrival time (ticks)
pub const MAX_ARRIVAL_TIME: Ticks = 1_000_000_000;

// =============================================================================
// LOADER
// =============================================================================

/// Field separator for the line-oriented descriptor format
pub const DESCRIPTOR_FIELD_SEPARATOR: char = ',';

/// Comment marker for the line-oriented descriptor format
pub const DESCRIPTOR_COMMENT_PREFIX: char = '#';

/// Minimum number of fields on a descriptor line (pid, burst, arrival)
pub const DESCRIPTOR_MIN_FIELDS: usize = 3;

// =============================================================================
// RENDERING
// =============================================================================

/// Glyph used for one tick in the text Gantt chart
pub const GANTT_GLYPH: char = '█';

// =============================================================================
// OBSERVABILITY
// =============================================================================

/// Environment variable that switches tracing output to JSON
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";

/// Filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
