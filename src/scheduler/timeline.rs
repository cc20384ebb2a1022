/*!
 * Execution Timeline
 * Ordered CPU-allocation intervals produced by a scheduling run
 */

use crate::core::limits::GANTT_GLYPH;
use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One CPU allocation: `pid` held the CPU over `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: Ticks,
    pub end: Ticks,
}

impl Slice {
    #[inline(always)]
    pub const fn len(&self) -> Ticks {
        self.end - self.start
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

impl From<Slice> for (Pid, Ticks, Ticks) {
    fn from(slice: Slice) -> Self {
        (slice.pid, slice.start, slice.end)
    }
}

/// Ordered sequence of slices
///
/// Slices never overlap and appear in non-decreasing `start` order. Gaps
/// between slices are idle CPU time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, pid: Pid, start: Ticks, end: Ticks) {
        debug_assert!(start < end, "empty slice for pid {pid} at {start}");
        debug_assert!(
            self.slices.last().map_or(true, |last| last.end <= start),
            "slice for pid {pid} at {start} overlaps the previous slice"
        );
        self.slices.push(Slice { pid, start, end });
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }

    pub fn as_slice(&self) -> &[Slice] {
        &self.slices
    }

    /// Slices as `(pid, start, end)` triples
    pub fn to_tuples(&self) -> Vec<(Pid, Ticks, Ticks)> {
        self.slices.iter().copied().map(Into::into).collect()
    }

    pub fn slices_for(&self, pid: Pid) -> impl Iterator<Item = &Slice> {
        self.slices.iter().filter(move |s| s.pid == pid)
    }

    /// Total CPU time granted to `pid`
    pub fn busy_time_for(&self, pid: Pid) -> Ticks {
        self.slices_for(pid).map(Slice::len).sum()
    }

    /// End of the last slice
    pub fn makespan(&self) -> Ticks {
        self.slices.last().map_or(0, |s| s.end)
    }

    /// Ticks before `makespan` during which no process held the CPU
    pub fn idle_time(&self) -> Ticks {
        let busy: Ticks = self.slices.iter().map(Slice::len).sum();
        self.makespan() - busy
    }

    /// Number of handoffs between different processes
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|pair| pair[0].pid != pair[1].pid)
            .count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

/// Text Gantt chart, one line per slice
impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slice in &self.slices {
            let bar: String = std::iter::repeat(GANTT_GLYPH)
                .take(slice.len() as usize)
                .collect();
            writeln!(
                f,
                "  P{} |{}| [{:2} -> {:2}] ({} units)",
                slice.pid,
                bar,
                slice.start,
                slice.end,
                slice.len()
            )?;
        }
        Ok(())
    }
}
