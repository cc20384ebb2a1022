/*!
 * Scheduler Types
 * Policy selection and time quantum configuration
 */

use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::Ticks;
use crate::core::{SimError, SimResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Round-robin with a fixed time quantum
    RoundRobin,
}

impl Policy {
    /// Every policy, in menu order
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Sjf, Policy::RoundRobin];

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Human-readable name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "Round Robin",
        }
    }

    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" | "1" => Ok(Self::Fcfs),
            "sjf" | "shortest" | "2" => Ok(Self::Sjf),
            "round_robin" | "roundrobin" | "rr" | "3" => Ok(Self::RoundRobin),
            _ => Err(SimError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-Robin time quantum in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create a quantum, rejecting zero and negative values
    pub fn new(ticks: i64) -> SimResult<Self> {
        if ticks <= 0 {
            return Err(SimError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks as Ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Policy plus its parameters, as chosen by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PolicyConfig {
    pub policy: Policy,
    /// Only consulted by Round-Robin
    #[serde(default)]
    pub quantum: TimeQuantum,
}

impl PolicyConfig {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: TimeQuantum::default(),
        }
    }

    pub fn round_robin(quantum: TimeQuantum) -> Self {
        Self {
            policy: Policy::RoundRobin,
            quantum,
        }
    }
}
