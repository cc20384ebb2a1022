/*!
 * Descriptor Loader
 * Reads process descriptors from text or JSON files
 *
 * Text format, one process per line:
 *
 * ```text
 * # pid,burst_time,arrival_time[,priority[,user]]
 * 1,5,0
 * 2,3,1,2,alice
 * ```
 *
 * JSON format: an array of descriptor objects.
 */

mod text;

pub use text::parse_text;

use crate::core::types::Pid;
use crate::core::{SimError, SimResult};
use crate::process::ProcessDescriptor;
use ahash::RandomState;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Input format of a descriptor file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    /// Pick a format from the file extension, falling back to content sniffing
    pub fn detect(path: &Path, content: &str) -> Self {
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"));

        match by_extension {
            Some(true) => Format::Json,
            _ if content.trim_start().starts_with('[') => Format::Json,
            _ => Format::Text,
        }
    }
}

/// Parse a JSON array of descriptors
pub fn parse_json(content: &str) -> SimResult<Vec<ProcessDescriptor>> {
    let descriptors: Vec<ProcessDescriptor> =
        serde_json::from_str(content).map_err(|e| SimError::Parse {
            line: e.line(),
            reason: e.to_string(),
        })?;
    validate(&descriptors)?;
    Ok(descriptors)
}

/// Parse `content` in the given format
pub fn parse(content: &str, format: Format) -> SimResult<Vec<ProcessDescriptor>> {
    match format {
        Format::Text => parse_text(content),
        Format::Json => parse_json(content),
    }
}

/// Load descriptors from a file
pub fn load_descriptors(path: impl AsRef<Path>) -> SimResult<Vec<ProcessDescriptor>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let format = Format::detect(path, &content);
    let descriptors = parse(&content, format)?;

    info!(
        path = %path.display(),
        format = ?format,
        count = descriptors.len(),
        "Process descriptors loaded"
    );
    Ok(descriptors)
}

/// Reject zero bursts and repeated pids
pub(crate) fn validate(descriptors: &[ProcessDescriptor]) -> SimResult<()> {
    let mut seen: HashSet<Pid, RandomState> = HashSet::default();
    for desc in descriptors {
        desc.validate()?;
        if !seen.insert(desc.pid) {
            return Err(SimError::DuplicatePid(desc.pid));
        }
    }
    Ok(())
}
