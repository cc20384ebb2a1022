/*!
 * Text Descriptor Format
 * `pid,burst_time,arrival_time[,priority[,user]]`, one per line
 */

use super::validate;
use crate::core::limits::{
    DEFAULT_PRIORITY, DESCRIPTOR_COMMENT_PREFIX, DESCRIPTOR_FIELD_SEPARATOR,
    DESCRIPTOR_MIN_FIELDS,
};
use crate::core::{SimError, SimResult};
use crate::process::ProcessDescriptor;
use std::str::FromStr;

fn field<T: FromStr>(line: usize, name: &str, raw: &str) -> SimResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e| SimError::Parse {
        line,
        reason: format!("invalid {} '{}': {}", name, raw, e),
    })
}

fn parse_line(line: usize, raw: &str) -> SimResult<ProcessDescriptor> {
    let parts: Vec<&str> = raw
        .split(DESCRIPTOR_FIELD_SEPARATOR)
        .map(str::trim)
        .collect();

    if parts.len() < DESCRIPTOR_MIN_FIELDS {
        return Err(SimError::Parse {
            line,
            reason: format!(
                "expected at least {} fields, found {}",
                DESCRIPTOR_MIN_FIELDS,
                parts.len()
            ),
        });
    }

    let mut desc = ProcessDescriptor::new(
        field(line, "pid", parts[0])?,
        field(line, "burst_time", parts[1])?,
        field(line, "arrival_time", parts[2])?,
    );

    desc.priority = match parts.get(3) {
        Some(raw) if !raw.is_empty() => field(line, "priority", raw)?,
        _ => DEFAULT_PRIORITY,
    };
    if let Some(user) = parts.get(4).filter(|u| !u.is_empty()) {
        desc = desc.with_user(*user);
    }

    Ok(desc)
}

/// Parse the line-oriented format, ignoring blank lines and `#` comments
pub fn parse_text(content: &str) -> SimResult<Vec<ProcessDescriptor>> {
    let descriptors = content
        .lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()))
        .filter(|(_, raw)| !raw.is_empty() && !raw.starts_with(DESCRIPTOR_COMMENT_PREFIX))
        .map(|(line, raw)| parse_line(line, raw))
        .collect::<SimResult<Vec<_>>>()?;

    validate(&descriptors)?;
    Ok(descriptors)
}
