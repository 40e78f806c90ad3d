//! The per-directory `IOVs` index file
//!
//! An index is an ordered sequence of `moment → target` transitions, one per
//! line: `<nanoseconds><space><target>`. It is the source of truth for
//! resolving "what is valid in this directory at time T". Targets either
//! name a file in the same directory (leaf data) or point into a sibling
//! directory (indirection, e.g. `../2016/v1`), so resolution descends
//! recursively until a leaf is reached.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::time;
use crate::{Error, Result};

/// Name of the index file inside an IOV-indexed directory.
pub const FILE_NAME: &str = "IOVs";

/// One `moment → target` transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IovEntry {
    /// Moment the target becomes active, in nanoseconds since the epoch.
    pub since: i64,
    /// Leaf filename, or relative path into a sibling directory.
    pub target: String,
}

impl IovEntry {
    /// Entry starting at a raw nanosecond moment.
    pub fn new(since: i64, target: impl Into<String>) -> Self {
        Self {
            since,
            target: target.into(),
        }
    }

    /// Entry starting at a calendar moment.
    pub fn at(moment: DateTime<Utc>, target: impl Into<String>) -> Self {
        Self::new(time::to_nanos(moment), target)
    }
}

/// Render entries in the on-disk line format, in the given order.
///
/// Callers must pass entries already sorted strictly ascending by `since`;
/// rendering neither sorts nor validates. A disordered index is a builder
/// bug, caught by the scenario-level tests rather than a runtime guard.
pub fn render(entries: &[IovEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} {}\n", e.since, e.target))
        .collect()
}

/// Parse the on-disk line format back into entries.
pub fn parse(data: &str) -> Result<Vec<IovEntry>> {
    data.lines()
        .enumerate()
        .map(|(idx, line)| {
            let (since, target) = line
                .split_once(' ')
                .ok_or_else(|| Error::parse(idx + 1, "expected `<nanoseconds> <target>`"))?;
            let since = since
                .parse()
                .map_err(|_| Error::parse(idx + 1, format!("invalid timestamp `{since}`")))?;
            if target.is_empty() {
                return Err(Error::parse(idx + 1, "empty target"));
            }
            Ok(IovEntry::new(since, target))
        })
        .collect()
}

/// Write `dir/IOVs`, replacing any previous index.
pub fn write(dir: &Path, entries: &[IovEntry]) -> Result<()> {
    conddb_fs::write_text(&dir.join(FILE_NAME), &render(entries))?;
    Ok(())
}
