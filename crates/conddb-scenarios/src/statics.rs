//! Static JSON fixtures without a time dimension
//!
//! Used by tests that compare IOV-based resolution against a non-versioned
//! baseline with the same nested key/value shape.

use std::path::Path;

use conddb_fs::write_text;
use serde_json::json;

use crate::Result;

/// Write the two fixed documents: an empty mapping, and a nested mapping
/// mirroring the mini scenario's plain-file path.
pub fn write_json_fixtures(dir: &Path) -> Result<()> {
    tracing::info!(dir = %dir.display(), "writing static JSON fixtures");

    write_text(
        &dir.join("minimal.json"),
        &serde_json::to_string(&json!({}))?,
    )?;

    let basic = json!({
        "TheDir": { "TheFile.txt": "some JSON (file) data\n" }
    });
    write_text(&dir.join("basic.json"), &serde_json::to_string(&basic)?)?;

    Ok(())
}
