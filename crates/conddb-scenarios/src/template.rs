//! Static seed template for the full scenario
//!
//! The template sources are checked in under `templates/test_repo/` and
//! embedded at compile time, so the generator never depends on the location
//! of its own checkout at run time. At the seeded revision `changing.xml/`
//! is already IOV-indexed, but flat: both leaves live next to the index.

use std::path::Path;

use conddb_fs::write_text;

use crate::Result;

/// Marker value in `values.xml` that each content mutation substitutes.
pub const VALUE_MARKER: &str = "42";

const VALUES_XML: &str = include_str!("../templates/test_repo/values.xml");
const CHANGING_V0_XML: &str = include_str!("../templates/test_repo/changing.xml/v0.xml");
const CHANGING_V1_XML: &str = include_str!("../templates/test_repo/changing.xml/v1.xml");
const CHANGING_IOVS: &str = include_str!("../templates/test_repo/changing.xml/IOVs");

/// Materialize the template tree at `dest`.
pub fn seed(dest: &Path) -> Result<()> {
    tracing::debug!(dest = %dest.display(), "seeding repository from template");
    write_text(&dest.join("values.xml"), VALUES_XML)?;
    write_text(&dest.join("changing.xml").join("v0.xml"), CHANGING_V0_XML)?;
    write_text(&dest.join("changing.xml").join("v1.xml"), CHANGING_V1_XML)?;
    write_text(
        &dest.join("changing.xml").join(conddb_iov::FILE_NAME),
        CHANGING_IOVS,
    )?;
    Ok(())
}

/// The template's `values.xml` with the marker value replaced.
pub fn values_with(value: &str) -> String {
    VALUES_XML.replace(VALUE_MARKER, value)
}
