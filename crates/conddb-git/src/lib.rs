//! Git abstraction for the CondDB fixture generator
//!
//! A thin synchronous driver over the external `git` binary with pinned
//! authorship dates and fail-fast error surfacing.

pub mod driver;
pub mod error;

pub use driver::{CommitStamp, GitDriver};
pub use error::{Error, Result};
