//! IOV index format and timestamp codec
//!
//! The one genuine file format in the fixture generator: the per-directory
//! `IOVs` file recording `moment → target` transitions, together with the
//! nanosecond timestamp codec used for its sort keys.

pub mod error;
pub mod index;
pub mod time;

pub use error::{Error, Result};
pub use index::{FILE_NAME, IovEntry};
