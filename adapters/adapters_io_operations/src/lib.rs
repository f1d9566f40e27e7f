//! Adapters Layer: I/O Operations
//!
//! Provides the file-system side of a conversion run:
//! - Digit file input (whole file into one buffer sized from its metadata)
//! - Output artifacts (named after input, radix and digit count, written
//!   atomically and only once)
//!
//! Depends on the Entities layer.

mod common;

pub mod artifact;
pub mod digit_file;

pub use artifact::ArtifactWriter;
pub use common::IoError;
pub use digit_file::DigitFile;
