//! Filesystem helpers shared by the bundling steps.

pub mod fs;
