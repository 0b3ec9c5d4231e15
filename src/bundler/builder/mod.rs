//! Build invocation and release orchestration.
//!
//! This module provides the [`ReleasePipeline`] that drives the build-host
//! phase, and the pieces it is built from.
//!
//! # Overview
//!
//! The pipeline:
//! 1. Locates the project to build
//! 2. Resets the staging root
//! 3. Invokes the toolchain into a fresh output directory
//! 4. Strips archives the toolchain left in its output
//! 5. Assembles the bundle and returns a [`BundledArtifact`](crate::bundler::BundledArtifact)
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`invoker`] - External toolchain invocation
//! - [`orchestrator`] - Main [`ReleasePipeline`] struct
//! - [`toolchain`] - Ordered toolchain resolution

pub mod checksum;
pub mod invoker;
mod orchestrator;
pub mod toolchain;

pub use orchestrator::ReleasePipeline;
