//! Test helpers shared across crates.
//!
//! This crate provides an ordered call recorder for pipeline hooks and a
//! UTF-8 temporary output directory for writer tests.

pub mod fs;
pub mod recorder;
