//! Vignette Common - shared units for the vignette demonstrations
//!
//! Two unrelated instructional units live here: a blocking JSON fetcher
//! and a small polymorphic animal menagerie. They share nothing beyond
//! this crate.

pub mod fetch;
pub mod menagerie;

pub use fetch::*;
pub use menagerie::*;
