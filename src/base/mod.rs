//! Foundation types for the ARXML extraction engine.
//!
//! This module provides the primitives used throughout the passes:
//! - [`constants`] - AUTOSAR tag names, the target namespace and sentinel values
//! - [`last_segment`], [`last_two_segments`] - AUTOSAR reference path resolution
//!
//! This module has NO dependencies on other arxml modules.

pub mod constants;
mod path;

pub use path::{last_segment, last_two_segments};
