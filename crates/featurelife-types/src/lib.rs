//! Stable DTOs used across the featurelife workspace.
//!
//! This crate is intentionally boring:
//! - the deprecated-usage record and its call-frame descriptors
//! - the tagged progress payload and its envelope
//! - stable schema IDs and payload kinds

#![forbid(unsafe_code)]

pub mod frame;
pub mod ids;
pub mod progress;
pub mod usage;

#[cfg(test)]
mod proptest;

pub use frame::{FrameParseError, StackFrame};
pub use ids::{KIND_DEPRECATED_USAGE, KIND_OTHER, SCHEMA_PROGRESS_V1};
pub use progress::{ProgressDetails, ProgressNotification};
pub use usage::{DeprecatedUsage, DeprecatedUsageDetails};
