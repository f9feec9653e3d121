//! Stable identifiers for envelopes and payload kinds.
//!
//! Schema IDs are dotted and versioned. Payload kinds are snake_case and match the
//! `kind` tag of [`crate::ProgressDetails`].

// Schemas
pub const SCHEMA_PROGRESS_V1: &str = "featurelife.progress.v1";
pub const SCHEMA_LISTENER_CONFIG_V1: &str = "featurelife.listener.v1";

// Payload kinds
pub const KIND_DEPRECATED_USAGE: &str = "deprecated_usage";
pub const KIND_OTHER: &str = "other";
