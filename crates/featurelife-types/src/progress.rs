use crate::ids::{KIND_DEPRECATED_USAGE, KIND_OTHER, SCHEMA_PROGRESS_V1};
use crate::{DeprecatedUsage, DeprecatedUsageDetails};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Payload of a progress notification, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ProgressDetails {
    DeprecatedUsage(DeprecatedUsage),
    /// A payload this crate does not model. Carried through untouched.
    Other {
        name: String,
        #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
        data: JsonValue,
    },
}

impl ProgressDetails {
    pub fn kind(&self) -> &'static str {
        match self {
            ProgressDetails::DeprecatedUsage(_) => KIND_DEPRECATED_USAGE,
            ProgressDetails::Other { .. } => KIND_OTHER,
        }
    }

    pub fn as_deprecated_usage(&self) -> Option<&DeprecatedUsage> {
        match self {
            ProgressDetails::DeprecatedUsage(usage) => Some(usage),
            ProgressDetails::Other { .. } => None,
        }
    }

    /// The shared deprecated-usage capability, for sinks that only need message and call path.
    pub fn usage_details(&self) -> Option<&dyn DeprecatedUsageDetails> {
        self.as_deprecated_usage()
            .map(|usage| usage as &dyn DeprecatedUsageDetails)
    }
}

impl From<DeprecatedUsage> for ProgressDetails {
    fn from(usage: DeprecatedUsage) -> Self {
        ProgressDetails::DeprecatedUsage(usage)
    }
}

/// Envelope handed to progress listeners.
///
/// The envelope owns the channel metadata; the payload is carried as given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressNotification {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub emitted_at: OffsetDateTime,
    /// Build operation or task the event belongs to, if the producer knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    pub details: ProgressDetails,
}

impl ProgressNotification {
    pub fn new(details: impl Into<ProgressDetails>, emitted_at: OffsetDateTime) -> Self {
        Self {
            schema: SCHEMA_PROGRESS_V1.to_string(),
            emitted_at,
            operation: None,
            details: details.into(),
        }
    }

    pub fn now(details: impl Into<ProgressDetails>) -> Self {
        Self::new(details, OffsetDateTime::now_utc())
    }

    pub fn with_operation<S: Into<String>>(mut self, operation: S) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn kind(&self) -> &'static str {
        self.details.kind()
    }
}
