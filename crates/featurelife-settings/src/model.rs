use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `featurelife.toml` listener schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListenerConfigV1 {
    /// Optional schema string for tooling (`featurelife.listener.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset: `default`, `quiet`, or `full`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Level deprecated-usage events are logged at: `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// How many frames of each stack trace to include in a log line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stack_frames: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_stack_trace: Option<bool>,
}
