use crate::StackFrame;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared capability of every deprecated-usage payload: what was used, and from where.
pub trait DeprecatedUsageDetails {
    fn message(&self) -> &str;

    fn stack_trace(&self) -> &[StackFrame];
}

impl<T: DeprecatedUsageDetails + ?Sized> DeprecatedUsageDetails for &T {
    fn message(&self) -> &str {
        (**self).message()
    }

    fn stack_trace(&self) -> &[StackFrame] {
        (**self).stack_trace()
    }
}

/// A single detected use of a deprecated feature.
///
/// All four attributes are fixed at construction. There are no setters and no `&mut`
/// accessors, so a record shared between threads reads the same everywhere.
///
/// The stack trace is copied on construction: an owned `Vec` is moved in and a borrowed
/// slice is cloned, so the record never aliases storage the caller can still mutate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DeprecatedUsage {
    message: String,
    #[serde(rename = "details", alias = "warning")]
    detail: String,
    advice: String,
    #[serde(default)]
    stack_trace: Vec<StackFrame>,
}

impl DeprecatedUsage {
    pub fn new(
        message: impl Into<String>,
        detail: impl Into<String>,
        advice: impl Into<String>,
        stack_trace: impl Into<Vec<StackFrame>>,
    ) -> Self {
        Self {
            message: message.into(),
            detail: detail.into(),
            advice: advice.into(),
            stack_trace: stack_trace.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Why the behavior is deprecated. May be empty.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// What to do instead. May be empty.
    pub fn advice(&self) -> &str {
        &self.advice
    }

    pub fn stack_trace(&self) -> &[StackFrame] {
        &self.stack_trace
    }

    /// The frame closest to the deprecated call, if one was captured.
    pub fn call_site(&self) -> Option<&StackFrame> {
        self.stack_trace.first()
    }

    pub fn into_parts(self) -> (String, String, String, Vec<StackFrame>) {
        (self.message, self.detail, self.advice, self.stack_trace)
    }
}

impl DeprecatedUsageDetails for DeprecatedUsage {
    fn message(&self) -> &str {
        &self.message
    }

    fn stack_trace(&self) -> &[StackFrame] {
        &self.stack_trace
    }
}

/// Message, then detail and advice when present, space separated.
impl fmt::Display for DeprecatedUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for part in [&self.detail, &self.advice] {
            if !part.is_empty() {
                write!(f, " {part}")?;
            }
        }
        Ok(())
    }
}
