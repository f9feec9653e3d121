use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of a captured call stack.
///
/// The record that carries these never inspects them; the shape exists so sinks can
/// group and render call sites without re-parsing free text.
///
/// Text form, with every optional segment omitted when absent:
/// `owner::function at file:line:column`.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct StackFrame {
    /// Declaring type or module path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub function: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// 1-based column. Only rendered when `line` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl StackFrame {
    pub fn new<S: Into<String>>(function: S) -> Self {
        Self {
            owner: None,
            function: function.into(),
            file: None,
            line: None,
            column: None,
        }
    }

    pub fn with_owner<S: Into<String>>(mut self, owner: S) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_location<S: Into<String>>(mut self, file: S, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    pub fn with_file<S: Into<String>>(mut self, file: S) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    /// `owner::function`, or just `function` without an owner.
    pub fn qualified_name(&self) -> String {
        match &self.owner {
            Some(owner) => format!("{owner}::{}", self.function),
            None => self.function.clone(),
        }
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(owner) = &self.owner {
            write!(f, "{owner}::")?;
        }
        f.write_str(&self.function)?;
        if let Some(file) = &self.file {
            write!(f, " at {file}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
                if let Some(column) = self.column {
                    write!(f, ":{column}")?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FrameParseError {
    #[error("stack frame text is empty")]
    Empty,
    #[error("stack frame has no function name: {0:?}")]
    MissingFunction(String),
    #[error("stack frame location is empty: {0:?}")]
    MissingFile(String),
}

impl FromStr for StackFrame {
    type Err = FrameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(FrameParseError::Empty);
        }

        let (name, location) = match input.rsplit_once(" at ") {
            Some((name, location)) => (name.trim(), Some(location.trim())),
            None => (input, None),
        };

        let (owner, function) = match name.rsplit_once("::") {
            Some((owner, function)) if !owner.is_empty() => (Some(owner), function),
            Some((_, function)) => (None, function),
            None => (None, name),
        };
        if function.is_empty() {
            return Err(FrameParseError::MissingFunction(input.to_string()));
        }

        let mut frame = StackFrame::new(function);
        frame.owner = owner.map(str::to_string);

        if let Some(location) = location {
            let (file, line, column) = split_location(location);
            if file.is_empty() {
                return Err(FrameParseError::MissingFile(input.to_string()));
            }
            frame.file = Some(file.to_string());
            frame.line = line;
            frame.column = column;
        }

        Ok(frame)
    }
}

/// Peel up to two trailing `:<u32>` segments off a location.
fn split_location(location: &str) -> (&str, Option<u32>, Option<u32>) {
    let Some((rest, last)) = trailing_number(location) else {
        return (location, None, None);
    };
    match trailing_number(rest) {
        Some((file, line)) => (file, Some(line), Some(last)),
        None => (rest, Some(last), None),
    }
}

fn trailing_number(s: &str) -> Option<(&str, u32)> {
    let (head, tail) = s.rsplit_once(':')?;
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n = tail.parse().ok()?;
    Some((head, n))
}
