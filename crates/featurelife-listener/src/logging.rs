use crate::ProgressListener;
use featurelife_settings::{LogLevel, ResolvedConfig};
use featurelife_types::{DeprecatedUsage, ProgressDetails, ProgressNotification, StackFrame};

/// Target every event from this listener is emitted under.
pub const LOG_TARGET: &str = "featurelife::deprecation";

// `tracing` callsites need a level known at compile time.
macro_rules! event_at {
    ($level:expr, $($args:tt)+) => {
        match $level {
            LogLevel::Trace => tracing::event!(target: LOG_TARGET, tracing::Level::TRACE, $($args)+),
            LogLevel::Debug => tracing::event!(target: LOG_TARGET, tracing::Level::DEBUG, $($args)+),
            LogLevel::Info => tracing::event!(target: LOG_TARGET, tracing::Level::INFO, $($args)+),
            LogLevel::Warn => tracing::event!(target: LOG_TARGET, tracing::Level::WARN, $($args)+),
            LogLevel::Error => tracing::event!(target: LOG_TARGET, tracing::Level::ERROR, $($args)+),
        }
    };
}

/// Writes one structured `tracing` event per deprecated usage.
///
/// The deprecation message becomes the event message. `detail`, `advice`, the frame count,
/// the call site and (if enabled) the leading frames are attached as fields.
#[derive(Clone, Debug, Default)]
pub struct LoggingListener {
    config: ResolvedConfig,
}

impl LoggingListener {
    pub fn new(config: ResolvedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    fn log_usage(&self, operation: Option<&str>, usage: &DeprecatedUsage) {
        let call_site = usage.call_site().map(StackFrame::to_string);
        let stack = self
            .config
            .include_stack_trace
            .then(|| render_stack(usage.stack_trace(), self.config.max_stack_frames));

        event_at!(
            self.config.level,
            operation,
            detail = usage.detail(),
            advice = usage.advice(),
            frames = usage.stack_trace().len() as u64,
            call_site = call_site.as_deref(),
            stack = stack.as_deref(),
            "{}",
            usage.message()
        );
    }
}

impl ProgressListener for LoggingListener {
    fn on_progress(&self, notification: &ProgressNotification) {
        let operation = notification.operation.as_deref();
        match &notification.details {
            ProgressDetails::DeprecatedUsage(usage) => self.log_usage(operation, usage),
            ProgressDetails::Other { name, .. } => {
                tracing::debug!(target: LOG_TARGET, operation, name = name.as_str(), "progress event");
            }
        }
    }
}

/// Innermost first, joined by ` <- `; a suffix counts frames past `max`.
pub(crate) fn render_stack(frames: &[StackFrame], max: usize) -> String {
    let mut out = frames
        .iter()
        .take(max)
        .map(StackFrame::to_string)
        .collect::<Vec<_>>()
        .join(" <- ");
    let hidden = frames.len().saturating_sub(max);
    if hidden > 0 {
        if !out.is_empty() {
            out.push_str(" <- ");
        }
        out.push_str(&format!("... ({hidden} more)"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: usize) -> Vec<StackFrame> {
        (0..n)
            .map(|i| StackFrame::new(format!("f{i}")).with_location("lib.rs", i as u32 + 1))
            .collect()
    }

    #[test]
    fn render_stack_joins_frames() {
        assert_eq!(
            render_stack(&frames(2), 5),
            "f0 at lib.rs:1 <- f1 at lib.rs:2"
        );
    }

    #[test]
    fn render_stack_counts_hidden_frames() {
        assert_eq!(render_stack(&frames(4), 1), "f0 at lib.rs:1 <- ... (3 more)");
        assert_eq!(render_stack(&frames(2), 0), "... (2 more)");
    }

    #[test]
    fn render_stack_empty() {
        assert_eq!(render_stack(&[], 5), "");
        assert_eq!(render_stack(&frames(3), usize::MAX).matches(" <- ").count(), 2);
    }
}
