use crate::{model::ListenerConfigV1, presets};
use anyhow::Context;
use featurelife_types::ids::SCHEMA_LISTENER_CONFIG_V1;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub level: Option<String>,
    pub max_stack_frames: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub profile: String,
    pub level: LogLevel,
    /// Frames rendered per event. `usize::MAX` means no limit.
    pub max_stack_frames: usize,
    pub include_stack_trace: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        presets::preset("default")
    }
}

pub fn resolve_config(
    cfg: ListenerConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_LISTENER_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_LISTENER_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());
    validate_profile(&profile)?;

    let mut resolved = presets::preset(&profile);

    if let Some(level) = overrides.level.as_deref().or(cfg.level.as_deref()) {
        resolved.level = parse_level(level).context("invalid listener level")?;
    }

    if let Some(max) = overrides.max_stack_frames.or(cfg.max_stack_frames) {
        resolved.max_stack_frames = max as usize;
    }

    if let Some(include) = cfg.include_stack_trace {
        resolved.include_stack_trace = include;
    }

    Ok(resolved)
}

fn validate_profile(v: &str) -> anyhow::Result<()> {
    match v {
        "default" | "quiet" | "full" => Ok(()),
        other => anyhow::bail!("unknown profile: {other} (expected default|quiet|full)"),
    }
}

fn parse_level(v: &str) -> anyhow::Result<LogLevel> {
    match v {
        "trace" => Ok(LogLevel::Trace),
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        other => anyhow::bail!("unknown level: {other} (expected trace|debug|info|warn|error)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn empty_config_resolves_to_default_profile() {
        let resolved = resolve_config(ListenerConfigV1::default(), Overrides::default()).unwrap();
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.level, LogLevel::Warn);
        assert_eq!(resolved.max_stack_frames, 5);
        assert!(resolved.include_stack_trace);
    }

    #[test]
    fn file_values_override_profile() {
        let cfg = parse_config_toml(
            r#"
schema = "featurelife.listener.v1"
profile = "quiet"
level = "info"
max_stack_frames = 3
include_stack_trace = true
"#,
        )
        .unwrap();

        let resolved = resolve_config(cfg, Overrides::default()).unwrap();
        assert_eq!(resolved.profile, "quiet");
        assert_eq!(resolved.level, LogLevel::Info);
        assert_eq!(resolved.max_stack_frames, 3);
        assert!(resolved.include_stack_trace);
    }

    #[test]
    fn overrides_beat_file_values() {
        let cfg = parse_config_toml("level = \"info\"\nmax_stack_frames = 3\n").unwrap();
        let overrides = Overrides {
            profile: Some("full".to_string()),
            level: Some("error".to_string()),
            max_stack_frames: Some(10),
        };

        let resolved = resolve_config(cfg, overrides).unwrap();
        assert_eq!(resolved.profile, "full");
        assert_eq!(resolved.level, LogLevel::Error);
        assert_eq!(resolved.max_stack_frames, 10);
    }

    #[test]
    fn full_profile_has_no_frame_limit() {
        let cfg = parse_config_toml("profile = \"full\"\n").unwrap();
        let resolved = resolve_config(cfg, Overrides::default()).unwrap();
        assert_eq!(resolved.max_stack_frames, usize::MAX);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let cfg = parse_config_toml("level = \"loud\"\n").unwrap();
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown level: loud"));
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let cfg = parse_config_toml("profile = \"verbose\"\n").unwrap();
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }

    #[test]
    fn foreign_schema_is_rejected() {
        let cfg = parse_config_toml("schema = \"acme.config.v1\"\n").unwrap();
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unsupported config schema"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config_toml("max_stack_frames = \"many\"").is_err());
    }
}
