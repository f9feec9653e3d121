//! Listener config parsing and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::ListenerConfigV1;
pub use resolve::{LogLevel, Overrides, ResolvedConfig};

/// Parse `featurelife.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ListenerConfigV1> {
    let cfg: ListenerConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective listener config (profile + file values + overrides).
pub fn resolve_config(cfg: ListenerConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
