use crate::resolve::{LogLevel, ResolvedConfig};

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything more specific belongs in the config file.
pub fn preset(profile: &str) -> ResolvedConfig {
    match profile {
        "quiet" => quiet_profile(),
        "full" => full_profile(),
        // default
        _ => default_profile(),
    }
}

fn default_profile() -> ResolvedConfig {
    ResolvedConfig {
        profile: "default".to_string(),
        level: LogLevel::Warn,
        max_stack_frames: 5,
        include_stack_trace: true,
    }
}

fn quiet_profile() -> ResolvedConfig {
    // Still recorded, just out of the way of normal build output.
    ResolvedConfig {
        profile: "quiet".to_string(),
        level: LogLevel::Debug,
        max_stack_frames: 1,
        include_stack_trace: false,
    }
}

fn full_profile() -> ResolvedConfig {
    ResolvedConfig {
        profile: "full".to_string(),
        level: LogLevel::Warn,
        max_stack_frames: usize::MAX,
        include_stack_trace: true,
    }
}
