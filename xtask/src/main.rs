//! Developer tasks (schema generation, contract fixture conformance).
//!
//! Keeping this separate keeps the library crates free of tooling dependencies.

use anyhow::{Context, bail};
use featurelife_test_util::normalize_nondeterministic;
use featurelife_types::{ProgressNotification, SCHEMA_PROGRESS_V1};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn contracts_fixtures_dir() -> PathBuf {
    project_root().join("contracts").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_progress_schema() -> schemars::Schema {
    schema_for!(featurelife_types::ProgressNotification)
}

fn generate_listener_config_schema() -> schemars::Schema {
    schema_for!(featurelife_settings::ListenerConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "featurelife.progress.v1.json",
            generate: generate_progress_schema,
        },
        SchemaSpec {
            filename: "featurelife.listener.v1.json",
            generate: generate_listener_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate contract fixtures against the progress schema");
}

/// Semantic checks the JSON schema cannot express.
fn check_notification(filename: &str, value: &serde_json::Value, errors: &mut Vec<String>) {
    let notification: ProgressNotification = match serde_json::from_value(value.clone()) {
        Ok(n) => n,
        Err(e) => {
            errors.push(format!("{}: does not deserialize: {}", filename, e));
            return;
        }
    };

    if notification.schema != SCHEMA_PROGRESS_V1 {
        errors.push(format!(
            "{}: schema '{}' (expected '{}')",
            filename, notification.schema, SCHEMA_PROGRESS_V1
        ));
    }

    if let Some(usage) = notification.details.as_deprecated_usage() {
        if usage.message().trim().is_empty() {
            errors.push(format!("{}: deprecated usage has an empty message", filename));
        }
        for (i, frame) in usage.stack_trace().iter().enumerate() {
            if frame.function.is_empty() {
                errors.push(format!("{}: stack_trace[{}] has no function", filename, i));
            }
            if frame.column.is_some() && frame.line.is_none() {
                errors.push(format!(
                    "{}: stack_trace[{}] has a column without a line",
                    filename, i
                ));
            }
        }
    }

    // Lossless: what we write must read back as the same notification.
    let rewritten = match serde_json::to_value(&notification) {
        Ok(v) => v,
        Err(e) => {
            errors.push(format!("{}: does not serialize: {}", filename, e));
            return;
        }
    };
    match serde_json::from_value::<ProgressNotification>(rewritten.clone()) {
        Ok(back) if back == notification => {}
        Ok(_) => errors.push(format!("{}: serialization is lossy", filename)),
        Err(e) => errors.push(format!("{}: rewritten form does not parse: {}", filename, e)),
    }
    // Fields the types do not model would be silently dropped by a sink.
    if normalize_nondeterministic(rewritten) != normalize_nondeterministic(value.clone()) {
        errors.push(format!(
            "{}: fixture carries fields that do not survive a rewrite",
            filename
        ));
    }
}

/// Validate contract fixtures.
///
/// This checks:
/// 1. Schema validation against the generated featurelife.progress.v1 schema
/// 2. Deserialization into `ProgressNotification` and schema id
/// 3. Frame hygiene: non-empty function, no column without a line
/// 4. Serialization round trip is lossless and drops no fixture fields
fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_progress_schema())
        .context("Failed to serialize progress schema")?;
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    println!("✓ featurelife.progress.v1 schema compiles");

    let fixtures_dir = contracts_fixtures_dir();
    if !fixtures_dir.exists() {
        bail!(
            "contracts/fixtures/ not found at {}\n\n\
            Create contract fixtures first.",
            fixtures_dir.display()
        );
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(&fixtures_dir).context("Failed to read contracts/fixtures/")? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        bail!("No JSON fixtures found in {}", fixtures_dir.display());
    }

    let mut errors = Vec::new();
    for path in &paths {
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", filename))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", filename))?;

        let before = errors.len();
        for err in compiled.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", filename, err));
        }
        check_notification(&filename, &value, &mut errors);

        if errors.len() == before {
            println!("  ✓ {} validates", filename);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!(
        "\n✓ All {} contract fixtures pass conformance checks!",
        paths.len()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{}", name);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
