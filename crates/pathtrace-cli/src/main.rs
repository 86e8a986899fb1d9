//! pathtrace CLI: convert a planner path trace into grouped JSON.

use clap::{Parser, ValueEnum};
use pathtrace::{convert, create_output, SchemaVariant, TraceConfig, TraceReader};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pathtrace")]
#[command(about = "Group cost-based planner path traces into nested JSON", long_about = None)]
struct Cli {
    /// Tab-delimited trace file
    input: PathBuf,

    /// Column layout (overrides PATHTRACE_SCHEMA)
    #[arg(long, value_enum)]
    schema: Option<SchemaArg>,

    /// Text marking an absent field (overrides PATHTRACE_NULL_SENTINEL)
    #[arg(long)]
    null_sentinel: Option<String>,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SchemaArg {
    /// 23-column layout with alias and add_path comparisons
    A,
    /// 14-column layout with subquery type and deletion flag
    B,
    /// Pick by the width of the first row
    Auto,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("PATHTRACE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = apply_cli_overrides(TraceConfig::from_env(), cli.schema, cli.null_sentinel);

    // Open the input before touching the output so a bad path leaves no file behind.
    let reader = TraceReader::from_path(&cli.input, config)?;

    let summary = match &cli.output {
        Some(path) => convert(reader, create_output(path)?)?,
        None => convert(reader, io::stdout().lock())?,
    };

    tracing::info!(
        input = %cli.input.display(),
        variant = %summary.variant,
        accepted = summary.accepted,
        rejected = summary.rejected.len(),
        "converted trace"
    );
    Ok(())
}

fn apply_cli_overrides(
    mut config: TraceConfig,
    schema: Option<SchemaArg>,
    null_sentinel: Option<String>,
) -> TraceConfig {
    match schema {
        Some(SchemaArg::A) => config.variant = Some(SchemaVariant::A),
        Some(SchemaArg::B) => config.variant = Some(SchemaVariant::B),
        Some(SchemaArg::Auto) => config.variant = None,
        None => {}
    }
    if let Some(sentinel) = null_sentinel {
        config.null_sentinel = sentinel;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_schema_overrides_env_value() {
        let env = TraceConfig::default().with_variant(Some(SchemaVariant::A));
        let config = apply_cli_overrides(env, Some(SchemaArg::B), None);
        assert_eq!(config.variant, Some(SchemaVariant::B));
    }

    #[test]
    fn explicit_auto_clears_env_variant() {
        let env = TraceConfig::default().with_variant(Some(SchemaVariant::B));
        let config = apply_cli_overrides(env, Some(SchemaArg::Auto), None);
        assert_eq!(config.variant, None);
    }

    #[test]
    fn absent_flags_keep_env_values() {
        let env = TraceConfig::default()
            .with_variant(Some(SchemaVariant::B))
            .with_null_sentinel("NULL");
        let config = apply_cli_overrides(env.clone(), None, None);
        assert_eq!(config, env);
    }

    #[test]
    fn null_sentinel_flag_applies() {
        let config = apply_cli_overrides(TraceConfig::default(), None, Some("<null>".into()));
        assert_eq!(config.null_sentinel, "<null>");
    }

    #[test]
    fn exactly_one_input_required() {
        assert!(Cli::try_parse_from(["pathtrace"]).is_err());
        assert!(Cli::try_parse_from(["pathtrace", "a.tsv", "b.tsv"]).is_err());
        let cli = Cli::try_parse_from(["pathtrace", "--schema", "b", "a.tsv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("a.tsv"));
        assert_eq!(cli.schema, Some(SchemaArg::B));
    }
}
