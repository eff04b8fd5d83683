//! Tessera CLI - Bridge interface for scripts
//!
//! Commands: generators, render
//! Outputs JSON (or raw SVG) to stdout, logs to stderr
//! Exit codes: 0 success, 1 malformed payload, 2 pattern error

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use tessera_core::{GenerationOptions, GeneratorKind, Pattern, PatternError, RenderReport};

#[derive(Parser)]
#[command(name = "tessera-cli")]
#[command(about = "Tessera CLI - Deterministic SVG pattern engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the generator catalog in selection order
    Generators,

    /// Render a pattern
    Render {
        /// String to derive the pattern from
        #[arg(short, long)]
        input: String,

        /// JSON payload (GenerationOptions)
        #[arg(short, long)]
        payload: Option<String>,

        /// What to print
        #[arg(short, long, value_enum, default_value_t = Format::Report)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Report,
    Svg,
    DataUri,
    DataUrl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {e}");
    }

    match cli.command {
        Commands::Generators => {
            let catalog: Vec<_> = GeneratorKind::ALL
                .iter()
                .enumerate()
                .map(|(index, kind)| serde_json::json!({
                    "index": index,
                    "name": kind.name(),
                    "hashSelectable": index < 16,
                }))
                .collect();

            print_json(&catalog)
        }

        Commands::Render { input, payload, format } => {
            let options = match payload.as_deref().map(serde_json::from_str::<GenerationOptions>) {
                None => GenerationOptions::default(),
                Some(Ok(options)) => options,
                Some(Err(e)) => {
                    error!(error = %e, "invalid payload");
                    println!("{}", payload_error(&e));
                    return ExitCode::FAILURE;
                }
            };

            match render(&input, options, format) {
                Ok(output) => {
                    println!("{output}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error = %e, "render failed");
                    let output = serde_json::json!({
                        "success": false,
                        "error": e.to_string(),
                    });
                    println!("{output}");
                    ExitCode::from(2)
                }
            }
        }
    }
}

fn render(input: &str, options: GenerationOptions, format: Format) -> Result<String, PatternError> {
    let pattern = Pattern::create(input, options)?;
    info!(
        generator = %pattern.generator(),
        width = pattern.width(),
        height = pattern.height(),
        "rendered"
    );

    Ok(match format {
        Format::Report => RenderReport::from_pattern(&pattern)?.to_json()?,
        Format::Svg => pattern.to_string(),
        Format::DataUri => pattern.to_data_uri(),
        Format::DataUrl => pattern.to_data_url(),
    })
}

fn payload_error(e: &serde_json::Error) -> serde_json::Value {
    serde_json::json!({
        "success": false,
        "error": format!("Invalid payload: {e}"),
    })
}

fn print_json(value: &impl Serialize) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to serialize output");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_error_is_valid_json() {
        let e = serde_json::from_str::<GenerationOptions>(r#"{"color": 1}"#).unwrap_err();
        let line = payload_error(&e).to_string();

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["error"], format!("Invalid payload: {e}"));
    }

    #[test]
    fn test_payload_error_escapes_quotes() {
        // message reads: invalid type: string "abc", expected ...
        let e = serde_json::from_str::<GenerationOptions>(r#""abc""#).unwrap_err();
        let line = payload_error(&e).to_string();

        assert!(line.contains(r#"string \"abc\""#));
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["error"], format!("Invalid payload: {e}"));
    }
}
