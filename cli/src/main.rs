//! docreport CLI - document layout analysis reports

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docreport::engine::DEFAULT_MODEL_ID;
use docreport::{
    analyze_document, AnalysisEngine, AzureEngine, EngineConfig, JsonEngine, JsonFormat,
    ReportOutput, ReportStats,
};

#[derive(Parser)]
#[command(name = "docreport")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Turn document layout analysis into a text report", long_about = None)]
struct Cli {
    /// Saved analysis result (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a document with Azure Document Intelligence and print the report
    Analyze {
        /// Document to analyze (PDF, image, ...)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Build the report from a saved analysis result
    Render {
        /// Saved analysis result (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Analyze a document and save the raw analysis result as JSON
    Json {
        /// Document to analyze (PDF, image, ...)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Show statistics for a saved analysis result
    Info {
        /// Saved analysis result (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Connection settings for the analysis service.
#[derive(Args)]
struct EngineArgs {
    /// Service endpoint
    #[arg(long, env = "AZURE_DOCUMENT_ANALYSIS_ENDPOINT")]
    endpoint: String,

    /// Subscription key
    #[arg(long, env = "AZURE_DOCUMENT_ANALYSIS_KEY", hide_env_values = true)]
    key: String,

    /// Model to run
    #[arg(long, default_value = DEFAULT_MODEL_ID)]
    model: String,

    /// Delay between status polls in milliseconds
    #[arg(long, default_value = "1000")]
    poll_ms: u64,
}

impl EngineArgs {
    fn into_config(self) -> EngineConfig {
        EngineConfig::new(self.endpoint, self.key)
            .with_model(self.model)
            .with_poll_interval(Duration::from_millis(self.poll_ms))
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            output,
            engine,
        }) => cmd_analyze(&input, output.as_deref(), engine),
        Some(Commands::Render { input, output }) => cmd_render(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
            engine,
        }) => cmd_json(&input, output.as_deref(), compact, engine),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render a saved result if input is provided
            if let Some(input) = cli.input {
                cmd_render(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: docreport <FILE> [OUTPUT]".yellow());
                println!("       docreport --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn spinner(message: &'static str) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    Ok(pb)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn write_report(
    output: Option<&Path>,
    report: ReportOutput,
) -> Result<(), Box<dyn std::error::Error>> {
    if report.is_preview() {
        eprintln!(
            "{} input could not be decoded, showing a raw preview",
            "Warning:".yellow().bold()
        );
    }
    write_output(output, report.as_str())
}

fn cmd_analyze(
    input: &Path,
    output: Option<&Path>,
    engine: EngineArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = fs::read(input)?;
    let engine = AzureEngine::new(engine.into_config())?;

    let pb = spinner("Analyzing document...")?;
    let report = analyze_document(&engine, &document);
    pb.finish_and_clear();

    write_report(output, report?)
}

fn cmd_render(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let report = analyze_document(&JsonEngine::new(), &data)?;
    write_report(output, report)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    engine: EngineArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = fs::read(input)?;
    let engine = AzureEngine::new(engine.into_config())?;

    let pb = spinner("Analyzing document...")?;
    let result = engine.analyze(&document);
    pb.finish_and_clear();
    let result = result?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = docreport::to_json(&result, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = docreport::load_file(input)?;
    let rendered = docreport::to_report_with_stats(&result);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rendered.stats)?);
        return Ok(());
    }

    println!("{}", "Analysis Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref model) = result.model_id {
        println!("{}: {}", "Model".bold(), model);
    }
    if let Some(ref version) = result.api_version {
        println!("{}: {}", "API version".bold(), version);
    }
    println!(
        "{}: {}",
        "Handwritten".bold(),
        if rendered.stats.handwritten { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    print_stats(&rendered.stats);
    println!("{}: {}", "Report bytes".bold(), rendered.content_len());

    if result.is_empty() {
        println!();
        println!("{} no pages or tables found", "Warning:".yellow().bold());
    }

    Ok(())
}

fn print_stats(stats: &ReportStats) {
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Selection marks".bold(), stats.selection_mark_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Cells".bold(), stats.cell_count);
}

fn cmd_version() {
    println!("{} {}", "docreport".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document layout analysis reports");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/docreport".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_engine_args_into_config() {
        let args = EngineArgs {
            endpoint: "https://example.test".to_string(),
            key: "secret".to_string(),
            model: "prebuilt-layout".to_string(),
            poll_ms: 250,
        };
        let config = args.into_config();
        assert_eq!(config.model_id, "prebuilt-layout");
        assert_eq!(config.poll_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_render_command_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("analysis.json");
        let output = dir.path().join("report.txt");
        fs::write(&input, r#"{"styles": [{"isHandwritten": true}]}"#).unwrap();

        cmd_render(&input, Some(&output)).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        assert_eq!(report, "Document contains handwritten content");
    }
}
