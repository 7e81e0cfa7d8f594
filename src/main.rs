use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use ukkonen::output::{self, BatchLine, DotTrace, JsonTrace};
use ukkonen::tree::{self, TreeStats};
use ukkonen::utils::{self, AppConfig, Source};

#[derive(Parser)]
#[command(name = "ukkonen")]
#[command(about = "Build suffix trees online and trace every construction step")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

/// Where to read the text from: inline, a file, or stdin when neither is given
#[derive(clap::Args)]
struct InputArgs {
    /// Text to index; its last symbol must be unique
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Append the configured sentinel symbol
    #[arg(short = 's', long)]
    append_sentinel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree and show its statistics
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Check the finished tree against its text
        #[arg(long)]
        verify: bool,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a tree, exporting a snapshot after every step
    Trace {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory (DOT) or file (JSON, stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = TraceFormat::Dot)]
        format: TraceFormat,
    },
    /// Build one tree per non-empty line of a file, in parallel
    Batch {
        file: PathBuf,

        /// Append the configured sentinel symbol to every line
        #[arg(short = 's', long)]
        append_sentinel: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write the defaults to the config file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TraceFormat {
    Dot,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let color = !cli.no_color;
    let config = AppConfig::load()?;

    match cli.command {
        Commands::Build {
            input,
            verify,
            json,
        } => {
            let text = read_text(&input, &config)?;
            let suffix_tree = tree::build_text(text, &mut tree::NoopSink);
            let stats = TreeStats::collect(&suffix_tree);

            let verified = if verify {
                let outcome = tree::verify(&suffix_tree);
                if let Err(violation) = &outcome {
                    log::error!("verification failed: {}", violation);
                }
                Some(outcome.is_ok())
            } else {
                None
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                output::print_stats(&stats, verified, color)?;
            }

            if verified == Some(false) {
                bail!("tree failed verification");
            }
        }
        Commands::Trace { input, out, format } => {
            let text = read_text(&input, &config)?;
            run_trace(text, out.as_deref(), format, &config)?;
        }
        Commands::Batch {
            file,
            append_sentinel,
        } => {
            let lines = run_batch(&file, append_sentinel || config.append_sentinel, config.sentinel)?;
            output::print_batch(&lines, color)?;
        }
        Commands::Config { init } => {
            let path = utils::get_config_path()?;
            if init && !path.exists() {
                AppConfig::default().save_to(&path)?;
                println!("Wrote default config to {}", path.display());
            }
            println!("Config file: {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn read_text(input: &InputArgs, config: &AppConfig) -> Result<tree::Text> {
    let raw = Source::pick(input.text.as_deref(), input.file.as_deref()).read()?;
    let append = input.append_sentinel || config.append_sentinel;
    let text = utils::prepare_text(&raw, append, config.sentinel)?;
    Ok(text)
}

fn run_trace(text: tree::Text, out: Option<&Path>, format: TraceFormat, config: &AppConfig) -> Result<()> {
    match format {
        TraceFormat::Dot => {
            let dir = out.unwrap_or(config.trace_dir.as_path());
            let mut trace = DotTrace::new(dir, config.dot.clone())?;
            tree::build_text(text, &mut trace);
            let written = trace.finish()?;
            println!("Wrote {} step files to {}", written, dir.display());
        }
        TraceFormat::Json => match out {
            Some(path) => {
                let file = fs::File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                let mut trace = JsonTrace::new(io::BufWriter::new(file));
                tree::build_text(text, &mut trace);
                let written = trace.finish()?;
                println!("Wrote {} steps to {}", written, path.display());
            }
            None => {
                let mut trace = JsonTrace::new(io::stdout().lock());
                tree::build_text(text, &mut trace);
                trace.finish()?;
            }
        },
    }
    Ok(())
}

fn run_batch(file: &Path, append: bool, sentinel: char) -> Result<Vec<BatchLine>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    log::debug!("building {} trees from {}", lines.len(), file.display());
    let bar = utils::batch_bar(lines.len() as u64);

    // Each line gets its own builder; nothing is shared between them
    let results = lines
        .par_iter()
        .map(|&(line_number, line)| {
            let outcome = utils::prepare_text(line, append, sentinel)
                .map(|text| TreeStats::collect(&tree::build_text(text, &mut tree::NoopSink)))
                .map_err(|e| e.to_string());
            bar.inc(1);
            BatchLine {
                line_number,
                outcome,
            }
        })
        .collect();

    bar.finish_and_clear();
    Ok(results)
}
