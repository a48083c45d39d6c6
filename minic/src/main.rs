use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use minic::{render_diagnostic, Options, Outcome};
use minic_source::Source;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parses a minic source file and prints its abstract syntax tree"
)]
struct Cli {
    /// Source file to analyze
    path: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print the syntax tree, without status lines
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // stdout carries the tree, keep logs out of it
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let content = fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read `{}`", cli.path.display()))?;
    tracing::info!(path = %cli.path.display(), bytes = content.len(), "read source file");

    let options = Options { quiet: cli.quiet };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = minic::run(&content, &options, &mut out).context("failed to write output")?;
    out.flush().context("failed to write output")?;

    if let Outcome::Failed(errors) = &outcome {
        let source = Source::new(&content);
        let colored = console::colors_enabled_stderr();
        for error in errors {
            eprintln!("{}", render_diagnostic(&cli.path, &source, error, colored));
        }
        process::exit(outcome.exit_code());
    }

    Ok(())
}
