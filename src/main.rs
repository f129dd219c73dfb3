use anyhow::Result;
use clap::{Parser, Subcommand};
use dirdiff::commands::copy_diff::copy_differences;
use dirdiff::commands::report::report;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "dirdiff",
    version = "0.1.0",
    about = "Compare two directory trees and act on the differences",
    long_about = "Recursively compares two directory trees and reports every path that \
    exists under only one of them or differs in content, as a building block \
    for synchronization and deployment workflows.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Verbose output and debug logging on stderr"
    )]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "List the differences between two trees",
        long_about = "This command prints a one-line notice for every entry found only under \
        one root and for every file present under both roots with differing contents."
    )]
    Compare {
        #[arg(index = 1, help = "The first tree root")]
        first: String,
        #[arg(index = 2, help = "The second tree root")]
        second: String,
    },
    #[command(
        name = "copy-diff",
        about = "Copy new and changed entries from the second tree into an output directory",
        long_about = "This command compares two trees and copies every entry that is new or \
        changed under the second root into the output directory, creating \
        intermediate directories as needed. It refuses to run when the second \
        root was modified before the first."
    )]
    CopyDiff {
        #[arg(index = 1, help = "The first (older) tree root")]
        first: String,
        #[arg(index = 2, help = "The second (newer) tree root")]
        second: String,
        #[arg(index = 3, help = "The output directory")]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match &cli.command {
        Commands::Compare { first, second } => {
            report(
                &mut std::io::stdout(),
                Path::new(first),
                Path::new(second),
                cli.verbose,
            )?;
        }
        Commands::CopyDiff {
            first,
            second,
            output,
        } => {
            copy_differences(
                &mut std::io::stdout(),
                Path::new(first),
                Path::new(second),
                Path::new(output),
                cli.verbose,
            )?;
        }
    }

    Ok(())
}

fn setup_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}
