use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use coursely_core::field::FieldId;

mod commands;

use commands::{ListKind, PendingArg};

#[derive(Parser)]
#[command(name = "coursely")]
#[command(about = "Coursely - student profile and academic program editor", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Key-value store file, overriding the config
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the profile and academic programs
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit one field and commit it
    Edit {
        /// major, secondMajor, minor, secondMinor, hassPathway or gpa
        #[arg(value_parser = FieldId::from_str)]
        field: FieldId,
        value: String,
        /// Type into the second-program input instead of the main one
        #[arg(long)]
        secondary: bool,
        /// Pick the value from the dropdown instead of typing it
        #[arg(long)]
        select: bool,
    },
    /// Search a catalog list
    Search {
        #[arg(value_enum)]
        list: ListKind,
        #[arg(default_value = "")]
        query: String,
    },
    /// List the tracks of a program
    Tracks {
        program: String,
        /// Look the program up among minors
        #[arg(long)]
        minor: bool,
    },
    /// Request a feature that is not available yet
    Pending {
        #[arg(value_enum)]
        feature: PendingArg,
        /// Program the feature applies to
        #[arg(long)]
        program: Option<String>,
        /// Track selection applies to a minor
        #[arg(long)]
        minor: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut editor = commands::open_editor(cli.config, cli.store)?;

    match cli.command {
        Commands::Show { json } => commands::show::run(&editor, json)?,
        Commands::Edit {
            field,
            value,
            secondary,
            select,
        } => commands::edit::run(&mut editor, field, &value, secondary, select)?,
        Commands::Search { list, query } => commands::search::run(&editor, list, &query),
        Commands::Tracks { program, minor } => commands::tracks::run(&editor, &program, minor),
        Commands::Pending {
            feature,
            program,
            minor,
        } => commands::pending::run(&editor, feature, program, minor)?,
    }

    Ok(())
}
