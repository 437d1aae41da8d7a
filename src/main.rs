//! mtree CLI
//!
//! Command-line interface for building merkle trees and proving inclusion and
//! consistency against them.

use anyhow::Result;
use clap::Parser;
use mtree::cli::{commands, Cli, Commands};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Execute the command
    let success = match cli.command {
        Commands::Build {
            items,
            delimiter,
            output,
            json,
        } => commands::build::execute(items, delimiter, output, json).map(|()| true),
        Commands::Consistency {
            old_items,
            new_items,
            delimiter,
            output,
            json,
        } => commands::consistency::execute(old_items, new_items, delimiter, output, json),
        Commands::Prove {
            value,
            source,
            output,
            json,
        } => commands::prove::execute(value, source, output, json),
        Commands::ProveSubtree {
            hash,
            source,
            output,
            json,
        } => commands::prove_subtree::execute(hash, source, output, json),
        Commands::Verify { proof, root, json } => commands::verify::execute(proof, root, json),
        Commands::Root { source, json } => commands::root::execute(source, json).map(|()| true),
        Commands::Config {
            key,
            value,
            list,
            unset,
            show_origin,
            json,
        } => commands::config::execute(key, value, list, unset, show_origin, json).map(|()| true),
        Commands::Completion { shell } => commands::completion::execute(shell).map(|()| true),
    }?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
