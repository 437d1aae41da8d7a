//! Completion command implementation
//!
//! Prints a completion script for the `mtree` command tree. Redirect it into
//! the shell's completion directory, e.g.
//! `mtree completion bash > ~/.local/share/bash-completion/completions/mtree`.

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completion scripts on stdout
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "mtree", &mut io::stdout());
    Ok(())
}
