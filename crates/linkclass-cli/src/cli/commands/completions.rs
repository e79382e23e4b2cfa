//! `linkclass completions <shell>`.

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::Cli;

pub fn run_completions<W: Write>(out: &mut W, shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "linkclass", out);
}
