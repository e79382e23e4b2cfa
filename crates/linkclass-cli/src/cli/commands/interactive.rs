//! `linkclass interactive` – classify URLs read line by line.

use anyhow::Result;
use linkclass_core::classify;
use linkclass_core::config::OutputFormat;
use std::io::{BufRead, Write};

use crate::cli::output::render;

/// Reads URLs from `input` until `quit` (any case) or end of input.
///
/// Lines are trimmed and blank ones skipped. Returns how many URLs were
/// classified.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    prompt: &str,
    format: OutputFormat,
) -> Result<usize> {
    let mut classified = 0;
    let mut line = String::new();
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let url = line.trim();
        if url.eq_ignore_ascii_case("quit") {
            break;
        }
        if url.is_empty() {
            continue;
        }
        writeln!(out, "{}", render(&classify(url), format)?)?;
        classified += 1;
    }
    tracing::debug!("interactive session classified {} urls", classified);
    Ok(classified)
}
