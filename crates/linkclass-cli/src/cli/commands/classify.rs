//! `linkclass classify <url>...` – classify URLs given on the command line.

use anyhow::Result;
use linkclass_core::classify;
use linkclass_core::config::OutputFormat;
use std::io::Write;

use crate::cli::output::render;

pub fn run_classify<W: Write>(out: &mut W, urls: &[String], format: OutputFormat) -> Result<()> {
    for url in urls {
        writeln!(out, "{}", render(&classify(url), format)?)?;
    }
    Ok(())
}
