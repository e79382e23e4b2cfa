//! `linkclass demo` – classify a fixed list of sample links.

use anyhow::Result;
use linkclass_core::classify;
use linkclass_core::config::OutputFormat;
use std::io::Write;

use crate::cli::output::render;

const RULE_WIDTH: usize = 50;

pub fn run_demo<W: Write>(out: &mut W, urls: &[String], format: OutputFormat) -> Result<()> {
    writeln!(out, "Link classification demo:")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    for url in urls {
        let result = classify(url);
        writeln!(out, "link: {url}")?;
        writeln!(out, "type: {}", render(&result, format)?)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    }
    Ok(())
}
