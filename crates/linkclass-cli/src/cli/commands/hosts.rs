//! `linkclass hosts` – list the recognized hosts.

use anyhow::Result;
use linkclass_core::KNOWN_HOSTS;
use std::io::Write;

pub fn run_hosts<W: Write>(out: &mut W) -> Result<()> {
    for (host, link_type) in KNOWN_HOSTS {
        writeln!(out, "{host}\t{link_type}")?;
    }
    Ok(())
}
