//! Result rendering shared by the commands.

use anyhow::Result;
use linkclass_core::config::OutputFormat;
use linkclass_core::ClassificationResult;

pub fn render(result: &ClassificationResult, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(result)?,
        OutputFormat::Plain => result.result.to_string(),
    })
}
