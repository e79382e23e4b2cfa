//! URL classification by exact network-location match.

use crate::link_type::{LinkType, KNOWN_HOSTS};
use crate::netloc::{split_netloc, NetlocError};
use serde::{Deserialize, Serialize};

/// Outcome of classifying one URL. Serialises as `{"result": "<label>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub result: LinkType,
}

impl From<LinkType> for ClassificationResult {
    fn from(result: LinkType) -> Self {
        Self { result }
    }
}

/// Looks up a raw network-location in the fixed host table.
///
/// Comparison is exact and case-sensitive: `Ku.baidu-int.com`,
/// `ku.baidu-int.com:443` and `ku.baidu-int.com.` are all unknown.
pub fn classify_netloc(netloc: &str) -> LinkType {
    KNOWN_HOSTS
        .iter()
        .find(|(host, _)| *host == netloc)
        .map_or(LinkType::Unknown, |(_, link_type)| *link_type)
}

/// Classifies `url`, surfacing a failure to split its network-location.
pub fn try_classify(url: &str) -> Result<LinkType, NetlocError> {
    if url.is_empty() {
        return Ok(LinkType::Unknown);
    }
    let netloc = split_netloc(url)?;
    Ok(classify_netloc(&netloc))
}

/// Classifies `url` as an icafe or iku link.
///
/// Never fails: empty input, malformed input and unrecognized hosts all give
/// [`LinkType::Unknown`]. Malformed input is additionally reported as a
/// warning through `tracing`.
///
/// # Examples
///
/// - `classify("https://ku.baidu-int.com/knowledge/x")` → `{"result": "iku"}`
/// - `classify("https://www.baidu.com")` → `{"result": ""}`
pub fn classify(url: &str) -> ClassificationResult {
    match try_classify(url) {
        Ok(link_type) => link_type.into(),
        Err(err) => {
            tracing::warn!(url, error = %err, "failed to parse URL");
            ClassificationResult::default()
        }
    }
}
