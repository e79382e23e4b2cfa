//! Link-type labels and the fixed host table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which internal service a URL points at.
///
/// Serialised as its label: `"icafe"`, `"iku"`, or `""` when unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinkType {
    #[serde(rename = "icafe")]
    Icafe,
    #[serde(rename = "iku")]
    Iku,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

/// Network-locations recognized by the classifier. Matched exactly.
pub const KNOWN_HOSTS: [(&str, LinkType); 2] = [
    ("console.cloud.baidu-int.com", LinkType::Icafe),
    ("ku.baidu-int.com", LinkType::Iku),
];

impl LinkType {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::Icafe => "icafe",
            LinkType::Iku => "iku",
            LinkType::Unknown => "",
        }
    }

    /// True for every label except the empty one.
    pub fn is_known(self) -> bool {
        self != LinkType::Unknown
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `LinkType::from_str` for anything but the three labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown link type label: {0:?}")]
pub struct ParseLinkTypeError(pub String);

impl FromStr for LinkType {
    type Err = ParseLinkTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "icafe" => Ok(LinkType::Icafe),
            "iku" => Ok(LinkType::Iku),
            "" => Ok(LinkType::Unknown),
            other => Err(ParseLinkTypeError(other.to_string())),
        }
    }
}
