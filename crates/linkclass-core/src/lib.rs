//! Classifies URLs as icafe or iku links by their network-location.

pub mod classifier;
pub mod config;
pub mod link_type;
pub mod logging;
pub mod netloc;

pub use classifier::{classify, classify_netloc, try_classify, ClassificationResult};
pub use link_type::{LinkType, ParseLinkTypeError, KNOWN_HOSTS};
pub use netloc::{split_netloc, NetlocError};
