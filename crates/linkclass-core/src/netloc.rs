//! Raw network-location extraction.
//!
//! Splits a URL the generic RFC 3986 way: optional `scheme:`, then an
//! authority introduced by `//` and ended by the first `/`, `?` or `#`.
//! Unlike a WHATWG parser this keeps the authority exactly as written, so
//! case, userinfo and explicit ports (even default ones) survive.

use std::borrow::Cow;

/// Failure to split a network-location out of a URL.
#[derive(Debug, thiserror::Error)]
pub enum NetlocError {
    #[error("invalid IPv6 URL: unbalanced brackets in {netloc:?}")]
    UnbalancedBrackets { netloc: String },

    #[error("invalid IPv6 URL: bracketed host {host:?}")]
    InvalidBracketedHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("IPvFuture address is invalid: {host:?}")]
    InvalidIpvFuture { host: String },
}

/// Returns the network-location (`userinfo@host:port`) of `url`, or an empty
/// string when the URL has no `//` authority.
///
/// Leading C0 controls and spaces are ignored, and tab/CR/LF are removed
/// anywhere in the input before splitting; only then does the result need to
/// be owned.
pub fn split_netloc(url: &str) -> Result<Cow<'_, str>, NetlocError> {
    let url = url.trim_start_matches(|c: char| c <= ' ');
    if url.contains(is_removed_char) {
        let cleaned: String = url.chars().filter(|&c| !is_removed_char(c)).collect();
        return netloc_of(&cleaned).map(|n| Cow::Owned(n.to_string()));
    }
    netloc_of(url).map(Cow::Borrowed)
}

fn is_removed_char(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n')
}

fn netloc_of(url: &str) -> Result<&str, NetlocError> {
    let rest = match url.find(':') {
        Some(i) if is_scheme(&url[..i]) => &url[i + 1..],
        _ => url,
    };
    let Some(authority) = rest.strip_prefix("//") else {
        return Ok("");
    };
    let end = authority
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(authority.len());
    let netloc = &authority[..end];
    check_brackets(netloc)?;
    Ok(netloc)
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn check_brackets(netloc: &str) -> Result<(), NetlocError> {
    let open = netloc.contains('[');
    let close = netloc.contains(']');
    if open != close {
        return Err(NetlocError::UnbalancedBrackets {
            netloc: netloc.to_string(),
        });
    }
    if !open {
        return Ok(());
    }

    // Text between the first '[' and the ']' that follows it.
    let after_open = netloc.split_once('[').map_or("", |(_, tail)| tail);
    let host = after_open.split_once(']').map_or(after_open, |(head, _)| head);

    if let Some(future) = host.strip_prefix('v') {
        return if is_ipv_future(future) {
            Ok(())
        } else {
            Err(NetlocError::InvalidIpvFuture {
                host: host.to_string(),
            })
        };
    }

    url::Host::parse(&format!("[{host}]"))
        .map(|_| ())
        .map_err(|source| NetlocError::InvalidBracketedHost {
            host: host.to_string(),
            source,
        })
}

/// `<hex>+ "." <anything>+`, the part of an IPvFuture literal after the `v`.
fn is_ipv_future(s: &str) -> bool {
    match s.split_once('.') {
        Some((version, rest)) => {
            !version.is_empty()
                && version.chars().all(|c| c.is_ascii_hexdigit())
                && !rest.is_empty()
        }
        None => false,
    }
}
