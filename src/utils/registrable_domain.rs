//! Registrable domain name extraction from shop links.
//!
//! Turns a submitted shop URL into the bare registrable name used as the
//! shop deduplication key: `https://www.foxtrot.com.ua/` becomes `foxtrot`.

use url::{Host, Url};

/// Errors that can occur during registrable name extraction.
#[derive(Debug, thiserror::Error)]
pub enum DomainExtractionError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("IP address hosts have no registrable name")]
    IpAddressHost,
}

/// Public suffixes made of two labels. Hosts ending in one of these keep the
/// label immediately before the suffix as their registrable name; everything
/// else is treated as a single-label suffix.
const TWO_LABEL_SUFFIXES: &[&str] = &[
    "com.ua", "net.ua", "org.ua", "in.ua", "co.uk", "org.uk", "ac.uk", "gov.uk", "com.au",
    "net.au", "org.au", "co.jp", "or.jp", "ne.jp", "com.br", "net.br", "com.tr", "co.in",
    "co.nz", "com.mx", "com.cn", "com.pl", "com.ar", "co.za", "co.kr",
];

/// Extracts the registrable name from a URL.
///
/// The registrable name is the host label directly before the public suffix,
/// with subdomains and the suffix itself discarded:
///
/// - `https://www.foxtrot.com.ua/` → `foxtrot`
/// - `https://rozetka.com.ua/` → `rozetka`
/// - `https://shop.example.co.uk/page` → `example`
/// - `https://example.com` → `example`
///
/// Single-label hosts (e.g. `localhost`) are returned as-is, lowercased.
///
/// # Errors
///
/// Returns [`DomainExtractionError`] for malformed URLs, non-HTTP(S) schemes,
/// missing hosts, and IP-address hosts.
pub fn registrable_name(link: &str) -> Result<String, DomainExtractionError> {
    let url =
        Url::parse(link).map_err(|e| DomainExtractionError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(DomainExtractionError::UnsupportedProtocol),
    }

    let host = match url.host() {
        Some(Host::Domain(domain)) => domain.to_ascii_lowercase(),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {
            return Err(DomainExtractionError::IpAddressHost);
        }
        None => return Err(DomainExtractionError::MissingHost),
    };

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.is_empty() {
        return Err(DomainExtractionError::MissingHost);
    }

    let suffix_len = if labels.len() >= 3 {
        let last_two = format!("{}.{}", labels[labels.len() - 2], labels[labels.len() - 1]);
        if TWO_LABEL_SUFFIXES.contains(&last_two.as_str()) {
            2
        } else {
            1
        }
    } else {
        1
    };

    let name_index = labels.len().saturating_sub(suffix_len + 1);
    if labels.len() <= suffix_len {
        // Bare suffix or single-label host such as "localhost".
        return Ok(labels[0].to_string());
    }

    Ok(labels[name_index].to_string())
}
