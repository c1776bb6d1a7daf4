use std::net::IpAddr;
use thiserror::Error;
use url::Url;

/// Reasons a URL is refused before being handed to the system opener.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// The URL targets localhost or a private/internal address.
    #[error("Refusing to open internal address: {0}")]
    InternalAddress(String),
}

/// Validates a site URL before passing it to `open::that`.
///
/// The URL comes from server-supplied feed metadata, so it is treated as
/// untrusted: only http/https are accepted, and loopback, private-range, and
/// link-local hosts are rejected.
pub fn validate_url_for_open(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }

    if let Some(host) = url.host_str() {
        if host.eq_ignore_ascii_case("localhost") {
            return Err(UrlValidationError::InternalAddress(host.to_owned()));
        }

        // IPv6 hosts carry brackets in the URL host string.
        let bare = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        if let Ok(ip) = bare.parse::<IpAddr>() {
            if is_internal_ip(&ip) {
                return Err(UrlValidationError::InternalAddress(ip.to_string()));
            }
        }
    }

    Ok(url)
}

fn is_internal_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            v4.is_private() || v4.is_loopback() || v4.is_link_local() || v4.is_unspecified()
        }
        IpAddr::V6(v6) => {
            if v6.is_loopback() || v6.is_unspecified() {
                return true;
            }
            let seg = v6.segments();
            // Unique local (fc00::/7) or link-local (fe80::/10)
            (seg[0] & 0xfe00) == 0xfc00 || (seg[0] & 0xffc0) == 0xfe80
        }
    }
}
