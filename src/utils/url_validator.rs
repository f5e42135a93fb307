//! URL 规范化与验证
//!
//! 提交的 URL 先做安全检查，缺少协议时补 `http://`

use std::net::{Ipv4Addr, Ipv6Addr};

use url::{Host, Url};

#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    DangerousProtocol(String),
    InvalidFormat(String),
    MissingHost,
    PrivateAddress(String),
    InvalidHost(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http://, https:// and ftp:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::MissingHost => write!(f, "URL has no host"),
            Self::PrivateAddress(host) => {
                write!(f, "Private or reserved address not allowed: {}", host)
            }
            Self::InvalidHost(host) => write!(f, "Host must be a public domain name: {}", host),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Normalise a submitted URL into the form that is stored.
///
/// Trims whitespace, blocks dangerous protocols, prepends `http://` when
/// no `scheme://` is present, then requires an allowed scheme and a host.
/// The returned string is the trimmed input (plus prefix), not the
/// re-serialised parse, so equal submissions dedup to the same row.
pub fn normalize_url(raw: &str) -> Result<String, UrlValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let lower = trimmed.to_lowercase();
    for proto in DANGEROUS_PROTOCOLS {
        if lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, trimmed)
    };

    let parsed =
        Url::parse(&candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(UrlValidationError::InvalidProtocol(format!(
            "{}:",
            parsed.scheme()
        )));
    }

    match parsed.host() {
        None => return Err(UrlValidationError::MissingHost),
        Some(Host::Domain(domain)) if domain.is_empty() => {
            return Err(UrlValidationError::MissingHost);
        }
        Some(Host::Domain(domain)) => {
            if !has_public_tld(domain) {
                return Err(UrlValidationError::InvalidHost(domain.to_string()));
            }
        }
        Some(Host::Ipv4(addr)) => {
            if !is_public_ipv4(addr) {
                return Err(UrlValidationError::PrivateAddress(addr.to_string()));
            }
        }
        Some(Host::Ipv6(addr)) => {
            if !is_public_ipv6(addr) {
                return Err(UrlValidationError::PrivateAddress(addr.to_string()));
            }
        }
    }

    Ok(candidate)
}

/// 至少两段，且顶级域为 2 位以上字母（或 punycode）
fn has_public_tld(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if name.is_empty() || name.ends_with('.') {
        return false;
    }
    tld.starts_with("xn--") || (tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic))
}

/// 排除私有、回环、链路本地、组播及保留网段，以及网络/广播地址
fn is_public_ipv4(addr: Ipv4Addr) -> bool {
    let [first, .., last] = addr.octets();
    !(addr.is_private()
        || addr.is_loopback()
        || addr.is_link_local()
        || addr.is_unspecified()
        || first == 0
        || first >= 224
        || last == 0
        || last == 255)
}

fn is_public_ipv6(addr: Ipv6Addr) -> bool {
    if let Some(v4) = addr.to_ipv4_mapped() {
        return is_public_ipv4(v4);
    }
    !(addr.is_loopback()
        || addr.is_unspecified()
        || addr.is_multicast()
        || addr.is_unique_local()
        || addr.is_unicast_link_local())
}

/// 获取 URL 验证错误的用户友好消息
pub fn validation_error_message(error: &UrlValidationError) -> &'static str {
    match error {
        UrlValidationError::EmptyUrl => "URL cannot be empty",
        UrlValidationError::InvalidProtocol(_) => "URL must use http, https or ftp",
        UrlValidationError::DangerousProtocol(_) => "This URL protocol is not allowed",
        UrlValidationError::InvalidFormat(_) => "Invalid URL format",
        UrlValidationError::MissingHost => "URL must include a host",
        UrlValidationError::PrivateAddress(_) => "Private or local addresses are not allowed",
        UrlValidationError::InvalidHost(_) => "URL host must be a public domain name",
    }
}
