use crate::utils::error::{PortalError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> PortalError {
    PortalError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Accepts absolute http(s) URLs only; the fetch client has no other transport.
pub fn validate_url(field: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw).map_err(|e| invalid(field, raw, format!("Invalid URL: {}", e)))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        "http" | "https" => Err(invalid(field, raw, "URL has no host")),
        other => Err(invalid(field, raw, format!("Unsupported URL scheme: {}", other))),
    }
}

pub fn validate_path(field: &str, path: &str) -> Result<()> {
    let reason = if path.is_empty() {
        "Path cannot be empty"
    } else if path.contains('\0') {
        "Path contains null bytes"
    } else {
        return Ok(());
    };
    Err(invalid(field, path, reason))
}

/// Route paths are matched literally by the router and must be absolute.
pub fn validate_route_path(field: &str, route: &str) -> Result<()> {
    if !route.starts_with('/') || route.len() < 2 {
        return Err(invalid(field, route, "Route must start with '/' and name a resource"));
    }
    if route.contains(['{', '}', '*']) {
        return Err(invalid(field, route, "Route cannot contain captures or wildcards"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    match value.trim() {
        "" => Err(invalid(field, value, "Value cannot be empty or whitespace-only")),
        _ => Ok(()),
    }
}

pub fn validate_range<T>(field: &str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, value, format!("Value must be between {} and {}", min, max)))
    }
}
