// SPDX-License-Identifier: GPL-3.0-only
use url::Url;
use anyhow::{Result, Context};

/// Validate that a string is an absolute web URL.
///
/// Checks:
/// - Parses as an absolute URL
/// - Only allows http/https schemes
/// - Has a non-empty host
pub fn validate_url(url_str: &str) -> Result<()> {
    let url = Url::parse(url_str)
        .context("Invalid URL format")?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(anyhow::anyhow!(
                "Invalid URL scheme: {} (only http and https are allowed)",
                scheme
            ));
        }
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(anyhow::anyhow!("URL must have a host")),
    }
}
