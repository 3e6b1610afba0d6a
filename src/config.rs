//! Process-wide configuration for the transaction store client
//!
//! The base address is resolved exactly once, on first access: a `.env`
//! file is honored, then the environment, then the hard-coded fallback.

use lazy_static::lazy_static;

/// Fallback store address when no override is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Environment variable overriding the store address
pub const BASE_URL_ENV: &str = "PAYTAP_API_BASE_URL";

lazy_static! {
    static ref BASE_URL: String = resolve_base_url();
}

/// The resolved store base address for this process
pub fn base_url() -> &'static str {
    &BASE_URL
}

fn resolve_base_url() -> String {
    dotenv::dotenv().ok();
    match std::env::var(BASE_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => normalize(&value),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Trim whitespace and a trailing slash so paths can be appended verbatim
fn normalize(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
