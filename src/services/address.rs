//! Address-bar input handling.

const SECURE_SCHEME: &str = "https://";

/// Turns address-bar text into a loadable address.
///
/// Text already starting with `http://` or `https://` passes through as is;
/// anything else gets `https://` prepended. No further validation happens
/// here, malformed addresses are left to the engine's error page.
pub fn resolve_address(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with(SECURE_SCHEME) {
        input.to_string()
    } else {
        format!("{}{}", SECURE_SCHEME, input)
    }
}

/// Short tab title for an address: the host without `www.`.
pub fn title_for_address(address: &str) -> String {
    let host = address
        .trim_start_matches(SECURE_SCHEME)
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .split('/')
        .next()
        .unwrap_or(address);
    if host.is_empty() {
        address.to_string()
    } else {
        host.to_string()
    }
}
