//! API URL helpers for frontend-backend communication.

/// Get the base URL for API requests.
///
/// The dashboard is served from the same origin as its API gateway, so the
/// base is derived from the current window location.
///
/// Returns an empty string when no window is available (native test runs).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/UserAuth/GetPageName");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
