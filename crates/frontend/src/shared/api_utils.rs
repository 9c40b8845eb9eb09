//! Helpers for constructing backend API URLs.

/// Base URL for API requests, built from the current window location with
/// the backend on port 3000. Empty when no window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full API URL for a path like "/api/products".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
