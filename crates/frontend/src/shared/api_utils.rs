//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the character API server listens on
pub const API_PORT: u16 = 5000;

/// Character edited by this sheet
pub const CHARACTER_ID: i32 = 1;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available
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
    base_for(&protocol, &hostname)
}

fn base_for(protocol: &str, hostname: &str) -> String {
    let protocol = match protocol {
        "http:" | "https:" => protocol,
        _ => "http:",
    };
    let hostname = if hostname.is_empty() {
        "localhost"
    } else {
        hostname
    };
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url(&format!("/api/character/{}", CHARACTER_ID));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_uses_api_port() {
        assert_eq!(base_for("http:", "127.0.0.1"), "http://127.0.0.1:5000");
        // pages opened from file:// have no hostname
        assert_eq!(base_for("file:", ""), "http://localhost:5000");
    }
}
