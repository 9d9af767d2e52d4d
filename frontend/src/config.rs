use web_sys::window;

use shared::constants::PRIZE_ENDPOINT;

pub fn get_api_base_url() -> String {
    // Same origin as the page, so the app works from whatever host serves it
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:3000".to_string()
}

/// Where the prize lookup goes.
pub fn prize_url() -> String {
    format!("{}{}", get_api_base_url(), PRIZE_ENDPOINT)
}
