use shared::ApiClientConfig;
use web_sys::window;

/// Get the base HTTP URL (e.g., "http://localhost:3000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let Some(window) = window() else {
        return String::new();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// API client configuration pointing at the origin the app was served from
pub fn api_config() -> ApiClientConfig {
    ApiClientConfig::new(get_base_url())
}

/// Hard navigation for paths the router does not know about
pub fn set_location(path: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(path) {
            log::error!("Failed to navigate to {}: {:?}", path, e);
        }
    }
}
