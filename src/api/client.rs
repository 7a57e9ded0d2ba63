//! HTTP API Client
//!
//! Functions for communicating with the management server.

use gloo_net::http::Request;

use crate::state::global::RevenuePoint;

/// Endpoint serving the monthly revenue series
pub const REVENUE_DATA_URL: &str = "/api/dashboard/revenue-data";

/// Fetch the monthly revenue series.
///
/// Transport errors and non-2xx responses both collapse into a message
/// string; callers surface one generic failure either way.
pub async fn fetch_revenue_data() -> Result<Vec<RevenuePoint>, String> {
    let response = Request::get(REVENUE_DATA_URL)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(status_error(response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Failure message for a non-2xx response; transport failures get their own
/// message, but both surface identically to the user
fn status_error(status: u16) -> String {
    format!("Server error: HTTP {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_failure_maps_to_message() {
        assert_eq!(status_error(500), "Server error: HTTP 500");
        assert_eq!(status_error(404), "Server error: HTTP 404");
    }
}
