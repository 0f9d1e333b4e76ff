//! Browser transport for the lead intake API

use crate::core::lead::{LeadError, LeadRequest, LeadTransport, TransportResponse};

/// Sends leads with `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(not(feature = "ssr"))]
impl LeadTransport for BrowserTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &LeadRequest,
    ) -> Result<TransportResponse, LeadError> {
        use gloo_net::http::Request;

        let response = Request::post(url)
            .header("Accept", "application/json")
            .json(request)
            .map_err(|e| LeadError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| LeadError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LeadError::Transport(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(feature = "ssr")]
impl LeadTransport for BrowserTransport {
    async fn post_json(
        &self,
        _url: &str,
        _request: &LeadRequest,
    ) -> Result<TransportResponse, LeadError> {
        Err(LeadError::Transport(
            "Lead submission not available on server".to_string(),
        ))
    }
}
