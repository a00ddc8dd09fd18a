use gloo::net::http::{Request, RequestBuilder};
use shared::{
    AddAvailabilityRequest, ApiResponse, AvailabilityEvent, ClientVariant, DeleteReply,
    DeleteStatusPolicy, Endpoints,
};
use thiserror::Error;

use crate::services::config::CalendarConfig;
use crate::services::csrf::csrf_token;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// API client for the calendar backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    endpoints: Endpoints,
    variant: ClientVariant,
}

impl ApiClient {
    /// Client talking to the page's own origin
    pub fn new(variant: ClientVariant) -> Self {
        Self::with_base_url("", variant)
    }

    pub fn with_base_url(base_url: &str, variant: ClientVariant) -> Self {
        Self {
            endpoints: Endpoints::new(base_url, &variant),
            variant,
        }
    }

    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::with_base_url(&config.api_base, config.variant.clone())
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Get every availability event in scope
    pub async fn fetch_events(&self) -> Result<Vec<AvailabilityEvent>, ApiError> {
        let response = Request::get(&self.endpoints.events())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<Vec<AvailabilityEvent>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create an availability window. The body is read whatever the status.
    pub async fn add_availability(
        &self,
        request: &AddAvailabilityRequest,
    ) -> Result<ApiResponse, ApiError> {
        let response = self
            .protected(Request::post(&self.endpoints.add()))
            .json(request)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Delete one availability event
    pub async fn delete_availability(&self, event_id: u64) -> Result<DeleteReply, ApiError> {
        let response = self
            .protected(Request::delete(&self.endpoints.delete(event_id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if self.variant.delete_policy() == DeleteStatusPolicy::RejectErrorStatus && !response.ok() {
            return Err(ApiError::Status(status));
        }

        let body = response
            .json::<ApiResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(DeleteReply { status, body })
    }

    /// Headers required on state-changing requests
    fn protected(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("X-CSRFToken", &csrf_token());
        if self.variant.sends_accept_header() {
            builder.header("Accept", "application/json")
        } else {
            builder
        }
    }
}
