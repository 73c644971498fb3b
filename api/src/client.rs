// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! High-level client for the booking backend REST API.

use std::sync::Arc;

use jiff::Timestamp;
use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::query::EventQuery;
use crate::session::Session;
use crate::types::{
    AvailabilityResponse, ConflictRecord, ConflictStatus, EventRecord, ResolutionRequest,
    ResolveResponse,
};

/// Client for the booking backend.
///
/// Each operation is exactly one network round trip; there is no
/// multi-call operation that could be left half-done.
///
/// # Example
///
/// ```ignore
/// use staycal_api::{ApiConfig, BookingApiClient, Session};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     base_url: "https://api.example.com".to_string(),
///     ..Default::default()
/// };
///
/// let client = BookingApiClient::new(config, Session::bearer("token"))?;
/// let conflicts = client.list_conflicts("prop-1", None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BookingApiClient {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl BookingApiClient {
    /// Creates a new booking API client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig, session: Session) -> Result<Self, ApiError> {
        let http = HttpClient::new(config.clone(), session)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Lists calendar events for a property.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn list_events(
        &self,
        property_id: &str,
        query: &EventQuery,
    ) -> Result<Vec<EventRecord>, ApiError> {
        let url = self.url(&format!("/properties/{property_id}/events"));
        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::GET, &url)
                    .query(&query.to_pairs()),
            )
            .await?;

        Ok(resp.json().await?)
    }

    /// Lists conflicts for a property, optionally filtered by lifecycle
    /// state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn list_conflicts(
        &self,
        property_id: &str,
        status: Option<ConflictStatus>,
    ) -> Result<Vec<ConflictRecord>, ApiError> {
        let url = self.url(&format!("/properties/{property_id}/conflicts"));
        let mut req = self.http.build_request(Method::GET, &url);
        if let Some(status) = status {
            req = req.query(&[("status", status.as_str())]);
        }

        let resp = self.http.execute(req).await?;
        Ok(resp.json().await?)
    }

    /// Submits a resolution decision for a conflict.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn resolve_conflict(
        &self,
        property_id: &str,
        conflict_id: &str,
        request: &ResolutionRequest,
    ) -> Result<ResolveResponse, ApiError> {
        let url = self.url(&format!(
            "/properties/{property_id}/conflicts/{conflict_id}/resolve"
        ));
        tracing::debug!(property_id, conflict_id, resolution = ?request.resolution, "submitting resolution");

        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url).json(request))
            .await?;

        Ok(resp.json().await?)
    }

    /// Removes or archives a conflict without resolving it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_conflict(
        &self,
        property_id: &str,
        conflict_id: &str,
        preserve_history: bool,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!(
            "/properties/{property_id}/conflicts/{conflict_id}"
        ));

        self.http
            .execute(
                self.http
                    .build_request(Method::DELETE, &url)
                    .query(&[("preserve_history", preserve_history)]),
            )
            .await?;

        Ok(())
    }

    /// Checks availability of a property for a time window.
    ///
    /// Availability truth comes from the server; callers must not
    /// re-derive it from local event data.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn check_availability(
        &self,
        property_id: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<AvailabilityResponse, ApiError> {
        let url = self.url(&format!("/properties/{property_id}/calendar/availability"));
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url).query(&[
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
            ]))
            .await?;

        Ok(resp.json().await?)
    }

    /// Builds a full URL from a path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
