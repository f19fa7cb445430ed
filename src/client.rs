//! Client HTTP typé pour l'API
//!
//! Ce module reflète le contrat du client front-end: content-type
//! JSON sur chaque appel, header `Authorization: Bearer <token>`
//! injecté depuis la session stockée, et normalisation de tous les
//! échecs (réseau ou statut non-2xx) en `ApiFailure` au lieu d'un
//! panic. Les GET sont réessayés avec backoff exponentiel, les
//! écritures jamais.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::contact_dto::{ContactResponse, CreateContactRequest};
use crate::dto::media_dto::MediaAssetResponse;
use crate::dto::site_config_dto::{SiteConfigResponse, UpdateSiteConfigRequest};
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::dto::visitor_dto::VisitorStatsResponse;

const MAX_GET_RETRIES: u32 = 3;
const RETRY_BASE_MS: u64 = 250;

/// Forme uniforme de tout échec d'appel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFailure {
    pub error: bool, // toujours true
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ApiFailure {
    fn network(message: String) -> Self {
        Self {
            error: true,
            message,
            status: None,
        }
    }

    fn http(status: u16, message: String) -> Self {
        Self {
            error: true,
            message,
            status: Some(status),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiFailure>;

/// Délai avant la tentative `attempt + 1`
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(RETRY_BASE_MS * 2u64.pow(attempt))
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(reqwest::header::CONTENT_TYPE, "application/json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Extraire le `message` du corps d'erreur `{ "message": ... }`
    async fn failure_from_response(response: reqwest::Response) -> ApiFailure {
        let status = response.status().as_u16();
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(|message| message.as_str())
                .unwrap_or("Request failed")
                .to_string(),
            Err(_) => "Request failed".to_string(),
        };

        ApiFailure::http(status, message)
    }

    /// GET idempotent: réessayé sur erreur réseau ou 5xx
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let mut last_failure = ApiFailure::network("Request was never sent".to_string());

        for attempt in 0..MAX_GET_RETRIES {
            if attempt > 0 {
                tokio::time::sleep(backoff_delay(attempt - 1)).await;
            }

            let request = self.apply_headers(self.client.get(self.url(path)));
            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<T>().await.map_err(|e| {
                            ApiFailure::network(format!("Invalid response body: {}", e))
                        });
                    }

                    let failure = Self::failure_from_response(response).await;
                    if !status.is_server_error() {
                        return Err(failure);
                    }
                    last_failure = failure;
                }
                Err(e) => last_failure = ApiFailure::network(e.to_string()),
            }
        }

        Err(last_failure)
    }

    /// Écriture: une seule tentative, jamais réessayée
    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let mut request = self.apply_headers(self.client.request(method, self.url(path)));
        if let Some(body) = body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ApiFailure::network(format!("Invalid response body: {}", e))),
            Ok(response) => Err(Self::failure_from_response(response).await),
            Err(e) => Err(ApiFailure::network(e.to_string())),
        }
    }

    // --- Authentification ---

    /// Login: mémorise le token pour les appels protégés suivants
    pub async fn login(&mut self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .send_json(Method::POST, "/api/admin/login", Some(&request))
            .await?;

        self.token = Some(response.token.clone());
        Ok(response)
    }

    // --- Véhicules ---

    pub async fn list_vehicles(&self) -> ApiResult<Vec<VehicleResponse>> {
        self.get_json("/api/vehicles").await
    }

    pub async fn featured_vehicles(&self) -> ApiResult<Vec<VehicleResponse>> {
        self.get_json("/api/vehicles/featured").await
    }

    pub async fn vehicle(&self, id: Uuid) -> ApiResult<VehicleResponse> {
        self.get_json(&format!("/api/vehicles/{}", id)).await
    }

    pub async fn create_vehicle(&self, request: &CreateVehicleRequest) -> ApiResult<VehicleResponse> {
        self.send_json(Method::POST, "/api/vehicles", Some(request))
            .await
    }

    pub async fn update_vehicle(
        &self,
        id: Uuid,
        request: &UpdateVehicleRequest,
    ) -> ApiResult<VehicleResponse> {
        self.send_json(Method::PUT, &format!("/api/vehicles/{}", id), Some(request))
            .await
    }

    pub async fn delete_vehicle(&self, id: Uuid) -> ApiResult<serde_json::Value> {
        self.send_json::<_, ()>(Method::DELETE, &format!("/api/vehicles/{}", id), None)
            .await
    }

    // --- Messages de contact ---

    pub async fn submit_contact(&self, request: &CreateContactRequest) -> ApiResult<ContactResponse> {
        self.send_json(Method::POST, "/api/contact", Some(request))
            .await
    }

    pub async fn list_contacts(&self) -> ApiResult<Vec<ContactResponse>> {
        self.get_json("/api/contact").await
    }

    pub async fn respond_contact(&self, id: Uuid) -> ApiResult<ContactResponse> {
        self.send_json::<_, ()>(Method::PUT, &format!("/api/contact/{}/respond", id), None)
            .await
    }

    pub async fn delete_contact(&self, id: Uuid) -> ApiResult<serde_json::Value> {
        self.send_json::<_, ()>(Method::DELETE, &format!("/api/contact/{}", id), None)
            .await
    }

    // --- Visites ---

    pub async fn record_visit(&self, page: &str) -> ApiResult<serde_json::Value> {
        let body = serde_json::json!({ "page": page });
        self.send_json(Method::POST, "/api/visitors/record", Some(&body))
            .await
    }

    pub async fn visitor_stats(&self) -> ApiResult<VisitorStatsResponse> {
        self.get_json("/api/visitors/stats").await
    }

    // --- Configuration du site ---

    pub async fn site_config(&self) -> ApiResult<SiteConfigResponse> {
        self.get_json("/api/admin/site-config").await
    }

    pub async fn update_site_config(
        &self,
        request: &UpdateSiteConfigRequest,
    ) -> ApiResult<SiteConfigResponse> {
        self.send_json(Method::PUT, "/api/admin/site-config", Some(request))
            .await
    }

    // --- Médias ---

    pub async fn list_media(&self) -> ApiResult<Vec<MediaAssetResponse>> {
        self.get_json("/api/media").await
    }

    pub async fn delete_media(&self, id: Uuid) -> ApiResult<serde_json::Value> {
        self.send_json::<_, ()>(Method::DELETE, &format!("/api/media/{}", id), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_delay_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_millis(250));
        assert_eq!(backoff_delay(1), Duration::from_millis(500));
        assert_eq!(backoff_delay(2), Duration::from_millis(1000));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.url("/api/vehicles"), "http://localhost:3000/api/vehicles");
    }

    #[test]
    fn test_failure_shape_serializes_uniformly() {
        let failure = ApiFailure::http(404, "Vehicle not found".to_string());
        let value = serde_json::to_value(&failure).unwrap();

        assert_eq!(value["error"], true);
        assert_eq!(value["message"], "Vehicle not found");
        assert_eq!(value["status"], 404);

        let network = ApiFailure::network("connection refused".to_string());
        let value = serde_json::to_value(&network).unwrap();
        assert!(value.get("status").is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_normalizes_to_failure() {
        // Port 1: connexion refusée immédiatement
        let client = ApiClient::new("http://127.0.0.1:1");
        let result = client.record_visit("/contact").await;

        let failure = result.unwrap_err();
        assert!(failure.error);
        assert!(failure.status.is_none());
    }
}
