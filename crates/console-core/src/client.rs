// Async HTTP client for the marketplace API.
//
// Endpoints:
//   GET  /api/find-fabrics   fabric search, paginated
//   GET  /api/fabric-groups  fabrication filter options
//   POST /api/auth/login     email + password -> token + profile
//   GET  /api/auth/me        bearer token -> profile

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    ApiSettings, AppError, AuthUser, FindFabricsParams, FindFabricsResponse, LoginRequest,
    LoginResponse,
};
use tracing::debug;

/// Source of fabric search results.
pub trait FabricSearch {
    fn find_fabrics(
        &self,
        params: &FindFabricsParams,
    ) -> impl Future<Output = Result<FindFabricsResponse, AppError>>;

    /// Names for the fabrication filter.
    fn fabric_groups(&self) -> impl Future<Output = Result<Vec<String>, AppError>>;
}

// Error body shape: {"msg": "..."}
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    msg: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    settings: ApiSettings,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.settings.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self
            .authorize(self.http.get(&url).query(params))
            .send()
            .await
            .map_err(transport_error)?;
        handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.settings.url(path);
        debug!("POST {url}");

        let resp = self
            .authorize(self.http.post(&url).json(body))
            .send()
            .await
            .map_err(transport_error)?;
        handle_response(resp).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.post("/api/auth/login", request).await
    }

    /// Profile of the token holder.
    pub async fn me(&self) -> Result<AuthUser, AppError> {
        if self.token.is_none() {
            return Err(AppError::unauthorized("no session token"));
        }
        self.get("/api/auth/me", &[]).await
    }
}

impl FabricSearch for ApiClient {
    async fn find_fabrics(
        &self,
        params: &FindFabricsParams,
    ) -> Result<FindFabricsResponse, AppError> {
        self.get("/api/find-fabrics", &params.query_pairs()).await
    }

    async fn fabric_groups(&self) -> Result<Vec<String>, AppError> {
        self.get("/api/fabric-groups", &[]).await
    }
}

fn transport_error(error: reqwest::Error) -> AppError {
    if error.is_decode() {
        AppError::decode(error.to_string())
    } else {
        AppError::network(error.to_string())
    }
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AppError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport_error)?;

    if status.is_success() {
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            AppError::decode(format!("{e} (body preview: {preview:?})"))
        })
    } else {
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|err| err.msg)
            .unwrap_or_else(|| status.to_string());
        Err(AppError::http(status.as_u16(), message))
    }
}
