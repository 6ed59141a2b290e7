//! gloo-net implementation of the session backend API.

use gloo_net::http::{Request, RequestBuilder, Response};
use shared::api::endpoints;
use shared::{ApiClientConfig, ApiError, CurrentUser, LayoutConfig, SessionApi};

use crate::utils;

pub struct HttpSessionApi {
    config: ApiClientConfig,
}

impl HttpSessionApi {
    /// Client for the origin the app was served from
    pub fn new() -> Self {
        Self::with_config(utils::api_config())
    }

    pub fn with_config(config: ApiClientConfig) -> Self {
        Self { config }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.auth_token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        self.authorized(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

impl Default for HttpSessionApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a non-2xx response into the matching error kind
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let message = match response.text().await {
        Ok(body) if !body.is_empty() => body,
        _ => response.status_text(),
    };
    Err(ApiError::from_status(response.status(), message))
}

impl SessionApi for HttpSessionApi {
    async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        let response = self
            .send(Request::get(&self.config.url(endpoints::AUTH_ME)))
            .await?;
        if response.status() == 401 {
            return Ok(None);
        }
        check(response)
            .await?
            .json::<Option<CurrentUser>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        let response = self
            .send(Request::post(&self.config.url(endpoints::AUTH_LOGOUT)))
            .await?;
        check(response).await.map(|_| ())
    }

    async fn layout_config(&self) -> Result<LayoutConfig, ApiError> {
        let response = self
            .send(Request::get(&self.config.url(endpoints::LAYOUT_CONFIG)))
            .await?;
        check(response)
            .await?
            .json::<LayoutConfig>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
