//! HTTP transport for upstream API calls

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client bound to the upstream base URL.
///
/// Cheap to clone (the inner `reqwest::Client` is reference counted);
/// construct once from [`ClientConfig`] and pass it around.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        self.authorize(request)
            .send()
            .await
            .map_err(ClientError::from_transport)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(self.client.get(self.url(path))).await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self
            .send(self.client.get(self.url(path)).query(query))
            .await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .send(self.client.post(self.url(path)).json(body))
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .send(self.client.put(self.url(path)).json(body))
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .send(self.client.patch(self.url(path)).json(body))
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request without a body
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(self.client.patch(self.url(path))).await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, discarding any response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.send(self.client.delete(self.url(path))).await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Make a DELETE request with query parameters, discarding the body
    pub async fn delete_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<()> {
        let response = self
            .send(self.client.delete(self.url(path)).query(query))
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Reject non-2xx responses, normalizing them to [`ClientError::Api`]
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }
        Ok(response)
    }

    /// Handle the HTTP response, decoding the JSON body
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let body = response.text().await.map_err(ClientError::from_transport)?;
        Ok(serde_json::from_str(&body)?)
    }
}
