//! REST client shared by every resource module.
//!
//! Failed responses are decoded into [`ApiError`] right here, callers never
//! look at status codes or error bodies themselves.

use async_trait::async_trait;
use contracts::shared::list::{ListQuery, ListResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::rc::Rc;

use super::api_utils::ConsoleConfig;
use super::error::ApiError;
use super::list::ListApi;
use super::mutation::MutationApi;
use crate::system::auth::session::{bearer, SessionContext};

const UNAUTHORIZED: u16 = 401;

pub struct ApiClient {
    config: ConsoleConfig,
    session: Rc<dyn SessionContext>,
}

impl ApiClient {
    pub fn new(config: ConsoleConfig, session: Rc<dyn SessionContext>) -> Self {
        Self { config, session }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// `GET path?page=..&size=..&sortBy=..&sort=..&<filters>`
    pub async fn get_list<T>(&self, path: &str, query: &ListQuery) -> Result<ListResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = list_url(&self.config.url(path), query)?;
        log::debug!("GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::General(format!("Failed to send request: {}", e)))?;
        self.read_json(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        self.send_json(Request::post(&url), body).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        self.send_json(Request::put(&url), body).await
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        self.send_json(Request::patch(&url), body).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.config.url(path);
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::General(format!("Failed to send request: {}", e)))?;
        self.check(response).await.map(|_| ())
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match bearer(self.session.as_ref()) {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    async fn send_json<B, T>(&self, builder: RequestBuilder, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::General(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::General(format!("Failed to send request: {}", e)))?;
        self.read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let response = self.check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::General(format!("Failed to parse response: {}", e)))
    }

    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        if status == UNAUTHORIZED {
            self.session.clear();
        }
        let body = response.text().await.ok();
        Err(ApiError::decode(
            body.as_deref(),
            Some(format!("Request failed: {}", status)),
        ))
    }
}

fn list_url(base: &str, query: &ListQuery) -> Result<String, ApiError> {
    let params = serde_qs::to_string(&query.to_params())
        .map_err(|e| ApiError::General(format!("Failed to encode query: {}", e)))?;
    Ok(format!("{}?{}", base, params))
}

/// `path/{id}` with the id escaped.
pub fn record_path(path: &str, id: &str) -> String {
    format!("{}/{}", path.trim_end_matches('/'), urlencoding::encode(id))
}

/// A REST collection: list at `path`, records at `path/{id}`.
///
/// `T` is the record, `P` the create/update payload.
pub struct RestCollection<T, P> {
    client: Rc<ApiClient>,
    path: String,
    _marker: PhantomData<fn() -> (T, P)>,
}

impl<T, P> RestCollection<T, P> {
    pub fn new(client: Rc<ApiClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn record_path(&self, id: &str) -> String {
        record_path(&self.path, id)
    }
}

impl<T, P> Clone for RestCollection<T, P> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone(), self.path.clone())
    }
}

#[async_trait(?Send)]
impl<T, P> ListApi for RestCollection<T, P>
where
    T: DeserializeOwned + Clone + 'static,
    P: 'static,
{
    type Item = T;

    async fn fetch_page(&self, query: &ListQuery) -> Result<ListResponse<T>, ApiError> {
        self.client.get_list(&self.path, query).await
    }
}

#[async_trait(?Send)]
impl<T, P> MutationApi for RestCollection<T, P>
where
    T: DeserializeOwned + 'static,
    P: Serialize + 'static,
{
    type Record = T;
    type Payload = P;

    async fn create(&self, payload: &P) -> Result<T, ApiError> {
        self.client.post_json(&self.path, payload).await
    }

    async fn update(&self, id: &str, payload: &P) -> Result<T, ApiError> {
        self.client.put_json(&self.record_path(id), payload).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&self.record_path(id)).await
    }
}
