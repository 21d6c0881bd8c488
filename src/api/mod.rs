//! HTTP clients for the Stride service.
//!
//! One `ApiClient` wraps a shared `reqwest::Client`, the service base URL,
//! and an explicit [`Session`]. The per-resource call surfaces live in
//! submodules mirroring the service's route groups:
//!
//! | Module         | Routes                              |
//! |----------------|-------------------------------------|
//! | `goals`        | `/goals`, `/goals/:id`              |
//! | `achievements` | `/achievements`, `/achievements/:id`|
//! | `analytics`    | `/analytics`, `/analytics/...`      |
//! | `user`         | `/user/profile`                     |
//!
//! Calls are plain pass-throughs: no retry, no caching, no timeout tuning.

pub mod achievements;
pub mod analytics;
pub mod goals;
pub mod user;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::ServiceError;
use crate::session::Session;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.session.bearer() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// GET `path` and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
    ) -> Result<T, ServiceError> {
        let resp = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(|e| ServiceError::Unavailable {
                resource,
                source: e.into(),
            })?
            .error_for_status()
            .map_err(|e| ServiceError::Unavailable {
                resource,
                source: e.into(),
            })?;
        resp.json::<T>()
            .await
            .map_err(|e| ServiceError::InvalidResponse {
                resource,
                source: e.into(),
            })
    }

    /// GET a single record; a 404 becomes [`ServiceError::NotFound`].
    pub(crate) async fn get_json_by_id<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
        id: &str,
    ) -> Result<T, ServiceError> {
        let resp = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(|e| ServiceError::Unavailable {
                resource,
                source: e.into(),
            })?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound {
                resource,
                id: id.to_string(),
            });
        }
        let resp = resp
            .error_for_status()
            .map_err(|e| ServiceError::Unavailable {
                resource,
                source: e.into(),
            })?;
        resp.json::<T>()
            .await
            .map_err(|e| ServiceError::InvalidResponse {
                resource,
                source: e.into(),
            })
    }

    /// POST or PUT `body` as JSON and decode the JSON reply.
    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        resource: &'static str,
    ) -> Result<T, ServiceError> {
        let resp = self
            .request(method, path)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Unavailable {
                resource,
                source: e.into(),
            })?
            .error_for_status()
            .map_err(|e| ServiceError::Unavailable {
                resource,
                source: e.into(),
            })?;
        resp.json::<T>()
            .await
            .map_err(|e| ServiceError::InvalidResponse {
                resource,
                source: e.into(),
            })
    }

    /// DELETE a record; the reply body is ignored.
    pub(crate) async fn delete(
        &self,
        path: &str,
        resource: &'static str,
        id: &str,
    ) -> Result<(), ServiceError> {
        let resp = self
            .request(Method::DELETE, path)
            .send()
            .await
            .map_err(|e| ServiceError::Unavailable {
                resource,
                source: e.into(),
            })?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound {
                resource,
                id: id.to_string(),
            });
        }
        resp.error_for_status()
            .map_err(|e| ServiceError::Unavailable {
                resource,
                source: e.into(),
            })?;
        Ok(())
    }
}
