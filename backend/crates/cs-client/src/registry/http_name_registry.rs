use crate::{Availability, NameRegistry, SyncError, SyncResult};

use cs_config::ClientConfig;
use cs_core::{
    CheckNameRequest, CheckNameResponse, ClientIdentity, ErrorResponse, Profile,
    RegistryErrorCode, SyncRequest, SyncResponse,
};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// NameRegistry over the registry's HTTP JSON API.
///
/// Reads (check-name, resolve) and writes (sync) have separate timeouts; an
/// expired timeout surfaces as `SyncError::Timeout`.
pub struct HttpNameRegistry {
    pub base_url: String,
    read_timeout: Duration,
    write_timeout: Duration,
    client: ReqwestClient,
}

impl HttpNameRegistry {
    /// `base_url` includes the `/api` prefix, e.g. `http://127.0.0.1:8000/api`.
    pub fn new(base_url: &str, read_timeout: Duration, write_timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            read_timeout,
            write_timeout,
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            &config.base_url,
            config.read_timeout(),
            config.write_timeout(),
        )
    }

    fn request(&self, method: Method, path: &str, timeout: Duration) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url).timeout(timeout)
    }

    /// Sends the request and decodes either `T` or the registry error body.
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> SyncResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.bytes().await?;
        let Ok(error) = serde_json::from_slice::<ErrorResponse>(&body) else {
            return Err(SyncError::unexpected(
                status.as_u16(),
                String::from_utf8_lossy(&body).into_owned(),
            ));
        };

        debug!(
            "Registry answered {} {}: {}",
            status.as_u16(),
            error.code.as_str(),
            error.error
        );

        Err(match error.code {
            RegistryErrorCode::ValidationError => SyncError::validation(
                error.field.unwrap_or_else(|| String::from("request")),
                error.error,
            ),
            RegistryErrorCode::NameConflict => SyncError::name_conflict(error.error),
            RegistryErrorCode::AlreadyBound => SyncError::already_bound(error.error),
            RegistryErrorCode::NotFound => SyncError::not_found(error.error),
            RegistryErrorCode::Forbidden | RegistryErrorCode::InternalError => {
                SyncError::unexpected(status.as_u16(), error.error)
            }
        })
    }
}

#[async_trait]
impl NameRegistry for HttpNameRegistry {
    async fn check_availability(
        &self,
        name: &str,
        identity: &ClientIdentity,
    ) -> SyncResult<Availability> {
        let body = CheckNameRequest {
            name: name.to_string(),
            identity: identity.to_string(),
        };
        let req = self
            .request(Method::POST, "/user/check-name", self.read_timeout)
            .json(&body);

        let response: CheckNameResponse = self.execute(req).await?;
        Ok(Availability {
            available: response.available,
            reason: response.error,
        })
    }

    async fn bind(
        &self,
        identity: &ClientIdentity,
        name: &str,
        class: &str,
    ) -> SyncResult<Profile> {
        let body = SyncRequest {
            identity: identity.to_string(),
            name: name.to_string(),
            class: class.to_string(),
        };
        let req = self
            .request(Method::POST, "/user/sync", self.write_timeout)
            .json(&body);

        let response: SyncResponse = self.execute(req).await?;
        if !response.success {
            return Err(SyncError::unexpected(200, "sync reported success=false"));
        }

        Ok(response.user)
    }

    async fn resolve(&self, identity: &ClientIdentity) -> SyncResult<Profile> {
        let req = self.request(
            Method::GET,
            &format!("/user/{}", identity),
            self.read_timeout,
        );

        self.execute(req).await
    }
}
