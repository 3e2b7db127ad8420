//! HTTP Collection Client
//!
//! `reqwest`-backed [`RemoteCollection`] for a json-server style resource:
//!
//! - `GET    {base}/{collection}`
//! - `POST   {base}/{collection}`        body: draft
//! - `PUT    {base}/{collection}/{id}`   body: `{ "food": patch }`
//! - `DELETE {base}/{collection}/{id}`

use std::fmt::Display;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;

use super::error::{TransportError, TransportResult};
use super::traits::RemoteCollection;
use crate::domain::Resource;

#[derive(Serialize)]
struct UpdateBody<'a, P> {
    food: &'a P,
}

/// Collection resource reachable over HTTP
#[derive(Debug, Clone)]
pub struct HttpCollection {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

impl HttpCollection {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, collection)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            collection: collection.into(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }

    pub fn entity_url(&self, id: impl Display) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

/// Log a failed request on its way out
fn logged<T>(method: &str, url: &str, result: TransportResult<T>) -> TransportResult<T> {
    if let Err(err) = &result {
        warn!("{} {} failed: {}", method, url, err);
    }
    result
}

#[async_trait(?Send)]
impl<T: Resource + 'static> RemoteCollection<T> for HttpCollection {
    async fn list(&self) -> TransportResult<Vec<T>> {
        let url = self.collection_url();
        debug!("GET {}", url);
        let result = async {
            let response = self.client.get(&url).send().await?.error_for_status()?;
            Ok::<_, TransportError>(response.json::<Vec<T>>().await?)
        }
        .await;
        logged("GET", &url, result)
    }

    async fn create(&self, draft: &T::Draft) -> TransportResult<T> {
        let url = self.collection_url();
        debug!("POST {} {:?}", url, draft);
        let result = async {
            let response = self
                .client
                .post(&url)
                .json(draft)
                .send()
                .await?
                .error_for_status()?;
            Ok::<_, TransportError>(response.json::<T>().await?)
        }
        .await;
        logged("POST", &url, result)
    }

    async fn update(&self, id: T::Id, patch: &T::Patch) -> TransportResult<T> {
        let url = self.entity_url(id);
        debug!("PUT {} {:?}", url, patch);
        let result = async {
            let response = self
                .client
                .put(&url)
                .json(&UpdateBody { food: patch })
                .send()
                .await?
                .error_for_status()?;
            Ok::<_, TransportError>(response.json::<T>().await?)
        }
        .await;
        logged("PUT", &url, result)
    }

    async fn delete(&self, id: T::Id) -> TransportResult<()> {
        let url = self.entity_url(id);
        debug!("DELETE {}", url);
        let result = async {
            self.client.delete(&url).send().await?.error_for_status()?;
            Ok::<_, TransportError>(())
        }
        .await;
        logged("DELETE", &url, result)
    }
}
