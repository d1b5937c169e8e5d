use crate::connection_settings::LookupdConnectionSettings;
use crate::http::{DiscoveryHttpClient, HttpGetResponse};
use anyhow::Context;
use futures::future::BoxFuture;

pub struct ReqwestDiscoveryHttpClient {
    client: reqwest::Client,
}

impl ReqwestDiscoveryHttpClient {
    pub fn new(settings: &LookupdConnectionSettings) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::try_from(settings)
            .context("While creating http client from connection settings")?;

        Ok(Self { client })
    }
}

impl DiscoveryHttpClient for ReqwestDiscoveryHttpClient {
    fn get(&self, url: String) -> BoxFuture<'_, Result<HttpGetResponse, anyhow::Error>> {
        Box::pin(async move {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .with_context(|| format!("While sending lookup request to {url}"))?;

            let status_code = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .with_context(|| format!("While reading lookup response body from {url}"))?;

            Ok(HttpGetResponse { status_code, body })
        })
    }
}
