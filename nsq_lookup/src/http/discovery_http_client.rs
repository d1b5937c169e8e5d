use bytes::Bytes;
use futures::future::BoxFuture;

#[derive(Debug)]
pub struct HttpGetResponse {
    pub status_code: u16,
    pub body: Bytes,
}

pub trait DiscoveryHttpClient: Send + Sync {
    fn get(&self, url: String) -> BoxFuture<'_, Result<HttpGetResponse, anyhow::Error>>;
}
