mod discovery_http_client;
mod reqwest_discovery_http_client;

pub use discovery_http_client::*;
pub use reqwest_discovery_http_client::*;
