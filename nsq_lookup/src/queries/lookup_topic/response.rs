use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct LookupTopicQueryResponse {
    pub producers: Vec<Producer>,
}

#[derive(Debug, Deserialize)]
pub struct LookupdResponse {
    pub status_code: u16,
    pub status_txt: String,
    #[serde(default)]
    pub producers: Vec<Producer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    pub address: String,
    pub broadcast_address: Option<String>,
    pub hostname: String,
    pub tcp_port: u16,
    pub http_port: u16,
    pub remote_address: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub version: String,
}

impl Producer {
    // remote_address differs per lookupd connection, so two records for one
    // node are compared by source address and tcp port only
    pub fn identity(&self) -> ProducerIdentity {
        let broadcast_address = self
            .broadcast_address
            .as_deref()
            .unwrap_or(&self.address)
            .to_owned();

        ProducerIdentity {
            broadcast_address,
            tcp_port: self.tcp_port,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProducerIdentity {
    pub broadcast_address: String,
    pub tcp_port: u16,
}
