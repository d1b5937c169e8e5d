use crate::http::{DiscoveryHttpClient, HttpGetResponse, ReqwestDiscoveryHttpClient};
use crate::lookupd_address::LookupdAddress;
use crate::queries::lookup_topic::{LookupTopicQuery, LookupTopicQueryResponse, LookupdResponse};
use crate::queries::lookup_topic::response::Producer;
use anyhow::{bail, Context};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

#[tracing::instrument(skip_all)]
pub async fn lookup_topic(
    query: LookupTopicQuery,
) -> Result<LookupTopicQueryResponse, anyhow::Error> {
    let client = ReqwestDiscoveryHttpClient::new(&query.connection_settings)
        .context("While creating lookupd http client")?;

    lookup_topic_with_client(query, Arc::new(client)).await
}

pub async fn lookup_topic_with_client(
    query: LookupTopicQuery,
    client: Arc<dyn DiscoveryHttpClient>,
) -> Result<LookupTopicQueryResponse, anyhow::Error> {
    let topic = Arc::new(query.topic);

    let mut handles = Vec::with_capacity(query.lookupd_addresses.len());
    for lookupd_address in query.lookupd_addresses {
        let client = client.clone();
        let topic = topic.clone();

        let handle = tokio::task::spawn(async move {
            let producers = query_one_lookupd(&*client, &lookupd_address, &topic).await;
            (lookupd_address, producers)
        });
        handles.push(handle);
    }

    let mut seen_identities = HashSet::new();
    let mut merged = Vec::new();
    for handle in handles {
        let (lookupd_address, producers) = match handle.await {
            Ok(settled) => settled,
            Err(e) => {
                warn!("Lookupd query task failed: {:?}", e);
                continue;
            }
        };

        let producers = match producers {
            Ok(producers) => producers,
            Err(e) => {
                warn!("Error while querying lookupd {}: {:?}", lookupd_address, e);
                continue;
            }
        };

        for producer in producers {
            if seen_identities.insert(producer.identity()) {
                merged.push(producer);
            }
        }
    }

    Ok(LookupTopicQueryResponse { producers: merged })
}

async fn query_one_lookupd(
    client: &dyn DiscoveryHttpClient,
    lookupd_address: &str,
    topic: &str,
) -> Result<Vec<Producer>, anyhow::Error> {
    let url = LookupdAddress::new(lookupd_address.to_owned()).lookup_url(topic);
    debug!("Querying lookupd at {}", url);

    let HttpGetResponse { status_code, body } = client
        .get(url)
        .await
        .context("While sending lookup request")?;

    if !(200..300).contains(&status_code) {
        bail!("Lookupd returned http status {}", status_code)
    }

    let response = serde_json::from_slice::<LookupdResponse>(&body)
        .context("While parsing lookup response body")?;

    if response.status_code != 200 {
        debug!(
            "Lookupd {} has no producers for topic '{}': {} {}",
            lookupd_address, topic, response.status_code, response.status_txt
        );
        return Ok(Vec::new());
    }

    Ok(response.producers)
}
