use anyhow::Context;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct LookupdConnectionSettings {
    pub request_timeout: Option<Duration>,
}

impl TryFrom<&LookupdConnectionSettings> for reqwest::Client {
    type Error = anyhow::Error;

    fn try_from(value: &LookupdConnectionSettings) -> Result<Self, Self::Error> {
        let mut builder = reqwest::Client::builder();

        if let Some(request_timeout) = value.request_timeout {
            builder = builder.timeout(request_timeout);
        }

        let client = builder.build().context("While building lookupd client")?;

        Ok(client)
    }
}
