use crate::connection_settings::LookupdConnectionSettings;

#[derive(Debug)]
pub struct LookupTopicQuery {
    pub lookupd_addresses: Vec<String>,
    pub topic: String,
    pub connection_settings: LookupdConnectionSettings,
}
