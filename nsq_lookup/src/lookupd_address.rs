use getset::Getters;

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct LookupdAddress {
    address: String,
}

impl LookupdAddress {
    pub fn new(address: String) -> LookupdAddress {
        Self { address }
    }

    pub fn lookup_url(&self, topic: &str) -> String {
        let Some((scheme, rest)) = self.address.split_once("://") else {
            return format!("http://{}/lookup?topic={}", self.address, topic);
        };

        let (origin, path) = match rest.split_once('/') {
            Some((origin, path)) if !path.is_empty() => (origin, format!("/{path}")),
            Some((origin, _)) => (origin, "/lookup".to_owned()),
            None => (rest, "/lookup".to_owned()),
        };

        format!("{scheme}://{origin}{path}?topic={topic}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_port_gets_default_scheme_and_path() {
        let address = LookupdAddress::new("127.0.0.1:4161".to_owned());

        assert_eq!(
            address.lookup_url("sample_topic"),
            "http://127.0.0.1:4161/lookup?topic=sample_topic"
        );
    }

    #[test]
    fn url_without_path_gets_default_path() {
        let address = LookupdAddress::new("http://127.0.0.1:6161".to_owned());

        assert_eq!(
            address.lookup_url("sample_topic"),
            "http://127.0.0.1:6161/lookup?topic=sample_topic"
        );
    }

    #[test]
    fn url_with_root_path_gets_default_path() {
        let address = LookupdAddress::new("http://127.0.0.1:6161/".to_owned());

        assert_eq!(
            address.lookup_url("sample_topic"),
            "http://127.0.0.1:6161/lookup?topic=sample_topic"
        );
    }

    #[test]
    fn url_with_custom_path_keeps_it() {
        let address = LookupdAddress::new("http://127.0.0.1:7161/path/lookup".to_owned());

        assert_eq!(
            address.lookup_url("sample_topic"),
            "http://127.0.0.1:7161/path/lookup?topic=sample_topic"
        );
    }

    #[test]
    fn https_scheme_is_preserved() {
        let address = LookupdAddress::new("https://lookupd.internal:4161".to_owned());

        assert_eq!(
            address.lookup_url("sample_topic"),
            "https://lookupd.internal:4161/lookup?topic=sample_topic"
        );
    }
}
