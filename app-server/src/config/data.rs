use serde::Deserialize;
use url::Url;

/// Host of the data API inside the cluster. Only resolvable behind the gateway.
pub const IN_CLUSTER_DATA_HOST: &str = "data.hasura";

/// Configuration for the data API the adapters query
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DataApiConfig {
    /// The query endpoint of the data API (default: http://data.hasura/v1/query)
    pub url: String,

    /// Domain the cluster is served under (default: hasura-app.io)
    pub cluster_domain: String,

    /// Timeout for data API queries in seconds (default: none)
    pub query_timeout: Option<u64>,
}

impl Default for DataApiConfig {
    fn default() -> Self {
        Self {
            url: format!("http://{IN_CLUSTER_DATA_HOST}/v1/query"),
            cluster_domain: "hasura-app.io".to_string(),
            query_timeout: None,
        }
    }
}

impl DataApiConfig {
    /// Parses the configured URL
    pub fn parsed_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }

    /// Whether the data API can be reached when serving a request for `host`.
    ///
    /// The in-cluster address only resolves when the request came through the
    /// cluster's gateway. Any other configured URL is assumed reachable.
    pub fn reachable_from(&self, host: &str) -> bool {
        let in_cluster = self
            .parsed_url()
            .ok()
            .and_then(|url| url.host_str().map(|h| h == IN_CLUSTER_DATA_HOST))
            .unwrap_or(false);
        !in_cluster || host.contains(&self.cluster_domain)
    }
}
