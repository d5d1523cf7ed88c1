/// Endpoint of the remote prediction service.
pub const DEFAULT_URL: &str = "https://localhost:8080/predict";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub url: String,
    /// Skip TLS certificate verification. Only meant for the local development
    /// server, which presents a self-signed certificate.
    pub accept_invalid_certs: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            url: DEFAULT_URL.to_string(),
            accept_invalid_certs: true,
        }
    }
}
