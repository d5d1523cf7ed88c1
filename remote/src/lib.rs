//! Client for the remote cost prediction service.
//!
//! The service takes `{"revenu": <number>}` on `POST /predict` and answers with
//! free-form text, which is handed back untouched.

mod config;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::blocking::Client;
use serde::Serialize;

pub use config::{RemoteConfig, DEFAULT_URL};
pub use error::{RemoteError, Result};

#[cfg(not(any(feature = "rustls-tls", feature = "native-tls")))]
compile_error!("enable one of the `rustls-tls` or `native-tls` features");

/// Body of a prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
    pub revenu: i64,
}

#[derive(Debug)]
pub struct RemotePredictor {
    client: Client,
    url: String,
}

impl RemotePredictor {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        if config.accept_invalid_certs {
            warn!(
                "TLS certificate verification is disabled for {}; only use this against a development server",
                config.url
            );
        }
        // blocks until the service answers
        let client = Client::builder()
            .timeout(None::<Duration>)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(RemotePredictor {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send `revenu` to the service and return the response body as text.
    ///
    /// The status code is not inspected: an error page comes back as text like
    /// any other answer.
    pub fn predict(&self, revenu: i64) -> Result<String> {
        let payload = PredictRequest { revenu };
        debug!("POST {} {:?}", self.url, payload);

        let response = self.client.post(&self.url).json(&payload).send()?;
        info!("{} answered {}", self.url, response.status());

        Ok(response.text()?)
    }
}
