use std::io::{self, Write};

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use costpredict::traits::Fit;
use costpredict_linear::LinearRegression;
use costpredict_remote::{RemoteConfig, RemotePredictor};

/// Revenue both predictors are asked about.
const REVENU: i64 = 3500;

/// Log filter when `RUST_LOG` is unset; keeps the disabled TLS verification warning visible.
const DEFAULT_LOG_FILTER: &str = "warn";

fn logger(env: Env<'_>) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or(DEFAULT_LOG_FILTER))
}

/// Fit the local model, query the remote service, then report both answers.
///
/// Nothing is written to `out` unless both predictions succeed.
fn run(config: &RemoteConfig, out: &mut impl Write) -> Result<()> {
    let dataset = costpredict_datasets::revenue_cost().context("failed to load training data")?;

    let mut lin_reg = LinearRegression::new();
    let model = lin_reg
        .fit_dataset(&dataset)
        .context("failed to fit local model")?;
    info!("local model: {}", model);
    let local = model
        .predict_one(REVENU as f64)
        .context("failed to predict locally")?;

    let remote = RemotePredictor::new(config).context("failed to build HTTP client")?;
    let text = remote
        .predict(REVENU)
        .with_context(|| format!("request to {} failed", remote.url()))?;

    writeln!(out, "Remote prediction: {}", text)?;
    writeln!(out, "Local prediction: {:?}", local)?;
    Ok(())
}

fn main() -> Result<()> {
    logger(Env::default()).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&RemoteConfig::default(), &mut out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use costpredict_remote::testing::{serve_once, serve_once_tls, unreachable_addr};
    use serde_json::{json, Value};

    fn config_for(addr: std::net::SocketAddr) -> RemoteConfig {
        RemoteConfig {
            url: format!("http://{}/predict", addr),
            accept_invalid_certs: true,
        }
    }

    #[test]
    fn run_works() {
        let (addr, server) = serve_once(200, "{\"cost\": 1050}").unwrap();
        let mut out = Vec::new();

        run(&config_for(addr), &mut out).unwrap();
        let request = server.join().unwrap().unwrap();

        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, json!({"revenu": 3500}));

        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Remote prediction: {\"cost\": 1050}"));
        let local: f64 = lines
            .next()
            .and_then(|l| l.strip_prefix("Local prediction: "))
            .unwrap()
            .parse()
            .unwrap();
        assert_abs_diff_eq!(local, 1050.0, epsilon = 1e-9);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn run_works_over_tls_with_self_signed_certificate() {
        let (addr, server) = serve_once_tls(200, "1050").unwrap();
        let config = RemoteConfig {
            url: format!("https://{}/predict", addr),
            accept_invalid_certs: true,
        };
        let mut out = Vec::new();

        run(&config, &mut out).unwrap();
        server.join().unwrap().unwrap();

        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("Remote prediction: 1050\n"));
    }

    #[test]
    fn logger_defaults_to_warn() {
        let logger = logger(Env::new().filter("COSTPREDICT_TEST_UNSET_LOG")).build();

        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn run_writes_nothing_when_remote_is_unreachable() {
        let addr = unreachable_addr().unwrap();
        let mut out = Vec::new();

        let err = run(&config_for(addr), &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(err.to_string().contains("request to"));
    }

    #[test]
    fn default_config_targets_local_service() {
        assert_eq!(RemoteConfig::default().url, "https://localhost:8080/predict");
    }
}
