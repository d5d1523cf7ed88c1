//! `costpredict` predicts an operating cost from a revenue figure, once with a locally
//! fitted least squares line and once by asking a remote prediction service.
//!
//! This crate holds the pieces the member crates share: the [`Dataset`] container, the
//! error type, the [`Fit`](traits::Fit) and [`Predict`](traits::Predict) traits and
//! regression metrics.
//!

pub mod dataset;
pub mod error;
mod metrics_regression;
pub mod prelude;
pub mod traits;

pub use dataset::Dataset;
pub use error::{Error, Result};

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::Regression;
}
