//! `costpredict` prelude.
//!
//! ```
//! use costpredict::prelude::*;
//! ```

pub use crate::dataset::Dataset;
pub use crate::error::{Error, Result};
pub use crate::metrics::Regression;
pub use crate::traits::{Fit, Predict};
