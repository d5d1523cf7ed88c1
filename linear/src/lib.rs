//! Ordinary least squares linear regression.
//!
//! The fit itself is delegated to `linfa-linear`; this crate adds the shape checks,
//! error mapping and prediction helpers the rest of the workspace uses.
//!
//! ```
//! use costpredict::traits::Fit;
//! use costpredict_linear::LinearRegression;
//! use ndarray::array;
//!
//! let mut lin_reg = LinearRegression::new();
//! let model = lin_reg
//!     .fit(&array![[1000.0], [2000.0], [3000.0]], &array![300.0, 600.0, 900.0])
//!     .unwrap();
//! assert!((model.predict_one(3500.0).unwrap() - 1050.0).abs() < 1e-9);
//! ```

use std::fmt;

use linfa::traits::Fit as _;
use linfa::DatasetBase;
use log::debug;
use ndarray::{Array1, Array2};

use costpredict::error::{Error, Result};
use costpredict::metrics::Regression;
use costpredict::traits::{Fit, Predict};

#[derive(Debug)]
pub struct LinearRegression {
    fit_intercept: bool,
    params: Option<Array1<f64>>,
    intercept: f64,
}

impl Default for LinearRegression {
    fn default() -> Self {
        LinearRegression {
            fit_intercept: true,
            params: None,
            intercept: 0.0,
        }
    }
}

/// Configure and fit a linear regression model
impl LinearRegression {
    /// Create a default linear regression model, fitting an intercept.
    pub fn new() -> LinearRegression {
        LinearRegression::default()
    }

    /// Whether to fit an intercept. Without one the line passes through the origin.
    pub fn with_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Fitted coefficients, one per feature. `None` until the model is fitted.
    pub fn params(&self) -> Option<&Array1<f64>> {
        self.params.as_ref()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    /// Predict for a single feature value.
    pub fn predict_one(&self, value: f64) -> Result<f64> {
        let z = self.predict(&Array2::from_elem((1, 1), value))?;
        Ok(z[0])
    }

    /// Coefficient of determination of the prediction on `x` against `y`.
    pub fn score(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<f64> {
        let z = self.predict(x)?;
        z.r2(y)
    }
}

impl Fit for LinearRegression {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&Self> {
        if x.nrows() != y.len() {
            return Err(Error::shape(
                format!("{} targets", x.nrows()),
                format!("{} targets", y.len()),
            ));
        }
        if x.nrows() == 0 {
            return Err(Error::Empty);
        }
        if x.ncols() == 0 {
            return Err(Error::NoFeatures);
        }

        let dataset = DatasetBase::new(x.to_owned(), y.to_owned());
        let fitted = linfa_linear::LinearRegression::new()
            .with_intercept(self.fit_intercept)
            .fit(&dataset)
            .map_err(|e| {
                debug!("least squares failed: {}", e);
                Error::Singular
            })?;

        let params = fitted.params().to_owned();
        if !params.iter().all(|v| v.is_finite()) {
            return Err(Error::Singular);
        }
        self.intercept = fitted.intercept();
        debug!(
            "fitted {} samples, params = {}, intercept = {}",
            x.nrows(),
            params,
            self.intercept
        );
        self.params = Some(params);
        Ok(self)
    }
}

impl Predict for LinearRegression {
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let params = self.params.as_ref().ok_or(Error::NotFitted)?;
        if x.ncols() != params.len() {
            return Err(Error::shape(
                format!("{} features", params.len()),
                format!("{} features", x.ncols()),
            ));
        }
        Ok(x.dot(params) + self.intercept)
    }
}

impl fmt::Display for LinearRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.params {
            None => write!(f, "0.0"),
            Some(params) => {
                write!(f, "{}", self.intercept)?;
                for (i, coef) in params.iter().enumerate() {
                    write!(f, " + feat[ {} ] * {}", i, coef)?;
                }
                Ok(())
            }
        }
    }
}
