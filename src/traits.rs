//! Fitting and prediction interfaces shared by the models.

use ndarray::{Array1, Array2};

use crate::dataset::Dataset;
use crate::error::Result;

/// A model that learns its parameters from records and targets.
pub trait Fit {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&Self>;

    fn fit_dataset(&mut self, dataset: &Dataset) -> Result<&Self> {
        self.fit(&dataset.records, &dataset.targets)
    }
}

/// A fitted model that maps records to one prediction per row.
pub trait Predict {
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>>;
}
