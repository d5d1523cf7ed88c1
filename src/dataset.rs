use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{Error, Result};

/// Records paired with one target per record.
///
/// `records` holds one sample per row and one feature per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Array2<f64>,
    pub targets: Array1<f64>,
}

impl Dataset {
    pub fn new(records: Array2<f64>, targets: Array1<f64>) -> Result<Dataset> {
        if records.nrows() != targets.len() {
            return Err(Error::shape(
                format!("{} targets", records.nrows()),
                format!("{} targets", targets.len()),
            ));
        }
        if records.nrows() == 0 {
            return Err(Error::Empty);
        }
        if records.ncols() == 0 {
            return Err(Error::NoFeatures);
        }
        Ok(Dataset { records, targets })
    }

    /// Build a single feature dataset from `(input, output)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Dataset> {
        let records = Array2::from_shape_fn((pairs.len(), 1), |(i, _)| pairs[i].0);
        let targets = pairs.iter().map(|p| p.1).collect::<Array1<f64>>();
        Dataset::new(records, targets)
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    pub fn feature(&self, index: usize) -> ArrayView1<'_, f64> {
        self.records.column(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn from_pairs_works() {
        let dataset = Dataset::from_pairs(&[(1.0, 2.0), (3.0, 4.0)]).unwrap();

        assert_eq!(dataset.nsamples(), 2);
        assert_eq!(dataset.nfeatures(), 1);
        assert_eq!(dataset.feature(0), array![1.0, 3.0]);
        assert_eq!(dataset.targets, array![2.0, 4.0]);
    }

    #[test]
    fn new_rejects_mismatched_targets() {
        let err = Dataset::new(array![[1.0], [2.0]], array![1.0]).unwrap_err();

        assert!(matches!(err, Error::Shape { .. }));
    }

    #[test]
    fn new_rejects_empty_records() {
        let err = Dataset::from_pairs(&[]).unwrap_err();

        assert!(matches!(err, Error::Empty));
    }

    #[test]
    fn new_rejects_records_without_features() {
        let err = Dataset::new(Array2::zeros((3, 0)), array![1.0, 2.0, 3.0]).unwrap_err();

        assert!(matches!(err, Error::NoFeatures));
        assert_eq!(err.to_string(), "dataset has no feature columns");
    }
}
