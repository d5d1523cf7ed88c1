use csv::ReaderBuilder;
use log::debug;
use ndarray::s;
use ndarray_csv::Array2Reader;

use costpredict::{Dataset, Result};

/// Revenue to cost pairs, one header row then `revenu,cout` per line.
static REVENUE_COST: &str = include_str!("../data/revenue_cost.csv");

const REVENUE_COST_SHAPE: (usize, usize) = (5, 2);

fn load(data: &str, shape: (usize, usize)) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());
    let array = reader.deserialize_array2::<f64>(shape)?;

    let last = shape.1 - 1;
    let records = array.slice(s![.., ..last]).to_owned();
    let targets = array.column(last).to_owned();
    debug!("loaded {} samples with {} features", records.nrows(), records.ncols());

    Dataset::new(records, targets)
}

/// Revenue (feature) against cost (target): five points on `cost = 0.3 * revenue`.
pub fn revenue_cost() -> Result<Dataset> {
    load(REVENUE_COST, REVENUE_COST_SHAPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use costpredict::Error;
    use ndarray::array;

    #[test]
    fn revenue_cost_works() {
        let dataset = revenue_cost().unwrap();

        assert_eq!(dataset.nsamples(), 5);
        assert_eq!(dataset.nfeatures(), 1);
        assert_eq!(dataset.feature(0), array![1000.0, 2000.0, 3000.0, 4000.0, 5000.0]);
        assert_eq!(dataset.targets, array![300.0, 600.0, 900.0, 1200.0, 1500.0]);
    }

    #[test]
    fn revenue_cost_is_linear() {
        let dataset = revenue_cost().unwrap();

        for (x, y) in dataset.feature(0).iter().zip(dataset.targets.iter()) {
            assert_abs_diff_eq!(x * 0.3, *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn load_rejects_wrong_row_count() {
        let err = load("a,b\n1,2\n", (2, 2)).unwrap_err();

        assert!(matches!(err, Error::ReadCsv(_)));
    }
}
