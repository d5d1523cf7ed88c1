//! Regression metrics comparing a prediction against ground truth.

use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

use crate::error::{Error, Result};

/// Regression metrics, implemented on the predicted values.
pub trait Regression<A: Float> {
    fn mean_squared_error(&self, compare_to: &ArrayBase<impl Data<Elem = A>, Ix1>) -> Result<A>;
    fn mean_absolute_error(&self, compare_to: &ArrayBase<impl Data<Elem = A>, Ix1>) -> Result<A>;
    /// Coefficient of determination, with `compare_to` as the ground truth.
    fn r2(&self, compare_to: &ArrayBase<impl Data<Elem = A>, Ix1>) -> Result<A>;
}

fn check_len(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(Error::shape(format!("{} values", b), format!("{} values", a)));
    }
    if a == 0 {
        return Err(Error::Empty);
    }
    Ok(())
}

impl<A: Float, S: Data<Elem = A>> Regression<A> for ArrayBase<S, Ix1> {
    fn mean_squared_error(&self, compare_to: &ArrayBase<impl Data<Elem = A>, Ix1>) -> Result<A> {
        check_len(self.len(), compare_to.len())?;
        let sum = self
            .iter()
            .zip(compare_to.iter())
            .fold(A::zero(), |acc, (&z, &y)| acc + (y - z).powi(2));
        Ok(sum / A::from(self.len()).unwrap_or_else(A::one))
    }

    fn mean_absolute_error(&self, compare_to: &ArrayBase<impl Data<Elem = A>, Ix1>) -> Result<A> {
        check_len(self.len(), compare_to.len())?;
        let sum = self
            .iter()
            .zip(compare_to.iter())
            .fold(A::zero(), |acc, (&z, &y)| acc + (y - z).abs());
        Ok(sum / A::from(self.len()).unwrap_or_else(A::one))
    }

    fn r2(&self, compare_to: &ArrayBase<impl Data<Elem = A>, Ix1>) -> Result<A> {
        check_len(self.len(), compare_to.len())?;
        let n = A::from(compare_to.len()).unwrap_or_else(A::one);
        let y_mean = compare_to.iter().fold(A::zero(), |acc, &y| acc + y) / n;

        let mn = self
            .iter()
            .zip(compare_to.iter())
            .fold(A::zero(), |acc, (&z, &y)| acc + (y - z).powi(2));
        let dn = compare_to
            .iter()
            .fold(A::zero(), |acc, &y| acc + (y - y_mean).powi(2));

        // constant ground truth: only a perfect prediction scores
        if dn == A::zero() {
            return Ok(if mn == A::zero() { A::one() } else { A::zero() });
        }
        Ok(A::one() - mn / dn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn r2_works_for_perfect_prediction() {
        let y = array![300.0_f64, 600.0, 900.0];

        assert_abs_diff_eq!(y.r2(&y).unwrap(), 1.0);
    }

    #[test]
    fn r2_works() {
        let z = array![2.5_f64, 0.0, 2.0, 8.0];
        let y = array![3.0_f64, -0.5, 2.0, 7.0];

        assert_abs_diff_eq!(z.r2(&y).unwrap(), 0.948_608_137, epsilon = 1e-9);
    }

    #[test]
    fn r2_of_constant_truth_is_zero_unless_exact() {
        let y = array![1.0_f64, 1.0];

        assert_abs_diff_eq!(array![1.0_f64, 2.0].r2(&y).unwrap(), 0.0);
        assert_abs_diff_eq!(y.r2(&y).unwrap(), 1.0);
    }

    #[test]
    fn mean_errors_work() {
        let z = array![2.5_f64, 0.0, 2.0, 8.0];
        let y = array![3.0_f64, -0.5, 2.0, 7.0];

        assert_abs_diff_eq!(z.mean_squared_error(&y).unwrap(), 0.375);
        assert_abs_diff_eq!(z.mean_absolute_error(&y).unwrap(), 0.5);
    }

    #[test]
    fn metrics_reject_length_mismatch() {
        let z = array![1.0_f64, 2.0];
        let y = array![1.0_f64];

        assert!(matches!(z.r2(&y), Err(Error::Shape { .. })));
    }
}
