use std::error::Error;

use costpredict::traits::Fit;
use costpredict_linear::LinearRegression;

fn main() -> Result<(), Box<dyn Error>> {
    // load revenue/cost dataset
    let dataset = costpredict_datasets::revenue_cost()?;

    let mut lin_reg = LinearRegression::new();
    let model = lin_reg.fit_dataset(&dataset)?;

    println!("Model: {}", model);
    println!("R2: {}", model.score(&dataset.records, &dataset.targets)?);
    println!("Cost at 3500: {}", model.predict_one(3500.0)?);

    Ok(())
}
