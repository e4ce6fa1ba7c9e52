use approx::assert_relative_eq;
use demand_forecast::data::history_from_values;
use demand_forecast::metrics::evaluate_fit;
use demand_forecast::models::exponential_smoothing::ExponentialSmoothing;
use demand_forecast::models::moving_average::MovingAverage;
use demand_forecast::{generate_forecast, ForecastInput, ForecastMethod, ForecastModel};

fn sma_request(values: &[f64], period_length: usize) -> ForecastInput {
    ForecastInput {
        product_name: "Sweet corn".to_string(),
        historical_demand: history_from_values(values),
        method: ForecastMethod::Sma,
        smoothing_factor: None,
        period_length: Some(period_length),
    }
}

#[test]
fn test_window_spanning_history_scores_one_point() {
    let result = generate_forecast(&sma_request(&[10.0, 20.0, 30.0], 3)).unwrap();

    assert_relative_eq!(result.accuracy.mae.unwrap(), 10.0);
    assert_relative_eq!(result.accuracy.mape.unwrap(), 33.33, epsilon = 0.01);
}

#[test]
fn test_regression_metrics() {
    let data = [10.0, 20.0, 30.0, 40.0, 50.0];
    let trained = MovingAverage::new(2).unwrap().train(&data).unwrap();

    // fitted = [-, 15, 25, 35, 45], every error is 5
    let accuracy = evaluate_fit(&trained, &data).unwrap();
    assert_relative_eq!(accuracy.mae.unwrap(), 5.0);
    // (25 + 16.67 + 12.5 + 10) / 4
    assert_relative_eq!(
        accuracy.mape.unwrap(),
        (25.0 + 50.0 / 3.0 + 12.5 + 10.0) / 4.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_zero_demand_left_out_of_mape() {
    let data = [0.0, 8.0, 0.0, 12.0];
    let trained = ExponentialSmoothing::new(0.5).unwrap().train(&data).unwrap();

    // S = [0, 0, 4, 2]; errors = [0, 8, 4, 10]
    let accuracy = evaluate_fit(&trained, &data).unwrap();
    assert_relative_eq!(accuracy.mae.unwrap(), 5.5, epsilon = 1e-9);
    // only 8 -> 100% and 12 -> 83.33% count
    assert_relative_eq!(
        accuracy.mape.unwrap(),
        (100.0 + 10.0 / 12.0 * 100.0) / 2.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_all_zero_history() {
    let result = generate_forecast(&sma_request(&[0.0, 0.0, 0.0, 0.0], 2)).unwrap();

    assert_eq!(result.accuracy.mae, Some(0.0));
    assert_eq!(result.accuracy.mape, None);
    assert_eq!(result.forecasted[0].forecast, 0.0);
}
