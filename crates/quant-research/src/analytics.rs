//! Naive forecasting and allocation helpers

use crate::error::{ResearchError, Result};

/// Last-value price forecaster
#[derive(Debug, Clone)]
pub struct PriceForecaster {
    prices: Vec<f64>,
}

impl PriceForecaster {
    /// Create a forecaster over an observed price series
    pub fn new(prices: impl Into<Vec<f64>>) -> Self {
        Self {
            prices: prices.into(),
        }
    }

    /// Forecast `steps` future prices by repeating the last observation
    pub fn forecast(&self, steps: usize) -> Result<Vec<f64>> {
        let last = *self.prices.last().ok_or(ResearchError::NoPriceData)?;
        Ok(vec![last; steps])
    }
}

/// Equal-weight allocation across `prices.len()` assets
pub fn optimize_portfolio(prices: &[f64]) -> Result<Vec<f64>> {
    if prices.is_empty() {
        return Err(ResearchError::NoPriceData);
    }

    let weight = 1.0 / prices.len() as f64;
    Ok(vec![weight; prices.len()])
}
