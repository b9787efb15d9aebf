//! One-step-ahead revenue forecasting
//!
//! Two estimators are supported:
//! - **SMA**: mean of the trailing `window` observations
//! - **EMA**: exponentially weighted fold over the whole series
//!
//! Both are pure functions of their inputs. Null entries in the incoming
//! series are dropped before anything else happens, and a series needs at
//! least [`MIN_POINTS`] usable points.

use crate::domain::errors::ForecastError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum number of usable (non-null) points required to forecast.
pub const MIN_POINTS: usize = 2;

/// Default window when the caller does not provide one.
pub const DEFAULT_WINDOW: i64 = 3;

/// Forecasting method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Sma,
    Ema,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Sma => "sma",
            Method::Ema => "ema",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sma" => Ok(Method::Sma),
            "ema" => Ok(Method::Ema),
            _ => Err(ForecastError::UnknownMethod {
                method: s.to_lowercase(),
            }),
        }
    }
}

/// Result of a successful forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub predicted: f64,
    pub method: Method,
    /// Series actually used, nulls removed.
    pub input_points: Vec<f64>,
}

/// Drop null entries, keeping the order of the rest.
pub fn clean_series(series: &[Option<f64>]) -> Vec<f64> {
    series.iter().flatten().copied().collect()
}

/// Smoothing factor derived from a window: `2 / (window + 1)`.
pub fn default_alpha(window: i64) -> f64 {
    2.0 / (window as f64 + 1.0)
}

/// Mean of the trailing `window` points.
///
/// The window is clamped into `[1, data.len()]` instead of being rejected,
/// so `window <= 0` yields the last value and an oversized window yields the
/// mean of the whole series. `data` must not be empty.
pub fn simple_moving_average(data: &[f64], window: i64) -> f64 {
    let len = data.len() as i64;
    let w = window.min(len).max(1) as usize;
    let tail = &data[data.len() - w..];
    tail.iter().sum::<f64>() / tail.len() as f64
}

/// Exponential moving average of the whole series, seeded with `data[0]`.
///
/// `alpha` is used as given; values outside `(0, 1]` are accepted.
/// `data` must not be empty.
pub fn exponential_moving_average(data: &[f64], alpha: f64) -> f64 {
    data[1..]
        .iter()
        .fold(data[0], |estimate, &v| alpha * v + (1.0 - alpha) * estimate)
}

/// Predict the next value of `series`.
///
/// Fails when fewer than two points survive null removal (checked first),
/// when `method` is neither `sma` nor `ema`, or when the computed value is
/// not finite. `window` is only used to derive the EMA smoothing factor when
/// `alpha` is absent.
pub fn predict(
    series: &[Option<f64>],
    method: &str,
    window: i64,
    alpha: Option<f64>,
) -> Result<Forecast, ForecastError> {
    let data = clean_series(series);
    if data.len() < MIN_POINTS {
        return Err(ForecastError::SeriesTooShort { len: data.len() });
    }

    let method = Method::from_str(method)?;
    let predicted = match method {
        Method::Sma => simple_moving_average(&data, window),
        Method::Ema => {
            let alpha = alpha.unwrap_or_else(|| default_alpha(window));
            exponential_moving_average(&data, alpha)
        }
    };

    if !predicted.is_finite() {
        return Err(ForecastError::NonFinite { method });
    }

    Ok(Forecast {
        predicted,
        method,
        input_points: data,
    })
}
