//! Records stored by the service and their field constraints.
//!
//! Each record knows the collection it lives in and can check itself
//! before it is handed to a [`DocumentStore`](crate::domain::repositories::DocumentStore).

use crate::domain::errors::RecordError;
use crate::domain::forecasting::{Forecast, Method};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record type with a home collection and field validation.
pub trait Record: Serialize + Send + Sync {
    const COLLECTION: &'static str;

    fn validate(&self) -> Result<(), RecordError>;
}

/// One day of sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Transaction date, `YYYY-MM-DD`
    pub date: String,
    pub revenue: f64,
    #[serde(default)]
    pub units: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Record for SalesRecord {
    const COLLECTION: &'static str = "salesrecord";

    fn validate(&self) -> Result<(), RecordError> {
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(RecordError::InvalidDate {
                field: "date",
                value: self.date.clone(),
            });
        }
        non_negative("revenue", self.revenue)?;
        if let Some(units) = self.units {
            non_negative("units", units as f64)?;
        }
        Ok(())
    }
}

/// Business profile of an UMKM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub business_name: String,
    pub owner_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// e.g. "F&B"
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Record for Profile {
    const COLLECTION: &'static str = "profile";

    fn validate(&self) -> Result<(), RecordError> {
        if self.business_name.trim().is_empty() {
            return Err(RecordError::Missing {
                field: "business_name",
            });
        }
        if self.owner_name.trim().is_empty() {
            return Err(RecordError::Missing {
                field: "owner_name",
            });
        }
        Ok(())
    }
}

/// A persisted forecast together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub method: Method,
    pub window: i64,
    pub input_points: Vec<f64>,
    pub predicted_value: f64,
}

impl PredictionRecord {
    pub const MIN_WINDOW: i64 = 1;
    pub const MAX_WINDOW: i64 = 90;

    /// Build the record for `forecast`, keeping the window as the caller sent it.
    pub fn from_forecast(forecast: &Forecast, window: i64) -> Self {
        Self {
            method: forecast.method,
            window,
            input_points: forecast.input_points.clone(),
            predicted_value: forecast.predicted,
        }
    }
}

impl Record for PredictionRecord {
    const COLLECTION: &'static str = "prediction";

    fn validate(&self) -> Result<(), RecordError> {
        if !(Self::MIN_WINDOW..=Self::MAX_WINDOW).contains(&self.window) {
            return Err(RecordError::OutOfRange {
                field: "window",
                min: Self::MIN_WINDOW,
                max: Self::MAX_WINDOW,
                value: self.window,
            });
        }
        non_negative("predicted_value", self.predicted_value)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), RecordError> {
    // NaN fails too
    if value >= 0.0 {
        Ok(())
    } else {
        Err(RecordError::BelowMinimum {
            field,
            min: 0.0,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales(date: &str, revenue: f64, units: Option<i64>) -> SalesRecord {
        SalesRecord {
            date: date.to_string(),
            revenue,
            units,
            note: None,
        }
    }

    #[test]
    fn test_sales_record_validation() {
        assert!(sales("2024-03-01", 150_000.0, Some(12)).validate().is_ok());
        assert!(sales("2024-03-01", 0.0, None).validate().is_ok());

        assert!(matches!(
            sales("01/03/2024", 10.0, None).validate(),
            Err(RecordError::InvalidDate { .. })
        ));
        assert!(matches!(
            sales("2024-03-01", -1.0, None).validate(),
            Err(RecordError::BelowMinimum { field: "revenue", .. })
        ));
        assert!(matches!(
            sales("2024-03-01", 10.0, Some(-3)).validate(),
            Err(RecordError::BelowMinimum { field: "units", .. })
        ));
    }

    #[test]
    fn test_profile_requires_names() {
        let mut profile = Profile {
            business_name: "Warung Sari".to_string(),
            owner_name: "Sari".to_string(),
            email: None,
            phone: None,
            address: None,
            category: Some("F&B".to_string()),
            description: None,
        };
        assert!(profile.validate().is_ok());

        profile.owner_name = "  ".to_string();
        assert_eq!(
            profile.validate(),
            Err(RecordError::Missing {
                field: "owner_name"
            })
        );
    }

    #[test]
    fn test_prediction_record_bounds() {
        let forecast = Forecast {
            predicted: 35.0,
            method: Method::Sma,
            input_points: vec![10.0, 20.0, 30.0, 40.0],
        };
        assert!(PredictionRecord::from_forecast(&forecast, 2).validate().is_ok());
        assert!(PredictionRecord::from_forecast(&forecast, 90).validate().is_ok());
        assert!(PredictionRecord::from_forecast(&forecast, 0).validate().is_err());
        assert!(PredictionRecord::from_forecast(&forecast, 91).validate().is_err());

        let negative = Forecast {
            predicted: -4.0,
            ..forecast
        };
        assert!(matches!(
            PredictionRecord::from_forecast(&negative, 3).validate(),
            Err(RecordError::BelowMinimum {
                field: "predicted_value",
                ..
            })
        ));
    }

    #[test]
    fn test_prediction_record_serializes_lowercase_method() {
        let record = PredictionRecord {
            method: Method::Ema,
            window: 3,
            input_points: vec![1.0, 2.0],
            predicted_value: 1.5,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["method"], "ema");
        assert_eq!(value["window"], 3);
    }
}
