// Stored documents and ids
pub mod documents;

// Domain-specific error types
pub mod errors;

// Forecast engine
pub mod forecasting;

// Sales, profile and prediction records
pub mod records;

// Repository traits
pub mod repositories;
