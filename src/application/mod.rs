pub mod errors;
pub mod forecast_service;
pub mod record_service;
pub mod status_service;
pub mod system;

pub use errors::ServiceError;
pub use forecast_service::{ForecastService, Prediction};
pub use record_service::RecordService;
pub use status_service::{StatusReport, StatusService};
pub use system::Application;
