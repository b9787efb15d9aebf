pub mod api;
pub mod api_error;
pub mod dto;

pub use api::router;
pub use api_error::ApiError;
