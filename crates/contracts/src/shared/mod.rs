pub mod api_config;
pub mod api_error;
pub mod api_response;
pub mod request;
pub mod validation;

pub use api_config::{ApiConfig, CONTENT_TYPE_JSON};
pub use api_error::{ApiError, ErrorBody};
pub use api_response::ApiResponse;
pub use request::{ApiRequest, HttpMethod};
pub use validation::ValidationError;
