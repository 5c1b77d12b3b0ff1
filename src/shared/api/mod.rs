mod json_config;
mod not_found;
mod response;

pub use json_config::custom_json_config;
pub use not_found::route_not_found;
pub use response::ApiResponse;
