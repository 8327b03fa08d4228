pub mod auth_service_errors;
pub mod move_service_errors;
pub mod score_service_errors;
