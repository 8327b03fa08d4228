pub mod auth_service;
pub mod errors;
pub mod move_service;
pub mod score_service;
