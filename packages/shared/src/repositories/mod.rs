pub mod errors;
pub mod in_memory_score_repository;
pub mod score_repository;
