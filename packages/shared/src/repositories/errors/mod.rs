pub mod score_repository_errors;
