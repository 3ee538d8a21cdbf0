pub mod mem_repository;
pub mod models;
pub mod repositories;
