pub mod job;
pub mod movie_config;
pub mod movie_controller;
pub mod runners;
pub mod scheduler;
pub mod slot_pool;
