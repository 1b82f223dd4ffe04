pub mod app;
pub mod config;
pub mod middleware;
pub mod post;
pub mod router;
pub mod utils;
