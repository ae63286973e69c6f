pub mod api;
pub mod config;
pub mod dashboard;
pub mod form;
pub mod health;
pub mod logging;
pub mod messages;
pub mod render;
pub mod report;
pub mod results;
