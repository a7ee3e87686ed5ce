pub mod algorithm;
pub mod app;
pub mod config;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod report;
