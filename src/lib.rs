//! ESG Insight API Library
//!
//! Serves static ESG metrics for a fixed set of companies and derives a risk
//! tier and investment recommendation for each.
//!
//! # Modules
//!
//! - `app`: Router and shared state construction.
//! - `classifier`: Risk tier and recommendation rules.
//! - `config`: Configuration management.
//! - `directory`: The in-memory company directory.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Data models and API responses.
//! - `openapi`: OpenAPI document and Swagger UI.
//! - `services`: ESG report service with the classification overlay.

pub mod app;
pub mod classifier;
pub mod config;
pub mod directory;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;
