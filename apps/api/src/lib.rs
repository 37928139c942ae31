//! Portfolio site generator: themed rendering, preview, validation and zip
//! download over HTTP.

pub mod config;
pub mod download;
pub mod errors;
pub mod models;
pub mod portfolio;
pub mod render;
pub mod routes;
pub mod state;
