//! Spritekit - spritesheet image editing service
//!
//! Background removal, edge padding and scaling over HTTP.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
