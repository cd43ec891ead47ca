//! Infrastructure layer (adapters/implementations).
//!
//! Configuration loading and the SQLite record store.

pub mod app_config;
pub mod db;
