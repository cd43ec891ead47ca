//! Record keeper for criminals, victims and court records.
//!
//! The library is the persistence and validation core; `commands` is the
//! surface a presentation layer calls into.

pub mod application;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod state;
