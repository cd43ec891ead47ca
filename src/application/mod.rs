//! Application layer (use-cases, policies).
//!
//! Input validation and the add/list use-cases that sit between the
//! presentation layer and the record store.

pub mod records;
pub mod validation;

pub use records::RecordService;
