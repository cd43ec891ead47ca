//! Record store: one repository per record kind.
//!
//! Every repository supports exactly two operations, `add` and `list`.
//! Rows are never updated or deleted here.

mod court_record;
mod criminal;
mod victim;

pub use court_record::CourtRecordRepository;
pub use criminal::CriminalRepository;
pub use victim::VictimRepository;

use crate::domain::RecordId;
use anyhow::Result;
use rusqlite::Row;
use rusqlite::types::Value;

/// Insert and full-scan access to one record table.
pub trait RecordRepository {
    /// Validated write form.
    type New;
    /// Stored row.
    type Row;

    /// Insert one row and return the id the store assigned to it.
    fn add(&self, record: &Self::New) -> Result<RecordId>;

    /// All rows in ascending id order.
    fn list(&self) -> Result<Vec<Self::Row>>;
}

/// Read an INTEGER-affinity column that older files may hold as TEXT or REAL.
///
/// Returns `None` when the stored value has no exact integer reading.
pub(super) fn integer_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<i64>> {
    let value: Value = row.get(idx)?;
    Ok(match value {
        Value::Integer(n) => Some(n),
        Value::Real(f) if f.fract() == 0.0 && f.abs() < 9.0e18 => Some(f as i64),
        Value::Text(text) => text.trim().parse::<i64>().ok(),
        Value::Real(_) | Value::Null | Value::Blob(_) => None,
    })
}
