use crate::domain::{CourtRecord, NewCourtRecord, RecordId};
use crate::infra::db::Database;
use crate::infra::db::repository::{RecordRepository, integer_column};
use anyhow::Result;

/// Court records. `criminal_id` is stored as given; no lookup in `criminal`.
pub struct CourtRecordRepository {
    db: Database,
}

impl CourtRecordRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl RecordRepository for CourtRecordRepository {
    type New = NewCourtRecord;
    type Row = CourtRecord;

    fn add(&self, record: &NewCourtRecord) -> Result<RecordId> {
        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO court_record (criminal_id, judge_name, verdict) VALUES (?1, ?2, ?3)",
                rusqlite::params![record.criminal_id, &record.judge_name, &record.verdict],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn list(&self) -> Result<Vec<CourtRecord>> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, criminal_id, judge_name, verdict FROM court_record ORDER BY id ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                let id: RecordId = row.get(0)?;
                let Some(criminal_id) = integer_column(row, 1)? else {
                    log::warn!("Skipping court record {id}: stored criminal_id is not an integer");
                    return Ok(None);
                };

                Ok(Some(CourtRecord {
                    id,
                    criminal_id,
                    judge_name: row.get(2)?,
                    verdict: row.get(3)?,
                }))
            })?;

            rows.filter_map(|row| row.transpose())
                .collect::<rusqlite::Result<Vec<_>>>()
        })
    }
}
