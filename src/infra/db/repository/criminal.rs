use crate::domain::{Criminal, NewCriminal, RecordId};
use crate::infra::db::Database;
use crate::infra::db::repository::{RecordRepository, integer_column};
use anyhow::Result;

pub struct CriminalRepository {
    db: Database,
}

impl CriminalRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl RecordRepository for CriminalRepository {
    type New = NewCriminal;
    type Row = Criminal;

    fn add(&self, criminal: &NewCriminal) -> Result<RecordId> {
        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO criminal (name, age, address, crime) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![
                    &criminal.name,
                    criminal.age,
                    &criminal.address,
                    &criminal.crime,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn list(&self) -> Result<Vec<Criminal>> {
        self.db.with_connection(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, name, age, address, crime FROM criminal ORDER BY id ASC")?;
            let rows = stmt.query_map([], |row| {
                let id: RecordId = row.get(0)?;
                let Some(age) = integer_column(row, 2)? else {
                    log::warn!("Skipping criminal {id}: stored age is not an integer");
                    return Ok(None);
                };

                Ok(Some(Criminal {
                    id,
                    name: row.get(1)?,
                    age,
                    address: row.get(3)?,
                    crime: row.get(4)?,
                }))
            })?;

            rows.filter_map(|row| row.transpose())
                .collect::<rusqlite::Result<Vec<_>>>()
        })
    }
}
