use crate::domain::{NewVictim, RecordId, Victim};
use crate::infra::db::Database;
use crate::infra::db::repository::{RecordRepository, integer_column};
use anyhow::Result;

pub struct VictimRepository {
    db: Database,
}

impl VictimRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl RecordRepository for VictimRepository {
    type New = NewVictim;
    type Row = Victim;

    fn add(&self, victim: &NewVictim) -> Result<RecordId> {
        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO victim (name, age, address, report) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![&victim.name, victim.age, &victim.address, &victim.report],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn list(&self) -> Result<Vec<Victim>> {
        self.db.with_connection(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, name, age, address, report FROM victim ORDER BY id ASC")?;
            let rows = stmt.query_map([], |row| {
                let id: RecordId = row.get(0)?;
                let name: String = row.get(1)?;
                let Some(age) = integer_column(row, 2)? else {
                    log::warn!("Skipping victim {id}: stored age is not an integer");
                    return Ok(None);
                };
                let address: String = row.get(3)?;
                let report: String = row.get(4)?;

                Ok(Some(Victim {
                    id,
                    name,
                    age,
                    address,
                    report,
                }))
            })?;

            rows.filter_map(|row| row.transpose())
                .collect::<rusqlite::Result<Vec<_>>>()
        })
    }
}
