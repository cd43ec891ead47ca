//! Add and list use-cases for every record kind.

use crate::domain::{
    CourtRecord, Criminal, RecordError, RecordId, RecordKind, ValidationError, Victim,
};
use crate::infra::db::{Database, RecordRepository};
use anyhow::Result;

use super::validation::{validate_court_record, validate_criminal, validate_victim};

/// Validates raw submissions and hands accepted ones to the record store.
#[derive(Debug, Clone)]
pub struct RecordService {
    db: Database,
}

impl RecordService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn add_criminal(
        &self,
        name: &str,
        age: &str,
        address: &str,
        crime: &str,
    ) -> Result<RecordId, RecordError> {
        submit(
            RecordKind::Criminal,
            &self.db.criminal_repo(),
            validate_criminal(name, age, address, crime),
        )
    }

    pub fn add_victim(
        &self,
        name: &str,
        age: &str,
        address: &str,
        report: &str,
    ) -> Result<RecordId, RecordError> {
        submit(
            RecordKind::Victim,
            &self.db.victim_repo(),
            validate_victim(name, age, address, report),
        )
    }

    pub fn add_court_record(
        &self,
        criminal_id: &str,
        judge_name: &str,
        verdict: &str,
    ) -> Result<RecordId, RecordError> {
        submit(
            RecordKind::CourtRecord,
            &self.db.court_record_repo(),
            validate_court_record(criminal_id, judge_name, verdict),
        )
    }

    pub fn list_criminals(&self) -> Result<Vec<Criminal>> {
        self.db.criminal_repo().list()
    }

    pub fn list_victims(&self) -> Result<Vec<Victim>> {
        self.db.victim_repo().list()
    }

    pub fn list_court_records(&self) -> Result<Vec<CourtRecord>> {
        self.db.court_record_repo().list()
    }
}

/// Store a validated record; a rejected one never reaches the repository.
fn submit<R: RecordRepository>(
    kind: RecordKind,
    repo: &R,
    validated: Result<R::New, ValidationError>,
) -> Result<RecordId, RecordError> {
    let record = match validated {
        Ok(record) => record,
        Err(err) => {
            log::warn!("Rejected {} submission: {}", kind.table_name(), err);
            return Err(err.into());
        }
    };

    match repo.add(&record) {
        Ok(id) => {
            log::info!("Added {} record {}", kind.table_name(), id);
            Ok(id)
        }
        Err(err) => {
            log::error!("Failed to add {} record: {:#}", kind.table_name(), err);
            Err(RecordError::Store(err))
        }
    }
}
