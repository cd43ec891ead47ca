//! Operations exposed to the presentation layer.
//!
//! Add operations never fail outright: the outcome says whether the
//! submission was accepted, rejected by validation, or refused by the
//! store. Listing failures come back as the store's message.

use crate::domain::{CourtRecord, Criminal, RecordError, RecordId, Victim};
use crate::infra::app_config::AppConfig;
use crate::state::AppState;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AddOutcome {
    Accepted { id: RecordId },
    Rejected { reason: String },
    StoreError { message: String },
}

impl AddOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AddOutcome::Accepted { .. })
    }
}

impl From<Result<RecordId, RecordError>> for AddOutcome {
    fn from(result: Result<RecordId, RecordError>) -> Self {
        match result {
            Ok(id) => AddOutcome::Accepted { id },
            Err(RecordError::Invalid(err)) => AddOutcome::Rejected {
                reason: err.to_string(),
            },
            Err(RecordError::Store(err)) => AddOutcome::StoreError {
                message: format!("{err:#}"),
            },
        }
    }
}

/// Provision the schema. Callers must not continue on error.
pub fn initialize(config: AppConfig) -> Result<AppState> {
    let path = config.db_path.clone();
    AppState::new(config)
        .with_context(|| format!("Failed to initialize record store at {}", path.display()))
}

pub fn add_criminal(
    state: &AppState,
    name: &str,
    age: &str,
    address: &str,
    crime: &str,
) -> AddOutcome {
    state.records.add_criminal(name, age, address, crime).into()
}

pub fn add_victim(
    state: &AppState,
    name: &str,
    age: &str,
    address: &str,
    report: &str,
) -> AddOutcome {
    state.records.add_victim(name, age, address, report).into()
}

pub fn add_court_record(
    state: &AppState,
    criminal_id: &str,
    judge_name: &str,
    verdict: &str,
) -> AddOutcome {
    state
        .records
        .add_court_record(criminal_id, judge_name, verdict)
        .into()
}

pub fn list_criminals(state: &AppState) -> Result<Vec<Criminal>, String> {
    state.records.list_criminals().map_err(|e| format!("{e:#}"))
}

pub fn list_victims(state: &AppState) -> Result<Vec<Victim>, String> {
    state.records.list_victims().map_err(|e| format!("{e:#}"))
}

pub fn list_court_records(state: &AppState) -> Result<Vec<CourtRecord>, String> {
    state.records.list_court_records().map_err(|e| format!("{e:#}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_outcome_from_result() {
        let accepted = AddOutcome::from(Ok::<RecordId, RecordError>(3));
        assert_eq!(accepted, AddOutcome::Accepted { id: 3 });

        let invalid = ValidationError::NotDigits { field: "age" };
        let rejected = AddOutcome::from(Err::<RecordId, _>(RecordError::Invalid(invalid)));
        assert_eq!(
            rejected,
            AddOutcome::Rejected {
                reason: "Invalid input: age must contain only digits".into()
            }
        );

        let locked = anyhow::anyhow!("database is locked");
        let store = AddOutcome::from(Err::<RecordId, _>(RecordError::Store(locked)));
        assert_eq!(
            store,
            AddOutcome::StoreError {
                message: "database is locked".into()
            }
        );
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(AddOutcome::Accepted { id: 1 }).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "accepted", "id": 1 }));

        let json = serde_json::to_value(AddOutcome::StoreError {
            message: "disk full".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "storeError", "message": "disk full" })
        );
    }
}
