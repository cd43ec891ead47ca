//! Record kinds kept by the store.
//!
//! Each kind comes in two shapes: the stored row (with its store-assigned
//! `id`) and the `New*` write form produced by validation.

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key.
pub type RecordId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criminal {
    pub id: RecordId,
    pub name: String,
    pub age: i64,
    pub address: String,
    pub crime: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victim {
    pub id: RecordId,
    pub name: String,
    pub age: i64,
    pub address: String,
    /// Free-form statement, may span several lines.
    pub report: String,
}

/// A court outcome for a criminal.
///
/// `criminal_id` is not checked against the `criminal` table, so a record
/// may point at a criminal that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtRecord {
    pub id: RecordId,
    pub criminal_id: RecordId,
    pub judge_name: String,
    pub verdict: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCriminal {
    pub name: String,
    pub age: i64,
    pub address: String,
    pub crime: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVictim {
    pub name: String,
    pub age: i64,
    pub address: String,
    pub report: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourtRecord {
    pub criminal_id: RecordId,
    pub judge_name: String,
    pub verdict: String,
}

/// The three record kinds, used where a caller picks a table by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Criminal,
    Victim,
    CourtRecord,
}

impl RecordKind {
    pub fn table_name(self) -> &'static str {
        match self {
            RecordKind::Criminal => "criminal",
            RecordKind::Victim => "victim",
            RecordKind::CourtRecord => "court_record",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecordKind::Criminal => "Criminal",
            RecordKind::Victim => "Victim",
            RecordKind::CourtRecord => "Court",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "criminal" | "criminals" => Ok(RecordKind::Criminal),
            "victim" | "victims" => Ok(RecordKind::Victim),
            "court_record" | "court_records" => Ok(RecordKind::CourtRecord),
            other => Err(format!("Unknown record kind: {other}")),
        }
    }
}
