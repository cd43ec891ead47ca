//! Domain types for the record keeper.

pub mod error;
pub mod records;

pub use error::*;
pub use records::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_record_kind_parse() {
        assert_eq!(RecordKind::from_str("criminals").unwrap(), RecordKind::Criminal);
        assert_eq!(RecordKind::from_str("Victim").unwrap(), RecordKind::Victim);
        assert_eq!(
            RecordKind::from_str("court-records").unwrap(),
            RecordKind::CourtRecord
        );
        assert!(RecordKind::from_str("judge").is_err());
    }

    #[test]
    fn test_record_kind_table_names() {
        assert_eq!(RecordKind::Criminal.table_name(), "criminal");
        assert_eq!(RecordKind::Victim.table_name(), "victim");
        assert_eq!(RecordKind::CourtRecord.table_name(), "court_record");
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = ValidationError::NotDigits { field: "age" };
        assert_eq!(err.field(), "age");
        assert_eq!(err.to_string(), "Invalid input: age must contain only digits");
    }

    #[test]
    fn test_record_error_kinds() {
        let invalid: RecordError = ValidationError::EmptyField { field: "name" }.into();
        assert!(invalid.is_validation());

        let store: RecordError = anyhow::anyhow!("disk I/O error").into();
        assert!(!store.is_validation());
        assert!(store.to_string().contains("disk I/O error"));
    }
}
