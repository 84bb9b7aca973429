//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod standings_error_tests {
    use super::*;

    #[test]
    fn test_transport_error_conversion() {
        // A relative URL fails when the request is built, no network involved
        let reqwest_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let error = StandingsError::from(reqwest_error);

        match error {
            StandingsError::Transport(_) => (),
            _ => panic!("Expected Transport error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = StandingsError::from(json_error);

        match error {
            StandingsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = StandingsError::from(io_error);

        match error {
            StandingsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let error = StandingsError::from(header_error);

        match error {
            StandingsError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty-two".parse::<u16>().unwrap_err();
        let error = StandingsError::from(parse_error);

        match error {
            StandingsError::InvalidSeason(_) => (),
            _ => panic!("Expected InvalidSeason error variant"),
        }
    }

    #[test]
    fn test_http_status_error_message() {
        let error = StandingsError::HttpStatus {
            status: 429,
            message: "Too Many Requests".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("429"));
        assert!(error_string.contains("Too Many Requests"));
    }

    #[test]
    fn test_missing_config_error() {
        let error = StandingsError::MissingConfig {
            env_var: "RAPIDAPI_KEY".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "RAPIDAPI_KEY environment variable not set"
        );
    }

    #[test]
    fn test_database_not_found_error() {
        let error = StandingsError::DatabaseNotFound {
            path: PathBuf::from("/tmp/missing.db"),
        };

        assert_eq!(error.to_string(), "Database not found: /tmp/missing.db");
        assert!(error.is_connection_failure());
    }

    #[test]
    fn test_connection_failure_classification() {
        let auth = StandingsError::Authentication {
            message: "denied".to_string(),
        };
        let network = StandingsError::Network {
            message: "disk I/O error".to_string(),
        };
        let insert = StandingsError::Insert {
            message: "type mismatch".to_string(),
        };

        assert!(auth.is_connection_failure());
        assert!(network.is_connection_failure());
        assert!(!insert.is_connection_failure());
    }

    #[test]
    fn test_database_error_conversion() {
        let db_error = rusqlite::Error::InvalidColumnType(
            0,
            "Rank".to_string(),
            rusqlite::types::Type::Null,
        );
        let error = StandingsError::from(db_error);

        match error {
            StandingsError::Database(e) => assert!(e.to_string().contains("Rank")),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_schema_error_has_source() {
        let error = StandingsError::Schema(rusqlite::Error::InvalidQuery);
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn fails() -> Result<usize> {
            Err(StandingsError::Insert {
                message: "boom".to_string(),
            })
        }

        match fails().unwrap_err() {
            StandingsError::Insert { .. } => (),
            _ => panic!("Expected Insert error"),
        }
    }
}
