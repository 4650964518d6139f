//! Call record DTOs
//!
//! Request and response types for the call record endpoints.

use callrec_core::models::CallRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for listing call records by number
#[derive(Debug, Clone, Deserialize)]
pub struct CallQueryParams {
    /// Phone number to match against either side of the call
    pub number: Option<String>,
}

/// Call record creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CallCreateRequest {
    /// Caller number
    #[validate(length(min = 1, message = "Caller number is required"))]
    pub caller_number: String,

    /// Receiver number
    #[validate(length(min = 1, message = "Receiver number is required"))]
    pub receiver_number: String,
}

/// Call record update request
///
/// Only the numbers are mutable; `id` and `start_time` never change.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CallUpdateRequest {
    /// New caller number
    #[validate(length(min = 1))]
    pub caller_number: Option<String>,

    /// New receiver number
    #[validate(length(min = 1))]
    pub receiver_number: Option<String>,
}

impl CallUpdateRequest {
    /// Whether the request carries at least one field to change
    pub fn has_changes(&self) -> bool {
        self.caller_number.is_some() || self.receiver_number.is_some()
    }
}

/// Call record response DTO
#[derive(Debug, Clone, Serialize)]
pub struct CallRecordResponse {
    /// Record ID
    pub id: i64,

    /// Caller number
    pub caller_number: String,

    /// Receiver number
    pub receiver_number: String,

    /// Call start time
    pub start_time: DateTime<Utc>,
}

impl From<CallRecord> for CallRecordResponse {
    fn from(record: CallRecord) -> Self {
        Self {
            id: record.id,
            caller_number: record.caller_number,
            receiver_number: record.receiver_number,
            start_time: record.start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let req = CallCreateRequest {
            caller_number: "111".to_string(),
            receiver_number: "222".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = CallCreateRequest {
            caller_number: String::new(),
            receiver_number: "222".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_long_numbers_are_accepted() {
        // Only emptiness is invalid; no upper bound on number length
        let long = "9".repeat(64);

        let req = CallCreateRequest {
            caller_number: long.clone(),
            receiver_number: long.clone(),
        };
        assert!(req.validate().is_ok());

        let req = CallUpdateRequest {
            caller_number: Some(long),
            receiver_number: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_has_changes() {
        let req = CallUpdateRequest {
            caller_number: Some("333".to_string()),
            receiver_number: None,
        };
        assert!(req.has_changes());

        let req = CallUpdateRequest {
            caller_number: None,
            receiver_number: None,
        };
        assert!(!req.has_changes());
    }

    #[test]
    fn test_update_request_rejects_empty_field() {
        let req = CallUpdateRequest {
            caller_number: Some(String::new()),
            receiver_number: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_call_record_response_from_model() {
        let record = CallRecord {
            id: 42,
            caller_number: "111".to_string(),
            receiver_number: "222".to_string(),
            ..Default::default()
        };

        let response = CallRecordResponse::from(record.clone());
        assert_eq!(response.id, 42);
        assert_eq!(response.caller_number, "111");
        assert_eq!(response.receiver_number, "222");
        assert_eq!(response.start_time, record.start_time);
    }
}
