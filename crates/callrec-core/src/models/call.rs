//! Call record model
//!
//! Represents one call between two phone numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Call record
///
/// The persisted entity representing one call: who called, who was called,
/// and when the call started. `id` is assigned by the database on insert and
/// `start_time` is set server-side at creation; neither is ever altered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    /// Unique identifier, assigned by the database
    pub id: i64,

    /// Caller number
    pub caller_number: String,

    /// Receiver number
    pub receiver_number: String,

    /// Call start timestamp, set at insertion time
    pub start_time: DateTime<Utc>,
}

impl CallRecord {
    /// Check whether a number appears on either side of the call
    #[inline]
    pub fn involves(&self, number: &str) -> bool {
        self.caller_number == number || self.receiver_number == number
    }
}

impl Default for CallRecord {
    fn default() -> Self {
        Self {
            id: 0,
            caller_number: String::new(),
            receiver_number: String::new(),
            start_time: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_involves_either_side() {
        let record = CallRecord {
            caller_number: "111".to_string(),
            receiver_number: "222".to_string(),
            ..Default::default()
        };

        assert!(record.involves("111"));
        assert!(record.involves("222"));
        assert!(!record.involves("333"));
    }

    #[test]
    fn test_involves_is_exact_match() {
        let record = CallRecord {
            caller_number: "51999888777".to_string(),
            receiver_number: "15551234567".to_string(),
            ..Default::default()
        };

        assert!(!record.involves("519"));
        assert!(!record.involves(""));
    }
}
