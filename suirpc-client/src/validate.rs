//! Structural pre-flight validation for request shapes
//!
//! Operations with required fields run [`Validate::validate`] before
//! dispatch, so a malformed request fails with [`Error::Validation`] without
//! spending a network round trip. Operations whose fields are all optional
//! skip this step entirely.
//!
//! Validation is purely structural: presence and range checks only, no
//! blockchain semantics (an address that is present but unknown to the node
//! is the node's problem, not the validator's).

use crate::models::{GetDynamicFieldsRequest, GetOwnedObjectsRequest, QUERY_MAX_RESULT_LIMIT};
use suirpc_core::{Error, Result};

/// Structural pre-flight check, run before any network activity
pub trait Validate {
    /// Fail with [`Error::Validation`] if a required field is absent or out
    /// of range
    fn validate(&self) -> Result<()>;
}

impl Validate for GetOwnedObjectsRequest {
    fn validate(&self) -> Result<()> {
        if self.address.is_empty() {
            return Err(Error::Validation("address is required".to_string()));
        }
        check_limit(self.limit)
    }
}

impl Validate for GetDynamicFieldsRequest {
    fn validate(&self) -> Result<()> {
        if self.object_id.is_empty() {
            return Err(Error::Validation("objectId is required".to_string()));
        }
        check_limit(self.limit)
    }
}

/// Page size must be 1..=QUERY_MAX_RESULT_LIMIT
fn check_limit(limit: u64) -> Result<()> {
    if limit == 0 {
        return Err(Error::Validation("limit is required".to_string()));
    }
    if limit > QUERY_MAX_RESULT_LIMIT {
        return Err(Error::Validation(format!(
            "limit must be at most {}, got {}",
            QUERY_MAX_RESULT_LIMIT, limit
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_objects_request_valid() {
        let request = GetOwnedObjectsRequest {
            address: "0x1".to_string(),
            limit: 5,
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_owned_objects_missing_address() {
        let request = GetOwnedObjectsRequest {
            limit: 5,
            ..Default::default()
        };
        match request.validate() {
            Err(Error::Validation(msg)) => assert!(msg.contains("address")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_owned_objects_zero_limit() {
        let request = GetOwnedObjectsRequest {
            address: "0x1".to_string(),
            limit: 0,
            ..Default::default()
        };
        match request.validate() {
            Err(Error::Validation(msg)) => assert!(msg.contains("limit")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_owned_objects_limit_above_cap() {
        let request = GetOwnedObjectsRequest {
            address: "0x1".to_string(),
            limit: QUERY_MAX_RESULT_LIMIT + 1,
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_owned_objects_limit_at_cap() {
        let request = GetOwnedObjectsRequest {
            address: "0x1".to_string(),
            limit: QUERY_MAX_RESULT_LIMIT,
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_dynamic_fields_missing_object_id() {
        let request = GetDynamicFieldsRequest {
            limit: 10,
            ..Default::default()
        };
        match request.validate() {
            Err(Error::Validation(msg)) => assert!(msg.contains("objectId")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_dynamic_fields_valid() {
        let request = GetDynamicFieldsRequest {
            object_id: "0x5".to_string(),
            limit: 10,
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }
}
