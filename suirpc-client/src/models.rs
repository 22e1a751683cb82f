//! Typed request and result shapes for the Sui read API
//!
//! Plain serde data holders with no behavior: one request/result pair per RPC
//! method, constructed by the caller, consumed by the typed API surface, and
//! dropped after decode. Field names follow Rust convention and map to the
//! node's camelCase wire names via serde.
//!
//! Fields this SDK does not interpret stay opaque (`serde_json::Value`) - the
//! client forwards parameters and relays responses without attaching any
//! blockchain semantics to them. All result types tolerate absent fields
//! (`#[serde(default)]`), so a node omitting optional parts of a payload
//! never fails a decode.

use serde::{Deserialize, Serialize};

/// Maximum page size the full node accepts for paginated queries
pub const QUERY_MAX_RESULT_LIMIT: u64 = 50;

/// Which parts of an object's data the node should include in its response
///
/// Everything defaults to `false`; switch on only what you need, since the
/// content and BCS payloads can be large.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectDataOptions {
    /// Include the object's Move type
    pub show_type: bool,
    /// Include ownership information
    pub show_owner: bool,
    /// Include the digest of the transaction that last mutated the object
    pub show_previous_transaction: bool,
    /// Include the display metadata computed from the Display standard
    pub show_display: bool,
    /// Include the parsed Move content
    pub show_content: bool,
    /// Include the raw BCS bytes
    pub show_bcs: bool,
    /// Include the storage rebate attached to the object
    pub show_storage_rebate: bool,
}

/// Filter and rendering options for object queries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectResponseQuery {
    /// Node-side filter expression, forwarded opaquely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    /// Rendering options applied to every matched object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ObjectDataOptions>,
}

/// Name of a dynamic field: a Move type tag plus a value of that type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DynamicFieldName {
    /// Move type tag of the name, e.g. `0x1::string::String`
    #[serde(rename = "type")]
    pub type_: String,
    /// The name value, forwarded opaquely
    pub value: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Request shapes (one per supported RPC method)
// ---------------------------------------------------------------------------

/// Request for `sui_getObject`
#[derive(Debug, Clone, Default)]
pub struct GetObjectRequest {
    /// ID of the object to fetch
    pub object_id: String,
    /// Rendering options; `None` leaves the choice to the node
    pub options: Option<ObjectDataOptions>,
}

/// Request for `suix_getOwnedObjects`
#[derive(Debug, Clone, Default)]
pub struct GetOwnedObjectsRequest {
    /// Owner address (required)
    pub address: String,
    /// Optional filter and rendering options
    pub query: Option<ObjectResponseQuery>,
    /// Pagination cursor from a previous page, if any
    pub cursor: Option<String>,
    /// Page size (required, at most [`QUERY_MAX_RESULT_LIMIT`])
    pub limit: u64,
}

/// Request for `sui_multiGetObjects`
#[derive(Debug, Clone, Default)]
pub struct MultiGetObjectsRequest {
    /// IDs of the objects to fetch, echoed back in the same order
    pub object_ids: Vec<String>,
    /// Rendering options shared by all objects
    pub options: Option<ObjectDataOptions>,
}

/// Request for `suix_getDynamicFields`
#[derive(Debug, Clone, Default)]
pub struct GetDynamicFieldsRequest {
    /// ID of the parent object (required)
    pub object_id: String,
    /// Pagination cursor from a previous page, if any
    pub cursor: Option<String>,
    /// Page size (required, at most [`QUERY_MAX_RESULT_LIMIT`])
    pub limit: u64,
}

/// Request for `suix_getDynamicFieldObject`
#[derive(Debug, Clone, Default)]
pub struct GetDynamicFieldObjectRequest {
    /// ID of the parent object
    pub object_id: String,
    /// Name of the dynamic field to resolve
    pub dynamic_field_name: DynamicFieldName,
}

/// Request for `sui_tryGetPastObject`
///
/// There is no guarantee that objects with past versions can be retrieved;
/// the result may vary across nodes depending on their pruning policies.
#[derive(Debug, Clone, Default)]
pub struct TryGetPastObjectRequest {
    /// ID of the object to fetch
    pub object_id: String,
    /// Version to fetch
    pub version: u64,
    /// Rendering options; `None` leaves the choice to the node
    pub options: Option<ObjectDataOptions>,
}

/// Request for `sui_getLoadedChildObjects`
#[derive(Debug, Clone, Default)]
pub struct GetLoadedChildObjectsRequest {
    /// Transaction digest whose loaded child objects to return
    pub digest: String,
}

// ---------------------------------------------------------------------------
// Result shapes
// ---------------------------------------------------------------------------

/// Object data as returned by the node
///
/// Only the identity fields are given concrete types; everything whose
/// presence depends on [`ObjectDataOptions`] stays optional and opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectData {
    /// ID of the object
    pub object_id: String,
    /// Version of the object
    pub version: String,
    /// Digest of the object
    pub digest: String,
    /// Move type (present when `show_type` was requested)
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Ownership information (present when `show_owner` was requested)
    pub owner: Option<serde_json::Value>,
    /// Digest of the last mutating transaction
    pub previous_transaction: Option<String>,
    /// Storage rebate attached to the object
    pub storage_rebate: Option<serde_json::Value>,
    /// Display metadata
    pub display: Option<serde_json::Value>,
    /// Parsed Move content
    pub content: Option<serde_json::Value>,
    /// Raw BCS bytes
    pub bcs: Option<serde_json::Value>,
}

/// Either object data or a node-reported lookup error
///
/// The node reports per-object failures (deleted, not found) inside the
/// result payload rather than as JSON-RPC errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectResponse {
    /// The object data, when the lookup succeeded
    pub data: Option<ObjectData>,
    /// Node-side lookup error, forwarded opaquely
    pub error: Option<serde_json::Value>,
}

/// One page of object responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginatedObjectsResponse {
    /// The objects on this page
    pub data: Vec<ObjectResponse>,
    /// Cursor to pass as `cursor` for the next page
    pub next_cursor: Option<String>,
    /// Whether another page exists after this one
    pub has_next_page: bool,
}

/// Summary of one dynamic field owned by an object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicFieldInfo {
    /// Name of the field
    pub name: Option<DynamicFieldName>,
    /// BCS encoding of the name
    pub bcs_name: Option<String>,
    /// Kind of field (`DynamicField` or `DynamicObject`)
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Move type of the field object
    pub object_type: Option<String>,
    /// ID of the field object
    pub object_id: String,
    /// Version of the field object
    pub version: Option<serde_json::Value>,
    /// Digest of the field object
    pub digest: Option<String>,
}

/// One page of dynamic field summaries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginatedDynamicFieldInfoResponse {
    /// The fields on this page
    pub data: Vec<DynamicFieldInfo>,
    /// Cursor to pass as `cursor` for the next page
    pub next_cursor: Option<String>,
    /// Whether another page exists after this one
    pub has_next_page: bool,
}

/// Result of a versioned object lookup
///
/// `status` is one of `VersionFound`, `ObjectNotExists`, `ObjectDeleted`,
/// `VersionNotFound`, `VersionTooHigh`; `details` carries the
/// status-dependent payload opaquely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PastObjectResponse {
    /// Lookup outcome
    pub status: String,
    /// Status-dependent payload
    pub details: Option<serde_json::Value>,
}

/// One child object loaded while executing a transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadedChildObject {
    /// ID of the child object
    pub object_id: String,
    /// Sequence number at which it was loaded
    pub sequence_number: Option<serde_json::Value>,
}

/// Child objects loaded by the transaction with the requested digest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildObjectsResponse {
    /// The loaded child objects
    pub loaded_child_objects: Vec<LoadedChildObject>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_serialize_camel_case() {
        let options = ObjectDataOptions {
            show_type: true,
            show_owner: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&options).unwrap();

        assert_eq!(value["showType"], json!(true));
        assert_eq!(value["showOwner"], json!(true));
        assert_eq!(value["showContent"], json!(false));
    }

    #[test]
    fn test_object_data_tolerates_missing_fields() {
        let body = json!({"objectId": "0xabc", "version": "1"});
        let data: ObjectData = serde_json::from_value(body).unwrap();

        assert_eq!(data.object_id, "0xabc");
        assert_eq!(data.version, "1");
        assert!(data.digest.is_empty());
        assert!(data.type_.is_none());
    }

    #[test]
    fn test_object_data_type_field_rename() {
        let body = json!({
            "objectId": "0xabc",
            "version": "1",
            "digest": "d",
            "type": "0x2::coin::Coin<0x2::sui::SUI>"
        });
        let data: ObjectData = serde_json::from_value(body).unwrap();

        assert_eq!(data.type_.as_deref(), Some("0x2::coin::Coin<0x2::sui::SUI>"));
    }

    #[test]
    fn test_paginated_response_decodes() {
        let body = json!({
            "data": [
                {"data": {"objectId": "0x1", "version": "5", "digest": "a"}},
                {"error": {"code": "notExists", "object_id": "0x2"}}
            ],
            "nextCursor": "0x1",
            "hasNextPage": false
        });
        let page: PaginatedObjectsResponse = serde_json::from_value(body).unwrap();

        assert_eq!(page.data.len(), 2);
        assert!(page.data[0].data.is_some());
        assert!(page.data[1].error.is_some());
        assert_eq!(page.next_cursor.as_deref(), Some("0x1"));
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_dynamic_field_name_serializes_type_key() {
        let name = DynamicFieldName {
            type_: "0x1::string::String".to_string(),
            value: json!("key"),
        };
        let value = serde_json::to_value(&name).unwrap();

        assert_eq!(value["type"], "0x1::string::String");
        assert_eq!(value["value"], "key");
    }

    #[test]
    fn test_child_objects_response_decodes() {
        let body = json!({
            "loadedChildObjects": [
                {"objectId": "0x9", "sequenceNumber": "3"}
            ]
        });
        let response: ChildObjectsResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.loaded_child_objects.len(), 1);
        assert_eq!(response.loaded_child_objects[0].object_id, "0x9");
    }
}
