//! Typed API surface for the Sui object read methods
//!
//! One function per supported RPC method. Each function follows the same
//! linear sequence: validate (only where fields are required) -> map named
//! request fields into the method's **positional** parameter list -> delegate
//! to the transport -> decode into the declared result shape. Errors
//! propagate unchanged; nothing here retries or wraps.
//!
//! # Positional Order Is the Wire Contract
//!
//! The parameter order per method below is fixed by the node; changing it
//! breaks wire compatibility. The order is spelled out once, in the body of
//! each method, and covered by tests that inspect the bytes on the wire.
//!
//! | RPC method | Positional params |
//! |---|---|
//! | `sui_getObject` | objectId, options |
//! | `suix_getOwnedObjects` | address, query, cursor, limit |
//! | `sui_multiGetObjects` | objectIds, options |
//! | `suix_getDynamicFields` | objectId, cursor, limit |
//! | `suix_getDynamicFieldObject` | objectId, dynamicFieldName |
//! | `sui_tryGetPastObject` | objectId, version, options |
//! | `sui_getLoadedChildObjects` | digest |

use crate::models::{
    ChildObjectsResponse, GetDynamicFieldObjectRequest, GetDynamicFieldsRequest,
    GetLoadedChildObjectsRequest, GetObjectRequest, GetOwnedObjectsRequest,
    MultiGetObjectsRequest, ObjectData, ObjectResponse, PaginatedDynamicFieldInfoResponse,
    PaginatedObjectsResponse, PastObjectResponse, TryGetPastObjectRequest,
};
use crate::transport::HttpTransport;
use crate::validate::Validate;
use async_trait::async_trait;
use std::sync::Arc;
use suirpc_core::{codec, Result, RpcCall};

/// Capability trait over the object read API
///
/// The seven read operations, named so a test double (or an alternative
/// transport) can substitute for [`ReadApi`] behind a `dyn` reference.
#[async_trait]
pub trait ObjectReadApi: Send + Sync {
    /// `sui_getObject`: object information for a specified object
    async fn get_object(&self, request: GetObjectRequest) -> Result<ObjectData>;

    /// `suix_getOwnedObjects`: page of objects owned by an address
    async fn get_owned_objects(
        &self,
        request: GetOwnedObjectsRequest,
    ) -> Result<PaginatedObjectsResponse>;

    /// `sui_multiGetObjects`: object data for a list of objects, in order
    async fn multi_get_objects(
        &self,
        request: MultiGetObjectsRequest,
    ) -> Result<Vec<ObjectResponse>>;

    /// `suix_getDynamicFields`: page of dynamic fields owned by an object
    async fn get_dynamic_fields(
        &self,
        request: GetDynamicFieldsRequest,
    ) -> Result<PaginatedDynamicFieldInfoResponse>;

    /// `suix_getDynamicFieldObject`: resolve one dynamic field to its object
    async fn get_dynamic_field_object(
        &self,
        request: GetDynamicFieldObjectRequest,
    ) -> Result<ObjectResponse>;

    /// `sui_tryGetPastObject`: object information at a specific version
    async fn try_get_past_object(
        &self,
        request: TryGetPastObjectRequest,
    ) -> Result<PastObjectResponse>;

    /// `sui_getLoadedChildObjects`: child objects loaded by a transaction
    async fn get_loaded_child_objects(
        &self,
        request: GetLoadedChildObjectsRequest,
    ) -> Result<ChildObjectsResponse>;
}

/// The concrete read API, backed by [`HttpTransport`]
#[derive(Clone)]
pub struct ReadApi {
    transport: Arc<HttpTransport>,
}

impl ReadApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ObjectReadApi for ReadApi {
    async fn get_object(&self, request: GetObjectRequest) -> Result<ObjectData> {
        self.transport
            .call(RpcCall::new(
                "sui_getObject",
                vec![
                    codec::to_param(&request.object_id)?,
                    codec::to_param(&request.options)?,
                ],
            ))
            .await
    }

    async fn get_owned_objects(
        &self,
        request: GetOwnedObjectsRequest,
    ) -> Result<PaginatedObjectsResponse> {
        request.validate()?;
        self.transport
            .call(RpcCall::new(
                "suix_getOwnedObjects",
                vec![
                    codec::to_param(&request.address)?,
                    codec::to_param(&request.query)?,
                    codec::to_param(&request.cursor)?,
                    codec::to_param(&request.limit)?,
                ],
            ))
            .await
    }

    async fn multi_get_objects(
        &self,
        request: MultiGetObjectsRequest,
    ) -> Result<Vec<ObjectResponse>> {
        self.transport
            .call(RpcCall::new(
                "sui_multiGetObjects",
                vec![
                    codec::to_param(&request.object_ids)?,
                    codec::to_param(&request.options)?,
                ],
            ))
            .await
    }

    async fn get_dynamic_fields(
        &self,
        request: GetDynamicFieldsRequest,
    ) -> Result<PaginatedDynamicFieldInfoResponse> {
        request.validate()?;
        self.transport
            .call(RpcCall::new(
                "suix_getDynamicFields",
                vec![
                    codec::to_param(&request.object_id)?,
                    codec::to_param(&request.cursor)?,
                    codec::to_param(&request.limit)?,
                ],
            ))
            .await
    }

    async fn get_dynamic_field_object(
        &self,
        request: GetDynamicFieldObjectRequest,
    ) -> Result<ObjectResponse> {
        self.transport
            .call(RpcCall::new(
                "suix_getDynamicFieldObject",
                vec![
                    codec::to_param(&request.object_id)?,
                    codec::to_param(&request.dynamic_field_name)?,
                ],
            ))
            .await
    }

    async fn try_get_past_object(
        &self,
        request: TryGetPastObjectRequest,
    ) -> Result<PastObjectResponse> {
        self.transport
            .call(RpcCall::new(
                "sui_tryGetPastObject",
                vec![
                    codec::to_param(&request.object_id)?,
                    codec::to_param(&request.version)?,
                    codec::to_param(&request.options)?,
                ],
            ))
            .await
    }

    async fn get_loaded_child_objects(
        &self,
        request: GetLoadedChildObjectsRequest,
    ) -> Result<ChildObjectsResponse> {
        self.transport
            .call(RpcCall::new(
                "sui_getLoadedChildObjects",
                vec![codec::to_param(&request.digest)?],
            ))
            .await
    }
}
