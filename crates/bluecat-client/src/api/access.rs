//! Access right operations

use crate::client::BlueCatClient;
use crate::common::{Options, Query};
use crate::error::BlueCatError;
use crate::models::AccessRight;
use tracing::debug;

impl BlueCatClient {
    /// Get the access right a user holds on an entity
    pub async fn get_access_right(
        &self,
        entity_id: i64,
        user_id: i64,
    ) -> Result<AccessRight, BlueCatError> {
        let query = Query::new()
            .param("entityId", entity_id)
            .param("userId", user_id);
        self.get_json("getAccessRight", query).await
    }

    /// Get all access rights granted on an entity
    pub async fn get_access_rights_for_entity(
        &self,
        entity_id: i64,
        count: i32,
        start: i32,
    ) -> Result<Vec<AccessRight>, BlueCatError> {
        let query = Query::new().param("entityId", entity_id).page(count, start);
        self.get_json("getAccessRightsForEntity", query).await
    }

    /// Get all access rights held by a user
    pub async fn get_access_rights_for_user(
        &self,
        user_id: i64,
        count: i32,
        start: i32,
    ) -> Result<Vec<AccessRight>, BlueCatError> {
        let query = Query::new().param("userId", user_id).page(count, start);
        self.get_json("getAccessRightsForUser", query).await
    }

    /// Grant a user an access right on an entity
    ///
    /// # Arguments
    /// * `entity_id` - Object the right applies to (0 for the system default)
    /// * `user_id` - User or group receiving the right
    /// * `value` - One of HIDE, VIEW, ADD, CHANGE, FULL
    /// * `overrides` - Per-type overrides, e.g. `IP4Network=VIEW|`
    /// * `properties` - Extra properties such as `workflowLevel=NONE`
    ///
    /// # Returns
    /// * `Ok(i64)` - Object id of the new access right
    /// * `Err(BlueCatError::Rejected)` - The server refused the grant
    pub async fn add_access_right(
        &self,
        entity_id: i64,
        user_id: i64,
        value: &str,
        overrides: &Options,
        properties: &Options,
    ) -> Result<i64, BlueCatError> {
        debug!("Granting {} on entity {} to user {}", value, entity_id, user_id);
        let query = Query::new()
            .param("entityId", entity_id)
            .param("userId", user_id)
            .param("value", value)
            .param("overrides", overrides)
            .param("properties", properties);
        self.mutate_for_id("addAccessRight", query, None).await
    }
}
