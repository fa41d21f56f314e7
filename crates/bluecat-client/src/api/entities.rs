//! Generic entity operations
//!
//! Lookups by id, name, CIDR, prefix and range, parent/child navigation,
//! entity links, and the generic add/update/delete calls.

use crate::client::BlueCatClient;
use crate::common::{Options, Query};
use crate::error::BlueCatError;
use crate::models::Entity;
use reqwest::Method;
use tracing::debug;

impl BlueCatClient {
    /// Get entities matching a name under a parent
    ///
    /// # Arguments
    /// * `name` - Entity name
    /// * `parent_id` - Object id of the parent
    /// * `object_type` - Object type constant, e.g. "IP4Network"
    /// * `count` - Maximum number of entities to return
    /// * `start` - Zero-based index of the first entity to return
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - Matching entities, empty if none
    /// * `Err(BlueCatError)` - If the request fails
    pub async fn get_entities_by_name(
        &self,
        name: &str,
        parent_id: i64,
        object_type: &str,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("name", name)
            .param("parentId", parent_id)
            .param("type", object_type)
            .page(count, start);
        self.get_json("getEntitiesByName", query).await
    }

    /// Get child entities of a parent
    ///
    /// # Arguments
    /// * `parent_id` - Object id of the parent
    /// * `object_type` - Type of the children to return
    /// * `count` - Maximum number of entities to return
    /// * `start` - Zero-based index of the first entity to return
    pub async fn get_entities(
        &self,
        parent_id: i64,
        object_type: &str,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("parentId", parent_id)
            .param("type", object_type)
            .page(count, start);
        self.get_json("getEntities", query).await
    }

    /// Get an IPv4 network by CIDR notation
    pub async fn get_entity_by_cidr(
        &self,
        cidr: &str,
        parent_id: i64,
        object_type: &str,
    ) -> Result<Entity, BlueCatError> {
        let query = Query::new()
            .param("cidr", cidr)
            .param("parentId", parent_id)
            .param("type", object_type);
        self.get_json("getEntityByCIDR", query).await
    }

    /// Get an entity by its object id, with its properties populated
    pub async fn get_entity_by_id(&self, id: i64) -> Result<Entity, BlueCatError> {
        debug!("Fetching entity {} from BlueCat", id);
        self.get_json("getEntityById", Query::new().param("id", id)).await
    }

    /// Get an entity by name under a parent
    pub async fn get_entity_by_name(
        &self,
        name: &str,
        parent_id: i64,
        object_type: &str,
    ) -> Result<Entity, BlueCatError> {
        let query = Query::new()
            .param("name", name)
            .param("parentId", parent_id)
            .param("type", object_type);
        self.get_json("getEntityByName", query).await
    }

    /// Get an IP block or network by prefix under a container
    pub async fn get_entity_by_prefix(
        &self,
        container_id: i64,
        prefix: &str,
        object_type: &str,
    ) -> Result<Entity, BlueCatError> {
        let query = Query::new()
            .param("containerId", container_id)
            .param("prefix", prefix)
            .param("type", object_type);
        self.get_json("getEntityByPrefix", query).await
    }

    /// Get a block, network or range spanning `address1`..`address2`
    pub async fn get_entity_by_range(
        &self,
        address1: &str,
        address2: &str,
        parent_id: i64,
        object_type: &str,
    ) -> Result<Entity, BlueCatError> {
        let query = Query::new()
            .param("address1", address1)
            .param("address2", address2)
            .param("parentId", parent_id)
            .param("type", object_type);
        self.get_json("getEntityByRange", query).await
    }

    /// Get entities by name with search options
    ///
    /// The only option the server knows today is `ignoreCase=true|false`.
    pub async fn get_entities_by_name_using_options(
        &self,
        name: &str,
        options: &Options,
        parent_id: i64,
        object_type: &str,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("name", name)
            .param("options", options)
            .param("parentId", parent_id)
            .param("type", object_type)
            .page(count, start);
        self.get_json("getEntitiesByNameUsingOptions", query).await
    }

    /// Get entities of `linked_type` linked to an entity
    pub async fn get_linked_entities(
        &self,
        entity_id: i64,
        linked_type: &str,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("entityId", entity_id)
            .param("type", linked_type)
            .page(count, start);
        self.get_json("getLinkedEntities", query).await
    }

    /// Get the parent of an entity
    pub async fn get_parent(&self, entity_id: i64) -> Result<Entity, BlueCatError> {
        self.get_json("getParent", Query::new().param("entityId", entity_id))
            .await
    }

    /// Link two entities
    pub async fn link_entities(
        &self,
        entity1_id: i64,
        entity2_id: i64,
        properties: &Options,
    ) -> Result<(), BlueCatError> {
        let query = Query::new()
            .param("entity1Id", entity1_id)
            .param("entity2Id", entity2_id)
            .param("properties", properties);
        self.mutate("linkEntities", Method::PUT, query, None).await?;
        Ok(())
    }

    /// Remove the link between two entities
    pub async fn unlink_entities(
        &self,
        entity1_id: i64,
        entity2_id: i64,
        properties: &Options,
    ) -> Result<(), BlueCatError> {
        let query = Query::new()
            .param("entity1Id", entity1_id)
            .param("entity2Id", entity2_id)
            .param("properties", properties);
        self.mutate("unlinkEntities", Method::PUT, query, None).await?;
        Ok(())
    }

    /// Add a generic entity under a parent
    ///
    /// # Returns
    /// * `Ok(i64)` - Object id of the new entity
    /// * `Err(BlueCatError)` - If the request fails or the server rejects it
    pub async fn add_entity(&self, parent_id: i64, entity: &Entity) -> Result<i64, BlueCatError> {
        let body = serde_json::to_value(entity).map_err(|source| BlueCatError::Decode {
            operation: "addEntity".to_string(),
            source,
        })?;
        debug!("Adding {} '{}' under {}", entity.object_type, entity.name, parent_id);
        self.mutate_for_id("addEntity", Query::new().param("parentId", parent_id), Some(body))
            .await
    }

    /// Update an entity; `entity.id` selects the object
    pub async fn update(&self, entity: &Entity) -> Result<(), BlueCatError> {
        let body = serde_json::to_value(entity).map_err(|source| BlueCatError::Decode {
            operation: "update".to_string(),
            source,
        })?;
        self.mutate("update", Method::PUT, Query::new(), Some(body))
            .await?;
        Ok(())
    }

    /// Delete an object
    pub async fn delete(&self, object_id: i64) -> Result<(), BlueCatError> {
        debug!("Deleting object {}", object_id);
        self.mutate("delete", Method::DELETE, Query::new().param("objectId", object_id), None)
            .await?;
        Ok(())
    }
}
