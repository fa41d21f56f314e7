//! DNS zones and resource records

use crate::client::BlueCatClient;
use crate::common::{Options, Query};
use crate::error::BlueCatError;
use crate::models::Entity;
use tracing::debug;

impl BlueCatClient {
    /// Get alias (CNAME) records matching a hint
    ///
    /// `options` carries `hint` (e.g. `^web` for prefix matching) and
    /// `retrieveFields`.
    pub async fn get_aliases_by_hint(
        &self,
        options: &Options,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new().param("options", options).page(count, start);
        self.get_json("getAliasesByHint", query).await
    }

    /// Get host records matching a hint
    pub async fn get_host_records_by_hint(
        &self,
        options: &Options,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new().param("options", options).page(count, start);
        self.get_json("getHostRecordsByHint", query).await
    }

    /// Get zones below a container matching a hint
    pub async fn get_zones_by_hint(
        &self,
        container_id: i64,
        options: &Options,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("containerId", container_id)
            .param("options", options)
            .page(count, start);
        self.get_json("getZonesByHint", query).await
    }

    /// Get the key-signing keys of a signed zone
    ///
    /// # Arguments
    /// * `entity_id` - Zone object id
    /// * `format` - `TRUST_ANCHOR` or `DS_RECORD`
    pub async fn get_ksk(&self, entity_id: i64, format: &str) -> Result<String, BlueCatError> {
        let query = Query::new()
            .param("entityId", entity_id)
            .param("format", format);
        self.get_scalar("getKSK", query).await
    }

    /// Add a generic resource record (A, AAAA, MX, SRV, ...) to a view
    ///
    /// # Arguments
    /// * `absolute_name` - FQDN of the record
    /// * `rdata` - Record data in zone file syntax, e.g. "10.0.0.5"
    /// * `ttl` - Time to live; -1 inherits the zone default
    /// * `record_type` - Record type, e.g. "A"
    /// * `view_id` - View to add the record to
    /// * `properties` - Extra properties such as `comments`
    ///
    /// # Returns
    /// * `Ok(i64)` - Object id of the new record
    /// * `Err(BlueCatError::Rejected)` - The server refused the record
    pub async fn add_generic_record(
        &self,
        absolute_name: &str,
        rdata: &str,
        ttl: i64,
        record_type: &str,
        view_id: i64,
        properties: &Options,
    ) -> Result<i64, BlueCatError> {
        debug!("Adding {} record {} in view {}", record_type, absolute_name, view_id);
        let query = Query::new()
            .param("absoluteName", absolute_name)
            .param("rdata", rdata)
            .param("ttl", ttl)
            .param("type", record_type)
            .param("viewId", view_id)
            .param("properties", properties);
        self.mutate_for_id("addGenericRecord", query, None).await
    }

    /// Add a host record pointing at one or more addresses
    pub async fn add_host_record(
        &self,
        view_id: i64,
        absolute_name: &str,
        addresses: &[&str],
        ttl: i64,
        properties: &Options,
    ) -> Result<i64, BlueCatError> {
        debug!("Adding host record {} in view {}", absolute_name, view_id);
        let query = Query::new()
            .param("viewId", view_id)
            .param("absoluteName", absolute_name)
            .param("addresses", addresses.join(","))
            .param("ttl", ttl)
            .param("properties", properties);
        self.mutate_for_id("addHostRecord", query, None).await
    }

    /// Add an alias (CNAME) record
    pub async fn add_alias_record(
        &self,
        view_id: i64,
        absolute_name: &str,
        linked_record_name: &str,
        ttl: i64,
        properties: &Options,
    ) -> Result<i64, BlueCatError> {
        let query = Query::new()
            .param("viewId", view_id)
            .param("absoluteName", absolute_name)
            .param("linkedRecordName", linked_record_name)
            .param("ttl", ttl)
            .param("properties", properties);
        self.mutate_for_id("addAliasRecord", query, None).await
    }

    /// Add a TXT record
    pub async fn add_txt_record(
        &self,
        view_id: i64,
        absolute_name: &str,
        txt: &str,
        ttl: i64,
        properties: &Options,
    ) -> Result<i64, BlueCatError> {
        let query = Query::new()
            .param("viewId", view_id)
            .param("absoluteName", absolute_name)
            .param("txt", txt)
            .param("ttl", ttl)
            .param("properties", properties);
        self.mutate_for_id("addTXTRecord", query, None).await
    }
}
