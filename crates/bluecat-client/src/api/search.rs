//! Search operations

use crate::client::BlueCatClient;
use crate::common::{Options, Query};
use crate::error::BlueCatError;
use crate::models::{Entity, ResponsePolicySearchResult};

impl BlueCatClient {
    /// Search entities of one type by property filters
    ///
    /// # Arguments
    /// * `filters` - Property filters, sent as `name=value|name=value`
    /// * `object_type` - Object type to search, e.g. "IP4Network"
    /// * `count` - Maximum number of results
    /// * `start` - Zero-based index of the first result
    ///
    /// # Example
    /// ```no_run
    /// # use bluecat_client::{BlueCatClient, Options};
    /// # async fn example(client: &BlueCatClient) -> Result<(), bluecat_client::BlueCatError> {
    /// let filters = Options::new().with("Location", "DC1");
    /// let networks = client.custom_search(&filters, "IP4Network", 100, 0).await?;
    /// # let _ = networks;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn custom_search(
        &self,
        filters: &Options,
        object_type: &str,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("filters", filters)
            .param("type", object_type)
            .page(count, start);
        self.get_json("customSearch", query).await
    }

    /// Search by keyword within a category, e.g. "ADDRESSES" or "RESOURCE_RECORD"
    pub async fn search_by_category(
        &self,
        keyword: &str,
        category: &str,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("keyword", keyword)
            .param("category", category)
            .page(count, start);
        self.get_json("searchByCategory", query).await
    }

    /// Search by keyword across object types
    ///
    /// `types` is a comma-separated list such as "IP4Block,IP4Network".
    pub async fn search_by_object_types(
        &self,
        keyword: &str,
        types: &str,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("keyword", keyword)
            .param("types", types)
            .page(count, start);
        self.get_json("searchByObjectTypes", query).await
    }

    /// Search response policy items in local policies and security feeds
    pub async fn search_response_policy_item(
        &self,
        keyword: &str,
        scope: &str,
        count: i32,
        start: i32,
    ) -> Result<Vec<ResponsePolicySearchResult>, BlueCatError> {
        let query = Query::new()
            .param("keyword", keyword)
            .param("scope", scope)
            .page(count, start);
        self.get_json("searchResponsePolicyItem", query).await
    }

    /// Find local response policies containing an item
    pub async fn find_response_policies_with_item(
        &self,
        configuration_id: i64,
        item_name: &str,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("configurationId", configuration_id)
            .param("itemName", item_name);
        self.get_json("findResponsePoliciesWithItem", query).await
    }
}
