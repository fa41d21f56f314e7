//! IP address management
//!
//! IPv4/IPv6 address and network lookups, next-free allocation and the
//! allocation mutations. Allocation calls answer with a bare string (an
//! address, a CIDR or a property list) which is returned as-is.

use crate::client::BlueCatClient;
use crate::common::{Options, Query};
use crate::error::BlueCatError;
use crate::models::Entity;
use tracing::debug;

impl BlueCatClient {
    /// Get an IPv4 address object within a configuration, block or network
    pub async fn get_ip4_address(
        &self,
        address: &str,
        container_id: i64,
    ) -> Result<Entity, BlueCatError> {
        let query = Query::new()
            .param("address", address)
            .param("containerId", container_id);
        self.get_json("getIP4Address", query).await
    }

    /// Get an IPv6 address object within a container
    pub async fn get_ip6_address(
        &self,
        address: &str,
        container_id: i64,
    ) -> Result<Entity, BlueCatError> {
        let query = Query::new()
            .param("address", address)
            .param("containerId", container_id);
        self.get_json("getIP6Address", query).await
    }

    /// Get IPv4 networks matching a hint, e.g. `hint=10.1|overrideType=HostRecord`
    pub async fn get_ip4_networks_by_hint(
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
        self.get_json("getIP4NetworksByHint", query).await
    }

    /// Get IPv6 blocks or networks matching a hint
    pub async fn get_ip6_objects_by_hint(
        &self,
        container_id: i64,
        object_type: &str,
        options: &Options,
        count: i32,
        start: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("containerId", container_id)
            .param("objectType", object_type)
            .param("options", options)
            .page(count, start);
        self.get_json("getIP6ObjectsByHint", query).await
    }

    /// Get the block, network or range of `object_type` containing an address
    pub async fn get_ip_range_by_ip(
        &self,
        address: &str,
        container_id: i64,
        object_type: &str,
    ) -> Result<Entity, BlueCatError> {
        let query = Query::new()
            .param("address", address)
            .param("containerId", container_id)
            .param("type", object_type);
        self.get_json("getIPRangeByIP", query).await
    }

    /// Get a MAC address object in a configuration
    pub async fn get_mac_address(
        &self,
        configuration_id: i64,
        mac_address: &str,
    ) -> Result<Entity, BlueCatError> {
        let query = Query::new()
            .param("configurationId", configuration_id)
            .param("macAddress", mac_address);
        self.get_json("getMACAddress", query).await
    }

    /// Largest range a DHCP range may be resized to, as `start-end`
    pub async fn get_max_allowed_range(&self, range_id: i64) -> Result<String, BlueCatError> {
        self.get_scalar("getMaxAllowedRange", Query::new().param("rangeId", range_id))
            .await
    }

    /// Get the address objects linked to a network's properties
    pub async fn get_network_linked_properties(
        &self,
        network_id: i64,
    ) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json(
            "getNetworkLinkedProperties",
            Query::new().param("networkId", network_id),
        )
        .await
    }

    /// Next unallocated IPv4 address in a network, without reserving it
    pub async fn get_next_available_ip4_address(
        &self,
        parent_id: i64,
    ) -> Result<String, BlueCatError> {
        self.get_scalar(
            "getNextAvailableIP4Address",
            Query::new().param("parentId", parent_id),
        )
        .await
    }

    /// Next free IPv4 network of `size` addresses in a block
    ///
    /// # Arguments
    /// * `auto_create` - Create the network if it does not exist yet
    /// * `is_larger_allowed` - Return a larger network if no exact fit exists
    /// * `parent_id` - Block to search
    /// * `size` - Number of addresses
    ///
    /// # Returns
    /// * `Ok(String)` - Object id of the network, as text
    pub async fn get_next_available_ip4_network(
        &self,
        auto_create: bool,
        is_larger_allowed: bool,
        parent_id: i64,
        size: i64,
    ) -> Result<String, BlueCatError> {
        let query = Query::new()
            .param("autoCreate", auto_create)
            .param("isLargerAllowed", is_larger_allowed)
            .param("parentId", parent_id)
            .param("size", size);
        self.get_scalar("getNextAvailableIP4Network", query).await
    }

    /// Next free block, network or range of `size` addresses
    pub async fn get_next_available_ip_range(
        &self,
        parent_id: i64,
        properties: &Options,
        size: i64,
        object_type: &str,
    ) -> Result<Entity, BlueCatError> {
        let query = Query::new()
            .param("parentId", parent_id)
            .param("properties", properties)
            .param("size", size)
            .param("type", object_type);
        self.get_json("getNextAvailableIPRange", query).await
    }

    /// Up to `count` free ranges of `size` addresses
    pub async fn get_next_available_ip_ranges(
        &self,
        parent_id: i64,
        properties: &Options,
        size: i64,
        object_type: &str,
        count: i32,
    ) -> Result<Vec<Entity>, BlueCatError> {
        let query = Query::new()
            .param("parentId", parent_id)
            .param("properties", properties)
            .param("size", size)
            .param("type", object_type)
            .param("count", count);
        self.get_json("getNextAvailableIPRanges", query).await
    }

    /// Next available IPv4 address of a network or configuration
    ///
    /// `properties` may carry `offset` and `excludeDHCPRange` to steer the pick.
    pub async fn get_next_ip4_address(
        &self,
        parent_id: i64,
        properties: &Options,
    ) -> Result<String, BlueCatError> {
        let query = Query::new()
            .param("parentId", parent_id)
            .param("properties", properties);
        self.get_scalar("getNextIP4Address", query).await
    }

    /// Additional addresses of a server interface, as a property list
    pub async fn get_additional_ip_addresses(
        &self,
        adonis_id: i64,
        properties: &Options,
    ) -> Result<String, BlueCatError> {
        let query = Query::new()
            .param("adonisId", adonis_id)
            .param("properties", properties);
        self.get_scalar("getAdditionalIPAddresses", query).await
    }

    /// Whether an address is allocated to a MAC address
    pub async fn is_address_allocated(
        &self,
        configuration_id: i64,
        ip_address: &str,
        mac_address: &str,
    ) -> Result<bool, BlueCatError> {
        let query = Query::new()
            .param("configurationId", configuration_id)
            .param("ipAddress", ip_address)
            .param("macAddress", mac_address);
        self.get_typed_scalar("isAddressAllocated", query).await
    }

    /// Networks sharing a shared-network tag
    pub async fn get_shared_networks(&self, tag_id: i64) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json("getSharedNetworks", Query::new().param("tagId", tag_id))
            .await
    }

    /// Assign an IPv4 address
    ///
    /// # Arguments
    /// * `configuration_id` - Configuration holding the address
    /// * `ip4_address` - Address to assign
    /// * `mac_address` - MAC address to bind; empty for none
    /// * `host_info` - `fqdn,viewId,reverseFlag,sameAsZoneFlag`; empty for none
    /// * `action` - MAKE_STATIC, MAKE_RESERVED or MAKE_DHCP_RESERVED
    /// * `properties` - Extra properties such as `name`
    ///
    /// # Returns
    /// * `Ok(i64)` - Object id of the assigned address
    /// * `Err(BlueCatError::Rejected)` - The address could not be assigned
    pub async fn assign_ip4_address(
        &self,
        configuration_id: i64,
        ip4_address: &str,
        mac_address: &str,
        host_info: &str,
        action: &str,
        properties: &Options,
    ) -> Result<i64, BlueCatError> {
        debug!("Assigning {} ({}) in configuration {}", ip4_address, action, configuration_id);
        let query = Query::new()
            .param("configurationId", configuration_id)
            .param("ip4Address", ip4_address)
            .param("macAddress", mac_address)
            .param("hostInfo", host_info)
            .param("action", action)
            .param("properties", properties);
        self.mutate_for_id("assignIP4Address", query, None).await
    }

    /// Add an IPv4 network to a block
    pub async fn add_ip4_network(
        &self,
        block_id: i64,
        cidr: &str,
        properties: &Options,
    ) -> Result<i64, BlueCatError> {
        debug!("Adding network {} to block {}", cidr, block_id);
        let query = Query::new()
            .param("blockId", block_id)
            .param("CIDR", cidr)
            .param("properties", properties);
        self.mutate_for_id("addIP4Network", query, None).await
    }
}
