//! IPv4 reconciliation: devices found by discovery policies

use crate::client::BlueCatClient;
use crate::common::Query;
use crate::error::BlueCatError;
use crate::models::Entity;

/// Query for lookups scoped to one device of a policy
fn device_query(device_id: i64, policy_id: i64) -> Query {
    Query::new()
        .param("deviceId", device_id)
        .param("policyId", policy_id)
}

impl BlueCatClient {
    /// Get one device discovered by a reconciliation policy
    pub async fn get_discovered_device(
        &self,
        device_id: i64,
        policy_id: i64,
    ) -> Result<Entity, BlueCatError> {
        self.get_json("getDiscoveredDevice", device_query(device_id, policy_id))
            .await
    }

    /// Get every device discovered by a reconciliation policy
    pub async fn get_discovered_devices(&self, policy_id: i64) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json(
            "getDiscoveredDevices",
            Query::new().param("policyId", policy_id),
        )
        .await
    }

    /// ARP entries seen on a discovered device
    pub async fn get_discovered_device_arp_entries(
        &self,
        device_id: i64,
        policy_id: i64,
    ) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json(
            "getDiscoveredDeviceArpEntries",
            device_query(device_id, policy_id),
        )
        .await
    }

    /// Hosts seen behind a discovered device
    pub async fn get_discovered_device_hosts(
        &self,
        device_id: i64,
        policy_id: i64,
    ) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json("getDiscoveredDeviceHosts", device_query(device_id, policy_id))
            .await
    }

    /// Interfaces of a discovered device
    pub async fn get_discovered_device_interfaces(
        &self,
        device_id: i64,
        policy_id: i64,
    ) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json(
            "getDiscoveredDeviceInterfaces",
            device_query(device_id, policy_id),
        )
        .await
    }

    /// MAC address table entries of a discovered device
    pub async fn get_discovered_device_mac_address_entries(
        &self,
        device_id: i64,
        policy_id: i64,
    ) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json(
            "getDiscoveredDeviceMacAddressEntries",
            device_query(device_id, policy_id),
        )
        .await
    }

    /// Networks routed by a discovered device
    pub async fn get_discovered_device_networks(
        &self,
        device_id: i64,
        policy_id: i64,
    ) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json(
            "getDiscoveredDeviceNetworks",
            device_query(device_id, policy_id),
        )
        .await
    }

    /// VLANs configured on a discovered device
    pub async fn get_discovered_device_vlans(
        &self,
        device_id: i64,
        policy_id: i64,
    ) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json("getDiscoveredDeviceVlans", device_query(device_id, policy_id))
            .await
    }
}
