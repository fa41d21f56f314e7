//! Deployment options, roles and status
//!
//! Deployment options are looked up on an entity (configuration, network,
//! range...) and optionally narrowed to one server; a `server_id` of 0 means
//! "any server". Roles tie an entity to a server interface for DNS or DHCP.

use crate::client::BlueCatClient;
use crate::common::{Options, Query};
use crate::error::BlueCatError;
use crate::models::{DeploymentOption, DeploymentRole, Entity};

/// Query shared by the named deployment option lookups
fn named_option(entity_id: i64, name: &str, server_id: i64) -> Query {
    Query::new()
        .param("entityId", entity_id)
        .param("name", name)
        .param("serverId", server_id)
}

impl BlueCatClient {
    /// Get a DHCPv6 client deployment option by name
    pub async fn get_dhcp6_client_deployment_option(
        &self,
        entity_id: i64,
        name: &str,
        server_id: i64,
    ) -> Result<DeploymentOption, BlueCatError> {
        self.get_json(
            "getDHCP6ClientDeploymentOption",
            named_option(entity_id, name, server_id),
        )
        .await
    }

    /// Get a DHCPv6 service deployment option by name
    pub async fn get_dhcp6_service_deployment_option(
        &self,
        entity_id: i64,
        name: &str,
        server_id: i64,
    ) -> Result<DeploymentOption, BlueCatError> {
        self.get_json(
            "getDHCP6ServiceDeploymentOption",
            named_option(entity_id, name, server_id),
        )
        .await
    }

    /// Get a DHCPv4 client deployment option by name, e.g. "router"
    pub async fn get_dhcp_client_deployment_option(
        &self,
        entity_id: i64,
        name: &str,
        server_id: i64,
    ) -> Result<DeploymentOption, BlueCatError> {
        self.get_json(
            "getDHCPClientDeploymentOption",
            named_option(entity_id, name, server_id),
        )
        .await
    }

    /// Get a DHCPv4 service deployment option by name, e.g. "default-lease-time"
    pub async fn get_dhcp_service_deployment_option(
        &self,
        entity_id: i64,
        name: &str,
        server_id: i64,
    ) -> Result<DeploymentOption, BlueCatError> {
        self.get_json(
            "getDHCPServiceDeploymentOption",
            named_option(entity_id, name, server_id),
        )
        .await
    }

    /// Get a vendor-specific DHCP option by the id of its definition
    pub async fn get_dhcp_vendor_deployment_option(
        &self,
        entity_id: i64,
        option_id: i64,
        server_id: i64,
    ) -> Result<DeploymentOption, BlueCatError> {
        let query = Query::new()
            .param("entityId", entity_id)
            .param("optionId", option_id)
            .param("serverId", server_id);
        self.get_json("getDHCPVendorDeploymentOption", query).await
    }

    /// Get a DNS deployment option by name, e.g. "allow-query"
    pub async fn get_dns_deployment_option(
        &self,
        entity_id: i64,
        name: &str,
        server_id: i64,
    ) -> Result<DeploymentOption, BlueCatError> {
        self.get_json(
            "getDNSDeploymentOption",
            named_option(entity_id, name, server_id),
        )
        .await
    }

    /// Get all deployment options of the given kinds set on an entity
    ///
    /// # Arguments
    /// * `entity_id` - Object the options are set on
    /// * `option_types` - Kinds to return, e.g. `["DNSOption", "DHCPServiceOption"]`;
    ///   empty for all kinds
    /// * `server_id` - Restrict to options for one server; 0 for any
    pub async fn get_deployment_options(
        &self,
        entity_id: i64,
        option_types: &[&str],
        server_id: i64,
    ) -> Result<Vec<DeploymentOption>, BlueCatError> {
        let query = Query::new()
            .param("entityId", entity_id)
            .param("optionTypes", option_types.join("|"))
            .param("serverId", server_id);
        self.get_json("getDeploymentOptions", query).await
    }

    /// Get the DHCP role of an entity on a server interface
    pub async fn get_dhcp_deployment_role(
        &self,
        entity_id: i64,
        server_interface_id: i64,
    ) -> Result<DeploymentRole, BlueCatError> {
        let query = Query::new()
            .param("entityId", entity_id)
            .param("serverInterfaceId", server_interface_id);
        self.get_json("getDHCPDeploymentRole", query).await
    }

    /// Get the DNS role of an entity on a server interface
    pub async fn get_dns_deployment_role(
        &self,
        entity_id: i64,
        server_interface_id: i64,
    ) -> Result<DeploymentRole, BlueCatError> {
        let query = Query::new()
            .param("entityId", entity_id)
            .param("serverInterfaceId", server_interface_id);
        self.get_json("getDNSDeploymentRole", query).await
    }

    /// Get the DNS role of an entity on a server interface within one view
    pub async fn get_dns_deployment_role_for_view(
        &self,
        entity_id: i64,
        server_interface_id: i64,
        view_id: i64,
    ) -> Result<DeploymentRole, BlueCatError> {
        let query = Query::new()
            .param("entityId", entity_id)
            .param("serverInterfaceId", server_interface_id)
            .param("viewId", view_id);
        self.get_json("getDNSDeploymentRoleForView", query).await
    }

    /// Get all roles assigned to an entity
    pub async fn get_deployment_roles(
        &self,
        entity_id: i64,
    ) -> Result<Vec<DeploymentRole>, BlueCatError> {
        self.get_json("getDeploymentRoles", Query::new().param("entityId", entity_id))
            .await
    }

    /// Get all roles served by a server
    pub async fn get_server_deployment_roles(
        &self,
        server_id: i64,
    ) -> Result<Vec<DeploymentRole>, BlueCatError> {
        self.get_json(
            "getServerDeploymentRoles",
            Query::new().param("serverId", server_id),
        )
        .await
    }

    /// Get the server a role is assigned to
    pub async fn get_server_for_role(&self, role_id: i64) -> Result<Entity, BlueCatError> {
        self.get_json("getServerForRole", Query::new().param("roleId", role_id))
            .await
    }

    /// Get the deployment status of a server, e.g. "1" for queued
    pub async fn get_server_deployment_status(
        &self,
        properties: &Options,
        server_id: i64,
    ) -> Result<String, BlueCatError> {
        let query = Query::new()
            .param("properties", properties)
            .param("serverId", server_id);
        self.get_scalar("getServerDeploymentStatus", query).await
    }

    /// Get the status of a deployment task started with a deployment token
    ///
    /// The status is a JSON document returned as text; it is not decoded.
    pub async fn get_deployment_task_status(
        &self,
        deployment_task_token: &str,
    ) -> Result<String, BlueCatError> {
        self.get_scalar(
            "getDeploymentTaskStatus",
            Query::new().param("deploymentTaskToken", deployment_task_token),
        )
        .await
    }
}
