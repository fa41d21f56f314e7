//! Configurations, locations, probes and server state

use crate::client::BlueCatClient;
use crate::common::Query;
use crate::error::BlueCatError;
use crate::models::{Data, Entity, UserDefinedField};

impl BlueCatClient {
    /// Get every location referenced by an object
    pub async fn get_all_used_locations(&self) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json("getAllUsedLocations", Query::new()).await
    }

    /// Get a location by its hierarchical code, e.g. "CA TOR"
    pub async fn get_location_by_code(&self, code: &str) -> Result<Entity, BlueCatError> {
        self.get_json("getLocationByCode", Query::new().param("code", code))
            .await
    }

    /// Names of all configuration groups, comma separated
    pub async fn get_configuration_groups(&self) -> Result<String, BlueCatError> {
        self.get_scalar("getConfigurationGroups", Query::new()).await
    }

    /// Get one setting of a configuration as a property list
    pub async fn get_configuration_setting(
        &self,
        configuration_id: i64,
        setting_name: &str,
    ) -> Result<String, BlueCatError> {
        let query = Query::new()
            .param("configurationId", configuration_id)
            .param("settingName", setting_name);
        self.get_scalar("getConfigurationSetting", query).await
    }

    /// Get the configurations in a configuration group
    pub async fn get_configurations_by_group(
        &self,
        group_name: &str,
    ) -> Result<Vec<Entity>, BlueCatError> {
        self.get_json(
            "getConfigurationsByGroup",
            Query::new().param("groupName", group_name),
        )
        .await
    }

    /// Get the data collected by a predefined probe
    pub async fn get_probe_data(&self, defined_probe: &str) -> Result<Data, BlueCatError> {
        self.get_json("getProbeData", Query::new().param("definedProbe", defined_probe))
            .await
    }

    /// Get the status of a predefined probe
    pub async fn get_probe_status(&self, defined_probe: &str) -> Result<String, BlueCatError> {
        self.get_scalar(
            "getProbeStatus",
            Query::new().param("definedProbe", defined_probe),
        )
        .await
    }

    /// Replication status of the Address Manager cluster
    pub async fn get_replication_info(&self) -> Result<String, BlueCatError> {
        self.get_scalar("getReplicationInfo", Query::new()).await
    }

    /// Host name, version and other system details as a property list
    pub async fn get_system_info(&self) -> Result<String, BlueCatError> {
        self.get_scalar("getSystemInfo", Query::new()).await
    }

    /// Status of a template application task
    pub async fn get_template_task_status(&self, task_id: &str) -> Result<String, BlueCatError> {
        self.get_scalar("getTemplateTaskStatus", Query::new().param("taskId", task_id))
            .await
    }

    /// Get the user-defined fields of an object type
    pub async fn get_user_defined_fields(
        &self,
        required_fields_only: bool,
        object_type: &str,
    ) -> Result<Vec<UserDefinedField>, BlueCatError> {
        let query = Query::new()
            .param("requiredFieldsOnly", required_fields_only)
            .param("type", object_type);
        self.get_json("getUserDefinedFields", query).await
    }

    /// Whether a migration file is still being processed
    pub async fn is_migration_running(&self, filename: &str) -> Result<bool, BlueCatError> {
        self.get_typed_scalar(
            "isMigrationRunning",
            Query::new().param("filename", filename),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{client, sent_query};
    use crate::error::BlueCatError;
    use crate::mock::MockTransport;

    #[tokio::test]
    async fn test_locations() {
        let mock = MockTransport::new();
        mock.respond(
            "getAllUsedLocations",
            200,
            r#"[{"id":61,"name":"Toronto","type":"Location","properties":"code=CA TOR|"}]"#,
        );
        mock.respond("getLocationByCode", 200, r#"{"id":61,"name":"Toronto","type":"Location"}"#);
        let client = client(&mock);

        let locations = client.get_all_used_locations().await.unwrap();
        assert_eq!(locations[0].properties, "code=CA TOR|");
        assert!(mock.last_request("getAllUsedLocations").unwrap().query.is_empty());

        let location = client.get_location_by_code("CA TOR").await.unwrap();
        assert_eq!(location.id, 61);
        assert_eq!(sent_query(&mock, "getLocationByCode"), "code=CA%20TOR");
    }

    #[tokio::test]
    async fn test_configuration_queries() {
        let mock = MockTransport::new();
        mock.respond("getConfigurationGroups", 200, "\"lab,prod\"");
        mock.respond("getConfigurationSetting", 200, "\"enabled=true|\"");
        mock.respond(
            "getConfigurationsByGroup",
            200,
            r#"[{"id":100,"name":"prod","type":"Configuration","properties":null}]"#,
        );
        let client = client(&mock);

        assert_eq!(client.get_configuration_groups().await.unwrap(), "lab,prod");
        assert_eq!(
            client
                .get_configuration_setting(100, "ReconciliationSetting")
                .await
                .unwrap(),
            "enabled=true|"
        );
        assert_eq!(
            sent_query(&mock, "getConfigurationSetting"),
            "configurationId=100&settingName=ReconciliationSetting"
        );

        let configurations = client.get_configurations_by_group("prod").await.unwrap();
        assert_eq!(configurations[0].properties, "");
        assert_eq!(sent_query(&mock, "getConfigurationsByGroup"), "groupName=prod");
    }

    #[tokio::test]
    async fn test_probes() {
        let mock = MockTransport::new();
        mock.respond(
            "getProbeData",
            200,
            r#"{"name":"LEASE_COUNT_PER_DATE","properties":"2026-10-19=42|"}"#,
        );
        mock.respond("getProbeStatus", 200, "\"COMPLETED\"");
        let client = client(&mock);

        let data = client.get_probe_data("LEASE_COUNT_PER_DATE").await.unwrap();
        assert_eq!(data.name, "LEASE_COUNT_PER_DATE");
        assert_eq!(data.properties, "2026-10-19=42|");

        assert_eq!(
            client.get_probe_status("LEASE_COUNT_PER_DATE").await.unwrap(),
            "COMPLETED"
        );
        assert_eq!(
            sent_query(&mock, "getProbeStatus"),
            "definedProbe=LEASE_COUNT_PER_DATE"
        );
    }

    #[tokio::test]
    async fn test_server_state_scalars() {
        let mock = MockTransport::new();
        mock.respond("getSystemInfo", 200, "\"hostName=bam|version=9.5.0|\"");
        mock.respond("getReplicationInfo", 200, "\"\"");
        mock.respond("getTemplateTaskStatus", 200, "\"{\"status\":\"COMPLETED\"}\"");
        let client = client(&mock);

        assert_eq!(client.get_system_info().await.unwrap(), "hostName=bam|version=9.5.0|");
        assert_eq!(client.get_replication_info().await.unwrap(), "");
        assert_eq!(
            client.get_template_task_status("t-1").await.unwrap(),
            "{\"status\":\"COMPLETED\"}"
        );
        assert_eq!(sent_query(&mock, "getTemplateTaskStatus"), "taskId=t-1");
    }

    #[tokio::test]
    async fn test_get_user_defined_fields() {
        let mock = MockTransport::new();
        mock.respond(
            "getUserDefinedFields",
            200,
            r#"[{"name":"owner","displayName":"Owner","type":"TEXT","defaultValue":null,"required":true,"hideFromSearch":false}]"#,
        );

        let fields = client(&mock)
            .get_user_defined_fields(true, "IP4Network")
            .await
            .unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].display_name, "Owner");
        assert_eq!(fields[0].field_type, "TEXT");
        assert_eq!(fields[0].default_value, "");
        assert!(fields[0].required);
        assert_eq!(
            sent_query(&mock, "getUserDefinedFields"),
            "requiredFieldsOnly=true&type=IP4Network"
        );
    }

    #[tokio::test]
    async fn test_is_migration_running() {
        let mock = MockTransport::new();
        mock.respond("isMigrationRunning", 200, "false");

        assert!(!client(&mock).is_migration_running("import.xml").await.unwrap());
        assert_eq!(sent_query(&mock, "isMigrationRunning"), "filename=import.xml");

        mock.respond("isMigrationRunning", 500, "Migration service unavailable");
        let err = client(&mock).is_migration_running("import.xml").await.unwrap_err();
        assert!(matches!(err, BlueCatError::Api { status: 500, .. }));
    }
}
