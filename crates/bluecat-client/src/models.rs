//! BlueCat API models
//!
//! These models match the object shapes of the Address Manager REST API v1.
//! Every field is copied verbatim from the response; a field that is missing
//! or `null` takes the zero value of its type. The `properties` strings are
//! pipe-delimited `name=value` lists whose contents depend on the object type
//! and are not interpreted here.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat `null` like an absent field
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Generic object: networks, addresses, zones, records, configurations...
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub object_type: String, // e.g. "IP4Network", "HostRecord"
    #[serde(default, deserialize_with = "null_default")]
    pub properties: String, // e.g. "CIDR=10.0.0.0/24|"
}

/// Access right granted to a user on an entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRight {
    #[serde(default, deserialize_with = "null_default")]
    pub entity_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub value: String, // HIDE, VIEW, ADD, CHANGE, FULL
    #[serde(default, deserialize_with = "null_default")]
    pub overrides: String,
    #[serde(default, deserialize_with = "null_default")]
    pub properties: String,
}

/// DHCP or DNS deployment option
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentOption {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub option_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_default")]
    pub properties: String,
}

/// Service role assigned to a server interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRole {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub role_type: String, // MASTER, SLAVE, FORWARDER, ...
    #[serde(default, deserialize_with = "null_default")]
    pub service: String, // DNS or DHCP
    #[serde(default, deserialize_with = "null_default")]
    pub entity_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub server_interface_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub properties: String,
}

/// Definition of a user-defined field for an object type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedField {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub field_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub default_value: String,
    #[serde(default, deserialize_with = "null_default")]
    pub validator_properties: String,
    #[serde(default, deserialize_with = "null_default")]
    pub properties: String,
    #[serde(default, deserialize_with = "null_default")]
    pub predefined_values: String,
    #[serde(default, deserialize_with = "null_default")]
    pub required: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub hide_from_search: bool,
}

/// Named data payload, as returned by probes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub properties: String,
}

/// Response policy item found in a local policy or a security feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePolicySearchResult {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub policy_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub parent_ids: String,
    #[serde(default, deserialize_with = "null_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_default")]
    pub config_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_fields_copied_verbatim() {
        let body = r#"{"id":5,"name":"net1","type":"IP4Network","properties":"CIDR=10.0.0.0/24|allowDuplicateHost=disable|"}"#;
        let entity: Entity = serde_json::from_str(body).unwrap();
        assert_eq!(entity.id, 5);
        assert_eq!(entity.name, "net1");
        assert_eq!(entity.object_type, "IP4Network");
        assert_eq!(
            entity.properties,
            "CIDR=10.0.0.0/24|allowDuplicateHost=disable|"
        );
    }

    #[test]
    fn test_null_and_missing_fields_take_zero_value() {
        // getEntityById answers with nulls for an unknown id
        let entity: Entity =
            serde_json::from_str(r#"{"id":0,"name":null,"type":null,"properties":null}"#).unwrap();
        assert_eq!(entity, Entity::default());

        let role: DeploymentRole = serde_json::from_str(r#"{"id":7,"service":"DNS"}"#).unwrap();
        assert_eq!(role.id, 7);
        assert_eq!(role.service, "DNS");
        assert_eq!(role.server_interface_id, 0);
        assert!(role.properties.is_empty());
    }

    #[test]
    fn test_user_defined_field_camel_case() {
        let body = r#"{
            "name":"owner",
            "displayName":"Owner",
            "type":"TEXT",
            "defaultValue":"",
            "validatorProperties":"maxLength=64",
            "properties":"",
            "predefinedValues":null,
            "required":true,
            "hideFromSearch":false
        }"#;
        let field: UserDefinedField = serde_json::from_str(body).unwrap();
        assert_eq!(field.display_name, "Owner");
        assert_eq!(field.field_type, "TEXT");
        assert_eq!(field.validator_properties, "maxLength=64");
        assert!(field.predefined_values.is_empty());
        assert!(field.required);
        assert!(!field.hide_from_search);
    }

    #[test]
    fn test_access_right_and_policy_result() {
        let right: AccessRight = serde_json::from_str(
            r#"{"entityId":10,"userId":3,"value":"VIEW","overrides":"HostRecord=CHANGE|","properties":null}"#,
        )
        .unwrap();
        assert_eq!(right.entity_id, 10);
        assert_eq!(right.user_id, 3);
        assert_eq!(right.overrides, "HostRecord=CHANGE|");

        let result: ResponsePolicySearchResult = serde_json::from_str(
            r#"{"name":"bad.example","policyType":"BLACKLIST","parentIds":"12,13","category":"","configId":1}"#,
        )
        .unwrap();
        assert_eq!(result.policy_type, "BLACKLIST");
        assert_eq!(result.parent_ids, "12,13");
        assert_eq!(result.config_id, 1);
    }

    #[test]
    fn test_entity_serializes_type_field() {
        let entity = Entity {
            id: 0,
            name: "www".to_string(),
            object_type: "HostRecord".to_string(),
            properties: "ttl=300|".to_string(),
        };
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["type"], "HostRecord");
        assert_eq!(value["properties"], "ttl=300|");
    }
}
