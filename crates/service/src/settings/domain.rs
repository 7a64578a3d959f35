use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a create request. The id is always generated by the store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SettingsCreate {
    pub data: Value,
}

/// Body of a replace request; `data` overwrites the stored document entirely.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SettingsUpdate {
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SettingsResponse {
    pub id: String,
    pub data: Value,
}

impl From<models::settings::Model> for SettingsResponse {
    fn from(m: models::settings::Model) -> Self {
        Self { id: m.id, data: m.data }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SettingsList {
    pub items: Vec<SettingsResponse>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_payload_requires_data() {
        assert!(serde_json::from_value::<SettingsCreate>(json!({})).is_err());
        let p: SettingsCreate = serde_json::from_value(json!({"data": [1, "a"]})).unwrap();
        assert_eq!(p.data, json!([1, "a"]));
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let p: SettingsUpdate = serde_json::from_value(json!({"id": "mine", "data": {"k": 1}})).unwrap();
        assert_eq!(serde_json::to_value(&p).unwrap(), json!({"data": {"k": 1}}));
    }

    #[test]
    fn list_serializes_with_wire_field_names() {
        let list = SettingsList {
            items: vec![SettingsResponse { id: "a".into(), data: json!({"theme": "dark"}) }],
            total: 1,
            page: 1,
            page_size: 10,
        };
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({"items": [{"id": "a", "data": {"theme": "dark"}}], "total": 1, "page": 1, "page_size": 10})
        );
    }
}
