//! Wire DTOs for the `/UserAuth` display-setting endpoints.
//!
//! The server speaks PascalCase, matching the response envelope.

use serde::{Deserialize, Serialize};

/// One available dashboard section, from `GET /UserAuth/GetPageName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageCatalogEntry {
    pub page_id: String,
    pub page_name: String,
}

/// The user's saved state for one enabled section, from
/// `GET /UserAuth/GetDisplaySetting`. Presence in the list means "enabled".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisplaySettingEntry {
    pub page_name: String,
    pub sort: i32,
}

/// One entry of the write payload, `Sort` = final array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisplaySettingItem {
    pub page_id: String,
    pub is_active: bool,
    pub sort: i32,
}

/// Body of `POST /UserAuth/DisplaySetting`, one entry per known page in
/// final save order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDisplaySettingRequest {
    #[serde(rename = "DisplaySetting")]
    pub display_setting: Vec<DisplaySettingItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_pascal_case() {
        let entry: PageCatalogEntry =
            serde_json::from_str(r#"{"PageId": "3", "PageName": "cheques"}"#).unwrap();
        assert_eq!(entry.page_id, "3");
        assert_eq!(entry.page_name, "cheques");
    }

    #[test]
    fn test_save_request_wire_shape() {
        let request = SaveDisplaySettingRequest {
            display_setting: vec![DisplaySettingItem {
                page_id: "1".to_string(),
                is_active: true,
                sort: 0,
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "DisplaySetting": [{"PageId": "1", "IsActive": true, "Sort": 0}]
            })
        );
    }
}
