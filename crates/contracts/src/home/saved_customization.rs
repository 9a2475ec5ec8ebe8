//! The locally persisted home-screen layout.
//!
//! On a successful save, the customization screen writes the enabled
//! sections (only those, in save order) to browser storage under
//! [`HOME_CUSTOMIZATION_KEY`]. The home page reads that artifact back to
//! decide which sections to render. The shape is camelCase JSON and is the
//! only contract between writer and reader.

use serde::{Deserialize, Serialize};

/// Storage key shared by the customization writer and the home-page reader.
pub const HOME_CUSTOMIZATION_KEY: &str = "homeCustomization";

/// One persisted section; `is_enabled` is always true in a well-formed
/// artifact but is kept in the shape so stale writers stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCustomizationItem {
    pub page_id: String,
    pub page_name: String,
    pub persian_title: String,
    pub is_enabled: bool,
    pub sort: i32,
}

/// Decode the persisted artifact. Callers map a decode failure to the
/// default-visibility policy (all sections shown); this function only
/// reports it.
pub fn decode_saved_customization(
    raw: &str,
) -> Result<Vec<SavedCustomizationItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Page names enabled by a decoded artifact, in persisted order.
pub fn enabled_page_names(items: &[SavedCustomizationItem]) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.is_enabled)
        .map(|item| item.page_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_camel_case_artifact() {
        let raw = r#"[
            {"pageId": "1", "pageName": "dynamicCard", "persianTitle": "کارت پویا", "isEnabled": true, "sort": 0},
            {"pageId": "3", "pageName": "availablefunds", "persianTitle": "موجودی صندوق‌ها", "isEnabled": true, "sort": 1}
        ]"#;
        let items = decode_saved_customization(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].page_name, "dynamicCard");
        assert_eq!(items[1].sort, 1);
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(decode_saved_customization("invalid-json").is_err());
        assert!(decode_saved_customization(r#"{"not": "an array"}"#).is_err());
    }

    #[test]
    fn test_enabled_page_names_keeps_order_and_filters() {
        let items = vec![
            SavedCustomizationItem {
                page_id: "2".to_string(),
                page_name: "salesrevenue".to_string(),
                persian_title: "فروش و درآمد".to_string(),
                is_enabled: true,
                sort: 0,
            },
            SavedCustomizationItem {
                page_id: "5".to_string(),
                page_name: "cheques".to_string(),
                persian_title: "چک‌ها".to_string(),
                is_enabled: false,
                sort: 1,
            },
            SavedCustomizationItem {
                page_id: "1".to_string(),
                page_name: "dynamicCard".to_string(),
                persian_title: "کارت پویا".to_string(),
                is_enabled: true,
                sort: 2,
            },
        ];
        assert_eq!(enabled_page_names(&items), vec!["salesrevenue", "dynamicCard"]);
    }
}
