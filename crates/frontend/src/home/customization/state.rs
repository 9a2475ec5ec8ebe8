//! Pure list operations behind the customization screen.
//!
//! The editable state is a `Vec<CustomizationItem>` built by joining the
//! server's page catalog with the user's saved display setting. Everything
//! here is synchronous and DOM-free; the view-model owns the signals and
//! the network.

use contracts::home::display_setting::{
    DisplaySettingEntry, DisplaySettingItem, PageCatalogEntry, SaveDisplaySettingRequest,
};
use contracts::home::page_kind::PageKind;
use contracts::home::saved_customization::SavedCustomizationItem;

/// One editable row of the customization screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationItem {
    pub page_id: String,
    pub page_name: String,
    pub persian_title: String,
    pub is_enabled: bool,
    pub sort: i32,
}

/// Join catalog and saved setting into the editable list.
///
/// Every catalog entry appears exactly once: enabled iff its page name is
/// present in the setting, `sort` taken from the matching entry (0 when
/// absent). The result is sorted ascending by `sort`; the sort is stable,
/// so items sharing a sort value keep catalog order.
pub fn merge_catalog_with_setting(
    catalog: &[PageCatalogEntry],
    setting: &[DisplaySettingEntry],
) -> Vec<CustomizationItem> {
    let mut items: Vec<CustomizationItem> = catalog
        .iter()
        .map(|entry| {
            let saved = setting.iter().find(|s| s.page_name == entry.page_name);
            CustomizationItem {
                page_id: entry.page_id.clone(),
                page_name: entry.page_name.clone(),
                persian_title: PageKind::title_for_key(&entry.page_name),
                is_enabled: saved.is_some(),
                sort: saved.map(|s| s.sort).unwrap_or(0),
            }
        })
        .collect();
    items.sort_by_key(|item| item.sort);
    items
}

/// Flip one item's enabled flag. Unknown ids are a no-op; no other item is
/// touched.
pub fn toggle_item(items: &mut [CustomizationItem], page_id: &str) {
    if let Some(item) = items.iter_mut().find(|item| item.page_id == page_id) {
        item.is_enabled = !item.is_enabled;
    }
}

/// Move the item `active_id` to `over_id`'s index, then rewrite every
/// item's `sort` to its new 0-based position. Prior sort values are
/// discarded. A no-op when either id is absent.
pub fn reorder_items(items: &mut Vec<CustomizationItem>, active_id: &str, over_id: &str) {
    let active_index = items.iter().position(|item| item.page_id == active_id);
    let over_index = items.iter().position(|item| item.page_id == over_id);
    let (Some(from), Some(to)) = (active_index, over_index) else {
        return;
    };

    let moved = items.remove(from);
    items.insert(to, moved);

    for (index, item) in items.iter_mut().enumerate() {
        item.sort = index as i32;
    }
}

/// Build the write payload: one entry per item in current order, `Sort` =
/// array index.
pub fn build_save_request(items: &[CustomizationItem]) -> SaveDisplaySettingRequest {
    SaveDisplaySettingRequest {
        display_setting: items
            .iter()
            .enumerate()
            .map(|(index, item)| DisplaySettingItem {
                page_id: item.page_id.clone(),
                is_active: item.is_enabled,
                sort: index as i32,
            })
            .collect(),
    }
}

/// The subset persisted locally on a successful save: enabled items only,
/// in save order.
pub fn enabled_subset(items: &[CustomizationItem]) -> Vec<SavedCustomizationItem> {
    items
        .iter()
        .filter(|item| item.is_enabled)
        .map(|item| SavedCustomizationItem {
            page_id: item.page_id.clone(),
            page_name: item.page_name.clone(),
            persian_title: item.persian_title.clone(),
            is_enabled: true,
            sort: item.sort,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<PageCatalogEntry> {
        vec![
            PageCatalogEntry {
                page_id: "1".to_string(),
                page_name: "dynamicCard".to_string(),
            },
            PageCatalogEntry {
                page_id: "2".to_string(),
                page_name: "salesrevenue".to_string(),
            },
            PageCatalogEntry {
                page_id: "3".to_string(),
                page_name: "availablefunds".to_string(),
            },
        ]
    }

    fn setting() -> Vec<DisplaySettingEntry> {
        vec![
            DisplaySettingEntry {
                page_name: "dynamicCard".to_string(),
                sort: 0,
            },
            DisplaySettingEntry {
                page_name: "availablefunds".to_string(),
                sort: 1,
            },
        ]
    }

    #[test]
    fn test_merge_completeness() {
        let items = merge_catalog_with_setting(&catalog(), &setting());
        assert_eq!(items.len(), 3);
        for entry in catalog() {
            assert_eq!(
                items.iter().filter(|i| i.page_id == entry.page_id).count(),
                1
            );
        }
    }

    #[test]
    fn test_merge_enabled_membership_and_sort() {
        let items = merge_catalog_with_setting(&catalog(), &setting());
        // Stable sort: disabled salesrevenue (sort 0) ties with dynamicCard
        // (sort 0) and keeps catalog order behind it.
        assert_eq!(items[0].page_name, "dynamicCard");
        assert!(items[0].is_enabled);
        assert_eq!(items[0].sort, 0);
        assert_eq!(items[1].page_name, "salesrevenue");
        assert!(!items[1].is_enabled);
        assert_eq!(items[1].sort, 0);
        assert_eq!(items[2].page_name, "availablefunds");
        assert!(items[2].is_enabled);
        assert_eq!(items[2].sort, 1);
    }

    #[test]
    fn test_merge_resolves_persian_titles_with_fallback() {
        let mut cat = catalog();
        cat.push(PageCatalogEntry {
            page_id: "99".to_string(),
            page_name: "futureWidget".to_string(),
        });
        let items = merge_catalog_with_setting(&cat, &[]);
        assert_eq!(items[0].persian_title, "کارت پویا");
        assert_eq!(
            items.iter().find(|i| i.page_id == "99").unwrap().persian_title,
            "futureWidget"
        );
    }

    #[test]
    fn test_toggle_isolation() {
        let mut items = merge_catalog_with_setting(&catalog(), &setting());
        let before = items.clone();
        toggle_item(&mut items, "2");
        for (after, before) in items.iter().zip(&before) {
            if after.page_id == "2" {
                assert_eq!(after.is_enabled, !before.is_enabled);
                assert_eq!(after.sort, before.sort);
                assert_eq!(after.page_name, before.page_name);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut items = merge_catalog_with_setting(&catalog(), &setting());
        let before = items.clone();
        toggle_item(&mut items, "does-not-exist");
        assert_eq!(items, before);
    }

    #[test]
    fn test_reorder_moves_and_reindexes() {
        let mut items = merge_catalog_with_setting(&catalog(), &setting());
        // ['1', '2', '3'] -> drag '3' onto '1' -> ['3', '1', '2']
        reorder_items(&mut items, "3", "1");
        let ids: Vec<&str> = items.iter().map(|i| i.page_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        let sorts: Vec<i32> = items.iter().map(|i| i.sort).collect();
        assert_eq!(sorts, vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_target_index_is_pre_move_index() {
        let mut items = merge_catalog_with_setting(&catalog(), &setting());
        reorder_items(&mut items, "1", "3");
        let ids: Vec<&str> = items.iter().map(|i| i.page_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_reorder_unknown_id_is_noop() {
        let mut items = merge_catalog_with_setting(&catalog(), &setting());
        let before = items.clone();
        reorder_items(&mut items, "1", "missing");
        assert_eq!(items, before);
        reorder_items(&mut items, "missing", "1");
        assert_eq!(items, before);
    }

    #[test]
    fn test_build_save_request_uses_positional_sort() {
        let mut items = merge_catalog_with_setting(&catalog(), &setting());
        toggle_item(&mut items, "2");
        let request = build_save_request(&items);
        assert_eq!(request.display_setting.len(), 3);
        for (index, entry) in request.display_setting.iter().enumerate() {
            assert_eq!(entry.sort, index as i32);
        }
        assert!(request.display_setting.iter().all(|e| {
            let item = items.iter().find(|i| i.page_id == e.page_id).unwrap();
            e.is_active == item.is_enabled
        }));
    }

    #[test]
    fn test_enabled_subset_filters_and_keeps_order() {
        let mut items = merge_catalog_with_setting(&catalog(), &setting());
        reorder_items(&mut items, "3", "1");
        let subset = enabled_subset(&items);
        let ids: Vec<&str> = subset.iter().map(|i| i.page_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert!(subset.iter().all(|i| i.is_enabled));
    }
}
