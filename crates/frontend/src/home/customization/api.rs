//! REST access for the customization screen.
//!
//! The page catalog changes rarely, so its response is cached
//! module-locally for five minutes. The display setting is the user's live
//! toggle state and is always refetched, so a save made elsewhere never
//! shows stale toggles here.

use std::cell::RefCell;

use contracts::home::display_setting::{
    DisplaySettingEntry, PageCatalogEntry, SaveDisplaySettingRequest,
};
use contracts::shared::envelope::ApiError;

use crate::shared::api_client::{get_envelope, post_envelope};

const CATALOG_FRESH_MS: f64 = 5.0 * 60.0 * 1000.0;

thread_local! {
    // (fetched-at ms, entries); WASM is single threaded, so a thread local
    // is the whole story.
    static CATALOG_CACHE: RefCell<Option<(f64, Vec<PageCatalogEntry>)>> = const { RefCell::new(None) };
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Fetch the page catalog, served from cache while fresh.
pub async fn fetch_page_catalog() -> Result<Vec<PageCatalogEntry>, ApiError> {
    let cached = CATALOG_CACHE.with(|cache| {
        cache.borrow().as_ref().and_then(|(fetched_at, entries)| {
            (now_ms() - fetched_at < CATALOG_FRESH_MS).then(|| entries.clone())
        })
    });
    if let Some(entries) = cached {
        log::debug!("Page catalog served from cache ({} entries)", entries.len());
        return Ok(entries);
    }

    let entries: Vec<PageCatalogEntry> = get_envelope("/UserAuth/GetPageName").await?;
    CATALOG_CACHE.with(|cache| {
        *cache.borrow_mut() = Some((now_ms(), entries.clone()));
    });
    Ok(entries)
}

/// Fetch the user's current enabled/sort state. Never cached.
pub async fn fetch_display_setting() -> Result<Vec<DisplaySettingEntry>, ApiError> {
    get_envelope("/UserAuth/GetDisplaySetting").await
}

/// Persist a new display setting. The envelope's `Data` carries nothing of
/// interest; business failure surfaces as `ApiError::Business`.
pub async fn save_display_setting(request: &SaveDisplaySettingRequest) -> Result<(), ApiError> {
    let _: serde_json::Value = post_envelope("/UserAuth/DisplaySetting", request).await?;
    Ok(())
}
