//! Which sections does the home page show?
//!
//! `SectionVisibility` is the read side of the customization subsystem. It
//! is coupled to the customization screen only through the persisted
//! `homeCustomization` artifact: on startup it decodes that artifact, and a
//! missing or corrupt value falls back to full visibility (every known
//! [`PageKind`]). Saves from other browser tabs arrive through the
//! `storage` event; a save in this tab calls [`SectionVisibility::apply_saved`]
//! directly, because the event never fires in the writing document.

use contracts::home::page_kind::PageKind;
use contracts::home::saved_customization::{
    decode_saved_customization, enabled_page_names, SavedCustomizationItem,
    HOME_CUSTOMIZATION_KEY,
};
use leptos::prelude::*;

use crate::shared::storage;

/// Context handle over the enabled-section set.
#[derive(Clone, Copy)]
pub struct SectionVisibility {
    /// Enabled page names in persisted order.
    enabled: RwSignal<Vec<String>>,
}

/// Decode a raw persisted value into the enabled-name list.
///
/// `None` (no artifact) and unparseable input both mean "show everything".
fn enabled_from_raw(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return all_known_sections();
    };
    match decode_saved_customization(raw) {
        Ok(items) => enabled_page_names(&items),
        Err(e) => {
            log::warn!("Unreadable home customization, showing all sections: {}", e);
            all_known_sections()
        }
    }
}

fn all_known_sections() -> Vec<String> {
    PageKind::ALL.iter().map(|kind| kind.key().to_string()).collect()
}

impl SectionVisibility {
    /// Build the context: read the persisted artifact and watch for writes
    /// from other tabs.
    pub fn new() -> Self {
        let initial = enabled_from_raw(storage::get_raw(HOME_CUSTOMIZATION_KEY).as_deref());
        let enabled = RwSignal::new(initial);

        storage::on_external_change(HOME_CUSTOMIZATION_KEY, move |new_value| {
            log::debug!("Home customization changed in another tab");
            enabled.set(enabled_from_raw(new_value.as_deref()));
        });

        Self { enabled }
    }

    /// Membership test used by the home page renderer.
    pub fn is_section_enabled(&self, page_name: &str) -> bool {
        self.enabled.with(|names| names.iter().any(|n| n == page_name))
    }

    /// Enabled page names in persisted order.
    pub fn ordered_sections(&self) -> Vec<String> {
        self.enabled.get()
    }

    /// Same-tab update after a successful save.
    pub fn apply_saved(&self, items: &[SavedCustomizationItem]) {
        self.enabled.set(enabled_page_names(items));
    }
}

/// Hook to use the section visibility context.
pub fn use_section_visibility() -> SectionVisibility {
    use_context::<SectionVisibility>()
        .expect("SectionVisibility not found. Wrap your app with the App root component.")
}
