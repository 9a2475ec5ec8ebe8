//! ViewModel for the home customization screen.
//!
//! Uses the simplified MVVM pattern: signal fields, commands for the async
//! operations, pure list logic delegated to [`super::state`].
//!
//! Unsaved edits are protected by a Clean/Dirty tag: fetched server state
//! replaces the editable list only while `Clean`. A refetch resolving after
//! the user has toggled or dragged is dropped (and logged) instead of
//! silently clobbering their edits; `discard_changes` is the explicit way
//! back.

use contracts::home::display_setting::{DisplaySettingEntry, PageCatalogEntry};
use contracts::home::saved_customization::HOME_CUSTOMIZATION_KEY;
use contracts::shared::envelope::ApiError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use super::state::{
    build_save_request, enabled_subset, merge_catalog_with_setting, reorder_items, toggle_item,
    CustomizationItem,
};
use crate::home::settings_reader::SectionVisibility;
use crate::shared::i18n::{translate_server_message, GENERIC_ERROR_FA, SAVE_SUCCESS_FA};
use crate::shared::notify::NotifyService;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditState {
    /// Editable list mirrors the last fetched server state.
    Clean,
    /// The user has unsaved toggles/reorders.
    Dirty,
}

#[derive(Clone, Copy)]
pub struct CustomizationViewModel {
    pub items: RwSignal<Vec<CustomizationItem>>,
    pub edit_state: RwSignal<EditState>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    server_catalog: RwSignal<Vec<PageCatalogEntry>>,
    server_setting: RwSignal<Vec<DisplaySettingEntry>>,
}

impl CustomizationViewModel {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            edit_state: RwSignal::new(EditState::Clean),
            is_loading: RwSignal::new(false),
            is_saving: RwSignal::new(false),
            error: RwSignal::new(None),
            server_catalog: RwSignal::new(Vec::new()),
            server_setting: RwSignal::new(Vec::new()),
        }
    }

    /// Load catalog and display setting; runs on mount.
    ///
    /// The catalog may come from its five-minute cache; the display setting
    /// is always revalidated. A business failure of the setting fetch emits
    /// one notification per server message, deduplicated so re-entering the
    /// screen does not stack repeats.
    pub fn load_command(&self, notify: NotifyService) {
        let vm = *self;
        self.is_loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            let result = async {
                let catalog = api::fetch_page_catalog().await?;
                let setting = api::fetch_display_setting().await?;
                Ok::<_, ApiError>((catalog, setting))
            }
            .await;

            match result {
                Ok((catalog, setting)) => {
                    vm.apply_server_state(catalog, setting);
                }
                Err(ApiError::Business(messages)) => {
                    for message in &messages {
                        notify.error_once(message.clone(), translate_server_message(message));
                    }
                    vm.error.set(Some(
                        messages
                            .first()
                            .map(|m| translate_server_message(m))
                            .unwrap_or_else(|| GENERIC_ERROR_FA.to_string()),
                    ));
                }
                Err(ApiError::Transport(e)) => {
                    log::error!("Failed to load customization data: {}", e);
                    vm.error.set(Some(GENERIC_ERROR_FA.to_string()));
                }
            }
            vm.is_loading.set(false);
        });
    }

    /// Record fetched server state and, while `Clean`, rebuild the editable
    /// list from it. While `Dirty` the list stays as the user left it.
    pub fn apply_server_state(
        &self,
        catalog: Vec<PageCatalogEntry>,
        setting: Vec<DisplaySettingEntry>,
    ) {
        self.server_catalog.set(catalog);
        self.server_setting.set(setting);

        if self.edit_state.get_untracked() == EditState::Dirty {
            log::debug!("Server state refreshed while editing; keeping unsaved edits");
            return;
        }
        self.rebuild_from_server();
    }

    /// Flip one section on/off.
    pub fn toggle(&self, page_id: &str) {
        self.items.update(|items| toggle_item(items, page_id));
        self.edit_state.set(EditState::Dirty);
    }

    /// Drop the dragged section onto another one.
    pub fn reorder(&self, active_id: &str, over_id: &str) {
        self.items
            .update(|items| reorder_items(items, active_id, over_id));
        self.edit_state.set(EditState::Dirty);
    }

    /// Throw away unsaved edits and return to the last fetched server state.
    pub fn discard_changes(&self) {
        self.edit_state.set(EditState::Clean);
        self.rebuild_from_server();
    }

    /// Persist the current list.
    ///
    /// Business success writes the enabled subset to `homeCustomization`,
    /// updates this tab's section visibility, and reloads the display
    /// setting so the next merge reflects what the server accepted.
    /// Business failure emits one toast per translated message and leaves
    /// the local artifact untouched. Transport failure emits a single
    /// generic toast.
    pub fn save_command(&self, notify: NotifyService, visibility: SectionVisibility) {
        let vm = *self;
        let request = build_save_request(&self.items.get_untracked());
        self.is_saving.set(true);

        spawn_local(async move {
            match api::save_display_setting(&request).await {
                Ok(()) => {
                    let subset = enabled_subset(&vm.items.get_untracked());
                    crate::shared::storage::set_json(HOME_CUSTOMIZATION_KEY, &subset);
                    visibility.apply_saved(&subset);
                    vm.edit_state.set(EditState::Clean);
                    notify.success(SAVE_SUCCESS_FA);

                    // The setting fetcher is uncached by design, so
                    // invalidation means reloading it right away.
                    match api::fetch_display_setting().await {
                        Ok(setting) => {
                            let catalog = vm.server_catalog.get_untracked();
                            vm.apply_server_state(catalog, setting);
                        }
                        Err(e) => {
                            log::warn!("Display setting reload after save failed: {}", e);
                        }
                    }
                }
                Err(ApiError::Business(messages)) => {
                    if messages.is_empty() {
                        notify.error(GENERIC_ERROR_FA);
                    }
                    for message in &messages {
                        notify.error_once(message.clone(), translate_server_message(message));
                    }
                }
                Err(ApiError::Transport(e)) => {
                    log::error!("Failed to save display setting: {}", e);
                    notify.error(GENERIC_ERROR_FA);
                }
            }
            vm.is_saving.set(false);
        });
    }

    fn rebuild_from_server(&self) {
        let merged = merge_catalog_with_setting(
            &self.server_catalog.get_untracked(),
            &self.server_setting.get_untracked(),
        );
        self.items.set(merged);
    }
}

impl Default for CustomizationViewModel {
    fn default() -> Self {
        Self::new()
    }
}
