//! Home customization screen.
//!
//! One row per known dashboard section: a toggle for visibility and a drag
//! handle for ordering. Edits stay local until "ذخیره"; a dirty banner with
//! a discard action appears while unsaved edits exist.

use leptos::prelude::*;
use thaw::*;

use super::view_model::{CustomizationViewModel, EditState};
use crate::home::settings_reader::use_section_visibility;
use crate::shared::notify::use_notify;

#[component]
pub fn CustomizationPage() -> impl IntoView {
    let notify = use_notify();
    let visibility = use_section_visibility();
    let vm = CustomizationViewModel::new();

    // Kick off catalog + display-setting load once per mount.
    vm.load_command(notify);

    // Page id currently being dragged, if any.
    let dragging_id: RwSignal<Option<String>> = RwSignal::new(None);

    let is_dirty = move || vm.edit_state.get() == EditState::Dirty;

    view! {
        <div class="customization-page" dir="rtl">
            <div class="customization-page__header">
                <h2>"تنظیمات صفحه اصلی"</h2>
                <p class="customization-page__hint">
                    "بخش‌های صفحه اصلی را فعال یا غیرفعال کنید و با کشیدن، ترتیب آن‌ها را تغییر دهید."
                </p>
            </div>

            <Show when=move || vm.is_loading.get()>
                <div class="customization-page__loading">
                    <Spinner />
                </div>
            </Show>

            <Show when=move || !vm.is_loading.get() && vm.error.get().is_some()>
                <div class="customization-page__error">
                    {move || vm.error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || !vm.is_loading.get() && vm.error.get().is_none()>
                <div class="customization-list">
                    <For
                        each=move || vm.items.get()
                        key=|item| item.page_id.clone()
                        children=move |item| {
                            let page_id = item.page_id.clone();
                            let toggle_id = page_id.clone();
                            let checked_id = page_id.clone();
                            let drag_id = page_id.clone();
                            let drop_id = page_id.clone();
                            view! {
                                <div
                                    class="customization-row"
                                    draggable="true"
                                    on:dragstart=move |ev| {
                                        if let Some(dt) = ev.data_transfer() {
                                            let _ = dt.set_data("text/plain", &drag_id);
                                        }
                                        dragging_id.set(Some(drag_id.clone()));
                                    }
                                    on:dragover=move |ev| ev.prevent_default()
                                    on:drop=move |ev| {
                                        ev.prevent_default();
                                        if let Some(active) = dragging_id.get_untracked() {
                                            vm.reorder(&active, &drop_id);
                                        }
                                        dragging_id.set(None);
                                    }
                                    on:dragend=move |_| dragging_id.set(None)
                                >
                                    <span class="customization-row__handle" title="جابجایی">"⋮⋮"</span>
                                    <span class="customization-row__title">{item.persian_title.clone()}</span>
                                    // Rows are keyed by page id, so the checked
                                    // state must track the items signal itself.
                                    <input
                                        type="checkbox"
                                        class="customization-row__toggle"
                                        prop:checked=move || {
                                            vm.items.with(|items| {
                                                items
                                                    .iter()
                                                    .find(|i| i.page_id == checked_id)
                                                    .map(|i| i.is_enabled)
                                                    .unwrap_or(false)
                                            })
                                        }
                                        on:change=move |_| vm.toggle(&toggle_id)
                                    />
                                </div>
                            }
                        }
                    />
                </div>

                <div class="customization-page__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.is_saving.get() || !is_dirty())
                        on_click=move |_| vm.save_command(notify, visibility)
                    >
                        {move || if vm.is_saving.get() { "در حال ذخیره…" } else { "ذخیره" }}
                    </Button>
                    <Show when=is_dirty>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| vm.discard_changes()
                        >
                            "انصراف از تغییرات"
                        </Button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
