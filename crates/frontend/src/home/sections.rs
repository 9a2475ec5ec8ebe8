//! Placeholder section cards for the home grid.
//!
//! The real report widgets (cheque schedule, currency table, top-products
//! charts, ...) live in their own feature modules; the home grid only needs
//! a card shell per section, gated by the saved customization.

use leptos::prelude::*;

#[component]
pub fn SectionCard(
    /// Persian section title shown in the card header
    title: String,
    /// Server page-name key, kept as a styling/testing hook
    page_name: String,
) -> impl IntoView {
    view! {
        <div class="section-card" data-section=page_name>
            <div class="section-card__header">
                <span class="section-card__title">{title}</span>
            </div>
            <div class="section-card__body"></div>
        </div>
    }
}
