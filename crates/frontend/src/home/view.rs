//! Home page: the customizable dashboard grid.
//!
//! Renders one card per enabled section, in the order the user saved. The
//! enabled set comes from [`SectionVisibility`]; with no saved
//! customization every known section is shown.

use contracts::home::page_kind::PageKind;
use leptos::prelude::*;

use super::sections::SectionCard;
use crate::home::settings_reader::use_section_visibility;

#[component]
pub fn HomePage() -> impl IntoView {
    let visibility = use_section_visibility();

    view! {
        <div class="home-page" dir="rtl">
            <div class="home-grid">
                <For
                    each=move || visibility.ordered_sections()
                    key=|name| name.clone()
                    children=move |name: String| {
                        let title = PageKind::title_for_key(&name);
                        view! { <SectionCard title=title page_name=name /> }
                    }
                />
            </div>
        </div>
    }
}
