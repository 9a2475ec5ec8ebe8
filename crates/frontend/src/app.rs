use leptos::prelude::*;

use crate::home::settings_reader::SectionVisibility;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::{NotificationHost, NotifyService};

#[component]
pub fn App() -> impl IntoView {
    // Toast service for the whole app.
    provide_context(NotifyService::new());

    // Section visibility: reads the persisted customization once and keeps
    // itself in sync with writes from other tabs.
    provide_context(SectionVisibility::new());

    view! {
        <AppRoutes />
        <NotificationHost />
    }
}
