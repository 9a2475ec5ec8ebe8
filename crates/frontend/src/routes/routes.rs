use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::home::customization::view::CustomizationPage;
use crate::home::view::HomePage;
use crate::layout::Shell;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell center=|| {
                view! {
                    <Routes fallback=|| view! { <HomePage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/customization") view=CustomizationPage />
                    </Routes>
                }
                .into_any()
            } />
        </Router>
    }
}
