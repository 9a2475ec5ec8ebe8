//! TopHeader component - application top navigation bar.

use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    // Plain anchors: the surrounding Router intercepts same-origin clicks.
    view! {
        <div class="top-header" dir="rtl">
            <div class="top-header__brand">
                <span class="top-header__title">"داشبورد مدیریت"</span>
            </div>

            <nav class="top-header__nav">
                <a href="/" class="top-header__link">"صفحه اصلی"</a>
                <a href="/customization" class="top-header__link">"تنظیمات صفحه اصلی"</a>
            </nav>
        </div>
    }
}
