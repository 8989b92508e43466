//! ヘッダー・フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <div class="brand">
                    <img src="/flame-icon.svg" class="brand-icon" />
                    <span class="brand-name">"Smart Size"</span>
                </div>
                <a href="/test" class="nav-link">"System Check"</a>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            {format!("\u{a9} {} Smart Size \u{b7} Privacy\u{2011}first recommendations", year)}
        </footer>
    }
}
