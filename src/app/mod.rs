use crate::config::EnvConfig;
use crate::models::Page;
use crate::pages::{EssentialsPage, HomePage, Navbar, PlanningPage};
use crate::state::{AppContext, AppState};
use crate::util::page_key_from_location;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(EnvConfig::new());
    let app_state = AppState::new();
    provide_context(AppContext(app_state));

    // `#planning` etc. opens straight onto that page; unknown keys land on Home.
    if let Some(key) = page_key_from_location() {
        app_state.navigate_key(&key);
    }

    // Page switching is plain state; there is no router.
    let body = move || match app_state.current_page() {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Planning => view! { <PlanningPage /> }.into_any(),
        Page::Essentials => view! { <EssentialsPage /> }.into_any(),
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-100 to-blue-200">
            <Navbar />
            <main class="container mx-auto px-4 py-8">{body}</main>
        </div>
    }
}
