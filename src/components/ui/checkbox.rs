use icons::Check;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Display-only checkbox. The surrounding tile owns the click, so this never
/// toggles anything by itself.
#[component]
pub fn Checkbox(
    #[prop(into, optional)] class: String,
    #[prop(into)] checked: Signal<bool>,
) -> impl IntoView {
    let merged_class = move || {
        let state_class = if checked.get() {
            "border-green-600 bg-green-600 text-white"
        } else {
            "border-blue-300 bg-white text-transparent"
        };
        tw_merge!(
            "mr-3 inline-flex size-5 shrink-0 items-center justify-center rounded border-2 transition-colors",
            state_class,
            &class
        )
    };

    view! {
        <span
            data-name="Checkbox"
            role="checkbox"
            aria-checked=move || if checked.get() { "true" } else { "false" }
            class=merged_class
        >
            <Check class="size-3.5" />
        </span>
    }
}
