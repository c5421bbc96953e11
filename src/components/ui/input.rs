use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

#[component]
pub fn Input(
    #[prop(into, optional)] class: String,

    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,

    // Two-way binding, wired by hand instead of `bind:value`.
    #[prop(into)] bind_value: RwSignal<String>,

    /// Fired when Enter is pressed inside the field.
    #[prop(optional)] on_enter: Option<Callback<()>>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "flex-grow min-w-0 p-2 border-2 border-blue-300 bg-white text-blue-900 placeholder:text-blue-300 outline-none",
        "focus-visible:ring-2 focus-visible:ring-blue-500",
        class
    );

    let on_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                bind_value.set(input.value());
            }
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(cb) = on_enter {
                ev.prevent_default();
                cb.run(());
            }
        }
    };

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            id=id
            prop:value=move || bind_value.get()
            on:input=on_input
            on:keydown=on_keydown
        />
    }
    .into_any()
}
