use leptos::prelude::*;

#[component]
pub fn SearchBar(
    set_query: WriteSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search by symbol or company name".to_string());
    view! {
        <input
            id="search-bar"
            class="input"
            type="text"
            placeholder=placeholder
            on:input=move |ev| set_query.set(event_target_value(&ev))
        />
    }
}
