use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found" />
        <div class="main-content">
            <h1>"Page not found"</h1>
            <A href="/">"Back to the alerts"</A>
        </div>
    }
}
