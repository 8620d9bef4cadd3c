use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="loading" aria-busy="true">
            <div class="lds-ellipsis"><div></div><div></div><div></div><div></div></div>
            {label}
        </div>
    }
}
