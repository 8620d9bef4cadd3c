use leptos::prelude::*;

use crate::view_model::FormStatus;

/// The message element under a form. Empty until the first submit.
#[component]
pub fn StatusLine(
    id: &'static str,
    #[prop(into)] status: Signal<Option<FormStatus>>,
) -> impl IntoView {
    let style = move || {
        status.with(|status| {
            status
                .as_ref()
                .map(|status| status.style.css())
                .unwrap_or_default()
        })
    };
    let text = move || {
        status.with(|status| {
            status
                .as_ref()
                .map(|status| status.text.clone())
                .unwrap_or_default()
        })
    };
    view! { <p id=id style=style>{text}</p> }
}
