use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use stock_alerts_api_types::requests::ActionResponse;

use crate::api::request_stock;
use crate::components::status_line::StatusLine;
use crate::config::use_config;
use crate::error::AppResult;
use crate::messages::REQUEST_FAILED;
use crate::view_model::FormStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOutcome {
    pub status: FormStatus,
    /// The form stays disabled for the rest of the page's life.
    pub lock_form: bool,
}

pub fn request_outcome(result: &AppResult<ActionResponse>) -> RequestOutcome {
    match result {
        Ok(response) => RequestOutcome {
            status: FormStatus::from_response(response),
            lock_form: response.success,
        },
        Err(_) => RequestOutcome {
            status: FormStatus::failure(REQUEST_FAILED),
            lock_form: false,
        },
    }
}

/// Asks the backend to start monitoring a symbol.
///
/// After one accepted request the input and button are disabled for good and
/// `on_requested` is run so the owner can refresh its list.
#[component]
pub fn RequestStockForm(on_requested: Callback<()>) -> impl IntoView {
    let endpoint = StoredValue::new(use_config().endpoints.request_stock);
    let (symbol, set_symbol) = signal(String::new());
    let (status, set_status) = signal(None::<FormStatus>);
    let (pending, set_pending) = signal(false);
    let (locked, set_locked) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() || locked.get_untracked() {
            return;
        }
        let symbol = symbol.get_untracked();
        let path = endpoint.get_value();
        set_pending.set(true);
        spawn_local(async move {
            let result = request_stock(&path, symbol).await;
            if let Err(e) = &result {
                log::error!("Error requesting stock: {e}");
            }
            let outcome = request_outcome(&result);
            set_status.set(Some(outcome.status));
            if outcome.lock_form {
                set_locked.set(true);
                on_requested.run(());
            }
            set_pending.set(false);
        });
    };

    view! {
        <form id="request-stock-form" class="request-form" on:submit=on_submit>
            <input
                id="stock-symbol"
                class="input"
                type="text"
                placeholder="Stock symbol, e.g. AAPL"
                prop:value=symbol
                disabled=locked
                on:input=move |ev| set_symbol.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="btn-primary"
                disabled=move || pending.get() || locked.get()
            >
                "Request"
            </button>
        </form>
        <StatusLine id="request-message" status />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{decode_rejectable, HttpReply};
    use crate::error::{AppError, SystemError};
    use crate::view_model::TextColor;

    #[test]
    fn accepted_request_locks_the_form() {
        let outcome = request_outcome(&Ok(ActionResponse {
            success: true,
            message: "Requested monitoring for stock NVDA.".to_string(),
        }));
        assert!(outcome.lock_form);
        assert_eq!(outcome.status.text, "Requested monitoring for stock NVDA.");
        assert_eq!(outcome.status.style.color, Some(TextColor::Green));
    }

    #[test]
    fn rejected_request_leaves_form_active() {
        let outcome = request_outcome(&Ok(ActionResponse {
            success: false,
            message: "No stock symbol provided.".to_string(),
        }));
        assert!(!outcome.lock_form);
        assert_eq!(outcome.status.text, "No stock symbol provided.");
        assert_eq!(outcome.status.style.color, Some(TextColor::Red));
    }

    #[test]
    fn bad_request_shows_the_backend_message() {
        let outcome = request_outcome(&decode_rejectable(
            "/request-stock",
            HttpReply {
                status: 400,
                body: r#"{"success": false, "message": "No stock symbol provided."}"#
                    .to_string(),
            },
        ));
        assert!(!outcome.lock_form);
        assert_eq!(outcome.status.text, "No stock symbol provided.");
        assert_eq!(outcome.status.style.color, Some(TextColor::Red));
    }

    #[test]
    fn failed_request_shows_generic_message() {
        let outcome = request_outcome(&Err(AppError::from(SystemError::Message(
            "network down".to_string(),
        ))));
        assert!(!outcome.lock_form);
        assert_eq!(outcome.status.text, "Error submitting request.");
        assert_eq!(outcome.status.style.color, Some(TextColor::Red));
    }
}
