use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use stock_alerts_api_types::requests::ActionResponse;

use crate::api::{subscribe, unsubscribe};
use crate::components::status_line::StatusLine;
use crate::config::use_config;
use crate::error::{AppError, AppResult};
use crate::messages::{EMPTY_EMAIL, SERVER_UNREACHABLE};
use crate::view_model::FormStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailAction {
    Subscribe,
    Unsubscribe,
}

impl EmailAction {
    fn form_id(self) -> &'static str {
        match self {
            EmailAction::Subscribe => "subscribe-form",
            EmailAction::Unsubscribe => "unsubscribe-form",
        }
    }

    fn input_id(self) -> &'static str {
        match self {
            EmailAction::Subscribe => "email",
            EmailAction::Unsubscribe => "unsubscribe-email",
        }
    }

    fn message_id(self) -> &'static str {
        match self {
            EmailAction::Subscribe => "message",
            EmailAction::Unsubscribe => "unsubscribe-message",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EmailAction::Subscribe => "Subscribe",
            EmailAction::Unsubscribe => "Unsubscribe",
        }
    }

    /// Only the subscription form refuses to send an empty address.
    fn requires_email(self) -> bool {
        matches!(self, EmailAction::Subscribe)
    }
}

/// What gets sent for the current input value. Anything but an empty subscription
/// is forwarded untouched; the server does the real validation.
pub fn prepare_email(action: EmailAction, value: &str) -> AppResult<String> {
    if action.requires_email() && value.is_empty() {
        return Err(AppError::EmptyEmail);
    }
    Ok(value.to_string())
}

pub fn email_status(result: &AppResult<ActionResponse>) -> FormStatus {
    match result {
        Ok(response) => FormStatus::from_response(response),
        Err(AppError::EmptyEmail) => FormStatus::failure(EMPTY_EMAIL),
        Err(_) => FormStatus::failure(SERVER_UNREACHABLE),
    }
}

#[component]
pub fn EmailForm(action: EmailAction) -> impl IntoView {
    let endpoints = use_config().endpoints;
    let endpoint = StoredValue::new(match action {
        EmailAction::Subscribe => endpoints.subscribe,
        EmailAction::Unsubscribe => endpoints.unsubscribe,
    });
    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(None::<FormStatus>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = match prepare_email(action, &email.get_untracked()) {
            Ok(email) => email,
            Err(e) => {
                set_status.set(Some(email_status(&Err(e))));
                return;
            }
        };
        let path = endpoint.get_value();
        set_pending.set(true);
        spawn_local(async move {
            let result = match action {
                EmailAction::Subscribe => subscribe(&path, email).await,
                EmailAction::Unsubscribe => unsubscribe(&path, email).await,
            };
            if let Err(e) = &result {
                log::error!("{} request failed: {e}", action.label());
            }
            set_status.set(Some(email_status(&result)));
            set_pending.set(false);
        });
    };

    view! {
        <form id=action.form_id() class="email-form" on:submit=on_submit>
            <input
                id=action.input_id()
                class="input"
                type="text"
                inputmode="email"
                placeholder="Enter your email"
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button type="submit" class="btn-primary" disabled=pending>
                {action.label()}
            </button>
        </form>
        <StatusLine id=action.message_id() status />
    }
}
