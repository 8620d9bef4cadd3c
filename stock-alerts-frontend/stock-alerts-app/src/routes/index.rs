use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::Title;
use serde::de::DeserializeOwned;
use stock_alerts_api_types::{AlertRecord, PeriodAlertRecord};

use crate::api::get_stock_alerts;
use crate::components::{
    alert_sections::{HighlightedAlerts, PeriodAlerts},
    email_form::{EmailAction, EmailForm},
    search_bar::SearchBar,
};
use crate::config::{use_config, AlertsVariant};
use crate::feed::Feed;
use crate::filter::Searchable;
use crate::live_updates::listen_for_updates;

/// Fetches `/stock-alerts` once, again on every pushed update when enabled, and
/// returns the records matching the search bar along with its setter.
///
/// The update stream lives as long as the calling component.
fn use_alert_feed<R>() -> (Memo<Vec<R>>, WriteSignal<String>)
where
    R: DeserializeOwned + Searchable + Clone + PartialEq + Send + Sync + 'static,
{
    let config = use_config();
    let feed = Feed::<R>::new();
    let (query, set_query) = signal(String::new());

    let path = config.endpoints.stock_alerts;
    let load = move || {
        let path = path.clone();
        feed.load("stock alerts", move || async move {
            get_stock_alerts::<R>(&path).await
        });
    };
    load();
    if config.live_updates {
        listen_for_updates(config.endpoints.events, move || {
            if feed.is_disposed() {
                return false;
            }
            load();
            true
        });
    }

    (feed.visible(query.into()), set_query)
}

#[component]
fn HighlightedFeed() -> impl IntoView {
    let (alerts, set_query) = use_alert_feed::<AlertRecord>();
    view! {
        <SearchBar set_query />
        <HighlightedAlerts alerts />
    }
}

#[component]
fn PeriodFeed() -> impl IntoView {
    let (alerts, set_query) = use_alert_feed::<PeriodAlertRecord>();
    view! {
        <SearchBar set_query placeholder="Search by symbol" />
        <PeriodAlerts alerts />
    }
}

#[component]
pub fn IndexPage() -> impl IntoView {
    let variant = use_config().alerts_variant;
    view! {
        <Title text="Stock Alerts" />
        <div class="main-content">
            <section class="subscriptions">
                <div class="content-well">
                    <h2>"Subscribe to alerts"</h2>
                    <EmailForm action=EmailAction::Subscribe />
                </div>
                <div class="content-well">
                    <h2>"Unsubscribe"</h2>
                    <EmailForm action=EmailAction::Unsubscribe />
                </div>
            </section>
            {match variant {
                AlertsVariant::Highlighted => Either::Left(view! { <HighlightedFeed /> }),
                AlertsVariant::GroupedByPeriod => Either::Right(view! { <PeriodFeed /> }),
            }}
        </div>
    }
}
