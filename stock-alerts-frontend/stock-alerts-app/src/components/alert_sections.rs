use leptos::prelude::*;
use stock_alerts_api_types::{AlertRecord, PeriodAlertRecord};

use crate::components::{alert_card::AlertCard, period_card::PeriodCard};
use crate::config::use_config;
use crate::view_model::{build_alert_sections, build_period_groups};

/// Alerts split into the highlighted and other containers.
///
/// Both containers are rebuilt from scratch whenever `alerts` changes.
#[component]
pub fn HighlightedAlerts(#[prop(into)] alerts: Signal<Vec<AlertRecord>>) -> impl IntoView {
    let template = use_config().alert_quote_url;
    let sections =
        Memo::new(move |_| alerts.with(|alerts| build_alert_sections(alerts, &template)));
    view! {
        <section class="alerts">
            <h2>"Highlighted Stocks"</h2>
            <div id="highlighted-stocks" class="card-grid">
                {move || {
                    sections
                        .with(|sections| sections.highlighted.clone())
                        .into_iter()
                        .map(|card| view! { <AlertCard card /> })
                        .collect_view()
                }}
            </div>
            <h2>"Other Stocks"</h2>
            <div id="other-stocks" class="card-grid">
                {move || {
                    sections
                        .with(|sections| sections.other.clone())
                        .into_iter()
                        .map(|card| view! { <AlertCard card /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

/// Period alerts as one card per symbol.
#[component]
pub fn PeriodAlerts(#[prop(into)] alerts: Signal<Vec<PeriodAlertRecord>>) -> impl IntoView {
    let template = use_config().period_quote_url;
    let groups = Memo::new(move |_| alerts.with(|alerts| build_period_groups(alerts, &template)));
    view! {
        <section class="alerts">
            <h2>"Stock Alerts"</h2>
            <div id="stock-alerts" class="card-grid">
                {move || {
                    groups
                        .get()
                        .into_iter()
                        .map(|group| view! { <PeriodCard group /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
