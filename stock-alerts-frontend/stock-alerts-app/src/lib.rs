pub(crate) mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub(crate) mod live_updates;
pub mod messages;
pub mod routes;
pub mod view_model;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::config::{provide_config, AppConfig};
use crate::routes::{index::IndexPage, monitored_stocks::MonitoredStocksPage, not_found::NotFound};

#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    provide_meta_context();
    provide_config(config.unwrap_or_default());

    view! {
        <Title text="Stock Alerts" />
        <Router>
            <nav class="header">
                <A href="/">"Alerts"</A>
                <A href="/monitored-stocks">"Monitored Stocks"</A>
            </nav>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=IndexPage />
                    <Route path=path!("/monitored-stocks") view=MonitoredStocksPage />
                </Routes>
            </main>
        </Router>
    }
}
