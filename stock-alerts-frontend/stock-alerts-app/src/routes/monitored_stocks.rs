use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_meta::Title;
use stock_alerts_api_types::MonitoredStock;

use crate::api::get_monitored_stocks;
use crate::components::{
    loading::Loading, request_stock::RequestStockForm, search_bar::SearchBar,
    stock_grid::StockGrid,
};
use crate::config::use_config;
use crate::feed::Feed;
use crate::messages::MONITORED_STOCKS_FAILED;

/// What `#stocks-container` shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StocksView {
    Loading,
    Grid,
    /// The last fetch failed. The message replaces the grid until a fetch succeeds
    /// or the search query changes.
    Failed,
}

pub fn stocks_view(loaded: bool, failed: bool) -> StocksView {
    if failed {
        StocksView::Failed
    } else if loaded {
        StocksView::Grid
    } else {
        StocksView::Loading
    }
}

#[component]
pub fn MonitoredStocksPage() -> impl IntoView {
    let feed = Feed::<MonitoredStock>::new();
    let (query, set_query) = signal(String::new());

    let path = use_config().endpoints.monitored_stocks;
    let load = move || {
        let path = path.clone();
        feed.load("monitored stocks", move || async move {
            get_monitored_stocks(&path).await
        });
    };
    load();
    let on_requested = Callback::new(move |_| load());

    // searching re-renders from the retained snapshot
    Effect::new(move |prev: Option<()>| {
        query.track();
        if prev.is_some() {
            feed.dismiss_error();
        }
    });

    let stocks = feed.visible(query.into());
    let loaded = feed.is_loaded();
    let last_error = feed.last_error();
    let container = move || match stocks_view(loaded.get(), last_error.with(Option::is_some)) {
        StocksView::Loading => {
            EitherOf3::A(view! { <Loading label="Loading monitored stocks..." /> })
        }
        StocksView::Grid => EitherOf3::B(view! { <StockGrid stocks /> }),
        StocksView::Failed => EitherOf3::C(MONITORED_STOCKS_FAILED),
    };

    view! {
        <Title text="Monitored Stocks" />
        <div class="main-content">
            <h1>"Monitored Stocks"</h1>
            <SearchBar set_query />
            <div id="stocks-container">{container}</div>
            <div class="content-well">
                <h2>"Request a stock"</h2>
                <RequestStockForm on_requested />
            </div>
        </div>
    }
}
