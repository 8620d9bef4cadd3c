use leptos::prelude::*;
use stock_alerts_api_types::MonitoredStock;

use crate::config::{quote_url, use_config};
use crate::view_model::card_title;

pub const GRID_COLUMNS: usize = 3;

fn grid_style() -> String {
    format!("display: grid; grid-template-columns: repeat({GRID_COLUMNS}, 1fr); gap: 10px;")
}

/// Every stock as a link in a fixed three column grid, in the order given.
#[component]
pub fn StockGrid(#[prop(into)] stocks: Signal<Vec<MonitoredStock>>) -> impl IntoView {
    let template = use_config().alert_quote_url;
    view! {
        <div class="stock-grid" style=grid_style()>
            {move || {
                stocks
                    .get()
                    .into_iter()
                    .map(|stock| {
                        let href = quote_url(&template, &stock.symbol);
                        let title = card_title(&stock.symbol, stock.company_name.as_deref());
                        view! {
                            <div style="padding: 5px; text-align: center;">
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    style="text-decoration: none; color: #ADD8E6;"
                                >
                                    {title}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_three_columns() {
        assert!(grid_style().contains("repeat(3, 1fr)"));
    }
}
