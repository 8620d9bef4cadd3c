use std::str::FromStr;

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Characters that would break out of a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Which payload `/stock-alerts` serves, and therefore how the index page lays it out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertsVariant {
    /// Full indicator records split into highlighted and other sections.
    #[default]
    Highlighted,
    /// One row per (symbol, period), grouped into one card per symbol.
    GroupedByPeriod,
}

impl FromStr for AlertsVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "highlighted" | "indicators" => Ok(Self::Highlighted),
            "grouped" | "period" | "grouped_by_period" => Ok(Self::GroupedByPeriod),
            other => Err(format!("unknown alerts variant {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub subscribe: String,
    pub unsubscribe: String,
    pub stock_alerts: String,
    pub monitored_stocks: String,
    pub request_stock: String,
    pub events: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            subscribe: "/subscribe".to_string(),
            unsubscribe: "/unsubscribe".to_string(),
            stock_alerts: "/stock-alerts".to_string(),
            monitored_stocks: "/monitored-stocks-api".to_string(),
            request_stock: "/request-stock".to_string(),
            events: "/events".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoints: Endpoints,
    /// Quote page for alert cards and the monitored stocks grid. `{symbol}` is substituted.
    pub alert_quote_url: String,
    /// Quote page for the grouped period cards.
    pub period_quote_url: String,
    pub alerts_variant: AlertsVariant,
    /// Re-fetch alerts whenever the backend pushes an update on the events stream.
    pub live_updates: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            alert_quote_url: "https://finance.yahoo.com/chart/{symbol}".to_string(),
            period_quote_url: "https://finance.yahoo.com/quote/{symbol}".to_string(),
            alerts_variant: AlertsVariant::default(),
            live_updates: true,
        }
    }
}

impl AppConfig {
    /// Applies build-time overrides. Unparsable values are logged and ignored.
    pub fn with_overrides(
        mut self,
        quote_url: Option<&str>,
        variant: Option<&str>,
        live_updates: Option<&str>,
    ) -> Self {
        if let Some(quote_url) = quote_url.filter(|url| !url.trim().is_empty()) {
            self.alert_quote_url = quote_url.to_string();
        }
        if let Some(variant) = variant {
            match variant.parse() {
                Ok(variant) => self.alerts_variant = variant,
                Err(e) => log::warn!("{e}, keeping {:?}", self.alerts_variant),
            }
        }
        if let Some(live_updates) = live_updates {
            match parse_flag(live_updates) {
                Some(flag) => self.live_updates = flag,
                None => log::warn!("invalid live updates flag {live_updates}"),
            }
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Fills `{symbol}` in a quote url template.
pub fn quote_url(template: &str, symbol: &str) -> String {
    let symbol = utf8_percent_encode(symbol, SEGMENT).to_string();
    template.replace("{symbol}", &symbol)
}

pub fn provide_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
