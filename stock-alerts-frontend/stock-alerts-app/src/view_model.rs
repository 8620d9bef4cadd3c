//! Turns alert payloads into display ready cards.
//!
//! Everything in here is plain data so the coloring and formatting rules can be
//! checked without a DOM. The components only map these structs onto markup.

use itertools::Itertools;
use stock_alerts_api_types::{
    requests::ActionResponse, AlertRecord, MovingAverages, PeriodAlertRecord,
};

use crate::{config::quote_url, filter::compare_symbols, messages::NOT_AVAILABLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextColor {
    Green,
    Red,
    Yellow,
    White,
    Blue,
}

impl TextColor {
    pub fn as_css(self) -> &'static str {
        match self {
            TextColor::Green => "green",
            TextColor::Red => "red",
            TextColor::Yellow => "yellow",
            TextColor::White => "white",
            TextColor::Blue => "blue",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Option<TextColor>,
    pub bold: bool,
}

impl TextStyle {
    pub const PLAIN: TextStyle = TextStyle {
        color: None,
        bold: false,
    };

    pub const fn colored(color: TextColor) -> Self {
        Self {
            color: Some(color),
            bold: false,
        }
    }

    pub const fn bold(color: TextColor) -> Self {
        Self {
            color: Some(color),
            bold: true,
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }

    /// Inline style attribute value, empty for plain text.
    pub fn css(&self) -> String {
        let mut css = String::new();
        if let Some(color) = self.color {
            css.push_str("color:");
            css.push_str(color.as_css());
            css.push(';');
        }
        if self.bold {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str("font-weight:bold;");
        }
        css
    }
}

pub const ADX_STYLE: TextStyle = TextStyle::bold(TextColor::White);
pub const PLUS_DI_STYLE: TextStyle = TextStyle::bold(TextColor::Green);
pub const MINUS_DI_STYLE: TextStyle = TextStyle::bold(TextColor::Red);

/// Green when the price is above every average, red when below every one.
///
/// Averages without a value are skipped. With nothing to compare against the price
/// counts as above all of them.
pub fn price_style(price: f64, averages: &MovingAverages) -> TextStyle {
    if averages.values().all(|average| price > average) {
        TextStyle::bold(TextColor::Green)
    } else if averages.values().all(|average| price < average) {
        TextStyle::bold(TextColor::Red)
    } else {
        TextStyle::PLAIN
    }
}

/// Green when MACD is above its signal line. A missing side is red.
pub fn macd_style(macd: Option<f64>, signal: Option<f64>) -> TextStyle {
    match (macd, signal) {
        (Some(macd), Some(signal)) if macd > signal => TextStyle::colored(TextColor::Green),
        _ => TextStyle::colored(TextColor::Red),
    }
}

pub fn rsi_style(rsi: Option<f64>) -> TextStyle {
    match rsi {
        Some(rsi) if rsi >= 70.0 => TextStyle::colored(TextColor::Yellow),
        Some(rsi) if rsi >= 50.0 => TextStyle::colored(TextColor::Green),
        _ => TextStyle::colored(TextColor::Red),
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite())
}

/// Two decimals, or `N/A` when there is no number.
pub fn format_value(value: Option<f64>) -> String {
    present(value)
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_money(value: Option<f64>) -> String {
    present(value)
        .map(|value| format!("${value:.2}"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_percent(value: Option<f64>) -> String {
    present(value)
        .map(|value| format!("{value:.2}%"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyledValue {
    pub text: String,
    pub style: TextStyle,
}

impl StyledValue {
    fn new(text: String, style: TextStyle) -> Self {
        Self { text, style }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AverageLine {
    pub period: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlertCardView {
    pub symbol: String,
    pub title: String,
    pub quote_url: String,
    pub price: StyledValue,
    pub moving_averages: Vec<AverageLine>,
    pub macd: StyledValue,
    pub signal: String,
    pub adx: StyledValue,
    pub plus_di: StyledValue,
    pub minus_di: StyledValue,
    pub rsi: StyledValue,
    pub highlighted: bool,
}

pub fn card_title(symbol: &str, company_name: Option<&str>) -> String {
    format!("{symbol} ({})", company_name.unwrap_or(NOT_AVAILABLE))
}

impl AlertCardView {
    /// `None` when the record has no usable price.
    pub fn from_record(record: &AlertRecord, quote_template: &str) -> Option<Self> {
        let price = record.price()?;
        Some(Self {
            symbol: record.symbol.clone(),
            title: card_title(&record.symbol, record.company_name.as_deref()),
            quote_url: quote_url(quote_template, &record.symbol),
            price: StyledValue::new(
                format_money(Some(price)),
                price_style(price, &record.moving_averages),
            ),
            moving_averages: record
                .moving_averages
                .iter()
                .map(|average| AverageLine {
                    period: average.period.clone(),
                    value: format_money(average.value),
                })
                .collect(),
            macd: StyledValue::new(
                format_value(record.macd),
                macd_style(record.macd, record.signal),
            ),
            signal: format_value(record.signal),
            adx: StyledValue::new(format_value(record.adx), ADX_STYLE),
            plus_di: StyledValue::new(format_value(record.plus_di), PLUS_DI_STYLE),
            minus_di: StyledValue::new(format_value(record.minus_di), MINUS_DI_STYLE),
            rsi: StyledValue::new(format_value(record.rsi), rsi_style(record.rsi)),
            highlighted: record.highlighted,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertSections {
    pub highlighted: Vec<AlertCardView>,
    pub other: Vec<AlertCardView>,
}

/// Drops records without a price, sorts by symbol and splits on `highlighted`.
pub fn build_alert_sections(records: &[AlertRecord], quote_template: &str) -> AlertSections {
    let (highlighted, other): (Vec<_>, Vec<_>) = records
        .iter()
        .filter_map(|record| AlertCardView::from_record(record, quote_template))
        .sorted_by(|a, b| compare_symbols(&a.symbol, &b.symbol))
        .partition(|card| card.highlighted);
    AlertSections { highlighted, other }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PeriodRow {
    pub period: String,
    pub average: StyledValue,
    pub difference: StyledValue,
    pub percentage: StyledValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PeriodGroupView {
    pub symbol: String,
    pub quote_url: String,
    pub price: StyledValue,
    pub rows: Vec<PeriodRow>,
}

/// One card per symbol, sorted by symbol. Rows keep the order they arrived in.
pub fn build_period_groups(
    records: &[PeriodAlertRecord],
    quote_template: &str,
) -> Vec<PeriodGroupView> {
    records
        .iter()
        .sorted_by(|a, b| compare_symbols(&a.symbol, &b.symbol))
        .chunk_by(|record| record.symbol.clone())
        .into_iter()
        .map(|(symbol, rows)| {
            let rows: Vec<&PeriodAlertRecord> = rows.collect();
            let price = rows.iter().find_map(|row| present(row.current_price));
            PeriodGroupView {
                quote_url: quote_url(quote_template, &symbol),
                symbol,
                price: StyledValue::new(format_money(price), TextStyle::bold(TextColor::Red)),
                rows: rows
                    .into_iter()
                    .map(|row| PeriodRow {
                        period: row.period.clone(),
                        average: StyledValue::new(
                            format_money(row.average),
                            TextStyle::bold(TextColor::Green),
                        ),
                        difference: StyledValue::new(
                            format_money(row.difference),
                            TextStyle::bold(TextColor::Red),
                        ),
                        percentage: StyledValue::new(
                            format_percent(row.percentage_change),
                            TextStyle::bold(TextColor::Blue),
                        ),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Text and color of a form's status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub text: String,
    pub style: TextStyle,
}

impl FormStatus {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::colored(TextColor::Green),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::colored(TextColor::Red),
        }
    }

    /// The server's message verbatim, colored by its `success` flag.
    pub fn from_response(response: &ActionResponse) -> Self {
        if response.success {
            Self::success(response.message.clone())
        } else {
            Self::failure(response.message.clone())
        }
    }
}
