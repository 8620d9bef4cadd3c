use std::cmp::Ordering;

use stock_alerts_api_types::{AlertRecord, MonitoredStock, PeriodAlertRecord};

/// Anything the search bar can filter.
pub trait Searchable {
    fn symbol(&self) -> &str;

    fn company_name(&self) -> Option<&str> {
        None
    }

    /// Case insensitive substring match on the symbol and, when present, the company name.
    /// `query` must already be lowercase.
    fn matches(&self, query: &str) -> bool {
        self.symbol().to_lowercase().contains(query)
            || self
                .company_name()
                .is_some_and(|name| name.to_lowercase().contains(query))
    }
}

impl Searchable for AlertRecord {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }
}

impl Searchable for MonitoredStock {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }
}

impl Searchable for PeriodAlertRecord {
    fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Records matching `query`, cloned out of `records` in their original order.
pub fn filter_records<T>(records: &[T], query: &str) -> Vec<T>
where
    T: Searchable + Clone,
{
    let query = query.to_lowercase();
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.matches(&query))
        .cloned()
        .collect()
}

/// Display order for symbols: case insensitive, ties broken by the raw text.
pub fn compare_symbols(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(symbol: &str, company_name: Option<&str>) -> MonitoredStock {
        MonitoredStock {
            symbol: symbol.to_string(),
            company_name: company_name.map(str::to_string),
        }
    }

    #[test]
    fn matches_symbol_or_company() {
        let stocks = vec![
            stock("AAL", Some("American Airlines")),
            stock("MSFT", Some("Microsoft")),
            stock("KO", Some("Coca-Cola Company Kaax")),
            stock("GE", None),
        ];
        let found: Vec<_> = filter_records(&stocks, "aa")
            .into_iter()
            .map(|s| s.symbol)
            .collect();
        assert_eq!(found, ["AAL", "KO"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let stocks = vec![stock("nvda", Some("NVIDIA")), stock("AMD", None)];
        assert_eq!(filter_records(&stocks, "NvId").len(), 1);
        assert_eq!(filter_records(&stocks, "amd")[0].symbol, "AMD");
    }

    #[test]
    fn empty_query_keeps_everything() {
        let stocks = vec![stock("B", None), stock("A", None)];
        assert_eq!(filter_records(&stocks, ""), stocks);
    }

    #[test]
    fn missing_company_name_never_matches() {
        let stocks = vec![stock("XOM", None)];
        assert!(filter_records(&stocks, "exxon").is_empty());
    }

    #[test]
    fn period_records_match_on_symbol_only() {
        let record = PeriodAlertRecord {
            symbol: "PEP".to_string(),
            current_price: Some(150.0),
            period: "8-day".to_string(),
            average: None,
            difference: None,
            percentage_change: None,
        };
        assert!(record.matches("pe"));
        assert!(!record.matches("8-day"));
    }

    #[test]
    fn symbol_order_ignores_case() {
        let mut symbols = vec!["msft", "AAPL", "aapl", "Goog"];
        symbols.sort_by(|a, b| compare_symbols(a, b));
        assert_eq!(symbols, ["AAPL", "aapl", "Goog", "msft"]);
    }
}
