use std::future::Future;

use leptos::{prelude::*, task::spawn_local};

use crate::{error::AppResult, filter::filter_records, filter::Searchable};

/// The last fetched list and what happened to the most recent fetch.
///
/// A successful fetch replaces the records wholesale. A failed one only records the
/// error, so the previous snapshot keeps backing the page. Fetches are not ordered:
/// whichever completes last wins, even if it was started first.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedState<T> {
    records: Vec<T>,
    generation: u64,
    last_error: Option<String>,
    dismissed: bool,
}

impl<T> Default for FeedState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            generation: 0,
            last_error: None,
            dismissed: false,
        }
    }
}

impl<T> FeedState<T>
where
    T: Searchable + Clone,
{
    pub fn replace(&mut self, records: Vec<T>) {
        self.records = records;
        self.generation += 1;
        self.last_error = None;
    }

    pub fn fail(&mut self, error: impl ToString) {
        self.last_error = Some(error.to_string());
    }

    pub fn apply(&mut self, result: AppResult<Vec<T>>) {
        match result {
            Ok(records) => self.replace(records),
            Err(e) => self.fail(e),
        }
    }

    /// Hides the last error so the retained snapshot is shown again, even if nothing
    /// was ever fetched.
    pub fn dismiss_error(&mut self) {
        if self.last_error.take().is_some() {
            self.dismissed = true;
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// How many successful fetches have replaced the snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether there is a snapshot to render, possibly an empty one.
    pub fn is_loaded(&self) -> bool {
        self.generation > 0 || self.dismissed
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Always filters the full snapshot, never a previously filtered view.
    pub fn search(&self, query: &str) -> Vec<T> {
        filter_records(&self.records, query)
    }
}

/// Page owned handle to a [`FeedState`] kept in a signal.
pub struct Feed<T>
where
    T: Send + Sync + 'static,
{
    state: RwSignal<FeedState<T>>,
}

impl<T> Clone for Feed<T>
where
    T: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Feed<T> where T: Send + Sync + 'static {}

impl<T> Feed<T>
where
    T: Searchable + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FeedState::default()),
        }
    }

    /// Runs `fetch` in the background and stores its outcome. Errors are logged with `label`.
    pub fn load<F, Fut>(self, label: &'static str, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = AppResult<Vec<T>>> + 'static,
    {
        spawn_local(async move {
            let result = fetch().await;
            match &result {
                Ok(records) => log::info!("{label}: fetched {} records", records.len()),
                Err(e) => log::error!("Error fetching {label}: {e}"),
            }
            // the page may have been torn down while the request was in flight
            if self.state.try_update(|state| state.apply(result)).is_none() {
                log::debug!("{label}: page gone, dropping response");
            }
        });
    }

    /// Whether the owning page has been torn down.
    pub fn is_disposed(self) -> bool {
        self.state.try_with_untracked(|_| ()).is_none()
    }

    pub fn dismiss_error(self) {
        self.state.try_update(FeedState::dismiss_error);
    }

    /// Records matching the query signal, re-derived whenever either changes.
    pub fn visible(self, query: Signal<String>) -> Memo<Vec<T>> {
        let state = self.state;
        Memo::new(move |_| query.with(|query| state.with(|state| state.search(query))))
    }

    pub fn is_loaded(self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(FeedState::is_loaded))
    }

    pub fn last_error(self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.last_error().map(str::to_string)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use stock_alerts_api_types::MonitoredStock;

    fn stock(symbol: &str, company_name: &str) -> MonitoredStock {
        MonitoredStock {
            symbol: symbol.to_string(),
            company_name: Some(company_name.to_string()),
        }
    }

    #[test]
    fn replace_is_wholesale() {
        let mut state = FeedState::default();
        assert!(!state.is_loaded());
        state.replace(vec![stock("A", "Agilent"), stock("B", "Boeing")]);
        state.replace(vec![stock("C", "Citigroup")]);
        assert_eq!(state.records(), &[stock("C", "Citigroup")]);
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn failure_keeps_previous_snapshot() {
        let mut state = FeedState::default();
        state.replace(vec![stock("A", "Agilent")]);
        state.apply(Err(AppError::HttpStatus {
            url: "/stock-alerts".to_string(),
            status: 500,
        }));
        assert_eq!(state.records().len(), 1);
        assert_eq!(state.generation(), 1);
        assert_eq!(
            state.last_error(),
            Some("/stock-alerts responded with HTTP 500")
        );

        state.apply(Ok(vec![]));
        assert!(state.last_error().is_none());
        assert!(state.records().is_empty());
    }

    #[test]
    fn dismissing_an_error_brings_back_the_snapshot() {
        let mut state = FeedState::default();
        state.replace(vec![stock("A", "Agilent")]);
        state.fail("down");
        state.dismiss_error();
        assert!(state.is_loaded());
        assert!(state.last_error().is_none());
        assert_eq!(state.records(), &[stock("A", "Agilent")]);
    }

    #[test]
    fn dismissing_a_first_failure_shows_an_empty_snapshot() {
        let mut state = FeedState::<MonitoredStock>::default();
        state.dismiss_error();
        assert!(!state.is_loaded());
        state.fail("down");
        state.dismiss_error();
        assert!(state.is_loaded());
        assert!(state.records().is_empty());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn disposed_feed_reports_it() {
        let feed = Feed::<MonitoredStock>::new();
        assert!(!feed.is_disposed());
        feed.state.dispose();
        assert!(feed.is_disposed());
    }

    #[test]
    fn searches_always_start_from_the_full_snapshot() {
        let mut state = FeedState::default();
        state.replace(vec![
            stock("AAPL", "Apple"),
            stock("MSFT", "Microsoft"),
            stock("AAL", "American Airlines"),
        ]);
        let narrowed = state.search("aap");
        assert_eq!(narrowed.len(), 1);
        // a broader query after a narrow one still sees every record
        let widened = state.search("a");
        assert_eq!(widened.len(), 2);
        assert_eq!(state.search("").len(), 3);
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn late_stale_response_overwrites_newer_data() {
        // responses are applied in completion order, not request order
        let mut state = FeedState::default();
        let newer = vec![stock("NEW", "Newer")];
        let older = vec![stock("OLD", "Older")];
        state.apply(Ok(newer));
        state.apply(Ok(older.clone()));
        assert_eq!(state.records(), older.as_slice());
        assert_eq!(state.generation(), 2);
    }
}
