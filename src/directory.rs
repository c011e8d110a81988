use crate::error::Result;
use crate::history::History;
use crate::persistence::HistoryStore;
use crate::record::Record;
use crate::source::RecordSource;
use crate::utils::{compare_names, contains_ignore_case};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Phase of the list state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryState {
    /// The view shows `original` in received order.
    #[default]
    Idle,
    /// The view is the name filter of `original` by the current term.
    Filtered,
    /// The view has been sorted by name.
    Sorted,
}

/// Owns the record list, the search term, the search history and the sort flag.
pub struct DirectoryController {
    source: Arc<dyn RecordSource>,
    store: Box<dyn HistoryStore>,
    /// Records as received from the source.
    original: Vec<Record>,
    /// Records currently displayed.
    view: Vec<Record>,
    search_term: String,
    history: History<String>,
    state: DirectoryState,
}

impl DirectoryController {
    /// Creates a controller with an empty dataset and the history held by `store`.
    pub fn new(source: Arc<dyn RecordSource>, store: Box<dyn HistoryStore>) -> Self {
        let mut history = History::new();
        history.restore(store.get());

        Self {
            source,
            store,
            original: Vec::new(),
            view: Vec::new(),
            search_term: String::new(),
            history,
            state: DirectoryState::Idle,
        }
    }

    /// Fetches the records and seeds the dataset with them.
    ///
    /// Returns the number of records loaded. The TUI fetches on a background task instead and
    /// hands the result to [`DirectoryController::apply_loaded`].
    pub async fn load(&mut self) -> Result<usize> {
        let result = self.source.fetch_all().await;
        self.apply_loaded(result)
    }

    /// Applies the outcome of a fetch.
    ///
    /// A failed fetch empties the dataset and hands the error back.
    pub fn apply_loaded(&mut self, result: Result<Vec<Record>>) -> Result<usize> {
        self.state = DirectoryState::Idle;

        match result {
            Ok(records) => {
                info!("Loaded {} records", records.len());
                self.view = records.clone();
                self.original = records;
                Ok(self.original.len())
            }
            Err(e) => {
                warn!("Load failed: {}", e);
                self.original.clear();
                self.view.clear();
                Err(e)
            }
        }
    }

    /// Returns the source records are loaded from.
    pub fn source(&self) -> Arc<dyn RecordSource> {
        Arc::clone(&self.source)
    }

    /// Sets the live search term and filters the view by it.
    pub fn set_typed_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.apply_filter();
    }

    /// Filters by the current term and records the term in history.
    pub fn commit_search(&mut self) {
        self.apply_filter();

        if self.search_term.is_empty() {
            self.history.reset();
            return;
        }

        if self.history.add(self.search_term.clone()) {
            self.persist_history();
        }
    }

    /// Empties the search term and shows the original records in received order.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.view = self.original.clone();
        self.state = DirectoryState::Idle;
        self.history.reset();
        debug!("Cleared search");
    }

    /// Sorts the view by name, or when already sorted, shows the original records again.
    ///
    /// Un-sorting does not bring back the filter that was active before sorting.
    pub fn toggle_sort(&mut self) {
        if self.state == DirectoryState::Sorted {
            self.view = self.original.clone();
            self.state = DirectoryState::Idle;
            debug!("Sort reset to original order");
        } else {
            self.view.sort_by(|a, b| compare_names(&a.name, &b.name));
            self.state = DirectoryState::Sorted;
            debug!("Sorted {} records by name", self.view.len());
        }
    }

    /// Steps to an older history entry and live-filters by it.
    ///
    /// Returns false when there is nothing older.
    pub fn recall_previous(&mut self) -> bool {
        match self.history.previous_record().cloned() {
            Some(term) => {
                self.set_typed_term(term);
                true
            }
            None => false,
        }
    }

    /// Steps to a newer history entry and live-filters by it.
    ///
    /// Moving past the newest entry empties the term.
    pub fn recall_next(&mut self) -> bool {
        if !self.history.is_navigating() {
            return false;
        }

        let term = self.history.next_record().cloned().unwrap_or_default();
        self.set_typed_term(term);
        true
    }

    /// Stops history navigation, e.g. once the operator edits the term by hand.
    pub fn reset_recall(&mut self) {
        self.history.reset();
    }

    pub fn view(&self) -> &[Record] {
        &self.view
    }

    pub fn original(&self) -> &[Record] {
        &self.original
    }

    /// Past search terms, most recent first.
    pub fn history(&self) -> &[String] {
        self.history.get_history()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn state(&self) -> DirectoryState {
        self.state
    }

    pub fn is_sorted(&self) -> bool {
        self.state == DirectoryState::Sorted
    }

    /// Whether there is a search term to clear.
    pub fn is_clearable(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Label for the sort toggle.
    pub fn sort_label(&self) -> &'static str {
        if self.is_sorted() { "Reset" } else { "Sort" }
    }

    fn apply_filter(&mut self) {
        let term = self.search_term.as_str();
        self.view = self
            .original
            .iter()
            .filter(|record| contains_ignore_case(&record.name, term))
            .cloned()
            .collect();
        self.state = DirectoryState::Filtered;
        debug!("Filter {:?} matched {} of {}", term, self.view.len(), self.original.len());
    }

    fn persist_history(&mut self) {
        if let Err(e) = self.store.set(self.history.get_history()) {
            warn!("{}", e);
        }
    }
}

impl std::fmt::Debug for DirectoryController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryController")
            .field("original", &self.original.len())
            .field("view", &self.view.len())
            .field("search_term", &self.search_term)
            .field("history", &self.history)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;
    use crate::persistence::MemoryHistoryStore;
    use crate::record::{Address, Company};
    use crate::source::StaticRecordSource;

    fn record(id: u64, name: &str) -> Record {
        Record {
            id,
            name: name.to_string(),
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
            },
            phone: "1-770-736-8031".to_string(),
            website: "example.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
            },
        }
    }

    fn dataset() -> Vec<Record> {
        vec![
            record(1, "Leanne Graham"),
            record(2, "Ervin Howell"),
            record(3, "Clementine Bauch"),
            record(4, "Patricia Lebsack"),
            record(5, "Chelsey Dietrich"),
        ]
    }

    fn ids(records: &[Record]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    fn controller_with(records: Vec<Record>, store: MemoryHistoryStore) -> DirectoryController {
        let mut controller = DirectoryController::new(Arc::new(StaticRecordSource::new(records.clone())), Box::new(store));
        controller.apply_loaded(Ok(records)).unwrap();
        controller
    }

    fn controller() -> DirectoryController {
        controller_with(dataset(), MemoryHistoryStore::new())
    }

    #[tokio::test]
    async fn test_load_seeds_original_and_view() {
        let mut controller = DirectoryController::new(
            Arc::new(StaticRecordSource::new(dataset())),
            Box::new(MemoryHistoryStore::new()),
        );
        assert!(controller.view().is_empty());
        assert_eq!(controller.state(), DirectoryState::Idle);

        assert_eq!(controller.load().await, Ok(5));
        assert_eq!(ids(controller.original()), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(controller.view()), vec![1, 2, 3, 4, 5]);
        assert!(!controller.is_sorted());
    }

    #[tokio::test]
    async fn test_load_failure_leaves_dataset_empty() {
        let mut controller = DirectoryController::new(
            Arc::new(StaticRecordSource::unavailable("connection refused")),
            Box::new(MemoryHistoryStore::new()),
        );

        let result = controller.load().await;
        assert!(matches!(result, Err(DirectoryError::SourceUnavailable(_))));
        assert!(controller.original().is_empty());
        assert!(controller.view().is_empty());
    }

    #[test]
    fn test_load_resets_sort_flag() {
        let mut controller = controller();
        controller.toggle_sort();
        assert!(controller.is_sorted());

        controller.apply_loaded(Ok(dataset())).unwrap();
        assert!(!controller.is_sorted());
        assert_eq!(ids(controller.view()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_failed_reload_empties_previous_dataset() {
        let mut controller = controller();
        let result = controller.apply_loaded(Err(DirectoryError::SourceUnavailable("503".to_string())));
        assert!(result.is_err());
        assert!(controller.original().is_empty());
        assert!(controller.view().is_empty());
    }

    #[test]
    fn test_typed_term_filters_case_insensitive() {
        let mut controller = controller();
        controller.set_typed_term("CHEL");
        assert_eq!(ids(controller.view()), vec![5]);

        controller.set_typed_term("e");
        assert_eq!(ids(controller.view()), vec![1, 2, 3, 4, 5]);

        controller.set_typed_term("ba");
        assert_eq!(ids(controller.view()), vec![3]);
        assert_eq!(controller.state(), DirectoryState::Filtered);
    }

    #[test]
    fn test_typed_term_empty_yields_all() {
        let mut controller = controller();
        controller.set_typed_term("ervin");
        controller.set_typed_term("");
        assert_eq!(ids(controller.view()), vec![1, 2, 3, 4, 5]);
        assert!(!controller.is_clearable());
    }

    #[test]
    fn test_typed_term_no_match_yields_empty() {
        let mut controller = controller();
        controller.set_typed_term("zzz");
        assert!(controller.view().is_empty());
        assert!(controller.is_clearable());
    }

    #[test]
    fn test_typed_term_filters_original_not_previous_view() {
        let mut controller = controller();
        controller.set_typed_term("ervin");
        controller.set_typed_term("leanne");
        assert_eq!(ids(controller.view()), vec![1]);
    }

    #[test]
    fn test_typed_term_does_not_touch_history() {
        let store = MemoryHistoryStore::new();
        let mut controller = controller_with(dataset(), store.clone());
        controller.set_typed_term("ervin");
        assert!(controller.history().is_empty());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_commit_search_records_and_persists() {
        let store = MemoryHistoryStore::new();
        let mut controller = controller_with(dataset(), store.clone());
        controller.set_typed_term("ann");
        controller.commit_search();

        assert_eq!(controller.history(), &["ann"]);
        assert_eq!(store.snapshot(), vec!["ann"]);
        assert_eq!(ids(controller.view()), vec![1]);
    }

    #[test]
    fn test_commit_search_is_idempotent() {
        let store = MemoryHistoryStore::new();
        let mut controller = controller_with(dataset(), store.clone());
        controller.set_typed_term("ann");
        controller.commit_search();
        controller.commit_search();

        assert_eq!(controller.history(), &["ann"]);
        assert_eq!(store.snapshot(), vec!["ann"]);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_commit_search_moves_existing_term_to_front() {
        let mut controller = controller();
        for term in ["a", "b", "a"] {
            controller.set_typed_term(term);
            controller.commit_search();
        }
        assert_eq!(controller.history(), &["a", "b"]);
    }

    #[test]
    fn test_commit_empty_term_leaves_history_unchanged() {
        let store = MemoryHistoryStore::with_terms(["x"]);
        let mut controller = controller_with(dataset(), store.clone());
        controller.set_typed_term("");
        controller.commit_search();

        assert_eq!(controller.history(), &["x"]);
        assert_eq!(store.write_count(), 0);
        assert_eq!(ids(controller.view()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_commit_search_keeps_literal_case() {
        let mut controller = controller();
        controller.set_typed_term("Ervin");
        controller.commit_search();
        controller.set_typed_term("ervin");
        controller.commit_search();
        assert_eq!(controller.history(), &["ervin", "Ervin"]);
    }

    #[test]
    fn test_history_seeded_from_store() {
        let controller = controller_with(dataset(), MemoryHistoryStore::with_terms(["x", "y"]));
        assert_eq!(controller.history(), &["x", "y"]);
    }

    #[test]
    fn test_new_skips_empty_stored_terms() {
        let controller = controller_with(dataset(), MemoryHistoryStore::with_terms(["", "x"]));
        assert_eq!(controller.history(), &["x"]);
    }

    #[test]
    fn test_toggle_sort_round_trip_from_idle() {
        let mut controller = controller();
        controller.toggle_sort();
        assert_eq!(ids(controller.view()), vec![5, 3, 2, 1, 4]);
        assert!(controller.is_sorted());
        assert_eq!(controller.sort_label(), "Reset");

        controller.toggle_sort();
        assert_eq!(controller.view(), controller.original());
        assert!(!controller.is_sorted());
        assert_eq!(controller.sort_label(), "Sort");
    }

    #[test]
    fn test_toggle_sort_sorts_filtered_view() {
        let mut controller = controller();
        controller.set_typed_term("ch");
        assert_eq!(ids(controller.view()), vec![3, 5]);

        controller.toggle_sort();
        assert_eq!(ids(controller.view()), vec![5, 3]);
        assert_eq!(controller.state(), DirectoryState::Sorted);
    }

    #[test]
    fn test_toggle_sort_orders_accented_names_with_base_letter() {
        let mut controller = controller_with(
            vec![record(1, "Zoe Adams"), record(2, "Émile Zola"), record(3, "Evan Brown")],
            MemoryHistoryStore::new(),
        );
        controller.toggle_sort();
        assert_eq!(ids(controller.view()), vec![2, 3, 1]);
    }

    #[test]
    fn test_untoggle_sort_drops_active_filter() {
        let mut controller = controller();
        controller.set_typed_term("ch");
        controller.toggle_sort();
        controller.toggle_sort();

        assert_eq!(ids(controller.view()), vec![1, 2, 3, 4, 5]);
        assert_eq!(controller.state(), DirectoryState::Idle);
        assert_eq!(controller.search_term(), "ch");
    }

    #[test]
    fn test_typing_while_sorted_returns_to_filtered() {
        let mut controller = controller();
        controller.toggle_sort();
        controller.set_typed_term("e");

        assert_eq!(controller.state(), DirectoryState::Filtered);
        assert!(!controller.is_sorted());
        assert_eq!(ids(controller.view()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_clear_after_filter_and_sort() {
        let store = MemoryHistoryStore::new();
        let mut controller = controller_with(dataset(), store.clone());
        controller.set_typed_term("ch");
        controller.commit_search();
        controller.toggle_sort();

        controller.clear();
        assert_eq!(controller.view(), controller.original());
        assert_eq!(controller.search_term(), "");
        assert!(!controller.is_sorted());
        assert_eq!(controller.state(), DirectoryState::Idle);
        assert_eq!(controller.history(), &["ch"]);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_clear_when_unsorted_stays_unsorted() {
        let mut controller = controller();
        controller.clear();
        assert!(!controller.is_sorted());
        assert_eq!(controller.view(), controller.original());
    }

    #[test]
    fn test_recall_steps_through_history() {
        let controller_store = MemoryHistoryStore::with_terms(["howell", "graham"]);
        let mut controller = controller_with(dataset(), controller_store);

        assert!(controller.recall_previous());
        assert_eq!(controller.search_term(), "howell");
        assert_eq!(ids(controller.view()), vec![2]);

        assert!(controller.recall_previous());
        assert_eq!(controller.search_term(), "graham");
        assert!(!controller.recall_previous());

        assert!(controller.recall_next());
        assert_eq!(controller.search_term(), "howell");

        // Past the newest entry the term is emptied
        assert!(controller.recall_next());
        assert_eq!(controller.search_term(), "");
        assert!(!controller.recall_next());
    }

    #[test]
    fn test_recall_next_without_navigation_is_noop() {
        let mut controller = controller_with(dataset(), MemoryHistoryStore::with_terms(["x"]));
        controller.set_typed_term("ervin");
        assert!(!controller.recall_next());
        assert_eq!(controller.search_term(), "ervin");
    }
}
