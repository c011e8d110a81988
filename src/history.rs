/// History manager for storing and navigating through previous entries.
///
/// Entries are kept most recent first and are unique.
#[derive(Debug, Default, Clone)]
pub struct History<T> {
    /// List of history entries, newest at index 0.
    history: Vec<T>,
    /// Current position when navigating history (None when not navigating).
    index: Option<usize>,
}

impl<T: Clone + PartialEq + Default> History<T> {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            index: None,
        }
    }

    /// Puts an entry at the front, removing an earlier occurrence of it.
    ///
    /// Returns true if the list changed.
    pub fn add(&mut self, entry: T) -> bool {
        self.index = None;

        if self.history.first() == Some(&entry) {
            return false;
        }

        self.history.retain(|existing| existing != &entry);
        self.history.insert(0, entry);
        true
    }

    /// Navigates to the previous (older) entry in history.
    pub fn previous_record(&mut self) -> Option<&T> {
        if self.history.is_empty() {
            return None;
        }

        match self.index {
            None => {
                // start at the front (most recent)
                self.index = Some(0);
                self.history.first()
            }
            Some(i) if i + 1 >= self.history.len() => {
                // Already at oldest entry
                None
            }
            Some(i) => {
                self.index = Some(i + 1);
                self.history.get(i + 1)
            }
        }
    }

    /// Navigates to the next (newer) entry in history.
    pub fn next_record(&mut self) -> Option<&T> {
        match self.index {
            None => None,
            Some(0) => {
                // At newest entry - exit history navigation mode
                self.index = None;
                None
            }
            Some(i) => {
                self.index = Some(i - 1);
                self.history.get(i - 1)
            }
        }
    }

    /// Resets the navigation index to None (exits history navigation mode).
    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Returns whether history navigation is in progress.
    pub fn is_navigating(&self) -> bool {
        self.index.is_some()
    }

    /// Returns a slice of all history entries, most recent first.
    pub fn get_history(&self) -> &[T] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Restores history from a vector of entries ordered most recent first.
    ///
    /// Later duplicates and empty entries are dropped.
    pub fn restore(&mut self, history: Vec<T>) {
        self.history.clear();
        for entry in history {
            if entry != T::default() && !self.history.contains(&entry) {
                self.history.push(entry);
            }
        }
        self.index = None;
    }
}
