use std::cell::Cell;
use std::ops::Range;

/// Selection and scrolling for a list whose items all span the same number of rows.
#[derive(Debug)]
pub struct ListViewState {
    selected_index: usize,
    /// Index of the first visible item.
    viewport_offset: usize,
    item_count: usize,
    /// Rows taken by one item, including any separator.
    item_height: usize,
    /// Rows available at the last render. Set from rendering, hence the interior mutability.
    viewport_rows: Cell<usize>,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::with_item_height(1)
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state for items that are `item_height` rows tall.
    pub fn with_item_height(item_height: usize) -> Self {
        Self {
            selected_index: 0,
            viewport_offset: 0,
            item_count: 0,
            item_height: item_height.max(1),
            viewport_rows: Cell::new(0),
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn viewport_offset(&self) -> usize {
        self.viewport_offset
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Records the rows available to the list (called from UI rendering).
    pub fn set_viewport_rows(&self, rows: usize) {
        self.viewport_rows.set(rows);
    }

    /// Number of items that fit in the viewport, at least one.
    pub fn visible_items(&self) -> usize {
        (self.viewport_rows.get() / self.item_height).max(1)
    }

    /// Indices of the items to draw.
    ///
    /// The selection stays visible even when the viewport shrank since the last move.
    pub fn visible_range(&self) -> Range<usize> {
        let visible = self.visible_items();
        let start = if self.selected_index < self.viewport_offset {
            self.selected_index
        } else if self.selected_index >= self.viewport_offset + visible {
            self.selected_index + 1 - visible
        } else {
            self.viewport_offset
        };
        let start = start.min(self.item_count);
        let end = (start + visible).min(self.item_count);
        start..end
    }

    /// Sets the item count, clamping the selection into range.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
        self.adjust_viewport();
    }

    /// Keeps the selected item inside the viewport.
    pub fn adjust_viewport(&mut self) {
        if self.item_count == 0 {
            self.viewport_offset = 0;
            return;
        }

        let visible = self.visible_items();
        if self.selected_index < self.viewport_offset {
            self.viewport_offset = self.selected_index;
        } else if self.selected_index >= self.viewport_offset + visible {
            self.viewport_offset = self.selected_index + 1 - visible;
        }

        let max_offset = self.item_count.saturating_sub(visible);
        self.viewport_offset = self.viewport_offset.min(max_offset);
    }

    pub fn move_up(&mut self) {
        self.select_index(self.selected_index.saturating_sub(1));
    }

    pub fn move_down(&mut self) {
        self.select_index(self.selected_index + 1);
    }

    /// Moves selection up by one screen of items.
    pub fn page_up(&mut self) {
        self.select_index(self.selected_index.saturating_sub(self.visible_items()));
    }

    /// Moves selection down by one screen of items.
    pub fn page_down(&mut self) {
        self.select_index(self.selected_index + self.visible_items());
    }

    pub fn select_first(&mut self) {
        self.select_index(0);
    }

    pub fn select_last(&mut self) {
        self.select_index(self.item_count.saturating_sub(1));
    }

    /// Selects a specific index (clamped to valid range).
    pub fn select_index(&mut self, index: usize) {
        if self.item_count > 0 {
            self.selected_index = index.min(self.item_count - 1);
            self.adjust_viewport();
        }
    }

    /// Moves selection back to the first item.
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.viewport_offset = 0;
    }
}
