use crate::{
    config::Config,
    directory::DirectoryController,
    event::{AppEvent, Event, EventHandler},
    help::Help,
    keybindings::KeybindingRegistry,
    list_view_state::ListViewState,
    persistence::{HistoryStore, MemoryHistoryStore},
    record::Record,
    source::HttpRecordSource,
};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Rows taken by one user card, separator included.
pub const RECORD_ITEM_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Scrolling through the user cards.
    Browse,
    /// Typing a search term; the list filters as you type.
    SearchMode,
    /// Picking a past search term.
    HistoryView,
}

impl ViewState {
    /// Size of the popup drawn for this view, if any.
    pub fn popup_size(&self) -> Option<(u16, u16)> {
        match self {
            ViewState::HistoryView => Some((50, 16)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Overlay {
    Error(String),
}

impl Overlay {
    /// The overlay with its payload stripped, for keybinding lookups.
    pub fn kind(&self) -> Overlay {
        match self {
            Overlay::Error(_) => Overlay::Error(String::new()),
        }
    }
}

/// Application.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub help: Help,
    pub view_state: ViewState,
    /// View to return to when the history popup closes.
    previous_view: ViewState,
    pub overlay: Option<Overlay>,
    pub events: EventHandler,
    pub keybindings: KeybindingRegistry,
    pub directory: DirectoryController,
    pub records_list_state: ListViewState,
    pub history_list_state: ListViewState,
    /// A fetch is in flight.
    pub loading: bool,
    /// Where records come from, for display.
    pub source_label: String,
}

impl App {
    /// Constructs a new instance of [`App`] from the configuration.
    pub fn new(config: &Config) -> Self {
        let store: Box<dyn HistoryStore> = match config.history_store() {
            Some(store) => {
                info!("Search history at {:?}", store.path());
                Box::new(store)
            }
            None => {
                warn!("No home directory, search history will not be persisted");
                Box::new(MemoryHistoryStore::new())
            }
        };
        let source = Arc::new(HttpRecordSource::new(config.endpoint.clone()));
        let directory = DirectoryController::new(source, store);

        let mut app = Self::with_directory(directory, EventHandler::new());
        app.source_label = config.endpoint.clone();
        app
    }

    /// Constructs an [`App`] around an existing controller and event handler.
    pub fn with_directory(directory: DirectoryController, events: EventHandler) -> Self {
        let keybindings = KeybindingRegistry::new();
        let help = Help::new(&keybindings);

        let mut app = Self {
            running: true,
            help,
            view_state: ViewState::Browse,
            previous_view: ViewState::Browse,
            overlay: None,
            events,
            keybindings,
            directory,
            records_list_state: ListViewState::with_item_height(RECORD_ITEM_HEIGHT),
            history_list_state: ListViewState::new(),
            loading: false,
            source_label: String::new(),
        };
        app.refresh_records();
        app
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.reload();

        while self.running {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            let event = self.events.next().await?;
            self.handle_event(event)?;
        }
        Ok(())
    }

    /// Dispatches one event.
    pub fn handle_event(&mut self, event: Event) -> color_eyre::Result<()> {
        match event {
            Event::Tick => {}
            Event::Crossterm(ratatui::crossterm::event::Event::Key(key_event)) => {
                if key_event.kind == KeyEventKind::Press {
                    self.handle_key_events(key_event)?;
                }
            }
            Event::Crossterm(_) => {}
            Event::App(AppEvent::RecordsLoaded(result)) => self.on_records_loaded(result),
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> color_eyre::Result<()> {
        if let Some(command) = self.keybindings.lookup(&self.view_state, &self.overlay, key_event) {
            debug!("Key {:?} -> {:?}", key_event.code, command);
            return command.execute(self);
        }

        // Unbound printable keys edit the search term
        if self.view_state == ViewState::SearchMode
            && self.overlay.is_none()
            && let KeyCode::Char(c) = key_event.code
            && key_event.modifiers.difference(KeyModifiers::SHIFT).is_empty()
        {
            self.type_search_char(c);
        }
        Ok(())
    }

    /// Starts a fetch on a background task; the result arrives as [`AppEvent::RecordsLoaded`].
    pub fn reload(&mut self) {
        self.overlay = None;
        self.loading = true;

        let source = self.directory.source();
        let sender = self.events.sender();
        tokio::spawn(async move {
            let result = source.fetch_all().await;
            let _ = sender.send(Event::App(AppEvent::RecordsLoaded(result)));
        });
    }

    fn on_records_loaded(&mut self, result: crate::Result<Vec<Record>>) {
        self.loading = false;
        if let Err(e) = self.directory.apply_loaded(result) {
            self.overlay = Some(Overlay::Error(format!(
                "Failed to load users\n{}\n\nShift+R to retry",
                e
            )));
        }
        self.view_changed();
    }

    /// Syncs the record list selection with the current view.
    fn refresh_records(&mut self) {
        self.records_list_state.set_item_count(self.directory.view().len());
    }

    /// Syncs after the view was recomputed, moving the selection to the top.
    fn view_changed(&mut self) {
        self.records_list_state.reset();
        self.refresh_records();
    }

    /// The record under the cursor.
    pub fn selected_record(&self) -> Option<&Record> {
        self.directory.view().get(self.records_list_state.selected_index())
    }

    fn active_list(&mut self) -> &mut ListViewState {
        if self.view_state == ViewState::HistoryView {
            &mut self.history_list_state
        } else {
            &mut self.records_list_state
        }
    }

    pub fn move_up(&mut self) {
        self.active_list().move_up();
    }

    pub fn move_down(&mut self) {
        self.active_list().move_down();
    }

    pub fn page_up(&mut self) {
        self.active_list().page_up();
    }

    pub fn page_down(&mut self) {
        self.active_list().page_down();
    }

    pub fn goto_top(&mut self) {
        self.active_list().select_first();
    }

    pub fn goto_bottom(&mut self) {
        self.active_list().select_last();
    }

    pub fn toggle_help(&mut self) {
        self.help.toggle_visibility();
    }

    pub fn cancel(&mut self) {
        if self.help.is_visible() {
            self.help.toggle_visibility();
            return;
        }
        if self.overlay.take().is_some() {
            return;
        }

        match self.view_state {
            ViewState::SearchMode => {
                self.clear_search();
                self.view_state = ViewState::Browse;
            }
            ViewState::HistoryView => self.view_state = self.previous_view,
            ViewState::Browse => {
                if self.directory.is_clearable() {
                    self.clear_search();
                }
            }
        }
    }

    pub fn confirm(&mut self) {
        if self.overlay.take().is_some() {
            return;
        }

        match self.view_state {
            ViewState::SearchMode => {
                self.directory.commit_search();
                self.view_changed();
                self.view_state = ViewState::Browse;
            }
            ViewState::HistoryView => {
                let selected = self
                    .directory
                    .history()
                    .get(self.history_list_state.selected_index())
                    .cloned();
                if let Some(term) = selected {
                    self.directory.set_typed_term(term);
                    self.directory.commit_search();
                    self.view_changed();
                }
                self.view_state = ViewState::Browse;
            }
            ViewState::Browse => {}
        }
    }

    pub fn activate_search_mode(&mut self) {
        self.directory.reset_recall();
        self.view_state = ViewState::SearchMode;
    }

    pub fn type_search_char(&mut self, c: char) {
        let mut term = self.directory.search_term().to_string();
        term.push(c);
        self.directory.set_typed_term(term);
        self.directory.reset_recall();
        self.view_changed();
    }

    pub fn delete_search_char(&mut self) {
        let mut term = self.directory.search_term().to_string();
        if term.pop().is_some() {
            self.directory.set_typed_term(term);
            self.view_changed();
        }
        self.directory.reset_recall();
    }

    pub fn clear_search(&mut self) {
        self.directory.clear();
        self.view_changed();
    }

    pub fn search_history_previous(&mut self) {
        if self.directory.recall_previous() {
            self.view_changed();
        }
    }

    pub fn search_history_next(&mut self) {
        if self.directory.recall_next() {
            self.view_changed();
        }
    }

    pub fn activate_history_view(&mut self) {
        if self.directory.history().is_empty() {
            return;
        }
        self.history_list_state.set_item_count(self.directory.history().len());
        self.history_list_state.reset();
        self.previous_view = self.view_state;
        self.view_state = ViewState::HistoryView;
    }

    pub fn toggle_sort(&mut self) {
        self.directory.toggle_sort();
        self.view_changed();
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
