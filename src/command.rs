use crate::app::App;
use color_eyre::Result;

/// Represents actions that can be performed in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GotoTop,
    GotoBottom,

    // Application Control
    Quit,
    ToggleHelp,
    Cancel,
    Confirm,
    Reload,

    // Search
    ActivateSearchMode,
    DeleteSearchChar,
    ClearSearch,
    SearchHistoryPrevious,
    SearchHistoryNext,

    // History
    ActivateHistoryView,

    // Sort
    ToggleSort,
}

impl Command {
    /// Returns a human-readable description of this command.
    pub fn description(&self) -> &'static str {
        match self {
            // Navigation
            Command::MoveUp => "Move up",
            Command::MoveDown => "Move down",
            Command::PageUp => "Page up",
            Command::PageDown => "Page down",
            Command::GotoTop => "Go to first user",
            Command::GotoBottom => "Go to last user",

            // Application Control
            Command::Quit => "Quit",
            Command::ToggleHelp => "Toggle help",
            Command::Cancel => "Cancel/Exit mode",
            Command::Confirm => "Confirm",
            Command::Reload => "Reload users",

            // Search
            Command::ActivateSearchMode => "Search by name",
            Command::DeleteSearchChar => "Delete character",
            Command::ClearSearch => "Clear search",
            Command::SearchHistoryPrevious => "Previous search from history",
            Command::SearchHistoryNext => "Next search from history",

            // History
            Command::ActivateHistoryView => "View search history",

            // Sort
            Command::ToggleSort => "Sort by name / reset",
        }
    }

    /// Executes this command on the given application.
    pub fn execute(&self, app: &mut App) -> Result<()> {
        match self {
            // Navigation
            Command::MoveUp => app.move_up(),
            Command::MoveDown => app.move_down(),
            Command::PageUp => app.page_up(),
            Command::PageDown => app.page_down(),
            Command::GotoTop => app.goto_top(),
            Command::GotoBottom => app.goto_bottom(),

            // Application Control
            Command::Quit => app.quit(),
            Command::ToggleHelp => app.toggle_help(),
            Command::Cancel => app.cancel(),
            Command::Confirm => app.confirm(),
            Command::Reload => app.reload(),

            // Search
            Command::ActivateSearchMode => app.activate_search_mode(),
            Command::DeleteSearchChar => app.delete_search_char(),
            Command::ClearSearch => app.clear_search(),
            Command::SearchHistoryPrevious => app.search_history_previous(),
            Command::SearchHistoryNext => app.search_history_next(),

            // History
            Command::ActivateHistoryView => app.activate_history_view(),

            // Sort
            Command::ToggleSort => app.toggle_sort(),
        }
        Ok(())
    }
}
