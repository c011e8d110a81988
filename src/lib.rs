pub mod app;
pub mod command;
pub mod config;
pub mod directory;
pub mod error;
pub mod event;
pub mod help;
pub mod history;
pub mod keybindings;
pub mod list_view_state;
pub mod logging;
pub mod persistence;
pub mod record;
pub mod source;
pub mod ui;
pub mod utils;

pub use directory::{DirectoryController, DirectoryState};
pub use error::{DirectoryError, Result};
pub use persistence::{FileHistoryStore, HistoryStore, MemoryHistoryStore};
pub use record::{Address, Company, Record};
pub use source::{HttpRecordSource, RecordSource, StaticRecordSource};
