use ratatui::style::Color;

/// Symbol used to indicate the selected card.
pub const RIGHT_ARROW: &str = "▶ ";

/// Common colors
pub const GRAY_COLOR: Color = Color::Indexed(237);
pub const BLACK_COLOR: Color = Color::Indexed(234);
pub const WHITE_COLOR: Color = Color::White;

// Footer
pub const FOOTER_BG: Color = GRAY_COLOR;
pub const LOADING_FG: Color = Color::Yellow;

// Scrollbar
pub const SCROLLBAR_FG: Color = GRAY_COLOR;

// Search
pub const SEARCH_MODE_FG: Color = BLACK_COLOR;
pub const SEARCH_MODE_BG: Color = Color::Yellow;
pub const NO_MATCH_FG: Color = Color::Red;

// Sort indicator
pub const SORTED_FG: Color = Color::Green;

// Record cards
pub const RECORD_NAME_FG: Color = Color::Cyan;
pub const RECORD_LABEL_FG: Color = Color::Gray;
pub const RECORD_SELECTED_BG: Color = GRAY_COLOR;

// History
pub const HISTORY_BORDER_FG: Color = Color::Yellow;
pub const HISTORY_HIGHLIGHT_BG: Color = GRAY_COLOR;

// Help
pub const HELP_BG: Color = Color::Blue;
pub const HELP_BORDER_FG: Color = Color::White;
pub const HELP_HEADER_FG: Color = Color::Yellow;
pub const HELP_HIGHLIGHT_FG: Color = Color::LightBlue;

// Messages
pub const MESSAGE_ERROR_FG: Color = Color::Red;
