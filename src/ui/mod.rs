pub mod colors;
mod footer;
mod popups;
mod records;

use crate::app::{App, Overlay, ViewState};
use colors::{GRAY_COLOR, WHITE_COLOR};
pub use popups::popup_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [top, middle, bottom] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let [records_area, scrollbar_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)]).areas(middle);

        // Title
        let title_middle = Line::from(" Lazydir ").centered();
        let title_right = Line::from(format!("v{}", env!("CARGO_PKG_VERSION")))
            .right_aligned()
            .style(Style::default().fg(WHITE_COLOR));
        let title = Block::default()
            .title_bottom(title_middle)
            .title_bottom(title_right)
            .style(Style::default().bg(GRAY_COLOR));
        title.render(top, buf);

        // Main view
        self.render_records(records_area, buf);
        self.render_scrollbar(scrollbar_area, buf);

        // Footer
        match self.view_state {
            ViewState::SearchMode => self.render_search_footer(bottom, buf),
            _ => self.render_default_footer(bottom, buf),
        }

        // Popups
        if let Some((w, h)) = self.view_state.popup_size() {
            let popup = popup_area(area, w, h);
            if self.view_state == ViewState::HistoryView {
                self.render_history_list(popup, buf);
            }
        }

        // Overlays
        if let Some(Overlay::Error(error_msg)) = &self.overlay {
            self.render_error_popup(error_msg, area, buf);
        }

        // Help popup
        if self.help.is_visible() {
            let help_area = popup_area(area, 52, self.help.line_count() as u16 + 2);
            self.help.render(help_area, buf);
        }
    }
}
