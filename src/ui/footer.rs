use crate::app::App;
use crate::ui::colors::{FOOTER_BG, LOADING_FG, SEARCH_MODE_BG, SEARCH_MODE_FG, SORTED_FG};
use num_format::{Locale, ToFormattedString};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Longest source label shown before it gets truncated from the left.
const MAX_SOURCE_LENGTH: usize = 48;

impl App {
    /// Formats the selection and match counts for display in footers.
    pub(super) fn format_progression_text(&self) -> String {
        let shown = self.directory.view().len();
        let total = self.directory.original().len();
        let current = if shown > 0 { self.records_list_state.selected_index() + 1 } else { 0 };

        if shown == total {
            format!(
                "{}/{}",
                current.to_formatted_string(&Locale::en),
                total.to_formatted_string(&Locale::en)
            )
        } else {
            format!(
                "{}/{} ({})",
                current.to_formatted_string(&Locale::en),
                shown.to_formatted_string(&Locale::en),
                total.to_formatted_string(&Locale::en)
            )
        }
    }

    fn source_text(&self) -> String {
        let count = self.source_label.chars().count();
        if count > MAX_SOURCE_LENGTH {
            let suffix: String = self.source_label.chars().skip(count - MAX_SOURCE_LENGTH).collect();
            format!(" ...{}", suffix)
        } else {
            format!(" {}", self.source_label)
        }
    }

    pub(super) fn render_default_footer(&self, area: Rect, buf: &mut Buffer) {
        let left = if self.loading {
            Line::from(Span::styled(" Loading...", Style::default().fg(LOADING_FG)))
        } else {
            Line::from(self.source_text())
        };

        let sort_style = if self.directory.is_sorted() {
            Style::default().fg(SORTED_FG).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut middle_parts = vec![
            Span::raw("F1:Help | s:"),
            Span::styled(self.directory.sort_label(), sort_style),
        ];
        if self.directory.is_clearable() {
            middle_parts.push(Span::raw(" | x:Clear"));
        }
        let middle = Line::from(middle_parts).centered();

        let right = Line::from(self.format_progression_text() + " ").right_aligned();

        let footer = Block::default()
            .title_bottom(left)
            .title_bottom(middle)
            .title_bottom(right)
            .style(Style::default().bg(FOOTER_BG));
        footer.render(area, buf);
    }

    pub(super) fn render_search_footer(&self, area: Rect, buf: &mut Buffer) {
        let search_prompt = Line::from(format!("Search: {}", self.directory.search_term())).left_aligned();
        let progression = Line::from(self.format_progression_text() + " ").right_aligned();

        let search_bar = Block::default()
            .title_bottom(search_prompt)
            .title_bottom(progression)
            .style(
                Style::default()
                    .fg(SEARCH_MODE_FG)
                    .bg(SEARCH_MODE_BG)
                    .add_modifier(Modifier::BOLD),
            );

        search_bar.render(area, buf);
    }
}
