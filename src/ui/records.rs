use super::colors::{
    HISTORY_BORDER_FG, HISTORY_HIGHLIGHT_BG, NO_MATCH_FG, RECORD_LABEL_FG, RECORD_NAME_FG, RECORD_SELECTED_BG,
    RIGHT_ARROW, SCROLLBAR_FG,
};
use crate::app::{App, RECORD_ITEM_HEIGHT};
use crate::record::Record;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, List, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, StatefulWidget, Widget,
    },
};

impl App {
    pub(super) fn render_records(&self, area: Rect, buf: &mut Buffer) {
        self.records_list_state.set_viewport_rows(area.height as usize);

        let records = self.directory.view();
        if records.is_empty() {
            let message = if self.loading {
                Line::from("Loading users...")
            } else if self.directory.original().is_empty() {
                Line::from("No users loaded")
            } else {
                Line::from("No users match").style(Style::default().fg(NO_MATCH_FG))
            };
            Paragraph::new(message).alignment(Alignment::Center).render(area, buf);
            return;
        }

        let selected = self.records_list_state.selected_index();
        let mut lines = Vec::with_capacity(area.height as usize);
        for index in self.records_list_state.visible_range() {
            lines.extend(record_card(&records[index], index == selected));
        }

        Paragraph::new(lines).render(area, buf);
    }

    pub(super) fn render_scrollbar(&self, area: Rect, buf: &mut Buffer) {
        let total = self.directory.view().len();
        if total == 0 {
            return;
        }

        let mut scrollbar_state = ScrollbarState::new(total)
            .position(self.records_list_state.selected_index())
            .viewport_content_length(self.records_list_state.visible_items());

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(SCROLLBAR_FG));

        StatefulWidget::render(scrollbar, area, buf, &mut scrollbar_state);
    }

    pub(super) fn render_history_list(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(" Search history ")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(HISTORY_BORDER_FG));

        self.history_list_state
            .set_viewport_rows(area.height.saturating_sub(2) as usize);

        let range = self.history_list_state.visible_range();
        let items: Vec<Line> = self.directory.history()[range.clone()]
            .iter()
            .map(|term| Line::from(format!(" {}", term)))
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(self.history_list_state.selected_index() - range.start));

        let history_list = List::new(items)
            .block(block)
            .highlight_symbol(RIGHT_ARROW)
            .highlight_style(Style::default().bg(HISTORY_HIGHLIGHT_BG).add_modifier(Modifier::BOLD));

        StatefulWidget::render(history_list, area, buf, &mut list_state);
    }
}

/// Builds the lines of one user card, separator line included.
fn record_card(record: &Record, selected: bool) -> Vec<Line<'_>> {
    let label = Style::default().fg(RECORD_LABEL_FG);
    let field = |name: &'static str, value: String| Line::from(vec![Span::styled(name, label), Span::raw(value)]);

    let marker = if selected { RIGHT_ARROW } else { "  " };
    let mut lines = vec![
        Line::from(vec![
            Span::raw(marker),
            Span::styled(
                record.name.as_str(),
                Style::default().fg(RECORD_NAME_FG).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  @{}", record.username), label),
        ]),
        field("  Email:   ", format!("{}  Phone: {}", record.email, record.phone)),
        field("  Address: ", record.address.single_line()),
        field("  Website: ", record.website.clone()),
        field("  Company: ", record.company.name.clone()),
        Line::default(),
    ];
    debug_assert_eq!(lines.len(), RECORD_ITEM_HEIGHT);

    if selected {
        for line in lines.iter_mut().take(RECORD_ITEM_HEIGHT - 1) {
            line.style = Style::default().bg(RECORD_SELECTED_BG);
        }
    }
    lines
}
