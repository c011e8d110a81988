use crate::app::{Overlay, ViewState};
use crate::keybindings::{KeybindingContext, KeybindingRegistry};
use crate::ui::colors::{HELP_BG, HELP_BORDER_FG, HELP_HEADER_FG, HELP_HIGHLIGHT_FG};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};

/// Width of the key column in the help popup.
const KEY_COLUMN_WIDTH: usize = 12;

/// Help popup listing the keybindings of every context.
#[derive(Debug, Default)]
pub struct Help {
    visible: bool,
    sections: Vec<(&'static str, Vec<(String, &'static str)>)>,
}

impl Help {
    /// Builds the help text from the registered bindings.
    pub fn new(registry: &KeybindingRegistry) -> Self {
        let contexts = [
            ("Browse", KeybindingContext::View(ViewState::Browse)),
            ("Search", KeybindingContext::View(ViewState::SearchMode)),
            ("History", KeybindingContext::View(ViewState::HistoryView)),
            ("Error", KeybindingContext::Overlay(Overlay::Error(String::new()))),
        ];

        let sections = contexts
            .into_iter()
            .map(|(title, context)| {
                let bindings = registry
                    .get_keybindings_for_context(&context)
                    .into_iter()
                    .map(|(key, command)| (key, command.description()))
                    .collect();
                (title, bindings)
            })
            .collect();

        Self {
            visible: false,
            sections,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Number of text lines the popup needs.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|(_, bindings)| bindings.len() + 1).sum()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let mut lines = Vec::with_capacity(self.line_count());
        for (title, bindings) in &self.sections {
            lines.push(
                Line::from(*title).style(Style::default().fg(HELP_HEADER_FG).add_modifier(Modifier::BOLD)),
            );
            for (key, description) in bindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", key, width = KEY_COLUMN_WIDTH),
                        Style::default().fg(HELP_HIGHLIGHT_FG),
                    ),
                    Span::raw(*description),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(HELP_BORDER_FG))
            .style(Style::default().bg(HELP_BG));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
