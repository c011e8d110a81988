use super::colors::MESSAGE_ERROR_FG;
use crate::app::App;
use ratatui::widgets::{BorderType, Padding};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Calculates a centered popup area within the given rect.
///
/// The popup keeps at least 2 characters margin on all sides.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let min_margin = 2;

    let popup_width = width.min(area.width.saturating_sub(2 * min_margin));
    let popup_height = height.min(area.height.saturating_sub(2 * min_margin));

    Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

impl App {
    /// Renders a centered error popup sized to its message.
    pub(super) fn render_error_popup(&self, error_msg: &str, area: Rect, buf: &mut Buffer) {
        let max_line_width = error_msg.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let line_count = error_msg.lines().count();

        let popup_width = (max_line_width as u16).saturating_add(6);
        let popup_height = (line_count as u16).saturating_add(4);
        let popup_area = popup_area(area, popup_width, popup_height);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(" Error ")
            .title_style(Style::default().fg(MESSAGE_ERROR_FG))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MESSAGE_ERROR_FG))
            .padding(Padding::uniform(1));

        Paragraph::new(error_msg)
            .block(block)
            .alignment(Alignment::Center)
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_area_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(popup_area(area, 50, 10), Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_popup_area_keeps_margin() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(popup_area(area, 80, 40), Rect::new(2, 2, 26, 6));
    }
}
