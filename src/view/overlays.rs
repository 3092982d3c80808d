//! Overlay pages drawn as popups over the main area

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem},
    Frame,
};
use ratatui::widgets::Padding;

use super::content::{flattened_position, Section};
use super::utils::{label_width, render_scrollable_list, truncate_string};
use super::OverlayPage;

/// Popup area centered in `bounds`, leaving a margin on every side
pub fn popup_area(bounds: Rect) -> Rect {
    let width = (bounds.width * 4 / 5).max(20.min(bounds.width));
    let height = (bounds.height * 4 / 5).max(6.min(bounds.height));
    Rect {
        x: bounds.x + bounds.width.saturating_sub(width) / 2,
        y: bounds.y + bounds.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Lines for a set of sections: a bold heading then its rows
pub fn section_lines<'a>(sections: &'a [Section], highlight: Option<usize>, width: usize) -> Vec<ListItem<'a>> {
    let labels = label_width(sections.iter().flat_map(|s| s.rows.iter().map(|r| r.label.as_str())));
    let title_width = (width.saturating_sub(labels + 2) * 55) / 100;

    let mut lines = Vec::new();
    for section in sections {
        lines.push(ListItem::new(Line::from(Span::styled(
            section.heading.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))));
        for row in &section.rows {
            let is_selected = highlight == Some(lines.len());
            let style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
            } else if row.selectable {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let text = format!(
                "{:>lw$} {}  {}",
                row.label,
                truncate_string(&row.title, title_width),
                row.detail,
                lw = labels,
            );
            lines.push(ListItem::new(text).style(style));
        }
    }
    lines
}

pub fn render_overlay_page(frame: &mut Frame, page: &OverlayPage, selected_index: Option<usize>) {
    let area = page.area.intersection(frame.area());
    if area.is_empty() {
        return;
    }

    // Clear the area behind the popup first
    frame.render_widget(Clear, area);

    let highlight = selected_index.and_then(|index| flattened_position(&page.sections, index));
    let lines = section_lines(&page.sections, highlight, area.width.saturating_sub(4) as usize);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} (Esc to close) ", page.title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black));

    render_scrollable_list(frame, area, lines, highlight, block);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered_inside_the_bounds() {
        let area = popup_area(Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(10, 4, 80, 32));

        let tiny = popup_area(Rect::new(0, 0, 10, 4));
        assert_eq!((tiny.width, tiny.height), (10, 4));
    }
}
