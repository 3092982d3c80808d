//! Layout rendering (inline content, queue panel, command bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{PlaybackStatus, PlayerState, QueueEntry};

use super::content::{flattened_position, InlineView, Section};
use super::overlays::section_lines;
use super::utils::{render_scrollable_list, truncate_string};

/// Draw the inline node's columns side by side.
///
/// `selection` is `(column, index)` when the inline node is the current top.
pub fn render_inline(frame: &mut Frame, area: Rect, inline: Option<&InlineView>, selection: Option<(usize, usize)>) {
    let Some(inline) = inline else {
        let empty = Paragraph::new("Nothing loaded yet. Press s to search, : for commands, h for help.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
        frame.render_widget(empty, area);
        return;
    };

    if inline.columns.is_empty() {
        let empty = Paragraph::new("No results")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", inline.title))
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(empty, area);
        return;
    }

    let count = inline.columns.len();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area);

    // Selection past the last column lands on the last one
    let active = selection.map(|(column, index)| (column.min(count - 1), index));

    for (i, column) in inline.columns.iter().enumerate() {
        let is_active = active.is_some_and(|(c, _)| c == i);
        let selected_index = active.filter(|_| is_active).map(|(_, index)| index);
        render_column(frame, chunks[i], inline, column, selected_index, is_active);
    }
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    inline: &InlineView,
    column: &Section,
    selected_index: Option<usize>,
    is_active: bool,
) {
    let columns = std::slice::from_ref(column);
    let highlight = selected_index.and_then(|index| flattened_position(columns, index));
    let border_style = if is_active {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let title = if inline.columns.len() == 1 {
        format!(" {} ", inline.title)
    } else {
        format!(" {} ", column.heading)
    };
    let lines = section_lines(columns, highlight, area.width.saturating_sub(4) as usize);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style);
    render_scrollable_list(frame, area, lines, highlight, block);
}

pub fn render_queue(frame: &mut Frame, area: Rect, queue: &[QueueEntry], selected: Option<usize>) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = queue
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if i == 0 { "▶" } else { " " };
            let text = format!("{} {}", marker, truncate_string(&entry.title, width.saturating_sub(2)));
            let style = if selected == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
            } else if i == 0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let border_style = if selected.is_some() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Queue ({}) ", queue.len()))
        .padding(Padding::horizontal(1))
        .border_style(border_style);
    render_scrollable_list(frame, area, items, selected, block);
}

/// Bottom bar: the command being typed, or the last command output
pub fn render_command_bar(
    frame: &mut Frame,
    area: Rect,
    command_line: Option<&str>,
    last_output: Option<&str>,
    player: PlayerState,
    pages_opened: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Command line
            Constraint::Length(22), // Player state
        ])
        .split(area);

    let (text, style) = match (command_line, last_output) {
        (Some(line), _) => (format!(":{}", line), Style::default().fg(Color::Green)),
        (None, Some(output)) => (output.to_string(), Style::default().fg(Color::White)),
        (None, None) => (String::new(), Style::default()),
    };
    let command = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(match pages_opened {
                0 => " Command ".to_string(),
                n => format!(" Command [{} open] ", n),
            })
            .padding(Padding::horizontal(1))
            .border_style(if command_line.is_some() {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(command, chunks[0]);

    let status = match player.status {
        PlaybackStatus::Playing => "▶ Playing",
        PlaybackStatus::Paused => "⏸ Paused",
        PlaybackStatus::Stopped => "⏹ Stopped",
    };
    let state = Paragraph::new(format!("{}  {}%", status, player.volume))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Player "));
    frame.render_widget(state, chunks[1]);
}
