//! UI rendering using ratatui

use contactctl_core::{card_rows, Contact, Detail, DetailKind, TableColumn, ViewMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::app::{App, Mode};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for selected items
const HIGHLIGHT: Color = Color::Yellow;
const SUCCESS: Color = Color::Green;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Card height: seven rows plus borders
const CARD_HEIGHT: u16 = 9;

const HELP_TEXT: &str = "\
Search
  /            focus search (Esc/Enter to leave)
  x, Ctrl+U    clear search

Navigate
  j/k, ↓/↑     select record
  n/p, →/←     next / previous page
  g/G          first / last page
  Tab          next column (full value in status line)

Details
  a            full address
  c, Enter     company info
  Esc          close overlay

  q, Ctrl+C    quit";

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Records
            Constraint::Length(1), // Pager
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_bar(frame, app, chunks[0]);

    if app.loading {
        render_placeholder(frame, chunks[1], "Loading contacts...");
    } else if app.store.visible().is_empty() {
        let text = if app.has_query() {
            "No matches"
        } else {
            "No contacts"
        };
        render_placeholder(frame, chunks[1], text);
    } else {
        match app.view_mode() {
            ViewMode::Table => render_table(frame, app, chunks[1]),
            ViewMode::Cards => render_cards(frame, app, chunks[1]),
        }
    }

    render_pager(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    match app.mode {
        Mode::Detail(kind) => {
            if let Some(contact) = app.selected_contact() {
                render_detail(frame, Detail::new(kind, contact));
            }
        }
        Mode::Help => render_help_overlay(frame),
        _ => {}
    }
}

/// Search input with the clear hint when a query is present
fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == Mode::Search;

    let mut block = Block::default()
        .title(" Contact ")
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(if editing {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(SECONDARY)
        });

    if app.has_query() {
        block = block.title(Line::from(" x: clear ").right_aligned());
    }

    let content = if editing {
        let chars: Vec<char> = app.search_input.chars().collect();
        let before: String = chars[..app.search_cursor].iter().collect();
        let after: String = chars[app.search_cursor..].iter().collect();
        Line::from(format!("{}|{}", before, after))
    } else if app.has_query() {
        Line::from(app.search_input.as_str())
    } else {
        Line::from(Span::styled("Press / to search", Style::default().fg(DIM)))
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));
    let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(DIM)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Wide layout: one row per record
fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(
        TableColumn::ALL
            .iter()
            .map(|col| {
                let style = if *col == app.focused_column {
                    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                };
                Cell::from(col.header()).style(style)
            })
            .collect::<Vec<_>>(),
    );

    let rows: Vec<Row> = app
        .store
        .visible()
        .iter()
        .enumerate()
        .map(|(idx, contact)| {
            let is_selected = idx == app.selected;
            let cells = TableColumn::ALL.iter().map(|col| {
                let cell = Cell::from(col.display(contact));
                if is_selected && *col == app.focused_column {
                    cell.style(Style::default().add_modifier(Modifier::UNDERLINED))
                } else {
                    cell
                }
            });
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(cells).style(style)
        })
        .collect();

    let widths: Vec<Constraint> = TableColumn::ALL
        .iter()
        .map(|col| Constraint::Percentage(col.width_percent()))
        .collect();

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SECONDARY)),
    );

    frame.render_widget(table, area);
}

/// Compact layout: stacked cards, scrolled so the selection stays visible
fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.store.visible();
    let per_screen = (area.height / CARD_HEIGHT).max(1) as usize;
    let start = (app.selected + 1).saturating_sub(per_screen);

    for (slot, (idx, contact)) in visible
        .iter()
        .enumerate()
        .skip(start)
        .take(per_screen)
        .enumerate()
    {
        let y = area.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        render_card(frame, contact, idx == app.selected, card_area);
    }
}

fn render_card(frame: &mut Frame, contact: &Contact, is_selected: bool, area: Rect) {
    let border_style = if is_selected {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    };

    let block = Block::default()
        .title(format!(" {} ", contact.name))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<Line> = card_rows(contact)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_pager(frame: &mut Frame, app: &App, area: Rect) {
    let store = &app.store;
    let line = Line::from(vec![
        Span::styled(
            format!(" Page {} of {} ", store.page() + 1, store.page_count()),
            Style::default().fg(ACCENT),
        ),
        Span::styled(
            format!(
                "· {} of {} contacts  ",
                store.filtered().len(),
                store.all().len()
            ),
            Style::default().fg(DIM),
        ),
        Span::styled("p:prev  n:next", Style::default().fg(DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::Search => Span::styled(
            " SEARCH ",
            Style::default().bg(Color::Magenta).fg(Color::Black),
        ),
        Mode::Detail(_) => {
            Span::styled(" DETAIL ", Style::default().bg(HIGHLIGHT).fg(Color::Black))
        }
        Mode::Help => Span::styled(" HELP ", Style::default().bg(SUCCESS).fg(Color::Black)),
    };

    let help_text = match app.mode {
        Mode::Normal => "j/k:select  n/p:page  /:search  a:address  c:company  ?:help  q:quit",
        Mode::Search => "Type to filter  Ctrl+U:clear  Enter/Esc:done",
        Mode::Detail(_) => "a/c:switch  Esc:close",
        Mode::Help => "any key:close",
    };

    let message = app.status_message.clone().or_else(|| app.tooltip()).unwrap_or_default();

    let line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(DIM)),
        Span::raw("  "),
        Span::styled(message, Style::default().fg(HIGHLIGHT)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Centered rect of at most `width` x `height` inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Address / company overlay
fn render_detail(frame: &mut Frame, detail: Detail<'_>) {
    let rows = detail.rows();
    let popup_area = centered(frame.area(), 60, rows.len() as u16 + 2);

    frame.render_widget(Clear, popup_area);

    let color = match detail.kind {
        DetailKind::Address => HIGHLIGHT,
        DetailKind::Company => SUCCESS,
    };
    let block = Block::default()
        .title(format!(" {} ", detail.heading()))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame) {
    let height = HELP_TEXT.lines().count() as u16 + 2;
    let popup_area = centered(frame.area(), 60, height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help (press any key to close) ")
        .title_style(Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SUCCESS));

    let paragraph = Paragraph::new(HELP_TEXT)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, popup_area);
}
