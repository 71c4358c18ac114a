// UI rendering logic
//
// All drawing lives here. The draw function reads the surface model and
// app state every frame; visibility of the loading / error / results
// sections follows the surface regions, never separate flags.

use super::app::{App, ContentView, SPINNER_FRAMES};
use crate::logging::LogLevel;
use crate::view::controller::SessionState;
use crate::view::surface::Region;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Five vertical sections: title, input, body, system logs, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Keyword input
            Constraint::Min(10),   // Body - takes remaining space
            Constraint::Length(6), // System logs - fixed height
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_input(f, chunks[1], app);
    render_body(f, chunks[2], app);
    render_logs_panel(f, chunks[3], app);
    render_status(f, chunks[4], app);

    // Blocking alert goes on top of everything
    if let Some(message) = &app.alert {
        render_alert(f, message);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " newsdesk ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "- news search & content generation",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let input = Paragraph::new(Line::from(vec![
        Span::raw(app.input.as_str()),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keyword (Enter to search) "),
    );
    f.render_widget(input, area);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    if app.surface.is_visible(Region::Loading) {
        render_loading(f, area, app);
    } else if app.surface.is_visible(Region::ErrorPanel) {
        render_error(f, area, app);
    } else if app.surface.is_visible(Region::Results) {
        render_results(f, area, app);
    } else {
        let idle = Paragraph::new("Type a keyword and press Enter to search.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(idle, area);
    }
}

fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let keyword = match app.controller.state() {
        SessionState::Loading { keyword } => keyword.as_str(),
        _ => "",
    };
    let spinner = SPINNER_FRAMES[app.spinner_frame];
    let loading = Paragraph::new(Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Yellow)),
        Span::raw(format!(" Searching for \"{}\"...", keyword)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, area);
}

fn render_error(f: &mut Frame, area: Rect, app: &App) {
    let error = Paragraph::new(app.surface.text(Region::ErrorPanel))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error "),
        );
    f.render_widget(error, area);
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(7)])
        .split(area);

    render_filter_bar(f, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_article_list(f, columns[0], app);
    render_content_panel(f, columns[1], app);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();
    for button in app.surface.filter_buttons() {
        let style = if button.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        spans.push(Span::styled(format!(" {} ", button.label), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keywords (Tab to cycle) "),
    );
    f.render_widget(bar, area);
}

fn render_article_list(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for card in app.surface.visible_cards().skip(app.article_scroll) {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&card.title, width),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            truncate_to_width(&card.link, width),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::from(Span::raw(truncate_to_width(
            &card.summary,
            width,
        ))));
        if !card.badges.is_empty() {
            lines.push(Line::from(Span::styled(
                truncate_to_width(&card.badges.join(" "), width),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::default());
    }

    let title = format!(" Articles ({}) ", app.surface.text(Region::ArticleCount));
    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn render_content_panel(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(6)])
        .split(area);

    // Tab header: F1-F4
    let mut spans: Vec<Span> = Vec::new();
    for (index, view) in ContentView::ALL.iter().enumerate() {
        let style = if *view == app.content_view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" F{} {} ", index + 1, view.name()), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let content = match app.content_view.region() {
        Some(region) => Paragraph::new(app.surface.text(region)),
        None => {
            let mut lines: Vec<Line> = Vec::new();
            for card in app.surface.news_cards() {
                lines.push(Line::from(Span::styled(
                    card.title.clone(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::raw(card.content.clone())));
                lines.push(Line::default());
            }
            Paragraph::new(lines)
        }
    };

    let panel = content
        .wrap(Wrap { trim: false })
        .scroll((app.content_scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} (Ctrl+Y to copy) ", app.content_view.name())),
        );
    f.render_widget(panel, rows[1]);
}

fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(visible);

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => Color::Red,
                LogLevel::Warn => Color::Yellow,
                LogLevel::Info => Color::Green,
                LogLevel::Debug => Color::Blue,
                LogLevel::Trace => Color::DarkGray,
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::raw(entry.message.clone()),
            ])
        })
        .collect();

    let logs = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Logs "));
    f.render_widget(logs, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.controller.state().name()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Enter search · Tab filter · F1-F4 panels · ↑/↓ scroll · Ctrl+Y copy · Esc quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

/// Centered blocking alert, dismissed with Enter or Esc
fn render_alert(f: &mut Frame, message: &str) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    let alert = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::raw(message.to_string())).centered(),
        Line::default(),
        Line::from(Span::styled(
            "(Enter to dismiss)",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Notice "),
    );
    f.render_widget(alert, area);
}

/// A centered rect taking the given percentages of the parent area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Truncate to a display width, appending an ellipsis when cut.
/// Width-aware so CJK keywords don't overflow the panel.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings_intact() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn truncate_cuts_long_strings_with_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn truncate_accounts_for_wide_characters() {
        // Each hangul syllable is two columns wide
        let cut = truncate_to_width("로봇로봇로봇", 5);
        assert_eq!(cut, "로봇…");
    }
}
