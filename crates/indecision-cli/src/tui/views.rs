use indecision_core::view::PICK_LABEL;
use indecision_core::{KeyValueStore, RandomSource, ViewModel};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{App, InputMode};

pub fn draw_header(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let lines = vec![
        Line::from(view.header.title.as_str()).style(Style::default().fg(Color::Magenta).bold()),
        Line::from(view.header.subtitle.as_str()).style(Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub fn draw_action(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let (style, hint) = if view.has_options {
        (Style::default().fg(Color::Black).bg(Color::Magenta).bold(), "p")
    } else {
        (Style::default().fg(Color::DarkGray), "add an option first")
    };

    let line = Line::from(vec![
        Span::styled(format!(" {PICK_LABEL} "), style),
        Span::raw("  "),
        Span::styled(format!("[{hint}]"), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn draw_options<S, R>(frame: &mut Frame, app: &App<S, R>, view: &ViewModel, area: Rect)
where
    S: KeyValueStore,
    R: RandomSource,
{
    let block = Block::default()
        .title(format!(" Your options ({}) ", view.options.len()))
        .title_bottom(Line::from(" d:remove  D:remove all ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    if let Some(hint) = view.empty_hint() {
        let p = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = view
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(option.as_str(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn draw_input<S, R>(frame: &mut Frame, app: &App<S, R>, area: Rect)
where
    S: KeyValueStore,
    R: RandomSource,
{
    let editing = app.input_mode == InputMode::Editing;
    let border = if app.form.error.is_some() {
        Color::Red
    } else if editing {
        Color::Green
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .title(" Add Option ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(ref error) = app.form.error {
        block = block.title_bottom(
            Line::from(format!(" {error} ")).style(Style::default().fg(Color::Red)),
        );
    }

    let input = Paragraph::new(format!("> {}", app.form.input)).block(block);
    frame.render_widget(input, area);

    if editing {
        // Offset by 2 for "> ", plus 1 for the left border
        let cursor_x = area.x + 1 + 2 + app.form.input.chars().count() as u16;
        if cursor_x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
        }
    }
}

pub fn draw_status_bar<S, R>(frame: &mut Frame, app: &App<S, R>, area: Rect)
where
    S: KeyValueStore,
    R: RandomSource,
{
    let keys = match app.input_mode {
        InputMode::Editing => "Enter:add Esc:done",
        InputMode::Normal => "a:add j/k:move d:remove D:remove all p:pick ?:help q:quit",
    };
    let text = if app.status.is_empty() {
        keys.to_string()
    } else {
        format!("{} | {keys}", app.status)
    };

    let bar = Paragraph::new(text).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

pub fn draw_pick_popup(frame: &mut Frame, choice: &str) {
    let area = centered_rect(50, 30, frame.area());

    let text = vec![
        Line::from(""),
        Line::from(choice).style(Style::default().fg(Color::White).bold()),
        Line::from(""),
        Line::from("Enter to close").style(Style::default().fg(Color::DarkGray)),
    ];

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" The computer says ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  a / i       Add an option"),
        Line::from("  Enter       Submit option (while adding)"),
        Line::from("  Esc         Stop adding / close"),
        Line::from("  j / ↓       Move down"),
        Line::from("  k / ↑       Move up"),
        Line::from("  d / Del     Remove selected"),
        Line::from("  D           Remove all"),
        Line::from("  p / Space   What should I do?"),
        Line::from("  ?           Toggle this help"),
        Line::from("  q           Quit"),
        Line::from("  Ctrl+C      Force quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
